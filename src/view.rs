//! Renders the selection listing. Only names and paths are shown; content is not.

use crate::escape::escape_html;
use crate::record::FileRecord;
use crate::selection::SelectionState;
use std::fmt::Write;

pub const NO_FILES_MESSAGE: &str = "No text files are open.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Html,
}

pub fn render(format: ListFormat, records: &[FileRecord], selection: &SelectionState) -> String {
    match format {
        ListFormat::Text => render_text(records, selection),
        ListFormat::Html => render_html(records, selection),
    }
}

/// One line per record: `[x] 0  main.rs  (src/main.rs)`.
pub fn render_text(records: &[FileRecord], selection: &SelectionState) -> String {
    if records.is_empty() {
        return format!("{NO_FILES_MESSAGE}\n");
    }

    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        let mark = if selection.is_selected(i) { 'x' } else { ' ' };
        let _ = writeln!(out, "[{mark}] {i}  {}  ({})", record.name, record.path);
    }
    out
}

/// Unstyled checkbox list with escaped names and paths.
pub fn render_html(records: &[FileRecord], selection: &SelectionState) -> String {
    if records.is_empty() {
        return format!("<p>{NO_FILES_MESSAGE}</p>\n");
    }

    let mut out = String::from("<ul>\n");
    for (i, record) in records.iter().enumerate() {
        let checked = if selection.is_selected(i) { " checked" } else { "" };
        let _ = writeln!(
            out,
            "  <li><label><input type=\"checkbox\" data-index=\"{i}\"{checked}> <strong>{}</strong> <span>{}</span></label></li>",
            escape_html(&record.name),
            escape_html(&record.path),
        );
    }
    out.push_str("</ul>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<FileRecord> {
        vec![
            FileRecord::new("a.txt", "a.txt", "<secret>"),
            FileRecord::new("<b>.rs", "src/<b>.rs", "x"),
        ]
    }

    #[test]
    fn test_text_listing_marks_selection() {
        let mut sel = SelectionState::initialize(2);
        sel.toggle(1);
        assert_eq!(
            render_text(&records(), &sel),
            "[x] 0  a.txt  (a.txt)\n[ ] 1  <b>.rs  (src/<b>.rs)\n"
        );
    }

    #[test]
    fn test_html_listing_escapes_names_not_content() {
        let sel = SelectionState::initialize(2);
        let html = render_html(&records(), &sel);

        assert!(html.contains("<strong>&lt;b&gt;.rs</strong>"));
        assert!(html.contains("<span>src/&lt;b&gt;.rs</span>"));
        assert!(html.contains("data-index=\"0\" checked"));
        assert!(!html.contains("secret"));
    }

    #[test]
    fn test_empty_listing() {
        let sel = SelectionState::initialize(0);
        assert_eq!(render(ListFormat::Text, &[], &sel), "No text files are open.\n");
        assert_eq!(
            render(ListFormat::Html, &[], &sel),
            "<p>No text files are open.</p>\n"
        );
    }
}
