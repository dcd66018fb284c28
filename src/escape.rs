/// Escapes a file name or path for display in HTML.
///
/// Only for on-screen listings. Document content and the combined output are
/// never escaped.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_five_characters() {
        assert_eq!(escape_html("<b>&'\""), "&lt;b&gt;&amp;&#39;&quot;");
    }

    #[test]
    fn test_single_pass() {
        // An already-escaped entity is escaped again, not left alone.
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("src/main.rs"), "src/main.rs");
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("ünïcødé/файл.txt"), "ünïcødé/файл.txt");
    }
}
