//! Combines selected records into one document.
//!
//! Each record becomes a section:
//!
//! ```text
//! // ===== File: {path} =====
//!
//! {content}
//! ```
//!
//! Sections are joined by a single blank line. Content is written verbatim.

use crate::record::FileRecord;

/// Opening part of a section header, directly followed by the record's path.
pub const HEADER_PREFIX: &str = "// ===== File: ";

/// Closing part of a section header.
pub const HEADER_SUFFIX: &str = " =====";

/// Placed between two sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Formats a single record as a section: header line, blank line, raw content.
pub fn section(record: &FileRecord) -> String {
    format!(
        "{HEADER_PREFIX}{}{HEADER_SUFFIX}\n\n{}",
        record.path, record.content
    )
}

/// Combines records, in the order given, into one document.
///
/// An empty input yields an empty string.
///
/// ```rust
/// use tabmerge::{FileRecord, combine};
///
/// let records = [
///     FileRecord::new("a.txt", "a.txt", "hello"),
///     FileRecord::new("b.txt", "b.txt", "world"),
/// ];
/// assert_eq!(
///     combine(&records),
///     "// ===== File: a.txt =====\n\nhello\n\n// ===== File: b.txt =====\n\nworld"
/// );
/// ```
pub fn combine<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a FileRecord>,
{
    records
        .into_iter()
        .map(section)
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}
