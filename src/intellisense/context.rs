use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::token::TokenSpan;

/// Keywords that put the following word in table-name position.
pub const TABLE_INTRO_KEYWORDS: &[&str] = &["FROM", "JOIN", "INTO", "UPDATE"];

static TABLE_INTRO_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TABLE_INTRO_KEYWORDS.iter().copied().collect());

/// Where the caret's token sits, decided by a local heuristic rather than a
/// parse of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlContext {
    /// `table.prefix`: complete against the named table's columns.
    Qualified { table: String, prefix: String },
    /// The previous word introduces a table name.
    TableName,
    /// Anywhere else: keywords, tables, and every known column.
    General,
}

/// Classifies the token by splitting on its first dot, or by testing the
/// single word immediately before it. Only the first dot splits; a token
/// with more dots keeps the rest inside the prefix. There is no grammar
/// pass, so a token after FROM inside a string literal still reads as table
/// position.
pub fn classify(buffer: &str, span: &TokenSpan) -> SqlContext {
    if let Some((table, prefix)) = span.text.split_once('.') {
        return SqlContext::Qualified {
            table: table.to_string(),
            prefix: prefix.to_string(),
        };
    }

    let word = previous_word(buffer, span.start);
    if TABLE_INTRO_SET.contains(word.to_ascii_uppercase().as_str()) {
        SqlContext::TableName
    } else {
        SqlContext::General
    }
}

/// The run of letters and underscores immediately before `pos`, whitespace
/// skipped.
fn previous_word(buffer: &str, pos: usize) -> &str {
    let bytes = buffer.as_bytes();
    let mut end = pos.min(bytes.len());
    while end > 0 && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && (bytes[start - 1].is_ascii_alphabetic() || bytes[start - 1] == b'_') {
        start -= 1;
    }
    buffer.get(start..end).unwrap_or_default()
}
