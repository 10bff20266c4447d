use serde::{Deserialize, Serialize};

pub mod context;
pub mod router;
pub mod session;
pub mod suggest;
pub mod token;

pub use context::{classify, SqlContext, TABLE_INTRO_KEYWORDS};
pub use router::{EditorEvent, InputRouter, RouterAction};
pub use session::{AppliedSuggestion, SuggestionSession};
pub use suggest::{build_suggestions, MAX_PER_SOURCE};
pub use token::{token_at, TokenSpan};

// SQL keywords for autocomplete
pub const SQL_KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "GROUP BY", "ORDER BY", "JOIN", "LEFT JOIN", "RIGHT JOIN",
    "INNER JOIN", "FULL JOIN", "ON", "AS", "LIMIT", "OFFSET", "AND", "OR", "NOT", "BETWEEN",
    "LIKE", "IN", "IS NULL", "IS NOT NULL", "HAVING", "DISTINCT", "COUNT", "SUM", "AVG", "MIN",
    "MAX", "CAST", "CASE", "WHEN", "THEN", "ELSE", "END", "UNION", "UNION ALL", "DESC", "ASC",
];

/// What a suggestion completes to: a fixed keyword, a known table, or a
/// column from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Keyword,
    Table,
    Column,
}

/// One entry of the suggestion list handed to the rendering layer. `detail`
/// carries the owning table name for qualified column suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Suggestion {
    pub fn keyword(value: &str) -> Self {
        Self {
            kind: SuggestionKind::Keyword,
            value: value.to_string(),
            detail: None,
        }
    }

    pub fn table(value: &str) -> Self {
        Self {
            kind: SuggestionKind::Table,
            value: value.to_string(),
            detail: None,
        }
    }

    pub fn column(value: String, detail: Option<String>) -> Self {
        Self {
            kind: SuggestionKind::Column,
            value,
            detail,
        }
    }
}
