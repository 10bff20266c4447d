use crate::catalog::Catalog;

use super::context::SqlContext;
use super::{Suggestion, SuggestionKind, SQL_KEYWORDS};

/// Upper bound per candidate source (keywords, tables, columns), keeping the
/// list bounded on large catalogs.
pub const MAX_PER_SOURCE: usize = 50;

fn starts_with_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Produces the candidate list for one trigger. Matching is case-insensitive
/// prefix only; within each source the catalog's registration order is kept,
/// and a name appearing in several sources (or several tables) is emitted
/// each time it matches.
pub fn build_suggestions(context: &SqlContext, prefix: &str, catalog: &Catalog) -> Vec<Suggestion> {
    let mut items = Vec::new();

    match context {
        SqlContext::Qualified { table, prefix } => {
            // Unknown or not-yet-loaded table degrades to no candidates.
            let columns = catalog.columns(table).unwrap_or(&[]);
            items.extend(
                columns
                    .iter()
                    .filter(|col| starts_with_ignore_case(col, prefix))
                    .take(MAX_PER_SOURCE)
                    .map(|col| Suggestion {
                        kind: SuggestionKind::Column,
                        value: format!("{table}.{col}"),
                        detail: Some(table.clone()),
                    }),
            );
        }
        SqlContext::TableName => {
            items.extend(
                catalog
                    .tables()
                    .iter()
                    .filter(|name| starts_with_ignore_case(name, prefix))
                    .take(MAX_PER_SOURCE)
                    .map(|name| Suggestion::table(name)),
            );
        }
        SqlContext::General => {
            items.extend(
                SQL_KEYWORDS
                    .iter()
                    .filter(|kw| starts_with_ignore_case(kw, prefix))
                    .take(MAX_PER_SOURCE)
                    .map(|kw| Suggestion::keyword(kw)),
            );
            items.extend(
                catalog
                    .tables()
                    .iter()
                    .filter(|name| starts_with_ignore_case(name, prefix))
                    .take(MAX_PER_SOURCE)
                    .map(|name| Suggestion::table(name)),
            );
            // Every loaded column of every table. The owning table is
            // ambiguous here, so the value is bare and there is no detail.
            items.extend(
                catalog
                    .tables()
                    .iter()
                    .flat_map(|name| catalog.columns(name).unwrap_or(&[]).iter())
                    .filter(|col| starts_with_ignore_case(col, prefix))
                    .take(MAX_PER_SOURCE)
                    .map(|col| Suggestion::column(col.clone(), None)),
            );
        }
    }

    items
}
