pub mod catalog;
pub mod intellisense;
pub mod utils;

pub use catalog::{
    spawn_column_load, spawn_initial_load, Catalog, CatalogError, CatalogSource, CatalogUpdate,
};
pub use intellisense::{
    build_suggestions, classify, token_at, AppliedSuggestion, EditorEvent, InputRouter,
    RouterAction, SqlContext, Suggestion, SuggestionKind, SuggestionSession, TokenSpan,
    SQL_KEYWORDS,
};
pub use utils::EngineConfig;
