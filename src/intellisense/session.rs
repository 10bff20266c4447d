use crate::catalog::Catalog;

use super::context::classify;
use super::suggest::build_suggestions;
use super::token::token_at;
use super::Suggestion;

/// The result of accepting a suggestion: the full replacement text and the
/// caret offset the host should restore focus to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedSuggestion {
    pub text: String,
    pub caret: usize,
}

/// The live suggestion list: items, the highlighted entry, and the buffer
/// range an apply would replace. Exists only while open; an empty candidate
/// list never becomes a session, so `items` is always non-empty and
/// `selected` stays in range.
#[derive(Debug, Clone)]
pub struct SuggestionSession {
    items: Vec<Suggestion>,
    selected: usize,
    token_start: usize,
    token_end: usize,
}

impl SuggestionSession {
    /// Runs the full pipeline (locate, classify, generate) at the caret.
    /// `None` when nothing matches.
    pub fn open(buffer: &str, caret: usize, catalog: &Catalog) -> Option<Self> {
        let span = token_at(buffer, caret);
        let context = classify(buffer, &span);
        let items = build_suggestions(&context, &span.text, catalog);
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            selected: 0,
            token_start: span.start,
            token_end: span.end,
        })
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &Suggestion {
        &self.items[self.selected]
    }

    /// `(start, end)` of the token, fixed at trigger time.
    pub fn token_range(&self) -> (usize, usize) {
        (self.token_start, self.token_end)
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.items.len() - 1) % self.items.len();
    }

    /// Splices the highlighted value over the trigger-time token range and
    /// places the caret at the end of the insertion. A qualified column
    /// suggestion carries its `table.` part inside the value, so the dot is
    /// inserted verbatim.
    pub fn apply(&self, buffer: &str) -> AppliedSuggestion {
        let value = &self.selected().value;
        let start = self.token_start.min(buffer.len());
        let end = self.token_end.clamp(start, buffer.len());

        let mut text = String::with_capacity(buffer.len() + value.len());
        text.push_str(buffer.get(..start).unwrap_or_default());
        text.push_str(value);
        text.push_str(buffer.get(end..).unwrap_or_default());

        AppliedSuggestion {
            text,
            caret: start + value.len(),
        }
    }
}
