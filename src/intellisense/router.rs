use crate::catalog::Catalog;
use crate::utils::EngineConfig;

use super::session::{AppliedSuggestion, SuggestionSession};
use super::token::token_at;

/// Host-recognized event classes delivered to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// Explicit "show suggestions" gesture (Ctrl+Space in the original UI).
    Trigger,
    SelectNext,
    SelectPrev,
    /// Accept the highlighted suggestion (Enter/Tab).
    Apply,
    /// Discard the list without touching the buffer (Escape).
    Dismiss,
    /// Any character-level insert or delete in the buffer.
    Edited,
    FocusLost,
}

/// What the rendering layer should do after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum RouterAction {
    /// The event did not concern the engine; nothing changed.
    Ignored,
    /// A fresh list is open; render it with the first entry highlighted.
    Opened,
    /// The highlight moved to this index.
    Selected(usize),
    /// The list closed with the buffer untouched.
    Closed,
    /// The buffer edit to apply, with the new caret position.
    Applied(AppliedSuggestion),
}

/// Maps raw events to session operations. Owns the open/closed state; the
/// buffer and catalog stay with the host and arrive with every call.
#[derive(Debug, Default)]
pub struct InputRouter {
    session: Option<SuggestionSession>,
    config: EngineConfig,
}

impl InputRouter {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            session: None,
            config,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The live session, for rendering.
    pub fn session(&self) -> Option<&SuggestionSession> {
        self.session.as_ref()
    }

    pub fn handle(
        &mut self,
        event: EditorEvent,
        buffer: &str,
        caret: usize,
        catalog: &Catalog,
    ) -> RouterAction {
        match event {
            EditorEvent::Trigger => self.reopen(buffer, caret, catalog),
            EditorEvent::SelectNext => match self.session.as_mut() {
                Some(session) => {
                    session.select_next();
                    RouterAction::Selected(session.selected_index())
                }
                None => RouterAction::Ignored,
            },
            EditorEvent::SelectPrev => match self.session.as_mut() {
                Some(session) => {
                    session.select_prev();
                    RouterAction::Selected(session.selected_index())
                }
                None => RouterAction::Ignored,
            },
            EditorEvent::Apply => match self.session.take() {
                Some(session) => RouterAction::Applied(session.apply(buffer)),
                None => RouterAction::Ignored,
            },
            EditorEvent::Dismiss | EditorEvent::FocusLost => {
                if self.session.take().is_some() {
                    RouterAction::Closed
                } else {
                    RouterAction::Ignored
                }
            }
            EditorEvent::Edited => {
                if self.session.is_some() {
                    // The list is replaced wholesale at the new caret; the
                    // previous selection is not retained.
                    self.reopen(buffer, caret, catalog)
                } else if self.should_probe(buffer, caret) {
                    match SuggestionSession::open(buffer, caret, catalog) {
                        Some(session) => {
                            self.session = Some(session);
                            RouterAction::Opened
                        }
                        None => RouterAction::Ignored,
                    }
                } else {
                    RouterAction::Ignored
                }
            }
        }
    }

    fn reopen(&mut self, buffer: &str, caret: usize, catalog: &Catalog) -> RouterAction {
        let was_open = self.session.is_some();
        self.session = SuggestionSession::open(buffer, caret, catalog);
        match (&self.session, was_open) {
            (Some(_), _) => RouterAction::Opened,
            (None, true) => RouterAction::Closed,
            (None, false) => RouterAction::Ignored,
        }
    }

    /// The passive re-open probe only fires once the token under the caret
    /// is long enough; the explicit trigger gesture is never gated.
    fn should_probe(&self, buffer: &str, caret: usize) -> bool {
        self.config.auto_trigger
            && token_at(buffer, caret).text.len() >= self.config.auto_trigger_min_chars
    }
}
