//! The autocomplete session: one cohesive state object driven by host events.
//!
//! [`AutocompleteSession`] owns everything the engine tracks between events:
//! the trigger token, the suggestion source, the selector, the last resolved
//! match, and the advisory caret anchor. The host editor feeds it change
//! notifications and key presses; it answers with resolved commands, render
//! snapshots, and (on commit) a replacement document value.
//!
//! Everything is recomputed synchronously on each event. "A match is active"
//! is exactly `active_match().is_some()`; there is no separate flag to keep
//! in sync.

use crate::caret::{CaretHint, caret_hint};
use crate::committer::{CommitOutcome, commit};
use crate::document::Document;
use crate::keymap::{self, KeyCommand, KeyPress};
use crate::scanner::{MatchSpan, scan};
use crate::selection::DocumentSelection;
use crate::selector::SuggestionSelector;
use crate::source::SuggestionSource;
use tracing::{debug, trace};

/// Outcome of handling a resolved key command.
#[derive(Debug, Clone)]
pub enum CommandOutcome {
    /// The command was not consumed; the host performs its default behavior.
    NotHandled,
    /// The command was consumed without producing a new document.
    Handled,
    /// A commit produced a new document state for the host to adopt.
    Committed(CommitOutcome),
}

/// Advisory snapshot for the rendering collaborator.
///
/// Everything a dropdown needs to draw itself; never read back by the core.
#[derive(Debug, Clone)]
pub struct RenderState<'a> {
    /// Current candidates, in relevance order.
    pub suggestions: &'a [String],
    /// Index of the highlighted candidate, if any.
    pub selected_index: Option<usize>,
    /// Screen-space anchor for the dropdown, if a live selection exists.
    pub caret_hint: Option<CaretHint>,
}

/// Session state for one autocomplete trigger over one host editor.
///
/// # Example
///
/// ```rust
/// use autocomplete_core::{
///     AutocompleteSession, CommandOutcome, Document, DocumentSelection, Key, KeyCommand, KeyPress,
/// };
///
/// let vocabulary = ["getSelection", "getAnchorKey", "getEntityAt", "getAnchorOffset"];
/// let source = move |partial: &str| -> Vec<String> {
///     if partial.is_empty() {
///         return Vec::new();
///     }
///     vocabulary
///         .iter()
///         .filter(|word| word.starts_with(partial))
///         .take(4)
///         .map(|word| word.to_string())
///         .collect()
/// };
///
/// let mut document = Document::new();
/// let block = document.push_block("<>get");
/// let mut session = AutocompleteSession::new("<>", source);
///
/// session.handle_change(&document, Some(&DocumentSelection::collapsed(block, 5)));
/// assert_eq!(session.selector().suggestions().len(), 4);
///
/// let command = session.resolve_key(&KeyPress::new(Key::Enter));
/// assert_eq!(command, KeyCommand::Autocomplete);
///
/// let CommandOutcome::Committed(outcome) = session.handle_command(command, &document) else {
///     panic!("expected a commit");
/// };
/// assert_eq!(outcome.document.block(block).unwrap().text(), "getSelection");
/// ```
pub struct AutocompleteSession<S> {
    trigger: String,
    source: S,
    selector: SuggestionSelector,
    active_match: Option<MatchSpan>,
    caret_hint: Option<CaretHint>,
}

impl<S: SuggestionSource> AutocompleteSession<S> {
    /// Create a session for the given trigger token and suggestion source.
    pub fn new(trigger: impl Into<String>, source: S) -> Self {
        Self {
            trigger: trigger.into(),
            source,
            selector: SuggestionSelector::new(),
            active_match: None,
            caret_hint: None,
        }
    }

    /// The trigger token this session scans for.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// The currently resolved match span, if the cursor sits inside one.
    pub fn active_match(&self) -> Option<&MatchSpan> {
        self.active_match.as_ref()
    }

    /// The suggestion selector.
    pub fn selector(&self) -> &SuggestionSelector {
        &self.selector
    }

    /// The advisory caret anchor from the last change, if any.
    pub fn caret_hint(&self) -> Option<CaretHint> {
        self.caret_hint
    }

    /// Feed a document-or-selection change notification.
    ///
    /// Re-scans from scratch: resolves the match at the selection's focus,
    /// refreshes the suggestion list through the source, and recomputes the
    /// caret anchor. A missing or non-collapsed selection clears the match.
    pub fn handle_change(&mut self, document: &Document, selection: Option<&DocumentSelection>) {
        self.caret_hint = selection.and_then(|sel| caret_hint(document, sel));

        let next_match = selection
            .filter(|sel| sel.is_collapsed())
            .and_then(|sel| scan(document, sel.block, sel.focus, &self.trigger));

        if next_match != self.active_match {
            trace!(active = next_match.is_some(), "trigger match changed");
        }

        self.selector.on_match_changed(next_match.as_ref(), &self.source);
        self.active_match = next_match;
    }

    /// Resolve a raw key press to an autocomplete command.
    pub fn resolve_key(&self, press: &KeyPress) -> KeyCommand {
        keymap::resolve_key(press, self.active_match.is_some())
    }

    /// Handle a resolved command against the current document.
    ///
    /// Navigation commands are handled only while a suggestion is highlighted;
    /// otherwise they report [`CommandOutcome::NotHandled`] so the host editor
    /// performs its default behavior (e.g. moving the text cursor).
    ///
    /// [`KeyCommand::Autocomplete`] commits the highlighted suggestion (or
    /// re-confirms the literal partial text when none is highlighted) and
    /// returns the replacement document for the host to adopt and feed back
    /// through [`handle_change`](Self::handle_change). With no active match it
    /// is a no-op reported as not handled; with a match the document has moved
    /// away from, the key is swallowed and the stale match cleared.
    pub fn handle_command(&mut self, command: KeyCommand, document: &Document) -> CommandOutcome {
        match command {
            KeyCommand::NotHandled => CommandOutcome::NotHandled,
            KeyCommand::PrevSuggestion => {
                if self.selector.move_up() {
                    CommandOutcome::Handled
                } else {
                    CommandOutcome::NotHandled
                }
            }
            KeyCommand::NextSuggestion => {
                if self.selector.move_down() {
                    CommandOutcome::Handled
                } else {
                    CommandOutcome::NotHandled
                }
            }
            KeyCommand::Autocomplete => {
                let Some(span) = self.active_match.clone() else {
                    return CommandOutcome::NotHandled;
                };

                let chosen = self
                    .selector
                    .selected()
                    .map(str::to_string)
                    .unwrap_or_else(|| span.partial_text.clone());

                match commit(document, &span, &chosen) {
                    Ok(outcome) => {
                        self.clear_match();
                        CommandOutcome::Committed(outcome)
                    }
                    Err(err) => {
                        debug!(%err, "commit skipped, span out of date");
                        self.clear_match();
                        CommandOutcome::Handled
                    }
                }
            }
        }
    }

    /// Snapshot for the rendering collaborator.
    pub fn render_state(&self) -> RenderState<'_> {
        RenderState {
            suggestions: self.selector.suggestions(),
            selected_index: self.selector.selected_index(),
            caret_hint: self.caret_hint,
        }
    }

    fn clear_match(&mut self) {
        self.active_match = None;
        self.selector.on_match_changed(None, &self.source);
    }
}
