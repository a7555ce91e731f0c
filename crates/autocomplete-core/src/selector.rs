//! Suggestion selection state machine.

use crate::scanner::MatchSpan;
use crate::source::{MAX_SUGGESTIONS, SuggestionSource};

/// Tracks the active suggestion list and the currently highlighted index.
///
/// Invariant: `selected_index` is `None` exactly when the list is empty;
/// otherwise it is in `0..len`. Navigation clamps at both ends, no wraparound.
///
/// # Example
///
/// ```rust
/// use autocomplete_core::SuggestionSelector;
///
/// let mut selector = SuggestionSelector::new();
/// assert!(selector.suggestions().is_empty());
/// assert_eq!(selector.selected_index(), None);
///
/// // With no active list, navigation is not handled.
/// assert!(!selector.move_down());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SuggestionSelector {
    suggestions: Vec<String>,
    selected_index: Option<usize>,
}

impl SuggestionSelector {
    /// Create an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current suggestion list, in relevance order.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Index of the highlighted suggestion, `None` when the list is empty.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Text of the highlighted suggestion, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected_index
            .and_then(|index| self.suggestions.get(index))
            .map(String::as_str)
    }

    /// Recompute the list for a new match state.
    ///
    /// A `None` span resets to the empty state. Otherwise the source is asked
    /// for candidates for the span's partial text; the result is truncated to
    /// [`MAX_SUGGESTIONS`] and the highlight moves to the top entry.
    pub fn on_match_changed<S>(&mut self, span: Option<&MatchSpan>, source: &S)
    where
        S: SuggestionSource + ?Sized,
    {
        match span {
            None => {
                self.suggestions.clear();
                self.selected_index = None;
            }
            Some(span) => {
                let mut suggestions = source.suggest(&span.partial_text);
                suggestions.truncate(MAX_SUGGESTIONS);
                self.selected_index = if suggestions.is_empty() { None } else { Some(0) };
                self.suggestions = suggestions;
            }
        }
    }

    /// Move the highlight one entry up, clamping at the top.
    ///
    /// Returns whether the command was handled: `false` when no selection is
    /// active, so the host editor can perform its default behavior.
    pub fn move_up(&mut self) -> bool {
        let Some(index) = self.selected_index else {
            return false;
        };
        self.selected_index = Some(index.saturating_sub(1));
        true
    }

    /// Move the highlight one entry down, clamping at the bottom.
    ///
    /// Returns whether the command was handled: `false` when no selection is
    /// active, so the host editor can perform its default behavior.
    pub fn move_down(&mut self) -> bool {
        let Some(index) = self.selected_index else {
            return false;
        };
        let last = self.suggestions.len().saturating_sub(1);
        self.selected_index = Some((index + 1).min(last));
        true
    }
}
