//! Backward trigger scanning.
//!
//! Given the current document, a block id, and a cursor offset, [`scan`] walks
//! backward through the block's text one character at a time looking for the
//! trigger token, and resolves the span eligible for replacement. The scan is
//! re-run from scratch on every change: the document may have changed
//! arbitrarily between calls (paste, deletion, cursor jump), so no incremental
//! state is kept.

use crate::document::{BlockId, Document};

/// The resolved region (trigger + partial text) eligible for replacement.
///
/// Offsets are character offsets relative to the block's text. Invariants:
/// `trigger_start <= match_start <= match_end`,
/// `match_start == trigger_start + trigger_text.chars().count()`, and the
/// block text in `[trigger_start, match_start)` equals `trigger_text`.
///
/// A span is only meaningful for the document state it was scanned from; it is
/// recomputed on every change and never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    /// Block containing the match.
    pub block: BlockId,
    /// Character offset of the first trigger character.
    pub trigger_start: usize,
    /// Character offset just past the trigger (start of the partial text).
    pub match_start: usize,
    /// Character offset of the cursor (exclusive end of the partial text).
    pub match_end: usize,
    /// The trigger token as found in the block.
    pub trigger_text: String,
    /// User-typed text between the trigger and the cursor. May be empty.
    pub partial_text: String,
}

/// Scan backward from `cursor_offset` in the given block for `trigger`.
///
/// Walks one character at a time toward the block start, accumulating the
/// visited text. Reports a match as soon as the accumulated text is trigger
/// prefixed; reports no match when the walk falls off the block start, or the
/// moment it reaches a character covered by an existing entity range (entities
/// are hard boundaries; a trigger cannot span into or start before one).
///
/// An unknown block id or a cursor offset beyond the block length also report
/// no match; a cursor immediately after the trigger is a valid match with an
/// empty partial text.
///
/// # Example
///
/// ```rust
/// use autocomplete_core::{scan, Document};
///
/// let mut document = Document::new();
/// let block = document.push_block("note: <>get");
///
/// let span = scan(&document, block, 11, "<>").unwrap();
/// assert_eq!(span.trigger_start, 6);
/// assert_eq!(span.match_start, 8);
/// assert_eq!(span.match_end, 11);
/// assert_eq!(span.partial_text, "get");
/// ```
pub fn scan(
    document: &Document,
    block_id: BlockId,
    cursor_offset: usize,
    trigger: &str,
) -> Option<MatchSpan> {
    if trigger.is_empty() {
        return None;
    }

    let block = document.block(block_id)?;
    if cursor_offset > block.char_count() {
        return None;
    }

    let trigger_len = trigger.chars().count();
    let mut match_string = String::new();
    let mut accumulated = 0usize;
    let mut pos = cursor_offset;

    while pos > 0 {
        let at = pos - 1;

        if block.entity_at(at).is_some() {
            return None;
        }

        let ch = block.char_at(at)?;
        match_string.insert(0, ch);
        accumulated += 1;

        if accumulated >= trigger_len && match_string.starts_with(trigger) {
            let partial_text: String = match_string.chars().skip(trigger_len).collect();
            return Some(MatchSpan {
                block: block_id,
                trigger_start: at,
                match_start: at + trigger_len,
                match_end: cursor_offset,
                trigger_text: trigger.to_string(),
                partial_text,
            });
        }

        pos = at;
    }

    None
}
