//! Advisory caret anchor computation.
//!
//! Computes character widths based on UAX #11, measured over grapheme
//! clusters so combining sequences and emoji count once.

use crate::document::Document;
use crate::selection::DocumentSelection;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// An ephemeral screen-space anchor for the suggestion dropdown.
///
/// Purely advisory to the rendering collaborator: never read back by the
/// core, recomputed on every change, and absent when there is no live
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretHint {
    /// Index of the block containing the focus, in document order.
    pub row: usize,
    /// Accumulated cell width (UAX #11) of the block text before the focus.
    pub x: usize,
}

/// Compute the advisory anchor for `selection`, if its block exists.
pub fn caret_hint(document: &Document, selection: &DocumentSelection) -> Option<CaretHint> {
    let row = document.block_index(selection.block)?;
    let block = document.block(selection.block)?;

    let focus = selection.focus.min(block.char_count());
    let prefix = block.slice(0, focus);

    let mut x = 0usize;
    for grapheme in prefix.graphemes(true) {
        x = x.saturating_add(grapheme.width());
    }

    Some(CaretHint { row, x })
}
