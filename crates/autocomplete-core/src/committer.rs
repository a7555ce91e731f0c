//! The replacement protocol: turn a resolved completion into a new document state.
//!
//! [`commit`] is the only operation in the crate that produces a new
//! [`Document`] value. It never mutates the input document: the previous value
//! remains valid and independent, which is what the host editor's undo history
//! relies on.

use crate::document::{Document, DocumentError};
use crate::entity::{Entity, EntityKey};
use crate::scanner::MatchSpan;
use crate::selection::DocumentSelection;
use tracing::debug;

/// The result of a successful commit.
#[derive(Debug, Clone)]
pub struct CommitOutcome {
    /// The next document state, for the host to adopt.
    pub document: Document,
    /// Collapsed selection immediately after the inserted entity run.
    pub selection: DocumentSelection,
    /// Key of the entity tagging the inserted run.
    pub entity: EntityKey,
}

/// Replace `span` with `chosen`, tagging the inserted run with a fresh
/// immutable token entity.
///
/// The replacement range is `[span.trigger_start, span.match_end)`, i.e. the
/// whole match string, trigger included. The returned selection is collapsed just
/// past the inserted run, so feeding the outcome back through the normal
/// change path re-scans at an entity boundary and reports no match, which is
/// what ends the autocomplete session for that token.
///
/// A span that no longer describes the document (the block is gone, offsets
/// out of range, the trigger or partial text changed underneath, or an entity
/// has appeared inside the span) is reported as a [`DocumentError`]; the
/// session layer treats that as a no-op.
///
/// # Example
///
/// ```rust
/// use autocomplete_core::{commit, scan, Document};
///
/// let mut document = Document::new();
/// let block = document.push_block("<>get");
/// let span = scan(&document, block, 5, "<>").unwrap();
///
/// let outcome = commit(&document, &span, "getEntityAt").unwrap();
/// let next = outcome.document;
/// assert_eq!(next.block(block).unwrap().text(), "getEntityAt");
/// assert_eq!(outcome.selection.focus, 11);
/// // The input document is untouched.
/// assert_eq!(document.block(block).unwrap().text(), "<>get");
/// ```
pub fn commit(
    document: &Document,
    span: &MatchSpan,
    chosen: &str,
) -> Result<CommitOutcome, DocumentError> {
    validate_span(document, span)?;

    let mut next = document.clone();
    let entity = next.create_entity(Entity::token(chosen));
    next.replace_range(
        span.block,
        span.trigger_start,
        span.match_end,
        chosen,
        Some(entity),
    )?;

    let caret = span.trigger_start + chosen.chars().count();
    debug!(
        block = span.block.0,
        start = span.trigger_start,
        end = span.match_end,
        entity = entity.0,
        "committed completion"
    );

    Ok(CommitOutcome {
        document: next,
        selection: DocumentSelection::collapsed(span.block, caret),
        entity,
    })
}

fn validate_span(document: &Document, span: &MatchSpan) -> Result<(), DocumentError> {
    let block = document
        .block(span.block)
        .ok_or(DocumentError::UnknownBlock(span.block))?;

    if span.trigger_start > span.match_start
        || span.match_start > span.match_end
        || span.match_end > block.char_count()
    {
        return Err(DocumentError::InvalidRange {
            start: span.trigger_start,
            end: span.match_end,
        });
    }

    if block.slice(span.trigger_start, span.match_start) != span.trigger_text
        || block.slice(span.match_start, span.match_end) != span.partial_text
    {
        return Err(DocumentError::StaleSpan);
    }

    // The scan never produces a span overlapping an entity; one appearing here
    // means the document moved on since the span was taken.
    let overlapping = block
        .entity_ranges()
        .iter()
        .any(|range| range.overlaps(span.trigger_start, span.match_end));
    if overlapping {
        return Err(DocumentError::StaleSpan);
    }

    Ok(())
}
