#![warn(missing_docs)]
//! Autocomplete Core - Headless In-Editor Autocomplete Engine
//!
//! # Overview
//!
//! `autocomplete-core` is a headless autocomplete engine for rich-text editors.
//! It watches a block-structured document as the user types, detects a trigger
//! sequence followed by a partial token, proposes a bounded set of completions,
//! and atomically replaces the trigger-plus-partial span with an immutable,
//! tagged "entity" span containing the chosen completion.
//!
//! It does not involve the host editor widget, the dropdown's visual layout, or
//! any UI framework's event loop; those are external collaborators. The engine
//! is single-threaded, synchronous, and event-driven: every operation runs to
//! completion on the event that receives it, and every change produces a fresh
//! snapshot (no incremental state survives between events).
//!
//! # Core Features
//!
//! - **Trigger Scanning**: backward walk from the cursor resolving the match
//!   span, with committed entities as hard boundaries
//! - **Pluggable Suggestions**: a [`SuggestionSource`] trait with a bounded,
//!   deterministically ordered candidate contract
//! - **Selection State Machine**: clamped, non-wrapping navigation over the
//!   candidate list
//! - **Replacement Protocol**: commit produces a new [`Document`] value tagged
//!   with an immutable token entity; the previous value stays valid for undo
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Session (change + key event handling)      │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Scanner / Selector / Committer             │  ← Autocomplete logic
//! ├─────────────────────────────────────────────┤
//! │  Suggestion Source (pluggable)              │  ← Candidates
//! ├─────────────────────────────────────────────┤
//! │  Document (blocks + entity annotations)     │  ← Data model
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use autocomplete_core::{AutocompleteSession, CommandOutcome, Document, DocumentSelection};
//! use autocomplete_core::{Key, KeyPress};
//!
//! let source = |partial: &str| -> Vec<String> {
//!     if partial.is_empty() {
//!         return Vec::new();
//!     }
//!     ["getSelection", "getAnchorKey", "getEntityAt", "getAnchorOffset"]
//!         .iter()
//!         .filter(|word| word.starts_with(partial))
//!         .map(|word| word.to_string())
//!         .collect()
//! };
//!
//! let mut document = Document::new();
//! let block = document.push_block("<>get");
//! let mut session = AutocompleteSession::new("<>", source);
//!
//! // Every document-or-selection change feeds the session.
//! session.handle_change(&document, Some(&DocumentSelection::collapsed(block, 5)));
//! assert_eq!(session.render_state().suggestions.len(), 4);
//!
//! // Down twice, then accept.
//! for key in [Key::Down, Key::Down, Key::Enter] {
//!     let command = session.resolve_key(&KeyPress::new(key));
//!     match session.handle_command(command, &document) {
//!         CommandOutcome::Committed(outcome) => {
//!             assert_eq!(outcome.document.block(block).unwrap().text(), "getEntityAt");
//!             document = outcome.document;
//!             session.handle_change(&document, Some(&outcome.selection));
//!         }
//!         _ => {}
//!     }
//! }
//!
//! // The inserted entity blocks re-matching; the session is over.
//! assert!(session.active_match().is_none());
//! ```
//!
//! # Module Description
//!
//! - [`document`] - block-structured document model with entity annotations
//! - [`entity`] - entity keys, kinds, mutability, and range tags
//! - [`selection`] - document selection state as delivered by the host
//! - [`scanner`] - backward trigger scanning
//! - [`source`] - the pluggable suggestion source contract
//! - [`selector`] - suggestion selection state machine
//! - [`committer`] - the replacement protocol
//! - [`caret`] - advisory caret anchor for the dropdown
//! - [`keymap`] - key press model and binding resolution
//! - [`session`] - the cohesive per-editor session state object

pub mod caret;
pub mod committer;
pub mod document;
pub mod entity;
pub mod keymap;
pub mod scanner;
pub mod selection;
pub mod selector;
pub mod session;
pub mod source;

pub use caret::{CaretHint, caret_hint};
pub use committer::{CommitOutcome, commit};
pub use document::{Block, BlockId, Document, DocumentError};
pub use entity::{Entity, EntityKey, EntityKind, EntityMutability, EntityRange};
pub use keymap::{Key, KeyCommand, KeyPress, resolve_key};
pub use scanner::{MatchSpan, scan};
pub use selection::DocumentSelection;
pub use selector::SuggestionSelector;
pub use session::{AutocompleteSession, CommandOutcome, RenderState};
pub use source::{MAX_SUGGESTIONS, SuggestionSource};
