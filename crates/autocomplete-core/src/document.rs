//! Document model: ordered text blocks with entity annotations.
//!
//! A [`Document`] is an ordered sequence of text blocks. Each block has a stable
//! identifier and plain-text content; a contiguous character range within one
//! block may be tagged with an [`Entity`]. Entities live in a document-level map
//! from [`EntityKey`] to [`Entity`] plus per-block range tags, keeping entity
//! identity decoupled from any rendering concern.
//!
//! The autocomplete core only reads documents handed to it by the host editor
//! and produces fresh [`Document`] values through the replacement protocol
//! ([`crate::committer`]). Block text is stored in a [`Rope`], so cloning a
//! document for the next state is cheap and the previous value stays valid for
//! the host's undo history.
//!
//! All offsets are character offsets (Unicode scalar values), matching the rest
//! of the crate.

use crate::entity::{Entity, EntityKey, EntityRange};
use ropey::Rope;
use std::collections::BTreeMap;

/// Stable identifier of a block within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub u64);

impl BlockId {
    /// Create a block id from a raw numeric identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Document error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The block id does not name a block of this document.
    UnknownBlock(BlockId),
    /// Invalid character range within a block.
    InvalidRange {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
    },
    /// The entity key does not name an entity of this document.
    UnknownEntity(EntityKey),
    /// A match span no longer describes the block's current text.
    StaleSpan,
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::UnknownBlock(block) => {
                write!(f, "Unknown block: {}", block.0)
            }
            DocumentError::InvalidRange { start, end } => {
                write!(f, "Invalid range: {}..{}", start, end)
            }
            DocumentError::UnknownEntity(key) => {
                write!(f, "Unknown entity: {}", key.0)
            }
            DocumentError::StaleSpan => {
                write!(f, "Match span no longer describes the block text")
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// One text block: stable id, content rope, and sorted entity range tags.
#[derive(Debug, Clone)]
pub struct Block {
    id: BlockId,
    text: Rope,
    /// Entity range tags, kept sorted by start offset.
    entity_ranges: Vec<EntityRange>,
}

impl Block {
    /// Create a new block with the given id and content.
    pub fn new(id: BlockId, text: &str) -> Self {
        Self {
            id,
            text: Rope::from_str(text),
            entity_ranges: Vec::new(),
        }
    }

    /// Stable identifier of this block.
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Full block text.
    pub fn text(&self) -> String {
        self.text.to_string()
    }

    /// Block length in characters.
    pub fn char_count(&self) -> usize {
        self.text.len_chars()
    }

    /// Character at `offset`, if in range.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get_char(offset)
    }

    /// Text of the character range `[start, end)`. Empty when the range is
    /// empty or out of bounds.
    pub fn slice(&self, start: usize, end: usize) -> String {
        match self.text.get_slice(start..end) {
            Some(slice) => slice.to_string(),
            None => String::new(),
        }
    }

    /// Entity range tags of this block, sorted by start offset.
    pub fn entity_ranges(&self) -> &[EntityRange] {
        &self.entity_ranges
    }

    /// Key of the entity whose range contains `offset`, if any.
    pub fn entity_at(&self, offset: usize) -> Option<EntityKey> {
        self.entity_ranges
            .iter()
            .find(|range| range.contains(offset))
            .map(|range| range.key)
    }

    fn insert_entity_range(&mut self, range: EntityRange) {
        let pos = self
            .entity_ranges
            .binary_search_by_key(&range.start, |r| r.start)
            .unwrap_or_else(|pos| pos);
        self.entity_ranges.insert(pos, range);
    }

    /// Update range tags for a deletion of `[start, end)`. Returns the keys of
    /// ranges that were dropped entirely.
    fn update_ranges_for_deletion(&mut self, start: usize, end: usize) -> Vec<EntityKey> {
        let delta = end - start;
        let mut removed = Vec::new();

        self.entity_ranges.retain_mut(|range| {
            if range.end <= start {
                // Range is before the deletion, unaffected.
                true
            } else if range.start >= end {
                // Range is after the deletion, move forward.
                range.start -= delta;
                range.end -= delta;
                true
            } else if range.start >= start && range.end <= end {
                // Range is completely within the deletion, drop it.
                removed.push(range.key);
                false
            } else if range.start < start && range.end > end {
                // Range spans the deletion, shrink.
                range.end -= delta;
                true
            } else if range.start < start {
                // Range partially deleted (end part).
                range.end = start;
                true
            } else {
                // Range partially deleted (start part).
                range.start = start;
                range.end -= delta;
                true
            }
        });

        removed
    }

    /// Update range tags for an insertion of `len` characters at `pos`.
    fn update_ranges_for_insertion(&mut self, pos: usize, len: usize) {
        for range in &mut self.entity_ranges {
            if range.start >= pos {
                range.start += len;
                range.end += len;
            } else if range.end > pos {
                // Range spans the insertion point, extend end position.
                range.end += len;
            }
        }
    }
}

/// An ordered sequence of text blocks with entity annotations.
///
/// # Example
///
/// ```rust
/// use autocomplete_core::Document;
///
/// let mut document = Document::new();
/// let block = document.push_block("hello world");
/// assert_eq!(document.block(block).unwrap().text(), "hello world");
/// assert_eq!(document.block(block).unwrap().char_count(), 11);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    blocks: Vec<Block>,
    entities: BTreeMap<EntityKey, Entity>,
    next_entity_key: u64,
    next_block_id: u64,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new block with the given content; returns its id.
    pub fn push_block(&mut self, text: &str) -> BlockId {
        let id = BlockId::new(self.next_block_id);
        self.next_block_id += 1;
        self.blocks.push(Block::new(id, text));
        id
    }

    /// All blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Block with the given id, if present.
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Index of the block with the given id in document order.
    pub fn block_index(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    /// Entity with the given key, if present.
    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(&key)
    }

    /// Number of entities in the document.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Key of the entity covering `offset` in the given block, if any.
    pub fn entity_at(&self, block: BlockId, offset: usize) -> Option<EntityKey> {
        self.block(block).and_then(|b| b.entity_at(offset))
    }

    /// Register a new entity and return its key. Attaches no range tag: the
    /// document content is untouched until a replace is applied with this key.
    pub fn create_entity(&mut self, entity: Entity) -> EntityKey {
        let key = EntityKey::new(self.next_entity_key);
        self.next_entity_key += 1;
        self.entities.insert(key, entity);
        key
    }

    /// Replace the character range `[start, end)` of `block` with `text`,
    /// optionally tagging the whole inserted run with `entity`.
    ///
    /// Range tags of the block are adjusted for the edit: tags entirely inside
    /// the replaced range are dropped (and their entities removed from the
    /// document once no range refers to them), tags after it shift by the
    /// length delta, and overlapping tags are trimmed.
    pub fn replace_range(
        &mut self,
        block: BlockId,
        start: usize,
        end: usize,
        text: &str,
        entity: Option<EntityKey>,
    ) -> Result<(), DocumentError> {
        if let Some(key) = entity
            && !self.entities.contains_key(&key)
        {
            return Err(DocumentError::UnknownEntity(key));
        }

        let index = self
            .block_index(block)
            .ok_or(DocumentError::UnknownBlock(block))?;
        let target = &mut self.blocks[index];

        if start > end || end > target.text.len_chars() {
            return Err(DocumentError::InvalidRange { start, end });
        }

        let mut dropped = Vec::new();
        if start < end {
            target.text.remove(start..end);
            dropped = target.update_ranges_for_deletion(start, end);
        }

        let inserted_len = text.chars().count();
        if inserted_len > 0 {
            target.text.insert(start, text);
            target.update_ranges_for_insertion(start, inserted_len);
        }

        if let Some(key) = entity {
            target.insert_entity_range(EntityRange::new(start, start + inserted_len, key));
        }

        // Drop map entries for entities whose last range tag disappeared.
        for key in dropped {
            let still_tagged = self
                .blocks
                .iter()
                .any(|b| b.entity_ranges.iter().any(|r| r.key == key));
            if !still_tagged {
                self.entities.remove(&key);
            }
        }

        Ok(())
    }
}
