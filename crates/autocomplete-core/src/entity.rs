//! Entity annotation data model.
//!
//! Entities represent metadata attached to a contiguous character range within one
//! block, without owning the text underneath. Creating an entity never changes
//! document content; the tagged text only changes when an explicit replace is
//! applied over its range.
//!
//! The autocomplete engine uses entities to mark committed completions: the
//! inserted run is tagged with an `Immutable` `Token` entity, which the trigger
//! scanner then treats as a hard boundary.

/// A unique key for an entity within one document lineage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityKey(pub u64);

impl EntityKey {
    /// Create an entity key from a raw numeric identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// A coarse entity kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A committed completion token.
    Token,
    /// A custom, integration-defined kind.
    Custom(u32),
}

/// Whether the host editor may edit text under the entity's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityMutability {
    /// The tagged range is edited as a unit: it is replaced or removed whole,
    /// never partially modified.
    Immutable,
    /// The tagged range may be edited freely.
    Mutable,
}

/// Entity payload: kind, mutability, and the text the entity carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// A coarse entity kind.
    pub kind: EntityKind,
    /// Mutability of the tagged range.
    pub mutability: EntityMutability,
    /// Opaque payload text (for completion tokens, the committed completion).
    pub text: String,
}

impl Entity {
    /// Create a new entity.
    pub fn new(kind: EntityKind, mutability: EntityMutability, text: impl Into<String>) -> Self {
        Self {
            kind,
            mutability,
            text: text.into(),
        }
    }

    /// Create an immutable completion-token entity carrying `text`.
    pub fn token(text: impl Into<String>) -> Self {
        Self::new(EntityKind::Token, EntityMutability::Immutable, text)
    }
}

/// A half-open character-offset range (`start..end`) within one block, tagged
/// with an entity key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRange {
    /// Range start offset (inclusive), in Unicode scalar values (`char`) from the start of the block.
    pub start: usize,
    /// Range end offset (exclusive), in Unicode scalar values (`char`) from the start of the block.
    pub end: usize,
    /// Key of the entity tagging this range.
    pub key: EntityKey,
}

impl EntityRange {
    /// Create a new entity range.
    pub fn new(start: usize, end: usize, key: EntityKey) -> Self {
        Self { start, end, key }
    }

    /// Check if the range contains a specific position
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check if two ranges overlap
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }
}
