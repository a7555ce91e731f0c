use autocomplete_core::{BlockId, Document, DocumentError, Entity, EntityKey};

#[test]
fn test_push_block_assigns_stable_ids() {
    let mut document = Document::new();
    let first = document.push_block("one");
    let second = document.push_block("two");

    assert_ne!(first, second);
    assert_eq!(document.block_index(first), Some(0));
    assert_eq!(document.block_index(second), Some(1));
    assert_eq!(document.blocks().len(), 2);
}

#[test]
fn test_block_char_access() {
    let mut document = Document::new();
    let block = document.push_block("héllo");
    let block = document.block(block).unwrap();

    assert_eq!(block.char_count(), 5);
    assert_eq!(block.char_at(1), Some('é'));
    assert_eq!(block.char_at(5), None);
    assert_eq!(block.slice(1, 4), "éll");
    assert_eq!(block.slice(4, 2), "");
}

#[test]
fn test_create_entity_attaches_no_range() {
    let mut document = Document::new();
    let block = document.push_block("text");
    let key = document.create_entity(Entity::token("text"));

    assert_eq!(document.entity_count(), 1);
    assert!(document.block(block).unwrap().entity_ranges().is_empty());
    assert!(document.entity_at(block, 0).is_none());
    assert_eq!(document.entity(key).unwrap().text, "text");
}

#[test]
fn test_replace_range_tags_inserted_run() {
    let mut document = Document::new();
    let block = document.push_block("ab XX cd");
    let key = document.create_entity(Entity::token("token"));

    document.replace_range(block, 3, 5, "token", Some(key)).unwrap();
    assert_eq!(document.block(block).unwrap().text(), "ab token cd");
    assert_eq!(document.entity_at(block, 3), Some(key));
    assert_eq!(document.entity_at(block, 7), Some(key));
    assert_eq!(document.entity_at(block, 2), None);
    assert_eq!(document.entity_at(block, 8), None);
}

#[test]
fn test_replace_over_entity_drops_tag_and_collects_entity() {
    let mut document = Document::new();
    let block = document.push_block("one two");
    let key = document.create_entity(Entity::token("one"));
    document.replace_range(block, 0, 3, "one", Some(key)).unwrap();
    assert_eq!(document.entity_count(), 1);

    // Replacing over the whole tagged range removes the tag and, since no
    // other range refers to the entity, the entity itself.
    document.replace_range(block, 0, 3, "1", None).unwrap();
    assert_eq!(document.block(block).unwrap().text(), "1 two");
    assert!(document.block(block).unwrap().entity_ranges().is_empty());
    assert_eq!(document.entity_count(), 0);
    assert!(document.entity(key).is_none());
}

#[test]
fn test_partial_overlap_trims_tag() {
    let mut document = Document::new();
    let block = document.push_block("abcdef");
    let key = document.create_entity(Entity::token("cdef"));
    document.replace_range(block, 2, 6, "cdef", Some(key)).unwrap();

    // Delete "ef": the tag shrinks to the surviving prefix.
    document.replace_range(block, 4, 6, "", None).unwrap();
    assert_eq!(document.block(block).unwrap().text(), "abcd");
    let ranges = document.block(block).unwrap().entity_ranges();
    assert_eq!(ranges.len(), 1);
    assert_eq!((ranges[0].start, ranges[0].end), (2, 4));
    assert_eq!(document.entity_count(), 1);
}

#[test]
fn test_replace_range_validates_inputs() {
    let mut document = Document::new();
    let block = document.push_block("short");

    assert!(matches!(
        document.replace_range(BlockId::new(9), 0, 1, "x", None),
        Err(DocumentError::UnknownBlock(_))
    ));
    assert!(matches!(
        document.replace_range(block, 2, 9, "x", None),
        Err(DocumentError::InvalidRange { .. })
    ));
    assert!(matches!(
        document.replace_range(block, 3, 2, "x", None),
        Err(DocumentError::InvalidRange { .. })
    ));
    assert!(matches!(
        document.replace_range(block, 0, 1, "x", Some(EntityKey::new(5))),
        Err(DocumentError::UnknownEntity(_))
    ));

    // Failed calls leave the document untouched.
    assert_eq!(document.block(block).unwrap().text(), "short");
}

#[test]
fn test_clone_is_independent() {
    let mut document = Document::new();
    let block = document.push_block("original");
    let snapshot = document.clone();

    document.replace_range(block, 0, 8, "changed", None).unwrap();
    assert_eq!(document.block(block).unwrap().text(), "changed");
    assert_eq!(snapshot.block(block).unwrap().text(), "original");
}
