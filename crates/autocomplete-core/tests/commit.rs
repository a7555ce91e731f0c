use autocomplete_core::{
    Document, DocumentError, Entity, EntityKind, EntityMutability, commit, scan,
};

#[test]
fn test_commit_replaces_whole_match_string() {
    let mut document = Document::new();
    let block = document.push_block("<>get");
    let span = scan(&document, block, 5, "<>").unwrap();

    let outcome = commit(&document, &span, "getEntityAt").unwrap();
    assert_eq!(outcome.document.block(block).unwrap().text(), "getEntityAt");
}

#[test]
fn test_commit_tags_inserted_run_with_immutable_token() {
    let mut document = Document::new();
    let block = document.push_block("<>get");
    let span = scan(&document, block, 5, "<>").unwrap();

    let outcome = commit(&document, &span, "getEntityAt").unwrap();
    let next = outcome.document;

    let ranges = next.block(block).unwrap().entity_ranges();
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].start, 0);
    assert_eq!(ranges[0].end, 11);
    assert_eq!(ranges[0].key, outcome.entity);

    let entity = next.entity(outcome.entity).unwrap();
    assert_eq!(entity.kind, EntityKind::Token);
    assert_eq!(entity.mutability, EntityMutability::Immutable);
    assert_eq!(entity.text, "getEntityAt");
}

#[test]
fn test_commit_places_cursor_after_entity() {
    let mut document = Document::new();
    let block = document.push_block("say <>ge now");
    let span = scan(&document, block, 6 + 2, "<>").unwrap();

    let outcome = commit(&document, &span, "getSelection").unwrap();
    assert_eq!(
        outcome.document.block(block).unwrap().text(),
        "say getSelection now"
    );
    assert!(outcome.selection.is_collapsed());
    assert_eq!(outcome.selection.block, block);
    assert_eq!(outcome.selection.focus, 4 + 12);
}

#[test]
fn test_commit_never_mutates_input_document() {
    let mut document = Document::new();
    let block = document.push_block("<>get");
    let span = scan(&document, block, 5, "<>").unwrap();

    let outcome = commit(&document, &span, "getEntityAt").unwrap();
    drop(outcome);

    assert_eq!(document.block(block).unwrap().text(), "<>get");
    assert_eq!(document.entity_count(), 0);
    assert!(document.block(block).unwrap().entity_ranges().is_empty());
}

#[test]
fn test_commit_empty_chosen_text() {
    let mut document = Document::new();
    let block = document.push_block("<>");
    let span = scan(&document, block, 2, "<>").unwrap();
    assert_eq!(span.partial_text, "");

    let outcome = commit(&document, &span, "").unwrap();
    let next = outcome.document;
    assert_eq!(next.block(block).unwrap().text(), "");
    assert_eq!(outcome.selection.focus, 0);

    // An empty entity range never blocks a later scan at that position.
    assert!(next.entity_at(block, 0).is_none());
}

#[test]
fn test_commit_shifts_later_entity_ranges() {
    let mut document = Document::new();
    let block = document.push_block("<>ge and done");
    let key = document.create_entity(Entity::token("done"));
    document.replace_range(block, 9, 13, "done", Some(key)).unwrap();
    assert_eq!(document.block(block).unwrap().text(), "<>ge and done");

    let span = scan(&document, block, 4, "<>").unwrap();
    let outcome = commit(&document, &span, "getAnchorKey").unwrap();
    let next = outcome.document;
    assert_eq!(next.block(block).unwrap().text(), "getAnchorKey and done");

    // The pre-existing tag moved with the text.
    let tail = next
        .block(block)
        .unwrap()
        .entity_ranges()
        .iter()
        .find(|range| range.key == key)
        .copied()
        .unwrap();
    assert_eq!(tail.start, 17);
    assert_eq!(tail.end, 21);
}

#[test]
fn test_commit_stale_text_is_rejected() {
    let mut document = Document::new();
    let block = document.push_block("<>get");
    let span = scan(&document, block, 5, "<>").unwrap();

    // The document moved on after the scan.
    document.replace_range(block, 2, 5, "other", None).unwrap();

    assert!(matches!(
        commit(&document, &span, "getEntityAt"),
        Err(DocumentError::StaleSpan)
    ));
}

#[test]
fn test_commit_out_of_range_span_is_rejected() {
    let mut document = Document::new();
    let block = document.push_block("<>get");
    let mut span = scan(&document, block, 5, "<>").unwrap();
    span.match_end = 40;

    assert!(matches!(
        commit(&document, &span, "x"),
        Err(DocumentError::InvalidRange { .. })
    ));
}

#[test]
fn test_commit_unknown_block_is_rejected() {
    use autocomplete_core::BlockId;

    let mut document = Document::new();
    let block = document.push_block("<>get");
    let mut span = scan(&document, block, 5, "<>").unwrap();
    span.block = BlockId::new(77);

    assert!(matches!(
        commit(&document, &span, "x"),
        Err(DocumentError::UnknownBlock(id)) if id == BlockId::new(77)
    ));
}
