use autocomplete_core::{Document, MAX_SUGGESTIONS, SuggestionSelector, scan};

fn reference_source(partial: &str) -> Vec<String> {
    if partial.is_empty() {
        return Vec::new();
    }
    [
        "getSelection",
        "getAnchorKey",
        "getEntityAt",
        "getAnchorOffset",
    ]
    .iter()
    .filter(|word| word.starts_with(partial))
    .map(|word| word.to_string())
    .collect()
}

fn span_for(text: &str) -> (Document, autocomplete_core::MatchSpan) {
    let mut document = Document::new();
    let block = document.push_block(text);
    let span = scan(&document, block, text.chars().count(), "<>").unwrap();
    (document, span)
}

#[test]
fn test_match_populates_list_and_selects_first() {
    let (_, span) = span_for("<>get");
    let mut selector = SuggestionSelector::new();

    selector.on_match_changed(Some(&span), &reference_source);
    assert_eq!(selector.suggestions().len(), 4);
    assert_eq!(selector.selected_index(), Some(0));
    assert_eq!(selector.selected(), Some("getSelection"));
}

#[test]
fn test_null_match_resets() {
    let (_, span) = span_for("<>get");
    let mut selector = SuggestionSelector::new();

    selector.on_match_changed(Some(&span), &reference_source);
    selector.on_match_changed(None, &reference_source);
    assert!(selector.suggestions().is_empty());
    assert_eq!(selector.selected_index(), None);
    assert_eq!(selector.selected(), None);
}

#[test]
fn test_no_candidates_means_no_selection() {
    let (_, span) = span_for("<>zzz");
    let mut selector = SuggestionSelector::new();

    selector.on_match_changed(Some(&span), &reference_source);
    assert!(selector.suggestions().is_empty());
    assert_eq!(selector.selected_index(), None);
}

#[test]
fn test_empty_partial_means_no_selection() {
    let (_, span) = span_for("<>");
    let mut selector = SuggestionSelector::new();

    selector.on_match_changed(Some(&span), &reference_source);
    assert!(selector.suggestions().is_empty());
    assert_eq!(selector.selected_index(), None);
}

#[test]
fn test_navigation_clamps_at_both_ends() {
    let (_, span) = span_for("<>get");
    let mut selector = SuggestionSelector::new();
    selector.on_match_changed(Some(&span), &reference_source);

    // Clamped at the top.
    assert!(selector.move_up());
    assert_eq!(selector.selected_index(), Some(0));

    for _ in 0..10 {
        assert!(selector.move_down());
    }
    assert_eq!(selector.selected_index(), Some(3));

    // Idempotent at the bottom.
    assert!(selector.move_down());
    assert_eq!(selector.selected_index(), Some(3));

    assert!(selector.move_up());
    assert_eq!(selector.selected_index(), Some(2));
}

#[test]
fn test_navigation_without_selection_not_handled() {
    let mut selector = SuggestionSelector::new();

    assert!(!selector.move_up());
    assert!(!selector.move_down());
    assert_eq!(selector.selected_index(), None);
}

#[test]
fn test_selector_truncates_overlong_source_results() {
    let (_, span) = span_for("<>x");
    let oversized = |_: &str| -> Vec<String> {
        (0..20).map(|i| format!("x{i}")).collect()
    };

    let mut selector = SuggestionSelector::new();
    selector.on_match_changed(Some(&span), &oversized);
    assert_eq!(selector.suggestions().len(), MAX_SUGGESTIONS);
    assert_eq!(selector.selected_index(), Some(0));
}

#[test]
fn test_index_always_in_bounds() {
    let (_, span) = span_for("<>get");
    let mut selector = SuggestionSelector::new();
    selector.on_match_changed(Some(&span), &reference_source);

    for _ in 0..50 {
        selector.move_down();
        let index = selector.selected_index().unwrap();
        assert!(index < selector.suggestions().len());
    }
    for _ in 0..50 {
        selector.move_up();
        let index = selector.selected_index().unwrap();
        assert!(index < selector.suggestions().len());
    }
}
