//! Autocomplete session example
//!
//! Demonstrates the full change → suggest → navigate → commit flow against a
//! small two-block document.

use autocomplete_core::{
    AutocompleteSession, CommandOutcome, Document, DocumentSelection, Key, KeyPress,
};

fn vocabulary_source(partial: &str) -> Vec<String> {
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

fn main() {
    println!("=== Autocomplete session example ===\n");

    let mut document = Document::new();
    let _title = document.push_block("Draft notes");
    let body = document.push_block("The API call is <>get");
    let cursor = DocumentSelection::collapsed(body, 21);

    let mut session = AutocompleteSession::new("<>", vocabulary_source);

    // 1. Every document-or-selection change feeds the session.
    println!("1. Change notification:");
    session.handle_change(&document, Some(&cursor));
    let span = session.active_match().expect("cursor sits inside a match");
    println!("  match span: {}..{} partial='{}'", span.trigger_start, span.match_end, span.partial_text);

    let state = session.render_state();
    println!("  suggestions: {:?}", state.suggestions);
    println!("  highlighted: {:?}", state.selected_index);
    println!("  caret hint:  {:?}\n", state.caret_hint);

    // 2. Arrow keys navigate the dropdown.
    println!("2. Navigation:");
    for key in [Key::Down, Key::Down] {
        let command = session.resolve_key(&KeyPress::new(key));
        session.handle_command(command, &document);
    }
    println!("  highlighted: {:?}\n", session.selector().selected());

    // 3. Enter accepts the highlighted suggestion.
    println!("3. Commit:");
    let command = session.resolve_key(&KeyPress::new(Key::Enter));
    match session.handle_command(command, &document) {
        CommandOutcome::Committed(outcome) => {
            println!("  new text:  '{}'", outcome.document.block(body).unwrap().text());
            println!("  cursor at: {}", outcome.selection.focus);
            println!("  entity:    {:?}", outcome.document.entity(outcome.entity).unwrap());

            // 4. The host adopts the new document and feeds it back.
            document = outcome.document;
            session.handle_change(&document, Some(&outcome.selection));
        }
        other => println!("  unexpected outcome: {other:?}"),
    }

    println!("\n4. After the commit:");
    println!("  active match: {:?}", session.active_match());
    println!("  suggestions:  {:?}", session.render_state().suggestions);
}
