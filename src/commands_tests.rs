//! Tests for the command surface

use super::*;
use crate::document::{BufferDocument, TextMarks};

fn context<'a>(
    state: &'a mut SuggestionState,
    document: &'a mut BufferDocument,
) -> CommandContext<'a, BufferDocument> {
    CommandContext { state, document }
}

#[test]
fn test_set_value_stores_suggestion() {
    let mut state = SuggestionState::new();
    let mut doc = BufferDocument::new("");

    SetValueCommand.execute(context(&mut state, &mut doc), "ghost".to_string());

    assert_eq!(state.text(), "ghost");
    assert!(!state.is_loading());
    assert_eq!(doc.text(), "");
}

#[test]
fn test_set_value_replaces_previous() {
    let mut state = SuggestionState::new();
    let mut doc = BufferDocument::new("");

    SetValueCommand.execute(context(&mut state, &mut doc), "first".to_string());
    SetValueCommand.execute(context(&mut state, &mut doc), "second".to_string());

    assert_eq!(state.text(), "second");
}

#[test]
fn test_set_loading_true_clears_shown_text() {
    let mut state = SuggestionState::new();
    let mut doc = BufferDocument::new("");
    state.set_value("shown".to_string());

    SetLoadingCommand.execute(context(&mut state, &mut doc), true);

    assert!(state.is_loading());
    assert!(state.text().is_empty());
}

#[test]
fn test_set_loading_false_only_drops_flag() {
    let mut state = SuggestionState::new();
    let mut doc = BufferDocument::new("");
    state.set_value("shown".to_string());

    SetLoadingCommand.execute(context(&mut state, &mut doc), false);

    assert!(!state.is_loading());
    assert_eq!(state.text(), "shown");
}

#[test]
fn test_insert_commits_at_cursor_with_marks() {
    let mut state = SuggestionState::new();
    let mut doc = BufferDocument::new("Hello ");
    doc.set_marks(TextMarks {
        bold: true,
        ..TextMarks::default()
    });

    InsertCommand.execute(context(&mut state, &mut doc), "world".to_string());

    assert_eq!(doc.text(), "Hello world");
    assert_eq!(doc.cursor(), 11);
}

#[test]
fn test_remove_clears_suggestion_only() {
    let mut state = SuggestionState::new();
    let mut doc = BufferDocument::new("content");
    state.set_value("ghost".to_string());

    RemoveCommand.execute(context(&mut state, &mut doc), ());

    assert!(state.text().is_empty());
    assert_eq!(doc.text(), "content");
}
