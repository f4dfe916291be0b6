//! Tests for suggestion state transitions

use super::*;
use proptest::prelude::*;

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn test_new_state_is_idle() {
    let state = SuggestionState::new();
    assert!(state.is_idle());
    assert!(!state.is_loading());
    assert!(state.text().is_empty());
    assert!(!state.has_suggestion());
}

#[test]
fn test_start_request_enters_loading() {
    let mut state = SuggestionState::new();
    let id = state.start_request();
    assert_eq!(id, 1);
    assert!(state.is_loading());
    assert!(state.text().is_empty());
    assert!(state.is_current(id));
}

#[test]
fn test_start_request_clears_previous_text() {
    let mut state = SuggestionState::new();
    state.set_value("old suggestion".to_string());
    state.start_request();
    assert!(state.text().is_empty());
    assert!(state.is_loading());
}

#[test]
fn test_request_ids_increment() {
    let mut state = SuggestionState::new();
    assert_eq!(state.start_request(), 1);
    assert_eq!(state.start_request(), 2);
    assert_eq!(state.start_request(), 3);
}

#[test]
fn test_stale_request_id_is_not_current() {
    let mut state = SuggestionState::new();
    let old = state.start_request();
    let new = state.start_request();
    assert!(!state.is_current(old));
    assert!(state.is_current(new));
}

#[test]
fn test_append_chunk_drops_loading() {
    let mut state = SuggestionState::new();
    state.start_request();
    assert!(state.is_loading());

    state.append_chunk("A");
    assert!(!state.is_loading());
    assert_eq!(state.text(), "A");

    state.append_chunk("B");
    state.append_chunk("C");
    assert_eq!(state.text(), "ABC");
    assert!(!state.is_loading());
}

#[test]
fn test_complete_request_stores_text() {
    let mut state = SuggestionState::new();
    let id = state.start_request();
    state.complete_request("Hello".to_string());
    assert_eq!(state.text(), "Hello");
    assert!(!state.is_loading());
    assert!(state.has_suggestion());
    assert!(!state.is_current(id));
}

#[test]
fn test_fail_request_clears_everything() {
    let mut state = SuggestionState::new();
    state.start_request();
    state.append_chunk("partial");
    state.fail_request();
    assert!(state.is_idle());
    assert!(state.text().is_empty());
}

#[test]
fn test_clear_resets_state() {
    let mut state = SuggestionState::new();
    state.start_request();
    state.complete_request("suggestion".to_string());
    state.clear();
    assert!(state.is_idle());
}

#[test]
fn test_set_loading_true_clears_text() {
    let mut state = SuggestionState::new();
    state.set_value("shown".to_string());
    state.set_loading(true);
    assert!(state.is_loading());
    assert!(state.text().is_empty());
}

#[test]
fn test_set_loading_false_keeps_text() {
    let mut state = SuggestionState::new();
    state.set_value("shown".to_string());
    state.set_loading(false);
    assert!(!state.is_loading());
    assert_eq!(state.text(), "shown");
}

// =========================================================================
// Type-ahead narrowing
// =========================================================================

#[test]
fn test_consume_first_char_narrows() {
    let mut state = SuggestionState::new();
    state.set_value("elephant".to_string());

    assert!(state.consume_first_char("e"));
    assert_eq!(state.text(), "lephant");

    assert!(state.consume_first_char("l"));
    assert_eq!(state.text(), "ephant");
}

#[test]
fn test_consume_first_char_case_insensitive() {
    let mut state = SuggestionState::new();
    state.set_value("Elephant".to_string());
    assert!(state.consume_first_char("e"));
    assert_eq!(state.text(), "lephant");
}

#[test]
fn test_consume_first_char_rejects_mismatch() {
    let mut state = SuggestionState::new();
    state.set_value("elephant".to_string());
    assert!(!state.consume_first_char("x"));
    assert_eq!(state.text(), "elephant");
}

#[test]
fn test_consume_first_char_rejects_multi_char_insert() {
    let mut state = SuggestionState::new();
    state.set_value("elephant".to_string());
    assert!(!state.consume_first_char("el"));
    assert_eq!(state.text(), "elephant");
}

#[test]
fn test_consume_first_char_rejects_while_loading() {
    let mut state = SuggestionState::new();
    state.start_request();
    assert!(!state.consume_first_char("e"));
    assert!(state.is_loading());
}

#[test]
fn test_consume_first_char_rejects_empty_suggestion() {
    let mut state = SuggestionState::new();
    assert!(!state.consume_first_char("e"));
}

#[test]
fn test_consume_to_empty_renders_nothing() {
    let mut state = SuggestionState::new();
    state.set_value("ab".to_string());
    assert!(state.consume_first_char("a"));
    assert!(state.consume_first_char("b"));
    assert!(state.text().is_empty());
    assert!(!state.has_suggestion());
}

// =========================================================================
// Property-Based Tests
// =========================================================================

// Property: consuming the full suggestion character by character always
// narrows it to empty without ever rejecting a matching character.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_type_ahead_consumes_whole_suggestion(text in "[a-zA-Z]{1,24}") {
        let mut state = SuggestionState::new();
        state.set_value(text.clone());

        for c in text.chars() {
            let typed = c.to_string();
            prop_assert!(state.consume_first_char(&typed));
        }
        prop_assert!(state.text().is_empty());
    }

    #[test]
    fn prop_mismatched_char_never_mutates(text in "[a-m]{1,24}", typed in "[n-z]") {
        let mut state = SuggestionState::new();
        state.set_value(text.clone());

        prop_assert!(!state.consume_first_char(&typed));
        prop_assert_eq!(state.text(), text);
    }

    // Property: a stale request id can never be current again, no matter how
    // many requests follow it.
    #[test]
    fn prop_stale_ids_stay_stale(extra_requests in 1usize..16) {
        let mut state = SuggestionState::new();
        let stale = state.start_request();

        for _ in 0..extra_requests {
            state.start_request();
        }

        prop_assert!(!state.is_current(stale));
    }
}
