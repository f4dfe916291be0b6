//! Suggestion state management
//!
//! Holds the suggestion text and loading flag the rendering layer reads,
//! plus the request-id bookkeeping that filters stale fetch events. Owned
//! exclusively by the controller; mutated only through the transition
//! methods below.

/// State of the current ghost text suggestion
///
/// Request ids increase monotonically; every fetch event carries the id of
/// the request it belongs to, and events whose id is not the in-flight one
/// are ignored. This is what guarantees a superseded fetch can never
/// overwrite state a newer fetch has populated.
#[derive(Debug, Default)]
pub struct SuggestionState {
    /// Suggestion text not yet committed to the document
    text: String,
    /// Whether a fetch is in flight with no content to show yet
    loading: bool,
    /// Id handed to the most recently started request
    request_id: u64,
    /// Id of the request currently allowed to mutate this state
    in_flight_request_id: Option<u64>,
}

impl SuggestionState {
    pub fn new() -> Self {
        SuggestionState::default()
    }

    /// Suggestion text to display (empty when there is none)
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True when there is nothing to render and nothing in flight
    pub fn is_idle(&self) -> bool {
        self.text.is_empty() && !self.loading && self.in_flight_request_id.is_none()
    }

    /// True when a suggestion is shown and can be accepted
    pub fn has_suggestion(&self) -> bool {
        !self.text.is_empty() && !self.loading
    }

    /// Begin a new request: clear any shown text, enter loading, and return
    /// the id the fetch events for this request must carry
    pub(crate) fn start_request(&mut self) -> u64 {
        self.text.clear();
        self.loading = true;
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
        self.request_id
    }

    /// Whether an event with this request id may mutate state
    pub(crate) fn is_current(&self, request_id: u64) -> bool {
        self.in_flight_request_id == Some(request_id)
    }

    /// Append a streamed chunk; loading drops as soon as the first one lands
    pub(crate) fn append_chunk(&mut self, chunk: &str) {
        self.loading = false;
        self.text.push_str(chunk);
    }

    /// Store the settled result and exit loading
    pub(crate) fn complete_request(&mut self, text: String) {
        self.text = text;
        self.loading = false;
        self.in_flight_request_id = None;
    }

    /// A fetch failed: no suggestion available, nothing shown
    pub(crate) fn fail_request(&mut self) {
        self.clear();
    }

    /// Reset to empty and not loading, abandoning any in-flight request
    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.loading = false;
        self.in_flight_request_id = None;
    }

    /// Clear only the shown value, as the remove command does
    pub(crate) fn clear_value(&mut self) {
        self.text.clear();
    }

    /// Store a suggestion value directly, as the set-value command does
    pub(crate) fn set_value(&mut self, value: String) {
        self.text = value;
        self.loading = false;
    }

    /// Flip the loading flag directly, as the set-loading command does.
    /// Entering loading clears the shown text; leaving it keeps the text.
    pub(crate) fn set_loading(&mut self, loading: bool) {
        if loading {
            self.text.clear();
        }
        self.loading = loading;
    }

    /// Try to consume a typed character from the front of the suggestion
    ///
    /// Returns true when `typed` is exactly one character matching the first
    /// character of the shown suggestion case-insensitively; the suggestion
    /// is then narrowed by that character. This is what lets a user type
    /// ahead of a suggestion without triggering a re-fetch.
    pub(crate) fn consume_first_char(&mut self, typed: &str) -> bool {
        if self.loading || self.text.is_empty() {
            return false;
        }

        let mut typed_chars = typed.chars();
        let (Some(typed_char), None) = (typed_chars.next(), typed_chars.next()) else {
            return false;
        };
        let Some(first) = self.text.chars().next() else {
            return false;
        };

        if typed_char.to_lowercase().eq(first.to_lowercase()) {
            self.text = self.text.chars().skip(1).collect();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
