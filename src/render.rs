//! Rendering contract for the host view layer
//!
//! The engine never draws anything; it tells the host what to draw. The
//! suggestion text is decorated with the formatting marks active at the
//! cursor so the ghost text matches the committed text it would become.

use crate::document::TextMarks;
use crate::state::SuggestionState;

/// What the host should render for the current suggestion state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedSuggestion {
    /// Nothing to draw
    Hidden,
    /// Draw the loading affordance
    Loading,
    /// Draw this decorated suggestion text inline at the cursor
    Text(String),
}

/// Resolve suggestion state into render instructions
pub fn render_suggestion(state: &SuggestionState, marks: TextMarks) -> RenderedSuggestion {
    if state.is_loading() {
        return RenderedSuggestion::Loading;
    }
    if state.text().is_empty() {
        return RenderedSuggestion::Hidden;
    }
    RenderedSuggestion::Text(decorate(state.text(), marks))
}

// Bold wraps first, underline last, matching the order the marks nest in
// committed content
fn decorate(text: &str, marks: TextMarks) -> String {
    let mut content = text.to_string();
    if marks.bold {
        content = format!("<b>{content}</b>");
    }
    if marks.italic {
        content = format!("<i>{content}</i>");
    }
    if marks.underline {
        content = format!("<ins>{content}</ins>");
    }
    content
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
