//! Ghost text suggestion engine
//!
//! The asynchronous core of an inline autocomplete ("ghost text") feature
//! for a rich text editor: a debounced, single-flight, cancelable fetch
//! state machine that keeps a suggestion's lifecycle consistent with
//! concurrent user edits and cursor movement. The host editor stays an
//! external collaborator behind narrow seams; this crate never renders,
//! reads keyboards, or touches a document model of its own.
//!
//! The engine is single-threaded and cooperative. Fetch tasks are spawned
//! with `tokio::task::spawn_local`, so the controller must be driven from a
//! current-thread runtime inside a `LocalSet`. The host loop forwards edit,
//! selection, and keystroke events to [`GhostTextController`], calls its
//! `tick` every iteration, and renders whatever [`render_suggestion`]
//! returns.

pub mod commands;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod document;
pub mod error;
pub mod fetch;
pub mod render;
pub mod state;


pub use config::{GhostTextConfig, Keystrokes};
pub use controller::GhostTextController;
pub use document::{BufferDocument, DocumentSnapshot, HostDocument, TextMarks};
pub use error::FetchError;
pub use fetch::{
    BoxError, ChunkStream, ContentFetchAdapter, ContentFetcher, FetchContext, FetchEvent,
    FetchResult, FetchTask,
};
pub use render::{RenderedSuggestion, render_suggestion};
pub use state::SuggestionState;
