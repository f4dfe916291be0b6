//! Content fetch module
//!
//! Wraps the caller-supplied asynchronous content fetcher with single-flight
//! cancellation semantics and turns its result, complete or streamed, into
//! fetch events the controller applies to suggestion state.

pub mod adapter;
pub mod context;
pub mod fetcher;

// Re-export public types
pub use adapter::{ContentFetchAdapter, FetchEvent, FetchTask};
pub use context::FetchContext;
pub use fetcher::{BoxError, ChunkStream, ContentFetcher, FetchResult};
