use thiserror::Error;

/// Custom error types for the ghost text fetch path
///
/// Every variant is caught at the adapter/controller boundary and logged;
/// none escape to the host editor.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The fetch was superseded or discarded before it settled.
    /// Expected and silent; the superseding operation owns the state.
    #[error("fetch cancelled")]
    Cancelled,

    /// No content fetcher was supplied at construction.
    /// Reported at fetch time, not at initialization.
    #[error("no content fetcher provided")]
    NotConfigured,

    /// The caller-supplied fetcher failed
    #[error("content fetcher failed: {0}")]
    Fetcher(String),
}
