//! Caller-supplied content fetcher contract

use std::pin::Pin;

use futures::Stream;
use futures::future::LocalBoxFuture;

use super::context::FetchContext;

/// Error type fetchers may fail with
pub type BoxError = Box<dyn std::error::Error + 'static>;

/// Stream of suggestion text chunks, in arrival order
pub type ChunkStream = Pin<Box<dyn Stream<Item = String>>>;

/// What a content fetcher may resolve to
///
/// Resolved explicitly before consumption: either the whole suggestion at
/// once, or a chunk stream the adapter concatenates incrementally so the
/// suggestion grows visibly.
pub enum FetchResult {
    Complete(String),
    Chunked(ChunkStream),
}

impl std::fmt::Debug for FetchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchResult::Complete(text) => f.debug_tuple("Complete").field(text).finish(),
            FetchResult::Chunked(_) => f.debug_tuple("Chunked").field(&"..").finish(),
        }
    }
}

/// Asynchronous suggestion content producer supplied by the host
///
/// Runs on the host's single-threaded event loop, so neither the future nor
/// the fetcher needs to be `Send`.
pub trait ContentFetcher {
    fn fetch(&self, ctx: FetchContext) -> LocalBoxFuture<'static, Result<FetchResult, BoxError>>;
}

/// Any compatible closure is a fetcher
impl<F> ContentFetcher for F
where
    F: Fn(FetchContext) -> LocalBoxFuture<'static, Result<FetchResult, BoxError>>,
{
    fn fetch(&self, ctx: FetchContext) -> LocalBoxFuture<'static, Result<FetchResult, BoxError>> {
        (self)(ctx)
    }
}
