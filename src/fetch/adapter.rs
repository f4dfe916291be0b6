//! Single-flight content fetch adapter
//!
//! At most one fetch is alive at any time: beginning a new one cancels the
//! previous token before anything else happens. Fetch progress is reported
//! as events on a channel; the controller applies them to suggestion state
//! after filtering by request id.
//!
//! The cancellation token is checked immediately after every await point,
//! before any event is emitted, so an edit that lands while the fetch is
//! suspended wins the race against its continuation.

use std::rc::Rc;

use futures::StreamExt;
use futures::future::LocalBoxFuture;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use super::context::FetchContext;
use super::fetcher::{ContentFetcher, FetchResult};
use crate::document::DocumentSnapshot;
use crate::error::FetchError;

/// Progress events emitted by a running fetch
#[derive(Debug, PartialEq, Eq)]
pub enum FetchEvent {
    /// A streamed chunk arrived
    Chunk { text: String, request_id: u64 },
    /// The fetch settled successfully with this final text
    Complete { text: String, request_id: u64 },
    /// The fetch observed its cancellation token and stopped
    Cancelled { request_id: u64 },
    /// The fetch failed for a reason other than cancellation
    Failed { message: String, request_id: u64 },
}

/// A fetch in flight, ready to be driven by the host's local executor
pub type FetchTask = LocalBoxFuture<'static, ()>;

/// Single-flight, cancelable wrapper around the caller-supplied fetcher
pub struct ContentFetchAdapter {
    fetcher: Option<Rc<dyn ContentFetcher>>,
    in_flight: Option<CancellationToken>,
}

impl ContentFetchAdapter {
    /// Create an adapter; a missing fetcher is reported at fetch time
    pub fn new(fetcher: Option<Rc<dyn ContentFetcher>>) -> Self {
        ContentFetchAdapter {
            fetcher,
            in_flight: None,
        }
    }

    pub fn has_fetcher(&self) -> bool {
        self.fetcher.is_some()
    }

    /// Whether a fetch is alive (started and neither settled nor cancelled)
    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Cancel the in-flight fetch, if any
    ///
    /// Returns true if a token was cancelled. The task observes the token at
    /// its next suspension point and reports `FetchEvent::Cancelled`.
    pub fn cancel_in_flight(&mut self) -> bool {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
            log::debug!("cancelled in-flight ghost text fetch");
            true
        } else {
            false
        }
    }

    /// Forget the in-flight token after its fetch settled on its own
    pub(crate) fn settle(&mut self) {
        self.in_flight = None;
    }

    /// Begin a fetch, superseding any previous one
    ///
    /// Cancels the previous token, binds a fresh one, and returns the task
    /// that runs the fetch to completion. The caller spawns the task on the
    /// event loop (the engine uses `tokio::task::spawn_local`).
    ///
    /// # Errors
    /// `FetchError::NotConfigured` when no fetcher was supplied.
    pub fn begin(
        &mut self,
        document: DocumentSnapshot,
        request_id: u64,
        events_tx: UnboundedSender<FetchEvent>,
    ) -> Result<FetchTask, FetchError> {
        let fetcher = self.fetcher.clone().ok_or(FetchError::NotConfigured)?;

        self.cancel_in_flight();
        let cancel_token = CancellationToken::new();
        self.in_flight = Some(cancel_token.clone());

        let ctx = FetchContext {
            document,
            cancel_token,
        };
        Ok(Box::pin(run_fetch(fetcher, ctx, request_id, events_tx)))
    }
}

/// Drive one fetch to a terminal event
async fn run_fetch(
    fetcher: Rc<dyn ContentFetcher>,
    ctx: FetchContext,
    request_id: u64,
    events_tx: UnboundedSender<FetchEvent>,
) {
    let event = match drive_fetch(fetcher, ctx, request_id, &events_tx).await {
        Ok(text) => FetchEvent::Complete { text, request_id },
        Err(FetchError::Cancelled) => {
            log::debug!("ghost text fetch {} cancelled", request_id);
            FetchEvent::Cancelled { request_id }
        }
        Err(error) => FetchEvent::Failed {
            message: error.to_string(),
            request_id,
        },
    };
    // The receiver disappearing just means the controller is gone
    let _ = events_tx.send(event);
}

async fn drive_fetch(
    fetcher: Rc<dyn ContentFetcher>,
    ctx: FetchContext,
    request_id: u64,
    events_tx: &UnboundedSender<FetchEvent>,
) -> Result<String, FetchError> {
    let token = ctx.cancel_token.clone();
    if token.is_cancelled() {
        return Err(FetchError::Cancelled);
    }

    let result = fetcher.fetch(ctx).await.map_err(|error| {
        if token.is_cancelled() {
            FetchError::Cancelled
        } else {
            FetchError::Fetcher(error.to_string())
        }
    })?;
    if token.is_cancelled() {
        return Err(FetchError::Cancelled);
    }

    match result {
        FetchResult::Complete(text) => Ok(text),
        FetchResult::Chunked(mut stream) => {
            let mut assembled = String::new();
            while let Some(chunk) = stream.next().await {
                // Check between chunks: a mid-stream cancel discards
                // everything assembled so far
                if token.is_cancelled() {
                    return Err(FetchError::Cancelled);
                }
                assembled.push_str(&chunk);
                let _ = events_tx.send(FetchEvent::Chunk {
                    text: chunk,
                    request_id,
                });
            }
            if token.is_cancelled() {
                return Err(FetchError::Cancelled);
            }
            Ok(assembled)
        }
    }
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod adapter_tests;
