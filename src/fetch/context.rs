//! Context handed to the caller-supplied content fetcher

use tokio_util::sync::CancellationToken;

use crate::document::DocumentSnapshot;

/// Everything a content fetcher gets to work with
///
/// The cancellation token is cooperative: the fetcher is expected to check
/// it (or race against `cancel_token.cancelled()`) and abandon work early.
/// A fetcher that ignores it still behaves correctly from the outside; its
/// stale result is discarded instead of truly cancelled.
#[derive(Debug, Clone)]
pub struct FetchContext {
    /// Document view at the moment the fetch was triggered
    pub document: DocumentSnapshot,
    /// Fires when this fetch has been superseded or discarded
    pub cancel_token: CancellationToken,
}

impl FetchContext {
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
