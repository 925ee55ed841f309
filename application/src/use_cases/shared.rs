//! Shared utilities for use cases.
//!
//! Cancellation helpers used by both the panel and refinement flows.

use tokio_util::sync::CancellationToken;

/// Whether cancellation has been requested.
pub(crate) fn is_cancelled(token: &Option<CancellationToken>) -> bool {
    token.as_ref().is_some_and(|t| t.is_cancelled())
}

/// Resolves when the token is cancelled; never resolves when there is no
/// token. Meant for `tokio::select!` against in-flight provider calls.
pub(crate) async fn wait_cancelled(token: &Option<CancellationToken>) {
    match token {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}
