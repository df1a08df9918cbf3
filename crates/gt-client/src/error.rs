// error.rs — Error types for remote goal store operations.

use thiserror::Error;

/// Errors that can occur while talking to the remote goal store.
///
/// The variants keep the failure cause distinguishable (tests and callers
/// can tell a refused connection from a 500 from a garbled payload), while
/// the presentation layer is free to collapse them into a single display
/// string.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never completed — connection refused, DNS failure,
    /// timeout, or the connection dropped mid-response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The store answered with a non-2xx status.
    #[error("goal store returned HTTP {0}")]
    HttpStatus(u16),

    /// The store answered 2xx but the body did not decode as expected.
    #[error("could not decode goal store response: {0}")]
    Decode(#[from] serde_json::Error),
}
