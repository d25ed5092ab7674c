//! Error taxonomy for catalog retrieval.

use thiserror::Error;

/// Failures surfaced by a [`crate::CatalogProvider`].
///
/// The gateway maps these onto its HTTP error envelope: `InvalidId` → 422,
/// `NotFound` → 404, everything else → 500.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Caller supplied no identifier, or a blank one.
    #[error("champion identifier is missing or blank")]
    InvalidId,

    /// The provider has no record for the requested identifier.
    #[error("champion not found: {0}")]
    NotFound(String),

    /// Provider answered with a non-success status.
    #[error("upstream provider error {status}: {body}")]
    Upstream {
        /// HTTP status returned by the provider.
        status: u16,
        /// Response body, for logs.
        body: String,
    },

    /// Network-level failure before any provider answer.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered 200 with a payload we could not decode.
    #[error("failed to decode provider payload: {0}")]
    Decode(#[from] serde_json::Error),
}
