//! The single failure channel between adapters and the retry loop.

use thiserror::Error;

/// Why one provider attempt failed.
///
/// Every variant is retried the same way; the distinction only matters for
/// logs and for the final message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider answered with something other than 200/201.
    #[error("Status Code: {status}\n\nContent:\n{body}")]
    Status { status: u16, body: String },

    /// Connection, TLS, or timeout failure.
    #[error("Request failed: {0}")]
    Transport(String),

    /// A 200/201 reply without generated text where the provider puts it.
    #[error("Unexpected response: {0}")]
    Decode(String),
}
