//! Error types for the SHA-256 stream crate.

/// Failure to read a [`Digest`](crate::Digest) from its hex text form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DigestParseError {
    #[error("Invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid digest length: expected {expected} bytes, got {actual} bytes")]
    InvalidLength {
        expected: usize,
        actual: usize,
    },
}
