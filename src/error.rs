//! Error types for account derivation, signing and recovery.

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by account, signing and recovery operations.
///
/// Every error is reported synchronously to the caller; cryptographic
/// operations are deterministic, so nothing is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The private key did not decode to exactly 32 bytes.
    #[error("private key must be 32 bytes long ({provided} provided)")]
    InvalidKeyLength {
        /// Byte length of the key that was actually supplied.
        provided: usize,
    },

    /// The recovery byte of a signature was outside {27, 28}.
    #[error("invalid recovery byte {0} (expected 27 or 28)")]
    InvalidRecoveryId(u8),

    /// A signature was not 65 bytes of valid hex.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    /// A hex string failed to decode.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// The underlying secp256k1 primitive rejected an input.
    #[error("secp256k1: {0}")]
    Secp(#[from] secp256k1::Error),
}
