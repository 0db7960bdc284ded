//! EIP-191 personal message signing.

use secp256k1::{Message, Secp256k1, SecretKey};

use crate::encode::{decode_hex, encode_prefixed};
use crate::error::{Error, Result};
use crate::hash::hash_message;

/// A canonical Ethereum personal-message signature.
///
/// `r` and `s` are zero-padded to exactly 32 bytes, `s` is the low-S
/// representative, and `v` is the recovery id offset by 27, so `v` is always
/// 27 or 28. The 65-byte wire form is `r || s || v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    message: Option<String>,
    message_hash: [u8; 32],
    r: [u8; 32],
    s: [u8; 32],
    v: u8,
}

impl Signature {
    /// Returns the original message, when the signature was produced over one
    /// (as opposed to a raw hash).
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the 32-byte hash that was signed.
    #[inline]
    pub fn message_hash(&self) -> &[u8; 32] {
        &self.message_hash
    }

    /// Returns the `r` component (32 bytes).
    #[inline]
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// Returns the `s` component (32 bytes).
    #[inline]
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Returns the recovery byte (27 or 28).
    #[inline]
    pub fn v(&self) -> u8 {
        self.v
    }

    /// Returns the 65-byte wire form `r || s || v`.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut bytes = [0u8; 65];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..64].copy_from_slice(&self.s);
        bytes[64] = self.v;
        bytes
    }

    /// Returns the signature as 0x-prefixed hex (130 hex characters).
    pub fn to_hex(&self) -> String {
        encode_prefixed(&self.to_bytes())
    }

    /// Returns the signed hash as 0x-prefixed hex.
    pub fn message_hash_hex(&self) -> String {
        encode_prefixed(&self.message_hash)
    }

    /// Returns `r` as 0x-prefixed hex.
    pub fn r_hex(&self) -> String {
        encode_prefixed(&self.r)
    }

    /// Returns `s` as 0x-prefixed hex.
    pub fn s_hex(&self) -> String {
        encode_prefixed(&self.s)
    }

    /// Returns `v` as 0x-prefixed hex (0x1b or 0x1c).
    pub fn v_hex(&self) -> String {
        format!("0x{:02x}", self.v)
    }

    pub(crate) fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }
}

/// Signs a personal message with a hex-encoded private key.
///
/// Computes the EIP-191 hash of `message`, signs it via [`sign_raw`] and
/// attaches the original message to the result.
pub fn sign(private_key: &str, message: &str) -> Result<Signature> {
    let signature = sign_raw(private_key, hash_message(message))?;
    Ok(signature.with_message(message))
}

/// Signs a 32-byte hash with a hex-encoded private key.
///
/// The key must decode to exactly 32 bytes (with or without 0x prefix). The
/// signature is canonical (low-S) with an RFC 6979 deterministic nonce, so
/// repeated calls with the same key and hash produce identical output.
pub fn sign_raw(private_key: &str, hash: [u8; 32]) -> Result<Signature> {
    let key_bytes = decode_hex(private_key)?;
    if key_bytes.len() != 32 {
        return Err(Error::InvalidKeyLength {
            provided: key_bytes.len(),
        });
    }

    let secret_key = SecretKey::from_slice(&key_bytes)?;
    let secp = Secp256k1::new();
    let recoverable =
        secp.sign_ecdsa_recoverable(&Message::from_digest(hash), &secret_key);
    let (recovery_id, compact) = recoverable.serialize_compact();

    // serialize_compact always yields 32-byte big-endian r and s
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&compact[..32]);
    s.copy_from_slice(&compact[32..]);

    Ok(Signature {
        message: None,
        message_hash: hash,
        r,
        s,
        v: recovery_id.to_i32() as u8 + 27,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // web3.eth.accounts.sign('Some data', ...) reference vector
    const TEST_PRIVATE_KEY: &str =
        "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    #[test]
    fn test_some_data_reference_vector() {
        let signature = sign(TEST_PRIVATE_KEY, "Some data").unwrap();

        assert_eq!(
            signature.message_hash_hex(),
            "0x1da44b586eb0729ff70a73c326926f6ed5a25f5b056e7f47fbc6e58d86871655"
        );
        assert_eq!(
            signature.r_hex(),
            "0xb91467e570a6466aa9e9876cbcd013baba02900b8979d43fe208a4a4f339f5fd"
        );
        assert_eq!(
            signature.s_hex(),
            "0x6007e74cd82e037b800186422fc2da167c747ef045e5d18a5f5d4300f8e1a029"
        );
        assert_eq!(signature.v_hex(), "0x1c");
        assert_eq!(
            signature.to_hex(),
            "0xb91467e570a6466aa9e9876cbcd013baba02900b8979d43fe208a4a4f339f5fd\
             6007e74cd82e037b800186422fc2da167c747ef045e5d18a5f5d4300f8e1a0291c"
        );
        assert_eq!(signature.message(), Some("Some data"));
    }

    #[test]
    fn test_signature_component_shape() {
        let signature = sign(TEST_PRIVATE_KEY, "Hello World").unwrap();

        assert_eq!(signature.r().len(), 32);
        assert_eq!(signature.s().len(), 32);
        assert!(signature.v() == 27 || signature.v() == 28);
        assert_eq!(signature.to_bytes().len(), 65);
        assert_eq!(signature.to_hex().len(), 132);
    }

    #[test]
    fn test_signing_is_deterministic() {
        let first = sign(TEST_PRIVATE_KEY, "repeatable").unwrap();
        let second = sign(TEST_PRIVATE_KEY, "repeatable").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sign_raw_carries_no_message() {
        let hash = hash_message("Some data");
        let signature = sign_raw(TEST_PRIVATE_KEY, hash).unwrap();
        assert_eq!(signature.message(), None);
        assert_eq!(signature.message_hash(), &hash);
    }

    #[test]
    fn test_sign_rejects_short_key() {
        let err = sign("0xabcd", "Some data").unwrap_err();
        assert!(matches!(err, Error::InvalidKeyLength { provided: 2 }));
    }

    #[test]
    fn test_sign_rejects_invalid_hex_key() {
        assert!(sign("0xnot-a-key", "Some data").is_err());
    }
}
