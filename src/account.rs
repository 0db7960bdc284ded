//! Ethereum account derivation.

use rand::RngCore;
use secp256k1::{PublicKey, Secp256k1, SecretKey};

use crate::address::Address;
use crate::encode::{decode_hex, encode_prefixed};
use crate::error::{Error, Result};
use crate::hash::{hash_message, keccak256};
use crate::signature::{sign_raw, Signature};

/// An Ethereum account: private key, compressed public key and address.
///
/// The public key and address are derived from the private key at
/// construction time, so the triple is always internally consistent. Accounts
/// are immutable once created.
#[derive(Debug, Clone)]
pub struct Account {
    /// The private key bytes (32 bytes)
    secret_key: [u8; 32],
    /// The secp256k1 public key
    public_key: PublicKey,
    /// The derived Ethereum address
    address: Address,
}

impl Account {
    /// Generates a new account from fresh entropy.
    ///
    /// Draws 128 random bytes and hashes them with Keccak-256; the digest is
    /// the private key. Hashing whitens the entropy rather than relying on the
    /// random source to produce curve-valid scalars. A digest that is zero or
    /// not below the curve order is not re-rolled; it surfaces as a key error
    /// (probability on the order of 2^-128).
    pub fn create() -> Result<Self> {
        let mut entropy = [0u8; 128];
        rand::thread_rng().fill_bytes(&mut entropy);

        Self::from_key_bytes(keccak256(&entropy))
    }

    /// Derives an account from a hex-encoded private key, with or without
    /// 0x prefix.
    ///
    /// When `strict`, the decoded key must be exactly 32 bytes or
    /// [`Error::InvalidKeyLength`] is returned. When lenient, a shorter key is
    /// interpreted as a big-endian scalar and left-padded with zero bytes;
    /// keys longer than 32 bytes are rejected either way.
    pub fn from_private_key(private_key: &str, strict: bool) -> Result<Self> {
        let bytes = decode_hex(private_key)?;

        if strict && bytes.len() != 32 {
            return Err(Error::InvalidKeyLength {
                provided: bytes.len(),
            });
        }
        if bytes.len() > 32 {
            return Err(Error::InvalidKeyLength {
                provided: bytes.len(),
            });
        }

        let mut key = [0u8; 32];
        key[32 - bytes.len()..].copy_from_slice(&bytes);

        Self::from_key_bytes(key)
    }

    /// Single source of truth for key derivation.
    fn from_key_bytes(secret_bytes: [u8; 32]) -> Result<Self> {
        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&secret_bytes)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);
        let address = Address::from_public_key(&public_key);

        Ok(Self {
            secret_key: secret_bytes,
            public_key,
            address,
        })
    }

    /// Signs a personal message with this account's private key.
    ///
    /// The returned signature carries the original message alongside its
    /// EIP-191 hash.
    pub fn sign(&self, message: &str) -> Result<Signature> {
        let hash = hash_message(message);
        let signature = sign_raw(&self.private_key_hex(), hash)?;
        Ok(signature.with_message(message))
    }

    /// Returns the private key as 0x-prefixed hex (64 hex characters).
    pub fn private_key_hex(&self) -> String {
        encode_prefixed(&self.secret_key)
    }

    /// Returns the private key bytes.
    pub fn private_key_bytes(&self) -> &[u8; 32] {
        &self.secret_key
    }

    /// Returns the compressed public key as 0x-prefixed hex (66 hex
    /// characters).
    pub fn public_key_hex(&self) -> String {
        encode_prefixed(&self.public_key.serialize())
    }

    /// Returns the secp256k1 public key.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns a reference to the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}
