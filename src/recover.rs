//! Signature verification by public-key recovery.

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, Secp256k1};

use crate::address::{public_key_to_address, Address};
use crate::encode::{decode_hex, encode_prefixed, strip_hex_prefix};
use crate::error::{Error, Result};
use crate::hash::hash_message;

/// Recovers the public key that signed a personal message.
///
/// `signature` is the 65-byte `r || s || v` form as hex, with or without 0x
/// prefix. The message is hashed exactly as in signing, so the same
/// hex-detection rules apply. Fails with [`Error::MalformedSignature`] if the
/// signature is not 65 bytes of valid hex, and with
/// [`Error::InvalidRecoveryId`] if `v` is not 27 or 28.
///
/// Returns the recovered key as 0x-prefixed compressed hex, the same encoding
/// [`Account::public_key_hex`](crate::Account::public_key_hex) uses.
pub fn recover_public_key(message: &str, signature: &str) -> Result<String> {
    let hash = hash_message(message);
    let (compact, recovery_id) = parse_signature(signature)?;

    let recoverable = RecoverableSignature::from_compact(&compact, recovery_id)?;
    let secp = Secp256k1::new();
    let public_key = secp.recover_ecdsa(&Message::from_digest(hash), &recoverable)?;

    Ok(encode_prefixed(&public_key.serialize()))
}

/// Verifies a personal-message signature against an expected public key.
///
/// The expected key may be compressed or uncompressed hex, with or without
/// 0x prefix; comparison is done on the parsed key, not the string. Returns
/// `Ok(false)` only for a genuine signer mismatch; malformed input is an
/// error.
pub fn verify_by_public_key(
    message: &str,
    signature: &str,
    expected_public_key: &str,
) -> Result<bool> {
    let recovered = recover_public_key(message, signature)?;

    // Normalize the expected key to compressed form before comparing
    let expected_bytes = decode_hex(expected_public_key)?;
    let expected = secp256k1::PublicKey::from_slice(&expected_bytes)?;

    Ok(recovered == encode_prefixed(&expected.serialize()))
}

/// Verifies a personal-message signature against an expected address.
///
/// The expected address may be lowercase or EIP-55 checksummed; casing is
/// ignored. Returns `Ok(false)` only for a genuine signer mismatch.
pub fn verify_by_address(message: &str, signature: &str, expected_address: &str) -> Result<bool> {
    let recovered = recover_public_key(message, signature)?;
    let recovered_address = public_key_to_address(&recovered)?;
    let expected: Address = expected_address.parse()?;

    Ok(recovered_address == expected)
}

/// Splits a 65-byte signature into its compact (r, s) form and recovery id.
fn parse_signature(signature: &str) -> Result<([u8; 64], RecoveryId)> {
    let bytes = hex::decode(strip_hex_prefix(signature))
        .map_err(|e| Error::MalformedSignature(e.to_string()))?;
    if bytes.len() != 65 {
        return Err(Error::MalformedSignature(format!(
            "expected 65 bytes, got {}",
            bytes.len()
        )));
    }

    let v = bytes[64];
    let recovery_id = match v.checked_sub(27) {
        Some(id @ 0..=1) => RecoveryId::from_i32(i32::from(id))?,
        _ => return Err(Error::InvalidRecoveryId(v)),
    };

    let mut compact = [0u8; 64];
    compact.copy_from_slice(&bytes[..64]);
    Ok((compact, recovery_id))
}
