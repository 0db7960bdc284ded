//! Hex boundary helpers.
//!
//! All public interfaces of this crate speak `0x`-prefixed hex strings, while
//! every internal operation works on raw bytes. This module is the single
//! place where the prefix is stripped and re-added.

use crate::error::Result;

/// Strips a leading `0x` (or `0X`) prefix, if present.
#[inline]
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decodes a hex string into bytes, tolerating a `0x` prefix.
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(strip_hex_prefix(s))?)
}

/// Encodes bytes as lowercase hex with a `0x` prefix.
#[inline]
pub fn encode_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
