//! Keccak-256 hashing and the EIP-191 personal-message digest.

use tiny_keccak::{Hasher, Keccak};

/// Computes the Keccak-256 digest of `data`.
#[inline]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);

    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);
    hash
}

/// Computes the Ethereum signed-message hash of `message` (EIP-191).
///
/// A message starting with `0x` whose remainder is non-empty, even-length hex
/// is decoded and signed as raw bytes; anything else is signed as its literal
/// string bytes, leading characters included. The preimage is
///
/// ```text
/// 0x19 || "Ethereum Signed Message:" || 0x0A || decimal(len) || payload
/// ```
///
/// where `len` is the byte length of the (decoded) payload, rendered as plain
/// ASCII decimal digits.
pub fn hash_message(message: &str) -> [u8; 32] {
    let payload = match message.strip_prefix("0x") {
        Some(rest)
            if !rest.is_empty()
                && rest.len() % 2 == 0
                && rest.bytes().all(|b| b.is_ascii_hexdigit()) =>
        {
            // Checked above, cannot fail
            hex::decode(rest).unwrap_or_default()
        }
        _ => message.as_bytes().to_vec(),
    };

    let mut preimage = Vec::with_capacity(payload.len() + 32);
    preimage.push(0x19);
    preimage.extend_from_slice(b"Ethereum Signed Message:");
    preimage.push(0x0a);
    preimage.extend_from_slice(payload.len().to_string().as_bytes());
    preimage.extend_from_slice(&payload);

    keccak256(&preimage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world_golden_hash() {
        // web3.eth.accounts.hashMessage("Hello World")
        assert_eq!(
            hex::encode(hash_message("Hello World")),
            "a1de988600a42c4b4ab089b619297c17d53cffae5d5120d82d8a92d0bb3b78f2"
        );
    }

    #[test]
    fn test_hex_message_is_decoded_before_hashing() {
        let mut preimage = vec![0x19];
        preimage.extend_from_slice(b"Ethereum Signed Message:");
        preimage.push(0x0a);
        preimage.extend_from_slice(b"4");
        preimage.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

        assert_eq!(hash_message("0xdeadbeef"), keccak256(&preimage));
    }

    #[test]
    fn test_odd_length_hex_is_treated_as_literal() {
        let mut preimage = vec![0x19];
        preimage.extend_from_slice(b"Ethereum Signed Message:");
        preimage.push(0x0a);
        preimage.extend_from_slice(b"5");
        preimage.extend_from_slice(b"0xabc");

        assert_eq!(hash_message("0xabc"), keccak256(&preimage));
    }

    #[test]
    fn test_bare_prefix_is_treated_as_literal() {
        let mut preimage = vec![0x19];
        preimage.extend_from_slice(b"Ethereum Signed Message:");
        preimage.push(0x0a);
        preimage.extend_from_slice(b"2");
        preimage.extend_from_slice(b"0x");

        assert_eq!(hash_message("0x"), keccak256(&preimage));
    }

    #[test]
    fn test_length_is_decimal_bytes() {
        // A 100-byte payload encodes its length as the three digits "100"
        let message = "a".repeat(100);
        let mut preimage = vec![0x19];
        preimage.extend_from_slice(b"Ethereum Signed Message:");
        preimage.push(0x0a);
        preimage.extend_from_slice(b"100");
        preimage.extend_from_slice(message.as_bytes());

        assert_eq!(hash_message(&message), keccak256(&preimage));
    }
}
