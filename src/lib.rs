//! # eth_account
//!
//! Ethereum account derivation and EIP-191 personal message signing.
//!
//! ## Architecture
//!
//! - `account`: Key derivation from entropy or an existing private key
//! - `address`: Address representation and derivation from public keys
//! - `hash`: Keccak-256 and the Ethereum signed-message hash
//! - `signature`: Canonical (low-S) recoverable signing
//! - `recover`: Public-key recovery and signature verification
//! - `encode`: Hex conversion at the interface boundary
//!
//! All operations are synchronous and stateless; every function is a pure
//! computation over its inputs, apart from the fresh entropy consumed by
//! [`Account::create`].
//!
//! ```no_run
//! use eth_account::{recover, Account};
//!
//! # fn main() -> eth_account::Result<()> {
//! let account = Account::create()?;
//! let signed = account.sign("Hello World")?;
//! assert!(recover::verify_by_address(
//!     "Hello World",
//!     &signed.to_hex(),
//!     &account.address().to_hex(),
//! )?);
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod address;
pub mod encode;
pub mod error;
pub mod hash;
pub mod recover;
pub mod signature;

pub use account::Account;
pub use address::Address;
pub use error::{Error, Result};
pub use hash::{hash_message, keccak256};
pub use signature::Signature;
