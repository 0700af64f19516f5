//! Canonical account address type for the referral ledger.
//!
//! # Definition
//! An address is **exactly 20 bytes**. Senders are derived from a
//! transaction's public key as `blake3(pubkey)[0..20]`; recipients and
//! the privileged/receiver table carry addresses directly.
//!
//! # Encodings
//! * Internally and on disk: raw 20 bytes.
//! * At config boundaries: `0x`-prefixed hex, normalized by the config
//!   layer before reaching this type (see `config::parse_address`).
//! * This type intentionally does **not** depend on any encoding crate.

use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Construct from a 20-byte array (canonical form).
    #[inline]
    pub fn from_bytes(b: [u8; 20]) -> Self {
        Address(b)
    }

    /// Borrow the underlying 20-byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl AsRef<[u8]> for Address {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
