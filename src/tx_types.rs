use crate::address::Address;
use blake3;
use serde::{Deserialize, Serialize};

/// Core (unsigned) transfer tx.
///
/// `value` is in the smallest unit. `payload` is opaque to transfer
/// processing; the signup subsystem interprets it as a tagged signup
/// message (see `signup`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TxCore {
    pub to: Address,
    pub value: u128,
    pub nonce: u64,
    pub payload: Vec<u8>,
}

/// Signed transaction. Sender identity is derived from `pubkey`;
/// signature verification itself lives outside this crate.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SignedTx {
    pub core: TxCore,
    pub pubkey: Vec<u8>,
    pub sig: Vec<u8>,
}

impl SignedTx {
    /// Deterministic binary bytes for hashing.
    /// Format:
    ///   core.to(20) || nonce(u64 LE) || value(u128 LE)
    ///   || payload_len(u32 LE) || payload bytes
    ///   || pubkey_len(u32 LE) || pubkey bytes
    ///   || sig_len(u32 LE) || sig bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();

        out.extend_from_slice(self.core.to.as_bytes());
        out.extend_from_slice(&self.core.nonce.to_le_bytes());
        out.extend_from_slice(&self.core.value.to_le_bytes());

        out.extend_from_slice(&(self.core.payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&self.core.payload);

        out.extend_from_slice(&(self.pubkey.len() as u32).to_le_bytes());
        out.extend_from_slice(&self.pubkey);

        out.extend_from_slice(&(self.sig.len() as u32).to_le_bytes());
        out.extend_from_slice(&self.sig);

        out
    }

    /// 32-byte canonical tx hash. History lookups key on this.
    pub fn hash(&self) -> [u8; 32] {
        blake3::hash(&self.to_bytes()).into()
    }

    /// Recovered sender, or `None` when the pubkey is absent and the
    /// sender cannot be derived. Callers treat `None` as "not ours to
    /// account for" rather than an error.
    #[inline]
    pub fn sender(&self) -> Option<Address> {
        if self.pubkey.is_empty() {
            return None;
        }
        Some(sender_from_pubkey(&self.pubkey))
    }
}

/// Derive sender address from pubkey: blake3(pubkey)[0..20]
pub fn sender_from_pubkey(pubkey: &[u8]) -> Address {
    let hash = blake3::hash(pubkey);
    let bytes = hash.as_bytes();
    let mut out = [0u8; 20];
    out.copy_from_slice(&bytes[..20]);
    Address(out)
}
