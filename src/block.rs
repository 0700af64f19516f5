use crate::SignedTx;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

/// Block header.
///
/// `signup_count` (N) and `issued_total` (W) are the cumulative referral
/// totals: N signups processed and W smallest-units issued across the
/// whole chain up to and including this block. Genesis creates them at
/// (0, 0); `totals::update_block_totals` advances them exactly once per
/// block during finalization. Both are monotonically non-decreasing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub height: u64,
    pub prev_hash: [u8; 32],
    pub tx_root: [u8; 32],
    pub timestamp_ms: u64,
    pub signup_count: u64,
    pub issued_total: u128,
}

impl BlockHeader {
    /// Canonical 32-byte hash (domain-separated; see `header_hash`).
    #[inline]
    pub fn hash(&self) -> [u8; 32] {
        header_hash(self)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub txs: Vec<SignedTx>,
}

impl Block {
    /// Look up a transaction in this block by its canonical hash.
    pub fn transaction(&self, tx_hash: [u8; 32]) -> Option<&SignedTx> {
        self.txs.iter().find(|tx| tx.hash() == tx_hash)
    }
}

fn hash256(data: &[u8]) -> [u8; 32] {
    let mut h = Sha3_256::new();
    h.update(data);
    let out = h.finalize();
    let mut a = [0u8; 32];
    a.copy_from_slice(&out);
    a
}

/// Flat root over the block's tx hashes.
pub fn txs_root(txs: &[SignedTx]) -> [u8; 32] {
    if txs.is_empty() {
        return [0u8; 32]; // canonical empty root
    }
    let mut cat = Vec::with_capacity(txs.len() * 32);
    for tx in txs {
        cat.extend_from_slice(&tx.hash());
    }
    hash256(&cat)
}

/// Deterministic header hash (domain-separated).
pub fn header_hash(h: &BlockHeader) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(b"RFRL-HDR\0");
    hasher.update(h.height.to_le_bytes());
    hasher.update(h.prev_hash);
    hasher.update(h.tx_root);
    hasher.update(h.timestamp_ms.to_le_bytes());
    hasher.update(h.signup_count.to_le_bytes());
    hasher.update(h.issued_total.to_le_bytes());
    let out = hasher.finalize();
    let mut h32 = [0u8; 32];
    h32.copy_from_slice(&out);
    h32
}
