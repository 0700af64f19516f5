// tests/helpers.rs
#![allow(dead_code)]

use referral_ledger::{
    chain::AncestorLookup, rewards::RewardSchedule, txs_root, Address, Block, BlockHeader,
    PrivilegedRegistry, SignedTx, TxCore,
};
use std::collections::HashMap;

/// Address with every byte set to `b`.
pub fn addr(b: u8) -> Address {
    Address([b; 20])
}

/// Deterministic pubkey plus the sender address it derives to.
pub fn keyed_sender(seed: u8) -> (Vec<u8>, Address) {
    let pubkey = vec![seed; 32];
    let sender = referral_ledger::sender_from_pubkey(&pubkey);
    (pubkey, sender)
}

/// Registry where each given address maps to a synthetic receiver.
pub fn registry_of(privileged: &[Address]) -> PrivilegedRegistry {
    PrivilegedRegistry::from_pairs(
        privileged
            .iter()
            .enumerate()
            .map(|(i, p)| (*p, addr(0xE0 + i as u8))),
    )
}

/// Build a tx with the given pubkey, recipient, value, and payload.
/// Signatures are outside this crate's scope, so a dummy one is fine.
pub fn mk_tx(pubkey: Vec<u8>, to: Address, value: u128, payload: Vec<u8>) -> SignedTx {
    SignedTx {
        core: TxCore {
            to,
            value,
            nonce: 0,
            payload,
        },
        pubkey,
        sig: vec![0u8; 64],
    }
}

/// Finalized-history fake: whole blocks keyed by number, looked up the
/// same way a node would (block by number, then tx by hash within it).
#[derive(Default)]
pub struct InMemoryChain {
    blocks: HashMap<u64, Block>,
}

impl InMemoryChain {
    /// Record `tx` in the block at `block_number` (creating it on first
    /// use); returns the tx hash for back-references.
    pub fn insert(&mut self, block_number: u64, tx: SignedTx) -> [u8; 32] {
        let h = tx.hash();
        let block = self.blocks.entry(block_number).or_insert_with(|| Block {
            header: mk_header(block_number, 0, 0),
            txs: Vec::new(),
        });
        block.txs.push(tx);
        block.header.tx_root = txs_root(&block.txs);
        h
    }
}

impl AncestorLookup for InMemoryChain {
    fn transaction(&self, block_number: u64, tx_hash: [u8; 32]) -> Option<SignedTx> {
        self.blocks
            .get(&block_number)
            .and_then(|b| b.transaction(tx_hash))
            .cloned()
    }
}

/// Reward schedule that credits a fixed list regardless of the block.
pub struct FlatRewards(pub Vec<u128>);

impl RewardSchedule for FlatRewards {
    fn accumulated_rewards(&self, _header: &BlockHeader, _uncles: &[BlockHeader]) -> Vec<u128> {
        self.0.clone()
    }
}

/// Header at `height` seeded with the given cumulative totals.
pub fn mk_header(height: u64, signup_count: u64, issued_total: u128) -> BlockHeader {
    BlockHeader {
        height,
        prev_hash: [0u8; 32],
        tx_root: [0u8; 32],
        timestamp_ms: 0,
        signup_count,
        issued_total,
    }
}
