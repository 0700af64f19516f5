//! Signup chain resolution.
//!
//! Walks a signup payload's back-references through finalized history to
//! recover the referral lineage of a member, nearest referrer first,
//! capped at [`MAX_SIGNUP_DEPTH`] entries.

use crate::signup::{SIGNUP_MESSAGE_VERSION, SIGNUP_SENTINEL_VALUE};
use crate::{Address, SignedTx};

/// Maximum referral depth. Doubles as the termination/DoS bound for the
/// walk: resolution stops here even if the on-chain record continues.
pub const MAX_SIGNUP_DEPTH: usize = 7;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// Malformed payload, absent ancestor, or an ancestor link whose
    /// value is not the signup sentinel. Resolution aborts with no
    /// partial result.
    #[error("detected an invalid signup chain")]
    InvalidChain,
    /// Reserved for a stricter version check on interior links; the
    /// current resolution path folds version mismatches into
    /// `InvalidChain` and never produces this.
    #[error("invalid signup message version")]
    InvalidMessageVersion,
}

/// Parsed form of one signup payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadRef {
    /// Root signup: the chain ends here. A success signal, not an error.
    Terminal,
    /// Back-reference to the referrer's own signup transaction.
    BackRef {
        block_number: u64,
        tx_hash: [u8; 32],
    },
}

/// Decode one signup payload. Version byte + nothing (terminal) or
/// version byte + 8-byte big-endian block number + 32-byte tx hash.
pub fn parse_signup_payload(d: &[u8]) -> Result<PayloadRef, ChainError> {
    if d.is_empty() {
        return Err(ChainError::InvalidChain);
    }
    if d[0] != SIGNUP_MESSAGE_VERSION {
        return Err(ChainError::InvalidChain);
    }
    match d.len() {
        1 => Ok(PayloadRef::Terminal),
        41 => {
            let mut bn = [0u8; 8];
            bn.copy_from_slice(&d[1..9]);
            let mut tx_hash = [0u8; 32];
            tx_hash.copy_from_slice(&d[9..41]);
            Ok(PayloadRef::BackRef {
                block_number: u64::from_be_bytes(bn),
                tx_hash,
            })
        }
        _ => Err(ChainError::InvalidChain),
    }
}

/// Minimal history capability the resolver needs: fetch a transaction by
/// block number and hash among already-finalized, immutable blocks.
pub trait AncestorLookup {
    fn transaction(&self, block_number: u64, tx_hash: [u8; 32]) -> Option<SignedTx>;
}

/// Resolve the signup chain of `tx`, nearest referrer first.
///
/// Returns 0..=7 ancestor addresses, or `ChainError::InvalidChain` on a
/// malformed or forged link; never a partial list alongside an error.
/// An ancestor the history cannot produce counts as invalid: finalized
/// history is immutable, so a dangling reference is corruption.
pub fn signup_chain<H: AncestorLookup>(
    history: &H,
    tx: &SignedTx,
) -> Result<Vec<Address>, ChainError> {
    let mut chain = Vec::with_capacity(MAX_SIGNUP_DEPTH);
    let mut payload = tx.core.payload.clone();
    while chain.len() < MAX_SIGNUP_DEPTH {
        let (block_number, tx_hash) = match parse_signup_payload(&payload)? {
            PayloadRef::Terminal => return Ok(chain),
            PayloadRef::BackRef {
                block_number,
                tx_hash,
            } => (block_number, tx_hash),
        };
        let Some(ancestor) = history.transaction(block_number, tx_hash) else {
            log::warn!(
                "signup_chain: missing ancestor tx at block {}, treating as invalid",
                block_number
            );
            return Err(ChainError::InvalidChain);
        };
        if ancestor.core.value != SIGNUP_SENTINEL_VALUE {
            return Err(ChainError::InvalidChain);
        }
        chain.push(ancestor.core.to);
        payload = ancestor.core.payload;
    }
    Ok(chain)
}
