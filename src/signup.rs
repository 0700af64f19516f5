//! Signup transaction wire format and classifier.
//!
//! A signup transaction is signaled by `value == 1` and a payload in the
//! following format:
//!   when a privileged address signs up a member:
//!     `01` (the current version of the message)
//!   when a member refers a member:
//!     `01` (the current version of the message)
//!     8 bytes big-endian: block number of the referrer's signup tx
//!     32 bytes: hash of the referrer's signup tx

use crate::{Address, PrivilegedRegistry, SignedTx};

/// Version tag carried in byte 0 of every signup payload.
pub const SIGNUP_MESSAGE_VERSION: u8 = 1;

/// A signup transaction carries exactly this value (smallest unit).
/// It is a tag, never a real transfer amount.
pub const SIGNUP_SENTINEL_VALUE: u128 = 1;

/// Payload for a root signup (member signed up directly by a privileged
/// address): just the version byte.
pub fn signup_payload_root() -> Vec<u8> {
    vec![SIGNUP_MESSAGE_VERSION]
}

/// Payload for a referred signup: version byte plus a back-reference to
/// the referrer's own signup transaction.
pub fn signup_payload_referral(block_number: u64, tx_hash: [u8; 32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(41);
    out.push(SIGNUP_MESSAGE_VERSION);
    out.extend_from_slice(&block_number.to_be_bytes());
    out.extend_from_slice(&tx_hash);
    out
}

/// Pure signup predicate over the already-recovered parts of a tx.
///
/// True iff the sender is privileged, the value equals the sentinel, and
/// the payload opens with the current version tag. Never errors; any
/// malformed input simply classifies as "not a signup".
pub fn is_signup_tx(
    registry: &PrivilegedRegistry,
    from: Address,
    value: u128,
    payload: &[u8],
) -> bool {
    registry.is_privileged(&from)
        && value == SIGNUP_SENTINEL_VALUE
        && !payload.is_empty()
        && payload[0] == SIGNUP_MESSAGE_VERSION
}

/// Classify a full transaction. A sender that cannot be recovered
/// classifies as false rather than erroring.
pub fn is_signup_transaction(registry: &PrivilegedRegistry, tx: &SignedTx) -> bool {
    match tx.sender() {
        Some(from) => is_signup_tx(registry, from, tx.core.value, &tx.core.payload),
        None => false,
    }
}
