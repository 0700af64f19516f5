//! Block totals accumulator.
//!
//! Folds a block's base rewards and its signup transactions into the
//! cumulative (signup_count, issued_total) pair carried by the header.
//! This runs on the mandatory finalization path, so it is total: a tx
//! that fails to classify as a signup is excluded from accounting, never
//! an error.

use crate::rewards::{RewardSchedule, MANAGEMENT_FEE, MANAGEMENT_FEE_AVG_CAP, SIGNUP_GRANT};
use crate::signup::is_signup_transaction;
use crate::{BlockHeader, PrivilegedRegistry, SignedTx};

/// Per-signup management fee, computed from the totals as they stand
/// *before* the signup being priced.
///
/// With no signups processed anywhere in history the fee is the full
/// subsidy (also sidesteps division by zero). Otherwise the subsidy
/// holds while average issued value per signup stays at or under the
/// cap, and tapers to zero past it.
pub fn management_fee(signup_count: u64, issued_total: u128) -> u128 {
    if signup_count == 0 {
        return MANAGEMENT_FEE;
    }
    let avg = issued_total / signup_count as u128;
    if avg <= MANAGEMENT_FEE_AVG_CAP {
        MANAGEMENT_FEE
    } else {
        0
    }
}

/// Pure fold: seed (N, W), add base rewards, then process signup txs
/// strictly in committed order. The fee for each signup is computed
/// before that signup's own contribution lands, so reordering the txs
/// changes the result.
pub fn calculate_block_totals<R: RewardSchedule>(
    signup_count: u64,
    issued_total: u128,
    registry: &PrivilegedRegistry,
    schedule: &R,
    header: &BlockHeader,
    uncles: &[BlockHeader],
    txs: &[SignedTx],
) -> (u64, u128) {
    let mut n = signup_count;
    let mut w = issued_total;
    for r in schedule.accumulated_rewards(header, uncles) {
        w = w.saturating_add(r);
    }
    for tx in txs {
        if is_signup_transaction(registry, tx) {
            let fee = management_fee(n, w);
            n = n.saturating_add(1);
            w = w.saturating_add(SIGNUP_GRANT.saturating_add(fee));
            log::debug!(
                "block totals: signup to={:?} fee={} -> n={} w={}",
                tx.core.to,
                fee,
                n,
                w
            );
        }
    }
    (n, w)
}

/// Advance the header's cumulative totals for this block. Never fails;
/// must be invoked exactly once per block by the finalization pipeline.
pub fn update_block_totals<R: RewardSchedule>(
    header: &mut BlockHeader,
    uncles: &[BlockHeader],
    txs: &[SignedTx],
    registry: &PrivilegedRegistry,
    schedule: &R,
) {
    let (n, w) = calculate_block_totals(
        header.signup_count,
        header.issued_total,
        registry,
        schedule,
        header,
        uncles,
        txs,
    );
    header.signup_count = n;
    header.issued_total = w;

    crate::metrics::observe_totals(header);
}
