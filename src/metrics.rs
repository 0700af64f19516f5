use once_cell::sync::Lazy;
use prometheus::{register_int_gauge, IntGauge};

use crate::rewards::COIN;
use crate::BlockHeader;

pub static SIGNUP_COUNT: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        "referral_ledger_signup_count",
        "Cumulative signups processed (header N)"
    )
    .unwrap()
});

/// Issued total is exported in whole coins so it fits a gauge.
pub static ISSUED_TOTAL_COINS: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        "referral_ledger_issued_total_coins",
        "Cumulative issued value (header W), whole coins"
    )
    .unwrap()
});

/// Publish the header's cumulative totals after a block update.
#[inline]
pub fn observe_totals(h: &BlockHeader) {
    SIGNUP_COUNT.set(h.signup_count as i64);
    ISSUED_TOTAL_COINS.set((h.issued_total / COIN) as i64);
}
