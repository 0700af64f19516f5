//! Reward constants and the base-reward collaborator trait.
//!
//! All amounts are in the smallest unit: 1 coin = 10^18 units.

use crate::block::BlockHeader;

/// Smallest units per whole coin.
pub const COIN: u128 = 1_000_000_000_000_000_000;

/// Whole coins, scaled.
pub const fn coins(n: u128) -> u128 {
    n * COIN
}

/// Hundredths of a coin, scaled. Exact: COIN is divisible by 100.
pub const fn centi_coins(n: u128) -> u128 {
    n * (COIN / 100)
}

/// Flat issuance credited to the pool for every processed signup.
pub const SIGNUP_GRANT: u128 = coins(9007);

/// Per-signup management fee while the pool average stays subsidized.
pub const MANAGEMENT_FEE: u128 = coins(1000);

/// The fee tapers to zero once average issued value per signup exceeds
/// this threshold.
pub const MANAGEMENT_FEE_AVG_CAP: u128 = coins(10_000);

/// One-time reward for a privileged address itself.
pub const PRIVILEGED_ADDRESS_REWARD: u128 = coins(6000);

/// Reward granted to a newly signed-up member.
pub const SIGNUP_REWARD: u128 = coins(2000);

/// Total budget distributed across a member's referral ancestors.
pub const TOTAL_SIGNUP_REWARDS: u128 = coins(2000);

/// Referral tier rewards, nearest ancestor first. The table length
/// matches the resolver's depth cap.
pub const MEMBER_SIGNUP_REWARDS: [u128; 7] = [
    centi_coins(6060),  // 60.60
    centi_coins(6060),  // 60.60
    centi_coins(12121), // 121.21
    centi_coins(18181), // 181.81
    centi_coins(30303), // 303.03
    centi_coins(48484), // 484.84
    centi_coins(78791), // 787.91
];

/// Base block/uncle reward collaborator. Implemented by the surrounding
/// node; this crate only folds the amounts into the issued total.
pub trait RewardSchedule {
    /// Every reward credited for the block and its uncles, in the
    /// smallest unit.
    fn accumulated_rewards(&self, header: &BlockHeader, uncles: &[BlockHeader]) -> Vec<u128>;
}
