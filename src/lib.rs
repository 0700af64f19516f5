pub mod address;

pub mod tx_types;

pub mod block;

pub mod registry;

pub mod config;

pub mod signup;

pub mod chain;

pub mod rewards;

pub mod totals;

pub use address::Address;

pub use tx_types::{sender_from_pubkey, SignedTx, TxCore};

pub use block::{header_hash, txs_root, Block, BlockHeader};

pub use registry::PrivilegedRegistry;

pub use config::{parse_address, ConfigError, RegistryConfig, RegistryEntry};

pub use signup::{
    is_signup_transaction, is_signup_tx, signup_payload_referral, signup_payload_root,
    SIGNUP_MESSAGE_VERSION, SIGNUP_SENTINEL_VALUE,
};

pub use chain::{
    parse_signup_payload, signup_chain, AncestorLookup, ChainError, PayloadRef, MAX_SIGNUP_DEPTH,
};

pub use rewards::{
    RewardSchedule, COIN, MANAGEMENT_FEE, MANAGEMENT_FEE_AVG_CAP, MEMBER_SIGNUP_REWARDS,
    PRIVILEGED_ADDRESS_REWARD, SIGNUP_GRANT, SIGNUP_REWARD, TOTAL_SIGNUP_REWARDS,
};

pub use totals::{calculate_block_totals, management_fee, update_block_totals};

#[cfg(feature = "metrics")]
pub mod metrics;

#[cfg(not(feature = "metrics"))]
pub mod metrics_shim;

// When the metrics feature is off, expose a unified `metrics` via the shim
#[cfg(not(feature = "metrics"))]
pub use self::metrics_shim as metrics;
