use crate::{Address, PrivilegedRegistry};
use serde::{Deserialize, Serialize};

/// One privileged-address entry: the authorized signup sender and the
/// receiver its management fees are routed to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryEntry {
    pub privileged: Address,
    pub receiver: Address,
}

/// Registry configuration. Loaded from JSON at node startup (or taken
/// from `mainnet()`), then frozen into a `PrivilegedRegistry`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RegistryConfig {
    pub pairs: Vec<RegistryEntry>,
}

impl RegistryConfig {
    /// Freeze the configured pairs into the immutable runtime registry.
    pub fn build(&self) -> PrivilegedRegistry {
        PrivilegedRegistry::from_pairs(self.pairs.iter().map(|e| (e.privileged, e.receiver)))
    }

    /// The production table: seven privileged senders, each paired with
    /// its fee receiver.
    pub fn mainnet() -> Self {
        const TABLE: [(&str, &str); 7] = [
            (
                "0x482cf297b08d4523c97ec3a54e80d2d07acd76fa",
                "0x59ab9bb134b529709333f7ae68f3f93c204d280b",
            ),
            (
                "0xcc74e28cec33a784c5cd40e14836dd212a937045",
                "0x0ec37d90610b7665517a2d813dc85a7f83852aee",
            ),
            (
                "0xc07a55758f896449805bae3851f57e25bb7ee7ef",
                "0x78021bd6fb0f0353bb49e2cc63a8aea051c902ca",
            ),
            (
                "0x48a24dd26a32564e2697f25fc8605700ec4c0337",
                "0xb8c4f8e04d3341690cfb9ebc11246bd8806884ce",
            ),
            (
                "0x3cac5f7909f9cb666cc4d7ef32047b170e454b16",
                "0x85b44964bb0d83fa1329dc969d853d710fde339e",
            ),
            (
                "0x0827d93936df936134dd7b7acaeaea04344b11f2",
                "0x5dc1a06fa3717b6084c4e19395ab1651185b6477",
            ),
            (
                "0xa63e936e0eb36c103f665d53bd7ca9c31ec7e1ad",
                "0x53372c0fce8ce636ac77cf502c51d5f15868dc64",
            ),
        ];
        let pairs = TABLE
            .iter()
            .map(|(p, r)| RegistryEntry {
                privileged: parse_address(p).expect("mainnet table address"),
                receiver: parse_address(r).expect("mainnet table address"),
            })
            .collect();
        Self { pairs }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("address must be 40 hex chars (got {got})")]
    BadLength { got: usize },
    #[error("address is not valid hex")]
    BadHex,
}

/// Parse a `0x`-prefixed (or bare) 40-char hex string into an `Address`.
pub fn parse_address(s: &str) -> Result<Address, ConfigError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() != 40 {
        return Err(ConfigError::BadLength { got: s.len() });
    }
    let raw = hex::decode(s).map_err(|_| ConfigError::BadHex)?;
    let mut a = [0u8; 20];
    a.copy_from_slice(&raw);
    Ok(Address(a))
}
