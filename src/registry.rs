//! Privileged address registry.
//!
//! Maps each privileged (root-signup) address to its paired fee-routing
//! receiver. Built once at startup from `config::RegistryConfig` and
//! passed by reference to consumers; there is no mutation API, so the
//! value is safe for unsynchronized concurrent reads.

use crate::Address;
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrivilegedRegistry {
    inner: HashMap<Address, Address>,
}

impl PrivilegedRegistry {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Address, Address)>) -> Self {
        Self {
            inner: pairs.into_iter().collect(),
        }
    }

    /// O(1) membership test; false for any address never configured.
    #[inline]
    pub fn is_privileged(&self, addr: &Address) -> bool {
        self.inner.contains_key(addr)
    }

    /// Paired receiver for a privileged address, if configured.
    #[inline]
    pub fn receiver_of(&self, addr: &Address) -> Option<Address> {
        self.inner.get(addr).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over (privileged, receiver) entries.
    /// NOTE: HashMap has no deterministic order; callers should sort if needed.
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &Address)> {
        self.inner.iter()
    }
}
