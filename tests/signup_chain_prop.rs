//! Properties: payload parsing is total over arbitrary bytes, and chain
//! resolution is bounded by the depth cap whatever shape history takes.

mod helpers;

use helpers::{addr, keyed_sender, mk_tx, InMemoryChain};
use proptest::prelude::*;
use referral_ledger::{
    parse_signup_payload, signup_chain, signup_payload_referral, signup_payload_root, PayloadRef,
    MAX_SIGNUP_DEPTH, SIGNUP_MESSAGE_VERSION, SIGNUP_SENTINEL_VALUE,
};

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    /// Parsing never panics, and only two shapes are ever accepted:
    /// a lone version byte, or version + 40-byte back-reference.
    #[test]
    fn parse_accepts_only_the_two_wire_shapes(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        match parse_signup_payload(&bytes) {
            Ok(PayloadRef::Terminal) => {
                prop_assert_eq!(bytes.len(), 1);
                prop_assert_eq!(bytes[0], SIGNUP_MESSAGE_VERSION);
            }
            Ok(PayloadRef::BackRef { block_number, tx_hash }) => {
                prop_assert_eq!(bytes.len(), 41);
                prop_assert_eq!(bytes[0], SIGNUP_MESSAGE_VERSION);
                let bn_bytes = block_number.to_be_bytes();
                prop_assert_eq!(bn_bytes.as_slice(), &bytes[1..9]);
                prop_assert_eq!(tx_hash.as_slice(), &bytes[9..41]);
            }
            Err(_) => {}
        }
    }

    /// Arbitrary payloads against arbitrary (empty) history resolve to
    /// either an empty chain or a typed error, never a panic.
    #[test]
    fn resolver_is_total_over_arbitrary_payloads(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let history = InMemoryChain::default();
        let (pubkey, _) = keyed_sender(0x51);
        let tx = mk_tx(pubkey, addr(0x20), SIGNUP_SENTINEL_VALUE, bytes);
        if let Ok(chain) = signup_chain(&history, &tx) {
            prop_assert!(chain.len() <= MAX_SIGNUP_DEPTH);
        }
    }

    /// A linear chain of `depth` recorded generations resolves to
    /// exactly min(depth, 7) ancestors, nearest first.
    #[test]
    fn linear_chains_resolve_to_capped_depth(depth in 0usize..20) {
        let mut history = InMemoryChain::default();
        let (pubkey, _) = keyed_sender(0x51);

        let mut payload = signup_payload_root();
        for g in 1..=depth as u64 {
            let tx = mk_tx(pubkey.clone(), addr(g as u8), SIGNUP_SENTINEL_VALUE, payload);
            let h = history.insert(g, tx);
            payload = signup_payload_referral(g, h);
        }

        let member_tx = mk_tx(pubkey, addr(0x7F), SIGNUP_SENTINEL_VALUE, payload);
        let chain = signup_chain(&history, &member_tx).unwrap();

        let expect = depth.min(MAX_SIGNUP_DEPTH);
        prop_assert_eq!(chain.len(), expect);
        for (i, got) in chain.iter().enumerate() {
            prop_assert_eq!(*got, addr((depth - i) as u8));
        }
    }
}
