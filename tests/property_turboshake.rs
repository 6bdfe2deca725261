//! Property-based tests for the TurboSHAKE implementation

use proptest::prelude::*;
use turboshake::{encoding, turboshake128, turboshake256, TurboShake128, TurboShake256};

/// Arbitrary messages up to a few rate blocks long
fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=512)
}

proptest! {
    #[test]
    fn outputs_are_deterministic(data in message(), len in 0usize..=300) {
        let a = turboshake128(&data, 0x1F, len).unwrap();
        let b = turboshake128(&data, 0x1F, len).unwrap();
        prop_assert_eq!(a, b);

        let a = turboshake256(&data, 0x1F, len).unwrap();
        let b = turboshake256(&data, 0x1F, len).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn chunked_update_matches_one_shot(data in message(), chunk in 1usize..=64) {
        let one_shot = turboshake128(&data, 0x1F, 64).unwrap();

        let mut xof = TurboShake128::new();
        for part in data.chunks(chunk) {
            xof.update(part).unwrap();
        }
        prop_assert_eq!(xof.squeeze_into_vec(64).unwrap(), one_shot);
    }

    #[test]
    fn squeeze_stream_is_continuous(data in message(), a in 0usize..=300, b in 0usize..=300) {
        let all = turboshake256(&data, 0x1F, a + b).unwrap();

        let mut xof = TurboShake256::new();
        xof.update(&data).unwrap();
        let mut parts = xof.squeeze_into_vec(a).unwrap();
        parts.extend_from_slice(&xof.squeeze_into_vec(b).unwrap());
        prop_assert_eq!(parts, all);
    }

    #[test]
    fn domain_bytes_separate_outputs(data in message(), d1 in 1u8..=255u8, d2 in 1u8..=255u8) {
        prop_assume!(d1 != d2);

        let out1 = turboshake128(&data, d1, 32).unwrap();
        let out2 = turboshake128(&data, d2, 32).unwrap();
        prop_assert_ne!(out1, out2);
    }

    #[test]
    fn variants_disagree(data in message()) {
        prop_assert_ne!(
            turboshake128(&data, 0x1F, 32).unwrap(),
            turboshake256(&data, 0x1F, 32).unwrap()
        );
    }

    #[test]
    fn shorter_outputs_are_prefixes(data in message(), short in 0usize..=200, long in 0usize..=200) {
        prop_assume!(short <= long);

        let short_out = turboshake256(&data, 0x1F, short).unwrap();
        let long_out = turboshake256(&data, 0x1F, long).unwrap();
        prop_assert_eq!(&short_out[..], &long_out[..short]);
    }

    #[test]
    fn hex_round_trip(data in message()) {
        let encoded = encoding::encode_upper(&data);
        prop_assert!(encoded.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        prop_assert_eq!(encoding::decode(&encoded).unwrap(), data.clone());
        prop_assert_eq!(encoding::decode_strict(&encoded).unwrap(), data);
    }
}
