use ipsec_transform::{AlgorithmId, DecodeError, IpSecAlgorithm, ValidationError, codec, constraints};

use proptest::prelude::*;

// Strategy for generating any recognized algorithm id
fn algorithm_ids() -> impl Strategy<Value = AlgorithmId> {
    proptest::sample::select(AlgorithmId::ALL.to_vec())
}

// Strategy for generating a key of a length the algorithm permits
fn valid_keys(id: AlgorithmId) -> impl Strategy<Value = Vec<u8>> {
    proptest::sample::select(constraints::key_constraint(id).allowed_bits().to_vec())
        .prop_flat_map(|bits| prop::collection::vec(any::<u8>(), (bits / 8) as usize))
}

// Strategy for generating an in-bounds truncation length, or None for
// crypt-only algorithms
fn valid_truncation_lens(id: AlgorithmId) -> BoxedStrategy<Option<u32>> {
    match constraints::truncation_constraint(id) {
        Some(tc) => (tc.min_bits()..=tc.max_bits()).prop_map(Some).boxed(),
        None => Just(None).boxed(),
    }
}

// Strategy for generating valid descriptors
fn descriptors() -> impl Strategy<Value = IpSecAlgorithm> {
    algorithm_ids().prop_flat_map(|id| {
        (valid_keys(id), valid_truncation_lens(id)).prop_map(move |(key, trunc)| {
            IpSecAlgorithm::new(id.name(), &key, trunc).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn test_codec_roundtrip(algo in descriptors()) {
        let bytes = codec::encode(&algo);
        let decoded = codec::decode(&bytes).unwrap();
        prop_assert_eq!(decoded.id(), algo.id());
        prop_assert_eq!(decoded.key(), algo.key());
        prop_assert_eq!(decoded.truncation_len_bits(), algo.truncation_len_bits());
        prop_assert_eq!(decoded, algo);
    }

    #[test]
    fn test_codec_rejects_any_strict_prefix(algo in descriptors()) {
        let bytes = codec::encode(&algo);
        for len in 0..bytes.len() {
            prop_assert!(codec::decode(&bytes[..len]).is_err());
        }
    }

    #[test]
    fn test_codec_version_validation(algo in descriptors(), version in 2u8..) {
        let mut bytes = codec::encode(&algo);
        bytes[0] = version;
        prop_assert_eq!(
            codec::decode(&bytes),
            Err(DecodeError::UnsupportedVersion(version))
        );
    }

    #[test]
    fn test_off_set_key_lengths_rejected(id in algorithm_ids(), extra in 1u32..4) {
        // One to three bytes past a permitted length is never permitted for
        // any algorithm in the table.
        let bits = constraints::key_constraint(id).allowed_bits()[0] + extra * 8;
        if !constraints::key_constraint(id).permits(bits) {
            let key = vec![0u8; (bits / 8) as usize];
            let trunc = constraints::truncation_constraint(id).map(|tc| tc.min_bits());
            let result = IpSecAlgorithm::new(id.name(), &key, trunc);
            prop_assert!(
                matches!(result, Err(ValidationError::InvalidKeyLength { .. })),
                "{:?}", result
            );
        }
    }

    #[test]
    fn test_out_of_bounds_truncation_rejected(id in algorithm_ids(), delta in 1u32..64) {
        if let Some(tc) = constraints::truncation_constraint(id) {
            let key_bits = constraints::key_constraint(id).allowed_bits()[0];
            let key = vec![0u8; (key_bits / 8) as usize];

            let result =
                IpSecAlgorithm::new(id.name(), &key, Some(tc.max_bits() + delta));
            prop_assert!(
                matches!(result, Err(ValidationError::InvalidTruncationLength { .. })),
                "{:?}", result
            );

            if delta <= tc.min_bits() {
                let result =
                    IpSecAlgorithm::new(id.name(), &key, Some(tc.min_bits() - delta));
                prop_assert!(
                    matches!(result, Err(ValidationError::InvalidTruncationLength { .. })),
                    "{:?}", result
                );
            }
        }
    }

    #[test]
    fn test_unrecognized_names_rejected(name in "[a-z0-9]{1,16}", key in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(AlgorithmId::from_name(&name).is_none());
        let result = IpSecAlgorithm::new(&name, &key, Some(96));
        prop_assert_eq!(result, Err(ValidationError::InvalidName(name)));
    }
}
