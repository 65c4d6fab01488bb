//! Property-based tests for signing, aggregation and point encodings

use bls381_algorithms::bls12_381::{
    hash_to_curve, pairing, Field, G1Affine, G1Projective, G2Affine, G2Projective,
    HashToCurveConfig,
};
use bls381_sign::{aggregate_signatures, get_public_key, sign, verify, verify_batch, SecretKey};
use num_bigint::BigUint;
use proptest::prelude::*;

fn secret_key() -> impl Strategy<Value = SecretKey> {
    prop::collection::vec(any::<u8>(), 32)
        .prop_filter_map("zero key", |bytes| SecretKey::from_bytes(&bytes).ok())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn signatures_verify(sk in secret_key(), message in prop::collection::vec(any::<u8>(), 0..64)) {
        let pk = get_public_key(&sk).unwrap();
        let sig = sign(&message, &sk).unwrap();
        prop_assert!(verify(&sig, &message, &pk));

        let mut tampered = message.clone();
        tampered.push(0);
        prop_assert!(!verify(&sig, &tampered, &pk));
    }

    #[test]
    fn aggregates_verify(
        first in secret_key(),
        second in secret_key(),
        m1 in prop::collection::vec(any::<u8>(), 1..32),
        m2 in prop::collection::vec(any::<u8>(), 1..32),
    ) {
        let sigs = [sign(&m1, &first).unwrap(), sign(&m2, &second).unwrap()];
        let aggregate = aggregate_signatures(&sigs).unwrap();
        let keys = [get_public_key(&first).unwrap(), get_public_key(&second).unwrap()];
        prop_assert!(verify_batch(&aggregate, &[m1.as_slice(), m2.as_slice()], &keys));
    }

    #[test]
    fn g1_compression_round_trips(k in 1u64..) {
        let p = G1Projective::generator().multiply(&BigUint::from(k)).unwrap();
        let p = p.to_affine();
        prop_assert_eq!(G1Affine::from_compressed(&p.to_compressed()).unwrap(), p);
        prop_assert_eq!(G1Affine::from_uncompressed(&p.to_uncompressed()).unwrap(), p);
    }

    #[test]
    fn g2_compression_round_trips(message in prop::collection::vec(any::<u8>(), 0..32)) {
        let p = hash_to_curve(&message, &HashToCurveConfig::default()).unwrap();
        let decoded = G2Affine::from_compressed(&p.to_compressed()).unwrap();
        prop_assert_eq!(decoded, p.to_affine());
    }

    #[test]
    fn pairing_is_bilinear(a in 1u64.., b in 1u64..) {
        let a_big = BigUint::from(a);
        let b_big = BigUint::from(b);
        let p = G1Projective::generator().multiply(&a_big).unwrap();
        let q = G2Projective::generator().multiply(&b_big).unwrap();
        let lhs = pairing(&p, &q).unwrap();
        let rhs = pairing(&G1Projective::generator(), &G2Projective::generator())
            .unwrap()
            .pow(&(a_big * b_big));
        prop_assert_eq!(lhs, rhs);
    }
}
