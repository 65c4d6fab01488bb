use bls381_algorithms::bls12_381::{hash_to_curve, Fq, G2Projective, HashToCurveConfig};
use bls381_api::{Signature, SignatureAggregate};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::*;

const G1_GENERATOR: &str = "97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb";

fn key(seed: u64) -> SecretKey {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    Bls12381::keypair(&mut rng).unwrap().1
}

#[test]
fn test_public_key_of_one_is_generator() {
    let sk = SecretKey::from_bytes(&[1]).unwrap();
    let pk = get_public_key(&sk).unwrap();
    assert_eq!(hex::encode(pk.to_bytes()), G1_GENERATOR);
}

#[test]
fn test_secret_key_reduced_modulo_p() {
    // p + 1 normalizes to 1
    let p_plus_one = (Fq::modulus() + 1u32).to_bytes_be();
    let sk = SecretKey::from_bytes(&p_plus_one).unwrap();
    assert_eq!(sk.to_bytes()[47], 1);
    assert!(sk.to_bytes()[..47].iter().all(|b| *b == 0));
}

#[test]
fn test_secret_key_rejects_zero_and_bad_lengths() {
    assert!(matches!(SecretKey::from_bytes(&[0u8; 32]), Err(Error::InvalidKey(_))));
    assert!(SecretKey::from_bytes(&Fq::modulus().to_bytes_be()).is_err());
    assert!(SecretKey::from_bytes(&[]).is_err());
    assert!(SecretKey::from_bytes(&[1u8; 49]).is_err());
}

#[test]
fn test_signature_of_one_is_message_hash() {
    let sk = SecretKey::from_bytes(&[1]).unwrap();
    let sig = sign(b"abc", &sk).unwrap();
    let hashed = hash_to_curve(b"abc", &HashToCurveConfig::default()).unwrap();
    assert_eq!(sig, BlsSignature::from_point(&hashed));
}

#[test]
fn test_sign_and_verify() {
    let sk = key(1);
    let pk = get_public_key(&sk).unwrap();
    let sig = sign(b"hello", &sk).unwrap();

    assert!(verify(&sig, b"hello", &pk));
    assert!(!verify(&sig, b"hellp", &pk));

    let other = get_public_key(&key(2)).unwrap();
    assert!(!verify(&sig, b"hello", &other));
}

#[test]
fn test_signing_is_deterministic() {
    let sk = key(3);
    assert_eq!(sign(b"msg", &sk).unwrap(), sign(b"msg", &sk).unwrap());
}

#[test]
fn test_verify_rejects_malformed_inputs() {
    let sk = key(4);
    let pk = get_public_key(&sk).unwrap();
    let sig = sign(b"msg", &sk).unwrap();

    let mut bad_sig = sig;
    bad_sig.0[0] &= 0x7f;
    assert!(!verify(&bad_sig, b"msg", &pk));

    let mut bad_pk = pk;
    bad_pk.0[47] ^= 1;
    assert!(!verify(&sig, b"msg", &bad_pk));

    let identity_pk = PublicKey::from_point(&bls381_algorithms::G1Projective::identity());
    assert!(!verify(&sig, b"msg", &identity_pk));
    let identity_sig = BlsSignature::from_point(&G2Projective::identity());
    assert!(!verify(&identity_sig, b"msg", &pk));
}

#[test]
fn test_custom_domain_separation() {
    let sk = key(5);
    let pk = get_public_key(&sk).unwrap();
    let config = HashToCurveConfig::new(b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_".to_vec());

    let sig = sign_with_config(b"msg", &sk, &config).unwrap();
    assert!(verify_with_config(&sig, b"msg", &pk, &config));
    assert!(!verify(&sig, b"msg", &pk));
}

#[test]
fn test_aggregate_distinct_messages() {
    let messages: [&[u8]; 3] = [b"one", b"two", b"three"];
    let keys: Vec<SecretKey> = (10..13).map(key).collect();
    let pks: Vec<PublicKey> = keys.iter().map(|k| get_public_key(k).unwrap()).collect();
    let sigs: Vec<BlsSignature> = keys
        .iter()
        .zip(messages.iter())
        .map(|(k, m)| sign(m, k).unwrap())
        .collect();

    let aggregate = aggregate_signatures(&sigs).unwrap();
    assert!(verify_batch(&aggregate, &messages, &pks));
    assert!(verify_multiple(&aggregate, &messages, &pks));

    let flipped: [&[u8]; 3] = [b"one", b"TWO", b"three"];
    assert!(!verify_batch(&aggregate, &flipped, &pks));

    // length mismatch and empty input
    assert!(!verify_batch(&aggregate, &messages[..2], &pks));
    assert!(!verify_batch(&aggregate, &[], &[]));
}

#[test]
fn test_aggregate_same_message() {
    let keys: Vec<SecretKey> = (20..24).map(key).collect();
    let pks: Vec<PublicKey> = keys.iter().map(|k| get_public_key(k).unwrap()).collect();
    let sigs: Vec<BlsSignature> = keys.iter().map(|k| sign(b"shared", k).unwrap()).collect();

    let aggregate = aggregate_signatures(&sigs).unwrap();
    let aggregate_pk = aggregate_public_keys(&pks).unwrap();
    assert!(verify(&aggregate, b"shared", &aggregate_pk));

    let messages: Vec<&[u8]> = vec![b"shared".as_slice(); 4];
    assert!(verify_batch(&aggregate, &messages, &pks));
}

#[test]
fn test_aggregation_is_order_independent() {
    let keys: Vec<SecretKey> = (30..33).map(key).collect();
    let sigs: Vec<BlsSignature> = keys.iter().map(|k| sign(b"m", k).unwrap()).collect();
    let reversed: Vec<BlsSignature> = sigs.iter().rev().copied().collect();
    assert_eq!(
        aggregate_signatures(&sigs).unwrap(),
        aggregate_signatures(&reversed).unwrap()
    );
}

#[test]
fn test_aggregate_empty_input() {
    assert_eq!(
        aggregate_public_keys(&[]),
        Err(Error::EmptyInput("public keys"))
    );
    assert_eq!(
        aggregate_signatures(&[]),
        Err(Error::EmptyInput("signatures"))
    );
}

#[test]
fn test_scheme_traits() {
    let mut rng = ChaCha20Rng::seed_from_u64(40);
    let keypair = Bls12381::keypair(&mut rng).unwrap();
    let pk = Bls12381::public_key(&keypair);
    let sk = Bls12381::secret_key(&keypair);

    let sig = Bls12381::sign(b"trait message", &sk).unwrap();
    assert!(Bls12381::verify(b"trait message", &sig, &pk).is_ok());
    assert!(matches!(
        Bls12381::verify(b"other message", &sig, &pk),
        Err(bls381_api::Error::InvalidSignature { .. })
    ));

    let keypair2 = Bls12381::keypair(&mut rng).unwrap();
    let sig2 = Bls12381::sign(b"second", &keypair2.1).unwrap();
    let aggregate = Bls12381::aggregate_signatures(&[sig, sig2]).unwrap();
    let messages: [&[u8]; 2] = [b"trait message", b"second"];
    assert!(Bls12381::verify_aggregate(&messages, &aggregate, &[pk, keypair2.0]).is_ok());
    assert!(matches!(
        Bls12381::aggregate_public_keys(&[]),
        Err(bls381_api::Error::InvalidParameter {
            context: "bls aggregate public keys",
            ..
        })
    ));
}
