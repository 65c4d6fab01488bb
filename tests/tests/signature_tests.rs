//! End-to-end BLS signature scenarios through the facade crate

use bls381::prelude::*;
use bls381::sign::{verify_multiple, BlsSignature, PublicKey};
use bls381_tests::{key_from_bytes, public_keys, signers, Signer};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_single_signer() {
    init();
    let signer = Signer::from_seed(1);
    let signature = signer.sign(b"transfer 10 coins");

    assert!(verify(&signature, b"transfer 10 coins", &signer.public_key));
    assert!(!verify(&signature, b"transfer 11 coins", &signer.public_key));
}

#[test]
fn test_keys_and_signatures_survive_bytes() {
    init();
    let signer = Signer::from_seed(2);
    let signature = signer.sign(b"serialized");

    let pk = PublicKey::from_bytes(&signer.public_key.to_bytes()).unwrap();
    let sig = BlsSignature::from_bytes(signature.as_ref()).unwrap();
    assert!(verify(&sig, b"serialized", &pk));

    assert!(PublicKey::from_bytes(&[0u8; 47]).is_err());
    assert!(BlsSignature::from_bytes(&[0u8; 97]).is_err());
}

#[test]
fn test_committee_signs_one_block() {
    init();
    let committee = signers(100, 8);
    let block = b"block 42";
    let signatures: Vec<_> = committee.iter().map(|s| s.sign(block)).collect();

    let aggregate = aggregate_signatures(&signatures).unwrap();
    let aggregate_key = aggregate_public_keys(&public_keys(&committee)).unwrap();
    assert!(verify(&aggregate, block, &aggregate_key));

    // a missing member breaks the aggregate
    let partial = aggregate_signatures(&signatures[1..]).unwrap();
    assert!(!verify(&partial, block, &aggregate_key));
}

#[test]
fn test_batch_of_distinct_messages() {
    init();
    let senders = signers(200, 5);
    let messages: Vec<Vec<u8>> = (0..5).map(|i| format!("tx {}", i).into_bytes()).collect();
    let signatures: Vec<_> = senders
        .iter()
        .zip(&messages)
        .map(|(s, m)| s.sign(m))
        .collect();

    let aggregate = aggregate_signatures(&signatures).unwrap();
    let refs: Vec<&[u8]> = messages.iter().map(Vec::as_slice).collect();
    let keys = public_keys(&senders);
    assert!(verify_batch(&aggregate, &refs, &keys));
    assert!(verify_multiple(&aggregate, &refs, &keys));

    // keys paired with the wrong messages
    let mut swapped = keys.clone();
    swapped.swap(0, 1);
    assert!(!verify_batch(&aggregate, &refs, &swapped));
}

#[test]
fn test_batch_with_repeated_messages() {
    init();
    let group = signers(300, 4);
    let messages: [&[u8]; 4] = [b"vote yes", b"vote no", b"vote yes", b"vote yes"];
    let signatures: Vec<_> = group
        .iter()
        .zip(messages.iter())
        .map(|(s, m)| s.sign(m))
        .collect();

    let aggregate = aggregate_signatures(&signatures).unwrap();
    assert!(verify_batch(&aggregate, &messages, &public_keys(&group)));
}

#[test]
fn test_keys_cancelling_under_one_message_are_rejected() {
    init();
    let honest = Signer::from_seed(400);
    let negated = PublicKey::from_point(&(-honest.public_key.to_point().unwrap()));
    let (one_sk, one_pk) = key_from_bytes(&[1]);

    // pk + (-pk) sums to the identity for the shared message
    let signature = aggregate_signatures(&[
        honest.sign(b"m"),
        bls381::sign::sign(b"other", &one_sk).unwrap(),
    ])
    .unwrap();
    let messages: [&[u8]; 3] = [b"m", b"m", b"other"];
    let keys = [honest.public_key, negated, one_pk];
    assert!(!verify_batch(&signature, &messages, &keys));
}

#[test]
fn test_verification_never_panics_on_garbage() {
    init();
    let signer = Signer::from_seed(500);
    let garbage_sig = BlsSignature([0xff; 96]);
    let garbage_pk = PublicKey([0xff; 48]);

    assert!(!verify(&garbage_sig, b"m", &signer.public_key));
    assert!(!verify(&signer.sign(b"m"), b"m", &garbage_pk));
    assert!(!verify_batch(&garbage_sig, &[b"m".as_slice()], &[signer.public_key]));
    assert!(aggregate_signatures(&[garbage_sig]).is_err());
}

#[test]
fn test_trait_interface() {
    init();
    let mut rng = <rand_chacha::ChaCha20Rng as rand::SeedableRng>::seed_from_u64(600);
    let (pk, sk) = Bls12381::keypair(&mut rng).unwrap();
    assert_eq!(Bls12381::name(), "BLS12-381");

    let sig = Bls12381::sign(b"api", &sk).unwrap();
    assert!(Bls12381::verify(b"api", &sig, &pk).is_ok());
    assert!(Bls12381::verify(b"apj", &sig, &pk).is_err());
}
