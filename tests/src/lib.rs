//! Shared fixtures for the bls381 integration tests

use bls381_api::Signature;
use bls381_sign::{get_public_key, sign, Bls12381, BlsSignature, PublicKey, SecretKey};
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// One signer with a deterministic key
pub struct Signer {
    pub secret_key: SecretKey,
    pub public_key: PublicKey,
}

impl Signer {
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (public_key, secret_key) = Bls12381::keypair(&mut rng).expect("key generation failed");
        debug!("signer {} has public key {:?}", seed, public_key);
        Signer {
            secret_key,
            public_key,
        }
    }

    pub fn sign(&self, message: &[u8]) -> BlsSignature {
        sign(message, &self.secret_key).expect("signing failed")
    }
}

/// `count` signers seeded from `first` upward
pub fn signers(first: u64, count: usize) -> Vec<Signer> {
    (first..first + count as u64).map(Signer::from_seed).collect()
}

pub fn public_keys(signers: &[Signer]) -> Vec<PublicKey> {
    signers.iter().map(|s| s.public_key).collect()
}

/// Key from raw big-endian bytes
pub fn key_from_bytes(bytes: &[u8]) -> (SecretKey, PublicKey) {
    let sk = SecretKey::from_bytes(bytes).expect("invalid secret key");
    let pk = get_public_key(&sk).expect("public key derivation failed");
    (sk, pk)
}
