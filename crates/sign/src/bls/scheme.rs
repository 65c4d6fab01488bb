//! The `Bls12381` scheme type behind the library's signature traits

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use bls381_api::{Error as ApiError, Result as ApiResult, ResultExt, Signature, SignatureAggregate};
use bls381_params::traditional::bls::BLS_GENERATED_SECRET_KEY_SIZE;

use super::keys::{BlsSignature, PublicKey, SecretKey};
use crate::error::Error;

const ALGORITHM: &str = "BLS12-381";

/// BLS signatures over BLS12-381 with the default ciphersuite
pub struct Bls12381;

impl Signature for Bls12381 {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type SignatureData = BlsSignature;
    type KeyPair = (PublicKey, SecretKey);

    fn name() -> &'static str {
        ALGORITHM
    }

    /// Draw 32 random bytes until they give a non-zero key
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let mut seed = [0u8; BLS_GENERATED_SECRET_KEY_SIZE];
        let secret_key = loop {
            rng.fill_bytes(&mut seed);
            if let Ok(sk) = SecretKey::from_bytes(&seed) {
                break sk;
            }
        };
        seed.zeroize();

        let public_key = super::get_public_key(&secret_key).with_context("bls keypair")?;
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        super::sign(message, secret_key).with_context("bls sign")
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        if super::verify(signature, message, public_key) {
            Ok(())
        } else {
            Err(verification_failed())
        }
    }
}

impl SignatureAggregate for Bls12381 {
    fn aggregate_public_keys(public_keys: &[Self::PublicKey]) -> ApiResult<Self::PublicKey> {
        super::aggregate_public_keys(public_keys).with_context("bls aggregate public keys")
    }

    fn aggregate_signatures(signatures: &[Self::SignatureData]) -> ApiResult<Self::SignatureData> {
        super::aggregate_signatures(signatures).with_context("bls aggregate signatures")
    }

    fn verify_aggregate(
        messages: &[&[u8]],
        signature: &Self::SignatureData,
        public_keys: &[Self::PublicKey],
    ) -> ApiResult<()> {
        if super::verify_batch(signature, messages, public_keys) {
            Ok(())
        } else {
            Err(verification_failed())
        }
    }
}

fn verification_failed() -> ApiError {
    Error::Verification {
        algorithm: ALGORITHM,
        details: "signature does not match".to_string(),
    }
    .into()
}
