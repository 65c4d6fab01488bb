//! Digital signature traits for bls381
//!
//! This module defines the traits that signature schemes implement.
//! The design does not require mutable access to secret keys.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature algorithms
///
/// Secret keys are opaque types that cannot be directly manipulated as bytes.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key
    ///
    /// BLS signatures are deterministic: the same key and message always
    /// produce the same signature.
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Returns `Ok(())` for a valid signature and an `InvalidSignature`
    /// error otherwise.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}

/// Signature schemes whose keys and signatures can be combined
///
/// Aggregation is a group-law sum, so it is order independent.
pub trait SignatureAggregate: Signature {
    /// Combine public keys into a single key
    ///
    /// # Errors
    ///
    /// Returns an error if `public_keys` is empty or a key fails to decode
    fn aggregate_public_keys(public_keys: &[Self::PublicKey]) -> Result<Self::PublicKey>;

    /// Combine signatures into a single signature
    ///
    /// # Errors
    ///
    /// Returns an error if `signatures` is empty or a signature fails to decode
    fn aggregate_signatures(signatures: &[Self::SignatureData]) -> Result<Self::SignatureData>;

    /// Verify an aggregate signature over one message per public key
    ///
    /// Public keys that share a message are summed before pairing, so the
    /// check stays sound when messages repeat.
    fn verify_aggregate(
        messages: &[&[u8]],
        signature: &Self::SignatureData,
        public_keys: &[Self::PublicKey],
    ) -> Result<()>;
}
