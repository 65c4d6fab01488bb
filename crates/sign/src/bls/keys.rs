//! Key and signature containers

use num_bigint::BigUint;
use zeroize::{Zeroize, ZeroizeOnDrop};

use bls381_algorithms::bls12_381::{Fq, G1Affine, G1Projective, G2Affine, G2Projective};
use bls381_params::traditional::bls::{BLS_PUBLIC_KEY_SIZE, BLS_SECRET_KEY_SIZE, BLS_SIGNATURE_SIZE};

use crate::error::{Error, Result};

/// BLS secret key.
///
/// Stored as the big-endian encoding of the key reduced modulo the base
/// field prime p. Zero is rejected. The bytes are wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; BLS_SECRET_KEY_SIZE]);

impl SecretKey {
    /// Parse a big-endian key of at most 48 bytes, reducing it modulo p
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.len() > BLS_SECRET_KEY_SIZE {
            return Err(Error::InvalidKey(format!(
                "expected 1 to {} bytes, got {}",
                BLS_SECRET_KEY_SIZE,
                bytes.len()
            )));
        }

        let reduced = BigUint::from_bytes_be(bytes) % Fq::modulus();
        if reduced == BigUint::from(0u32) {
            return Err(Error::InvalidKey("key is zero modulo p".to_string()));
        }

        let mut encoded = reduced.to_bytes_be();
        let mut key = [0u8; BLS_SECRET_KEY_SIZE];
        key[BLS_SECRET_KEY_SIZE - encoded.len()..].copy_from_slice(&encoded);
        encoded.zeroize();
        Ok(SecretKey(key))
    }

    /// The normalized key, 48 bytes big-endian
    pub fn to_bytes(&self) -> [u8; BLS_SECRET_KEY_SIZE] {
        self.0
    }

    pub(crate) fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Compressed G1 public key
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct PublicKey(pub [u8; BLS_PUBLIC_KEY_SIZE]);

impl PublicKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; BLS_PUBLIC_KEY_SIZE] = bytes.try_into().map_err(|_| {
            Error::Encoding(format!(
                "public key must be {} bytes, got {}",
                BLS_PUBLIC_KEY_SIZE,
                bytes.len()
            ))
        })?;
        Ok(PublicKey(array))
    }

    pub fn from_point(point: &G1Projective) -> Self {
        PublicKey(point.to_compressed())
    }

    /// Decode, checking the curve equation and subgroup membership
    pub fn to_point(&self) -> Result<G1Projective> {
        Ok(G1Affine::from_compressed(&self.0)?.into())
    }

    pub fn to_bytes(&self) -> [u8; BLS_PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PublicKey({:02x?})", &self.0[..4])
    }
}

/// Compressed G2 signature
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct BlsSignature(pub [u8; BLS_SIGNATURE_SIZE]);

impl BlsSignature {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; BLS_SIGNATURE_SIZE] = bytes.try_into().map_err(|_| {
            Error::Encoding(format!(
                "signature must be {} bytes, got {}",
                BLS_SIGNATURE_SIZE,
                bytes.len()
            ))
        })?;
        Ok(BlsSignature(array))
    }

    pub fn from_point(point: &G2Projective) -> Self {
        BlsSignature(point.to_compressed())
    }

    /// Decode, checking the curve equation and subgroup membership
    pub fn to_point(&self) -> Result<G2Projective> {
        Ok(G2Affine::from_compressed(&self.0)?.into())
    }

    pub fn to_bytes(&self) -> [u8; BLS_SIGNATURE_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for BlsSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for BlsSignature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BlsSignature({:02x?})", &self.0[..4])
    }
}
