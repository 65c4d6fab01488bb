//! BLS signatures with public keys in G1 and signatures in G2
//!
//! A signature on `m` under secret key `k` is `k H(m)`, where `H` hashes
//! onto G2. It verifies against the public key `k G1` when
//! `e(-pk, H(m)) e(G1, sig) = 1`. Signatures and public keys aggregate by
//! point addition.
//!
//! Verification entry points return `bool` and never propagate errors;
//! the reason for a rejection is logged at debug level.

mod keys;
mod scheme;

#[cfg(test)]
mod tests;

pub use keys::{BlsSignature, PublicKey, SecretKey};
pub use scheme::Bls12381;

use std::collections::HashMap;

use log::debug;

use bls381_algorithms::bls12_381::{
    final_exponentiation, hash_to_curve, multi_miller_loop, G1Affine, G1Projective, G2Prepared,
    G2Projective, HashToCurveConfig,
};

use crate::error::{Error, Result};

/// Derive the compressed public key `k G1`
pub fn get_public_key(secret_key: &SecretKey) -> Result<PublicKey> {
    let point = G1Projective::generator().multiply(&secret_key.scalar())?;
    Ok(PublicKey::from_point(&point))
}

/// Sign with the default hash-to-curve configuration
pub fn sign(message: &[u8], secret_key: &SecretKey) -> Result<BlsSignature> {
    sign_with_config(message, secret_key, &HashToCurveConfig::default())
}

pub fn sign_with_config(
    message: &[u8],
    secret_key: &SecretKey,
    config: &HashToCurveConfig,
) -> Result<BlsSignature> {
    let hashed = hash_to_curve(message, config)?;
    let signature = sign_point(&hashed, secret_key)?;
    Ok(BlsSignature::from_point(&signature))
}

/// Sign a message that is already a G2 point
pub fn sign_point(message: &G2Projective, secret_key: &SecretKey) -> Result<G2Projective> {
    Ok(message.multiply(&secret_key.scalar())?)
}

/// Verify with the default hash-to-curve configuration
pub fn verify(signature: &BlsSignature, message: &[u8], public_key: &PublicKey) -> bool {
    verify_with_config(
        signature,
        message,
        public_key,
        &HashToCurveConfig::default(),
    )
}

pub fn verify_with_config(
    signature: &BlsSignature,
    message: &[u8],
    public_key: &PublicKey,
    config: &HashToCurveConfig,
) -> bool {
    let checked = || -> Result<bool> {
        let signature = signature.to_point()?;
        let public_key = public_key.to_point()?;
        let hashed = hash_to_curve(message, config)?;
        Ok(verify_point(&signature, &hashed, &public_key))
    };

    match checked() {
        Ok(valid) => valid,
        Err(e) => {
            debug!("BLS verify rejected input: {}", e);
            false
        }
    }
}

/// Check `e(-pk, H(m)) e(G1, sig) = 1` for decoded points
pub fn verify_point(
    signature: &G2Projective,
    message: &G2Projective,
    public_key: &G1Projective,
) -> bool {
    if bool::from(public_key.is_identity() | signature.is_identity()) {
        debug!("BLS verify: identity public key or signature");
        return false;
    }

    let neg_pk = (-public_key).to_affine();
    let g1 = G1Affine::generator();
    let hashed = G2Prepared::from(message.to_affine());
    let sig = G2Prepared::from(signature.to_affine());

    pairing_product_is_one(&[(&neg_pk, &hashed), (&g1, &sig)])
}

fn pairing_product_is_one(terms: &[(&G1Affine, &G2Prepared)]) -> bool {
    match final_exponentiation(&multi_miller_loop(terms)) {
        Ok(gt) => {
            let valid = gt.is_one();
            if !valid {
                debug!("BLS verify: pairing check failed");
            }
            valid
        }
        Err(e) => {
            debug!("BLS verify: {}", e);
            false
        }
    }
}

/// Sum public keys into one key
pub fn aggregate_public_keys(public_keys: &[PublicKey]) -> Result<PublicKey> {
    if public_keys.is_empty() {
        return Err(Error::EmptyInput("public keys"));
    }
    let sum = public_keys
        .iter()
        .map(PublicKey::to_point)
        .sum::<Result<G1Projective>>()?;
    Ok(PublicKey::from_point(&sum))
}

/// Sum signatures into one signature
pub fn aggregate_signatures(signatures: &[BlsSignature]) -> Result<BlsSignature> {
    if signatures.is_empty() {
        return Err(Error::EmptyInput("signatures"));
    }
    let sum = signatures
        .iter()
        .map(BlsSignature::to_point)
        .sum::<Result<G2Projective>>()?;
    Ok(BlsSignature::from_point(&sum))
}

/// Verify an aggregate signature over `messages[i]` signed by
/// `public_keys[i]`, with the default configuration
pub fn verify_batch(
    signature: &BlsSignature,
    messages: &[&[u8]],
    public_keys: &[PublicKey],
) -> bool {
    verify_batch_with_config(
        signature,
        messages,
        public_keys,
        &HashToCurveConfig::default(),
    )
}

/// Same as [`verify_batch`]
pub fn verify_multiple(
    signature: &BlsSignature,
    messages: &[&[u8]],
    public_keys: &[PublicKey],
) -> bool {
    verify_batch(signature, messages, public_keys)
}

/// Keys sharing a message are summed first, so each distinct message costs
/// one Miller loop and a repeated message cannot be used to cancel keys.
pub fn verify_batch_with_config(
    signature: &BlsSignature,
    messages: &[&[u8]],
    public_keys: &[PublicKey],
    config: &HashToCurveConfig,
) -> bool {
    if messages.is_empty() || messages.len() != public_keys.len() {
        debug!(
            "BLS verify_batch: {} messages for {} public keys",
            messages.len(),
            public_keys.len()
        );
        return false;
    }

    let checked = || -> Result<bool> {
        let signature = signature.to_point()?;
        if bool::from(signature.is_identity()) {
            debug!("BLS verify_batch: identity signature");
            return Ok(false);
        }

        // first-seen order of the distinct messages
        let mut order: Vec<&[u8]> = Vec::new();
        let mut grouped: HashMap<&[u8], G1Projective> = HashMap::new();
        for (message, public_key) in messages.iter().copied().zip(public_keys) {
            let point = public_key.to_point()?;
            grouped
                .entry(message)
                .and_modify(|sum| *sum += point)
                .or_insert_with(|| {
                    order.push(message);
                    point
                });
        }

        let mut g1_points = Vec::with_capacity(order.len() + 1);
        let mut g2_points = Vec::with_capacity(order.len() + 1);
        for message in &order {
            let key = grouped[message];
            if bool::from(key.is_identity()) {
                debug!("BLS verify_batch: keys for one message sum to the identity");
                return Ok(false);
            }
            g1_points.push(key);
            g2_points.push(G2Prepared::from(hash_to_curve(message, config)?));
        }
        g1_points.push(-G1Projective::generator());
        g2_points.push(G2Prepared::from(signature));

        let g1_affine = G1Projective::batch_normalize(&g1_points);
        let terms: Vec<(&G1Affine, &G2Prepared)> = g1_affine.iter().zip(g2_points.iter()).collect();
        Ok(pairing_product_is_one(&terms))
    };

    match checked() {
        Ok(valid) => valid,
        Err(e) => {
            debug!("BLS verify_batch rejected input: {}", e);
            false
        }
    }
}
