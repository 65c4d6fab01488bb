//! BLS Signature Schemes
//!
//! This crate implements BLS signatures over BLS12-381 with public keys in
//! G1 and signatures in G2, including aggregation and batch verification.

pub mod bls;
pub mod error;

pub use bls::{
    aggregate_public_keys, aggregate_signatures, get_public_key, sign, sign_point, sign_with_config,
    verify, verify_batch, verify_batch_with_config, verify_multiple, verify_point,
    verify_with_config, Bls12381, BlsSignature, PublicKey, SecretKey,
};
pub use error::{Error, Result};
