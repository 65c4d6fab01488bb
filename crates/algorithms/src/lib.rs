//! Arithmetic for the BLS12-381 pairing-friendly curve
//!
//! This crate provides the field tower, the two source groups with their
//! point encodings, the optimal Ate pairing and RFC 9380 hashing to G2.
//! Protocol code such as BLS signatures lives in `bls381-sign`.
//!
//! Field and curve types are immutable values. The two caches in the crate
//! (scalar multiplication tables and pairing line coefficients) are owned
//! by a single wrapper value each and filled at most once.

#![forbid(unsafe_code)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Elliptic curve primitives
pub mod ec;
pub use ec::bls12_381;
pub use ec::bls12_381::{
    hash_to_curve, pairing, Fq, Fq12, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Prepared,
    G2Projective, HashToCurveConfig,
};
