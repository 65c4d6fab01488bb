//! # bls381
//!
//! BLS12-381 pairing-friendly curve arithmetic and BLS signatures.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bls381 = "0.3"
//! ```
//!
//! ## Features
//!
//! - `sign` (default): the BLS signature protocol layer
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bls381-api`]: Public traits and error types
//! - [`bls381-params`]: Curve sizes and hash-to-curve identifiers
//! - [`bls381-algorithms`]: Field tower, curve groups, pairing, hash-to-curve
//! - [`bls381-sign`]: BLS key derivation, signing, aggregation, verification

pub use bls381_algorithms as algorithms;
pub use bls381_api as api;
pub use bls381_params as params;

#[cfg(feature = "sign")]
pub use bls381_sign as sign;

// Point predicates return `subtle::Choice`; secret keys implement `Zeroize`
pub use subtle;
pub use zeroize;

/// Common imports for BLS signature users
pub mod prelude {
    pub use crate::api::{Error as ApiError, Result as ApiResult, Signature, SignatureAggregate};

    pub use crate::algorithms::bls12_381::{
        hash_to_curve, pairing, Fq12, G1Affine, G1Projective, G2Affine, G2Projective,
        HashToCurveConfig,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        aggregate_public_keys, aggregate_signatures, get_public_key, sign, verify, verify_batch,
        Bls12381, BlsSignature, PublicKey, SecretKey,
    };
}
