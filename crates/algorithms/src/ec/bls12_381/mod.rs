//! BLS12-381 pairing-friendly elliptic curve implementation.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.
//!
//! - [`field`]: `Fq`, `Fr` and the tower `Fq2 -> Fq6 -> Fq12`
//! - [`curve`]: the projective group law shared by G1 and G2
//! - [`g1`], [`g2`]: the two source groups and their encodings
//! - [`pairings`]: the optimal Ate pairing
//! - [`hash_to_curve`]: RFC 9380 hashing onto G2

pub mod curve;
pub mod field;
pub mod g1;
pub mod g2;
pub mod hash_to_curve;
pub mod pairings;

#[cfg(test)]
mod tests;

pub use curve::{AffinePoint, CurveParams, PrecomputedPoint, ProjectivePoint};
pub use field::{Field, Fq, Fq12, Fq2, Fq6, Fr, Frobenius};
pub use g1::{G1Affine, G1Projective, G1};
pub use g2::{G2Affine, G2Projective, G2};
pub use hash_to_curve::{
    encode_to_curve, expand_message_xmd, hash_to_curve, hash_to_field, HashAlgorithm,
    HashToCurveConfig,
};
pub use pairings::{
    final_exponentiation, miller_loop, multi_miller_loop, pairing, pairing_with, G2Prepared,
};

/// `|x|` for the curve parameter `x = -0xd201000000010000`
pub const BLS_X: u64 = 0xd201_0000_0001_0000;

/// Sign of the curve parameter `x`
pub const BLS_X_IS_NEGATIVE: bool = true;
