//! BLS12-381 test suite
//!
//! Tests are organized into focused modules for better maintainability.

mod field;
mod hash_to_curve;
mod pairings;

use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::field::{Fq, Fq2};
use super::g1::{G1Affine, G1Projective};
use super::g2::G2Projective;
use super::hash_to_curve::{isogeny_map, map_to_curve_sswu};

/// Deterministic RNG so failures reproduce
pub(crate) fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

pub(crate) fn big(v: u64) -> BigUint {
    BigUint::from(v)
}

/// A point of E1 found by incrementing x; almost surely outside G1
pub(crate) fn g1_off_subgroup() -> G1Projective {
    let mut x = Fq::from_u64(1);
    loop {
        let rhs = x.square() * x + Fq::from_u64(4);
        if let Some(y) = Option::<Fq>::from(rhs.sqrt()) {
            return G1Affine::from_coordinates(x, y).unwrap().to_projective();
        }
        x += Fq::one();
    }
}

/// Image of `u` on E2 before cofactor clearing
pub(crate) fn g2_off_subgroup(u: u64) -> G2Projective {
    let (x, y, z) = map_to_curve_sswu(&Fq2::from_u64(u)).unwrap();
    let (x, y, z) = isogeny_map(&x, &y, &z);
    G2Projective::from_coordinates(x, y, z).unwrap()
}
