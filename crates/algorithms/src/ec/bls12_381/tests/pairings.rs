//! Pairing tests for BLS12-381

use num_bigint::BigUint;

use super::super::field::{Field, Fq12, Fr};
use super::super::g1::{G1Affine, G1Projective};
use super::super::g2::{G2Affine, G2Projective};
use super::super::pairings::{
    final_exponentiation, miller_loop, multi_miller_loop, pairing, pairing_with, G2Prepared,
};
use super::{big, rng};
use crate::error::Error;

fn random_scalar(seed: u64) -> BigUint {
    Fr::random(rng(seed)).to_biguint() + BigUint::from(1u32)
}

// ============================================================================
// Basic Pairing Tests
// ============================================================================

#[test]
fn test_pairing_bilinearity() {
    let g1 = G1Projective::generator();
    let g2 = G2Projective::generator();

    let p1 = g1.multiply(&big(2)).unwrap();
    let p2 = g1.multiply(&big(3)).unwrap();
    let q1 = g2.multiply(&big(5)).unwrap();
    let q2 = g2.multiply(&big(7)).unwrap();

    // e(P1 + P2, Q) == e(P1, Q) * e(P2, Q)
    let left = pairing(&(p1 + p2), &q1).unwrap();
    let right = pairing(&p1, &q1).unwrap() * pairing(&p2, &q1).unwrap();
    assert_eq!(left, right);

    // e(P, Q1 + Q2) == e(P, Q1) * e(P, Q2)
    let left = pairing(&p1, &(q1 + q2)).unwrap();
    let right = pairing(&p1, &q1).unwrap() * pairing(&p1, &q2).unwrap();
    assert_eq!(left, right);
}

#[test]
fn test_pairing_scalar_multiplication() {
    let p = G1Projective::generator();
    let q = G2Projective::generator();
    let a = random_scalar(200);
    let b = random_scalar(201);

    // e([a]P, [b]Q) == e(P, Q)^(a*b)
    let left = pairing(&p.multiply(&a).unwrap(), &q.multiply(&b).unwrap()).unwrap();
    let right = pairing(&p, &q).unwrap().pow(&(&a * &b));
    assert_eq!(left, right);

    // e([a]P, Q) == e(P, [a]Q)
    let left = pairing(&p.multiply(&a).unwrap(), &q).unwrap();
    let right = pairing(&p, &q.multiply(&a).unwrap()).unwrap();
    assert_eq!(left, right);
}

#[test]
fn test_pairing_non_degeneracy() {
    let e = pairing(&G1Projective::generator(), &G2Projective::generator()).unwrap();
    assert!(!e.is_one());
    // the output has order r
    assert!(e.pow(&Fr::modulus()).is_one());
}

#[test]
fn test_pairing_negation_cancels() {
    let g1 = G1Projective::generator();
    let g2 = G2Projective::generator();

    let left = pairing(&g1, &g2).unwrap();
    let right = pairing(&-g1, &g2).unwrap();
    assert!((left * right).is_one());

    let right = pairing(&g1, &-g2).unwrap();
    assert!((left * right).is_one());
}

// ============================================================================
// Miller loop and precomputation
// ============================================================================

#[test]
fn test_multi_miller_loop_matches_product() {
    let a = G1Projective::generator()
        .multiply(&random_scalar(202))
        .unwrap();
    let b = G2Projective::generator()
        .multiply(&random_scalar(203))
        .unwrap();
    let c = G1Projective::generator()
        .multiply(&random_scalar(204))
        .unwrap();
    let d = G2Projective::generator()
        .multiply(&random_scalar(205))
        .unwrap();

    let (a_aff, c_aff) = (a.to_affine(), c.to_affine());
    let b_pre = G2Prepared::from(b);
    let d_pre = G2Prepared::from(d);

    let combined = final_exponentiation(&multi_miller_loop(&[(&a_aff, &b_pre), (&c_aff, &d_pre)]))
        .unwrap();
    let separate = pairing(&a, &b).unwrap() * pairing(&c, &d).unwrap();
    assert_eq!(combined, separate);
}

#[test]
fn test_multi_miller_loop_skips_identity() {
    let g1 = G1Affine::generator();
    let g2 = G2Prepared::from(G2Affine::generator());
    let o1 = G1Affine::identity();
    let o2 = G2Prepared::from(G2Affine::identity());

    assert_eq!(multi_miller_loop(&[(&o1, &g2)]), Fq12::one());
    assert_eq!(multi_miller_loop(&[(&g1, &o2)]), Fq12::one());
    assert_eq!(multi_miller_loop(&[]), Fq12::one());
    assert_eq!(
        multi_miller_loop(&[(&g1, &g2), (&o1, &g2)]),
        miller_loop(&g1, &g2)
    );
}

#[test]
fn test_pairing_without_final_exponentiation() {
    let p = G1Projective::generator();
    let q = G2Projective::generator();

    let looped = pairing_with(&p, &q, false).unwrap();
    let full = pairing_with(&p, &q, true).unwrap();
    assert_eq!(final_exponentiation(&looped).unwrap(), full);
    assert_eq!(full, pairing(&p, &q).unwrap());
}

#[test]
fn test_prepared_point_reuse() {
    let p = G1Affine::generator();
    let mut q = G2Prepared::from(G2Projective::generator().double());
    assert!(!q.is_cached());

    let first = miller_loop(&p, &q);
    assert!(q.is_cached());
    assert_eq!(miller_loop(&p, &q), first);

    q.clear_pairing_precomputes();
    assert!(!q.is_cached());
    assert_eq!(miller_loop(&p, &q), first);
}

#[test]
fn test_final_exponentiation_rejects_zero() {
    assert!(matches!(
        final_exponentiation(&Fq12::zero()),
        Err(Error::Processing { .. })
    ));
}

// ============================================================================
// Input validation
// ============================================================================

#[test]
fn test_pairing_rejects_identity() {
    let g1 = G1Projective::generator();
    let g2 = G2Projective::generator();
    assert!(matches!(
        pairing(&G1Projective::identity(), &g2),
        Err(Error::Parameter { .. })
    ));
    assert!(matches!(
        pairing(&g1, &G2Projective::identity()),
        Err(Error::Parameter { .. })
    ));
}

#[test]
fn test_pairing_rejects_off_curve_points() {
    let g1 = G1Projective::generator();
    let g2 = G2Projective::generator();
    let bad = G1Projective::new_unchecked(g1.x(), g1.y() + g1.z(), g1.z());
    assert!(matches!(pairing(&bad, &g2), Err(Error::InvalidPoint { .. })));
}
