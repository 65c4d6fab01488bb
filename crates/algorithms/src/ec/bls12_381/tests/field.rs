//! Field arithmetic tests for the BLS12-381 tower

use num_bigint::BigUint;

use super::super::field::{Field, Fq, Fq12, Fq2, Fq6, Fr};
use super::rng;

const P_HEX: &[u8] = b"1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";

fn modulus() -> BigUint {
    BigUint::parse_bytes(P_HEX, 16).unwrap()
}

/// Ring axioms and inversion for any field in the tower
fn check_field_laws<F: Field>(a: F, b: F, c: F) {
    assert_eq!(a + b, b + a);
    assert_eq!(a * b, b * a);
    assert_eq!((a + b) + c, a + (b + c));
    assert_eq!((a * b) * c, a * (b * c));
    assert_eq!(a * (b + c), a * b + a * c);
    assert_eq!(a - a, F::zero());
    assert_eq!(a + (-a), F::zero());
    assert_eq!(a * F::one(), a);
    assert_eq!(a * F::zero(), F::zero());
    assert_eq!(-a, F::zero() - a);
    assert_eq!(-a, a * -F::one());
    assert_eq!(a.pow(&BigUint::from(0u32)), F::one());
    assert_eq!(a.square(), a * a);
    assert_eq!(a.double(), a + a);
    assert_eq!(a.mul_by_u64(3), a + a + a);

    if !bool::from(a.is_zero()) {
        let inv = a.invert().unwrap();
        assert_eq!(a * inv, F::one());
        assert_eq!(b.div(&a).unwrap() * a, b);
    }
    assert!(bool::from(F::zero().invert().is_none()));
    assert!(bool::from(a.ct_eq(&a)));
}

// ============================================================================
// Base and scalar fields
// ============================================================================

#[test]
fn test_fq_laws() {
    let mut rng = rng(1);
    for _ in 0..20 {
        check_field_laws(
            Fq::random(&mut rng),
            Fq::random(&mut rng),
            Fq::random(&mut rng),
        );
    }
}

#[test]
fn test_fr_laws() {
    let mut rng = rng(2);
    for _ in 0..20 {
        check_field_laws(
            Fr::random(&mut rng),
            Fr::random(&mut rng),
            Fr::random(&mut rng),
        );
    }
}

#[test]
fn test_fq_sqrt() {
    let mut rng = rng(3);
    for _ in 0..20 {
        let a = Fq::random(&mut rng);
        let root = a.square().sqrt().unwrap();
        assert!(root == a || root == -a);
    }
}

#[test]
fn test_fq_pow_matches_fermat() {
    // a^(p-1) = 1
    let mut rng = rng(4);
    let a = Fq::random(&mut rng);
    let exp = modulus() - BigUint::from(1u32);
    assert_eq!(a.pow(&exp), Fq::one());
}

#[test]
fn test_fq_invert_agrees_with_fermat() {
    let mut rng = rng(40);
    let exp = modulus() - BigUint::from(2u32);
    let mut inputs = vec![Fq::one(), -Fq::one(), Fq::from_u64(2)];
    inputs.extend((0..10).map(|_| Fq::random(&mut rng)));
    for a in inputs {
        assert_eq!(a.invert().unwrap(), a.pow(&exp));
    }
    assert!(bool::from(Fq::zero().invert().is_none()));
}

#[test]
fn test_fq_from_biguint_rejects_modulus() {
    assert!(bool::from(Fq::from_biguint(&modulus()).is_none()));
    let below = modulus() - BigUint::from(1u32);
    assert_eq!(Fq::from_biguint(&below).unwrap(), -Fq::one());
}

#[test]
fn test_fq_lexicographic_order() {
    assert!(!bool::from(Fq::zero().lexicographically_largest()));
    assert!(!bool::from(Fq::one().lexicographically_largest()));
    assert!(bool::from((-Fq::one()).lexicographically_largest()));
}

#[test]
fn test_fr_modulus_annihilates() {
    let order = Fr::modulus();
    assert_eq!(
        Fr::from_u64(7).pow(&(order - BigUint::from(1u32))),
        Fr::one()
    );
}

// ============================================================================
// Extension fields
// ============================================================================

#[test]
fn test_fq2_laws() {
    let mut rng = rng(5);
    for _ in 0..10 {
        check_field_laws(
            Fq2::random(&mut rng),
            Fq2::random(&mut rng),
            Fq2::random(&mut rng),
        );
    }
}

#[test]
fn test_fq2_frobenius_is_p_power() {
    let mut rng = rng(6);
    let a = Fq2::random(&mut rng);
    assert_eq!(a.frobenius_map(1), a.pow(&modulus()));
    assert_eq!(a.frobenius_map(1), a.conjugate());
    assert_eq!(a.frobenius_map(2), a);
}

#[test]
fn test_fq2_sqrt() {
    let mut rng = rng(7);
    for _ in 0..10 {
        let a = Fq2::random(&mut rng);
        let root = a.square().sqrt().unwrap();
        assert_eq!(root.square(), a.square());
        // the canonical root is stable under negation of the input root
        assert_eq!((-a).square().sqrt().unwrap(), root);
    }
}

#[test]
fn test_fq6_laws() {
    let mut rng = rng(8);
    for _ in 0..5 {
        check_field_laws(
            Fq6::random(&mut rng),
            Fq6::random(&mut rng),
            Fq6::random(&mut rng),
        );
    }
}

#[test]
fn test_fq6_frobenius() {
    let mut rng = rng(9);
    let a = Fq6::random(&mut rng);
    assert_eq!(a.frobenius_map(1), a.pow(&modulus()));
    assert_eq!(a.frobenius_map(1).frobenius_map(2), a.frobenius_map(3));
    assert_eq!(a.frobenius_map(6), a);
}

#[test]
fn test_fq6_sparse_multiplication() {
    let mut rng = rng(10);
    let a = Fq6::random(&mut rng);
    let b0 = Fq2::random(&mut rng);
    let b1 = Fq2::random(&mut rng);
    assert_eq!(a.mul_by_1(&b1), a * Fq6::new(Fq2::zero(), b1, Fq2::zero()));
    assert_eq!(a.mul_by_01(&b0, &b1), a * Fq6::new(b0, b1, Fq2::zero()));
}

#[test]
fn test_fq12_laws() {
    let mut rng = rng(11);
    for _ in 0..3 {
        check_field_laws(
            Fq12::random(&mut rng),
            Fq12::random(&mut rng),
            Fq12::random(&mut rng),
        );
    }
}

#[test]
fn test_fq12_frobenius() {
    let mut rng = rng(12);
    let a = Fq12::random(&mut rng);
    assert_eq!(a.frobenius_map(1), a.pow(&modulus()));
    assert_eq!(a.frobenius_map(6), a.conjugate());
    assert_eq!(a.frobenius_map(5).frobenius_map(7), a);
}

#[test]
fn test_fq12_cyclotomic_operations() {
    let mut rng = rng(13);
    let r = Fq12::random(&mut rng);

    // easy part of the final exponentiation lands in the cyclotomic subgroup
    let f = r.conjugate() * r.invert().unwrap();
    let f = f.frobenius_map(2) * f;

    assert_eq!(f.cyclotomic_square(), f.square());
    assert_eq!(f.cyclotomic_exp(0xd201), f.pow_vartime(&[0xd201]));
    // inverse is the conjugate in this subgroup
    assert_eq!(f * f.conjugate(), Fq12::one());
}
