//! Hash-to-curve tests for BLS12-381 G2

use super::super::field::Fq2;
use super::super::g2::G2Projective;
use super::super::hash_to_curve::{
    encode_to_curve, hash_to_curve, hash_to_field, isogeny_map, map_to_curve_sswu, HashAlgorithm,
    HashToCurveConfig,
};
use super::{g2_off_subgroup, rng};

#[test]
fn test_cofactor_clearing_agrees_on_hashed_points() {
    let config = HashToCurveConfig::default();
    let messages: [&[u8]; 3] = [b"", b"abc", b"a longer message to hash"];
    for msg in messages {
        let u = hash_to_field(msg, 2, &config).unwrap();
        let (x0, y0, z0) = map_to_curve_sswu(&u[0]).unwrap();
        let (x1, y1, z1) = map_to_curve_sswu(&u[1]).unwrap();
        let (x0, y0, z0) = isogeny_map(&x0, &y0, &z0);
        let (x1, y1, z1) = isogeny_map(&x1, &y1, &z1);
        let q = G2Projective::from_coordinates(x0, y0, z0).unwrap()
            + G2Projective::from_coordinates(x1, y1, z1).unwrap();

        let fast = q.clear_cofactor();
        assert_eq!(fast, q.clear_cofactor_by_scalar());
        assert_eq!(fast, hash_to_curve(msg, &config).unwrap());
    }
}

#[test]
fn test_hash_to_curve_is_deterministic() {
    let config = HashToCurveConfig::default();
    let a = hash_to_curve(b"message", &config).unwrap();
    let b = hash_to_curve(b"message", &config).unwrap();
    assert_eq!(a, b);
    assert!(bool::from(a.is_torsion_free()));
    assert!(!bool::from(a.is_identity()));
}

#[test]
fn test_domain_separation() {
    let base = HashToCurveConfig::default();
    let other = HashToCurveConfig::new(b"ANOTHER_APPLICATION_DST".to_vec());
    let sha512 = HashToCurveConfig::default().with_hash(HashAlgorithm::Sha512);

    let a = hash_to_curve(b"message", &base).unwrap();
    assert_ne!(a, hash_to_curve(b"message", &other).unwrap());
    assert_ne!(a, hash_to_curve(b"message", &sha512).unwrap());
    assert_ne!(a, hash_to_curve(b"message!", &base).unwrap());
    assert_ne!(a, encode_to_curve(b"message", &base).unwrap());
}

#[test]
fn test_map_accepts_random_inputs() {
    let mut rng = rng(400);
    for _ in 0..10 {
        let u = Fq2::random(&mut rng);
        let (x, y, z) = map_to_curve_sswu(&u).unwrap();
        let (x, y, z) = isogeny_map(&x, &y, &z);
        let p = G2Projective::from_coordinates(x, y, z).unwrap();
        assert!(bool::from(p.clear_cofactor().is_torsion_free()));
    }
}

#[test]
fn test_unhashed_images_leave_subgroup() {
    assert!(!bool::from(g2_off_subgroup(9).is_torsion_free()));
}
