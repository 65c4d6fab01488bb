//! Elliptic curve primitives

pub mod bls12_381;

pub use bls12_381::{
    pairing as bls12_381_pairing, Fq12 as Bls12_381Gt, G1Projective as Bls12_381G1,
    G2Projective as Bls12_381G2,
};
