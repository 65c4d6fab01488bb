//! Constants for pairing-based algorithms

pub mod bls;
