//! Trait definitions shared across the bls381 crates

pub mod signature;

pub use signature::{Signature, SignatureAggregate};
