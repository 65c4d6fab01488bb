//! Public API traits and types for the bls381 library
//!
//! This crate provides the public API surface shared by the algorithm and
//! protocol crates: the signature traits and the public error type.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

pub use traits::{Signature, SignatureAggregate};

// Re-export trait modules for direct access
pub use traits::signature;
