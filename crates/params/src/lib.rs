//! Constant values for bls381 operations
//!
//! Sizes, suite identifiers and defaults shared by the algorithm and
//! protocol crates.

#![no_std]

pub mod traditional;
pub mod utils;
