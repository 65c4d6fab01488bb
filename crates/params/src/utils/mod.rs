//! Shared constant values
//!
//! Hash sizes used by the message expander.

pub mod hash;
