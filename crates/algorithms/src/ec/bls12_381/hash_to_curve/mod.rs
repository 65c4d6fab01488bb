//! Hashing to G2 following RFC 9380.
//!
//! Messages are expanded with `expand_message_xmd`, reduced into `Fq2`
//! elements, sent through the simplified SWU map on an isogenous curve and
//! the 3-isogeny, and finally multiplied into the prime-order subgroup.
//! Two suites are provided:
//!
//! - [`hash_to_curve`]: the random-oracle suite (`..._RO_`), which adds the
//!   images of two field elements
//! - [`encode_to_curve`]: the non-uniform suite (`..._NU_`), which maps a
//!   single field element

mod expand;
mod isogeny;
mod sswu;

pub use expand::expand_message_xmd;
pub use isogeny::isogeny_map;
pub use sswu::map_to_curve_sswu;

use log::trace;
use sha2::{Sha256, Sha512};

use bls381_params::traditional::bls::{DEFAULT_DST, HASH_TO_FIELD_L};

use super::field::{Fq, Fq2};
use super::g2::G2Projective;
use crate::error::{validate, Error, Result};

/// Hash function behind `expand_message_xmd`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

/// Domain separation tag and expander hash for one hash-to-curve suite
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashToCurveConfig {
    pub dst: Vec<u8>,
    pub hash: HashAlgorithm,
}

impl HashToCurveConfig {
    /// SHA-256 configuration with the given tag
    pub fn new(dst: impl Into<Vec<u8>>) -> Self {
        HashToCurveConfig {
            dst: dst.into(),
            hash: HashAlgorithm::Sha256,
        }
    }

    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    /// Expand `msg` under this configuration's tag and hash
    pub fn expand(&self, msg: &[u8], len_in_bytes: usize) -> Result<Vec<u8>> {
        match self.hash {
            HashAlgorithm::Sha256 => expand_message_xmd::<Sha256>(msg, &self.dst, len_in_bytes),
            HashAlgorithm::Sha512 => expand_message_xmd::<Sha512>(msg, &self.dst, len_in_bytes),
        }
    }
}

impl Default for HashToCurveConfig {
    fn default() -> Self {
        HashToCurveConfig::new(DEFAULT_DST)
    }
}

/// Hash `msg` to `count` elements of `Fq2`, each coefficient drawn from
/// 64 expanded bytes.
pub fn hash_to_field(msg: &[u8], count: usize, config: &HashToCurveConfig) -> Result<Vec<Fq2>> {
    validate::parameter(count > 0, "count", "must request at least one element")?;

    let len_in_bytes = count
        .checked_mul(2 * HASH_TO_FIELD_L)
        .ok_or_else(|| Error::param("count", "expanded length overflows usize"))?;

    let uniform_bytes = config.expand(msg, len_in_bytes)?;
    let reduce = |chunk: &[u8]| {
        let mut wide = [0u8; HASH_TO_FIELD_L];
        wide.copy_from_slice(chunk);
        Fq::from_bytes_wide(&wide)
    };

    let elements: Vec<Fq2> = uniform_bytes
        .chunks_exact(2 * HASH_TO_FIELD_L)
        .map(|pair| {
            let (c0, c1) = pair.split_at(HASH_TO_FIELD_L);
            Fq2::new(reduce(c0), reduce(c1))
        })
        .collect();

    trace!("hash_to_field: {} elements", elements.len());
    Ok(elements)
}

/// SWU map followed by the isogeny, without cofactor clearing
fn map_to_curve(u: &Fq2) -> Result<G2Projective> {
    let (x, y, z) = map_to_curve_sswu(u)?;
    let (x, y, z) = isogeny_map(&x, &y, &z);
    Ok(G2Projective::new_unchecked(x, y, z))
}

/// Random-oracle hash of `msg` onto G2
pub fn hash_to_curve(msg: &[u8], config: &HashToCurveConfig) -> Result<G2Projective> {
    let u = hash_to_field(msg, 2, config)?;
    let q0 = map_to_curve(&u[0])?;
    let q1 = map_to_curve(&u[1])?;
    trace!("hash_to_curve: mapped both field elements");

    let p = (q0 + q1).clear_cofactor();
    trace!("hash_to_curve: cleared cofactor");
    Ok(p)
}

/// Non-uniform encoding of `msg` onto G2
pub fn encode_to_curve(msg: &[u8], config: &HashToCurveConfig) -> Result<G2Projective> {
    let u = hash_to_field(msg, 1, config)?;
    let p = map_to_curve(&u[0])?.clear_cofactor();
    trace!("encode_to_curve: cleared cofactor");
    Ok(p)
}
