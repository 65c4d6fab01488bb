//! `expand_message_xmd` from RFC 9380 section 5.3.1

use std::borrow::Cow;

use log::trace;
use sha2::digest::core_api::BlockSizeUser;
use sha2::Digest;

use bls381_params::traditional::bls::{MAX_DST_LENGTH, OVERSIZE_DST_PREFIX};

use crate::error::{validate, Error, Result};

/// Largest output RFC 9380 allows regardless of the hash
const MAX_OUTPUT_LENGTH: usize = 65535;

/// Shorten a tag longer than 255 bytes to `H("H2C-OVERSIZE-DST-" || dst)`
fn reduce_dst<D: Digest>(dst: &[u8]) -> Cow<'_, [u8]> {
    if dst.len() <= MAX_DST_LENGTH {
        return Cow::Borrowed(dst);
    }
    let mut hasher = D::new();
    hasher.update(OVERSIZE_DST_PREFIX);
    hasher.update(dst);
    Cow::Owned(hasher.finalize().to_vec())
}

/// Expand `msg` into `len_in_bytes` uniform bytes under the tag `dst`.
///
/// Each output block is `b_i = H((b_0 xor b_(i-1)) || i || DST')`, where
/// `b_0` hashes the message behind a zero block of the hash's input size.
pub fn expand_message_xmd<D>(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>>
where
    D: Digest + BlockSizeUser,
{
    let b_in_bytes = <D as Digest>::output_size();
    let s_in_bytes = D::block_size();

    validate::parameter(len_in_bytes > 0, "len_in_bytes", "must be positive")?;
    validate::max_length("expand_message_xmd output", len_in_bytes, MAX_OUTPUT_LENGTH)?;

    let ell = (len_in_bytes + b_in_bytes - 1) / b_in_bytes;
    if ell > 255 {
        return Err(Error::param("len_in_bytes", "more than 255 hash blocks requested"));
    }

    let dst = reduce_dst::<D>(dst);
    let dst_len = [dst.len() as u8];
    let len_bytes = (len_in_bytes as u16).to_be_bytes();

    let mut hasher = D::new();
    hasher.update(vec![0u8; s_in_bytes]);
    hasher.update(msg);
    hasher.update(len_bytes);
    hasher.update([0u8]);
    hasher.update(&dst[..]);
    hasher.update(dst_len);
    let b_0 = hasher.finalize();

    let mut hasher = D::new();
    hasher.update(&b_0);
    hasher.update([1u8]);
    hasher.update(&dst[..]);
    hasher.update(dst_len);
    let mut b_i = hasher.finalize();

    let mut uniform_bytes = Vec::with_capacity(ell * b_in_bytes);
    uniform_bytes.extend_from_slice(&b_i);

    for i in 2..=ell {
        let xored: Vec<u8> = b_0.iter().zip(b_i.iter()).map(|(a, b)| a ^ b).collect();
        let mut hasher = D::new();
        hasher.update(&xored);
        hasher.update([i as u8]);
        hasher.update(&dst[..]);
        hasher.update(dst_len);
        b_i = hasher.finalize();
        uniform_bytes.extend_from_slice(&b_i);
    }

    uniform_bytes.truncate(len_in_bytes);
    trace!(
        "expand_message_xmd: {} blocks for {} bytes",
        ell,
        len_in_bytes
    );
    Ok(uniform_bytes)
}
