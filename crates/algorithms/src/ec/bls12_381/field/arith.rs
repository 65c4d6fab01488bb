//! Multi-limb Montgomery arithmetic shared by `Fq` (6 limbs) and `Fr` (4 limbs).
//!
//! Limbs are little-endian. Every routine runs the same instruction
//! sequence regardless of the operand values.

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
///
/// The returned borrow is either 0 or all ones, so it can be used as a mask.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Subtract the modulus once if `a >= modulus`
#[inline]
pub(crate) const fn subtract_modulus<const N: usize>(a: &[u64; N], modulus: &[u64; N]) -> [u64; N] {
    let mut r = [0u64; N];
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (v, b) = sbb(a[i], modulus[i], borrow);
        r[i] = v;
        borrow = b;
        i += 1;
    }

    // borrow set means a < modulus: keep a
    let mut i = 0;
    while i < N {
        r[i] = (a[i] & borrow) | (r[i] & !borrow);
        i += 1;
    }
    r
}

#[inline]
pub(crate) const fn add_mod<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    modulus: &[u64; N],
) -> [u64; N] {
    let mut r = [0u64; N];
    let mut carry = 0;
    let mut i = 0;
    while i < N {
        let (v, c) = adc(a[i], b[i], carry);
        r[i] = v;
        carry = c;
        i += 1;
    }
    // Both moduli leave spare top bits, so the final carry is always zero.
    subtract_modulus(&r, modulus)
}

#[inline]
pub(crate) const fn sub_mod<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    modulus: &[u64; N],
) -> [u64; N] {
    let mut r = [0u64; N];
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (v, bw) = sbb(a[i], b[i], borrow);
        r[i] = v;
        borrow = bw;
        i += 1;
    }

    // Add the modulus back if the subtraction underflowed
    let mut carry = 0;
    let mut i = 0;
    while i < N {
        let (v, c) = adc(r[i], modulus[i] & borrow, carry);
        r[i] = v;
        carry = c;
        i += 1;
    }
    r
}

#[inline]
pub(crate) const fn neg_mod<const N: usize>(a: &[u64; N], modulus: &[u64; N]) -> [u64; N] {
    let mut r = [0u64; N];
    let mut borrow = 0;
    let mut acc = 0;
    let mut i = 0;
    while i < N {
        let (v, b) = sbb(modulus[i], a[i], borrow);
        r[i] = v;
        borrow = b;
        acc |= a[i];
        i += 1;
    }

    // -0 must stay 0 rather than become the modulus
    let mask = ((acc == 0) as u64).wrapping_sub(1);
    let mut i = 0;
    while i < N {
        r[i] &= mask;
        i += 1;
    }
    r
}

/// Montgomery reduction of a double-width product held in the low `2N`
/// limbs of `t`.
#[inline]
pub(crate) const fn montgomery_reduce<const N: usize>(
    t: [u64; 12],
    modulus: &[u64; N],
    inv: u64,
) -> [u64; N] {
    let mut t = t;
    let mut carry2 = 0;
    let mut i = 0;
    while i < N {
        let k = t[i].wrapping_mul(inv);
        let (_, mut carry) = mac(t[i], k, modulus[0], 0);
        let mut j = 1;
        while j < N {
            let (v, c) = mac(t[i + j], k, modulus[j], carry);
            t[i + j] = v;
            carry = c;
            j += 1;
        }
        let (v, c) = adc(t[i + N], carry2, carry);
        t[i + N] = v;
        carry2 = c;
        i += 1;
    }

    let mut r = [0u64; N];
    let mut i = 0;
    while i < N {
        r[i] = t[i + N];
        i += 1;
    }
    subtract_modulus(&r, modulus)
}

/// Montgomery product `a * b * R^-1 mod modulus`
#[inline]
pub(crate) const fn mont_mul<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    modulus: &[u64; N],
    inv: u64,
) -> [u64; N] {
    let mut t = [0u64; 12];
    let mut i = 0;
    while i < N {
        let mut carry = 0;
        let mut j = 0;
        while j < N {
            let (v, c) = mac(t[i + j], a[i], b[j], carry);
            t[i + j] = v;
            carry = c;
            j += 1;
        }
        t[i + N] = carry;
        i += 1;
    }
    montgomery_reduce(t, modulus, inv)
}

/// Leave Montgomery form: `a * R^-1 mod modulus`
#[inline]
pub(crate) const fn from_montgomery<const N: usize>(
    a: &[u64; N],
    modulus: &[u64; N],
    inv: u64,
) -> [u64; N] {
    let mut t = [0u64; 12];
    let mut i = 0;
    while i < N {
        t[i] = a[i];
        i += 1;
    }
    montgomery_reduce(t, modulus, inv)
}

/// `a < b` for little-endian limbs, computed without early exit
#[inline]
pub(crate) const fn less_than<const N: usize>(a: &[u64; N], b: &[u64; N]) -> bool {
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (_, bw) = sbb(a[i], b[i], borrow);
        borrow = bw;
        i += 1;
    }
    borrow != 0
}

/// Read big-endian bytes into little-endian limbs
#[inline]
pub(crate) fn limbs_from_be_bytes<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert_eq!(bytes.len(), N * 8);
    let mut limbs = [0u64; N];
    for (i, chunk) in bytes.rchunks_exact(8).enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        limbs[i] = u64::from_be_bytes(word);
    }
    limbs
}

/// Write little-endian limbs as big-endian bytes into `out`
#[inline]
pub(crate) fn limbs_to_be_bytes<const N: usize>(limbs: &[u64; N], out: &mut [u8]) {
    debug_assert_eq!(out.len(), N * 8);
    for (limb, chunk) in limbs.iter().zip(out.rchunks_exact_mut(8)) {
        chunk.copy_from_slice(&limb.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: [u64; 2] = [13, 0];

    #[test]
    fn test_add_sub_wrap() {
        // modulus 13 in a two-limb layout
        assert_eq!(add_mod(&[7, 0], &[9, 0], &SMALL), [3, 0]);
        assert_eq!(sub_mod(&[3, 0], &[9, 0], &SMALL), [7, 0]);
        assert_eq!(neg_mod(&[0, 0], &SMALL), [0, 0]);
        assert_eq!(neg_mod(&[1, 0], &SMALL), [12, 0]);
    }

    #[test]
    fn test_limb_byte_order() {
        let bytes: Vec<u8> = (1..=16).collect();
        let limbs: [u64; 2] = limbs_from_be_bytes(&bytes);
        assert_eq!(limbs[1], 0x0102_0304_0506_0708);
        assert_eq!(limbs[0], 0x090a_0b0c_0d0e_0f10);

        let mut out = [0u8; 16];
        limbs_to_be_bytes(&limbs, &mut out);
        assert_eq!(&out[..], &bytes[..]);
    }

    #[test]
    fn test_less_than() {
        assert!(less_than(&[1, 2], &[0, 3]));
        assert!(!less_than(&[0, 3], &[1, 2]));
        assert!(!less_than(&[5, 5], &[5, 5]));
    }
}
