//! Scalar field of BLS12-381: integers modulo the prime group order
//! r = 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001

use core::fmt;

use num_bigint::BigUint;
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::arith::{
    add_mod, from_montgomery, less_than, limbs_from_be_bytes, limbs_to_be_bytes, mont_mul, neg_mod,
    sub_mod,
};
use super::Field;

/// Group order r
pub(crate) const MODULUS: [u64; 4] = [
    0xffff_ffff_0000_0001,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

/// INV = -(r^{-1} mod 2^64) mod 2^64
const INV: u64 = 0xffff_fffe_ffff_ffff;

/// R = 2^256 mod r
const R: Fr = Fr([
    0x0000_0001_ffff_fffe,
    0x5884_b7fa_0003_4802,
    0x998c_4fef_ecbc_4ff5,
    0x1824_b159_acc5_056f,
]);

/// R^2 = 2^512 mod r
const R2: Fr = Fr([
    0xc999_e990_f3f2_9c6d,
    0x2b6c_edcb_8792_5c23,
    0x05d3_1496_7254_398f,
    0x0748_d9d9_9f59_ff11,
]);

/// R^3 = 2^768 mod r
const R3: Fr = Fr([
    0xc62c_1807_439b_73af,
    0x1b3e_0d18_8cf0_6990,
    0x73d1_3c71_c7b5_f418,
    0x6e2a_5bb9_c8db_33e9,
]);

/// r - 2
const INVERT_EXP: [u64; 4] = [
    0xffff_fffe_ffff_ffff,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

// Tonelli-Shanks constants: r - 1 = 2^S * T with T odd
const S: u32 = 32;

const TONELLI_T: [u64; 4] = [
    0xfffe_5bfe_ffff_ffff,
    0x09a1_d805_53bd_a402,
    0x299d_7d48_3339_d808,
    0x0000_0000_73ed_a753,
];

/// (T + 1) / 2
const TONELLI_TP1_DIV2: [u64; 4] = [
    0x7fff_2dff_8000_0000,
    0x04d0_ec02_a9de_d201,
    0x94ce_bea4_199c_ec04,
    0x0000_0000_39f6_d3a9,
];

/// (r - 1) / 2
const LEGENDRE_EXP: [u64; 4] = [
    0x7fff_ffff_8000_0000,
    0xa9de_d201_7fff_2dff,
    0x199c_ec04_04d0_ec02,
    0x39f6_d3a9_94ce_bea4,
];

/// Quadratic non-residue used to seed Tonelli-Shanks
const NON_RESIDUE: u64 = 5;

/// Element of the scalar field in Montgomery form
#[derive(Copy, Clone)]
pub struct Fr(pub(crate) [u64; 4]);

impl Fr {
    #[inline]
    pub const fn zero() -> Fr {
        Fr([0, 0, 0, 0])
    }

    #[inline]
    pub const fn one() -> Fr {
        R
    }

    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fr::zero())
    }

    pub const fn from_u64(v: u64) -> Fr {
        Fr::mul(&Fr([v, 0, 0, 0]), &R2)
    }

    #[inline]
    pub const fn add(&self, rhs: &Fr) -> Fr {
        Fr(add_mod(&self.0, &rhs.0, &MODULUS))
    }

    #[inline]
    pub const fn sub(&self, rhs: &Fr) -> Fr {
        Fr(sub_mod(&self.0, &rhs.0, &MODULUS))
    }

    #[inline]
    pub const fn neg(&self) -> Fr {
        Fr(neg_mod(&self.0, &MODULUS))
    }

    #[inline]
    pub const fn mul(&self, rhs: &Fr) -> Fr {
        Fr(mont_mul(&self.0, &rhs.0, &MODULUS, INV))
    }

    #[inline]
    pub const fn square(&self) -> Fr {
        self.mul(self)
    }

    pub fn pow_vartime(&self, by: &[u64]) -> Self {
        <Fr as Field>::pow_vartime(self, by)
    }

    /// Computes `x` raised to the power of `2^k`.
    fn pow2k(mut x: Fr, k: u32) -> Fr {
        for _ in 0..k {
            x = x.square();
        }
        x
    }

    /// Legendre symbol as a field element: 1 for squares, -1 for
    /// non-squares, 0 for zero.
    pub fn legendre(&self) -> Fr {
        self.pow_vartime(&LEGENDRE_EXP)
    }

    /// Square root by Tonelli-Shanks.
    ///
    /// r = 1 (mod 2^32), so the p = 3 (mod 4) shortcut used for `Fq` does
    /// not apply. Non-residues are rejected up front by the Legendre symbol.
    pub fn sqrt(&self) -> CtOption<Self> {
        if bool::from(self.is_zero()) {
            return CtOption::new(Fr::zero(), Choice::from(1));
        }
        if self.legendre() != Fr::one() {
            return CtOption::new(Fr::zero(), Choice::from(0));
        }

        let z = Fr::from_u64(NON_RESIDUE);
        let mut c = z.pow_vartime(&TONELLI_T);
        let mut t = self.pow_vartime(&TONELLI_T);
        let mut x = self.pow_vartime(&TONELLI_TP1_DIV2);
        let mut m = S;

        while t != Fr::one() {
            // smallest i in [1, m) with t^(2^i) == 1
            let mut i = 1u32;
            let mut t2i = t.square();
            while i < m && t2i != Fr::one() {
                t2i = t2i.square();
                i += 1;
            }
            if i == m {
                return CtOption::new(Fr::zero(), Choice::from(0));
            }

            let b = Fr::pow2k(c, m - i - 1);
            x = x.mul(&b);
            c = b.square();
            t = t.mul(&c);
            m = i;
        }

        CtOption::new(x, x.square().ct_eq(self))
    }

    /// Multiplicative inverse via Fermat's little theorem: a^(r-2)
    pub fn invert(&self) -> CtOption<Self> {
        let t = self.pow_vartime(&INVERT_EXP);
        CtOption::new(t, !self.is_zero())
    }

    /// Decode a canonical 32-byte big-endian scalar
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Fr> {
        let tmp = Fr(limbs_from_be_bytes(bytes));
        let is_some = Choice::from(less_than(&tmp.0, &MODULUS) as u8);
        CtOption::new(Fr::mul(&tmp, &R2), is_some)
    }

    /// Encode as 32 big-endian bytes
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut res = [0u8; 32];
        limbs_to_be_bytes(&from_montgomery(&self.0, &MODULUS, INV), &mut res);
        res
    }

    /// Reduce a 64-byte big-endian integer modulo r
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Fr {
        let hi = Fr(limbs_from_be_bytes(&bytes[..32]));
        let lo = Fr(limbs_from_be_bytes(&bytes[32..]));
        Fr::mul(&lo, &R2).add(&Fr::mul(&hi, &R3))
    }

    /// Uniformly random scalar
    pub fn random(mut rng: impl RngCore) -> Fr {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        Fr::from_bytes_wide(&bytes)
    }

    /// The scalar as an unsigned integer in `[0, r)`
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_bytes())
    }

    /// The group order r
    pub fn modulus() -> BigUint {
        let mut bytes = [0u8; 32];
        limbs_to_be_bytes(&MODULUS, &mut bytes);
        BigUint::from_bytes_be(&bytes)
    }
}

impl Field for Fr {
    fn zero() -> Self {
        Fr::zero()
    }

    fn one() -> Self {
        Fr::one()
    }

    fn from_u64(v: u64) -> Self {
        Fr::from_u64(v)
    }

    fn is_zero(&self) -> Choice {
        Fr::is_zero(self)
    }

    fn square(&self) -> Self {
        Fr::square(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fr::invert(self)
    }
}

impl fmt::Debug for Fr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl Default for Fr {
    fn default() -> Self {
        Fr::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fr {}

impl ConstantTimeEq for Fr {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl PartialEq for Fr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Fr {}

impl ConditionallySelectable for Fr {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fr([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl From<u64> for Fr {
    fn from(v: u64) -> Fr {
        Fr::from_u64(v)
    }
}

impl From<Fr> for [u8; 32] {
    fn from(value: Fr) -> [u8; 32] {
        value.to_bytes()
    }
}

impl_field_ops!(Fr);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_inv_constant() {
        // -r^{-1} mod 2^64
        let mut inv = 1u64;
        for _ in 0..63 {
            inv = inv.wrapping_mul(inv);
            inv = inv.wrapping_mul(MODULUS[0]);
        }
        assert_eq!(inv.wrapping_neg(), INV);
    }

    #[test]
    fn test_sqrt_roundtrip() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..20 {
            let a = Fr::random(&mut rng);
            let sq = a.square();
            let root = sq.sqrt().unwrap();
            assert!(root == a || root == -a);
        }
    }

    #[test]
    fn test_sqrt_non_residue() {
        let z = Fr::from_u64(NON_RESIDUE);
        assert_eq!(z.legendre(), -Fr::one());
        assert!(bool::from(z.sqrt().is_none()));
        assert_eq!(Fr::zero().sqrt().unwrap(), Fr::zero());
    }

    #[test]
    fn test_invert() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for _ in 0..10 {
            let a = Fr::random(&mut rng);
            assert_eq!(a * a.invert().unwrap(), Fr::one());
        }
        assert!(bool::from(Fr::zero().invert().is_none()));
    }

    #[test]
    fn test_modulus_reduces_to_zero() {
        let mut bytes = [0u8; 32];
        limbs_to_be_bytes(&MODULUS, &mut bytes);
        assert!(bool::from(Fr::from_bytes(&bytes).is_none()));

        let mut wide = [0u8; 64];
        wide[32..].copy_from_slice(&bytes);
        assert_eq!(Fr::from_bytes_wide(&wide), Fr::zero());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let a = Fr::from_u64(0x0102_0304);
        let bytes = a.to_bytes();
        assert_eq!(&bytes[28..], &[1, 2, 3, 4]);
        assert_eq!(Fr::from_bytes(&bytes).unwrap(), a);
        assert_eq!(a.to_biguint(), BigUint::from(0x0102_0304u64));
    }
}
