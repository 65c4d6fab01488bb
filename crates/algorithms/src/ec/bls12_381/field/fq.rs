//! BLS12-381 base field `GF(p)` where p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab

use core::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::arith::{
    add_mod, from_montgomery, less_than, limbs_from_be_bytes, limbs_to_be_bytes, mont_mul, neg_mod,
    sub_mod,
};
use super::Field;

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus p
pub(crate) const MODULUS: [u64; 6] = [
    0xb9fe_ffff_ffff_aaab,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x89f3_fffc_fffc_fffd;

/// Montgomery R = 2^384 mod p
const R: Fq = Fq([
    0x7609_0000_0002_fffd,
    0xebf4_000b_c40c_0002,
    0x5f48_9857_53c7_58ba,
    0x77ce_5853_7052_5745,
    0x5c07_1a97_a256_ec6d,
    0x15f6_5ec3_fa80_e493,
]);

/// Montgomery R^2 = 2^768 mod p
const R2: Fq = Fq([
    0xf4df_1f34_1c34_1746,
    0x0a76_e6a6_09d1_04f1,
    0x8de5_476c_4c95_b6d5,
    0x67eb_88a9_939d_83c0,
    0x9a79_3e85_b519_952d,
    0x1198_8fe5_92ca_e3aa,
]);

/// Montgomery R^3 = 2^1152 mod p
const R3: Fq = Fq([
    0xed48_ac6b_d94c_a1e0,
    0x315f_831e_03a7_adf8,
    0x9a53_352a_615e_29dd,
    0x34c0_4e5e_921e_1761,
    0x2512_d435_6572_4728,
    0x0aa6_3460_9175_5d4d,
]);

/// (p + 1) / 4, the square root exponent (p = 3 mod 4)
const SQRT_EXP: [u64; 6] = [
    0xee7f_bfff_ffff_eaab,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// (p + 1) / 2: canonical values at or above this are "negative"
const HALF_MODULUS_PLUS_ONE: [u64; 6] = [
    0xdcff_7fff_ffff_d556,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fq(a) = aR mod p, with R = 2^384
#[derive(Copy, Clone)]
pub struct Fq(pub(crate) [u64; 6]);

impl Fq {
    #[inline]
    pub const fn zero() -> Fq {
        Fq([0, 0, 0, 0, 0, 0])
    }

    #[inline]
    pub const fn one() -> Fq {
        R
    }

    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fq::zero())
    }

    /// Wrap limbs that are already in Montgomery form
    #[inline]
    pub const fn from_raw_unchecked(v: [u64; 6]) -> Fq {
        Fq(v)
    }

    /// Lift a small integer into Montgomery form
    pub const fn from_u64(v: u64) -> Fq {
        Fq::mul(&Fq([v, 0, 0, 0, 0, 0]), &R2)
    }

    #[inline]
    pub const fn add(&self, rhs: &Fq) -> Fq {
        Fq(add_mod(&self.0, &rhs.0, &MODULUS))
    }

    #[inline]
    pub const fn sub(&self, rhs: &Fq) -> Fq {
        Fq(sub_mod(&self.0, &rhs.0, &MODULUS))
    }

    #[inline]
    pub const fn neg(&self) -> Fq {
        Fq(neg_mod(&self.0, &MODULUS))
    }

    #[inline]
    pub const fn mul(&self, rhs: &Fq) -> Fq {
        Fq(mont_mul(&self.0, &rhs.0, &MODULUS, INV))
    }

    #[inline]
    pub const fn square(&self) -> Fq {
        self.mul(self)
    }

    #[inline]
    pub const fn double(&self) -> Fq {
        self.add(self)
    }

    /// Canonical (non-Montgomery) limbs
    #[inline]
    pub(crate) const fn to_canonical(&self) -> [u64; 6] {
        from_montgomery(&self.0, &MODULUS, INV)
    }

    // ========================================================================
    // Advanced Field Operations
    // ========================================================================

    /// Variable-time exponentiation by a public exponent
    pub fn pow_vartime(&self, by: &[u64]) -> Self {
        <Fq as Field>::pow_vartime(self, by)
    }

    /// Compute square root if it exists
    ///
    /// p = 3 (mod 4), so the candidate is a^((p+1)/4); it is returned only
    /// if it squares back to `self`.
    pub fn sqrt(&self) -> CtOption<Self> {
        let sqrt = self.pow_vartime(&SQRT_EXP);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Multiplicative inverse by the extended Euclidean algorithm over p
    pub fn invert(&self) -> CtOption<Self> {
        match euclid_inverse(&self.to_biguint(), &Fq::modulus()) {
            Some(inv) => Fq::from_biguint(&inv),
            None => CtOption::new(Fq::zero(), Choice::from(0u8)),
        }
    }

    /// Check if element > (p-1)/2, i.e. floor(2y/p) = 1
    pub fn lexicographically_largest(&self) -> Choice {
        let tmp = self.to_canonical();
        Choice::from(!less_than(&tmp, &HALF_MODULUS_PLUS_ONE) as u8)
    }

    /// Parity of the canonical value, as used by the RFC 9380 `sgn0`
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_canonical()[0] & 1) as u8)
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Decode from big-endian bytes; fails for values >= p
    pub fn from_bytes(bytes: &[u8; 48]) -> CtOption<Fq> {
        let tmp = Fq(limbs_from_be_bytes(bytes));
        let is_some = Choice::from(less_than(&tmp.0, &MODULUS) as u8);

        // Convert to Montgomery form
        CtOption::new(Fq::mul(&tmp, &R2), is_some)
    }

    /// Encode to big-endian bytes
    pub fn to_bytes(self) -> [u8; 48] {
        let mut res = [0u8; 48];
        limbs_to_be_bytes(&self.to_canonical(), &mut res);
        res
    }

    /// Reduce a 64-byte big-endian integer modulo p
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Fq {
        let mut padded = [0u8; 96];
        padded[32..].copy_from_slice(bytes);
        Fq::from_u768(&padded)
    }

    /// Create a uniformly random field element
    pub fn random(mut rng: impl RngCore) -> Fq {
        let mut bytes = [0u8; 96];
        rng.fill_bytes(&mut bytes);
        Fq::from_u768(&bytes)
    }

    /// The element as an unsigned integer in `[0, p)`
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_bytes())
    }

    /// Decode an integer; fails for values >= p
    pub fn from_biguint(v: &BigUint) -> CtOption<Fq> {
        let digits = v.to_bytes_be();
        if digits.len() > 48 {
            return CtOption::new(Fq::zero(), Choice::from(0u8));
        }
        let mut bytes = [0u8; 48];
        bytes[48 - digits.len()..].copy_from_slice(&digits);
        Fq::from_bytes(&bytes)
    }

    /// The field modulus p
    pub fn modulus() -> BigUint {
        let mut bytes = [0u8; 48];
        limbs_to_be_bytes(&MODULUS, &mut bytes);
        BigUint::from_bytes_be(&bytes)
    }

    /// Reduce a 96-byte big-endian integer modulo p
    fn from_u768(bytes: &[u8; 96]) -> Fq {
        // value = hi * 2^384 + lo; each half is below 2^384 so one
        // Montgomery multiplication reduces it
        let hi = Fq(limbs_from_be_bytes(&bytes[..48]));
        let lo = Fq(limbs_from_be_bytes(&bytes[48..]));
        Fq::mul(&lo, &R2).add(&Fq::mul(&hi, &R3))
    }
}

/// `a^-1 mod p`, or `None` when `gcd(a, p) != 1`.
///
/// Keeps the Bezout coefficient of `a` reduced mod p so that no signed
/// arithmetic is needed: each remainder satisfies `r_i = s_i * a (mod p)`.
fn euclid_inverse(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let (mut r0, mut r1) = (p.clone(), a % p);
    let (mut s0, mut s1) = (BigUint::zero(), BigUint::one());
    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 % &r1;
        let s2 = (&s0 + p - (q * &s1) % p) % p;
        r0 = core::mem::replace(&mut r1, r2);
        s0 = core::mem::replace(&mut s1, s2);
    }
    r0.is_one().then_some(s0)
}

impl Field for Fq {
    #[inline]
    fn zero() -> Self {
        Fq::zero()
    }

    #[inline]
    fn one() -> Self {
        Fq::one()
    }

    #[inline]
    fn from_u64(v: u64) -> Self {
        Fq::from_u64(v)
    }

    #[inline]
    fn is_zero(&self) -> Choice {
        Fq::is_zero(self)
    }

    #[inline]
    fn square(&self) -> Self {
        Fq::square(self)
    }

    #[inline]
    fn double(&self) -> Self {
        Fq::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fq::invert(self)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Display for Fq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Default for Fq {
    fn default() -> Self {
        Fq::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fq {}

impl ConstantTimeEq for Fq {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
            & self.0[4].ct_eq(&other.0[4])
            & self.0[5].ct_eq(&other.0[5])
    }
}

impl Eq for Fq {}
impl PartialEq for Fq {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fq {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fq([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
            u64::conditional_select(&a.0[5], &b.0[5], choice),
        ])
    }
}

impl From<u64> for Fq {
    fn from(v: u64) -> Fq {
        Fq::from_u64(v)
    }
}

impl_field_ops!(Fq);
