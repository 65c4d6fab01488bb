//! Quadratic extension `Fq2 = Fq[i] / (i^2 + 1)`

use core::fmt;

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::arith::less_than;
use super::fq::Fq;
use super::{Field, Frobenius};

/// (p^2 + 7) / 16, the candidate exponent for square roots
const SQRT_EXP: [u64; 12] = [
    0xb26a_a000_01c7_18e4,
    0xd7ce_d6b1_d763_82ea,
    0x3162_c338_3621_13cf,
    0x966b_f91e_d3e7_1b74,
    0xb292_e85a_8709_1a04,
    0x11d6_8619_c861_85c7,
    0xef53_1493_3097_8ef0,
    0x050a_62cf_d16d_dca6,
    0x466e_59e4_9349_e8bd,
    0x9e2d_c90e_50e7_046b,
    0x74bd_278e_aa22_f25e,
    0x002a_437a_4b8c_35fc,
];

/// rv1 with rv1^2 = -1/2
const RV1: Fq = Fq::from_raw_unchecked([
    0x7bcf_a7a2_5aa3_0fda,
    0xdc17_dec1_2a92_7e7c,
    0x2f08_8dd8_6b4e_bef1,
    0xd1ca_2087_da74_d4a7,
    0x2da2_5966_96ce_bc1d,
    0x0e2b_7eed_bbfd_87d2,
]);

/// -rv1
const RV1_NEG: Fq = Fq::from_raw_unchecked([
    0x3e2f_585d_a55c_9ad1,
    0x4294_213d_86c1_8183,
    0x3828_44c8_8b62_3732,
    0x92ad_2afd_1910_3e18,
    0x1d79_4e4f_ac7c_f0b9,
    0x0bd5_92fc_7d82_5ec8,
]);

/// -1 in Montgomery form
const FQ_NEG_ONE: Fq = Fq::from_raw_unchecked([
    0x43f5_ffff_fffc_aaae,
    0x32b7_fff2_ed47_fffd,
    0x07e8_3a49_a2e9_9d69,
    0xeca8_f331_8332_bb7a,
    0xef14_8d1e_a0f4_c069,
    0x040a_b326_3eff_0206,
]);

/// The eighth roots of unity in `Fq2`.
///
/// The even-indexed entries are the fourth roots `1, i, -1, -i`.
pub(crate) const ROOTS_OF_UNITY: [Fq2; 8] = [
    Fq2::new(Fq::one(), Fq::zero()),
    Fq2::new(RV1, RV1_NEG),
    Fq2::new(Fq::zero(), Fq::one()),
    Fq2::new(RV1, RV1),
    Fq2::new(FQ_NEG_ONE, Fq::zero()),
    Fq2::new(RV1_NEG, RV1),
    Fq2::new(Fq::zero(), FQ_NEG_ONE),
    Fq2::new(RV1_NEG, RV1_NEG),
];

/// Build an `Fq2` constant from Montgomery-form limbs
pub(crate) const fn fq2(c0: [u64; 6], c1: [u64; 6]) -> Fq2 {
    Fq2 {
        c0: Fq::from_raw_unchecked(c0),
        c1: Fq::from_raw_unchecked(c1),
    }
}

/// Element `c0 + c1 * i`
#[derive(Copy, Clone)]
pub struct Fq2 {
    pub c0: Fq,
    pub c1: Fq,
}

impl Fq2 {
    #[inline]
    pub const fn new(c0: Fq, c1: Fq) -> Fq2 {
        Fq2 { c0, c1 }
    }

    #[inline]
    pub const fn zero() -> Fq2 {
        Fq2 {
            c0: Fq::zero(),
            c1: Fq::zero(),
        }
    }

    #[inline]
    pub const fn one() -> Fq2 {
        Fq2 {
            c0: Fq::one(),
            c1: Fq::zero(),
        }
    }

    pub const fn from_u64(v: u64) -> Fq2 {
        Fq2 {
            c0: Fq::from_u64(v),
            c1: Fq::zero(),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    pub fn random(mut rng: impl RngCore) -> Fq2 {
        Fq2 {
            c0: Fq::random(&mut rng),
            c1: Fq::random(&mut rng),
        }
    }

    #[inline]
    pub const fn add(&self, rhs: &Fq2) -> Fq2 {
        Fq2 {
            c0: Fq::add(&self.c0, &rhs.c0),
            c1: Fq::add(&self.c1, &rhs.c1),
        }
    }

    #[inline]
    pub const fn sub(&self, rhs: &Fq2) -> Fq2 {
        Fq2 {
            c0: Fq::sub(&self.c0, &rhs.c0),
            c1: Fq::sub(&self.c1, &rhs.c1),
        }
    }

    #[inline]
    pub const fn neg(&self) -> Fq2 {
        Fq2 {
            c0: Fq::neg(&self.c0),
            c1: Fq::neg(&self.c1),
        }
    }

    /// Karatsuba: (a0 + a1 i)(b0 + b1 i) with i^2 = -1
    pub const fn mul(&self, rhs: &Fq2) -> Fq2 {
        let t0 = Fq::mul(&self.c0, &rhs.c0);
        let t1 = Fq::mul(&self.c1, &rhs.c1);
        let s = Fq::mul(&Fq::add(&self.c0, &self.c1), &Fq::add(&rhs.c0, &rhs.c1));

        Fq2 {
            c0: Fq::sub(&t0, &t1),
            c1: Fq::sub(&Fq::sub(&s, &t0), &t1),
        }
    }

    /// (a + b)(a - b) + 2ab i
    pub const fn square(&self) -> Fq2 {
        let a = Fq::add(&self.c0, &self.c1);
        let b = Fq::sub(&self.c0, &self.c1);
        let c = Fq::add(&self.c0, &self.c0);

        Fq2 {
            c0: Fq::mul(&a, &b),
            c1: Fq::mul(&c, &self.c1),
        }
    }

    #[inline]
    pub const fn double(&self) -> Fq2 {
        self.add(self)
    }

    /// Multiply by a base-field scalar
    #[inline]
    pub const fn mul_by_fq(&self, k: &Fq) -> Fq2 {
        Fq2 {
            c0: Fq::mul(&self.c0, k),
            c1: Fq::mul(&self.c1, k),
        }
    }

    /// Multiply by the non-residue `1 + i` used to build `Fq6`
    #[inline]
    pub const fn mul_by_nonresidue(&self) -> Fq2 {
        Fq2 {
            c0: Fq::sub(&self.c0, &self.c1),
            c1: Fq::add(&self.c0, &self.c1),
        }
    }

    #[inline]
    pub const fn conjugate(&self) -> Fq2 {
        Fq2 {
            c0: self.c0,
            c1: Fq::neg(&self.c1),
        }
    }

    /// Raising to p is conjugation, so only the parity of `power` matters
    pub fn frobenius_map(&self, power: usize) -> Fq2 {
        if power % 2 == 1 {
            self.conjugate()
        } else {
            *self
        }
    }

    pub fn pow_vartime(&self, by: &[u64]) -> Fq2 {
        <Fq2 as Field>::pow_vartime(self, by)
    }

    /// 1 / (c0 + c1 i) = (c0 - c1 i) / (c0^2 + c1^2)
    pub fn invert(&self) -> CtOption<Self> {
        let norm = self.c0.square() + self.c1.square();
        norm.invert().map(|t| Fq2 {
            c0: self.c0 * t,
            c1: -(self.c1 * t),
        })
    }

    /// Square root, if one exists.
    ///
    /// The candidate a^((p^2+7)/16) differs from a true root by an eighth
    /// root of unity. Of the two roots `x` and `-x` the one with the larger
    /// imaginary part (then larger real part) is returned.
    pub fn sqrt(&self) -> CtOption<Self> {
        let candidate = self.pow_vartime(&SQRT_EXP);

        let found = ROOTS_OF_UNITY
            .iter()
            .map(|r| candidate * r)
            .find(|x| x.square() == *self);

        match found {
            Some(x1) => {
                let x2 = -x1;
                let root = if canonical_gt(&x2, &x1) { x2 } else { x1 };
                CtOption::new(root, Choice::from(1))
            }
            None => CtOption::new(Fq2::zero(), Choice::from(0)),
        }
    }

    /// RFC 9380 `sgn0` for `m = 2`
    pub fn sgn0(&self) -> Choice {
        let sign_0 = self.c0.is_odd();
        let zero_0 = self.c0.is_zero();
        let sign_1 = self.c1.is_odd();
        sign_0 | (zero_0 & sign_1)
    }

    /// Ordering used to pick the sign of a compressed G2 `y`: compare `c1`
    /// and fall back to `c0` when `c1` is zero.
    pub fn lexicographically_largest(&self) -> Choice {
        self.c1.lexicographically_largest()
            | (self.c1.is_zero() & self.c0.lexicographically_largest())
    }

    /// Big-endian `c1 || c0`
    pub fn to_bytes(&self) -> [u8; 96] {
        let mut res = [0u8; 96];
        res[..48].copy_from_slice(&self.c1.to_bytes());
        res[48..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    pub fn from_bytes(bytes: &[u8; 96]) -> CtOption<Fq2> {
        let mut c1 = [0u8; 48];
        let mut c0 = [0u8; 48];
        c1.copy_from_slice(&bytes[..48]);
        c0.copy_from_slice(&bytes[48..]);

        Fq::from_bytes(&c0).and_then(|c0| Fq::from_bytes(&c1).map(|c1| Fq2 { c0, c1 }))
    }
}

/// Compare by imaginary part, then by real part, as canonical integers
fn canonical_gt(a: &Fq2, b: &Fq2) -> bool {
    let (a1, b1) = (a.c1.to_canonical(), b.c1.to_canonical());
    if a1 != b1 {
        return less_than(&b1, &a1);
    }
    less_than(&b.c0.to_canonical(), &a.c0.to_canonical())
}

impl Field for Fq2 {
    fn zero() -> Self {
        Fq2::zero()
    }

    fn one() -> Self {
        Fq2::one()
    }

    fn from_u64(v: u64) -> Self {
        Fq2::from_u64(v)
    }

    fn is_zero(&self) -> Choice {
        Fq2::is_zero(self)
    }

    fn square(&self) -> Self {
        Fq2::square(self)
    }

    fn double(&self) -> Self {
        Fq2::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fq2::invert(self)
    }
}

impl Frobenius for Fq2 {
    fn frobenius_map(&self, power: usize) -> Self {
        Fq2::frobenius_map(self, power)
    }
}

impl fmt::Debug for Fq2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl Default for Fq2 {
    fn default() -> Self {
        Fq2::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fq2 {}

impl From<Fq> for Fq2 {
    fn from(f: Fq) -> Fq2 {
        Fq2 {
            c0: f,
            c1: Fq::zero(),
        }
    }
}

impl ConstantTimeEq for Fq2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl PartialEq for Fq2 {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Fq2 {}

impl ConditionallySelectable for Fq2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fq2 {
            c0: Fq::conditional_select(&a.c0, &b.c0, choice),
            c1: Fq::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl_field_ops!(Fq2);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_roots_of_unity() {
        for r in ROOTS_OF_UNITY.iter() {
            assert_eq!(r.pow_vartime(&[8]), Fq2::one());
        }
        assert_eq!(RV1.square().double(), -Fq::one());
        assert_eq!(RV1 + RV1_NEG, Fq::zero());
        assert_eq!(FQ_NEG_ONE, -Fq::one());
    }

    #[test]
    fn test_i_squared() {
        let i = Fq2::new(Fq::zero(), Fq::one());
        assert_eq!(i.square(), -Fq2::one());
    }

    #[test]
    fn test_sqrt_canonical() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..10 {
            let a = Fq2::random(&mut rng);
            let root = a.square().sqrt().unwrap();
            assert!(root == a || root == -a);
            assert!(!canonical_gt(&-root, &root));
        }
    }

    #[test]
    fn test_sqrt_non_residue() {
        // 1 + i is the non-residue that defines Fq6
        let xi = Fq2::new(Fq::one(), Fq::one());
        assert!(bool::from(xi.sqrt().is_none()));
    }

    #[test]
    fn test_sgn0() {
        assert!(!bool::from(Fq2::zero().sgn0()));
        assert!(bool::from(Fq2::one().sgn0()));
        assert!(bool::from(Fq2::new(Fq::zero(), Fq::one()).sgn0()));
        assert!(!bool::from(Fq2::new(Fq::from_u64(2), Fq::one()).sgn0()));
    }

    #[test]
    fn test_invert_and_frobenius() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let a = Fq2::random(&mut rng);
        assert_eq!(a * a.invert().unwrap(), Fq2::one());
        assert_eq!(a.frobenius_map(1), a.conjugate());
        assert_eq!(a.frobenius_map(2), a);
        assert!(bool::from(Fq2::zero().invert().is_none()));
    }
}
