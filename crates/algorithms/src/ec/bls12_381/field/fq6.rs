//! Cubic extension `Fq6 = Fq2[v] / (v^3 - (1 + i))`

use core::fmt;

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fq2::{fq2, Fq2};
use super::{Field, Frobenius};

/// xi^((p^k - 1) / 3) for k = 0..5
const FROBENIUS_C1: [Fq2; 6] = [
    fq2(
        [
            0x7609_0000_0002_fffd,
            0xebf4_000b_c40c_0002,
            0x5f48_9857_53c7_58ba,
            0x77ce_5853_7052_5745,
            0x5c07_1a97_a256_ec6d,
            0x15f6_5ec3_fa80_e493,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ),
    fq2(
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
        [
            0xcd03_c9e4_8671_f071,
            0x5dab_2246_1fcd_a5d2,
            0x5870_42af_d385_1b95,
            0x8eb6_0ebe_01ba_cb9e,
            0x03f9_7d6e_83d0_50d2,
            0x18f0_2065_5463_8741,
        ],
    ),
    fq2(
        [
            0x30f1_361b_798a_64e8,
            0xf3b8_ddab_7ece_5a2a,
            0x16a8_ca3a_c615_77f7,
            0xc26a_2ff8_74fd_029b,
            0x3636_b766_6070_1c6e,
            0x051b_a4ab_241b_6160,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ),
    fq2(
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
        [
            0x7609_0000_0002_fffd,
            0xebf4_000b_c40c_0002,
            0x5f48_9857_53c7_58ba,
            0x77ce_5853_7052_5745,
            0x5c07_1a97_a256_ec6d,
            0x15f6_5ec3_fa80_e493,
        ],
    ),
    fq2(
        [
            0xcd03_c9e4_8671_f071,
            0x5dab_2246_1fcd_a5d2,
            0x5870_42af_d385_1b95,
            0x8eb6_0ebe_01ba_cb9e,
            0x03f9_7d6e_83d0_50d2,
            0x18f0_2065_5463_8741,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ),
    fq2(
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
        [
            0x30f1_361b_798a_64e8,
            0xf3b8_ddab_7ece_5a2a,
            0x16a8_ca3a_c615_77f7,
            0xc26a_2ff8_74fd_029b,
            0x3636_b766_6070_1c6e,
            0x051b_a4ab_241b_6160,
        ],
    ),
];

/// xi^(2 (p^k - 1) / 3) for k = 0..5
const FROBENIUS_C2: [Fq2; 6] = [
    fq2(
        [
            0x7609_0000_0002_fffd,
            0xebf4_000b_c40c_0002,
            0x5f48_9857_53c7_58ba,
            0x77ce_5853_7052_5745,
            0x5c07_1a97_a256_ec6d,
            0x15f6_5ec3_fa80_e493,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ),
    fq2(
        [
            0x890d_c9e4_8675_45c3,
            0x2af3_2253_3285_a5d5,
            0x5088_0866_309b_7e2c,
            0xa20d_1b8c_7e88_1024,
            0x14e4_f04f_e2db_9068,
            0x14e5_6d3f_1564_853a,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ),
    fq2(
        [
            0xcd03_c9e4_8671_f071,
            0x5dab_2246_1fcd_a5d2,
            0x5870_42af_d385_1b95,
            0x8eb6_0ebe_01ba_cb9e,
            0x03f9_7d6e_83d0_50d2,
            0x18f0_2065_5463_8741,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ),
    fq2(
        [
            0x43f5_ffff_fffc_aaae,
            0x32b7_fff2_ed47_fffd,
            0x07e8_3a49_a2e9_9d69,
            0xeca8_f331_8332_bb7a,
            0xef14_8d1e_a0f4_c069,
            0x040a_b326_3eff_0206,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ),
    fq2(
        [
            0x30f1_361b_798a_64e8,
            0xf3b8_ddab_7ece_5a2a,
            0x16a8_ca3a_c615_77f7,
            0xc26a_2ff8_74fd_029b,
            0x3636_b766_6070_1c6e,
            0x051b_a4ab_241b_6160,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ),
    fq2(
        [
            0xecfb_361b_798d_ba3a,
            0xc100_ddb8_9186_5a2c,
            0x0ec0_8ff1_232b_da8e,
            0xd5c1_3cc6_f1ca_4721,
            0x4722_2a47_bf7b_5c04,
            0x0110_f184_e51c_5f59,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ),
];

/// Element `c0 + c1 v + c2 v^2`
#[derive(Copy, Clone)]
pub struct Fq6 {
    pub c0: Fq2,
    pub c1: Fq2,
    pub c2: Fq2,
}

impl Fq6 {
    #[inline]
    pub const fn new(c0: Fq2, c1: Fq2, c2: Fq2) -> Fq6 {
        Fq6 { c0, c1, c2 }
    }

    #[inline]
    pub const fn zero() -> Fq6 {
        Fq6 {
            c0: Fq2::zero(),
            c1: Fq2::zero(),
            c2: Fq2::zero(),
        }
    }

    #[inline]
    pub const fn one() -> Fq6 {
        Fq6 {
            c0: Fq2::one(),
            c1: Fq2::zero(),
            c2: Fq2::zero(),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    pub fn random(mut rng: impl RngCore) -> Fq6 {
        Fq6 {
            c0: Fq2::random(&mut rng),
            c1: Fq2::random(&mut rng),
            c2: Fq2::random(&mut rng),
        }
    }

    #[inline]
    pub fn add(&self, rhs: &Fq6) -> Fq6 {
        Fq6 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }

    #[inline]
    pub fn sub(&self, rhs: &Fq6) -> Fq6 {
        Fq6 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }

    #[inline]
    pub fn neg(&self) -> Fq6 {
        Fq6 {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }

    /// Karatsuba over three coefficients, folding `v^3` into `1 + i`
    pub fn mul(&self, rhs: &Fq6) -> Fq6 {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let t2 = self.c2 * rhs.c2;

        Fq6 {
            c0: t0 + ((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - t1 - t2).mul_by_nonresidue(),
            c1: (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - t0 - t1 + t2.mul_by_nonresidue(),
            c2: t1 + (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - t0 - t2,
        }
    }

    #[inline]
    pub fn square(&self) -> Fq6 {
        self.mul(self)
    }

    /// Multiply by an `Fq2` scalar
    pub fn mul_by_fq2(&self, k: &Fq2) -> Fq6 {
        Fq6 {
            c0: self.c0 * k,
            c1: self.c1 * k,
            c2: self.c2 * k,
        }
    }

    /// Multiply by `b1 v`
    pub fn mul_by_1(&self, b1: &Fq2) -> Fq6 {
        Fq6 {
            c0: (self.c2 * b1).mul_by_nonresidue(),
            c1: self.c0 * b1,
            c2: self.c1 * b1,
        }
    }

    /// Multiply by `b0 + b1 v`
    pub fn mul_by_01(&self, b0: &Fq2, b1: &Fq2) -> Fq6 {
        let t0 = self.c0 * b0;
        let t1 = self.c1 * b1;

        Fq6 {
            c0: ((self.c1 + self.c2) * b1 - t1).mul_by_nonresidue() + t0,
            c1: (b0 + b1) * (self.c0 + self.c1) - t0 - t1,
            c2: (self.c0 + self.c2) * b0 - t0 + t1,
        }
    }

    /// Multiply by `v`, the non-residue used to build `Fq12`
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Fq6 {
        Fq6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    pub fn frobenius_map(&self, power: usize) -> Fq6 {
        Fq6 {
            c0: self.c0.frobenius_map(power),
            c1: self.c1.frobenius_map(power) * FROBENIUS_C1[power % 6],
            c2: self.c2.frobenius_map(power) * FROBENIUS_C2[power % 6],
        }
    }

    pub fn invert(&self) -> CtOption<Self> {
        let t0 = self.c0.square() - (self.c2 * self.c1).mul_by_nonresidue();
        let t1 = self.c2.square().mul_by_nonresidue() - self.c0 * self.c1;
        let t2 = self.c1.square() - self.c0 * self.c2;

        ((self.c2 * t1 + self.c1 * t2).mul_by_nonresidue() + self.c0 * t0)
            .invert()
            .map(|t4| Fq6 {
                c0: t4 * t0,
                c1: t4 * t1,
                c2: t4 * t2,
            })
    }
}

impl Field for Fq6 {
    fn zero() -> Self {
        Fq6::zero()
    }

    fn one() -> Self {
        Fq6::one()
    }

    fn from_u64(v: u64) -> Self {
        Fq6 {
            c0: Fq2::from_u64(v),
            c1: Fq2::zero(),
            c2: Fq2::zero(),
        }
    }

    fn is_zero(&self) -> Choice {
        Fq6::is_zero(self)
    }

    fn square(&self) -> Self {
        Fq6::square(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fq6::invert(self)
    }
}

impl Frobenius for Fq6 {
    fn frobenius_map(&self, power: usize) -> Self {
        Fq6::frobenius_map(self, power)
    }
}

impl fmt::Debug for Fq6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*v + ({:?})*v^2", self.c0, self.c1, self.c2)
    }
}

impl Default for Fq6 {
    fn default() -> Self {
        Fq6::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fq6 {}

impl From<Fq2> for Fq6 {
    fn from(f: Fq2) -> Fq6 {
        Fq6 {
            c0: f,
            c1: Fq2::zero(),
            c2: Fq2::zero(),
        }
    }
}

impl ConstantTimeEq for Fq6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl PartialEq for Fq6 {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Fq6 {}

impl ConditionallySelectable for Fq6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fq6 {
            c0: Fq2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fq2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fq2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl_field_ops!(Fq6);
