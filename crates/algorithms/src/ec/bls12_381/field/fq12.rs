//! Quadratic extension `Fq12 = Fq6[w] / (w^2 - v)`, the pairing target field

use core::fmt;

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fq2::{fq2, Fq2};
use super::fq6::Fq6;
use super::{Field, Frobenius};
use crate::ec::bls12_381::BLS_X;

/// xi^((p^k - 1) / 6) for k = 0..11
const FROBENIUS_C1: [Fq2; 12] = [
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
            0x0708_9552_b319_d465,
            0xc669_5f92_b50a_8313,
            0x97e8_3ccc_d117_228f,
            0xa35b_aeca_b2dc_29ee,
            0x1ce3_93ea_5daa_ce4d,
            0x08f2_220f_b0fb_66eb,
        ],
        [
            0xb2f6_6aad_4ce5_d646,
            0x5842_a06b_fc49_7cec,
            0xcf48_95d4_2599_d394,
            0xc11b_9cba_40a8_e8d0,
            0x2e38_13cb_e5a0_de89,
            0x110e_efda_8884_7faf,
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
    fq2(
        [
            0x3e2f_585d_a55c_9ad1,
            0x4294_213d_86c1_8183,
            0x3828_44c8_8b62_3732,
            0x92ad_2afd_1910_3e18,
            0x1d79_4e4f_ac7c_f0b9,
            0x0bd5_92fc_7d82_5ec8,
        ],
        [
            0x7bcf_a7a2_5aa3_0fda,
            0xdc17_dec1_2a92_7e7c,
            0x2f08_8dd8_6b4e_bef1,
            0xd1ca_2087_da74_d4a7,
            0x2da2_5966_96ce_bc1d,
            0x0e2b_7eed_bbfd_87d2,
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
            0x3726_c30a_f242_c66c,
            0x7c2a_c1aa_d1b6_fe70,
            0xa040_07fb_ba4b_14a2,
            0xef51_7c32_6634_1429,
            0x0095_ba65_4ed2_226b,
            0x02e3_70ec_cc86_f7dd,
        ],
        [
            0x82d8_3cf5_0dbc_e43f,
            0xa281_3e53_df9d_018f,
            0xc6f0_caa5_3c65_e181,
            0x7525_cf52_8d50_fe95,
            0x4a85_ed50_f479_8a6b,
            0x171d_a0fd_6cf8_eebd,
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
            0xb2f6_6aad_4ce5_d646,
            0x5842_a06b_fc49_7cec,
            0xcf48_95d4_2599_d394,
            0xc11b_9cba_40a8_e8d0,
            0x2e38_13cb_e5a0_de89,
            0x110e_efda_8884_7faf,
        ],
        [
            0x0708_9552_b319_d465,
            0xc669_5f92_b50a_8313,
            0x97e8_3ccc_d117_228f,
            0xa35b_aeca_b2dc_29ee,
            0x1ce3_93ea_5daa_ce4d,
            0x08f2_220f_b0fb_66eb,
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
            0x7bcf_a7a2_5aa3_0fda,
            0xdc17_dec1_2a92_7e7c,
            0x2f08_8dd8_6b4e_bef1,
            0xd1ca_2087_da74_d4a7,
            0x2da2_5966_96ce_bc1d,
            0x0e2b_7eed_bbfd_87d2,
        ],
        [
            0x3e2f_585d_a55c_9ad1,
            0x4294_213d_86c1_8183,
            0x3828_44c8_8b62_3732,
            0x92ad_2afd_1910_3e18,
            0x1d79_4e4f_ac7c_f0b9,
            0x0bd5_92fc_7d82_5ec8,
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
            0x82d8_3cf5_0dbc_e43f,
            0xa281_3e53_df9d_018f,
            0xc6f0_caa5_3c65_e181,
            0x7525_cf52_8d50_fe95,
            0x4a85_ed50_f479_8a6b,
            0x171d_a0fd_6cf8_eebd,
        ],
        [
            0x3726_c30a_f242_c66c,
            0x7c2a_c1aa_d1b6_fe70,
            0xa040_07fb_ba4b_14a2,
            0xef51_7c32_6634_1429,
            0x0095_ba65_4ed2_226b,
            0x02e3_70ec_cc86_f7dd,
        ],
    ),
];

/// Element `c0 + c1 w`
#[derive(Copy, Clone)]
pub struct Fq12 {
    pub c0: Fq6,
    pub c1: Fq6,
}

impl Fq12 {
    #[inline]
    pub const fn new(c0: Fq6, c1: Fq6) -> Fq12 {
        Fq12 { c0, c1 }
    }

    #[inline]
    pub const fn zero() -> Fq12 {
        Fq12 {
            c0: Fq6::zero(),
            c1: Fq6::zero(),
        }
    }

    #[inline]
    pub const fn one() -> Fq12 {
        Fq12 {
            c0: Fq6::one(),
            c1: Fq6::zero(),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    pub fn is_one(&self) -> bool {
        *self == Fq12::one()
    }

    pub fn random(mut rng: impl RngCore) -> Fq12 {
        Fq12 {
            c0: Fq6::random(&mut rng),
            c1: Fq6::random(&mut rng),
        }
    }

    #[inline]
    pub fn add(&self, rhs: &Fq12) -> Fq12 {
        Fq12 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    #[inline]
    pub fn sub(&self, rhs: &Fq12) -> Fq12 {
        Fq12 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    #[inline]
    pub fn neg(&self) -> Fq12 {
        Fq12 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    pub fn mul(&self, rhs: &Fq12) -> Fq12 {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;

        Fq12 {
            c0: t1.mul_by_nonresidue() + t0,
            c1: (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - t0 - t1,
        }
    }

    pub fn square(&self) -> Fq12 {
        let ab = self.c0 * self.c1;
        let c0c1 = self.c0 + self.c1;
        let c0 = (self.c1.mul_by_nonresidue() + self.c0) * c0c1 - ab - ab.mul_by_nonresidue();

        Fq12 { c0, c1: ab + ab }
    }

    /// Multiply by the sparse element `o0 + o1 v + o4 v w` produced by a
    /// Miller loop line evaluation
    pub fn mul_by_014(&self, o0: &Fq2, o1: &Fq2, o4: &Fq2) -> Fq12 {
        let t0 = self.c0.mul_by_01(o0, o1);
        let t1 = self.c1.mul_by_1(o4);

        Fq12 {
            c0: t1.mul_by_nonresidue() + t0,
            c1: (self.c1 + self.c0).mul_by_01(o0, &(o1 + o4)) - t0 - t1,
        }
    }

    /// Raising to `p^6`: negates `c1`
    #[inline]
    pub fn conjugate(&self) -> Fq12 {
        Fq12 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    pub fn frobenius_map(&self, power: usize) -> Fq12 {
        Fq12 {
            c0: self.c0.frobenius_map(power),
            c1: self
                .c1
                .frobenius_map(power)
                .mul_by_fq2(&FROBENIUS_C1[power % 12]),
        }
    }

    pub fn invert(&self) -> CtOption<Self> {
        (self.c0.square() - self.c1.square().mul_by_nonresidue())
            .invert()
            .map(|t| Fq12 {
                c0: self.c0 * t,
                c1: -(self.c1 * t),
            })
    }

    pub fn pow_vartime(&self, by: &[u64]) -> Fq12 {
        <Fq12 as Field>::pow_vartime(self, by)
    }

    /// Squaring for elements of the cyclotomic subgroup (Granger-Scott)
    pub fn cyclotomic_square(&self) -> Fq12 {
        let (c0c0, c0c1, c0c2) = (self.c0.c0, self.c0.c1, self.c0.c2);
        let (c1c0, c1c1, c1c2) = (self.c1.c0, self.c1.c1, self.c1.c2);

        let (t3, t4) = fq4_square(&c0c0, &c1c1);
        let (t5, t6) = fq4_square(&c1c0, &c0c2);
        let (t7, t8) = fq4_square(&c0c1, &c1c2);
        let t9 = t8.mul_by_nonresidue();

        Fq12 {
            c0: Fq6 {
                c0: (t3 - c0c0).double() + t3,
                c1: (t5 - c0c1).double() + t5,
                c2: (t7 - c0c2).double() + t7,
            },
            c1: Fq6 {
                c0: (t9 + c1c0).double() + t9,
                c1: (t4 + c1c1).double() + t4,
                c2: (t6 + c1c2).double() + t6,
            },
        }
    }

    /// `self^n` for a cyclotomic element, scanning `n` from its top bit
    pub fn cyclotomic_exp(&self, n: u64) -> Fq12 {
        let mut z = Fq12::one();
        for i in (0..64 - n.leading_zeros()).rev() {
            z = z.cyclotomic_square();
            if (n >> i) & 1 == 1 {
                z *= self;
            }
        }
        z
    }

    /// `self^x` for the curve parameter x, folding in its negative sign
    fn exp_by_x(&self) -> Fq12 {
        self.cyclotomic_exp(BLS_X).conjugate()
    }

    /// Raise a Miller loop output to `(p^12 - 1) / r`.
    ///
    /// The easy part `(p^6 - 1)(p^2 + 1)` costs a conjugate, an inverse
    /// and a Frobenius map. The hard part is an addition chain in `x`
    /// evaluated entirely with cyclotomic squarings.
    pub fn final_exponentiation(&self) -> CtOption<Fq12> {
        self.invert().map(|inv| {
            let t0 = self.frobenius_map(6) * inv;
            let t1 = t0.frobenius_map(2) * t0;

            let t2 = t1.exp_by_x();
            let t3 = t1.cyclotomic_square().conjugate() * t2;
            let t4 = t3.exp_by_x();
            let t5 = t4.exp_by_x();
            let t6 = t5.exp_by_x() * t2.cyclotomic_square();
            let t7 = t6.exp_by_x();

            (t2 * t5).frobenius_map(2)
                * (t4 * t1).frobenius_map(3)
                * (t6 * t1.conjugate()).frobenius_map(1)
                * t7
                * t3.conjugate()
                * t1
        })
    }
}

/// Squaring in `Fq4 = Fq2[w] / (w^2 - (1 + i))`
fn fq4_square(a: &Fq2, b: &Fq2) -> (Fq2, Fq2) {
    let a2 = a.square();
    let b2 = b.square();
    (b2.mul_by_nonresidue() + a2, (a + b).square() - a2 - b2)
}

impl Field for Fq12 {
    fn zero() -> Self {
        Fq12::zero()
    }

    fn one() -> Self {
        Fq12::one()
    }

    fn from_u64(v: u64) -> Self {
        Fq12 {
            c0: <Fq6 as Field>::from_u64(v),
            c1: Fq6::zero(),
        }
    }

    fn is_zero(&self) -> Choice {
        Fq12::is_zero(self)
    }

    fn square(&self) -> Self {
        Fq12::square(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fq12::invert(self)
    }
}

impl Frobenius for Fq12 {
    fn frobenius_map(&self, power: usize) -> Self {
        Fq12::frobenius_map(self, power)
    }
}

impl fmt::Debug for Fq12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*w", self.c0, self.c1)
    }
}

impl Default for Fq12 {
    fn default() -> Self {
        Fq12::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fq12 {}

impl From<Fq6> for Fq12 {
    fn from(f: Fq6) -> Fq12 {
        Fq12 {
            c0: f,
            c1: Fq6::zero(),
        }
    }
}

impl ConstantTimeEq for Fq12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl PartialEq for Fq12 {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Fq12 {}

impl ConditionallySelectable for Fq12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fq12 {
            c0: Fq6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fq6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl_field_ops!(Fq12);
