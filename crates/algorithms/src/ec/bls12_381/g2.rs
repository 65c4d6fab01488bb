//! G₂: the sextic twist `y^2 = x^3 + 4(1 + i)` over `Fq2`.

use subtle::{Choice, ConditionallySelectable};

use bls381_params::traditional::bls::{G2_COMPRESSED_SIZE, G2_MAX_SCALAR_BITS, G2_UNCOMPRESSED_SIZE};

use super::curve::{AffinePoint, CurveParams, ProjectivePoint};
use super::field::fq2::fq2;
use super::field::{fr, Fq, Fq2};
use super::BLS_X;
use crate::error::{validate, Error, Result};

/// Curve marker for G₂
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct G2;

/// G₂ point in affine form
pub type G2Affine = AffinePoint<G2>;

/// G₂ point in projective form
pub type G2Projective = ProjectivePoint<G2>;

impl CurveParams for G2 {
    type Base = Fq2;

    const NAME: &'static str = "G2";

    /// 4 + 4i
    const B: Fq2 = fq2(
        [
            0xaa27_0000_000c_fff3,
            0x53cc_0032_fc34_000a,
            0x478f_e97a_6b0a_807f,
            0xb1d3_7ebe_e6ba_24d7,
            0x8ec9_733b_bf78_ab2f,
            0x09d6_4551_3d83_de7e,
        ],
        [
            0xaa27_0000_000c_fff3,
            0x53cc_0032_fc34_000a,
            0x478f_e97a_6b0a_807f,
            0xb1d3_7ebe_e6ba_24d7,
            0x8ec9_733b_bf78_ab2f,
            0x09d6_4551_3d83_de7e,
        ],
    );

    /// 12 + 12i
    const B3: Fq2 = fq2(
        [
            0x4476_0000_0027_552e,
            0xdcb8_009a_4348_0020,
            0x6f7e_e9ce_4a6e_8b59,
            0xb103_30b7_c0a9_5bc6,
            0x6140_b1fc_fb1e_54b7,
            0x0381_be09_7f0b_b4e1,
        ],
        [
            0x4476_0000_0027_552e,
            0xdcb8_009a_4348_0020,
            0x6f7e_e9ce_4a6e_8b59,
            0xb103_30b7_c0a9_5bc6,
            0x6140_b1fc_fb1e_54b7,
            0x0381_be09_7f0b_b4e1,
        ],
    );

    const GENERATOR_X: Fq2 = fq2(
        [
            0xf5f2_8fa2_0294_0a10,
            0xb3f5_fb26_87b4_961a,
            0xa1a8_93b5_3e2a_e580,
            0x9894_999d_1a3c_aee9,
            0x6f67_b763_1863_366b,
            0x0581_9192_4350_bcd7,
        ],
        [
            0xa5a9_c075_9e23_f606,
            0xaaa0_c59d_bccd_60c3,
            0x3bb1_7e18_e286_7806,
            0x1b1a_b6cc_8541_b367,
            0xc2b6_ed0e_f215_8547,
            0x1192_2a09_7360_edf3,
        ],
    );

    const GENERATOR_Y: Fq2 = fq2(
        [
            0x4c73_0af8_6049_4c4a,
            0x597c_fa1f_5e36_9c5a,
            0xe7e6_856c_aa0a_635a,
            0xbbef_b5e9_6e0d_495f,
            0x07d3_a975_f0ef_25a2,
            0x0083_fd8e_7e80_dae5,
        ],
        [
            0xadc0_fc92_df64_b05d,
            0x18aa_270a_2b14_61dc,
            0x86ad_ac6a_3be4_eba0,
            0x7949_5c4e_c93d_a33a,
            0xe717_5850_a43c_caed,
            0x0b2b_c2a1_63de_1bf2,
        ],
    );

    const MAX_SCALAR_BITS: u64 = G2_MAX_SCALAR_BITS as u64;
}

/// 1 / (1 + i)^((p - 1) / 3)
const PSI_COEFF_X: Fq2 = fq2(
    [0, 0, 0, 0, 0, 0],
    [
        0x890d_c9e4_8675_45c3,
        0x2af3_2253_3285_a5d5,
        0x5088_0866_309b_7e2c,
        0xa20d_1b8c_7e88_1024,
        0x14e4_f04f_e2db_9068,
        0x14e5_6d3f_1564_853a,
    ],
);

/// 1 / (1 + i)^((p - 1) / 2)
const PSI_COEFF_Y: Fq2 = fq2(
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
);

/// 1 / 2^((p - 1) / 3)
const PSI2_COEFF_X: Fq2 = fq2(
    [
        0xcd03_c9e4_8671_f071,
        0x5dab_2246_1fcd_a5d2,
        0x5870_42af_d385_1b95,
        0x8eb6_0ebe_01ba_cb9e,
        0x03f9_7d6e_83d0_50d2,
        0x18f0_2065_5463_8741,
    ],
    [0, 0, 0, 0, 0, 0],
);

/// Effective cofactor h_eff of the G2 hash-to-curve suites
/// (RFC 9380, section 8.8.2), little-endian limbs
pub const H_EFF: [u64; 10] = [
    0xe802_0005_aaa9_5551,
    0x5989_4c0a_debb_f6b4,
    0xe954_cbc0_6689_f6a3,
    0x2ec0_ec69_d747_7c1a,
    0x6d82_bf01_5d12_12b0,
    0x329c_2f17_8731_db95,
    0x9986_ff03_1508_ffe1,
    0x88e2_a8e9_145a_d768,
    0x584c_6a0e_a91b_3528,
    0x0bc6_9f08_f2ee_75b3,
];

const COMPRESSION_FLAG: u8 = 1 << 7;
const INFINITY_FLAG: u8 = 1 << 6;
const SORT_FLAG: u8 = 1 << 5;
const FLAG_MASK: u8 = 0b0001_1111;

fn fq2_from_halves(c1: &[u8], c0: &[u8], context: &'static str) -> Result<Fq2> {
    let mut hi = [0u8; 48];
    let mut lo = [0u8; 48];
    hi.copy_from_slice(c1);
    lo.copy_from_slice(c0);

    let c1 = Option::<Fq>::from(Fq::from_bytes(&hi))
        .ok_or_else(|| Error::encoding(context, "coordinate not below the modulus"))?;
    let c0 = Option::<Fq>::from(Fq::from_bytes(&lo))
        .ok_or_else(|| Error::encoding(context, "coordinate not below the modulus"))?;
    Ok(Fq2::new(c0, c1))
}

impl AffinePoint<G2> {
    /// Encode as 96 bytes `x.c1 || x.c0`, flags in the top three bits.
    ///
    /// The sign flag follows `y.c1`, or `y.c0` when `y.c1` is zero.
    pub fn to_compressed(&self) -> [u8; G2_COMPRESSED_SIZE] {
        let x = Fq2::conditional_select(&self.x, &Fq2::zero(), self.infinity);
        let mut res = x.to_bytes();

        res[0] |= COMPRESSION_FLAG;
        res[0] |= u8::conditional_select(&0u8, &INFINITY_FLAG, self.infinity);
        res[0] |= u8::conditional_select(
            &0u8,
            &SORT_FLAG,
            (!self.infinity) & self.y.lexicographically_largest(),
        );
        res
    }

    /// Decode a compressed point and check subgroup membership
    pub fn from_compressed(bytes: &[u8; G2_COMPRESSED_SIZE]) -> Result<Self> {
        let p = Self::from_compressed_unchecked(bytes)?;
        validate::parameter(
            bool::from(p.is_torsion_free()),
            "G2 point",
            "not in the prime-order subgroup",
        )?;
        Ok(p)
    }

    pub fn from_compressed_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("G2 compressed point", bytes.len(), G2_COMPRESSED_SIZE)?;
        let mut array = [0u8; G2_COMPRESSED_SIZE];
        array.copy_from_slice(bytes);
        Self::from_compressed(&array)
    }

    /// Decode a compressed point, checking only the curve equation
    pub fn from_compressed_unchecked(bytes: &[u8; G2_COMPRESSED_SIZE]) -> Result<Self> {
        let flags = bytes[0];
        if flags & COMPRESSION_FLAG == 0 {
            return Err(Error::encoding("G2 point", "compression flag not set"));
        }

        let mut tmp = *bytes;
        tmp[0] &= FLAG_MASK;

        if flags & INFINITY_FLAG != 0 {
            if flags & SORT_FLAG != 0 || tmp.iter().any(|b| *b != 0) {
                return Err(Error::encoding("G2 point", "non-canonical infinity"));
            }
            return Ok(Self::identity());
        }

        let x = fq2_from_halves(&tmp[..48], &tmp[48..], "G2 point")?;
        let rhs = x.square() * x + G2::B;
        let y = Option::<Fq2>::from(rhs.sqrt())
            .ok_or_else(|| Error::encoding("G2 point", "x is not on the curve"))?;

        let sort = Choice::from(((flags & SORT_FLAG) != 0) as u8);
        let y = Fq2::conditional_select(&y, &-y, y.lexicographically_largest() ^ sort);

        Ok(AffinePoint {
            x,
            y,
            infinity: Choice::from(0u8),
        })
    }

    /// Encode as 192 bytes `x.c1 || x.c0 || y.c1 || y.c0`
    pub fn to_uncompressed(&self) -> [u8; G2_UNCOMPRESSED_SIZE] {
        let mut res = [0u8; G2_UNCOMPRESSED_SIZE];
        let x = Fq2::conditional_select(&self.x, &Fq2::zero(), self.infinity);
        let y = Fq2::conditional_select(&self.y, &Fq2::zero(), self.infinity);
        res[..96].copy_from_slice(&x.to_bytes());
        res[96..].copy_from_slice(&y.to_bytes());
        res[0] |= u8::conditional_select(&0u8, &INFINITY_FLAG, self.infinity);
        res
    }

    pub fn from_uncompressed(bytes: &[u8; G2_UNCOMPRESSED_SIZE]) -> Result<Self> {
        let flags = bytes[0];
        if flags & (COMPRESSION_FLAG | SORT_FLAG) != 0 {
            return Err(Error::encoding("G2 point", "unexpected flags in uncompressed form"));
        }

        let mut tmp = *bytes;
        tmp[0] &= FLAG_MASK;

        if flags & INFINITY_FLAG != 0 {
            if tmp.iter().any(|b| *b != 0) {
                return Err(Error::encoding("G2 point", "non-canonical infinity"));
            }
            return Ok(Self::identity());
        }

        let x = fq2_from_halves(&tmp[..48], &tmp[48..96], "G2 point")?;
        let y = fq2_from_halves(&tmp[96..144], &tmp[144..], "G2 point")?;

        let p = Self::from_coordinates(x, y)?;
        validate::parameter(
            bool::from(p.is_torsion_free()),
            "G2 point",
            "not in the prime-order subgroup",
        )?;
        Ok(p)
    }

    pub fn is_torsion_free(&self) -> Choice {
        self.to_projective().is_torsion_free()
    }
}

impl ProjectivePoint<G2> {
    /// Untwist, apply Frobenius, twist back
    pub fn psi(&self) -> Self {
        Self::new_unchecked(
            self.x.conjugate() * PSI_COEFF_X,
            self.y.conjugate() * PSI_COEFF_Y,
            self.z.conjugate(),
        )
    }

    /// `psi` applied twice
    pub fn psi2(&self) -> Self {
        Self::new_unchecked(self.x * PSI2_COEFF_X, -self.y, self.z)
    }

    /// Multiply by the curve parameter `x = -0xd201000000010000`
    pub fn mul_by_x(&self) -> Self {
        self.mul_limbs_vartime(&[BLS_X]).neg()
    }

    /// Multiply by h_eff using the endomorphism decomposition
    /// `h_eff P = [x^2 - x - 1]P + [x - 1]psi(P) + psi2(2P)`
    pub fn clear_cofactor(&self) -> Self {
        let t1 = self.mul_by_x();
        let t2 = self.psi();
        let t3 = self.double().psi2() - t2;
        let t2 = (t1 + t2).mul_by_x();

        t3 + t2 - t1 - self
    }

    /// Multiply by h_eff directly
    pub fn clear_cofactor_by_scalar(&self) -> Self {
        self.mul_limbs_vartime(&H_EFF)
    }

    pub fn is_torsion_free(&self) -> Choice {
        self.mul_limbs_vartime(&fr::MODULUS).is_identity()
    }

    pub fn to_compressed(&self) -> [u8; G2_COMPRESSED_SIZE] {
        self.to_affine().to_compressed()
    }

    pub fn from_compressed(bytes: &[u8; G2_COMPRESSED_SIZE]) -> Result<Self> {
        G2Affine::from_compressed(bytes).map(Self::from)
    }
}
