//! G₁: the curve `y^2 = x^3 + 4` over `Fq`.

use subtle::{Choice, ConditionallySelectable};

use bls381_params::traditional::bls::{G1_COMPRESSED_SIZE, G1_MAX_SCALAR_BITS, G1_UNCOMPRESSED_SIZE};

use super::curve::{AffinePoint, CurveParams, ProjectivePoint};
use super::field::{fr, Fq};
use super::BLS_X;
use crate::error::{validate, Error, Result};

/// Curve marker for G₁
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct G1;

/// G₁ point in affine form
pub type G1Affine = AffinePoint<G1>;

/// G₁ point in projective form
pub type G1Projective = ProjectivePoint<G1>;

impl CurveParams for G1 {
    type Base = Fq;

    const NAME: &'static str = "G1";

    /// 4
    const B: Fq = Fq::from_raw_unchecked([
        0xaa27_0000_000c_fff3,
        0x53cc_0032_fc34_000a,
        0x478f_e97a_6b0a_807f,
        0xb1d3_7ebe_e6ba_24d7,
        0x8ec9_733b_bf78_ab2f,
        0x09d6_4551_3d83_de7e,
    ]);

    /// 12
    const B3: Fq = Fq::from_raw_unchecked([
        0x4476_0000_0027_552e,
        0xdcb8_009a_4348_0020,
        0x6f7e_e9ce_4a6e_8b59,
        0xb103_30b7_c0a9_5bc6,
        0x6140_b1fc_fb1e_54b7,
        0x0381_be09_7f0b_b4e1,
    ]);

    const GENERATOR_X: Fq = Fq::from_raw_unchecked([
        0x5cb3_8790_fd53_0c16,
        0x7817_fc67_9976_fff5,
        0x154f_95c7_143b_a1c1,
        0xf0ae_6acd_f3d0_e747,
        0xedce_6ecc_21db_f440,
        0x1201_7741_9e0b_fb75,
    ]);

    const GENERATOR_Y: Fq = Fq::from_raw_unchecked([
        0xbaac_93d5_0ce7_2271,
        0x8c22_631a_7918_fd8e,
        0xdd59_5f13_5707_25ce,
        0x51ac_5829_5040_5194,
        0x0e1c_8c3f_ad00_59c0,
        0x0bbc_3efc_5008_a26a,
    ]);

    const MAX_SCALAR_BITS: u64 = G1_MAX_SCALAR_BITS as u64;
}

// Flag bits in the first byte of an encoding
const COMPRESSION_FLAG: u8 = 1 << 7;
const INFINITY_FLAG: u8 = 1 << 6;
const SORT_FLAG: u8 = 1 << 5;
const FLAG_MASK: u8 = 0b0001_1111;

impl AffinePoint<G1> {
    /// Encode as 48 bytes: `x` with the compression, infinity and sign
    /// flags in the top three bits.
    pub fn to_compressed(&self) -> [u8; G1_COMPRESSED_SIZE] {
        let mut res = Fq::conditional_select(&self.x, &Fq::zero(), self.infinity).to_bytes();

        res[0] |= COMPRESSION_FLAG;
        res[0] |= u8::conditional_select(&0u8, &INFINITY_FLAG, self.infinity);
        res[0] |= u8::conditional_select(
            &0u8,
            &SORT_FLAG,
            (!self.infinity) & self.y.lexicographically_largest(),
        );
        res
    }

    /// Decode a compressed point and check it lies in the prime-order
    /// subgroup
    pub fn from_compressed(bytes: &[u8; G1_COMPRESSED_SIZE]) -> Result<Self> {
        let p = Self::from_compressed_unchecked(bytes)?;
        validate::parameter(
            bool::from(p.is_torsion_free()),
            "G1 point",
            "not in the prime-order subgroup",
        )?;
        Ok(p)
    }

    /// Decode from a slice, checking its length first
    pub fn from_compressed_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("G1 compressed point", bytes.len(), G1_COMPRESSED_SIZE)?;
        let mut array = [0u8; G1_COMPRESSED_SIZE];
        array.copy_from_slice(bytes);
        Self::from_compressed(&array)
    }

    /// Decode a compressed point, checking only the curve equation
    pub fn from_compressed_unchecked(bytes: &[u8; G1_COMPRESSED_SIZE]) -> Result<Self> {
        let flags = bytes[0];
        if flags & COMPRESSION_FLAG == 0 {
            return Err(Error::encoding("G1 point", "compression flag not set"));
        }

        let mut tmp = *bytes;
        tmp[0] &= FLAG_MASK;

        if flags & INFINITY_FLAG != 0 {
            if flags & SORT_FLAG != 0 || tmp.iter().any(|b| *b != 0) {
                return Err(Error::encoding("G1 point", "non-canonical infinity"));
            }
            return Ok(Self::identity());
        }

        let x = Option::<Fq>::from(Fq::from_bytes(&tmp))
            .ok_or_else(|| Error::encoding("G1 point", "x coordinate not below the modulus"))?;

        let rhs = x.square() * x + G1::B;
        let y = Option::<Fq>::from(rhs.sqrt())
            .ok_or_else(|| Error::encoding("G1 point", "x is not on the curve"))?;

        let sort = Choice::from(((flags & SORT_FLAG) != 0) as u8);
        let y = Fq::conditional_select(&y, &-y, y.lexicographically_largest() ^ sort);

        Ok(AffinePoint {
            x,
            y,
            infinity: Choice::from(0u8),
        })
    }

    /// Encode as 96 bytes `x || y`, with only the infinity flag in use
    pub fn to_uncompressed(&self) -> [u8; G1_UNCOMPRESSED_SIZE] {
        let mut res = [0u8; G1_UNCOMPRESSED_SIZE];
        let x = Fq::conditional_select(&self.x, &Fq::zero(), self.infinity);
        let y = Fq::conditional_select(&self.y, &Fq::zero(), self.infinity);
        res[..48].copy_from_slice(&x.to_bytes());
        res[48..].copy_from_slice(&y.to_bytes());
        res[0] |= u8::conditional_select(&0u8, &INFINITY_FLAG, self.infinity);
        res
    }

    /// Decode an uncompressed point, checking the curve equation and the
    /// subgroup
    pub fn from_uncompressed(bytes: &[u8; G1_UNCOMPRESSED_SIZE]) -> Result<Self> {
        let flags = bytes[0];
        if flags & (COMPRESSION_FLAG | SORT_FLAG) != 0 {
            return Err(Error::encoding("G1 point", "unexpected flags in uncompressed form"));
        }

        let mut x_bytes = [0u8; 48];
        let mut y_bytes = [0u8; 48];
        x_bytes.copy_from_slice(&bytes[..48]);
        y_bytes.copy_from_slice(&bytes[48..]);
        x_bytes[0] &= FLAG_MASK;

        if flags & INFINITY_FLAG != 0 {
            if x_bytes.iter().chain(y_bytes.iter()).any(|b| *b != 0) {
                return Err(Error::encoding("G1 point", "non-canonical infinity"));
            }
            return Ok(Self::identity());
        }

        let x = Option::<Fq>::from(Fq::from_bytes(&x_bytes))
            .ok_or_else(|| Error::encoding("G1 point", "x coordinate not below the modulus"))?;
        let y = Option::<Fq>::from(Fq::from_bytes(&y_bytes))
            .ok_or_else(|| Error::encoding("G1 point", "y coordinate not below the modulus"))?;

        let p = Self::from_coordinates(x, y)?;
        validate::parameter(
            bool::from(p.is_torsion_free()),
            "G1 point",
            "not in the prime-order subgroup",
        )?;
        Ok(p)
    }

    /// `r * P == O`
    pub fn is_torsion_free(&self) -> Choice {
        self.to_projective().is_torsion_free()
    }
}

impl ProjectivePoint<G1> {
    /// Multiply by the curve parameter `x = -0xd201000000010000`
    pub fn mul_by_x(&self) -> Self {
        self.mul_limbs_vartime(&[BLS_X]).neg()
    }

    /// Map onto the prime-order subgroup by multiplying with `1 - x`
    pub fn clear_cofactor(&self) -> Self {
        self - &self.mul_by_x()
    }

    pub fn is_torsion_free(&self) -> Choice {
        self.mul_limbs_vartime(&fr::MODULUS).is_identity()
    }

    pub fn to_compressed(&self) -> [u8; G1_COMPRESSED_SIZE] {
        self.to_affine().to_compressed()
    }

    pub fn from_compressed(bytes: &[u8; G1_COMPRESSED_SIZE]) -> Result<Self> {
        G1Affine::from_compressed(bytes).map(Self::from)
    }
}
