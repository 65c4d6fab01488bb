//! Optimal Ate pairing `e: G1 x G2 -> Fq12`.
//!
//! The line functions of the Miller loop depend only on the G2 argument, so
//! they are computed once per point and cached in [`G2Prepared`].

use std::sync::OnceLock;

use log::debug;

use super::curve::CurveParams;
use super::field::{Fq, Fq12, Fq2};
use super::g1::{G1Affine, G1Projective};
use super::g2::{G2Affine, G2Projective, G2};
use super::BLS_X;
use crate::error::{validate, Error, Result};

/// 1/2 in Montgomery form
const FQ_HALF: Fq = Fq::from_raw_unchecked([
    0x1804_0000_0001_5554,
    0x8550_0005_3ab0_0001,
    0x633c_b57c_253c_276f,
    0x6e22_d1ec_31eb_b502,
    0xd391_6126_f2d1_4ca2,
    0x17fb_b857_1a00_6596,
]);

/// Bit length of |x|
const BLS_X_BITS: u32 = 64;

/// Coefficients `(c0, c1, c2)` of one line evaluation. The line at a G1
/// point `(px, py)` is the sparse element `c0 + c1 px v + c2 py v w`.
pub type LineCoeffs = (Fq2, Fq2, Fq2);

#[inline]
fn x_bit(i: u32) -> bool {
    (BLS_X >> i) & 1 == 1
}

/// A G2 point with its Miller loop line coefficients, built on first use
pub struct G2Prepared {
    point: G2Affine,
    coeffs: OnceLock<Vec<LineCoeffs>>,
}

impl G2Prepared {
    pub fn new(point: G2Affine) -> Self {
        G2Prepared {
            point,
            coeffs: OnceLock::new(),
        }
    }

    pub fn point(&self) -> &G2Affine {
        &self.point
    }

    pub fn is_identity(&self) -> bool {
        bool::from(self.point.is_identity())
    }

    /// Line coefficients, computed and cached on first access
    pub fn coeffs(&self) -> &[LineCoeffs] {
        self.coeffs.get_or_init(|| {
            let coeffs = calc_pairing_precomputes(&self.point);
            debug!("G2Prepared: cached {} line coefficients", coeffs.len());
            coeffs
        })
    }

    pub fn is_cached(&self) -> bool {
        self.coeffs.get().is_some()
    }

    /// Drop the cached coefficients
    pub fn clear_pairing_precomputes(&mut self) {
        self.coeffs = OnceLock::new();
    }
}

impl Clone for G2Prepared {
    fn clone(&self) -> Self {
        G2Prepared {
            point: self.point,
            coeffs: self.coeffs.clone(),
        }
    }
}

impl core::fmt::Debug for G2Prepared {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("G2Prepared")
            .field("point", &self.point)
            .field("cached", &self.is_cached())
            .finish()
    }
}

impl From<G2Affine> for G2Prepared {
    fn from(point: G2Affine) -> Self {
        G2Prepared::new(point)
    }
}

impl From<G2Projective> for G2Prepared {
    fn from(point: G2Projective) -> Self {
        G2Prepared::new(point.to_affine())
    }
}

/// Walk the bits of |x| below the top one, recording a doubling line at
/// every step and an addition line for every set bit.
pub fn calc_pairing_precomputes(q: &G2Affine) -> Vec<LineCoeffs> {
    let (qx, qy) = (q.x(), q.y());
    let (mut rx, mut ry, mut rz) = (qx, qy, Fq2::one());
    let mut ell = Vec::with_capacity(68);

    for i in (0..BLS_X_BITS - 1).rev() {
        // doubling step
        let t0 = ry.square();
        let t1 = rz.square();
        let t2 = t1 * G2::B3;
        let t3 = t2.double() + t2;
        let t4 = (ry + rz).square() - t1 - t0;
        ell.push((t2 - t0, rx.square().double() + rx.square(), -t4));

        rx = ((t0 - t3) * rx * ry).mul_by_fq(&FQ_HALF);
        let t02 = (t0 + t3).mul_by_fq(&FQ_HALF);
        let t22 = t2.square();
        ry = t02.square() - (t22.double() + t22);
        rz = t0 * t4;

        if x_bit(i) {
            // addition step with Q
            let t0 = ry - qy * rz;
            let t1 = rx - qx * rz;
            ell.push((t0 * qx - t1 * qy, -t0, t1));

            let t2 = t1.square();
            let t3 = t2 * t1;
            let t4 = t2 * rx;
            let t5 = t3 - t4.double() + t0.square() * rz;
            rx = t1 * t5;
            ry = (t4 - t5) * t0 - t3 * ry;
            rz = rz * t3;
        }
    }

    ell
}

/// Product of Miller loops sharing one accumulator; identity terms
/// contribute 1 and are skipped
pub fn multi_miller_loop(terms: &[(&G1Affine, &G2Prepared)]) -> Fq12 {
    let terms: Vec<(Fq, Fq, &[LineCoeffs])> = terms
        .iter()
        .filter(|(p, q)| !bool::from(p.is_identity()) && !q.is_identity())
        .map(|(p, q)| (p.x(), p.y(), q.coeffs()))
        .collect();

    let mut f = Fq12::one();
    let mut j = 0;
    for i in (0..BLS_X_BITS - 1).rev() {
        for (px, py, ell) in terms.iter() {
            let (c0, c1, c2) = &ell[j];
            f = f.mul_by_014(c0, &c1.mul_by_fq(px), &c2.mul_by_fq(py));
        }
        if x_bit(i) {
            j += 1;
            for (px, py, ell) in terms.iter() {
                let (c0, c1, c2) = &ell[j];
                f = f.mul_by_014(c0, &c1.mul_by_fq(px), &c2.mul_by_fq(py));
            }
        }
        if i != 0 {
            f = f.square();
        }
        j += 1;
    }

    // x is negative
    f.conjugate()
}

/// Miller loop for a single pair, without final exponentiation
pub fn miller_loop(p: &G1Affine, q: &G2Prepared) -> Fq12 {
    multi_miller_loop(&[(p, q)])
}

/// Final exponentiation, as a fallible operation
pub fn final_exponentiation(f: &Fq12) -> Result<Fq12> {
    Option::<Fq12>::from(f.final_exponentiation()).ok_or(Error::Processing {
        operation: "final_exponentiation",
        details: "Miller loop output is zero",
    })
}

/// `e(P, Q)`.
///
/// Identity inputs are rejected rather than mapped to 1, and both points
/// must satisfy their curve equations.
pub fn pairing(p: &G1Projective, q: &G2Projective) -> Result<Fq12> {
    pairing_with(p, q, true)
}

/// `e(P, Q)` with the final exponentiation optional
pub fn pairing_with(p: &G1Projective, q: &G2Projective, final_exponentiate: bool) -> Result<Fq12> {
    validate::parameter(!bool::from(p.is_identity()), "p", "G1 point at infinity")?;
    validate::parameter(!bool::from(q.is_identity()), "q", "G2 point at infinity")?;
    validate::point(bool::from(p.is_on_curve()), "pairing G1 input")?;
    validate::point(bool::from(q.is_on_curve()), "pairing G2 input")?;

    let prepared = G2Prepared::from(q.to_affine());
    let looped = miller_loop(&p.to_affine(), &prepared);

    if final_exponentiate {
        final_exponentiation(&looped)
    } else {
        Ok(looped)
    }
}
