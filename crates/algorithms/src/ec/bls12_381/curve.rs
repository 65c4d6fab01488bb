//! Projective points on short Weierstrass curves `y^2 = x^3 + b`, generic
//! over the coordinate field.
//!
//! G1 and G2 are both instances of [`ProjectivePoint`]; they differ only in
//! their [`CurveParams`]. Addition uses the complete formulas of Renes,
//! Costello and Batina (<https://eprint.iacr.org/2015/1060>), so no input
//! needs special casing apart from the identity in mixed addition.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::sync::OnceLock;

use log::debug;
use num_bigint::BigUint;
use num_traits::Zero;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use bls381_params::traditional::bls::DEFAULT_PRECOMPUTE_WINDOW;

use super::field::Field;
use crate::error::{validate, Error, Result};

/// Widest window accepted by the wNAF routines
pub const MAX_WINDOW: usize = 16;

/// Parameters of a curve `y^2 = x^3 + B` over `Base`
pub trait CurveParams: Copy + Clone + fmt::Debug + Send + Sync + 'static {
    type Base: Field;

    /// Short name used in error contexts
    const NAME: &'static str;

    const B: Self::Base;

    /// `3 * B`, used by the complete formulas
    const B3: Self::Base;

    const GENERATOR_X: Self::Base;
    const GENERATOR_Y: Self::Base;

    /// Largest scalar bit length accepted by the multiplication routines
    const MAX_SCALAR_BITS: u64;
}

/// Point in affine coordinates with an explicit identity flag
#[derive(Copy, Clone)]
pub struct AffinePoint<C: CurveParams> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) infinity: Choice,
}

/// Point in homogeneous projective coordinates `(X : Y : Z)`, representing
/// `(X/Z, Y/Z)`. The identity has `Z = 0`.
#[derive(Copy, Clone)]
pub struct ProjectivePoint<C: CurveParams> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) z: C::Base,
    _curve: PhantomData<C>,
}

impl<C: CurveParams> AffinePoint<C> {
    pub fn identity() -> Self {
        AffinePoint {
            x: C::Base::zero(),
            y: C::Base::one(),
            infinity: Choice::from(1u8),
        }
    }

    pub fn generator() -> Self {
        AffinePoint {
            x: C::GENERATOR_X,
            y: C::GENERATOR_Y,
            infinity: Choice::from(0u8),
        }
    }

    /// Build a point from coordinates, checking the curve equation
    pub fn from_coordinates(x: C::Base, y: C::Base) -> Result<Self> {
        let p = AffinePoint {
            x,
            y,
            infinity: Choice::from(0u8),
        };
        validate::point(bool::from(p.is_on_curve()), C::NAME)?;
        Ok(p)
    }

    pub fn x(&self) -> C::Base {
        self.x
    }

    pub fn y(&self) -> C::Base {
        self.y
    }

    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// `y^2 = x^3 + b`, or the identity
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - self.x.square() * self.x).ct_eq(&C::B) | self.infinity
    }

    pub fn to_projective(&self) -> ProjectivePoint<C> {
        ProjectivePoint::from(self)
    }
}

impl<C: CurveParams> ProjectivePoint<C> {
    #[inline]
    pub(crate) fn new_unchecked(x: C::Base, y: C::Base, z: C::Base) -> Self {
        ProjectivePoint {
            x,
            y,
            z,
            _curve: PhantomData,
        }
    }

    pub fn identity() -> Self {
        Self::new_unchecked(C::Base::zero(), C::Base::one(), C::Base::zero())
    }

    pub fn generator() -> Self {
        Self::new_unchecked(C::GENERATOR_X, C::GENERATOR_Y, C::Base::one())
    }

    /// Build a point from projective coordinates, checking the curve equation
    pub fn from_coordinates(x: C::Base, y: C::Base, z: C::Base) -> Result<Self> {
        let p = Self::new_unchecked(x, y, z);
        validate::point(bool::from(p.is_on_curve()), C::NAME)?;
        Ok(p)
    }

    pub fn x(&self) -> C::Base {
        self.x
    }

    pub fn y(&self) -> C::Base {
        self.y
    }

    pub fn z(&self) -> C::Base {
        self.z
    }

    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// `y^2 z = x^3 + b z^3`; the identity always passes
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square() * self.z;
        let rhs = self.x.square() * self.x + self.z.square() * self.z * C::B;
        lhs.ct_eq(&rhs) | self.z.is_zero()
    }

    pub fn double(&self) -> Self {
        // Algorithm 9, a = 0
        let t0 = self.y.square();
        let z3 = t0.double().double().double();
        let t1 = self.y * self.z;
        let t2 = self.z.square() * C::B3;
        let x3 = t2 * z3;
        let y3 = t0 + t2;
        let z3 = t1 * z3;
        let t1 = t2.double();
        let t2 = t1 + t2;
        let t0 = t0 - t2;
        let y3 = t0 * y3;
        let y3 = x3 + y3;
        let t1 = self.x * self.y;
        let x3 = (t0 * t1).double();

        let tmp = Self::new_unchecked(x3, y3, z3);
        Self::conditional_select(&tmp, &Self::identity(), self.is_identity())
    }

    pub fn add(&self, rhs: &Self) -> Self {
        // Algorithm 7, a = 0
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t2 = self.z * rhs.z;
        let t3 = (self.x + self.y) * (rhs.x + rhs.y);
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = (self.y + self.z) * (rhs.y + rhs.z);
        let x3 = t1 + t2;
        let t4 = t4 - x3;
        let x3 = (self.x + self.z) * (rhs.x + rhs.z);
        let y3 = t0 + t2;
        let y3 = x3 - y3;
        let x3 = t0.double();
        let t0 = x3 + t0;
        let t2 = t2 * C::B3;
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = y3 * C::B3;
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        Self::new_unchecked(x3, y3, z3)
    }

    /// Add an affine point; the identity on the right returns `self`
    pub fn add_mixed(&self, rhs: &AffinePoint<C>) -> Self {
        // Algorithm 8, a = 0
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t3 = (rhs.x + rhs.y) * (self.x + self.y);
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = rhs.y * self.z + self.y;
        let y3 = rhs.x * self.z + self.x;
        let x3 = t0.double();
        let t0 = x3 + t0;
        let t2 = self.z * C::B3;
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = y3 * C::B3;
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        let tmp = Self::new_unchecked(x3, y3, z3);
        Self::conditional_select(&tmp, self, rhs.is_identity())
    }

    pub fn neg(&self) -> Self {
        Self::new_unchecked(self.x, -self.y, self.z)
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.neg())
    }

    /// Divide by `z` with a single inversion
    pub fn to_affine(&self) -> AffinePoint<C> {
        let zinv = self.z.invert().unwrap_or(C::Base::zero());
        let tmp = AffinePoint {
            x: self.x * zinv,
            y: self.y * zinv,
            infinity: Choice::from(0u8),
        };
        AffinePoint::conditional_select(&tmp, &AffinePoint::identity(), zinv.is_zero())
    }

    /// Normalize many points with one shared inversion (Montgomery's trick)
    pub fn batch_normalize(points: &[Self]) -> Vec<AffinePoint<C>> {
        let mut out = vec![AffinePoint::identity(); points.len()];

        // prefix products of the non-zero z coordinates
        let mut acc = C::Base::one();
        for (p, q) in points.iter().zip(out.iter_mut()) {
            q.x = acc;
            acc = C::Base::conditional_select(&(acc * p.z), &acc, p.is_identity());
        }

        // acc is a product of non-zero values
        acc = acc.invert().unwrap_or(C::Base::zero());

        for (p, q) in points.iter().rev().zip(out.iter_mut().rev()) {
            let skip = p.is_identity();
            let zinv = q.x * acc;
            acc = C::Base::conditional_select(&(acc * p.z), &acc, skip);
            q.x = p.x * zinv;
            q.y = p.y * zinv;
            q.infinity = Choice::from(0u8);
            *q = AffinePoint::conditional_select(q, &AffinePoint::identity(), skip);
        }

        out
    }

    /// Alias of [`Self::batch_normalize`]
    pub fn to_affine_batch(points: &[Self]) -> Vec<AffinePoint<C>> {
        Self::batch_normalize(points)
    }

    fn check_scalar(scalar: &BigUint) -> Result<()> {
        validate::parameter(!scalar.is_zero(), "scalar", "must be positive")?;
        validate::parameter(
            scalar.bits() <= C::MAX_SCALAR_BITS,
            "scalar",
            "exceeds the maximum bit length for this curve",
        )
    }

    /// Plain double-and-add.
    ///
    /// Timing depends on the bit pattern of `scalar`; use only for public
    /// scalars.
    pub fn multiply_unsafe(&self, scalar: &BigUint) -> Result<Self> {
        Self::check_scalar(scalar)?;

        let mut acc = Self::identity();
        for i in (0..scalar.bits()).rev() {
            acc = acc.double();
            if scalar.bit(i) {
                acc = acc.add(self);
            }
        }
        Ok(acc)
    }

    /// Double-and-add over a public little-endian limb multiplier, without
    /// range checks
    pub(crate) fn mul_limbs_vartime(&self, by: &[u64]) -> Self {
        let mut acc = Self::identity();
        for limb in by.iter().rev() {
            for i in (0..64).rev() {
                acc = acc.double();
                if (limb >> i) & 1 == 1 {
                    acc = acc.add(self);
                }
            }
        }
        acc
    }

    /// Windowed-NAF multiplication with window width 1
    pub fn multiply(&self, scalar: &BigUint) -> Result<Self> {
        self.multiply_with_window(scalar, 1)
    }

    /// Windowed-NAF multiplication with a table of width `window` built on
    /// the fly
    pub fn multiply_with_window(&self, scalar: &BigUint, window: usize) -> Result<Self> {
        Self::check_scalar(scalar)?;
        let table = self.calc_multiply_precomputes(window)?;
        Ok(wnaf::<C>(scalar, window, &table))
    }

    /// Table of `2^(W-1)` multiples for each of `ceil(bits / W) + 1`
    /// windows, normalized to affine.
    pub fn calc_multiply_precomputes(&self, window: usize) -> Result<Vec<AffinePoint<C>>> {
        validate::parameter(
            (1..=MAX_WINDOW).contains(&window),
            "window",
            "window width must be between 1 and 16",
        )?;

        let windows = window_count::<C>(window);
        let per_window = 1usize << (window - 1);
        let mut points = Vec::with_capacity(windows * per_window);

        let mut p = *self;
        for _ in 0..windows {
            let mut base = p;
            points.push(base);
            for _ in 1..per_window {
                base = base.add(&p);
                points.push(base);
            }
            p = base.double();
        }

        Ok(Self::batch_normalize(&points))
    }
}

fn window_count<C: CurveParams>(window: usize) -> usize {
    (C::MAX_SCALAR_BITS as usize).div_ceil(window) + 1
}

/// Walk `scalar` in signed windows of width `w`, least significant first.
///
/// Digits above `2^(w-1)` are folded to negative values with a carry into
/// the next window. A zero digit adds into a throwaway accumulator so every
/// window performs one addition.
fn wnaf<C: CurveParams>(
    scalar: &BigUint,
    w: usize,
    table: &[AffinePoint<C>],
) -> ProjectivePoint<C> {
    let windows = window_count::<C>(w);
    let window_size = 1i64 << (w - 1);
    let max_number = 1i64 << w;
    let mask = (max_number - 1) as u64;

    let mut n = scalar.clone();
    let mut p = ProjectivePoint::<C>::identity();
    let mut fake = ProjectivePoint::<C>::identity();

    for window in 0..windows {
        let offset = window * window_size as usize;
        let low = n.iter_u64_digits().next().unwrap_or(0);
        let mut wbits = (low & mask) as i64;
        n >>= w;

        if wbits > window_size {
            wbits -= max_number;
            n += 1u32;
        }

        if wbits == 0 {
            let cached = &table[offset];
            let cached = if window % 2 == 1 { -*cached } else { *cached };
            fake = fake.add_mixed(&cached);
        } else {
            let cached = &table[offset + wbits.unsigned_abs() as usize - 1];
            let cached = if wbits < 0 { -*cached } else { *cached };
            p = p.add_mixed(&cached);
        }
    }

    core::hint::black_box(&fake);
    p
}

/// A point that owns a lazily built wNAF table.
///
/// The table is written once; rebuilding with another width requires
/// exclusive access through [`PrecomputedPoint::precompute_window`].
pub struct PrecomputedPoint<C: CurveParams> {
    point: ProjectivePoint<C>,
    table: OnceLock<(usize, Vec<AffinePoint<C>>)>,
}

impl<C: CurveParams> PrecomputedPoint<C> {
    pub fn new(point: ProjectivePoint<C>) -> Self {
        PrecomputedPoint {
            point,
            table: OnceLock::new(),
        }
    }

    pub fn point(&self) -> &ProjectivePoint<C> {
        &self.point
    }

    /// Width of the cached table, if one has been built
    pub fn window(&self) -> Option<usize> {
        self.table.get().map(|(w, _)| *w)
    }

    /// Build and cache a table of width `window`, replacing any earlier one
    pub fn precompute_window(&mut self, window: usize) -> Result<()> {
        let table = self.point.calc_multiply_precomputes(window)?;
        debug!(
            "{}: cached wNAF table, window {} ({} points)",
            C::NAME,
            window,
            table.len()
        );
        self.table = OnceLock::new();
        // freshly created, so the cell is empty
        let _ = self.table.set((window, table));
        Ok(())
    }

    /// Drop the cached table
    pub fn clear_precomputes(&mut self) {
        self.table = OnceLock::new();
    }

    /// Multiply with the cached table, building one of the default width
    /// on first use
    pub fn multiply_precomputed(&self, scalar: &BigUint) -> Result<ProjectivePoint<C>> {
        ProjectivePoint::<C>::check_scalar(scalar)?;

        if self.table.get().is_none() {
            let window = DEFAULT_PRECOMPUTE_WINDOW;
            let table = self.point.calc_multiply_precomputes(window)?;
            debug!("{}: built default wNAF table, window {}", C::NAME, window);
            // a racing initialiser stored an equivalent table
            let _ = self.table.set((window, table));
        }

        match self.table.get() {
            Some((w, table)) => Ok(wnaf::<C>(scalar, *w, table)),
            None => Err(Error::Processing {
                operation: "multiply_precomputed",
                details: "precompute table unavailable",
            }),
        }
    }

    /// Multiply with the cached table if present, else with window width 1
    pub fn multiply(&self, scalar: &BigUint) -> Result<ProjectivePoint<C>> {
        match self.table.get() {
            Some((w, table)) => {
                ProjectivePoint::<C>::check_scalar(scalar)?;
                Ok(wnaf::<C>(scalar, *w, table))
            }
            None => self.point.multiply(scalar),
        }
    }
}

impl<C: CurveParams> Clone for PrecomputedPoint<C> {
    fn clone(&self) -> Self {
        PrecomputedPoint {
            point: self.point,
            table: self.table.clone(),
        }
    }
}

impl<C: CurveParams> From<ProjectivePoint<C>> for PrecomputedPoint<C> {
    fn from(point: ProjectivePoint<C>) -> Self {
        PrecomputedPoint::new(point)
    }
}

impl<C: CurveParams> fmt::Debug for PrecomputedPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrecomputedPoint")
            .field("point", &self.point)
            .field("window", &self.window())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl<C: CurveParams> fmt::Debug for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if bool::from(self.infinity) {
            write!(f, "{}Affine(infinity)", C::NAME)
        } else {
            write!(f, "{}Affine(x={:?}, y={:?})", C::NAME, self.x, self.y)
        }
    }
}

impl<C: CurveParams> fmt::Debug for ProjectivePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}Projective(x={:?}, y={:?}, z={:?})",
            C::NAME,
            self.x,
            self.y,
            self.z
        )
    }
}

impl<C: CurveParams> Default for AffinePoint<C> {
    fn default() -> Self {
        AffinePoint::identity()
    }
}

impl<C: CurveParams> Default for ProjectivePoint<C> {
    fn default() -> Self {
        ProjectivePoint::identity()
    }
}

impl<C: CurveParams> ConstantTimeEq for AffinePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl<C: CurveParams> ConditionallySelectable for AffinePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        AffinePoint {
            x: C::Base::conditional_select(&a.x, &b.x, choice),
            y: C::Base::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C: CurveParams> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<C: CurveParams> Eq for AffinePoint<C> {}

impl<C: CurveParams> ConstantTimeEq for ProjectivePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // (X1/Z1, Y1/Z1) == (X2/Z2, Y2/Z2) without inversions
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;
        let y1 = self.y * other.z;
        let y2 = other.y * self.z;

        let self_is_zero = self.z.is_zero();
        let other_is_zero = other.z.is_zero();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl<C: CurveParams> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new_unchecked(
            C::Base::conditional_select(&a.x, &b.x, choice),
            C::Base::conditional_select(&a.y, &b.y, choice),
            C::Base::conditional_select(&a.z, &b.z, choice),
        )
    }
}

impl<C: CurveParams> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<C: CurveParams> Eq for ProjectivePoint<C> {}

impl<'a, C: CurveParams> From<&'a AffinePoint<C>> for ProjectivePoint<C> {
    fn from(p: &'a AffinePoint<C>) -> Self {
        ProjectivePoint::new_unchecked(
            p.x,
            p.y,
            C::Base::conditional_select(&C::Base::one(), &C::Base::zero(), p.infinity),
        )
    }
}

impl<C: CurveParams> From<AffinePoint<C>> for ProjectivePoint<C> {
    fn from(p: AffinePoint<C>) -> Self {
        ProjectivePoint::from(&p)
    }
}

impl<'a, C: CurveParams> From<&'a ProjectivePoint<C>> for AffinePoint<C> {
    fn from(p: &'a ProjectivePoint<C>) -> Self {
        p.to_affine()
    }
}

impl<C: CurveParams> From<ProjectivePoint<C>> for AffinePoint<C> {
    fn from(p: ProjectivePoint<C>) -> Self {
        p.to_affine()
    }
}

impl<C: CurveParams> Neg for AffinePoint<C> {
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        AffinePoint {
            x: self.x,
            y: C::Base::conditional_select(&-self.y, &C::Base::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl<'a, C: CurveParams> Neg for &'a ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(self)
    }
}

impl<C: CurveParams> Neg for ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(&self)
    }
}

macro_rules! impl_point_binop {
    ($tr:ident, $m:ident, $atr:ident, $am:ident) => {
        impl<'a, 'b, C: CurveParams> $tr<&'b ProjectivePoint<C>> for &'a ProjectivePoint<C> {
            type Output = ProjectivePoint<C>;

            fn $m(self, rhs: &'b ProjectivePoint<C>) -> ProjectivePoint<C> {
                ProjectivePoint::$m(self, rhs)
            }
        }

        impl<'b, C: CurveParams> $tr<&'b ProjectivePoint<C>> for ProjectivePoint<C> {
            type Output = ProjectivePoint<C>;

            fn $m(self, rhs: &'b ProjectivePoint<C>) -> ProjectivePoint<C> {
                ProjectivePoint::$m(&self, rhs)
            }
        }

        impl<C: CurveParams> $tr<ProjectivePoint<C>> for ProjectivePoint<C> {
            type Output = ProjectivePoint<C>;

            fn $m(self, rhs: ProjectivePoint<C>) -> ProjectivePoint<C> {
                ProjectivePoint::$m(&self, &rhs)
            }
        }

        impl<C: CurveParams> $atr<ProjectivePoint<C>> for ProjectivePoint<C> {
            fn $am(&mut self, rhs: ProjectivePoint<C>) {
                *self = ProjectivePoint::$m(self, &rhs);
            }
        }

        impl<'b, C: CurveParams> $atr<&'b ProjectivePoint<C>> for ProjectivePoint<C> {
            fn $am(&mut self, rhs: &'b ProjectivePoint<C>) {
                *self = ProjectivePoint::$m(self, rhs);
            }
        }
    };
}

impl_point_binop!(Add, add, AddAssign, add_assign);
impl_point_binop!(Sub, sub, SubAssign, sub_assign);

impl<'b, C: CurveParams> Add<&'b AffinePoint<C>> for ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn add(self, rhs: &'b AffinePoint<C>) -> ProjectivePoint<C> {
        self.add_mixed(rhs)
    }
}

impl<C: CurveParams> Add<AffinePoint<C>> for ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn add(self, rhs: AffinePoint<C>) -> ProjectivePoint<C> {
        self.add_mixed(&rhs)
    }
}

impl<T, C: CurveParams> core::iter::Sum<T> for ProjectivePoint<C>
where
    T: core::borrow::Borrow<ProjectivePoint<C>>,
{
    fn sum<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, item| Self::add(&acc, item.borrow()))
    }
}
