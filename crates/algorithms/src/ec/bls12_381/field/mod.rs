//! Finite fields of BLS12-381: the base field `Fq`, the scalar field `Fr`
//! and the tower `Fq2 -> Fq6 -> Fq12`.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Operator impls for a field type with inherent `add`, `sub`, `mul`
/// and `neg` taking `&self`.
macro_rules! impl_field_ops {
    ($t:ident) => {
        impl<'a> core::ops::Neg for &'a $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                $t::neg(self)
            }
        }

        impl core::ops::Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                $t::neg(&self)
            }
        }

        impl_field_ops!(@binop $t, Add, add, AddAssign, add_assign);
        impl_field_ops!(@binop $t, Sub, sub, SubAssign, sub_assign);
        impl_field_ops!(@binop $t, Mul, mul, MulAssign, mul_assign);

        impl<T> core::iter::Sum<T> for $t
        where
            T: core::borrow::Borrow<$t>,
        {
            fn sum<I: Iterator<Item = T>>(iter: I) -> Self {
                iter.fold($t::zero(), |acc, item| $t::add(&acc, item.borrow()))
            }
        }

        impl<T> core::iter::Product<T> for $t
        where
            T: core::borrow::Borrow<$t>,
        {
            fn product<I: Iterator<Item = T>>(iter: I) -> Self {
                iter.fold($t::one(), |acc, item| $t::mul(&acc, item.borrow()))
            }
        }
    };
    (@binop $t:ident, $tr:ident, $m:ident, $atr:ident, $am:ident) => {
        impl<'a, 'b> core::ops::$tr<&'b $t> for &'a $t {
            type Output = $t;

            #[inline]
            fn $m(self, rhs: &'b $t) -> $t {
                $t::$m(self, rhs)
            }
        }

        impl<'b> core::ops::$tr<&'b $t> for $t {
            type Output = $t;

            #[inline]
            fn $m(self, rhs: &'b $t) -> $t {
                $t::$m(&self, rhs)
            }
        }

        impl<'a> core::ops::$tr<$t> for &'a $t {
            type Output = $t;

            #[inline]
            fn $m(self, rhs: $t) -> $t {
                $t::$m(self, &rhs)
            }
        }

        impl core::ops::$tr<$t> for $t {
            type Output = $t;

            #[inline]
            fn $m(self, rhs: $t) -> $t {
                $t::$m(&self, &rhs)
            }
        }

        impl<'b> core::ops::$atr<&'b $t> for $t {
            #[inline]
            fn $am(&mut self, rhs: &'b $t) {
                *self = $t::$m(self, rhs);
            }
        }

        impl core::ops::$atr<$t> for $t {
            #[inline]
            fn $am(&mut self, rhs: $t) {
                *self = $t::$m(self, &rhs);
            }
        }
    };
}

pub(crate) mod arith;
pub mod fq;
pub mod fq12;
pub mod fq2;
pub mod fq6;
pub mod fr;

pub use fq::Fq;
pub use fq12::Fq12;
pub use fq2::Fq2;
pub use fq6::Fq6;
pub use fr::Fr;

/// Arithmetic shared by every field in the tower.
///
/// Elements are immutable values; every operation returns a new element.
pub trait Field:
    Copy
    + Clone
    + Default
    + fmt::Debug
    + Send
    + Sync
    + 'static
    + Eq
    + ConstantTimeEq
    + ConditionallySelectable
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Lift a small integer into the field
    fn from_u64(v: u64) -> Self;

    fn is_zero(&self) -> Choice;

    fn square(&self) -> Self;

    #[inline]
    fn double(&self) -> Self {
        *self + *self
    }

    /// Multiplicative inverse; `None` only for zero
    fn invert(&self) -> CtOption<Self>;

    /// Multiply by a plain integer
    #[inline]
    fn mul_by_u64(&self, k: u64) -> Self {
        *self * Self::from_u64(k)
    }

    /// `self / rhs`; `None` when `rhs` is zero
    #[inline]
    fn div(&self, rhs: &Self) -> CtOption<Self> {
        rhs.invert().map(|inv| *self * inv)
    }

    /// Square-and-multiply over a little-endian limb exponent.
    ///
    /// Variable time in the exponent, which is always public here.
    fn pow_vartime(&self, by: &[u64]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= *self;
                }
            }
        }
        res
    }

    /// Raise to an arbitrary non-negative integer power
    fn pow(&self, exp: &BigUint) -> Self {
        self.pow_vartime(&exp.to_u64_digits())
    }
}

/// Frobenius endomorphism of an extension field.
pub trait Frobenius: Field {
    /// Raise to `p^power`, using precomputed coefficient tables
    fn frobenius_map(&self, power: usize) -> Self;
}
