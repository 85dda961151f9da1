use crate::consts::MathConst;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{Float, FloatConst};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, LowerExp},
};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for f32 {}
}

/// Real scalar a `Complex<T>` is built from.
///
/// Everything the engine needs beyond `num_traits::Float` lives here: the
/// IEEE-style rounding and remainder primitives, ULP arithmetic, a total
/// order that places `-0` below `+0` and NaN above everything, and an
/// accurate dot product.
pub trait Real:
    sealed::Sealed
    + Float
    + FloatConst
    + MathConst
    + AbsDiffEq<Epsilon = Self>
    + RelativeEq
    + UlpsEq
    + Debug
    + Display
    + LowerExp
    + Default
    + Send
    + Sync
    + 'static
{
    // ========== Conversions ==========
    /// Create from f64
    fn from_f64(val: f64) -> Self;

    /// Create from i32
    fn from_i32(val: i32) -> Self;

    /// Raw bits, used for hashing
    fn hash_bits(self) -> u64;

    // ========== Rounding ==========
    /// Round to the nearest integer, ties to even
    fn rint(self) -> Self;

    /// IEEE 754 remainder: `self - n * divisor` with `n` the nearest integer
    /// to `self / divisor`, ties to even
    fn ieee_remainder(self, divisor: Self) -> Self;

    /// `self * 2^n`
    fn scalb(self, n: i32) -> Self;

    // ========== Neighbours ==========
    /// Next representable value towards +∞
    fn next_up(self) -> Self;

    /// Next representable value towards -∞
    fn next_down(self) -> Self;

    /// Size of a unit in the last place of `self`
    fn ulp(self) -> Self;

    // ========== Comparison ==========
    /// Total order: -0 < +0, NaN above +∞ and equal to itself
    fn compare(self, other: Self) -> Ordering;

    /// True if both are within `max_ulps` representable values of each
    /// other, crossing zero if needed; never true when either is NaN
    fn equals_ulps(self, other: Self, max_ulps: u32) -> bool;

    /// True if equal within one ulp or within the absolute `eps`
    fn equals_eps(self, other: Self, eps: Self) -> bool {
        self.equals_ulps(other, 1) || (other - self).abs() <= eps
    }

    /// True if equal within one ulp or if the relative difference is at most `eps`
    fn equals_with_relative_tolerance(self, other: Self, eps: Self) -> bool {
        if self.equals_ulps(other, 1) {
            return true;
        }
        let abs_max = self.abs().max(other.abs());
        let rel_diff = ((self - other) / abs_max).abs();
        rel_diff <= eps
    }

    /// True if finite with no fractional part
    fn is_mathematical_integer(self) -> bool {
        self.is_finite() && self.floor() == self
    }

    /// Exact conversion to `i32` when `self` is an integer in range
    fn to_i32_exact(self) -> Option<i32> {
        if self.is_mathematical_integer() && self.abs() <= Self::from_f64(i32::MAX as f64) {
            self.to_i32()
        } else {
            None
        }
    }

    // ========== Accurate sums ==========
    /// Sum of `a[i] * b[i]` computed with error-free products and a
    /// compensated running sum. Extra elements of the longer slice are ignored.
    fn linear_combination(a: &[Self], b: &[Self]) -> Self {
        let mut sum = Self::C0;
        let mut comp = Self::C0;
        for (&ai, &bi) in a.iter().zip(b.iter()) {
            let prod = ai * bi;
            let prod_err = ai.mul_add(bi, -prod);
            let t = sum + prod;
            let z = t - sum;
            let sum_err = (sum - (t - z)) + (prod - z);
            sum = t;
            comp = comp + (sum_err + prod_err);
        }
        let result = sum + comp;
        if result.is_nan() || result == Self::C0 {
            // infinite terms break the error-free transforms, and the
            // compensated sum does not keep the sign of a zero result
            a.iter()
                .zip(b.iter())
                .map(|(&ai, &bi)| ai * bi)
                .reduce(|acc, prod| acc + prod)
                .unwrap_or(Self::C0)
        } else {
            result
        }
    }
}

macro_rules! impl_real(
    ($t:ident, $ibits:ident) => (
        impl Real for $t {
            fn from_f64(val: f64) -> Self {
                val as $t
            }

            fn from_i32(val: i32) -> Self {
                val as $t
            }

            fn hash_bits(self) -> u64 {
                self.to_bits() as u64
            }

            fn rint(self) -> Self {
                self.round_ties_even()
            }

            fn ieee_remainder(self, divisor: Self) -> Self {
                if self.is_nan() || divisor.is_nan() || self.is_infinite() || divisor == 0.0 {
                    return $t::NAN;
                }
                if divisor.is_infinite() {
                    return self;
                }
                let r = self % divisor;
                let ar = r.abs();
                let ad = divisor.abs();
                if 2.0 * ar > ad {
                    r - ad.copysign(r)
                } else if 2.0 * ar == ad {
                    let quotient = ((self - r) / divisor).abs();
                    if quotient % 2.0 == 1.0 {
                        r - ad.copysign(r)
                    } else {
                        r
                    }
                } else {
                    r
                }
            }

            fn scalb(self, n: i32) -> Self {
                const STEP: i32 = 100;
                let up: $t = (2.0 as $t).powi(STEP);
                let down: $t = (0.5 as $t).powi(STEP);
                let mut r = self;
                let mut n = n;
                while n > STEP {
                    r *= up;
                    n -= STEP;
                }
                while n < -STEP {
                    r *= down;
                    n += STEP;
                }
                r * (2.0 as $t).powi(n)
            }

            fn next_up(self) -> Self {
                if self.is_nan() || self == $t::INFINITY {
                    self
                } else if self == 0.0 {
                    $t::from_bits(1)
                } else if self > 0.0 {
                    $t::from_bits(self.to_bits() + 1)
                } else {
                    $t::from_bits(self.to_bits() - 1)
                }
            }

            fn next_down(self) -> Self {
                if self.is_nan() || self == $t::NEG_INFINITY {
                    self
                } else if self == 0.0 {
                    -$t::from_bits(1)
                } else if self > 0.0 {
                    $t::from_bits(self.to_bits() - 1)
                } else {
                    $t::from_bits(self.to_bits() + 1)
                }
            }

            fn ulp(self) -> Self {
                if self.is_nan() {
                    return $t::NAN;
                }
                if self.is_infinite() {
                    return $t::INFINITY;
                }
                let a = self.abs();
                if a == $t::MAX {
                    a - Real::next_down(a)
                } else {
                    Real::next_up(a) - a
                }
            }

            fn compare(self, other: Self) -> Ordering {
                match self.partial_cmp(&other) {
                    Some(Ordering::Equal) => other
                        .is_sign_negative()
                        .cmp(&self.is_sign_negative()),
                    Some(ord) => ord,
                    None => self.is_nan().cmp(&other.is_nan()),
                }
            }

            fn equals_ulps(self, other: Self, max_ulps: u32) -> bool {
                if self.is_nan() || other.is_nan() {
                    return false;
                }
                let neg_zero = $ibits::MIN as i128;
                let x = self.to_bits() as $ibits as i128;
                let y = other.to_bits() as $ibits as i128;
                let max_ulps = max_ulps as i128;
                if (x < 0) == (y < 0) {
                    (x - y).abs() <= max_ulps
                } else {
                    let (delta_plus, delta_minus) = if x < y {
                        (y, x - neg_zero)
                    } else {
                        (x, y - neg_zero)
                    };
                    delta_plus <= max_ulps && delta_minus <= max_ulps - delta_plus
                }
            }
        }
    );
);

impl_real!(f64, i64);
impl_real!(f32, i32);
