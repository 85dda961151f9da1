use crate::error::CxError;
use crate::real::Real;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::{Product, Sum},
};

pub mod compare;
pub mod elementary;
mod ops;

pub use compare::ComplexComparator;

/// A complex number over a real scalar `T`.
///
/// Values are immutable pairs. A value is NaN when either part is NaN, and
/// infinite when it is not NaN and either part is infinite. Every NaN value
/// compares equal to [`Complex::NAN`] and hashes the same, while signed zeros
/// stay significant for equality.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Complex<T: Real> {
    re: T,
    im: T,
}

/// Fixed precision complex number
pub type Complex64 = Complex<f64>;

/// Single precision complex number
pub type Complex32 = Complex<f32>;

impl<T: Real> Complex<T> {
    /// The square root of -1.
    pub const I: Self = Self::new(T::C0, T::C1);

    /// The negative square root of -1.
    pub const MINUS_I: Self = Self::new(T::C0, T::CN1);

    /// Canonical not-a-number value.
    pub const NAN: Self = Self::new(T::NAN_C, T::NAN_C);

    /// Canonical infinite value.
    pub const INF: Self = Self::new(T::INF_C, T::INF_C);

    /// 1 + 0i
    pub const ONE: Self = Self::new(T::C1, T::C0);

    /// -1 + 0i
    pub const MINUS_ONE: Self = Self::new(T::CN1, T::C0);

    /// 0 + 0i
    pub const ZERO: Self = Self::new(T::C0, T::C0);

    /// pi + 0i
    pub const PI: Self = Self::new(T::PI_C, T::C0);

    /// Create a new complex number from real and imaginary parts
    pub const fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub fn from_real(re: T) -> Self {
        Complex::new(re, T::C0)
    }

    /// Create a new complex number, collapsing to [`Complex::NAN`] if either part is NaN
    pub fn value_of(re: T, im: T) -> Self {
        if re.is_nan() || im.is_nan() {
            Self::NAN
        } else {
            Complex::new(re, im)
        }
    }

    /// Create a new complex number from a magnitude and angle in radians
    pub fn from_polar(r: T, theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Complex::new(r * cos, r * sin)
    }

    /// Get the real part
    pub fn re(&self) -> T {
        self.re
    }

    /// Get the imaginary part
    pub fn im(&self) -> T {
        self.im
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// True if either part is NaN
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// True if not NaN and either part is infinite
    pub fn is_infinite(&self) -> bool {
        !self.is_nan() && (self.re.is_infinite() || self.im.is_infinite())
    }

    /// True if both parts are finite
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// True if both parts are zero, whatever their signs
    pub fn is_zero(&self) -> bool {
        self.re == T::C0 && self.im == T::C0
    }

    /// True if the imaginary part is zero
    pub fn is_real(&self) -> bool {
        self.im == T::C0
    }

    /// True if the value is real and its real part has no fractional part
    pub fn is_mathematical_integer(&self) -> bool {
        self.is_real() && self.re.is_mathematical_integer()
    }

    // =========================================================================
    // Polar form
    // =========================================================================

    /// Get the magnitude, NaN for NaN values
    pub fn abs(&self) -> T {
        if self.is_nan() {
            T::NAN_C
        } else {
            self.re.hypot(self.im)
        }
    }

    /// Get the magnitude, NaN for NaN values
    pub fn norm(&self) -> T {
        self.abs()
    }

    /// Get the argument (phase angle) in (-pi, pi]
    pub fn arg(&self) -> T {
        self.im.atan2(self.re)
    }

    // =========================================================================
    // Unary arithmetic
    // =========================================================================

    /// Get the complex conjugate
    pub fn conj(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        Complex::new(self.re, -self.im)
    }

    /// Get 1 / self
    pub fn recip(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::INF;
        }
        if self.is_infinite() {
            return Self::ZERO;
        }
        if self.re.abs() < self.im.abs() {
            let q = self.re / self.im;
            let scale = T::C1 / (self.re * q + self.im);
            Complex::new(scale * q, -scale)
        } else {
            let q = self.im / self.re;
            let scale = T::C1 / (self.im * q + self.re);
            Complex::new(scale, -scale * q)
        }
    }

    /// Multiply by i, without special value checks
    pub fn mul_i(&self) -> Self {
        Complex::new(-self.im, self.re)
    }

    /// Multiply by -i, without special value checks
    pub fn mul_neg_i(&self) -> Self {
        Complex::new(self.im, -self.re)
    }

    /// Multiply by an integer
    pub fn mul_int(&self, n: i32) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.re.is_infinite() || self.im.is_infinite() {
            return Self::INF;
        }
        let n = T::from_i32(n);
        Complex::new(self.re * n, self.im * n)
    }

    // =========================================================================
    // Rounding, sign and remainder
    // =========================================================================

    /// Round both parts towards +inf
    pub fn ceil(&self) -> Self {
        Complex::new(self.re.ceil(), self.im.ceil())
    }

    /// Round both parts towards -inf
    pub fn floor(&self) -> Self {
        Complex::new(self.re.floor(), self.im.floor())
    }

    /// Round both parts to the nearest integer, ties to even
    pub fn rint(&self) -> Self {
        Complex::new(self.re.rint(), self.im.rint())
    }

    /// Remainder of the division by `divisor`, the quotient being rounded
    /// to the nearest Gaussian integer
    pub fn remainder(&self, divisor: &Self) -> Self {
        let quotient = *self / *divisor;
        let q_re = quotient.re.rint();
        let q_im = quotient.im.rint();
        Complex::new(
            self.re - q_re * divisor.re + q_im * divisor.im,
            self.im - q_re * divisor.im - q_im * divisor.re,
        )
    }

    /// IEEE remainder of each part by a real divisor
    pub fn remainder_real(&self, divisor: T) -> Self {
        Complex::new(
            self.re.ieee_remainder(divisor),
            self.im.ieee_remainder(divisor),
        )
    }

    /// Unit-modulus value with the direction of `self`; NaN and zero values are returned unchanged
    pub fn sign(&self) -> Self {
        if self.is_nan() || self.is_zero() {
            *self
        } else {
            *self / self.re.hypot(self.im)
        }
    }

    /// Take the sign of each part from the matching part of `z`
    pub fn copysign(&self, z: &Self) -> Self {
        Complex::new(self.re.copysign(z.re), self.im.copysign(z.im))
    }

    /// Take the sign of both parts from `r`
    pub fn copysign_real(&self, r: T) -> Self {
        Complex::new(self.re.copysign(r), self.im.copysign(r))
    }

    /// Convert both parts from radians to degrees
    pub fn to_degrees(&self) -> Self {
        Complex::new(self.re * T::DEG_PER_RAD, self.im * T::DEG_PER_RAD)
    }

    /// Convert both parts from degrees to radians
    pub fn to_radians(&self) -> Self {
        Complex::new(self.re * T::RAD_PER_DEG, self.im * T::RAD_PER_DEG)
    }

    /// Multiply both parts by 2^n
    pub fn scalb(&self, n: i32) -> Self {
        Complex::new(self.re.scalb(n), self.im.scalb(n))
    }

    /// Unit in the last place of each part
    pub fn ulp(&self) -> Self {
        Complex::new(self.re.ulp(), self.im.ulp())
    }

    /// Compute sqrt(self^2 + y^2)
    pub fn hypot(&self, y: &Self) -> Self {
        if self.is_infinite() || y.is_infinite() {
            Self::INF
        } else if self.is_nan() || y.is_nan() {
            Self::NAN
        } else {
            (*self * *self + *y * *y).sqrt()
        }
    }

    // =========================================================================
    // Accurate linear combinations
    // =========================================================================

    /// Compute sum(a[i] * b[i]) with compensated products
    pub fn linear_combination(a: &[Self], b: &[Self]) -> Result<Self, CxError> {
        if a.len() != b.len() {
            return Err(CxError::IllegalArgument(format!(
                "dimensions mismatch: {} != {}",
                a.len(),
                b.len()
            )));
        }
        let n = 2 * a.len();
        let mut real_a = Vec::with_capacity(n);
        let mut real_b = Vec::with_capacity(n);
        let mut imag_a = Vec::with_capacity(n);
        let mut imag_b = Vec::with_capacity(n);
        for (ai, bi) in a.iter().zip(b.iter()) {
            real_a.extend([ai.re, -ai.im]);
            real_b.extend([bi.re, bi.im]);
            imag_a.extend([ai.re, ai.im]);
            imag_b.extend([bi.im, bi.re]);
        }
        Ok(Complex::new(
            T::linear_combination(&real_a, &real_b),
            T::linear_combination(&imag_a, &imag_b),
        ))
    }

    /// Compute sum(a[i] * b[i]) with real coefficients
    pub fn linear_combination_real(a: &[T], b: &[Self]) -> Result<Self, CxError> {
        if a.len() != b.len() {
            return Err(CxError::IllegalArgument(format!(
                "dimensions mismatch: {} != {}",
                a.len(),
                b.len()
            )));
        }
        let real_b: Vec<T> = b.iter().map(|z| z.re).collect();
        let imag_b: Vec<T> = b.iter().map(|z| z.im).collect();
        Ok(Complex::new(
            T::linear_combination(a, &real_b),
            T::linear_combination(a, &imag_b),
        ))
    }

    /// Compute a1 * b1 + a2 * b2 with compensated products
    pub fn linear_combination2(a1: &Self, b1: &Self, a2: &Self, b2: &Self) -> Self {
        Complex::new(
            T::linear_combination(
                &[a1.re, -a1.im, a2.re, -a2.im],
                &[b1.re, b1.im, b2.re, b2.im],
            ),
            T::linear_combination(
                &[a1.re, a1.im, a2.re, a2.im],
                &[b1.im, b1.re, b2.im, b2.re],
            ),
        )
    }
}

// =============================================================================
// Equality and hashing
// =============================================================================

impl<T: Real> PartialEq for Complex<T> {
    fn eq(&self, other: &Self) -> bool {
        if other.is_nan() {
            self.is_nan()
        } else {
            self.re.hash_bits() == other.re.hash_bits()
                && self.im.hash_bits() == other.im.hash_bits()
        }
    }
}

impl<T: Real> Eq for Complex<T> {}

impl<T: Real> Hash for Complex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_nan() {
            state.write_u64(7);
        } else {
            state.write_u64(self.re.hash_bits());
            state.write_u64(self.im.hash_bits());
        }
    }
}

// =============================================================================
// Display
// =============================================================================

/// Scalar text with a mandatory fraction and an `E` exponent outside
/// `[1e-3, 1e7)`: `1.0`, `1.0E10`, `NaN`, `-Infinity`
pub(crate) fn scalar_text<T: Real>(x: T) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > T::C0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == T::C0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }
    let a = x.abs();
    if a >= T::from_f64(1e-3) && a < T::from_f64(1e7) {
        let s = format!("{}", x);
        if s.contains('.') {
            s
        } else {
            s + ".0"
        }
    } else {
        let s = format!("{:e}", x);
        match s.split_once('e') {
            Some((mantissa, exp)) if mantissa.contains('.') => format!("{}E{}", mantissa, exp),
            Some((mantissa, exp)) => format!("{}.0E{}", mantissa, exp),
            None => s,
        }
    }
}

impl<T: Real> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", scalar_text(self.re), scalar_text(self.im))
    }
}

// =============================================================================
// Conversion
// =============================================================================

impl<T: Real> From<(T, T)> for Complex<T> {
    fn from((re, im): (T, T)) -> Self {
        Complex::new(re, im)
    }
}

impl<T: Real> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Complex::from_real(re)
    }
}

impl<T: Real> From<num_complex::Complex<T>> for Complex<T> {
    fn from(value: num_complex::Complex<T>) -> Self {
        Complex::new(value.re, value.im)
    }
}

impl<T: Real> From<&num_complex::Complex<T>> for Complex<T> {
    fn from(value: &num_complex::Complex<T>) -> Self {
        Complex::new(value.re, value.im)
    }
}

impl<T: Real> From<Complex<T>> for num_complex::Complex<T> {
    fn from(value: Complex<T>) -> Self {
        num_complex::Complex::new(value.re, value.im)
    }
}

impl<T: Real> From<&Complex<T>> for num_complex::Complex<T> {
    fn from(value: &Complex<T>) -> Self {
        num_complex::Complex::new(value.re, value.im)
    }
}

impl<T: Real> Zero for Complex<T> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Complex::is_zero(self)
    }
}

impl<T: Real> One for Complex<T> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<T: Real> Sum for Complex<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, z| acc + z)
    }
}

impl<'a, T: Real> Sum<&'a Complex<T>> for Complex<T> {
    fn sum<I: Iterator<Item = &'a Complex<T>>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, z| acc + z)
    }
}

impl<T: Real> Product for Complex<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, z| acc * z)
    }
}

impl<'a, T: Real> Product<&'a Complex<T>> for Complex<T> {
    fn product<I: Iterator<Item = &'a Complex<T>>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, z| acc * z)
    }
}
