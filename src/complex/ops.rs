use super::Complex;
use crate::real::Real;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

// =============================================================================
// Complex by complex
// =============================================================================

impl<T: Real> Add for Complex<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

impl<T: Real> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

impl<T: Real> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        if self.re.is_infinite()
            || self.im.is_infinite()
            || other.re.is_infinite()
            || other.im.is_infinite()
        {
            return Self::INF;
        }
        Complex::new(
            T::linear_combination(&[self.re, -self.im], &[other.re, other.im]),
            T::linear_combination(&[self.re, self.im], &[other.im, other.re]),
        )
    }
}

impl<T: Real> Div for Complex<T> {
    type Output = Self;

    /// Smith's algorithm, scaled by the larger divisor component
    fn div(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        let c = other.re;
        let d = other.im;
        if c == T::C0 && d == T::C0 {
            return Self::NAN;
        }
        if other.is_infinite() && !self.is_infinite() {
            return Self::ZERO;
        }
        if c.abs() < d.abs() {
            let q = c / d;
            let denominator = c * q + d;
            Complex::new(
                (self.re * q + self.im) / denominator,
                (self.im * q - self.re) / denominator,
            )
        } else {
            let q = d / c;
            let denominator = d * q + c;
            Complex::new(
                (self.im * q + self.re) / denominator,
                (self.im - self.re * q) / denominator,
            )
        }
    }
}

impl<T: Real> Rem for Complex<T> {
    type Output = Self;

    fn rem(self, other: Self) -> Self {
        self.remainder(&other)
    }
}

// =============================================================================
// Complex by real scalar
// =============================================================================

impl<T: Real> Add<T> for Complex<T> {
    type Output = Self;

    fn add(self, other: T) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        Complex::new(self.re + other, self.im)
    }
}

impl<T: Real> Sub<T> for Complex<T> {
    type Output = Self;

    fn sub(self, other: T) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        Complex::new(self.re - other, self.im)
    }
}

impl<T: Real> Mul<T> for Complex<T> {
    type Output = Self;

    fn mul(self, other: T) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        if self.re.is_infinite() || self.im.is_infinite() || other.is_infinite() {
            return Self::INF;
        }
        Complex::new(self.re * other, self.im * other)
    }
}

impl<T: Real> Div<T> for Complex<T> {
    type Output = Self;

    fn div(self, other: T) -> Self {
        if self.is_nan() || other.is_nan() || other == T::C0 {
            return Self::NAN;
        }
        if other.is_infinite() {
            return if self.is_infinite() {
                Self::NAN
            } else {
                Self::ZERO
            };
        }
        Complex::new(self.re / other, self.im / other)
    }
}

impl<T: Real> Rem<T> for Complex<T> {
    type Output = Self;

    fn rem(self, other: T) -> Self {
        self.remainder_real(other)
    }
}

impl<T: Real> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        Complex::new(-self.re, -self.im)
    }
}

impl<T: Real> Neg for &Complex<T> {
    type Output = Complex<T>;

    fn neg(self) -> Complex<T> {
        -*self
    }
}

// =============================================================================
// Borrowed operands
// =============================================================================

macro_rules! forward_ref_math_op(
    ($trt:ident, $mth:ident) => (
        impl<T: Real> $trt<&Complex<T>> for Complex<T> {
            type Output = Complex<T>;

            fn $mth(self, other: &Complex<T>) -> Complex<T> {
                $trt::$mth(self, *other)
            }
        }

        impl<T: Real> $trt<Complex<T>> for &Complex<T> {
            type Output = Complex<T>;

            fn $mth(self, other: Complex<T>) -> Complex<T> {
                $trt::$mth(*self, other)
            }
        }

        impl<T: Real> $trt<&Complex<T>> for &Complex<T> {
            type Output = Complex<T>;

            fn $mth(self, other: &Complex<T>) -> Complex<T> {
                $trt::$mth(*self, *other)
            }
        }

        impl<T: Real> $trt<&T> for Complex<T> {
            type Output = Complex<T>;

            fn $mth(self, other: &T) -> Complex<T> {
                $trt::$mth(self, *other)
            }
        }

        impl<T: Real> $trt<T> for &Complex<T> {
            type Output = Complex<T>;

            fn $mth(self, other: T) -> Complex<T> {
                $trt::$mth(*self, other)
            }
        }

        impl<T: Real> $trt<&T> for &Complex<T> {
            type Output = Complex<T>;

            fn $mth(self, other: &T) -> Complex<T> {
                $trt::$mth(*self, *other)
            }
        }
    );
);

forward_ref_math_op!(Add, add);
forward_ref_math_op!(Sub, sub);
forward_ref_math_op!(Mul, mul);
forward_ref_math_op!(Div, div);
forward_ref_math_op!(Rem, rem);

macro_rules! impl_math_assign_op(
    ($trt:ident, $mth:ident, $operator:tt) => (
        impl<T: Real> $trt for Complex<T> {
            fn $mth(&mut self, other: Complex<T>) {
                *self = *self $operator other;
            }
        }

        impl<T: Real> $trt<&Complex<T>> for Complex<T> {
            fn $mth(&mut self, other: &Complex<T>) {
                *self = *self $operator *other;
            }
        }

        impl<T: Real> $trt<T> for Complex<T> {
            fn $mth(&mut self, other: T) {
                *self = *self $operator other;
            }
        }

        impl<T: Real> $trt<&T> for Complex<T> {
            fn $mth(&mut self, other: &T) {
                *self = *self $operator *other;
            }
        }
    );
);

impl_math_assign_op!(AddAssign, add_assign, +);
impl_math_assign_op!(SubAssign, sub_assign, -);
impl_math_assign_op!(MulAssign, mul_assign, *);
impl_math_assign_op!(DivAssign, div_assign, /);
impl_math_assign_op!(RemAssign, rem_assign, %);

// =============================================================================
// Real scalar on the left
// =============================================================================

macro_rules! impl_scalar_lhs_op(
    ($t:ident, $trt:ident, $mth:ident, |$lhs:ident, $rhs:ident| $body:expr) => (
        impl $trt<Complex<$t>> for $t {
            type Output = Complex<$t>;

            fn $mth(self, other: Complex<$t>) -> Complex<$t> {
                let ($lhs, $rhs) = (self, other);
                $body
            }
        }

        impl $trt<&Complex<$t>> for $t {
            type Output = Complex<$t>;

            fn $mth(self, other: &Complex<$t>) -> Complex<$t> {
                let ($lhs, $rhs) = (self, *other);
                $body
            }
        }

        impl $trt<Complex<$t>> for &$t {
            type Output = Complex<$t>;

            fn $mth(self, other: Complex<$t>) -> Complex<$t> {
                let ($lhs, $rhs) = (*self, other);
                $body
            }
        }

        impl $trt<&Complex<$t>> for &$t {
            type Output = Complex<$t>;

            fn $mth(self, other: &Complex<$t>) -> Complex<$t> {
                let ($lhs, $rhs) = (*self, *other);
                $body
            }
        }
    );
);

macro_rules! impl_scalar_lhs(
    ($t:ident) => (
        impl_scalar_lhs_op!($t, Add, add, |lhs, rhs| rhs + lhs);
        impl_scalar_lhs_op!($t, Sub, sub, |lhs, rhs| Complex::from_real(lhs) - rhs);
        impl_scalar_lhs_op!($t, Mul, mul, |lhs, rhs| rhs * lhs);
        impl_scalar_lhs_op!($t, Div, div, |lhs, rhs| Complex::from_real(lhs) / rhs);
    );
);

impl_scalar_lhs!(f64);
impl_scalar_lhs!(f32);
