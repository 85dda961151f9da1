use super::Complex;
use crate::error::CxError;
use crate::real::Real;

impl<T: Real> Complex<T> {
    // =========================================================================
    // Exponential and logarithm
    // =========================================================================

    /// e^self
    pub fn exp(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        let exp_re = self.re.exp();
        let (sin, cos) = self.im.sin_cos();
        Complex::new(exp_re * cos, exp_re * sin)
    }

    /// e^self - 1, with the real exponential computed as `exp_m1` so small
    /// real parts keep their precision
    pub fn exp_m1(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        let exp_m1_re = self.re.exp_m1();
        let (sin, cos) = self.im.sin_cos();
        Complex::new(exp_m1_re * cos, exp_m1_re * sin)
    }

    /// Principal natural logarithm, `(ln |z|, arg z)`.
    ///
    /// The branch cut runs along the negative real axis; the sign of a zero
    /// imaginary part picks the side (`+pi` or `-pi`).
    pub fn ln(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        Complex::new(self.re.hypot(self.im).ln(), self.im.atan2(self.re))
    }

    /// ln(1 + self)
    pub fn ln_1p(&self) -> Self {
        (*self + T::C1).ln()
    }

    /// Base 10 logarithm
    pub fn log10(&self) -> Self {
        self.ln() / T::LN_10_C
    }

    // =========================================================================
    // Powers and roots
    // =========================================================================

    /// self^x.
    ///
    /// A zero base gives `1` for a zero exponent, `0` for a positive real
    /// exponent and NaN otherwise. Integer-valued real exponents use
    /// [`Complex::powi`]; a real base with a real exponent keeps the real
    /// power when that is finite. Everything else is `exp(x ln self)`.
    pub fn pow(&self, x: &Self) -> Self {
        if self.is_zero() {
            return if x.is_zero() {
                Self::ONE
            } else if x.im == T::C0 && x.re > T::C0 {
                Self::ZERO
            } else {
                Self::NAN
            };
        }

        if x.im == T::C0 {
            if let Some(n) = x.re.to_i32_exact() {
                return self.powi(n);
            }
            // the real power reports 1 for (±1)^inf, which has no limit
            let unit_to_infinite = x.re.is_infinite() && self.re.abs() == T::C1;
            if self.im == T::C0 && !x.re.is_nan() && !unit_to_infinite {
                let real_pow = self.re.powf(x.re);
                if real_pow.is_finite() {
                    return Complex::from_real(real_pow);
                }
            }
        }

        (self.ln() * *x).exp()
    }

    /// self^x for a real exponent, identical to `pow` with `x + 0i`
    pub fn powf(&self, x: T) -> Self {
        self.pow(&Complex::from_real(x))
    }

    /// self^n by successive squaring, reciprocal for negative n
    pub fn powi(&self, n: i32) -> Self {
        let mut result = Self::ONE;
        let mut square = *self;
        let mut p = n.unsigned_abs();
        while p > 0 {
            if p & 1 == 1 {
                result = result * square;
            }
            square = square * square;
            p >>= 1;
        }
        if n < 0 {
            result.recip()
        } else {
            result
        }
    }

    /// Principal square root.
    ///
    /// The real part is never negative. On the negative real axis the
    /// imaginary part takes the sign of the zero imaginary input, so both
    /// sides of the cut are reachable.
    pub fn sqrt(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::ZERO;
        }
        let t = ((self.re.abs() + self.re.hypot(self.im)) * T::C05).sqrt();
        if self.re.is_sign_positive() {
            Complex::new(t, self.im / (T::C2 * t))
        } else {
            Complex::new(self.im.abs() / (T::C2 * t), t.copysign(self.im))
        }
    }

    /// sqrt(1 - self^2)
    pub fn sqrt1z(&self) -> Self {
        let t2 = *self * *self;
        Complex::new(T::C1 - t2.re, -t2.im).sqrt()
    }

    /// Principal cube root
    pub fn cbrt(&self) -> Self {
        let magnitude = self.abs().cbrt();
        let (sin, cos) = (self.arg() / T::C3).sin_cos();
        Complex::new(magnitude * cos, magnitude * sin)
    }

    /// Principal n-th root
    pub fn root_n(&self, n: i32) -> Self {
        let n = T::from_i32(n);
        let magnitude = self.abs().powf(T::C1 / n);
        let (sin, cos) = (self.arg() / n).sin_cos();
        Complex::new(magnitude * cos, magnitude * sin)
    }

    /// All n-th roots, starting from the principal one and turning
    /// counter-clockwise by 2pi/n.
    ///
    /// A NaN value has the single root [`Complex::NAN`], an infinite value the
    /// single root [`Complex::INF`].
    ///
    /// ```
    /// use cxkit::complex::Complex64;
    ///
    /// let roots = Complex64::new(8.0, 0.0).nth_root(3).unwrap();
    /// assert_eq!(roots.len(), 3);
    /// assert!((roots[0].re() - 2.0).abs() < 1e-15);
    /// ```
    pub fn nth_root(&self, n: i32) -> Result<Vec<Self>, CxError> {
        if n <= 0 {
            return Err(CxError::IllegalArgument(format!(
                "cannot compute nth root for null or negative n: {}",
                n
            )));
        }
        if self.is_nan() {
            return Ok(vec![Self::NAN]);
        }
        if self.is_infinite() {
            return Ok(vec![Self::INF]);
        }

        let nf = T::from_i32(n);
        let magnitude = self.re.hypot(self.im).powf(T::C1 / nf);
        let slice = T::TAU_C / nf;
        let mut angle = self.arg() / nf;
        let mut result = Vec::with_capacity(n as usize);
        for _ in 0..n {
            let (sin, cos) = angle.sin_cos();
            result.push(Complex::new(magnitude * cos, magnitude * sin));
            angle = angle + slice;
        }
        Ok(result)
    }

    // =========================================================================
    // Trigonometric
    // =========================================================================

    pub fn sin(&self) -> Self {
        self.sin_cos().0
    }

    pub fn cos(&self) -> Self {
        self.sin_cos().1
    }

    /// Sine and cosine together, sharing the real and hyperbolic evaluations
    pub fn sin_cos(&self) -> (Self, Self) {
        if self.is_nan() {
            return (Self::NAN, Self::NAN);
        }
        let (sin, cos) = self.re.sin_cos();
        let sinh = self.im.sinh();
        let cosh = self.im.cosh();
        (
            Complex::new(sin * cosh, cos * sinh),
            Complex::new(cos * cosh, -sin * sinh),
        )
    }

    /// Tangent, saturating to `i` / `-i` once `|im| > 20` so huge imaginary
    /// parts do not overflow
    pub fn tan(&self) -> Self {
        if self.is_nan() || self.re.is_infinite() {
            return Self::NAN;
        }
        if self.im > T::C20 {
            return Self::I;
        }
        if self.im < -T::C20 {
            return Self::MINUS_I;
        }
        let (sin2, cos2) = (T::C2 * self.re).sin_cos();
        let im2 = T::C2 * self.im;
        let d = cos2 + im2.cosh();
        Complex::new(sin2 / d, im2.sinh() / d)
    }

    // =========================================================================
    // Hyperbolic
    // =========================================================================

    pub fn sinh(&self) -> Self {
        self.sinh_cosh().0
    }

    pub fn cosh(&self) -> Self {
        self.sinh_cosh().1
    }

    /// Hyperbolic sine and cosine together
    pub fn sinh_cosh(&self) -> (Self, Self) {
        if self.is_nan() {
            return (Self::NAN, Self::NAN);
        }
        let (sin, cos) = self.im.sin_cos();
        let sinh = self.re.sinh();
        let cosh = self.re.cosh();
        (
            Complex::new(sinh * cos, cosh * sin),
            Complex::new(cosh * cos, sinh * sin),
        )
    }

    /// Hyperbolic tangent, saturating to `1` / `-1` once `|re| > 20`
    pub fn tanh(&self) -> Self {
        if self.is_nan() || self.im.is_infinite() {
            return Self::NAN;
        }
        if self.re > T::C20 {
            return Self::ONE;
        }
        if self.re < -T::C20 {
            return Self::MINUS_ONE;
        }
        let re2 = T::C2 * self.re;
        let (sin2, cos2) = (T::C2 * self.im).sin_cos();
        let d = re2.cosh() + cos2;
        Complex::new(re2.sinh() / d, sin2 / d)
    }

    // =========================================================================
    // Inverse trigonometric
    // =========================================================================

    /// Inverse cosine, `-i ln(z + i sqrt(1 - z^2))`.
    ///
    /// Cuts run along the real axis outside `[-1, 1]`.
    pub fn acos(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        (*self + self.sqrt1z().mul_i()).ln().mul_neg_i()
    }

    /// Inverse sine, `-i ln(sqrt(1 - z^2) + i z)`
    pub fn asin(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        (self.sqrt1z() + self.mul_i()).ln().mul_neg_i()
    }

    /// Inverse tangent.
    ///
    /// Singular at `±i`. Points on the imaginary axis beyond `±i` sit on the
    /// branch cut and take the side given by the sign of the zero real part.
    pub fn atan(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }

        if self.re == T::C0 {
            if self.im * self.im - T::C1 == T::C0 {
                return Self::NAN;
            }
            let ratio = (T::C1 + self.im) / (T::C1 - self.im);
            let tmp = Complex::from_real(ratio).ln().mul_i() * T::C05;
            Complex::new(tmp.re.copysign(self.re), tmp.im)
        } else {
            let n = Complex::new(T::C1 + self.im, -self.re);
            let d = Complex::new(T::C1 - self.im, self.re);
            (n / d).ln().mul_i() * T::C05
        }
    }

    /// Two-argument inverse tangent of `self / x`, placed in the quadrant
    /// given by the signs of the real parts like the scalar `atan2`.
    ///
    /// Both arguments zero gives NaN.
    pub fn atan2(&self, x: &Self) -> Self {
        let r = (*x * *x + *self * *self).sqrt();
        if x.re.is_sign_positive() {
            (*self / (r + *x)).atan().mul_int(2)
        } else {
            (*self / (r - *x)).atan().mul_int(-2) + T::PI_C
        }
    }

    // =========================================================================
    // Inverse hyperbolic
    // =========================================================================

    pub fn asinh(&self) -> Self {
        (*self + (*self * *self + T::C1).sqrt()).ln()
    }

    pub fn acosh(&self) -> Self {
        let sqrt_plus = (*self + T::C1).sqrt();
        let sqrt_minus = (*self - T::C1).sqrt();
        (*self + sqrt_plus * sqrt_minus).ln()
    }

    pub fn atanh(&self) -> Self {
        let ln_plus = (*self + T::C1).ln();
        let ln_minus = Complex::new(T::C1 - self.re, -self.im).ln();
        (ln_plus - ln_minus) * T::C05
    }
}
