use super::Complex;
use crate::real::Real;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::{cmp::Ordering, marker::PhantomData};

impl<T: Real> Complex<T> {
    /// Total order: real parts first, then imaginary parts, each part ordered
    /// as a total order (`-0 < +0`, NaN above `+inf`)
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.re
            .compare(other.re)
            .then_with(|| self.im.compare(other.im))
    }

    // =========================================================================
    // Tolerant equality
    // =========================================================================

    /// True if both parts are within `max_ulps` representable values; never
    /// true when either value is NaN
    pub fn equals_ulps(x: &Self, y: &Self, max_ulps: u32) -> bool {
        x.re.equals_ulps(y.re, max_ulps) && x.im.equals_ulps(y.im, max_ulps)
    }

    /// `equals_ulps` with a single ulp
    pub fn equals_default(x: &Self, y: &Self) -> bool {
        Self::equals_ulps(x, y, 1)
    }

    /// True if both parts are within one ulp or the absolute `eps`
    pub fn equals_eps(x: &Self, y: &Self, eps: T) -> bool {
        x.re.equals_eps(y.re, eps) && x.im.equals_eps(y.im, eps)
    }

    /// True if both parts are within one ulp or the relative tolerance `eps`
    pub fn equals_with_relative_tolerance(x: &Self, y: &Self, eps: T) -> bool {
        x.re.equals_with_relative_tolerance(y.re, eps)
            && x.im.equals_with_relative_tolerance(y.im, eps)
    }
}

/// Orders complex values for sorting, see [`Complex::total_cmp`]
#[derive(Clone, Copy, Debug, Default)]
pub struct ComplexComparator<T: Real> {
    _marker: PhantomData<T>,
}

impl<T: Real> ComplexComparator<T> {
    pub fn new() -> Self {
        ComplexComparator {
            _marker: PhantomData,
        }
    }

    pub fn compare(&self, a: &Complex<T>, b: &Complex<T>) -> Ordering {
        a.total_cmp(b)
    }

    /// Stable sort in place
    pub fn sort(&self, values: &mut [Complex<T>]) {
        values.sort_by(|a, b| self.compare(a, b));
    }
}

// =============================================================================
// approx
// =============================================================================

impl<T: Real> AbsDiffEq for Complex<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon) && self.im.abs_diff_eq(&other.im, epsilon)
    }
}

impl<T: Real> RelativeEq for Complex<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.re.relative_eq(&other.re, epsilon, max_relative)
            && self.im.relative_eq(&other.im, epsilon, max_relative)
    }
}

impl<T: Real> UlpsEq for Complex<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.re.ulps_eq(&other.re, epsilon, max_ulps)
            && self.im.ulps_eq(&other.im, epsilon, max_ulps)
    }
}
