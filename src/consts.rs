/// Constants that work interchangeably across `f64` and `f32`, available in
/// `const` position so the generic complex engine can build its own
/// associated constants (`Complex::<T>::ONE`, `Complex::<T>::INF`, ...)
/// without fallible numeric casts.
///
/// ```
/// use cxkit::consts::MathConst;
///
/// let half_f64: f64 = f64::C05;
/// let half_f32: f32 = f32::C05;
/// assert_eq!(half_f64, 0.5);
/// assert_eq!(half_f32, 0.5);
/// ```
pub trait MathConst: Sized {
    // =========================================================================
    // Small integers and fractions
    // =========================================================================

    /// -1
    const CN1: Self;
    /// 0
    const C0: Self;
    /// 0.5
    const C05: Self;
    /// 1
    const C1: Self;
    /// 2
    const C2: Self;
    /// 3
    const C3: Self;
    /// 20, saturation threshold of `tan` and `tanh`
    const C20: Self;

    // =========================================================================
    // IEEE special values
    // =========================================================================

    /// Not a number
    const NAN_C: Self;
    /// Positive infinity
    const INF_C: Self;
    /// Negative infinity
    const NEG_INF_C: Self;

    // =========================================================================
    // Mathematical constants
    // =========================================================================

    /// Archimedes' constant (pi)
    const PI_C: Self;
    /// The full circle constant (tau = 2 * pi)
    const TAU_C: Self;
    /// ln(10)
    const LN_10_C: Self;
    /// 180 / pi
    const DEG_PER_RAD: Self;
    /// pi / 180
    const RAD_PER_DEG: Self;
}

macro_rules! impl_math_const(
    ($t:ident) => (
        impl MathConst for $t {
            const CN1: Self = -1.0;
            const C0: Self = 0.0;
            const C05: Self = 0.5;
            const C1: Self = 1.0;
            const C2: Self = 2.0;
            const C3: Self = 3.0;
            const C20: Self = 20.0;
            const NAN_C: Self = $t::NAN;
            const INF_C: Self = $t::INFINITY;
            const NEG_INF_C: Self = $t::NEG_INFINITY;
            const PI_C: Self = core::$t::consts::PI;
            const TAU_C: Self = core::$t::consts::TAU;
            const LN_10_C: Self = core::$t::consts::LN_10;
            const DEG_PER_RAD: Self = 180.0 / core::$t::consts::PI;
            const RAD_PER_DEG: Self = core::$t::consts::PI / 180.0;
        }
    );
);

impl_math_const!(f64);
impl_math_const!(f32);
