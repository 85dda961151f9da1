use crate::complex::Complex;
use crate::error::CxError;
use crate::real::Real;
use dyn_clone::DynClone;

pub mod legendre;
pub mod path;

pub use self::legendre::{IntegratorBuilder, IterativeLegendreGaussIntegrator, LegendreRule};
pub use self::path::ComplexUnivariateIntegrator;

pub const DEFAULT_RELATIVE_ACCURACY: f64 = 1.0e-6;
pub const DEFAULT_ABSOLUTE_ACCURACY: f64 = 1.0e-15;
pub const DEFAULT_MIN_ITERATIONS_COUNT: usize = 3;
pub const DEFAULT_MAX_ITERATIONS_COUNT: usize = i32::MAX as usize;

// Complex-valued function of a complex variable
pub trait ComplexFn<T: Real>: DynClone {
    fn value(&self, z: Complex<T>) -> Complex<T>;
}
dyn_clone::clone_trait_object!(<T> ComplexFn<T> where T: Real);

impl<T, F> ComplexFn<T> for F
where
    T: Real,
    F: Fn(Complex<T>) -> Complex<T> + DynClone,
{
    fn value(&self, z: Complex<T>) -> Complex<T> {
        self(z)
    }
}

/// Quadrature of a real function over a finite interval.
///
/// Counters describe the most recent call to `integrate`.
pub trait UnivariateIntegrator<T: Real>: DynClone {
    /// Integrate `f` over `[lower, upper]` using at most `max_eval` function
    /// evaluations; running out of evaluations is a `ConvergenceFailure`
    fn integrate(
        &mut self,
        max_eval: usize,
        f: &dyn Fn(T) -> T,
        lower: T,
        upper: T,
    ) -> Result<T, CxError>;

    fn relative_accuracy(&self) -> T;

    fn absolute_accuracy(&self) -> T;

    fn min_iterations(&self) -> usize;

    fn max_iterations(&self) -> usize;

    fn evaluations(&self) -> usize;

    fn iterations(&self) -> usize;
}
dyn_clone::clone_trait_object!(<T> UnivariateIntegrator<T> where T: Real);

/// Rejects empty, reversed and unbounded intervals
pub(crate) fn verify_interval<T: Real>(lower: T, upper: T) -> Result<(), CxError> {
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(CxError::IllegalArgument(format!(
            "endpoints do not specify an interval: [{}, {}]",
            lower, upper
        )));
    }
    Ok(())
}
