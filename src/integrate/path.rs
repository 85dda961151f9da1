use crate::complex::Complex;
use crate::error::CxError;
use crate::integrate::{ComplexFn, UnivariateIntegrator};
use crate::real::Real;
use log::debug;

/// Integrates complex functions along straight segments by running a real
/// integrator on the real and imaginary parts of `f(z(t)) z'(t)`,
/// `z(t) = start + t (end - start)`, `t` in `[0, 1]`.
///
/// ```
/// use cxkit::complex::Complex64;
/// use cxkit::integrate::{ComplexUnivariateIntegrator, IntegratorBuilder};
/// use std::f64::consts::PI;
///
/// let real = IntegratorBuilder::<f64>::new().points(24).build().unwrap();
/// let mut integrator = ComplexUnivariateIntegrator::new(real);
/// let square = [
///     Complex64::new(1.0, 0.0),
///     Complex64::new(0.0, 1.0),
///     Complex64::new(-1.0, 0.0),
///     Complex64::new(0.0, -1.0),
///     Complex64::new(1.0, 0.0),
/// ];
/// let loop_integral = integrator
///     .integrate_path(100_000, &|z: Complex64| z.recip(), &square)
///     .unwrap();
/// assert!((loop_integral.im() - 2.0 * PI).abs() < 1e-8);
/// ```
#[derive(Clone)]
pub struct ComplexUnivariateIntegrator<T: Real = f64> {
    integrator: Box<dyn UnivariateIntegrator<T>>,
}

impl<T: Real> ComplexUnivariateIntegrator<T> {
    pub fn new<I>(integrator: I) -> Self
    where
        I: UnivariateIntegrator<T> + 'static,
    {
        ComplexUnivariateIntegrator {
            integrator: Box::new(integrator),
        }
    }

    pub fn new_boxed(integrator: Box<dyn UnivariateIntegrator<T>>) -> Self {
        ComplexUnivariateIntegrator { integrator }
    }

    /// The underlying real integrator, with the counters of its last run
    pub fn real_integrator(&self) -> &dyn UnivariateIntegrator<T> {
        self.integrator.as_ref()
    }

    /// Integral over the segment from `start` to `end`. The budget applies to
    /// each of the two real integrations separately.
    pub fn integrate(
        &mut self,
        max_eval: usize,
        f: &dyn ComplexFn<T>,
        start: Complex<T>,
        end: Complex<T>,
    ) -> Result<Complex<T>, CxError> {
        let rate = end - start;
        let re = self.integrator.integrate(
            max_eval,
            &|t| (f.value(start + rate * t) * rate).re(),
            T::C0,
            T::C1,
        )?;
        let im = self.integrator.integrate(
            max_eval,
            &|t| (f.value(start + rate * t) * rate).im(),
            T::C0,
            T::C1,
        )?;
        Ok(Complex::new(re, im))
    }

    /// Integral along the polyline through `path`, segment by segment
    pub fn integrate_path(
        &mut self,
        max_eval: usize,
        f: &dyn ComplexFn<T>,
        path: &[Complex<T>],
    ) -> Result<Complex<T>, CxError> {
        if path.len() < 2 {
            return Err(CxError::IllegalArgument(format!(
                "path needs at least 2 points, got {}",
                path.len()
            )));
        }
        let mut sum = Complex::ZERO;
        for segment in path.windows(2) {
            sum += self.integrate(max_eval, f, segment[0], segment[1])?;
        }
        debug!("integrated along {} segments", path.len() - 1);
        Ok(sum)
    }
}
