use crate::error::CxError;
use crate::integrate::{
    verify_interval, UnivariateIntegrator, DEFAULT_ABSOLUTE_ACCURACY, DEFAULT_MAX_ITERATIONS_COUNT,
    DEFAULT_MIN_ITERATIONS_COUNT, DEFAULT_RELATIVE_ACCURACY,
};
use crate::real::Real;
use log::{debug, trace, warn};

const NEWTON_MAX_ITERATIONS: usize = 100;

/// Gauss-Legendre nodes and weights on `[-1, 1]`
#[derive(Clone, Debug, PartialEq)]
pub struct LegendreRule<T: Real = f64> {
    points: Vec<T>,
    weights: Vec<T>,
}

impl<T: Real> LegendreRule<T> {
    /// Rule with `n` points, exact for polynomials up to degree `2n - 1`.
    ///
    /// Nodes are the roots of `P_n`, found by Newton iteration from the
    /// Chebyshev-like guess `cos(π(i + 3/4) / (n + 1/2))`.
    pub fn new(n: usize) -> Result<Self, CxError> {
        if n == 0 {
            return Err(CxError::IllegalArgument(
                "number of integration points must be positive".to_string(),
            ));
        }
        let nt = T::from_f64(n as f64);
        let tol = T::epsilon() * T::C2;
        let mut points = vec![T::C0; n];
        let mut weights = vec![T::C0; n];

        for i in 0..(n + 1) / 2 {
            let mut z = (T::PI_C * (T::from_f64(i as f64) + T::from_f64(0.75)) / (nt + T::C05)).cos();
            let mut pp = T::C1;
            for _ in 0..NEWTON_MAX_ITERATIONS {
                let (p1, p2) = legendre_pair(n, z);
                pp = nt * (z * p1 - p2) / (z * z - T::C1);
                let z1 = z;
                z = z1 - p1 / pp;
                if (z - z1).abs() <= tol {
                    break;
                }
            }
            if 2 * i + 1 == n {
                z = T::C0;
                let (p1, p2) = legendre_pair(n, z);
                pp = nt * (z * p1 - p2) / (z * z - T::C1);
            }
            let w = T::C2 / ((T::C1 - z * z) * pp * pp);
            points[i] = -z;
            points[n - 1 - i] = z;
            weights[i] = w;
            weights[n - 1 - i] = w;
        }
        Ok(LegendreRule { points, weights })
    }

    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[T] {
        &self.points
    }

    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Apply the rule to `f` on `[a, b]` with a compensated sum
    pub fn integrate<F>(&self, mut f: F, a: T, b: T) -> Result<T, CxError>
    where
        F: FnMut(T) -> Result<T, CxError>,
    {
        let center = (a + b) * T::C05;
        let half = (b - a) * T::C05;
        let mut s = T::C0;
        let mut c = T::C0;
        for (&x, &w) in self.points.iter().zip(self.weights.iter()) {
            let y = w * half * f(center + half * x)? - c;
            let t = s + y;
            c = (t - s) - y;
            s = t;
        }
        Ok(s)
    }
}

// (P_n(z), P_{n-1}(z)) by the three-term recurrence
fn legendre_pair<T: Real>(n: usize, z: T) -> (T, T) {
    let mut p1 = T::C1;
    let mut p2 = T::C0;
    for j in 0..n {
        let p3 = p2;
        p2 = p1;
        let jt = T::from_f64(j as f64);
        p1 = ((T::C2 * jt + T::C1) * z * p2 - jt * p3) / (jt + T::C1);
    }
    (p1, p2)
}

#[derive(Clone, Debug)]
pub struct IntegratorBuilder<T: Real = f64> {
    points: usize,
    relative_accuracy: T,
    absolute_accuracy: T,
    min_iterations: usize,
    max_iterations: usize,
}

impl<T: Real> Default for IntegratorBuilder<T> {
    fn default() -> Self {
        IntegratorBuilder {
            points: 5,
            relative_accuracy: T::from_f64(DEFAULT_RELATIVE_ACCURACY),
            absolute_accuracy: T::from_f64(DEFAULT_ABSOLUTE_ACCURACY),
            min_iterations: DEFAULT_MIN_ITERATIONS_COUNT,
            max_iterations: DEFAULT_MAX_ITERATIONS_COUNT,
        }
    }
}

impl<T: Real> IntegratorBuilder<T> {
    pub fn new() -> Self {
        IntegratorBuilder::default()
    }

    /// Number of Gauss-Legendre points per sub-interval
    pub fn points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn relative_accuracy(mut self, relative_accuracy: T) -> Self {
        self.relative_accuracy = relative_accuracy;
        self
    }

    pub fn absolute_accuracy(mut self, absolute_accuracy: T) -> Self {
        self.absolute_accuracy = absolute_accuracy;
        self
    }

    /// Iterations required before convergence is accepted
    pub fn min_iterations(mut self, min_iterations: usize) -> Self {
        self.min_iterations = min_iterations;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn build(self) -> Result<IterativeLegendreGaussIntegrator<T>, CxError> {
        if self.min_iterations == 0 {
            return Err(CxError::IllegalArgument(
                "minimal iteration count must be positive".to_string(),
            ));
        }
        if self.max_iterations <= self.min_iterations {
            return Err(CxError::IllegalArgument(format!(
                "maximal iteration count {} must exceed minimal iteration count {}",
                self.max_iterations, self.min_iterations
            )));
        }
        Ok(IterativeLegendreGaussIntegrator {
            rule: LegendreRule::new(self.points)?,
            relative_accuracy: self.relative_accuracy,
            absolute_accuracy: self.absolute_accuracy,
            min_iterations: self.min_iterations,
            max_iterations: self.max_iterations,
            evaluations: 0,
            iterations: 0,
        })
    }
}

/// Composite Gauss-Legendre quadrature that keeps splitting the interval
/// into more sub-intervals until two successive estimates agree.
///
/// ```
/// use cxkit::integrate::{IntegratorBuilder, UnivariateIntegrator};
///
/// let mut integrator = IntegratorBuilder::<f64>::new().points(5).build().unwrap();
/// let area = integrator
///     .integrate(10_000, &|x: f64| x.sin(), 0.0, std::f64::consts::PI)
///     .unwrap();
/// assert!((area - 2.0).abs() < 1e-10);
/// ```
#[derive(Clone, Debug)]
pub struct IterativeLegendreGaussIntegrator<T: Real = f64> {
    rule: LegendreRule<T>,
    relative_accuracy: T,
    absolute_accuracy: T,
    min_iterations: usize,
    max_iterations: usize,
    evaluations: usize,
    iterations: usize,
}

impl<T: Real> IterativeLegendreGaussIntegrator<T> {
    pub fn number_of_points(&self) -> usize {
        self.rule.number_of_points()
    }

    // Sum of the rule over `n` equal sub-intervals of [min, max]
    fn stage(
        &mut self,
        max_eval: usize,
        f: &dyn Fn(T) -> T,
        min: T,
        max: T,
        n: usize,
    ) -> Result<T, CxError> {
        let step = (max - min) / T::from_f64(n as f64);
        let mut sum = T::C0;
        for i in 0..n {
            let a = min + step * T::from_f64(i as f64);
            let b = a + step;
            let evaluations = &mut self.evaluations;
            sum = sum
                + self.rule.integrate(
                    |x| {
                        *evaluations += 1;
                        if *evaluations > max_eval {
                            warn!("integration stopped after {} evaluations", max_eval);
                            return Err(CxError::ConvergenceFailure(max_eval));
                        }
                        Ok(f(x))
                    },
                    a,
                    b,
                )?;
        }
        Ok(sum)
    }
}

impl<T: Real> UnivariateIntegrator<T> for IterativeLegendreGaussIntegrator<T> {
    fn integrate(
        &mut self,
        max_eval: usize,
        f: &dyn Fn(T) -> T,
        lower: T,
        upper: T,
    ) -> Result<T, CxError> {
        verify_interval(lower, upper)?;
        self.evaluations = 0;
        self.iterations = 0;

        let points = T::from_f64(self.rule.number_of_points() as f64);
        let mut old_t = self.stage(max_eval, f, lower, upper, 1)?;
        let mut n = 2;
        loop {
            let t = self.stage(max_eval, f, lower, upper, n)?;
            let delta = (t - old_t).abs();
            let limit = self
                .absolute_accuracy
                .max((old_t.abs() + t.abs()) * T::C05 * self.relative_accuracy);
            trace!(
                "stage {}: {} sub-intervals, estimate {:e}, delta {:e}",
                self.iterations + 1,
                n,
                t,
                delta
            );

            if self.iterations + 1 >= self.min_iterations && delta <= limit {
                debug!(
                    "integral on [{}, {}] converged after {} evaluations",
                    lower, upper, self.evaluations
                );
                return Ok(t);
            }

            let ratio = T::from_f64(4.0).min((delta / limit).powf(T::C05 / points));
            let scaled = (ratio * T::from_f64(n as f64)).to_usize().unwrap_or(0);
            n = scaled.max(n + 1);
            old_t = t;
            self.iterations += 1;
            if self.iterations > self.max_iterations {
                warn!("integration stopped after {} iterations", self.max_iterations);
                return Err(CxError::ConvergenceFailure(self.max_iterations));
            }
        }
    }

    fn relative_accuracy(&self) -> T {
        self.relative_accuracy
    }

    fn absolute_accuracy(&self) -> T {
        self.absolute_accuracy
    }

    fn min_iterations(&self) -> usize {
        self.min_iterations
    }

    fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    fn evaluations(&self) -> usize {
        self.evaluations
    }

    fn iterations(&self) -> usize {
        self.iterations
    }
}
