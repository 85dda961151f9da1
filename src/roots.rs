use crate::complex::Complex;
use crate::error::CxError;
use crate::real::Real;
use log::debug;
use serde::{Deserialize, Serialize};

/// Cache of the `n` complex roots of unity `exp(±2πik/n)`, `k` in `[0, n)`.
///
/// The table is filled by [`RootsOfUnity::compute_roots`]; the sign of the
/// requested count picks the orientation. Asking again for the same count,
/// with either sign, only flips the orientation and reuses the table.
///
/// ```
/// use cxkit::roots::RootsOfUnity;
///
/// let mut roots = RootsOfUnity::<f64>::new();
/// roots.compute_roots(4).unwrap();
/// assert!((roots.imaginary(1).unwrap() - 1.0).abs() < 1e-15);
/// roots.compute_roots(-4).unwrap();
/// assert!((roots.imaginary(1).unwrap() + 1.0).abs() < 1e-15);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RootsOfUnity<T: Real = f64> {
    omega_count: usize,
    omega_real: Vec<T>,
    omega_imaginary_ccw: Vec<T>,
    omega_imaginary_cw: Vec<T>,
    counter_clockwise: bool,
}

impl<T: Real> Default for RootsOfUnity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> RootsOfUnity<T> {
    pub fn new() -> Self {
        RootsOfUnity {
            omega_count: 0,
            omega_real: Vec::new(),
            omega_imaginary_ccw: Vec::new(),
            omega_imaginary_cw: Vec::new(),
            counter_clockwise: true,
        }
    }

    /// Orientation chosen by the last `compute_roots` call
    pub fn is_counter_clockwise(&self) -> Result<bool, CxError> {
        self.check_computed()?;
        Ok(self.counter_clockwise)
    }

    /// Fill the table for `|n|` roots, counter-clockwise when `n > 0`
    pub fn compute_roots(&mut self, n: i32) -> Result<(), CxError> {
        if n == 0 {
            return Err(CxError::IllegalArgument(
                "cannot compute 0-th root of unity, indefinite result".to_string(),
            ));
        }
        self.counter_clockwise = n > 0;

        let abs_n = n.unsigned_abs() as usize;
        if abs_n == self.omega_count {
            return Ok(());
        }

        debug!("computing {} roots of unity", abs_n);
        let t = T::TAU_C / T::from_f64(abs_n as f64);
        let (sin_t, cos_t) = t.sin_cos();
        let mut omega_real = Vec::with_capacity(abs_n);
        let mut omega_imaginary_ccw = Vec::with_capacity(abs_n);
        let mut omega_imaginary_cw = Vec::with_capacity(abs_n);
        omega_real.push(T::C1);
        omega_imaginary_ccw.push(T::C0);
        // both orientations start at +0
        omega_imaginary_cw.push(T::C0);
        for i in 1..abs_n {
            let (re, im) = (omega_real[i - 1], omega_imaginary_ccw[i - 1]);
            let next_im = re * sin_t + im * cos_t;
            omega_real.push(re * cos_t - im * sin_t);
            omega_imaginary_ccw.push(next_im);
            omega_imaginary_cw.push(-next_im);
        }
        self.omega_imaginary_cw = omega_imaginary_cw;
        self.omega_real = omega_real;
        self.omega_imaginary_ccw = omega_imaginary_ccw;
        self.omega_count = abs_n;
        Ok(())
    }

    /// Real part of the `k`-th root
    pub fn real(&self, k: i32) -> Result<T, CxError> {
        let k = self.check_index(k)?;
        Ok(self.omega_real[k])
    }

    /// Imaginary part of the `k`-th root, signed by the current orientation
    pub fn imaginary(&self, k: i32) -> Result<T, CxError> {
        let k = self.check_index(k)?;
        if self.counter_clockwise {
            Ok(self.omega_imaginary_ccw[k])
        } else {
            Ok(self.omega_imaginary_cw[k])
        }
    }

    /// The `k`-th root as a complex value
    pub fn root(&self, k: i32) -> Result<Complex<T>, CxError> {
        Ok(Complex::new(self.real(k)?, self.imaginary(k)?))
    }

    /// Zero until the first successful `compute_roots`
    pub fn number_of_roots(&self) -> usize {
        self.omega_count
    }

    fn check_computed(&self) -> Result<(), CxError> {
        if self.omega_count == 0 {
            return Err(CxError::IllegalState(
                "roots of unity have not been computed yet".to_string(),
            ));
        }
        Ok(())
    }

    fn check_index(&self, k: i32) -> Result<usize, CxError> {
        self.check_computed()?;
        if k < 0 || k as usize >= self.omega_count {
            return Err(CxError::OutOfRange {
                index: k as i64,
                min: 0,
                max: self.omega_count as i64 - 1,
            });
        }
        Ok(k as usize)
    }
}
