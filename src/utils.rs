use crate::complex::Complex;
use crate::error::CxError;
use crate::real::Real;

/// Complex value from polar coordinates, rejecting a negative modulus
///
/// ```
/// use cxkit::utils::polar_to_complex;
/// use std::f64::consts::FRAC_PI_2;
///
/// let z = polar_to_complex(2.0, FRAC_PI_2).unwrap();
/// assert!((z.im() - 2.0).abs() < 1e-15);
/// assert!(polar_to_complex(-1.0, 0.0).is_err());
/// ```
pub fn polar_to_complex<T: Real>(r: T, theta: T) -> Result<Complex<T>, CxError> {
    if r < T::C0 {
        return Err(CxError::IllegalArgument(format!(
            "negative complex modulus: {}",
            r
        )));
    }
    Ok(Complex::new(r * theta.cos(), r * theta.sin()))
}

/// Element-wise polar conversion of matching modulus and argument slices
pub fn polar_array_to_complex<T: Real>(r: &[T], theta: &[T]) -> Result<Vec<Complex<T>>, CxError> {
    if r.len() != theta.len() {
        return Err(CxError::IllegalArgument(format!(
            "dimensions mismatch: {} != {}",
            r.len(),
            theta.len()
        )));
    }
    r.iter()
        .zip(theta.iter())
        .map(|(&ri, &ti)| polar_to_complex(ri, ti))
        .collect()
}

/// Imaginary parts are zero
pub fn convert_to_complex<T: Real>(real: &[T]) -> Vec<Complex<T>> {
    real.iter().map(|&x| Complex::from_real(x)).collect()
}

pub fn real_to_complex<T: Real>(real: &[T]) -> Vec<Complex<T>> {
    convert_to_complex(real)
}

pub fn complex_to_real<T: Real>(values: &[Complex<T>]) -> Vec<T> {
    values.iter().map(|z| z.re()).collect()
}

pub fn complex_to_imaginary<T: Real>(values: &[Complex<T>]) -> Vec<T> {
    values.iter().map(|z| z.im()).collect()
}

/// Reads `[re0, im0, re1, im1, ...]`
pub fn interleaved_to_complex<T: Real>(interleaved: &[T]) -> Result<Vec<Complex<T>>, CxError> {
    if interleaved.len() % 2 != 0 {
        return Err(CxError::IllegalArgument(format!(
            "interleaved array has odd length {}",
            interleaved.len()
        )));
    }
    Ok(interleaved
        .chunks_exact(2)
        .map(|pair| Complex::new(pair[0], pair[1]))
        .collect())
}

/// Writes `[re0, im0, re1, im1, ...]`
pub fn complex_to_interleaved<T: Real>(values: &[Complex<T>]) -> Vec<T> {
    values.iter().flat_map(|z| [z.re(), z.im()]).collect()
}

pub fn split_to_complex<T: Real>(real: &[T], imaginary: &[T]) -> Result<Vec<Complex<T>>, CxError> {
    if real.len() != imaginary.len() {
        return Err(CxError::IllegalArgument(format!(
            "dimensions mismatch: {} != {}",
            real.len(),
            imaginary.len()
        )));
    }
    Ok(real
        .iter()
        .zip(imaginary.iter())
        .map(|(&re, &im)| Complex::new(re, im))
        .collect())
}

#[cfg(test)]
mod utils_tests {
    use super::*;
    use crate::complex::{Complex32, Complex64};
    use crate::util::{comp_c64, comp_vec_c64};
    use float_cmp::{F64Margin, FloatMargin};
    use std::f64::consts::PI;

    #[test]
    fn test_polar_to_complex() {
        let precision = F64Margin::default().epsilon(1e-14);
        comp_c64(
            &Complex64::new(0.0, 1.0),
            &polar_to_complex(1.0, PI / 2.0).unwrap(),
            precision,
            "test_polar_to_complex",
            "i",
        );
        comp_c64(
            &Complex64::new(-3.0, 0.0),
            &polar_to_complex(3.0, PI).unwrap(),
            precision,
            "test_polar_to_complex",
            "pi",
        );
        assert_eq!(polar_to_complex(0.0, 1.0).unwrap(), Complex64::ZERO);
        assert!(polar_to_complex(f64::NAN, 1.0).unwrap().is_nan());
    }

    #[test]
    fn test_polar_negative_modulus() {
        assert!(matches!(
            polar_to_complex(-1.0, 0.0),
            Err(CxError::IllegalArgument(_))
        ));
        assert!(polar_array_to_complex(&[1.0, -1.0], &[0.0, 0.0]).is_err());
    }

    #[test]
    fn test_polar_array() {
        let calc = polar_array_to_complex(&[1.0, 2.0], &[0.0, PI / 2.0]).unwrap();
        comp_vec_c64(
            &[Complex64::new(1.0, 0.0), Complex64::new(0.0, 2.0)],
            &calc,
            F64Margin::default().epsilon(1e-15),
            "test_polar_array",
        );
        assert!(polar_array_to_complex(&[1.0], &[0.0, 1.0]).is_err());
    }

    #[test]
    fn test_real_conversions() {
        let real = [1.0, -2.5, 0.0];
        let c = real_to_complex(&real);
        assert_eq!(c, convert_to_complex(&real));
        assert_eq!(
            c,
            vec![
                Complex64::new(1.0, 0.0),
                Complex64::new(-2.5, 0.0),
                Complex64::new(0.0, 0.0)
            ]
        );
        assert_eq!(complex_to_real(&c), real.to_vec());
        assert_eq!(complex_to_imaginary(&c), vec![0.0; 3]);
    }

    #[test]
    fn test_interleaved() {
        let values = vec![Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0)];
        let interleaved = complex_to_interleaved(&values);
        assert_eq!(interleaved, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(interleaved_to_complex(&interleaved).unwrap(), values);
        assert!(matches!(
            interleaved_to_complex(&[1.0, 2.0, 3.0]),
            Err(CxError::IllegalArgument(_))
        ));
        assert!(interleaved_to_complex::<f64>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_split() {
        let calc = split_to_complex(&[1.0f32, 3.0], &[2.0, 4.0]).unwrap();
        assert_eq!(calc, vec![Complex32::new(1.0, 2.0), Complex32::new(3.0, 4.0)]);
        assert!(split_to_complex(&[1.0], &[2.0, 4.0]).is_err());
    }
}
