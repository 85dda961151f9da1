use crate::complex::{Complex32, Complex64};
use float_cmp::{approx_eq, F32Margin, F64Margin};

pub fn comp_vec_c64(exemplar: &[Complex64], calc: &[Complex64], precision: F64Margin, test: &str) {
    assert_eq!(
        exemplar.len(),
        calc.len(),
        "test {} lengths do not match",
        test
    );
    for (i, (e, c)) in exemplar.iter().zip(calc.iter()).enumerate() {
        comp_c64(e, c, precision, test, &i.to_string());
    }
}

pub fn comp_c64(
    exemplar: &Complex64,
    calc: &Complex64,
    precision: F64Margin,
    test: &str,
    idx: &str,
) {
    comp_f64(
        &(exemplar.re()),
        &(calc.re()),
        precision,
        test,
        &(idx.to_owned() + ".re"),
    );
    comp_f64(
        &(exemplar.im()),
        &(calc.im()),
        precision,
        test,
        &(idx.to_owned() + ".im"),
    );
}

pub fn comp_c32(
    exemplar: &Complex32,
    calc: &Complex32,
    precision: F32Margin,
    test: &str,
    idx: &str,
) {
    assert!(
        approx_eq!(f32, calc.re(), exemplar.re(), precision)
            && approx_eq!(f32, calc.im(), exemplar.im(), precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

/// Absolute tolerance on each part; two NaN parts match, as do equal infinities
pub fn comp_c64_delta(exemplar: &Complex64, calc: &Complex64, delta: f64, test: &str, idx: &str) {
    comp_f64_delta(
        exemplar.re(),
        calc.re(),
        delta,
        test,
        &(idx.to_owned() + ".re"),
    );
    comp_f64_delta(
        exemplar.im(),
        calc.im(),
        delta,
        test,
        &(idx.to_owned() + ".im"),
    );
}

pub fn comp_f64_delta(exemplar: f64, calc: f64, delta: f64, test: &str, idx: &str) {
    let matched = if exemplar.is_nan() || calc.is_nan() {
        exemplar.is_nan() && calc.is_nan()
    } else {
        exemplar == calc || (exemplar - calc).abs() <= delta
    };
    assert!(
        matched,
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

/// Exact match on each part, NaN matching NaN and signed zeros kept apart
pub fn comp_c64_same(exemplar: &Complex64, calc: &Complex64, test: &str) {
    let same = |e: f64, c: f64| (e.is_nan() && c.is_nan()) || e.to_bits() == c.to_bits();
    assert!(
        same(exemplar.re(), calc.re()) && same(exemplar.im(), calc.im()),
        " Failed test {}\n  exemplar: {}\n      calc: {}",
        test,
        exemplar,
        calc
    );
}
