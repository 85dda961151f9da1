//! cxkit prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!
//! ```
//! use cxkit::prelude::*;
//!
//! let z = Complex64::new(3.0, 4.0);
//! assert_eq!(z.abs(), 5.0);
//! ```

#[doc(no_inline)]
pub use crate::complex::{Complex, Complex32, Complex64, ComplexComparator};

#[doc(no_inline)]
pub use crate::consts::MathConst;
#[doc(no_inline)]
pub use crate::real::Real;

#[doc(no_inline)]
pub use crate::error::CxError;

#[doc(no_inline)]
pub use crate::format::{ComplexFormat, Locale, NumberFormat, ParsePosition};

#[doc(no_inline)]
pub use crate::integrate::{
    ComplexFn, ComplexUnivariateIntegrator, IntegratorBuilder, IterativeLegendreGaussIntegrator,
    UnivariateIntegrator,
};

#[doc(no_inline)]
pub use crate::roots::RootsOfUnity;

#[doc(no_inline)]
pub use crate::utils::polar_to_complex;
