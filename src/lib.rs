//! Complex arithmetic over IEEE scalars.
//!
//! [`Complex`](complex::Complex) is generic over the sealed [`Real`](real::Real)
//! trait (`f64` and `f32`) and keeps the special-value conventions of IEEE
//! arithmetic: NaN absorbs every operation, infinities are classified rather
//! than tracked component by component, and branch cuts honour the sign of zero.
//! Around the engine sit array conversions, text formatting and parsing, a
//! roots-of-unity table, and Gauss-Legendre integration along complex paths.
pub mod complex;
pub mod consts;
pub mod error;
pub mod format;
pub mod integrate;
pub mod prelude;
pub mod real;
pub mod roots;
pub mod utils;

#[cfg(test)]
pub mod util;
