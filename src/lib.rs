//! Cubic B-spline interpolation through irregularly spaced data points.
//! Node coefficients are obtained with a scalar forward recurrence instead
//! of an explicit tridiagonal solve, with natural-style boundary handling
//! at both ends.
//!
//! The interpolant is defined on the half-open domain `[t[0], t[n-1])`;
//! queries at or beyond the last knot are reported as out of domain.
//!
//! # Example
//! ```
//! use bspline_interp::Spline;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let knots = [0.0, 1.0, 2.5, 4.0];
//! let values = [1.0, -1.0, 3.0, 2.0];
//! let spline = Spline::fit(&knots, &values).unwrap();
//!
//! assert_approx_eq!(3.0, spline.interpolate(2.5).unwrap(), 1e-9);
//! assert_approx_eq!(1.0714285714, spline.interpolate(1.75).unwrap(), 1e-6);
//! assert!(spline.interpolate(4.0).is_err());
//! ```

mod coefficients;
mod spline;

pub use spline::Spline;
pub use spline::SplineError;
