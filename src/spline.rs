use std::{error::Error, fmt::Display};

use crate::coefficients;

/// Fitted cubic B-spline interpolant: the knot positions paired for life
/// with the node coefficients and padded interval widths produced by the
/// fit. Immutable once fitted; every method takes `&self` and is
/// re-entrant.
pub struct Spline {
    knots: Vec<f64>,
    coefficients: Vec<f64>,
    widths: Vec<f64>,
    min_x: f64,
    max_x: f64,
}

impl Spline {
    /// Fits a cubic B-spline through the points `(knots[i], values[i])`.
    ///
    /// # Example
    /// ```
    /// use bspline_interp::Spline;
    ///
    /// let spline = Spline::fit(&[0.0, 1.0, 2.0], &[1.0, -1.0, 2.0]);
    /// assert!(spline.is_ok());
    /// ```
    /// # Errors
    /// Returns [SplineError::InvalidInput] when fewer than two knots are
    /// given, when the sequences differ in length or when the knots are not
    /// in increasing order. A repeated knot position is reported separately
    /// as [SplineError::DegenerateInterval], since it would otherwise
    /// poison every coefficient with a division by zero.
    pub fn fit(knots: &[f64], values: &[f64]) -> Result<Self, SplineError> {
        if knots.len() < 2 {
            return Err(SplineError::InvalidInput(
                "spline must have at least 2 knots".to_string(),
            ));
        }
        if knots.len() != values.len() {
            return Err(SplineError::InvalidInput(
                "knots and values must have equal length".to_string(),
            ));
        }
        for (i, pair) in knots.windows(2).enumerate() {
            let spacing = pair[1] - pair[0];
            if spacing < 0.0 {
                return Err(SplineError::InvalidInput(
                    "knots must be strictly increasing".to_string(),
                ));
            }
            if spacing < 1e-16 {
                return Err(SplineError::DegenerateInterval(i + 1));
            }
        }

        let (coefficients, widths) = coefficients::solve(knots, values);

        Ok(Spline {
            knots: knots.to_vec(),
            coefficients,
            widths,
            min_x: knots[0],
            max_x: knots[knots.len() - 1],
        })
    }

    /// Evaluates the interpolant at `x`.
    ///
    /// The domain is half open: `x` must satisfy `t[0] <= x < t[n-1]`. The
    /// last knot is excluded because the blend for the topmost interval
    /// reads one coefficient past the range the fit produces.
    ///
    /// # Errors
    /// Returns [SplineError::OutOfDomain] when `x` falls outside the
    /// domain; extrapolation is not supported.
    pub fn interpolate(&self, x: f64) -> Result<f64, SplineError> {
        if self.is_in_domain(x) {
            let index = self.find_interval_index(x);
            Ok(self.blend(index, x))
        } else {
            Err(SplineError::OutOfDomain(x))
        }
    }

    /// Evaluates the interpolant at every point of `x_vector`. All points
    /// must be inside the domain, otherwise the whole batch fails with the
    /// first offending point.
    pub fn batch_interpolate(&self, x_vector: &[f64]) -> Result<Vec<f64>, SplineError> {
        if let Some(x) = x_vector.iter().find(|x| !self.is_in_domain(**x)) {
            return Err(SplineError::OutOfDomain(*x));
        }

        let mut results = Vec::with_capacity(x_vector.len());
        for x in x_vector {
            let index = self.find_interval_index(*x);
            results.push(self.blend(index, *x));
        }
        Ok(results)
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Node coefficients of the fit, length `n + 2`. These are spline
    /// node coefficients, not polynomial power-basis coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Padded interval widths of the fit, length `n + 2`.
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    fn is_in_domain(&self, x: f64) -> bool {
        self.min_x <= x && x < self.max_x
    }

    // Reverse linear scan: largest i in [1, n-1] with x >= t[i], or 0 when
    // x falls before t[1]. Shifted by one so the blend works on the
    // interval [t[i-1], t[i]]. Linear lookup is adequate at the dataset
    // sizes this crate targets.
    fn find_interval_index(&self, x: f64) -> usize {
        let mut index = 0;
        for i in (1..self.knots.len()).rev() {
            if x - self.knots[i] >= 0.0 {
                index = i;
                break;
            }
        }
        index + 1
    }

    // Weighted blend of two locally fitted quadratics, combined by linear
    // interpolation across [t[i-1], t[i]].
    fn blend(&self, i: usize, x: f64) -> f64 {
        let t = &self.knots;
        let a = &self.coefficients;
        let h = &self.widths;

        let d = (a[i + 1] * (x - t[i - 1]) + a[i] * (t[i] - x + h[i + 1])) / (h[i] + h[i + 1]);
        let e = (a[i] * (x - t[i - 1] + h[i - 1]) + a[i - 1] * (t[i - 1] - x + h[i]))
            / (h[i - 1] + h[i]);

        (d * (x - t[i - 1]) + e * (t[i] - x)) / h[i]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Knot/value sequences unusable for fitting: too short, mismatched in
    /// length or not in increasing order.
    InvalidInput(String),
    /// Two knots share a position; the offending interval index is reported.
    DegenerateInterval(usize),
    /// Query point outside `[t[0], t[n-1])`.
    OutOfDomain(f64),
}

impl Display for SplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplineError::InvalidInput(message) => write!(f, "invalid input: {}", message),
            SplineError::DegenerateInterval(index) => {
                write!(f, "zero-width interval at index {}", index)
            }
            SplineError::OutOfDomain(x) => {
                write!(f, "value not interpolable: {} is out of domain", x)
            }
        }
    }
}

impl Error for SplineError {}
