/// Computes node coefficients and padded interval widths for a knot/value
/// dataset. Input is assumed validated by the caller: equal lengths, at
/// least two knots, strictly increasing knot positions.
///
/// Both returned sequences have length `n + 2`. Widths `1..n` hold the real
/// knot spacings; the entries at `0`, `n` and `n + 1` replicate the nearest
/// real spacing. This treats each end as if flanked by one extra interval
/// of the same width, which stands in for natural boundary conditions, and
/// must not be altered. The last coefficient slot stays zero and is never
/// read during evaluation.
pub(crate) fn solve(knots: &[f64], values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = knots.len();
    let mut widths = vec![0.0; n + 2];

    for i in 1..n {
        widths[i] = knots[i] - knots[i - 1];
    }

    widths[0] = widths[1];
    widths[n] = widths[n - 1];
    widths[n + 1] = widths[n];

    // Forward recurrence coupling the synthetic left boundary coefficient
    // to every interior value; equivalent to eliminating the unknowns of
    // the boundary-coupled tridiagonal system without forming the matrix.
    let mut s = -1.0;
    let mut g = 2.0 * values[0];
    let mut p = s * g;
    let mut q = 2.0;

    for i in 1..n {
        let r = widths[i + 1] / widths[i];
        s = -r * s;
        g = -r * g + (r + 1.0) * values[i];
        p += g * s;
        q += s * s;
    }

    let mut coefficients = vec![0.0; n + 2];
    coefficients[0] = -p / q;

    for i in 1..=n {
        coefficients[i] = ((widths[i - 1] + widths[i]) * values[i - 1]
            - widths[i] * coefficients[i - 1])
            / widths[i - 1];
    }

    (coefficients, widths)
}
