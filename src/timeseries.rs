/// Evenly spaced sample times over the closed interval `[0, t_total]`.
///
/// Both endpoints are included. A single sample sits at the lower bound and
/// zero samples yields an empty vector.
pub fn linspace(t_total: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = steps - 1;
            let spacing = t_total / last as f64;
            // multiply instead of accumulating so rounding error does not drift
            let mut out: Vec<f64> = (0..steps).map(|i| i as f64 * spacing).collect();
            out[0] = 0.0;
            out[last] = t_total;
            out
        }
    }
}
