// ---------------------------------------------------------------------------
// Axis ranges
// ---------------------------------------------------------------------------

/// Lower/upper percentile used for the outlier-resistant y range.
pub const ROBUST_PERCENTILES: (f64, f64) = (1.0, 99.0);

/// Fraction of the span added above and below the robust range.
pub const ROBUST_MARGIN: f64 = 0.1;

/// `q`-th percentile (0..=100) of an ascending slice, interpolating
/// linearly between the two closest ranks.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let rank = (q / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Min and max of the finite values, `None` if there are none.
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Outlier-resistant axis limits: the 1st–99th percentile band plus a 10%
/// margin on each side.  Falls back to min/max when the band collapses.
pub fn robust_range(values: &[f64]) -> Option<(f64, f64)> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let (p_lo, p_hi) = ROBUST_PERCENTILES;
    let mut lo = percentile(&sorted, p_lo);
    let mut hi = percentile(&sorted, p_hi);
    if lo == hi {
        lo = sorted[0];
        hi = sorted[sorted.len() - 1];
    }

    let margin = ROBUST_MARGIN * (hi - lo);
    Some(nonsingular(lo - margin, hi + margin))
}

/// Widen a zero-width interval so it can be used as axis limits.
pub fn nonsingular(lo: f64, hi: f64) -> (f64, f64) {
    if lo != hi {
        return (lo, hi);
    }
    let pad = if lo == 0.0 { 0.05 } else { 0.05 * lo.abs() };
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn percentile_interpolates_between_ranks() {
        let sorted = [0.0, 10.0, 20.0, 30.0, 40.0];
        assert!(close(percentile(&sorted, 0.0), 0.0));
        assert!(close(percentile(&sorted, 50.0), 20.0));
        assert!(close(percentile(&sorted, 100.0), 40.0));
        assert!(close(percentile(&sorted, 10.0), 4.0));
    }

    #[test]
    fn robust_range_ignores_outliers() {
        let mut values: Vec<f64> = (0..=200).map(|i| i as f64 / 200.0).collect();
        values.push(-100.0);
        values.push(100.0);

        let (lo, hi) = robust_range(&values).unwrap();
        assert!(lo > -0.5 && lo < 0.1, "lo = {lo}");
        assert!(hi < 1.5 && hi > 0.9, "hi = {hi}");
    }

    #[test]
    fn robust_range_falls_back_to_min_max() {
        // Both percentiles land inside the constant block.
        let mut values = vec![5.0; 998];
        values.push(0.0);
        values.push(10.0);
        let (lo, hi) = robust_range(&values).unwrap();
        assert!(close(lo, -1.0));
        assert!(close(hi, 11.0));
    }

    #[test]
    fn constant_data_gets_nonzero_span() {
        let (lo, hi) = robust_range(&[2.0; 10]).unwrap();
        assert!(lo < 2.0 && hi > 2.0);
        assert_eq!(nonsingular(0.0, 0.0), (-0.05, 0.05));
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let values = [f64::INFINITY, 1.0, 3.0, f64::NEG_INFINITY];
        assert_eq!(value_range(&values), Some((1.0, 3.0)));
        assert_eq!(value_range(&[f64::NAN]), None);
        assert_eq!(robust_range(&[]), None);
    }
}
