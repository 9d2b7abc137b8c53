//! Summary statistics over elapsed-latency samples.

/// Arithmetic mean, or `None` for an empty sample.
pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i128 = values.iter().map(|&v| v as i128).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator). Needs at least two values.
pub fn sample_stdev(values: &[i64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let variance = values
        .iter()
        .map(|&v| {
            let diff = v as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Quartile cut points `[q1, median, q3]` of an ascending sample, using the
/// "exclusive" interpolation (R type 6).
pub fn quartiles(sorted: &[f64]) -> Option<[f64; 3]> {
    const N: usize = 4;
    let ld = sorted.len();
    match ld {
        0 => return None,
        1 => return Some([sorted[0]; 3]),
        _ => {}
    }

    let m = ld + 1;
    let mut out = [0.0; 3];
    for (slot, i) in out.iter_mut().zip(1..N) {
        let j = (i * m / N).clamp(1, ld - 1);
        let delta = (i * m) as f64 - (j * N) as f64;
        *slot = (sorted[j - 1] * (N as f64 - delta) + sorted[j] * delta) / N as f64;
    }
    Some(out)
}

/// Drop values outside Tukey's fences `[q1 - 1.5 IQR, q3 + 1.5 IQR]`.
///
/// Order of the kept values is preserved. Samples too small to have
/// quartiles are returned unchanged.
pub fn remove_outliers(values: &[i64]) -> Vec<i64> {
    let mut sorted: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    sorted.sort_by(f64::total_cmp);

    let Some([q1, _, q3]) = quartiles(&sorted) else {
        return values.to_vec();
    };
    let iqr = q3 - q1;
    let lower = q1 - 1.5 * iqr;
    let upper = q3 + 1.5 * iqr;

    values
        .iter()
        .copied()
        .filter(|&v| {
            let v = v as f64;
            v >= lower && v <= upper
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mean_and_stdev_of_small_sample() {
        let values = [10, 20, 30];
        assert_eq!(mean(&values), Some(20.0));
        assert_eq!(sample_stdev(&values), Some(10.0));
    }

    #[test]
    fn mean_keeps_fraction() {
        assert_eq!(mean(&[1, 2]), Some(1.5));
    }

    #[test]
    fn stdev_needs_two_values() {
        assert_eq!(mean(&[]), None);
        assert_eq!(sample_stdev(&[]), None);
        assert_eq!(sample_stdev(&[7]), None);
        assert_eq!(sample_stdev(&[7, 7]), Some(0.0));
    }

    #[test]
    fn mean_does_not_overflow() {
        let values = [i64::MAX, i64::MAX];
        assert_eq!(mean(&values), Some(i64::MAX as f64));
    }

    #[test]
    fn quartiles_interpolate() {
        assert_eq!(
            quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            Some([1.5, 3.0, 4.5])
        );
        assert_eq!(quartiles(&[4.0]), Some([4.0, 4.0, 4.0]));
        assert_eq!(quartiles(&[]), None);
    }

    #[test]
    fn removes_high_outlier() {
        let kept = remove_outliers(&[10, 12, 11, 13, 12, 100]);
        assert_eq!(kept, vec![10, 12, 11, 13, 12]);
    }

    #[test]
    fn keeps_tight_sample() {
        let values = [5, 6, 7, 8];
        assert_eq!(remove_outliers(&values), values.to_vec());
    }
}
