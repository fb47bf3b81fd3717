// src/simulation/stats.rs

/// Arithmetic mean and population standard deviation (divides by `len`).
///
/// Both are order independent, so rates gathered by parallel workers reduce
/// to the same numbers as a sequential run over the same values. An empty
/// slice yields `(0.0, 0.0)`; callers reject zero trials before getting here.
pub fn mean_and_std_dev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_population_not_sample_deviation() {
        let (mean, std_dev) = mean_and_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((mean - 5.0).abs() < TOLERANCE);
        assert!((std_dev - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_constant_series_has_zero_spread() {
        let (mean, std_dev) = mean_and_std_dev(&[12.5; 10]);
        assert!((mean - 12.5).abs() < TOLERANCE);
        assert_eq!(std_dev, 0.0);
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = [1.0, 3.0, 8.0, 0.5];
        let backward = [0.5, 8.0, 3.0, 1.0];
        let (m1, s1) = mean_and_std_dev(&forward);
        let (m2, s2) = mean_and_std_dev(&backward);
        assert!((m1 - m2).abs() < TOLERANCE);
        assert!((s1 - s2).abs() < TOLERANCE);
    }
}
