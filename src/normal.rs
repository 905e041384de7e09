use std::f64::consts::PI;

/// Closed-form approximation of the standard normal CDF:
/// `0.5 * (1 + sign(x) * sqrt(1 - exp(-2/π · x²)))`.
///
/// This is deliberately not the erf-based CDF; histogram shapes are defined
/// in terms of this approximation.
pub fn normal_cdf(x: f64) -> f64 {
    let sign = if x > 0.0 { 1.0 } else { -1.0 };
    0.5 * (1.0 + sign * (1.0 - (-2.0 / PI * x * x).exp()).sqrt())
}

/// Probability mass between `bucket_min` and `bucket_max` under N(mean, stddev²).
///
/// Bounds may come in either order. A non-positive `stddev` is treated as a
/// step at the mean.
pub fn bar_fraction(bucket_min: f64, bucket_max: f64, mean: f64, stddev: f64) -> f64 {
    let cdf = |x: f64| {
        if stddev > 0.0 {
            normal_cdf((x - mean) / stddev)
        } else if x < mean {
            0.0
        } else {
            1.0
        }
    };
    (cdf(bucket_min) - cdf(bucket_max)).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn cdf_at_zero_is_half() {
        assert!((normal_cdf(0.0) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn cdf_is_symmetric_around_half() {
        for x in [0.1, 0.5, 1.0, 1.96, 3.0, 10.0] {
            assert!((normal_cdf(-x) - (1.0 - normal_cdf(x))).abs() < EPSILON);
        }
    }

    #[test]
    fn cdf_is_monotonic_and_bounded() {
        let mut last = 0.0;
        for i in -100..=100 {
            let y = normal_cdf(i as f64 / 10.0);
            assert!(y >= last);
            assert!((0.0..=1.0).contains(&y));
            last = y;
        }
        assert!(normal_cdf(-50.0) < EPSILON);
        assert!(normal_cdf(50.0) > 1.0 - EPSILON);
    }

    #[test]
    fn cdf_matches_formula_not_erf() {
        // 0.5 * (1 + sqrt(1 - exp(-2/pi))) = 0.8436...; the exact value is 0.8413.
        let expected = 0.5 * (1.0 + (1.0 - (-2.0 / PI).exp()).sqrt());
        assert!((normal_cdf(1.0) - expected).abs() < EPSILON);
        assert!((normal_cdf(1.0) - 0.8413).abs() > 0.001);
    }

    #[test]
    fn fractions_over_partition_sum_to_one() {
        let (mean, stddev) = (3.0, 4.0);
        let (min, max) = (mean - 12.0 * stddev, mean + 12.0 * stddev);
        let n = 101;
        let size = (max - min) / n as f64;
        let total: f64 = (0..n)
            .map(|i| {
                let lo = min + size * i as f64;
                bar_fraction(lo, lo + size, mean, stddev)
            })
            .sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn fraction_ignores_bound_order() {
        let a = bar_fraction(-2.0, 5.0, 1.0, 3.0);
        let b = bar_fraction(5.0, -2.0, 1.0, 3.0);
        assert!((a - b).abs() < EPSILON);
        assert!(a > 0.0);
    }

    #[test]
    fn zero_stddev_puts_mass_in_one_bucket() {
        let mean = 4.0;
        let edges: Vec<f64> = (0..=10).map(|i| i as f64 * 2.0).collect();
        let fractions: Vec<f64> = edges
            .windows(2)
            .map(|w| bar_fraction(w[0], w[1], mean, 0.0))
            .collect();
        assert_eq!(fractions.iter().filter(|&&f| f == 1.0).count(), 1);
        assert_eq!(fractions.iter().filter(|&&f| f == 0.0).count(), 9);
        // The mean sits on the edge between buckets 1 and 2.
        assert_eq!(fractions[1], 1.0);
    }
}
