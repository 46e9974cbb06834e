//! Statistical helpers for sampler tests

use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Probability mass of the centred binomial distribution CBD(eta) at `v`.
pub fn cbd_pmf(eta: u8, v: i32) -> f64 {
    let n = 2 * eta as u64;
    let k = v + eta as i32;
    if k < 0 || k as u64 > n {
        return 0.0;
    }
    binomial(n, k as u64) as f64 / (1u64 << n) as f64
}

fn binomial(n: u64, k: u64) -> u64 {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Result of a chi-squared goodness-of-fit test
#[derive(Debug, Clone, Copy)]
pub struct GoodnessOfFit {
    /// The chi-squared statistic
    pub statistic: f64,
    /// Degrees of freedom
    pub dof: f64,
    /// Upper-tail p-value
    pub p_value: f64,
}

/// Pearson's chi-squared test of `observed` counts against `expected` probabilities.
pub fn chi_squared(observed: &[u64], expected: &[f64]) -> Result<GoodnessOfFit, String> {
    if observed.len() != expected.len() || observed.len() < 2 {
        return Err(format!(
            "need matching bin counts of at least 2, got {} and {}",
            observed.len(),
            expected.len()
        ));
    }
    let total: u64 = observed.iter().sum();
    let statistic = observed
        .iter()
        .zip(expected)
        .map(|(&o, &p)| {
            let e = p * total as f64;
            (o as f64 - e).powi(2) / e
        })
        .sum();
    let dof = (observed.len() - 1) as f64;
    let dist = ChiSquared::new(dof).map_err(|e| format!("chi-squared: {}", e))?;
    Ok(GoodnessOfFit {
        statistic,
        dof,
        p_value: 1.0 - dist.cdf(statistic),
    })
}

/// Sample mean and (population) variance
pub fn mean_variance(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cbd_pmf_sums_to_one() {
        for eta in [2u8, 3] {
            let total: f64 = (-(eta as i32)..=eta as i32).map(|v| cbd_pmf(eta, v)).sum();
            assert!((total - 1.0).abs() < 1e-12);
        }
        assert_eq!(cbd_pmf(2, 0), 6.0 / 16.0);
        assert_eq!(cbd_pmf(2, 3), 0.0);
    }

    #[test]
    fn test_chi_squared_exact_fit() {
        let fit = chi_squared(&[25, 50, 25], &[0.25, 0.5, 0.25]).unwrap();
        assert_eq!(fit.statistic, 0.0);
        assert!(fit.p_value > 0.99);
        assert!(chi_squared(&[1, 2], &[1.0]).is_err());
    }
}
