//! Statistical checks on the centred binomial sampler.

use kybervec_algorithms::poly::params::Q;
use kybervec_algorithms::poly::sampling::{CbdSampler, DefaultSamplers};
use kybervec_tests::stats::{cbd_pmf, chi_squared, mean_variance};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

const SEEDS: usize = 64;

/// Collects centred samples from many seeds and nonces
fn collect(eta: u8) -> Vec<i32> {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed ^ eta as u64);
    let mut out = Vec::with_capacity(SEEDS * 4 * 256);
    for _ in 0..SEEDS {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        for nonce in 0..4u8 {
            let p = DefaultSamplers::sample_cbd(&seed, nonce, eta).unwrap();
            for &c in p.coeffs() {
                let v = if c > Q / 2 { c as i32 - Q as i32 } else { c as i32 };
                assert!(v.abs() <= eta as i32, "sample {} outside [-{}, {}]", v, eta, eta);
                out.push(v);
            }
        }
    }
    out
}

fn check_eta(eta: u8) {
    let samples = collect(eta);
    let bins = 2 * eta as usize + 1;

    let mut observed = vec![0u64; bins];
    for &v in &samples {
        observed[(v + eta as i32) as usize] += 1;
    }
    let expected: Vec<f64> = (0..bins)
        .map(|i| cbd_pmf(eta, i as i32 - eta as i32))
        .collect();

    let fit = chi_squared(&observed, &expected).unwrap();
    assert!(
        fit.p_value > 1e-4,
        "eta={} chi2={:.2} dof={} p={:.2e}",
        eta,
        fit.statistic,
        fit.dof,
        fit.p_value
    );

    let values: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
    let (mean, var) = mean_variance(&values);
    assert!(mean.abs() < 0.02, "eta={} mean {}", eta, mean);
    let target = eta as f64 / 2.0;
    assert!((var - target).abs() < 0.05, "eta={} variance {} (want {})", eta, var, target);
}

#[test]
fn test_cbd2_distribution() {
    check_eta(2);
}

#[test]
fn test_cbd3_distribution() {
    check_eta(3);
}
