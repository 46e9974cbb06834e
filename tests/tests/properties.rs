//! Property tests for the NTT engine and the seeded samplers.

use kybervec_algorithms::poly::params::{N, Q};
use kybervec_algorithms::poly::polynomial::{Coefficient, Polynomial};
use kybervec_algorithms::poly::sampling::{CbdSampler, DefaultSamplers, UniformSampler};
use kybervec_kem::kyber::Matrix;
use proptest::prelude::*;

fn poly_strategy() -> impl Strategy<Value = Polynomial<Coefficient>> {
    prop::collection::vec(0..Q, N)
        .prop_map(|v| Polynomial::from_slice(&v).expect("canonical coefficients"))
}

fn wide_poly_strategy() -> impl Strategy<Value = Polynomial<Coefficient>> {
    prop::collection::vec(-(Q - 1)..Q, N).prop_map(|v| {
        let mut p = Polynomial::zero();
        p.coeffs_mut().copy_from_slice(&v);
        p
    })
}

fn seed_strategy() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ntt_roundtrip_scales_by_r(p in poly_strategy()) {
        let mut back = p.clone().ntt().inverse_ntt();
        back.from_mont();
        back.reduce();
        prop_assert_eq!(back, p);
    }

    #[test]
    fn ntt_is_linear(a in poly_strategy(), b in poly_strategy()) {
        let mut sum = a.add(&b);
        sum.reduce();
        let lhs = sum.ntt();

        let mut rhs = a.ntt().add(&b.ntt());
        rhs.reduce();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn product_matches_schoolbook(a in poly_strategy(), b in poly_strategy()) {
        let expected = a.schoolbook_mul(&b);
        let a_hat = a.ntt();
        let b_hat = b.ntt();
        let mut product = a_hat.basemul_montgomery(&b_hat).inverse_ntt();
        product.reduce();
        prop_assert_eq!(product, expected);
    }

    #[test]
    fn reduce_lands_in_canonical_range(mut p in wide_poly_strategy()) {
        let before = p.clone();
        p.reduce();
        prop_assert!(p.is_reduced());
        for (r, c) in p.coeffs().iter().zip(before.coeffs()) {
            prop_assert_eq!((*r as i32 - *c as i32).rem_euclid(Q as i32), 0);
        }
    }

    #[test]
    fn forward_ntt_output_is_canonical(p in wide_poly_strategy()) {
        prop_assert!(p.ntt().is_reduced());
    }

    #[test]
    fn uniform_sampling_is_deterministic(seed in seed_strategy(), x in 0u8..4, y in 0u8..4) {
        let a = DefaultSamplers::sample_uniform(&seed, x, y).unwrap();
        let b = DefaultSamplers::sample_uniform(&seed, x, y).unwrap();
        prop_assert!(a.is_reduced());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn cbd_sampling_is_deterministic(seed in seed_strategy(), nonce in any::<u8>(), eta in 2u8..=3) {
        let a = DefaultSamplers::sample_cbd(&seed, nonce, eta).unwrap();
        let b = DefaultSamplers::sample_cbd(&seed, nonce, eta).unwrap();
        prop_assert!(a.is_reduced());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn matrix_generation_is_deterministic(seed in seed_strategy()) {
        let a = Matrix::<2>::generate(&seed, false).unwrap();
        let b = Matrix::<2>::generate(&seed, false).unwrap();
        prop_assert_eq!(a, b);
    }
}
