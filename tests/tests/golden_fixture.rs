//! Full-vector comparison of t against captured key-generation runs.

use kybervec_kem::kyber::generate_public_vector;
use kybervec_tests::fixtures::{load_keygen_fixture, KeygenFixture};

fn check_fixture<const K: usize>(fixture: &KeygenFixture) {
    assert_eq!(fixture.k, K, "fixture rank does not match");
    let rho = fixture.matrix_seed().expect("matrix seed");
    let sigma = fixture.noise_seed().expect("noise seed");

    let kp = generate_public_vector::<K>(&rho, &sigma, fixture.eta).expect("keygen");
    let sums = kp.checksums();
    assert_eq!(&sums.s[..], &fixture.s_checksums[..], "s checksums");
    assert_eq!(&sums.e[..], &fixture.e_checksums[..], "e checksums");
    assert_eq!(&sums.a_s[..], &fixture.as_checksums[..], "A*s checksums");
    assert_eq!(&sums.t[..], &fixture.t_checksums[..], "t checksums");

    for (i, (got, want)) in kp.t().polys().iter().zip(&fixture.t).enumerate() {
        assert_eq!(&got.coeffs()[..], &want[..], "t[{}] differs", i);
    }
}

#[test]
fn test_k2_zero_seed_fixture() {
    let fixture = load_keygen_fixture("keygen_k2_zero_seed.json").unwrap();
    check_fixture::<2>(&fixture);
}

#[test]
fn test_k3_counter_seed_fixture() {
    let fixture = load_keygen_fixture("keygen_k3_counter_seed.json").unwrap();
    check_fixture::<3>(&fixture);
}

#[test]
fn test_missing_fixture_is_reported() {
    assert!(load_keygen_fixture("no_such_fixture.json").is_err());
}
