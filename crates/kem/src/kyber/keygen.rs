// kem/src/kyber/keygen.rs

//! The public-key core of Kyber key generation: t = A·s + e.

use kybervec_algorithms::error::{validate, Result};
use kybervec_algorithms::poly::polynomial::{Coefficient, Ntt};
use tracing::debug;
use zeroize::Zeroize;

use super::matrix::Matrix;
use super::params::{KYBER_NOISE_SEED_BYTES, KYBER_RHO_SEED_BYTES};
use super::polyvec::PolyVec;

/// Checksums of each pipeline stage, one per vector entry.
///
/// Each value is the sum of that polynomial's coefficients mod q.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageChecksums<const K: usize> {
    /// Secret vector s (coefficient domain)
    pub s: [i16; K],
    /// Error vector e
    pub e: [i16; K],
    /// NTT(s)
    pub s_hat: [i16; K],
    /// A·s after the inverse transform
    pub a_s: [i16; K],
    /// t = A·s + e
    pub t: [i16; K],
}

/// The public vector t with its matrix seed, plus the secret s in NTT form.
///
/// The secret is wiped when the keypair is dropped.
pub struct PartialKeypair<const K: usize> {
    rho: [u8; KYBER_RHO_SEED_BYTES],
    t: PolyVec<Coefficient, K>,
    s_hat: PolyVec<Ntt, K>,
    checksums: StageChecksums<K>,
}

impl<const K: usize> PartialKeypair<K> {
    /// The public vector t, canonical coefficients
    pub fn t(&self) -> &PolyVec<Coefficient, K> {
        &self.t
    }

    /// The matrix seed A was expanded from
    pub fn rho(&self) -> &[u8; KYBER_RHO_SEED_BYTES] {
        &self.rho
    }

    /// The secret vector in the NTT domain
    pub fn s_hat(&self) -> &PolyVec<Ntt, K> {
        &self.s_hat
    }

    /// Checksums captured at each stage
    pub fn checksums(&self) -> &StageChecksums<K> {
        &self.checksums
    }
}

impl<const K: usize> Zeroize for PartialKeypair<K> {
    fn zeroize(&mut self) {
        self.s_hat.zeroize();
        self.t.zeroize();
        self.rho.zeroize();
    }
}

impl<const K: usize> Drop for PartialKeypair<K> {
    fn drop(&mut self) {
        self.s_hat.zeroize();
    }
}

impl<const K: usize> core::fmt::Debug for PartialKeypair<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PartialKeypair")
            .field("rho", &self.rho)
            .field("t", &self.t)
            .field("s_hat", &"<redacted>")
            .finish()
    }
}

/// Computes t = reduce(InvNTT(Â·NTT(s)) + e) from two independent seeds.
///
/// s and e are drawn from CBD_eta with nonces 0..K and K..2K of the noise
/// seed. The Montgomery factor R⁻¹ left by the pointwise products is cancelled
/// by the inverse transform, so t lands in the ordinary domain.
pub fn generate_public_vector<const K: usize>(
    matrix_seed: &[u8; KYBER_RHO_SEED_BYTES],
    noise_seed: &[u8; KYBER_NOISE_SEED_BYTES],
    eta: u8,
) -> Result<PartialKeypair<K>> {
    validate::eta(eta)?;

    let a = Matrix::<K>::generate(matrix_seed, false)?;

    let s = PolyVec::<Coefficient, K>::sample_cbd(noise_seed, 0, eta)?;
    let mut e = PolyVec::<Coefficient, K>::sample_cbd(noise_seed, K as u8, eta)?;
    let s_sums = s.checksums();
    let e_sums = e.checksums();
    debug!(k = K, eta, s = ?s_sums, e = ?e_sums, "sampled secret and error vectors");

    let s_hat = s.ntt();
    let s_hat_sums = s_hat.checksums();
    debug!(s_hat = ?s_hat_sums, "transformed secret vector");

    let a_s = a.mul_vec(&s_hat).inverse_ntt();
    let a_s_sums = a_s.checksums();
    debug!(a_s = ?a_s_sums, "computed A*s");

    let mut t = a_s.add(&e);
    t.reduce();
    e.zeroize();
    let t_sums = t.checksums();
    debug!(t = ?t_sums, "assembled public vector");

    Ok(PartialKeypair {
        rho: *matrix_seed,
        t,
        s_hat,
        checksums: StageChecksums {
            s: s_sums,
            e: e_sums,
            s_hat: s_hat_sums,
            a_s: a_s_sums,
            t: t_sums,
        },
    })
}
