// kem/src/kyber/matrix.rs

//! The public matrix A, expanded from a seed.

use core::array;

use kybervec_algorithms::error::{validate, Result};
use kybervec_algorithms::poly::polynomial::Ntt;
use kybervec_algorithms::poly::sampling::{DefaultSamplers, UniformSampler};

use super::params::KYBER_RHO_SEED_BYTES;
use super::polyvec::PolyVec;

/// A K×K matrix of NTT-domain polynomials, stored row-major.
///
/// Like [`PolyVec`], a rank outside 2..=4 is rejected at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<const K: usize> {
    rows: [PolyVec<Ntt, K>; K],
}

impl<const K: usize> Matrix<K> {
    /// Expands A from `seed`.
    ///
    /// Entry (i, j) is sampled from SHAKE-128(seed || j || i); with
    /// `transposed` the two index bytes are swapped, yielding Aᵀ.
    pub fn generate(seed: &[u8; KYBER_RHO_SEED_BYTES], transposed: bool) -> Result<Self> {
        let mut rows: [PolyVec<Ntt, K>; K] = array::from_fn(|_| PolyVec::zero());
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, entry) in row.polys.iter_mut().enumerate() {
                let (x, y) = if transposed { (i, j) } else { (j, i) };
                *entry = DefaultSamplers::sample_uniform(seed, x as u8, y as u8)?;
            }
        }
        Ok(Self { rows })
    }

    /// Returns row `i`, validating the index against K.
    pub fn row(&self, i: usize) -> Result<&PolyVec<Ntt, K>> {
        validate::index("matrix row", i, K)?;
        Ok(&self.rows[i])
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[PolyVec<Ntt, K>; K] {
        &self.rows
    }

    /// Matrix-vector product in the NTT domain.
    ///
    /// Row i of the result is the dot product of row i with `v`. Each output
    /// entry is reduced and carries a factor R⁻¹.
    pub fn mul_vec(&self, v: &PolyVec<Ntt, K>) -> PolyVec<Ntt, K> {
        PolyVec {
            polys: array::from_fn(|i| PolyVec::basemul_acc_montgomery(&self.rows[i], v)),
        }
    }
}
