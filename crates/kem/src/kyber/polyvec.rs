// kem/src/kyber/polyvec.rs

//! Polynomial vector operations for Kyber.

use core::array;

use kybervec_algorithms::error::{validate, Error, Result};
use kybervec_algorithms::poly::params::Q;
use kybervec_algorithms::poly::polynomial::{Coefficient, Domain, Ntt, Polynomial};
use kybervec_algorithms::poly::sampling::{CbdSampler, DefaultSamplers};
use kybervec_params::pqc::kyber::{KYBER_K_MAX, KYBER_K_MIN};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::params::KYBER_NOISE_SEED_BYTES;

// K basemul terms, each below 2q, must accumulate without leaving i16
const _: () = assert!(KYBER_K_MAX as i32 * (2 * Q as i32 - 1) <= i16::MAX as i32);

/// A vector of K polynomials, all in the same domain.
///
/// K is checked at compile time: any use of a rank outside 2..=4 fails to
/// build.
///
/// ```compile_fail
/// use kybervec_algorithms::poly::polynomial::Ntt;
/// use kybervec_kem::kyber::PolyVec;
///
/// let _ = PolyVec::<Ntt, 5>::zero();
/// ```
#[derive(Debug, Clone)]
pub struct PolyVec<D: Domain, const K: usize> {
    /// The polynomials in this vector.
    pub(crate) polys: [Polynomial<D>; K],
}

impl<D: Domain, const K: usize> PolyVec<D, K> {
    const RANK_CHECK: () = assert!(
        K >= KYBER_K_MIN && K <= KYBER_K_MAX,
        "module rank must be 2, 3 or 4"
    );

    /// Creates a new zero PolyVec of dimension K.
    pub fn zero() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::RANK_CHECK;
        Self {
            polys: array::from_fn(|_| Polynomial::zero()),
        }
    }

    /// Returns the dimension K of this PolyVec.
    pub const fn dimension() -> usize {
        K
    }

    /// Returns entry `i`, validating the index against K.
    pub fn get(&self, i: usize) -> Result<&Polynomial<D>> {
        validate::index("polynomial vector", i, K)?;
        Ok(&self.polys[i])
    }

    /// Returns all entries.
    pub fn polys(&self) -> &[Polynomial<D>; K] {
        &self.polys
    }

    /// Returns all entries mutably.
    pub fn polys_mut(&mut self) -> &mut [Polynomial<D>; K] {
        &mut self.polys
    }

    /// Entry-wise addition without reduction.
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.add_assign(other);
        result
    }

    /// Adds another PolyVec to this one, coefficient-wise, without reduction.
    pub fn add_assign(&mut self, other: &Self) {
        for (p1, p2) in self.polys.iter_mut().zip(other.polys.iter()) {
            p1.add_assign(p2);
        }
    }

    /// Reduces every coefficient of every entry into [0, q).
    pub fn reduce(&mut self) {
        for p in self.polys.iter_mut() {
            p.reduce();
        }
    }

    /// Per-entry checksums (sum of coefficients mod q).
    pub fn checksums(&self) -> [i16; K] {
        array::from_fn(|i| self.polys[i].checksum())
    }
}

impl<const K: usize> PolyVec<Coefficient, K> {
    /// Samples entry i from CBD_eta(seed, nonce_offset + i).
    pub fn sample_cbd(
        seed: &[u8; KYBER_NOISE_SEED_BYTES],
        nonce_offset: u8,
        eta: u8,
    ) -> Result<Self> {
        let mut v = Self::zero();
        for (i, p) in v.polys.iter_mut().enumerate() {
            let nonce = nonce_offset
                .checked_add(i as u8)
                .ok_or(Error::param("nonce_offset", "nonce range exceeds 255"))?;
            *p = DefaultSamplers::sample_cbd(seed, nonce, eta)?;
        }
        Ok(v)
    }

    /// Applies the forward NTT (with reduction) to each polynomial.
    pub fn ntt(self) -> PolyVec<Ntt, K> {
        PolyVec {
            polys: self.polys.map(Polynomial::ntt),
        }
    }
}

impl<const K: usize> PolyVec<Ntt, K> {
    /// Applies the inverse NTT to each polynomial (output scaled by R).
    pub fn inverse_ntt(self) -> PolyVec<Coefficient, K> {
        PolyVec {
            polys: self.polys.map(Polynomial::inverse_ntt),
        }
    }

    /// Dot product of `row` and `vec` in the NTT domain, reduced.
    ///
    /// Each basemul term lies in [0, 2q), so up to four terms accumulate
    /// below 8q < 2^15 before the single reduction at the end. The result
    /// carries a factor R⁻¹.
    pub fn basemul_acc_montgomery(row: &Self, vec: &Self) -> Polynomial<Ntt> {
        #[allow(clippy::let_unit_value)]
        let () = Self::RANK_CHECK;
        let mut acc = Polynomial::<Ntt>::zero();
        for (a, b) in row.polys.iter().zip(vec.polys.iter()) {
            acc.basemul_acc(a, b);
        }
        acc.reduce();
        acc
    }
}

impl<D: Domain, const K: usize> Default for PolyVec<D, K> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<D: Domain, const K: usize> Zeroize for PolyVec<D, K> {
    fn zeroize(&mut self) {
        for p in self.polys.iter_mut() {
            p.zeroize();
        }
    }
}

impl<D: Domain, const K: usize> ConstantTimeEq for PolyVec<D, K> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.polys
            .iter()
            .zip(other.polys.iter())
            .fold(Choice::from(1), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl<D: Domain, const K: usize> PartialEq for PolyVec<D, K> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<D: Domain, const K: usize> Eq for PolyVec<D, K> {}
