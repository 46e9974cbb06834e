//! polynomial.rs - Fixed-size polynomials over R_q = Z_q[X]/(X^256 + 1)
//!
//! A [`Polynomial`] carries its representation in a zero-sized type
//! parameter: [`Coefficient`] for ordinary coefficients, [`Ntt`] for the
//! evaluation form produced by the forward transform. Multiplication is only
//! defined on `Polynomial<Ntt>`, so mixing domains is a compile error rather
//! than a silent wrong answer.
//!
//! Coefficients at rest are canonical (in [0, q)). `add` and `sub` do not
//! reduce; their results must pass through [`Polynomial::reduce`] before they
//! are exposed or fed to a transform.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub};

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::modular::{barrett_reduce, from_montgomery, to_montgomery};
use super::params::{N, Q};
use crate::error::{validate, Result};

mod sealed {
    pub trait Sealed {}
}

/// Representation tag of a polynomial
pub trait Domain: sealed::Sealed + Clone + 'static {
    /// Human-readable name used in diagnostics
    const NAME: &'static str;
}

/// Ordinary coefficient representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {}

/// NTT (bit-reversed evaluation) representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ntt {}

impl sealed::Sealed for Coefficient {}
impl Domain for Coefficient {
    const NAME: &'static str = "coefficient";
}

impl sealed::Sealed for Ntt {}
impl Domain for Ntt {
    const NAME: &'static str = "ntt";
}

/// A polynomial in R_q = Z_q[X]/(X^N + 1)
#[derive(Clone)]
pub struct Polynomial<D: Domain> {
    pub(crate) coeffs: [i16; N],
    _domain: PhantomData<D>,
}

impl<D: Domain> Polynomial<D> {
    /// Creates a new polynomial with all coefficients set to zero
    pub const fn zero() -> Self {
        Self {
            coeffs: [0; N],
            _domain: PhantomData,
        }
    }

    /// Wraps raw coefficients without any range check.
    pub(crate) const fn from_raw(coeffs: [i16; N]) -> Self {
        Self {
            coeffs,
            _domain: PhantomData,
        }
    }

    /// Moves the coefficients into another domain tag.
    pub(crate) const fn retag<E: Domain>(self) -> Polynomial<E> {
        Polynomial::from_raw(self.coeffs)
    }

    /// Creates a polynomial from canonical coefficients
    pub fn from_coeffs(coeffs: [i16; N]) -> Result<Self> {
        validate::parameter(
            coeffs.iter().all(|c| (0..Q).contains(c)),
            "coeffs",
            "coefficients must lie in [0, q)",
        )?;
        Ok(Self::from_raw(coeffs))
    }

    /// Creates a polynomial from a slice of canonical coefficients
    pub fn from_slice(coeffs: &[i16]) -> Result<Self> {
        validate::length("polynomial coefficients", coeffs.len(), N)?;
        let mut arr = [0i16; N];
        arr.copy_from_slice(coeffs);
        Self::from_coeffs(arr)
    }

    /// Returns the degree N of the polynomial
    pub const fn degree() -> usize {
        N
    }

    /// Returns the modulus q for coefficient arithmetic
    pub const fn modulus_q() -> i16 {
        Q
    }

    /// Returns coefficient `i`, validating the index against N
    pub fn coeff(&self, i: usize) -> Result<i16> {
        validate::index("polynomial coefficient", i, N)?;
        Ok(self.coeffs[i])
    }

    /// Returns the coefficients
    pub const fn coeffs(&self) -> &[i16; N] {
        &self.coeffs
    }

    /// Returns the coefficients mutably; the caller keeps them canonical
    pub fn coeffs_mut(&mut self) -> &mut [i16; N] {
        &mut self.coeffs
    }

    /// Coefficient-wise addition without reduction
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.add_assign(other);
        result
    }

    /// Coefficient-wise subtraction without reduction
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for ((r, &a), &b) in result.coeffs.iter_mut().zip(&self.coeffs).zip(&other.coeffs) {
            *r = a - b;
        }
        result
    }

    /// In-place coefficient-wise addition without reduction
    pub fn add_assign(&mut self, other: &Self) {
        for (a, &b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a += b;
        }
    }

    /// In-place Barrett reduction of every coefficient into [0, q)
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = barrett_reduce(*c);
        }
    }

    /// Whether every coefficient is already canonical
    pub fn is_reduced(&self) -> bool {
        self.coeffs.iter().all(|c| (0..Q).contains(c))
    }

    /// Whether every coefficient is congruent to zero (constant time)
    pub fn is_zero(&self) -> bool {
        let acc = self.coeffs.iter().fold(0i16, |acc, &c| acc | barrett_reduce(c));
        bool::from(acc.ct_eq(&0))
    }

    /// Sum of the canonical coefficients mod q.
    ///
    /// A cheap fingerprint for eyeballing intermediate values in logs.
    pub fn checksum(&self) -> i16 {
        let sum: u32 = self.coeffs.iter().map(|&c| barrett_reduce(c) as u32).sum();
        (sum % Q as u32) as i16
    }

    /// Multiplies every coefficient by the Montgomery factor R = 2^16
    pub fn to_mont(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = to_montgomery(*c);
        }
    }

    /// Removes one Montgomery factor R from every coefficient
    pub fn from_mont(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = from_montgomery(*c);
        }
    }
}

impl Polynomial<Coefficient> {
    /// Schoolbook negacyclic multiplication (for correctness testing)
    pub fn schoolbook_mul(&self, other: &Self) -> Self {
        let mut acc = [0i64; N];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                let prod = a as i64 * b as i64;
                let idx = i + j;
                if idx < N {
                    acc[idx] += prod;
                } else {
                    // X^N = -1
                    acc[idx - N] -= prod;
                }
            }
        }

        let mut result = Self::zero();
        for (r, a) in result.coeffs.iter_mut().zip(acc) {
            *r = a.rem_euclid(Q as i64) as i16;
        }
        result
    }
}

impl<D: Domain> Default for Polynomial<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<D: Domain> Zeroize for Polynomial<D> {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

impl<D: Domain> ConstantTimeEq for Polynomial<D> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.coeffs[..].ct_eq(&other.coeffs[..])
    }
}

impl<D: Domain> PartialEq for Polynomial<D> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<D: Domain> Eq for Polynomial<D> {}

impl<D: Domain> fmt::Debug for Polynomial<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("domain", &D::NAME)
            .field("coeffs[..8]", &&self.coeffs[..8])
            .finish_non_exhaustive()
    }
}

// Implement standard ops traits for ergonomic usage
impl<D: Domain> Add for &Polynomial<D> {
    type Output = Polynomial<D>;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(self, other)
    }
}

impl<D: Domain> Sub for &Polynomial<D> {
    type Output = Polynomial<D>;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(self, other)
    }
}

impl<D: Domain> AddAssign<&Polynomial<D>> for Polynomial<D> {
    fn add_assign(&mut self, other: &Polynomial<D>) {
        Polynomial::add_assign(self, other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly_from_prefix(prefix: &[i16]) -> Polynomial<Coefficient> {
        let mut p = Polynomial::<Coefficient>::zero();
        p.coeffs[..prefix.len()].copy_from_slice(prefix);
        p
    }

    #[test]
    fn test_polynomial_creation() {
        let poly = Polynomial::<Coefficient>::zero();
        assert!(poly.coeffs().iter().all(|&c| c == 0));
        assert!(poly.is_zero());

        let mut coeffs = [0i16; N];
        coeffs[..4].copy_from_slice(&[1, 2, 3, 4]);
        let poly = Polynomial::<Coefficient>::from_coeffs(coeffs).unwrap();
        assert_eq!(&poly.coeffs()[..4], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_coeffs_rejects_non_canonical() {
        let mut coeffs = [0i16; N];
        coeffs[7] = Q;
        assert!(Polynomial::<Coefficient>::from_coeffs(coeffs).is_err());
        coeffs[7] = -1;
        assert!(Polynomial::<Ntt>::from_coeffs(coeffs).is_err());
    }

    #[test]
    fn test_from_slice_length() {
        assert!(Polynomial::<Coefficient>::from_slice(&[0; N]).is_ok());
        assert!(Polynomial::<Coefficient>::from_slice(&[0; N - 1]).is_err());
        assert!(Polynomial::<Coefficient>::from_slice(&[0; N + 1]).is_err());
    }

    #[test]
    fn test_coeff_index_validation() {
        let p = poly_from_prefix(&[5, 6]);
        assert_eq!(p.coeff(1), Ok(6));
        assert_eq!(p.coeff(N - 1), Ok(0));
        assert!(p.coeff(N).is_err());
    }

    #[test]
    fn test_polynomial_addition() {
        let a = poly_from_prefix(&[1, 2, 3, Q - 1]);
        let b = poly_from_prefix(&[5, 6, 7, Q - 1]);
        let mut c = &a + &b;
        // no reduction yet
        assert_eq!(&c.coeffs()[..4], &[6, 8, 10, 2 * Q - 2]);
        c.reduce();
        assert_eq!(&c.coeffs()[..4], &[6, 8, 10, Q - 2]);
    }

    #[test]
    fn test_polynomial_subtraction() {
        let a = poly_from_prefix(&[10, 20, 0, 40]);
        let b = poly_from_prefix(&[5, 6, 1, 8]);
        let mut c = &a - &b;
        assert_eq!(&c.coeffs()[..4], &[5, 14, -1, 32]);
        c.reduce();
        assert_eq!(&c.coeffs()[..4], &[5, 14, Q - 1, 32]);
    }

    #[test]
    fn test_modular_reduction() {
        let mut p = poly_from_prefix(&[3330, 3331, 3328, -3329, i16::MAX, i16::MIN]);
        assert!(!p.is_reduced());
        p.reduce();
        assert!(p.is_reduced());
        assert_eq!(
            &p.coeffs()[..6],
            &[1, 2, 3328, 0, (i16::MAX as i32 % 3329) as i16, (i16::MIN as i32).rem_euclid(3329) as i16]
        );
    }

    #[test]
    fn test_is_zero_ignores_representative() {
        let p = poly_from_prefix(&[Q, -Q, 2 * Q]);
        assert!(p.is_zero());
        let p = poly_from_prefix(&[0, 0, 1]);
        assert!(!p.is_zero());
    }

    #[test]
    fn test_checksum() {
        let p = poly_from_prefix(&[Q - 1, 1, 5]);
        assert_eq!(p.checksum(), 5);
        let p = poly_from_prefix(&[-1]);
        assert_eq!(p.checksum(), Q - 1);
    }

    #[test]
    fn test_montgomery_roundtrip() {
        let original = poly_from_prefix(&[0, 1, 17, 1664, Q - 1]);
        let mut p = original.clone();
        p.to_mont();
        assert_ne!(p, original);
        p.from_mont();
        assert_eq!(p, original);
    }

    #[test]
    fn test_schoolbook_negacyclic_wrap() {
        // X^255 * X = X^256 = -1
        let mut a = Polynomial::<Coefficient>::zero();
        a.coeffs[N - 1] = 1;
        let b = poly_from_prefix(&[0, 1]);
        let c = a.schoolbook_mul(&b);
        assert_eq!(c.coeffs()[0], Q - 1);
        assert!(c.coeffs()[1..].iter().all(|&x| x == 0));
    }

    #[test]
    fn test_zeroize() {
        let mut p = poly_from_prefix(&[1, 2, 3]);
        p.zeroize();
        assert_eq!(p, Polynomial::zero());
    }

    #[test]
    fn test_debug_names_domain() {
        let p = Polynomial::<Ntt>::zero();
        let s = format!("{:?}", p);
        assert!(s.contains("ntt"));
    }
}
