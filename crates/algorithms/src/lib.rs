//! Lattice arithmetic primitives for Kyber-style key generation
//!
//! This crate provides the fixed-parameter arithmetic core over
//! R_q = Z_3329[X]/(X^256 + 1): branch-free Montgomery and Barrett reduction,
//! a type-tagged polynomial, the 7-layer negacyclic NTT with pointwise
//! multiplication, SHAKE-based samplers for uniform and centred-binomial
//! polynomials, and the SHAKE XOFs that drive them.
//!
//! Nothing here allocates. With `default-features = false` the crate builds
//! for `no_std` targets.
//!
//! # Representation
//!
//! Coefficients are `i16`, products are formed in `i32`. Values at rest are
//! canonical (in [0, q)); intermediate results that are not say so in their
//! documentation.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Polynomial engine
pub mod poly;
pub use poly::ntt::{KyberNtt, NttOperator};
pub use poly::polynomial::{Coefficient, Domain, Ntt, Polynomial};
pub use poly::sampling::{CbdSampler, DefaultSamplers, UniformSampler};

// XOF implementations
pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};
