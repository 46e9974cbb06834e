//! Module-lattice layer for Kyber-style key generation
//!
//! This crate builds the vector and matrix types of Kyber on top of the
//! polynomial engine in `kybervec-algorithms` and runs the public-key core
//! `t = A·s + e` for the three standard security levels.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod kyber;

// Re-exports
pub use kybervec_algorithms::error::{Error, Result};
pub use kyber::{
    generate_public_vector, Kyber1024, Kyber512, Kyber768, KyberParams, Matrix, PartialKeypair,
    PolyVec,
};
