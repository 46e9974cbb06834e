// kem/src/kyber/mod.rs

//! Kyber public-key core.
//!
//! This module provides the module-lattice layer of Kyber key generation:
//! vectors of polynomials, the seed-expanded public matrix A and the
//! computation of the public vector t = A·s + e. Encapsulation, ciphertext
//! encoding and key serialization are not part of this crate.

// Modules defining the Kyber parameters and vector/matrix layer.
mod keygen;
mod matrix;
mod params;
mod polyvec;

pub use self::keygen::{generate_public_vector, PartialKeypair, StageChecksums};
pub use self::matrix::Matrix;
pub use self::params::{
    Kyber1024, Kyber512, Kyber768, KyberParams, KYBER_NOISE_SEED_BYTES, KYBER_RHO_SEED_BYTES,
};
pub use self::polyvec::PolyVec;
