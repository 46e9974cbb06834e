//! # kybervec
//!
//! Allocation-free polynomial arithmetic and NTT engine for Kyber-style
//! lattice key generation, sized for constrained targets.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`params`]: scheme constants (n, q, seed sizes, per-level k and eta)
//! - [`algorithms`]: modular arithmetic, polynomials, NTT, samplers, SHAKE
//! - [`kem`]: polynomial vectors, the public matrix and `t = A*s + e`
//!
//! ## Example
//!
//! ```
//! use kybervec::prelude::*;
//!
//! let rho = [0u8; 32];
//! let sigma = [0u8; 32];
//! let kp = Kyber512::generate(&rho, &sigma).unwrap();
//! assert_eq!(kp.checksums().t, [1026, 2090]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use kybervec_algorithms as algorithms;
pub use kybervec_kem as kem;
pub use kybervec_params as params;

pub use kybervec_algorithms::error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use kybervec_algorithms::poly::polynomial::{Coefficient, Domain, Ntt, Polynomial};
    pub use kybervec_algorithms::poly::sampling::{CbdSampler, DefaultSamplers, UniformSampler};
    pub use kybervec_algorithms::xof::ExtendableOutputFunction;
    pub use kybervec_kem::kyber::{
        generate_public_vector, Kyber1024, Kyber512, Kyber768, KyberParams, Matrix,
        PartialKeypair, PolyVec,
    };

    pub use subtle::ConstantTimeEq;
    pub use zeroize::Zeroize;
}
