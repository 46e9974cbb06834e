//! Polynomial engine for Z_3329[X]/(X^256 + 1)
//!
//! Layered bottom-up: constants in [`params`], scalar reduction in
//! [`modular`], the ring type in [`polynomial`], the transform in [`ntt`] and
//! seed-driven samplers in [`sampling`].

pub mod modular;
pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod sampling;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::modular::{barrett_reduce, montgomery_reduce};
    pub use super::ntt::{KyberNtt, NttOperator};
    pub use super::params::{N, Q};
    pub use super::polynomial::{Coefficient, Domain, Ntt, Polynomial};
    pub use super::sampling::{CbdSampler, DefaultSamplers, UniformSampler};
}
