// kem/src/kyber/params.rs

//! Kyber parameter definitions.

use kybervec_algorithms::error::Result;
use kybervec_params::pqc::kyber as global_params; // Using an alias for clarity

use super::keygen::{generate_public_vector, PartialKeypair};

/// Size of the matrix seed (rho) in bytes.
pub const KYBER_RHO_SEED_BYTES: usize = global_params::KYBER_SYMBYTES;
/// Size of the noise seed in bytes.
pub const KYBER_NOISE_SEED_BYTES: usize = global_params::KYBER_SYMBYTES;

/// Trait defining parameters for a specific Kyber variant.
pub trait KyberParams: Send + Sync + 'static {
    /// Security parameter k (dimension of vectors/matrices).
    const K: usize;
    /// Noise parameter eta1 for secret s, e.
    const ETA1: u8;
    /// Algorithm name string.
    const NAME: &'static str;

    /// Key-generation output for this rank.
    type Keypair;

    /// Runs `t = A*s + e` with this level's rank and eta1.
    fn generate(
        matrix_seed: &[u8; KYBER_RHO_SEED_BYTES],
        noise_seed: &[u8; KYBER_NOISE_SEED_BYTES],
    ) -> Result<Self::Keypair>;
}

/// Kyber-512: k = 2, eta1 = 3
#[derive(Debug, Clone, Copy)]
pub struct Kyber512;

impl KyberParams for Kyber512 {
    const K: usize = global_params::KYBER512.k;
    const ETA1: u8 = global_params::KYBER512.eta1;
    const NAME: &'static str = global_params::KYBER512.name;

    type Keypair = PartialKeypair<{ global_params::KYBER512.k }>;

    fn generate(
        matrix_seed: &[u8; KYBER_RHO_SEED_BYTES],
        noise_seed: &[u8; KYBER_NOISE_SEED_BYTES],
    ) -> Result<Self::Keypair> {
        generate_public_vector(matrix_seed, noise_seed, Self::ETA1)
    }
}

/// Kyber-768: k = 3, eta1 = 2
#[derive(Debug, Clone, Copy)]
pub struct Kyber768;

impl KyberParams for Kyber768 {
    const K: usize = global_params::KYBER768.k;
    const ETA1: u8 = global_params::KYBER768.eta1;
    const NAME: &'static str = global_params::KYBER768.name;

    type Keypair = PartialKeypair<{ global_params::KYBER768.k }>;

    fn generate(
        matrix_seed: &[u8; KYBER_RHO_SEED_BYTES],
        noise_seed: &[u8; KYBER_NOISE_SEED_BYTES],
    ) -> Result<Self::Keypair> {
        generate_public_vector(matrix_seed, noise_seed, Self::ETA1)
    }
}

/// Kyber-1024: k = 4, eta1 = 2
#[derive(Debug, Clone, Copy)]
pub struct Kyber1024;

impl KyberParams for Kyber1024 {
    const K: usize = global_params::KYBER1024.k;
    const ETA1: u8 = global_params::KYBER1024.eta1;
    const NAME: &'static str = global_params::KYBER1024.name;

    type Keypair = PartialKeypair<{ global_params::KYBER1024.k }>;

    fn generate(
        matrix_seed: &[u8; KYBER_RHO_SEED_BYTES],
        noise_seed: &[u8; KYBER_NOISE_SEED_BYTES],
    ) -> Result<Self::Keypair> {
        generate_public_vector(matrix_seed, noise_seed, Self::ETA1)
    }
}
