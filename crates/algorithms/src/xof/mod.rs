//! Extendable Output Functions (XOF)
//!
//! SHAKE-128 expands the public matrix seed and SHAKE-256 serves as the PRF
//! for noise. The two helpers below fix the exact byte layout of their inputs.

use kybervec_params::pqc::kyber::KYBER_SYMBYTES;
use zeroize::Zeroize;

use crate::error::Result;

pub mod shake;

// Re-exports
pub use shake::{Shake, ShakeXof128, ShakeXof256};

/// Trait for extendable output functions
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Updates the XOF state with new data
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Finalizes the XOF state for output; idempotent
    fn finalize(&mut self) -> Result<()>;

    /// Squeezes output bytes into the provided buffer
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Resets the XOF state
    fn reset(&mut self);

    /// Returns the security level in bits
    fn security_level() -> usize;

    /// Convenience method to generate output in a single call
    fn generate(data: &[u8], output: &mut [u8]) -> Result<()>
    where
        Self: Sized,
    {
        let mut xof = Self::new();
        xof.update(data)?;
        xof.squeeze(output)
    }
}

/// SHAKE-128 absorbing `seed || x || y`, ready to squeeze.
///
/// Matrix entry (i, j) is read from `shake128_absorb(seed, j, i)`; the
/// transposed matrix swaps the two indices.
pub fn shake128_absorb(seed: &[u8; KYBER_SYMBYTES], x: u8, y: u8) -> ShakeXof128 {
    let mut input = [0u8; KYBER_SYMBYTES + 2];
    input[..KYBER_SYMBYTES].copy_from_slice(seed);
    input[KYBER_SYMBYTES] = x;
    input[KYBER_SYMBYTES + 1] = y;

    ShakeXof128::from_input(&input)
}

/// PRF(key, nonce) = SHAKE-256(key || nonce), filling `out`.
pub fn shake256_prf(key: &[u8; KYBER_SYMBYTES], nonce: u8, out: &mut [u8]) {
    let mut input = [0u8; KYBER_SYMBYTES + 1];
    input[..KYBER_SYMBYTES].copy_from_slice(key);
    input[KYBER_SYMBYTES] = nonce;

    ShakeXof256::from_input(&input).read(out);
    input.zeroize();
}
