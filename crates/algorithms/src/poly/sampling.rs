//! sampling.rs - Deterministic samplers for matrix and noise polynomials
//!
//! Both samplers are driven purely by seeds: uniform polynomials by rejection
//! from a SHAKE-128 stream, noise polynomials by the centred binomial
//! distribution over a SHAKE-256 PRF output.

use kybervec_params::pqc::kyber::KYBER_SYMBYTES;
use kybervec_params::utils::hash::SHAKE128_RATE;
use tracing::trace;
use zeroize::Zeroize;

use super::modular::caddq;
use super::params::{N, Q};
use super::polynomial::{Coefficient, Ntt, Polynomial};
use crate::error::{validate, Error, Result};
use crate::xof::{shake128_absorb, shake256_prf};

/// SHAKE-128 blocks squeezed before the first rejection pass
pub const INITIAL_XOF_BLOCKS: usize = 3;

/// Hard cap on SHAKE-128 blocks read for one uniform polynomial.
///
/// Three blocks already yield 256 accepted values with overwhelming
/// probability; reaching the cap means the stream is not behaving like SHAKE.
pub const MAX_XOF_BLOCKS: usize = 16;

/// Largest supported noise width
const ETA_MAX: usize = 3;

/// Trait for sampling polynomials uniformly at random from a public seed
pub trait UniformSampler {
    /// Samples coefficients uniform in [0, q) from SHAKE-128(seed || x || y).
    ///
    /// The result is interpreted directly in the NTT domain.
    fn sample_uniform(seed: &[u8; KYBER_SYMBYTES], x: u8, y: u8) -> Result<Polynomial<Ntt>>;
}

/// Trait for sampling polynomials from a Centered Binomial Distribution (CBD)
pub trait CbdSampler {
    /// Samples CBD(eta) coefficients from PRF(seed, nonce)
    fn sample_cbd(
        seed: &[u8; KYBER_SYMBYTES],
        nonce: u8,
        eta: u8,
    ) -> Result<Polynomial<Coefficient>>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

impl UniformSampler for DefaultSamplers {
    fn sample_uniform(seed: &[u8; KYBER_SYMBYTES], x: u8, y: u8) -> Result<Polynomial<Ntt>> {
        let mut xof = shake128_absorb(seed, x, y);
        uniform_from_blocks(|block| xof.squeeze_blocks(block))
    }
}

impl CbdSampler for DefaultSamplers {
    fn sample_cbd(
        seed: &[u8; KYBER_SYMBYTES],
        nonce: u8,
        eta: u8,
    ) -> Result<Polynomial<Coefficient>> {
        validate::eta(eta)?;
        let mut buf = [0u8; ETA_MAX * N / 4];
        let len = eta as usize * N / 4;
        shake256_prf(seed, nonce, &mut buf[..len]);
        let poly = cbd_from_bytes(&buf[..len], eta);
        buf.zeroize();
        poly
    }
}

/// Rejection-samples 12-bit candidates from `buf` into `out`.
///
/// Every 3 bytes yield two candidates; values below q are accepted in order.
/// Returns how many slots of `out` were filled.
pub fn reject_uniform(out: &mut [i16], buf: &[u8]) -> usize {
    let mut ctr = 0;
    for chunk in buf.chunks_exact(3) {
        if ctr == out.len() {
            break;
        }
        let (b0, b1, b2) = (chunk[0] as u16, chunk[1] as u16, chunk[2] as u16);
        let v0 = (b0 | (b1 << 8)) & 0xFFF;
        let v1 = (b1 >> 4) | (b2 << 4);

        if v0 < Q as u16 {
            out[ctr] = v0 as i16;
            ctr += 1;
        }
        if v1 < Q as u16 && ctr < out.len() {
            out[ctr] = v1 as i16;
            ctr += 1;
        }
    }
    ctr
}

/// Fills a polynomial from a block source, enforcing [`MAX_XOF_BLOCKS`].
fn uniform_from_blocks<F>(mut squeeze: F) -> Result<Polynomial<Ntt>>
where
    F: FnMut(&mut [u8]) -> Result<()>,
{
    let mut poly = Polynomial::<Ntt>::zero();
    let mut buf = [0u8; INITIAL_XOF_BLOCKS * SHAKE128_RATE];

    squeeze(&mut buf)?;
    let mut ctr = reject_uniform(&mut poly.coeffs, &buf);
    let mut blocks = INITIAL_XOF_BLOCKS;

    while ctr < N {
        if blocks == MAX_XOF_BLOCKS {
            return Err(Error::processing(
                "uniform sampling",
                "rejection sampler exhausted its XOF block budget",
            ));
        }
        squeeze(&mut buf[..SHAKE128_RATE])?;
        blocks += 1;
        ctr += reject_uniform(&mut poly.coeffs[ctr..], &buf[..SHAKE128_RATE]);
        trace!(blocks, accepted = ctr, "uniform sampler squeezed an extra block");
    }

    Ok(poly)
}

/// Centred binomial sampling from `eta·N/4` uniform bytes.
///
/// Each coefficient is (sum of eta bits) − (sum of the next eta bits), mapped
/// into [0, q).
pub fn cbd_from_bytes(buf: &[u8], eta: u8) -> Result<Polynomial<Coefficient>> {
    validate::eta(eta)?;
    validate::length("CBD input", buf.len(), eta as usize * N / 4)?;

    let mut poly = Polynomial::<Coefficient>::zero();
    if eta == 2 {
        cbd2(&mut poly.coeffs, buf);
    } else {
        cbd3(&mut poly.coeffs, buf);
    }
    Ok(poly)
}

fn cbd2(r: &mut [i16; N], buf: &[u8]) {
    for (coeffs, chunk) in r.chunks_exact_mut(8).zip(buf.chunks_exact(4)) {
        let t = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);
        for (j, c) in coeffs.iter_mut().enumerate() {
            let a = ((d >> (4 * j)) & 0x3) as i16;
            let b = ((d >> (4 * j + 2)) & 0x3) as i16;
            *c = caddq(a - b);
        }
    }
}

fn cbd3(r: &mut [i16; N], buf: &[u8]) {
    for (coeffs, chunk) in r.chunks_exact_mut(4).zip(buf.chunks_exact(3)) {
        let t = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], 0]);
        let d = (t & 0x0024_9249) + ((t >> 1) & 0x0024_9249) + ((t >> 2) & 0x0024_9249);
        for (j, c) in coeffs.iter_mut().enumerate() {
            let a = ((d >> (6 * j)) & 0x7) as i16;
            let b = ((d >> (6 * j + 3)) & 0x7) as i16;
            *c = caddq(a - b);
        }
    }
}
