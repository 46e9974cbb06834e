//! ntt.rs - Number Theoretic Transform over Z_3329[X]/(X^256 + 1)
//!
//! Seven Cooley-Tukey layers split the ring into 128 quadratic factors
//! Z_q[X]/(X^2 - ζ^(2·br7(i)+1)). Multiplication then happens pairwise in
//! [`basemul`]. Twiddles are Montgomery-scaled, so:
//!
//! - `forward_ntt` maps standard coefficients to standard NTT values;
//! - `basemul` of two NTT values carries a factor R⁻¹;
//! - `inverse_ntt` multiplies by R on the way out ("to-mont").
//!
//! The two factors cancel: `inverse_ntt(basemul(ntt(a), ntt(b)))` is exactly
//! a·b, while a bare round trip `inverse_ntt(ntt(a))` yields a·R.

use super::modular::{barrett_reduce, montgomery_mul};
use super::params::{pow_mod, INV_NTT_F, MONT, N, Q, Q32, ZETA};
use super::polynomial::{Coefficient, Ntt, Polynomial};

/// Magnitude bound on forward-NTT output (exclusive)
pub const NTT_OUTPUT_BOUND: i32 = 8 * Q32;

/// Magnitude bound on inverse-NTT input (exclusive)
pub const INV_NTT_INPUT_BOUND: i32 = 4 * Q32;

/// Reverse the low 7 bits of `x`
const fn bitrev7(x: u32) -> u32 {
    let mut r = 0;
    let mut i = 0;
    while i < 7 {
        r |= ((x >> i) & 1) << (6 - i);
        i += 1;
    }
    r
}

/// Centre a canonical residue into [-(q-1)/2, (q-1)/2]
const fn centre(v: u32) -> i16 {
    let v = v as i16;
    if v > Q / 2 {
        v - Q
    } else {
        v
    }
}

/// Twiddle factors: `ZETAS[i] = ζ^br7(i) · R mod q`, centred.
pub const ZETAS: [i16; 128] = {
    let mut table = [0i16; 128];
    let mut i = 0;
    while i < 128 {
        let z = pow_mod(ZETA, bitrev7(i as u32)) * MONT as u32 % Q as u32;
        table[i] = centre(z);
        i += 1;
    }
    table
};

/// In-place forward NTT.
///
/// Input coefficients must satisfy |c| < q; output values satisfy |x| < 8q
/// and are left unreduced, in bit-reversed order.
pub fn forward_ntt(r: &mut [i16; N]) {
    debug_assert!(
        r.iter().all(|&c| (c as i32).abs() < Q32),
        "forward_ntt input out of range"
    );

    let mut k = 1;
    let mut len = N / 2;
    while len >= 2 {
        for block in r.chunks_exact_mut(2 * len) {
            let zeta = ZETAS[k];
            k += 1;
            let (lo, hi) = block.split_at_mut(len);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let t = montgomery_mul(zeta, *b);
                *b = *a - t;
                *a += t;
            }
        }
        len >>= 1;
    }
}

/// In-place inverse NTT, multiplying the result by R.
///
/// Input values must satisfy |x| < 4q. Output coefficients are canonical.
pub fn inverse_ntt(r: &mut [i16; N]) {
    debug_assert!(
        r.iter().all(|&c| (c as i32).abs() < INV_NTT_INPUT_BOUND),
        "inverse_ntt input out of range"
    );

    let mut k = 127;
    let mut len = 2;
    while len <= N / 2 {
        for block in r.chunks_exact_mut(2 * len) {
            let zeta = ZETAS[k];
            k -= 1;
            let (lo, hi) = block.split_at_mut(len);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let t = *a;
                *a = barrett_reduce(t + *b);
                *b = montgomery_mul(zeta, *b - t);
            }
        }
        len <<= 1;
    }

    for c in r.iter_mut() {
        *c = montgomery_mul(*c, INV_NTT_F);
    }
}

/// Product of two degree-1 residues modulo X^2 - ζ.
///
/// Each output lies in [0, 2q) and carries a factor R⁻¹.
#[inline(always)]
pub const fn basemul(a: [i16; 2], b: [i16; 2], zeta: i16) -> [i16; 2] {
    let r0 = montgomery_mul(montgomery_mul(a[1], b[1]), zeta) + montgomery_mul(a[0], b[0]);
    let r1 = montgomery_mul(a[0], b[1]) + montgomery_mul(a[1], b[0]);
    [r0, r1]
}

/// Pointwise product of two NTT-domain coefficient arrays
pub fn basemul_montgomery(a: &[i16; N], b: &[i16; N]) -> [i16; N] {
    let mut r = [0i16; N];
    for (i, ((rc, ac), bc)) in r
        .chunks_exact_mut(4)
        .zip(a.chunks_exact(4))
        .zip(b.chunks_exact(4))
        .enumerate()
    {
        let zeta = ZETAS[64 + i];
        let lo = basemul([ac[0], ac[1]], [bc[0], bc[1]], zeta);
        let hi = basemul([ac[2], ac[3]], [bc[2], bc[3]], -zeta);
        rc.copy_from_slice(&[lo[0], lo[1], hi[0], hi[1]]);
    }
    r
}

/// Transform backend used by [`Polynomial`]
pub trait NttOperator {
    /// Forward transform; see [`forward_ntt`]
    fn forward(coeffs: &mut [i16; N]);

    /// Inverse transform; see [`inverse_ntt`]
    fn inverse(coeffs: &mut [i16; N]);

    /// Pointwise product in the transformed domain
    fn pointwise(a: &[i16; N], b: &[i16; N]) -> [i16; N];
}

/// The 7-layer Kyber NTT with Montgomery twiddles
pub struct KyberNtt;

impl NttOperator for KyberNtt {
    fn forward(coeffs: &mut [i16; N]) {
        forward_ntt(coeffs)
    }

    fn inverse(coeffs: &mut [i16; N]) {
        inverse_ntt(coeffs)
    }

    fn pointwise(a: &[i16; N], b: &[i16; N]) -> [i16; N] {
        basemul_montgomery(a, b)
    }
}

impl Polynomial<Coefficient> {
    /// Forward NTT followed by reduction to canonical form
    pub fn ntt(self) -> Polynomial<Ntt> {
        let mut p = self.retag::<Ntt>();
        KyberNtt::forward(&mut p.coeffs);
        p.reduce();
        p
    }
}

impl Polynomial<Ntt> {
    /// Inverse NTT; the result carries an extra factor R
    pub fn inverse_ntt(self) -> Polynomial<Coefficient> {
        let mut p = self.retag::<Coefficient>();
        KyberNtt::inverse(&mut p.coeffs);
        p
    }

    /// Pointwise product carrying a factor R⁻¹.
    ///
    /// Coefficients of the result lie in [0, 2q); accumulate up to four of
    /// them before calling [`Polynomial::reduce`].
    pub fn basemul_montgomery(&self, other: &Self) -> Self {
        Self::from_raw(KyberNtt::pointwise(&self.coeffs, &other.coeffs))
    }

    /// Accumulates `a ∘ b` into `self` without reduction
    pub fn basemul_acc(&mut self, a: &Self, b: &Self) {
        let prod = KyberNtt::pointwise(&a.coeffs, &b.coeffs);
        for (r, p) in self.coeffs.iter_mut().zip(prod) {
            *r += p;
        }
    }
}
