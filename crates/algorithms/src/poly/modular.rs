//! modular.rs - Fixed-modulus arithmetic over Z_q, q = 3329
//!
//! Coefficients are stored as `i16`; products are formed in `i32` and brought
//! back with Montgomery reduction (R = 2^16) or Barrett reduction. All routines
//! are branch-free.
//!
//! ## Montgomery Form Conversions:
//! - Standard → Montgomery: `montgomery_mul(a, MONT_SQ)` = a·R
//! - Montgomery → Standard: `montgomery_reduce(a_R)` = a
//!
//! Input ranges are preconditions. They are checked with `debug_assert!` and
//! unchecked in release builds.

use super::params::{BARRETT_V, MONT_SQ, Q, Q32, QINV};

/// Largest magnitude accepted by [`montgomery_reduce`] (exclusive above, inclusive below).
pub const MONTGOMERY_BOUND: i32 = Q32 << 15;

/// Conditional addition of q: maps (-q, q) onto [0, q).
#[inline(always)]
pub const fn caddq(a: i16) -> i16 {
    a + ((a >> 15) & Q)
}

/// Modular addition of two canonical values
#[inline(always)]
pub const fn add(a: i16, b: i16) -> i16 {
    debug_assert!(a >= 0 && a < Q && b >= 0 && b < Q);
    // a + b - q lies in [-q, q - 1]
    caddq(a + b - Q)
}

/// Modular subtraction of two canonical values
#[inline(always)]
pub const fn sub(a: i16, b: i16) -> i16 {
    debug_assert!(a >= 0 && a < Q && b >= 0 && b < Q);
    caddq(a - b)
}

/// Barrett reduction: any `i16` to its canonical representative in [0, q).
#[inline(always)]
pub const fn barrett_reduce(a: i16) -> i16 {
    let t = (BARRETT_V * a as i32 + (1 << 25)) >> 26;
    // centred result in [-(q-1)/2, (q-1)/2]
    let r = (a as i32 - t * Q32) as i16;
    caddq(r)
}

/// Montgomery reduction: computes a·R⁻¹ mod q in [0, q).
///
/// Requires `-q·2^15 <= a < q·2^15`, which covers the product of any `i16`
/// with a value of magnitude at most q.
#[inline(always)]
pub const fn montgomery_reduce(a: i32) -> i16 {
    debug_assert!(a >= -MONTGOMERY_BOUND && a < MONTGOMERY_BOUND);
    let t = (a as i16).wrapping_mul(QINV);
    // (a - t·q) is divisible by 2^16; the quotient lies in (-q, q)
    let r = ((a - t as i32 * Q32) >> 16) as i16;
    caddq(r)
}

/// Montgomery multiplication: computes a·b·R⁻¹ mod q in [0, q).
#[inline(always)]
pub const fn montgomery_mul(a: i16, b: i16) -> i16 {
    montgomery_reduce(a as i32 * b as i32)
}

/// Standard → Montgomery: a·R mod q
#[inline(always)]
pub const fn to_montgomery(a: i16) -> i16 {
    montgomery_mul(a, MONT_SQ)
}

/// Montgomery → standard: a·R⁻¹ mod q
#[inline(always)]
pub const fn from_montgomery(a: i16) -> i16 {
    montgomery_reduce(a as i32)
}
