//! params.rs - Ring constants for Z_q[X]/(X^N + 1) with q = 3329, N = 256
//!
//! Every constant is derived at compile time from `q` and checked by const
//! assertions, so a typo in one of them fails the build instead of producing
//! wrong arithmetic.

use kybervec_params::pqc::kyber::{KYBER_N, KYBER_Q};

/// Polynomial degree N (number of coefficients)
pub const N: usize = KYBER_N;

/// The modulus q for coefficient arithmetic
pub const Q: i16 = KYBER_Q as i16;

/// `q` widened for double-width products
pub const Q32: i32 = Q as i32;

/// q^-1 mod 2^16, as a signed 16-bit value
pub const QINV: i16 = mont_qinv();

/// Montgomery radix R = 2^16 reduced mod q
pub const MONT: i16 = pow_mod(2, 16) as i16;

/// R^2 mod q; `montgomery_mul(a, MONT_SQ)` maps `a` into the Montgomery domain
pub const MONT_SQ: i16 = pow_mod(2, 32) as i16;

/// Barrett multiplier round(2^26 / q)
pub const BARRETT_V: i32 = ((1 << 26) + Q32 / 2) / Q32;

/// Scaling applied at the end of the inverse NTT: R^2 / 128 mod q.
///
/// One factor R cancels the Montgomery reduction of the final multiply, the
/// other leaves the output in the Montgomery domain ("to-mont"), and 1/128
/// undoes the seven butterfly layers.
pub const INV_NTT_F: i16 = ((pow_mod(2, 32) * pow_mod(128, Q as u32 - 2)) % Q as u32) as i16;

/// Primitive 256-th root of unity mod q
pub const ZETA: u32 = 17;

/// Modular exponentiation in the standard domain (compile-time helper).
pub const fn pow_mod(base: u32, mut exp: u32) -> u32 {
    let q = Q as u64;
    let mut base = base as u64 % q;
    let mut acc: u64 = 1;
    while exp != 0 {
        if (exp & 1) == 1 {
            acc = acc * base % q;
        }
        base = base * base % q;
        exp >>= 1;
    }
    acc as u32
}

/// q^-1 mod 2^16 via Newton iteration on the 2-adic inverse.
const fn mont_qinv() -> i16 {
    let q = Q as u32;
    let mut inv: u32 = 1;
    let mut i = 0;
    while i < 5 {
        inv = inv.wrapping_mul(2u32.wrapping_sub(q.wrapping_mul(inv)));
        i += 1;
    }
    (inv & 0xFFFF) as u16 as i16
}

/// Check if a number is prime (trial division)
pub const fn is_prime(q: u32) -> bool {
    if q < 2 {
        return false;
    }
    if q % 2 == 0 {
        return q == 2;
    }
    let mut i = 3;
    while i * i <= q {
        if q % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Check if N is a power of 2
pub const fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

const _: () = {
    assert!(is_prime(Q as u32));
    assert!(is_power_of_two(N));
    assert!((Q as u32 - 1) % N as u32 == 0);
    assert!((QINV as i32).wrapping_mul(Q32) & 0xFFFF == 1);
    assert!(pow_mod(ZETA, N as u32 / 2) == Q as u32 - 1);
    // every basemul output is < 2q, so a rank-4 accumulation stays below 2^15
    assert!(4 * 2 * Q32 <= i16::MAX as i32);
};
