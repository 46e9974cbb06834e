//! SHAKE extendable output functions
//!
//! A byte-oriented Keccak-f[1600] sponge (FIPS PUB 202) instantiated at the
//! two SHAKE rates. Matrix expansion reads SHAKE-128 a block at a time and
//! noise sampling reads a single SHAKE-256 output, so the sponge keeps no
//! buffer of its own: bytes are XORed into and read out of the lanes directly.

use kybervec_params::utils::hash::{
    KECCAK_ROUNDS, KECCAK_STATE_BYTES, SHAKE128_RATE, SHAKE256_RATE, SHAKE_DOMAIN_SUFFIX,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::ExtendableOutputFunction;
use crate::error::{Error, Result};

const KECCAK_LANES: usize = KECCAK_STATE_BYTES / 8;

// Round constants for Keccak
const RC: [u64; KECCAK_ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
    0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
    0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

// Rotation offsets, in lane-walk order
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14,
    27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

// Destination lane of each step of the walk
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4,
    15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Performs a full Keccak-f[1600] permutation on the state
fn keccak_f1600(a: &mut [u64; KECCAK_LANES]) {
    for &rc in RC.iter() {
        // Theta
        let mut c = [0u64; 5];
        for (x, cx) in c.iter_mut().enumerate() {
            *cx = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                a[x + 5 * y] ^= d;
            }
        }

        // Rho and Pi
        let mut last = a[1];
        for (&j, &rot) in PI.iter().zip(RHO.iter()) {
            let tmp = a[j];
            a[j] = last.rotate_left(rot);
            last = tmp;
        }

        // Chi
        for y in 0..5 {
            let mut row = [0u64; 5];
            row.copy_from_slice(&a[5 * y..5 * y + 5]);
            for x in 0..5 {
                a[5 * y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // Iota
        a[0] ^= rc;
    }
}

/// SHAKE sponge with a rate of `RATE` bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Shake<const RATE: usize> {
    state: [u64; KECCAK_LANES],
    pos: usize,
    squeezing: bool,
}

/// SHAKE-128 (rate 168 bytes)
pub type ShakeXof128 = Shake<SHAKE128_RATE>;

/// SHAKE-256 (rate 136 bytes)
pub type ShakeXof256 = Shake<SHAKE256_RATE>;

impl<const RATE: usize> Shake<RATE> {
    /// Bytes produced by one permutation while squeezing
    pub const BLOCK_BYTES: usize = RATE;

    const fn init() -> Self {
        Self {
            state: [0; KECCAK_LANES],
            pos: 0,
            squeezing: false,
        }
    }

    #[inline(always)]
    fn xor_byte(&mut self, pos: usize, byte: u8) {
        self.state[pos / 8] ^= (byte as u64) << (8 * (pos % 8));
    }

    #[inline(always)]
    fn read_byte(&self, pos: usize) -> u8 {
        (self.state[pos / 8] >> (8 * (pos % 8))) as u8
    }

    fn absorb_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.xor_byte(self.pos, byte);
            self.pos += 1;
            if self.pos == RATE {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
        }
    }

    fn pad_and_switch(&mut self) {
        self.xor_byte(self.pos, SHAKE_DOMAIN_SUFFIX);
        self.xor_byte(RATE - 1, 0x80);
        keccak_f1600(&mut self.state);
        self.pos = 0;
        self.squeezing = true;
    }

    /// Creates a sponge that has absorbed `data` and is ready to squeeze
    pub fn from_input(data: &[u8]) -> Self {
        let mut xof = Self::init();
        xof.absorb_bytes(data);
        xof.pad_and_switch();
        xof
    }

    /// Reads output bytes, finalizing first if still absorbing
    pub fn read(&mut self, out: &mut [u8]) {
        if !self.squeezing {
            self.pad_and_switch();
        }
        for byte in out.iter_mut() {
            if self.pos == RATE {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
            *byte = self.read_byte(self.pos);
            self.pos += 1;
        }
    }

    /// Squeezes whole rate-sized blocks; `out.len()` must be a multiple of the rate
    pub fn squeeze_blocks(&mut self, out: &mut [u8]) -> Result<()> {
        if out.len() % RATE != 0 {
            return Err(Error::Length {
                context: "SHAKE block output",
                expected: (out.len() / RATE + 1) * RATE,
                actual: out.len(),
            });
        }
        self.read(out);
        Ok(())
    }
}

impl<const RATE: usize> ExtendableOutputFunction for Shake<RATE> {
    fn new() -> Self {
        Self::init()
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.squeezing {
            return Err(Error::processing(
                "XOF",
                "Cannot update after squeezing has begun",
            ));
        }
        self.absorb_bytes(data);
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        if !self.squeezing {
            self.pad_and_switch();
        }
        Ok(())
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        self.read(output);
        Ok(())
    }

    fn reset(&mut self) {
        self.zeroize();
    }

    fn security_level() -> usize {
        // capacity / 2, in bits
        (KECCAK_STATE_BYTES - RATE) * 4
    }
}
