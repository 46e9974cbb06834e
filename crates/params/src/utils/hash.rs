//! Constants for the Keccak sponge and its SHAKE instances

/// Width of the Keccak-f[1600] state in bytes
pub const KECCAK_STATE_BYTES: usize = 200;

/// Number of rounds of Keccak-f[1600]
pub const KECCAK_ROUNDS: usize = 24;

/// Rate of SHAKE-128 in bytes (1600 - 2*128 bits)
pub const SHAKE128_RATE: usize = 168;

/// Rate of SHAKE-256 in bytes (1600 - 2*256 bits)
pub const SHAKE256_RATE: usize = 136;

/// Domain-separation suffix for SHAKE, including the first padding bit
pub const SHAKE_DOMAIN_SUFFIX: u8 = 0x1F;
