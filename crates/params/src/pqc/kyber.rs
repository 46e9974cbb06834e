//! Constants for the Kyber module-lattice scheme

/// Kyber polynomial degree
pub const KYBER_N: usize = 256;

/// Kyber modulus
pub const KYBER_Q: u16 = 3329;

/// Size in bytes of the matrix seed, the noise seed and other symmetric values
pub const KYBER_SYMBYTES: usize = 32;

/// Smallest supported module rank
pub const KYBER_K_MIN: usize = 2;

/// Largest supported module rank
pub const KYBER_K_MAX: usize = 4;

/// Parameters of one Kyber security level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KyberParamSet {
    /// Algorithm name
    pub name: &'static str,

    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Number of polynomials per vector (module rank)
    pub k: usize,

    /// Noise parameter for the secret and error vectors of key generation
    pub eta1: u8,

    /// Noise parameter for the encryption error terms
    pub eta2: u8,
}

/// Kyber-512 parameters
pub const KYBER512: KyberParamSet = KyberParamSet {
    name: "Kyber-512",
    n: KYBER_N,
    q: KYBER_Q,
    k: 2,
    eta1: 3,
    eta2: 2,
};

/// Kyber-768 parameters
pub const KYBER768: KyberParamSet = KyberParamSet {
    name: "Kyber-768",
    n: KYBER_N,
    q: KYBER_Q,
    k: 3,
    eta1: 2,
    eta2: 2,
};

/// Kyber-1024 parameters
pub const KYBER1024: KyberParamSet = KyberParamSet {
    name: "Kyber-1024",
    n: KYBER_N,
    q: KYBER_Q,
    k: 4,
    eta1: 2,
    eta2: 2,
};

/// All supported parameter sets, ordered by security level
pub const ALL: [KyberParamSet; 3] = [KYBER512, KYBER768, KYBER1024];
