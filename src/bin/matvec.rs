//! matvec: step through the Kyber public-key core and log every stage
//!
//! Expands A from a matrix seed, samples s and e from a noise seed, computes
//! t = A*s + e one stage at a time and cross-checks the result against the
//! library's one-call key generation.

use clap::{ArgAction, Parser, ValueEnum};
use eyre::{ensure, eyre, Result, WrapErr};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use kybervec::algorithms::poly::params::N;
use kybervec::algorithms::validate;
use kybervec::params::pqc::kyber::{KyberParamSet, KYBER1024, KYBER512, KYBER768, KYBER_SYMBYTES};
use kybervec::prelude::*;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SecurityLevel {
    /// Kyber-512 (k = 2)
    #[value(name = "512")]
    L512,
    /// Kyber-768 (k = 3)
    #[value(name = "768")]
    L768,
    /// Kyber-1024 (k = 4)
    #[value(name = "1024")]
    L1024,
}

impl SecurityLevel {
    fn params(self) -> KyberParamSet {
        match self {
            SecurityLevel::L512 => KYBER512,
            SecurityLevel::L768 => KYBER768,
            SecurityLevel::L1024 => KYBER1024,
        }
    }
}

#[derive(Parser)]
#[command(name = "matvec")]
#[command(about = "Run t = A*s + e and log intermediate values")]
#[command(version)]
struct Args {
    /// Security level
    #[arg(long, value_enum, default_value = "512")]
    level: SecurityLevel,

    /// Matrix seed as 64 hex characters (random if omitted)
    #[arg(long)]
    seed: Option<String>,

    /// Noise seed as 64 hex characters (random if omitted)
    #[arg(long)]
    noise_seed: Option<String>,

    /// Number of leading coefficients to log per polynomial
    #[arg(long, default_value_t = 8)]
    coeffs: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_seed(name: &str, value: Option<&str>) -> Result<[u8; KYBER_SYMBYTES]> {
    let mut seed = [0u8; KYBER_SYMBYTES];
    match value {
        Some(text) => {
            hex::decode_to_slice(text, &mut seed)
                .wrap_err_with(|| format!("--{} must be {} hex-encoded bytes", name, KYBER_SYMBYTES))?;
        }
        None => OsRng.fill_bytes(&mut seed),
    }
    Ok(seed)
}

fn log_vec<D: Domain, const K: usize>(label: &str, v: &PolyVec<D, K>, coeffs: usize) {
    for (i, p) in v.polys().iter().enumerate() {
        info!(
            "{}[{}] = {:?} checksum={}",
            label,
            i,
            &p.coeffs()[..coeffs],
            p.checksum()
        );
    }
}

fn run<const K: usize>(
    rho: &[u8; KYBER_SYMBYTES],
    sigma: &[u8; KYBER_SYMBYTES],
    eta: u8,
    coeffs: usize,
) -> Result<()> {
    let a = Matrix::<K>::generate(rho, false)?;
    debug!("expanded {}x{} matrix", K, K);

    let s = PolyVec::<Coefficient, K>::sample_cbd(sigma, 0, eta)?;
    let e = PolyVec::<Coefficient, K>::sample_cbd(sigma, K as u8, eta)?;
    log_vec("s", &s, coeffs);
    log_vec("e", &e, coeffs);

    let s_hat = s.ntt();
    let a_s = a.mul_vec(&s_hat).inverse_ntt();
    log_vec("A*s", &a_s, coeffs);

    let mut t = a_s.add(&e);
    t.reduce();
    log_vec("t", &t, coeffs);

    let kp = generate_public_vector::<K>(rho, sigma, eta)?;
    ensure!(
        kp.t() == &t,
        "stepwise result disagrees with generate_public_vector"
    );
    info!("stepwise pipeline matches generate_public_vector");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let max_level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    validate::max_length("--coeffs", args.coeffs, N)?;

    let rho = parse_seed("seed", args.seed.as_deref())?;
    let sigma = parse_seed("noise-seed", args.noise_seed.as_deref())?;
    let params = args.level.params();

    info!("{} (k = {}, eta1 = {})", params.name, params.k, params.eta1);
    info!("matrix seed: {}", hex::encode(rho));

    validate::rank(params.k)?;
    match params.k {
        2 => run::<2>(&rho, &sigma, params.eta1, args.coeffs),
        3 => run::<3>(&rho, &sigma, params.eta1, args.coeffs),
        4 => run::<4>(&rho, &sigma, params.eta1, args.coeffs),
        k => Err(eyre!("unsupported module rank {}", k)),
    }
}
