//! Validation utilities for lattice primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that an index addresses one of `len` slots
#[inline(always)]
pub fn index(context: &'static str, index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(Error::Length {
            context,
            expected: len,
            actual: index,
        });
    }
    Ok(())
}

/// Validate a CBD noise width; only the widths used by Kyber are supported
#[inline(always)]
pub fn eta(eta: u8) -> Result<()> {
    parameter(eta == 2 || eta == 3, "eta", "CBD noise width must be 2 or 3")
}

/// Validate a module rank against the supported range
#[inline(always)]
pub fn rank(k: usize) -> Result<()> {
    use kybervec_params::pqc::kyber::{KYBER_K_MAX, KYBER_K_MIN};
    parameter(
        (KYBER_K_MIN..=KYBER_K_MAX).contains(&k),
        "k",
        "module rank must be 2, 3 or 4",
    )
}
