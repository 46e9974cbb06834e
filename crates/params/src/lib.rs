//! Constant values for kybervec
//!
//! Scheme-level constants shared by the arithmetic and key-generation crates.
//! Ring arithmetic constants derived from these (Montgomery and Barrett factors,
//! twiddle tables) live next to the code that uses them.

#![no_std]

pub mod pqc;
pub mod utils;
