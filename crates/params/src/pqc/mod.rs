//! Constants for post-quantum schemes

pub mod kyber;
