//! Testing utilities for the kybervec workspace
pub mod fixtures;
pub mod stats;
