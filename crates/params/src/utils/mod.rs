//! Constants for the symmetric building blocks used by the lattice code

pub mod hash;
