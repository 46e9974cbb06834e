//! Loads key-generation golden fixtures from JSON files.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// ----------------------------------------------------------------
/// Get the path to the fixture directory
/// ----------------------------------------------------------------
fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// A captured run of t = A*s + e
#[derive(Debug, Clone, Deserialize)]
pub struct KeygenFixture {
    /// Free-form note on how the fixture was produced
    pub description: String,
    /// Module rank
    pub k: usize,
    /// CBD noise width used for s and e
    pub eta: u8,
    /// Hex-encoded 32-byte matrix seed
    pub matrix_seed: String,
    /// Hex-encoded 32-byte noise seed
    pub noise_seed: String,
    /// Per-entry checksums of s
    pub s_checksums: Vec<i16>,
    /// Per-entry checksums of e
    pub e_checksums: Vec<i16>,
    /// Per-entry checksums of A*s after the inverse transform
    pub as_checksums: Vec<i16>,
    /// Per-entry checksums of t
    pub t_checksums: Vec<i16>,
    /// Every coefficient of t, one row per vector entry
    pub t: Vec<Vec<i16>>,
}

impl KeygenFixture {
    /// Decoded matrix seed
    pub fn matrix_seed(&self) -> Result<[u8; 32], String> {
        decode_seed(&self.matrix_seed)
    }

    /// Decoded noise seed
    pub fn noise_seed(&self) -> Result<[u8; 32], String> {
        decode_seed(&self.noise_seed)
    }
}

fn decode_seed(text: &str) -> Result<[u8; 32], String> {
    let mut seed = [0u8; 32];
    hex::decode_to_slice(text, &mut seed)
        .map_err(|e| format!("Invalid seed {:?}: {}", text, e))?;
    Ok(seed)
}

/// ----------------------------------------------------------------
/// Load a fixture by file name (without directory)
/// ----------------------------------------------------------------
pub fn load_keygen_fixture(name: &str) -> Result<KeygenFixture, String> {
    let path = fixture_dir().join(name);
    let json = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let fixture: KeygenFixture =
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse JSON: {}", e))?;

    if fixture.t.len() != fixture.k {
        return Err(format!(
            "{}: expected {} rows of t, found {}",
            name,
            fixture.k,
            fixture.t.len()
        ));
    }
    Ok(fixture)
}
