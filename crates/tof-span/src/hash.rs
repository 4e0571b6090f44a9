//! Content hashes used to pin reports across runs.

use serde::Serialize;
use sha2::{Digest, Sha256};
use tof_core::{to_canonical_json_bytes, TofError};

/// Computes a stable hexadecimal hash for the provided serialisable payload.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, TofError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}

/// Rounds a floating point value to nine decimals before hashing.
pub fn round_f64(value: f64) -> f64 {
    let scaled = (value * 1e9).round();
    scaled / 1e9
}
