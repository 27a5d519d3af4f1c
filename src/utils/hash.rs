//! Content-addressed ephemeral identifiers
//!
//! Keys dialogs and lists by value identity when no stable id exists.
//! The ids are only meaningful within one session and must never be
//! persisted.

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UniqueIdError {
    #[error("failed to serialize value for hashing: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// SHA-256 of the JSON encoding of a value, as lowercase hex.
///
/// Equal values always map to the same id within a session.
pub fn generate_temp_unique_id<T: Serialize>(value: &T) -> Result<String, UniqueIdError> {
    let encoded = serde_json::to_vec(value)?;
    let digest = Sha256::digest(&encoded);
    Ok(hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_values_hash_equal() {
        let a = generate_temp_unique_id(&("キャラ", 3)).unwrap();
        let b = generate_temp_unique_id(&("キャラ", 3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_values_hash_differently() {
        let a = generate_temp_unique_id(&("キャラ", 3)).unwrap();
        let b = generate_temp_unique_id(&("キャラ", 4)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_is_lowercase_hex_sha256() {
        let id = generate_temp_unique_id(&"x").unwrap();
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
