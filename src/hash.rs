//! Content hashing and namespace-derived identifiers

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// SHA-256 over the canonical bytes of the input, as uppercase hex.
///
/// Byte slices hash as-is; text contributes its UTF-8 encoding. Callers with
/// non-textual values format them first.
pub fn content_hash(input: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_ref());
    let digest: [u8; 32] = hasher.finalize().into();

    digest.iter().map(|byte| format!("{:02X}", byte)).collect()
}

/// Name-based identifier: UUIDv3 of the input over the URL namespace,
/// as 32 uppercase hex characters.
///
/// Equal inputs always map to the same identifier.
pub fn pseudo_id(input: &str) -> String {
    Uuid::new_v3(&Uuid::NAMESPACE_URL, input.as_bytes())
        .simple()
        .to_string()
        .to_uppercase()
}
