// One-shot SHA-256 helpers

use crate::digest::Digest;
use crate::hasher::Sha256;

/// Computes the SHA-256 digest of `bytes` in a single call.
pub fn sha256(bytes: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.process(bytes);
    hasher.digest()
}

/// Computes the SHA-256 hash of the input bytes and returns it as a lowercase hex string.
pub fn sha256_hex(bytes: &[u8]) -> String {
    sha256(bytes).to_hex()
}
