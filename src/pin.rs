use sha2::{Digest, Sha256};

/// Digest a PIN for storage or comparison. Deterministic, one-way, no
/// salt; the plaintext never leaves this function.
pub fn digest(pin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pin.as_bytes());
    format!("{:x}", hasher.finalize())
}
