//! Content fingerprinting (MD5 over decoded payload bytes).
//!
//! The digest identifies content (e.g. for save filenames and dedup), it is
//! not a security boundary.

use md5::{Digest, Md5};

/// Compute MD5 of `bytes` and return the digest as lowercase hex.
pub fn md5_hex(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
