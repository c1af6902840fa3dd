//! Cryptographic Utilities

use md5::{Digest, Md5};
use rand::{RngCore, rngs::OsRng};

/// Generate a 256-bit secret from the OS RNG
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Compute MD5 digest
///
/// Only for public identifiers such as avatar keys, never for secrets.
pub fn md5(data: &[u8]) -> [u8; 16] {
    let mut hasher = Md5::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// MD5 as lowercase hex
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(md5(data))
}
