//! Blob framing constants and header inspection.
//!
//! Every encrypted blob starts with a plaintext format marker followed by
//! the key-derivation salt, so a blob can be classified and its salt
//! recovered without a password.

use crate::error::{SaltboxError, SaltboxResult};
use crate::key::{Salt, SALT_LEN};

/// Size of the format marker in bytes.
pub const MAGIC_LEN: usize = 8;

/// Format marker prepended to every encrypted blob. Never encrypted.
pub const MAGIC: [u8; MAGIC_LEN] = *b"SALTBOX\x01";

/// Size of nonce in bytes (96 bits for ChaCha20-Poly1305).
pub const NONCE_LEN: usize = 12;

/// Size of authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Fixed per-blob overhead: marker, salt, nonce and authentication tag.
///
/// `encrypt` output is always exactly `EXTRA_LEN` bytes longer than its
/// input.
pub const EXTRA_LEN: usize = MAGIC_LEN + SALT_LEN + NONCE_LEN + TAG_LEN;

/// Returns true if `data` carries the encrypted-blob format marker.
///
/// Reads only the marker; never touches key material. Short or arbitrary
/// input yields `false`, never an error.
pub fn is_encrypted(data: &[u8]) -> bool {
    data.len() >= MAGIC_LEN && data[..MAGIC_LEN] == MAGIC
}

/// Extracts the embedded salt from an encrypted blob without decrypting.
pub fn get_salt(data: &[u8]) -> SaltboxResult<Salt> {
    if !is_encrypted(data) || data.len() < MAGIC_LEN + SALT_LEN {
        return Err(SaltboxError::Unsuccessful);
    }
    Salt::from_slice(&data[MAGIC_LEN..MAGIC_LEN + SALT_LEN])
}
