//! File persistence for encrypted blobs.
//!
//! I/O failures surface as `SaltboxError::Io`, never conflated with crypto
//! errors. No cross-process locking; concurrent writers to the same path
//! are the caller's responsibility to avoid.

use crate::cipher::{pass_decrypt, pass_encrypt};
use crate::error::SaltboxResult;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Encrypts `data` under `password` and writes the blob to `path`.
///
/// If encryption fails, no write is attempted.
pub fn encrypt_to_file(path: impl AsRef<Path>, data: &[u8], password: &[u8]) -> SaltboxResult<()> {
    let blob = pass_encrypt(data, password)?;
    fs::write(path.as_ref(), &blob)?;
    debug!(path = %path.as_ref().display(), bytes = blob.len(), "wrote encrypted file");
    Ok(())
}

/// Reads `path` fully and decrypts its contents with `password`.
///
/// A missing or unreadable file yields `SaltboxError::Io`; a readable but
/// malformed file yields `SaltboxError::Decryption`.
pub fn decrypt_from_file(path: impl AsRef<Path>, password: &[u8]) -> SaltboxResult<Vec<u8>> {
    let blob = fs::read(path.as_ref())?;
    debug!(path = %path.as_ref().display(), bytes = blob.len(), "read encrypted file");
    pass_decrypt(&blob, password)
}
