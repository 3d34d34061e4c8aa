//! Blob encryption using ChaCha20-Poly1305.
//!
//! The password forms derive a fresh key per encryption and re-derive it
//! from the embedded salt on decryption. The key forms skip derivation and
//! use a caller-supplied [`PassKey`] directly.

use crate::error::{SaltboxError, SaltboxResult};
use crate::format::{self, EXTRA_LEN, MAGIC, MAGIC_LEN, NONCE_LEN};
use crate::key::{self, PassKey, SALT_LEN};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use rand::RngCore;

/// Encrypts `data` with a caller-supplied key.
///
/// The key's salt is embedded in the header, so the output remains
/// decryptable from the original password alone via [`pass_decrypt`].
/// Output length is `data.len() + EXTRA_LEN`.
pub fn pass_key_encrypt(data: &[u8], pass_key: &PassKey) -> SaltboxResult<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(pass_key.key_bytes().into());

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, data)
        .map_err(|e| SaltboxError::Encryption(e.to_string()))?;

    let mut out = Vec::with_capacity(data.len() + EXTRA_LEN);
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(pass_key.salt().as_bytes());
    out.extend_from_slice(&nonce_bytes);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypts a blob with a caller-supplied key.
///
/// The embedded salt is ignored; the caller's key wins. Truncated input, a
/// missing marker, a wrong key and tampered data all surface as the same
/// [`SaltboxError::Decryption`].
pub fn pass_key_decrypt(data: &[u8], pass_key: &PassKey) -> SaltboxResult<Vec<u8>> {
    if data.len() < EXTRA_LEN {
        return Err(SaltboxError::Decryption("data too short".to_string()));
    }
    if !format::is_encrypted(data) {
        return Err(SaltboxError::Decryption("bad format marker".to_string()));
    }

    let nonce_start = MAGIC_LEN + SALT_LEN;
    let nonce = Nonce::from_slice(&data[nonce_start..nonce_start + NONCE_LEN]);
    let cipher = ChaCha20Poly1305::new(pass_key.key_bytes().into());

    cipher
        .decrypt(nonce, &data[nonce_start + NONCE_LEN..])
        .map_err(|_| {
            SaltboxError::Decryption("wrong password or tampered data".to_string())
        })
}

/// Encrypts `data` under `password`, deriving a fresh key with a random
/// salt. The salt is embedded in the output so [`pass_decrypt`] needs only
/// the password.
pub fn pass_encrypt(data: &[u8], password: &[u8]) -> SaltboxResult<Vec<u8>> {
    let pass_key = key::derive_key_from_password(password)?;
    pass_key_encrypt(data, &pass_key)
}

/// Decrypts a blob produced by [`pass_encrypt`] (or [`pass_key_encrypt`])
/// by re-deriving the key from `password` and the embedded salt.
pub fn pass_decrypt(data: &[u8], password: &[u8]) -> SaltboxResult<Vec<u8>> {
    if data.len() < EXTRA_LEN || !format::is_encrypted(data) {
        return Err(SaltboxError::Decryption("bad format marker".to_string()));
    }
    let salt = format::get_salt(data)
        .map_err(|_| SaltboxError::Decryption("bad format marker".to_string()))?;
    let pass_key = key::derive_key_with_salt(password, &salt)?;
    pass_key_decrypt(data, &pass_key)
}
