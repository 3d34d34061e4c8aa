//! Key derivation and management.
//!
//! Uses Argon2id for deriving encryption keys from passwords. The Argon2
//! parameters are protocol constants: a blob must be decryptable from the
//! password alone, so they cannot vary per call.

use crate::error::{SaltboxError, SaltboxResult};
use argon2::{Argon2, Params, Version};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of encryption keys in bytes (256 bits for ChaCha20).
pub const KEY_LEN: usize = 32;

/// Size of salt in bytes.
pub const SALT_LEN: usize = 16;

// Argon2id cost parameters (OWASP recommendations, 2023). Changing these
// breaks decryption of existing blobs.
const MEMORY_COST_KIB: u32 = 19 * 1024;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

/// Salt for key derivation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Salt {
    bytes: [u8; SALT_LEN],
}

impl Salt {
    /// Generates a random salt.
    pub fn random() -> Self {
        let mut bytes = [0u8; SALT_LEN];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Creates a salt from raw bytes.
    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self { bytes }
    }

    /// Creates a salt from a slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> SaltboxResult<Self> {
        let bytes: [u8; SALT_LEN] =
            bytes
                .try_into()
                .map_err(|_| SaltboxError::InvalidSaltLength {
                    expected: SALT_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self { bytes })
    }

    /// Returns the salt bytes.
    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.bytes
    }
}

/// A derived encryption key bundled with the salt that produced it.
///
/// Immutable once constructed; the key half is zeroized on drop. Deriving
/// once and reusing the `PassKey` avoids repeating the expensive Argon2
/// step when encrypting or decrypting many blobs.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PassKey {
    #[zeroize(skip)]
    salt: Salt,
    key: [u8; KEY_LEN],
}

impl PassKey {
    /// Returns the salt this key was derived with.
    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    /// Returns the raw key bytes.
    pub fn key_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for PassKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PassKey")
            .field("salt", &self.salt)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

fn argon2() -> SaltboxResult<Argon2<'static>> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, Some(KEY_LEN))
        .map_err(|e| SaltboxError::KeyDerivation(e.to_string()))?;
    Ok(Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params))
}

/// Derives a key from a password and an explicit salt using Argon2id.
///
/// Deterministic: the same `(password, salt)` pair always yields the same
/// key, which is how decryption re-derives the key from the salt embedded
/// in a blob.
pub fn derive_key_with_salt(password: &[u8], salt: &Salt) -> SaltboxResult<PassKey> {
    let mut key = [0u8; KEY_LEN];
    argon2()?
        .hash_password_into(password, salt.as_bytes(), &mut key)
        .map_err(|e| SaltboxError::KeyDerivation(e.to_string()))?;
    Ok(PassKey {
        salt: salt.clone(),
        key,
    })
}

/// Derives a key from a password with a fresh random salt.
pub fn derive_key_from_password(password: &[u8]) -> SaltboxResult<PassKey> {
    derive_key_with_salt(password, &Salt::random())
}
