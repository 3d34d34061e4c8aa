//! Error types for the encrypt-save layer.

use thiserror::Error;

/// Result type for encrypt-save operations.
pub type SaltboxResult<T> = Result<T, SaltboxError>;

/// Errors that can occur in encrypt-save operations.
#[derive(Debug, Error)]
pub enum SaltboxError {
    /// Key derivation failed.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// Encryption failed.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed (wrong password or tampered data).
    ///
    /// Wrong-password and corrupted-ciphertext failures share this variant
    /// so callers cannot distinguish which part of the input was invalid.
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// Caller-supplied salt of the wrong length.
    #[error("invalid salt length: expected {expected}, got {actual}")]
    InvalidSaltLength { expected: usize, actual: usize },

    /// Generic failure without a more specific diagnostic.
    #[error("operation unsuccessful")]
    Unsuccessful,

    /// File read/write failure. Always distinct from crypto errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
