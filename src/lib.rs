//! Password-derived encrypted state store.
//!
//! Encrypts opaque profile blobs under a user password (or a pre-derived
//! [`PassKey`]) using Argon2id key derivation and ChaCha20-Poly1305
//! authenticated encryption. Every blob is framed with a plaintext format
//! marker and the derivation salt, so encrypted data can be recognized and
//! its salt recovered without a password:
//!
//! ```text
//! magic(8) | salt(16) | nonce(12) | ciphertext + tag(n + 16)
//! ```
//!
//! Every operation comes in two forms with identical semantics: the
//! blocking functions at the crate root, and async counterparts in
//! [`nonblocking`] that run the same code on the tokio blocking pool.
//!
//! # Design Principles
//!
//! - **Stateless**: keys and blobs are call-local values; nothing is
//!   cached or retained across calls.
//! - **Self-describing blobs**: decryption needs only the password; the
//!   salt travels inside the blob.
//! - **One decryption error**: wrong password and tampered data are
//!   indistinguishable to callers, avoiding an oracle.
//! - **Key hygiene**: derived keys and transient password copies are
//!   zeroized on drop.

mod cipher;
mod error;
mod file;
mod format;
mod key;
pub mod nonblocking;

pub use cipher::{pass_decrypt, pass_encrypt, pass_key_decrypt, pass_key_encrypt};
pub use error::{SaltboxError, SaltboxResult};
pub use file::{decrypt_from_file, encrypt_to_file};
pub use format::{get_salt, is_encrypted, EXTRA_LEN, MAGIC, MAGIC_LEN, NONCE_LEN, TAG_LEN};
pub use key::{derive_key_from_password, derive_key_with_salt, PassKey, Salt, KEY_LEN, SALT_LEN};
