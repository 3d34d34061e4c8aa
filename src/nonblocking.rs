//! Non-blocking forms of every operation.
//!
//! Each function runs the corresponding blocking implementation on the
//! tokio blocking pool via `spawn_blocking`, so the calling task is never
//! parked on key derivation or file I/O. Results are byte-identical to the
//! blocking forms; only the delivery differs.
//!
//! Once dispatched, an operation runs to completion: dropping the returned
//! future discards the result but does not abort the work. Concurrently
//! dispatched operations may complete in any order.

use crate::error::{SaltboxError, SaltboxResult};
use crate::key::{PassKey, Salt};
use std::path::PathBuf;
use tokio::task::JoinError;
use tracing::warn;
use zeroize::Zeroizing;

fn join_failed(e: JoinError) -> SaltboxError {
    warn!("blocking-pool task failed: {e}");
    SaltboxError::Unsuccessful
}

async fn dispatch<T, F>(f: F) -> SaltboxResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> SaltboxResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(join_failed)?
}

/// Non-blocking [`derive_key_from_password`](crate::derive_key_from_password).
pub async fn derive_key_from_password(password: &[u8]) -> SaltboxResult<PassKey> {
    let password = Zeroizing::new(password.to_vec());
    dispatch(move || crate::key::derive_key_from_password(&password)).await
}

/// Non-blocking [`derive_key_with_salt`](crate::derive_key_with_salt).
pub async fn derive_key_with_salt(password: &[u8], salt: &Salt) -> SaltboxResult<PassKey> {
    let password = Zeroizing::new(password.to_vec());
    let salt = salt.clone();
    dispatch(move || crate::key::derive_key_with_salt(&password, &salt)).await
}

/// Non-blocking [`pass_encrypt`](crate::pass_encrypt).
pub async fn pass_encrypt(data: &[u8], password: &[u8]) -> SaltboxResult<Vec<u8>> {
    let data = data.to_vec();
    let password = Zeroizing::new(password.to_vec());
    dispatch(move || crate::cipher::pass_encrypt(&data, &password)).await
}

/// Non-blocking [`pass_decrypt`](crate::pass_decrypt).
pub async fn pass_decrypt(data: &[u8], password: &[u8]) -> SaltboxResult<Vec<u8>> {
    let data = data.to_vec();
    let password = Zeroizing::new(password.to_vec());
    dispatch(move || crate::cipher::pass_decrypt(&data, &password)).await
}

/// Non-blocking [`pass_key_encrypt`](crate::pass_key_encrypt).
pub async fn pass_key_encrypt(data: &[u8], pass_key: &PassKey) -> SaltboxResult<Vec<u8>> {
    let data = data.to_vec();
    let pass_key = pass_key.clone();
    dispatch(move || crate::cipher::pass_key_encrypt(&data, &pass_key)).await
}

/// Non-blocking [`pass_key_decrypt`](crate::pass_key_decrypt).
pub async fn pass_key_decrypt(data: &[u8], pass_key: &PassKey) -> SaltboxResult<Vec<u8>> {
    let data = data.to_vec();
    let pass_key = pass_key.clone();
    dispatch(move || crate::cipher::pass_key_decrypt(&data, &pass_key)).await
}

/// Non-blocking [`is_encrypted`](crate::is_encrypted).
///
/// The blocking form returns a plain bool; here an `Err` can only mean the
/// worker task itself failed.
pub async fn is_encrypted(data: &[u8]) -> SaltboxResult<bool> {
    let data = data.to_vec();
    dispatch(move || Ok(crate::format::is_encrypted(&data))).await
}

/// Non-blocking [`get_salt`](crate::get_salt).
pub async fn get_salt(data: &[u8]) -> SaltboxResult<Salt> {
    let data = data.to_vec();
    dispatch(move || crate::format::get_salt(&data)).await
}

/// Non-blocking [`encrypt_to_file`](crate::encrypt_to_file).
pub async fn encrypt_to_file(
    path: impl Into<PathBuf>,
    data: &[u8],
    password: &[u8],
) -> SaltboxResult<()> {
    let path = path.into();
    let data = data.to_vec();
    let password = Zeroizing::new(password.to_vec());
    dispatch(move || crate::file::encrypt_to_file(&path, &data, &password)).await
}

/// Non-blocking [`decrypt_from_file`](crate::decrypt_from_file).
pub async fn decrypt_from_file(
    path: impl Into<PathBuf>,
    password: &[u8],
) -> SaltboxResult<Vec<u8>> {
    let path = path.into();
    let password = Zeroizing::new(password.to_vec());
    dispatch(move || crate::file::decrypt_from_file(&path, &password)).await
}
