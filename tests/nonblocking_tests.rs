//! Parity tests: the non-blocking forms must produce results
//! interchangeable with the blocking forms.

use saltbox::{nonblocking, SaltboxError, Salt, EXTRA_LEN, SALT_LEN};

// ── Derivation parity ────────────────────────────────────────────

#[tokio::test]
async fn derive_with_salt_matches_blocking_form() {
    let salt = Salt::from_bytes([5u8; SALT_LEN]);
    let async_key = nonblocking::derive_key_with_salt(b"pw", &salt).await.unwrap();
    let sync_key = saltbox::derive_key_with_salt(b"pw", &salt).unwrap();
    assert_eq!(async_key.key_bytes(), sync_key.key_bytes());
    assert_eq!(async_key.salt(), sync_key.salt());
}

#[tokio::test]
async fn derive_from_password_is_reproducible() {
    let key = nonblocking::derive_key_from_password(b"pw").await.unwrap();
    let again = saltbox::derive_key_with_salt(b"pw", key.salt()).unwrap();
    assert_eq!(key.key_bytes(), again.key_bytes());
}

// ── Cross-convention round trips ─────────────────────────────────

#[tokio::test]
async fn async_encrypt_sync_decrypt() {
    let blob = nonblocking::pass_encrypt(b"payload", b"pw").await.unwrap();
    assert_eq!(blob.len(), b"payload".len() + EXTRA_LEN);
    assert_eq!(saltbox::pass_decrypt(&blob, b"pw").unwrap(), b"payload");
}

#[tokio::test]
async fn sync_encrypt_async_decrypt() {
    let blob = saltbox::pass_encrypt(b"payload", b"pw").unwrap();
    assert_eq!(
        nonblocking::pass_decrypt(&blob, b"pw").await.unwrap(),
        b"payload"
    );
}

#[tokio::test]
async fn async_key_roundtrip() {
    let key = nonblocking::derive_key_from_password(b"pw").await.unwrap();
    let blob = nonblocking::pass_key_encrypt(b"payload", &key).await.unwrap();
    let plain = nonblocking::pass_key_decrypt(&blob, &key).await.unwrap();
    assert_eq!(plain, b"payload");
}

#[tokio::test]
async fn async_wrong_password_fails_generically() {
    let blob = nonblocking::pass_encrypt(b"payload", b"right").await.unwrap();
    let err = nonblocking::pass_decrypt(&blob, b"wrong").await.unwrap_err();
    assert!(matches!(err, SaltboxError::Decryption(_)));
}

// ── Format inspection ────────────────────────────────────────────

#[tokio::test]
async fn async_is_encrypted() {
    let blob = nonblocking::pass_encrypt(b"data", b"pw").await.unwrap();
    assert!(nonblocking::is_encrypted(&blob).await.unwrap());
    assert!(!nonblocking::is_encrypted(b"plain old data").await.unwrap());
}

#[tokio::test]
async fn async_get_salt_matches_sync() {
    let blob = nonblocking::pass_encrypt(b"data", b"pw").await.unwrap();
    let async_salt = nonblocking::get_salt(&blob).await.unwrap();
    let sync_salt = saltbox::get_salt(&blob).unwrap();
    assert_eq!(async_salt, sync_salt);
}

// ── Files ────────────────────────────────────────────────────────

#[tokio::test]
async fn async_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.bin");

    nonblocking::encrypt_to_file(&path, b"profile", b"pw").await.unwrap();
    let plain = nonblocking::decrypt_from_file(&path, b"pw").await.unwrap();
    assert_eq!(plain, b"profile");
}

#[tokio::test]
async fn async_missing_file_yields_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bin");

    let err = nonblocking::decrypt_from_file(&path, b"pw").await.unwrap_err();
    assert!(matches!(err, SaltboxError::Io(_)));
}

// ── Concurrency ──────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_operations_complete_independently() {
    let key = nonblocking::derive_key_from_password(b"pw").await.unwrap();

    let mut handles = Vec::new();
    for i in 0..8u8 {
        let key = key.clone();
        handles.push(tokio::spawn(async move {
            let data = vec![i; 64];
            let blob = nonblocking::pass_key_encrypt(&data, &key).await.unwrap();
            let plain = nonblocking::pass_key_decrypt(&blob, &key).await.unwrap();
            assert_eq!(plain, data);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
}
