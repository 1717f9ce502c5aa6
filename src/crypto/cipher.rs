//! Passphrase-based authenticated encryption of strings.
//!
//! `encrypt` derives a fresh AES-256 key from the passphrase with Argon2id
//! and seals the plaintext with AES-256-GCM.  Everything needed to decrypt
//! later — format version, KDF parameters, salt, nonce — is packed into a
//! single base64 string, so a blob is self-contained: only the passphrase
//! is required to open it, on any device.
//!
//! Layout of the encoded byte buffer:
//!
//! ```text
//! [version: 1][memory_kib: 4 LE][iterations: 4 LE][parallelism: 4 LE]
//! [salt: 32][nonce: 12][ciphertext + 16-byte auth tag]
//! ```
//!
//! The version byte and embedded KDF parameters mean old blobs stay
//! readable if the defaults ever change.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::errors::{PassVaultError, Result};

use super::kdf::{
    self, derive_key, generate_salt, Argon2Params, MAX_ITERATIONS, MAX_MEMORY_KIB,
};

/// Current blob format version.
pub const FORMAT_VERSION: u8 = 1;

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
const TAG_LEN: usize = 16;

/// Fixed-size prefix: 1 (version) + 3 × 4 (Argon2 params).
const PREFIX_LEN: usize = 13;

/// Smallest possible blob: prefix + salt + nonce + empty ciphertext + tag.
const MIN_BLOB_LEN: usize = PREFIX_LEN + kdf::SALT_LEN + NONCE_LEN + TAG_LEN;

/// Encrypt `plaintext` under a key derived from `passphrase`.
///
/// Uses the default Argon2id parameters.  Returns a self-contained
/// base64 blob decryptable by [`decrypt`] with only the passphrase.
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<String> {
    encrypt_with_params(plaintext, passphrase, &Argon2Params::default())
}

/// Encrypt with explicit Argon2id parameters.
///
/// The parameters are embedded in the blob so `decrypt` reuses the
/// exact same settings regardless of the local configuration.
pub fn encrypt_with_params(
    plaintext: &str,
    passphrase: &str,
    params: &Argon2Params,
) -> Result<String> {
    // Fresh salt per blob — the derived key is never reused.
    let salt = generate_salt()?;
    let mut key = derive_key(passphrase.as_bytes(), &salt, params)?;

    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("invalid key length: {e}")));
    key.zeroize();
    let cipher = cipher?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|e| PassVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut buf = Vec::with_capacity(MIN_BLOB_LEN + ciphertext.len());
    buf.push(FORMAT_VERSION);
    buf.extend_from_slice(&params.memory_kib.to_le_bytes());
    buf.extend_from_slice(&params.iterations.to_le_bytes());
    buf.extend_from_slice(&params.parallelism.to_le_bytes());
    buf.extend_from_slice(&salt);
    buf.extend_from_slice(&nonce);
    buf.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(buf))
}

/// Decrypt a blob produced by [`encrypt`].
///
/// Every failure mode — bad base64, truncation, unknown version,
/// out-of-range KDF parameters, auth-tag mismatch, invalid UTF-8 —
/// collapses into the single `DecryptionFailed` error.  A caller
/// (or an attacker guessing passphrases) cannot tell a wrong
/// passphrase apart from corrupted data.
pub fn decrypt(blob: &str, passphrase: &str) -> Result<String> {
    let data = BASE64
        .decode(blob.trim())
        .map_err(|_| PassVaultError::DecryptionFailed)?;

    if data.len() < MIN_BLOB_LEN || data[0] != FORMAT_VERSION {
        return Err(PassVaultError::DecryptionFailed);
    }

    let params = Argon2Params {
        memory_kib: u32::from_le_bytes(data[1..5].try_into().unwrap_or_default()),
        iterations: u32::from_le_bytes(data[5..9].try_into().unwrap_or_default()),
        parallelism: u32::from_le_bytes(data[9..13].try_into().unwrap_or_default()),
    };

    // Reject params a crafted blob could use to exhaust memory or CPU.
    if params.memory_kib > MAX_MEMORY_KIB || params.iterations > MAX_ITERATIONS {
        return Err(PassVaultError::DecryptionFailed);
    }

    let salt_end = PREFIX_LEN + kdf::SALT_LEN;
    let salt = &data[PREFIX_LEN..salt_end];
    let nonce = Nonce::from_slice(&data[salt_end..salt_end + NONCE_LEN]);
    let ciphertext = &data[salt_end + NONCE_LEN..];

    let mut key = derive_key(passphrase.as_bytes(), salt, &params)
        .map_err(|_| PassVaultError::DecryptionFailed)?;

    let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| PassVaultError::DecryptionFailed);
    key.zeroize();

    let plaintext_bytes = cipher?
        .decrypt(nonce, ciphertext)
        .map_err(|_| PassVaultError::DecryptionFailed)?;

    String::from_utf8(plaintext_bytes).map_err(|e| {
        let mut bad_bytes = e.into_bytes();
        bad_bytes.zeroize();
        PassVaultError::DecryptionFailed
    })
}

/// SHA-256 digest of a passphrase as a lowercase hex string.
///
/// Used only to verify the master passphrase — never as key material.
/// Encryption keys always go through Argon2id inside `encrypt`/`decrypt`.
pub fn hash_passphrase(passphrase: &str) -> String {
    let digest = Sha256::digest(passphrase.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
