//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - Passphrase-based AES-256-GCM string encryption (`cipher`)
//! - Argon2id passphrase-based key derivation (`kdf`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, hash_passphrase};
pub use cipher::{decrypt, encrypt, encrypt_with_params, hash_passphrase};
pub use kdf::{derive_key, generate_salt, Argon2Params};
