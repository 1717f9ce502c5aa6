use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong passphrase or corrupted data")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Secure random generator failure: {0}")]
    RngFailure(String),

    // --- Vault errors ---
    #[error("Vault access failed — wrong master passphrase or corrupted data")]
    VaultAccess,

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    #[error("Import failed: {0}")]
    ImportFailed(String),

    // --- Account errors ---
    #[error("An account already exists — run `passvault wipe` first to start over")]
    AccountAlreadyExists,

    #[error("No account found — run `passvault init` first")]
    AccountNotFound,

    #[error("Wrong master passphrase")]
    WrongPassphrase,

    // --- Storage errors ---
    #[error("Storage error: {0}")]
    StorageFailed(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationFailed(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Weak passphrase: {0}")]
    WeakPassphrase(&'static str),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
