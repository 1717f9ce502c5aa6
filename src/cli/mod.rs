//! CLI module — Clap argument parser, passphrase prompts, and command
//! implementations.

pub mod commands;
pub mod output;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::password::validate_strength;
use crate::vault::{FileStore, VaultStore};

/// Env var that replaces the interactive master-passphrase prompt
/// (scripting/CI friendly).
pub const PASSPHRASE_ENV: &str = "PASSVAULT_PASSPHRASE";

/// Env var that replaces the backup-passphrase prompt during import.
/// Falls back to `PASSVAULT_PASSPHRASE` when unset.
pub const IMPORT_PASSPHRASE_ENV: &str = "PASSVAULT_IMPORT_PASSPHRASE";

/// PassVault CLI: local-first encrypted password vault.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local-first encrypted password vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: .passvault, or `vault_dir` from .passvault.toml)
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create the account and an empty vault
    Init,

    /// Add a credential to the vault
    Add {
        /// Title (e.g. "Gmail"); prompted when omitted
        #[arg(long)]
        title: Option<String>,

        /// Username; prompted when omitted
        #[arg(long)]
        username: Option<String>,

        /// Generate the password instead of prompting for one
        #[arg(short, long)]
        generate: bool,

        /// Website URL
        #[arg(long)]
        website: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// Category label
        #[arg(long)]
        category: Option<String>,
    },

    /// List all credentials (no secrets shown)
    List,

    /// Show one credential in full, secret included
    Show {
        /// Entry id (as shown by `list`)
        id: String,
    },

    /// Update fields of an existing credential
    Edit {
        /// Entry id (as shown by `list`)
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New username
        #[arg(long)]
        username: Option<String>,

        /// Prompt for a new password
        #[arg(short, long)]
        password: bool,

        /// New website URL
        #[arg(long)]
        website: Option<String>,

        /// New notes
        #[arg(long)]
        notes: Option<String>,

        /// New category label
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete a credential
    Remove {
        /// Entry id (as shown by `list`)
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a strong random password
    Generate {
        /// Password length (default: 16, or `password_length` from config)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Export the vault as an encrypted backup file
    Export {
        /// Output file path
        output: String,
    },

    /// Import an encrypted backup file
    Import {
        /// Path to the backup file
        file: String,

        /// Keep existing entries and add non-conflicting imported ones
        #[arg(short, long)]
        merge: bool,

        /// Re-encrypt under this device's master passphrase instead of
        /// the backup's passphrase
        #[arg(long)]
        keep_master: bool,
    },

    /// Delete the account and the vault. Irreversible
    Wipe {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Open the vault store for this invocation: load `.passvault.toml`
/// from the current directory, resolve the vault dir (flag wins over
/// config), and wire up a `FileStore`.
pub fn open_store(cli: &Cli) -> Result<(VaultStore<FileStore>, Settings)> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    let vault_dir = cli
        .vault_dir
        .clone()
        .unwrap_or_else(|| settings.vault_dir.clone());
    let file_store = FileStore::open(&cwd.join(vault_dir))?;

    Ok((
        VaultStore::with_params(file_store, settings.argon2_params()),
        settings,
    ))
}

/// Get the master passphrase, trying in order:
/// 1. `PASSVAULT_PASSPHRASE` env var (scripting/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_passphrase() -> Result<Zeroizing<String>> {
    prompt_with_env("Enter master passphrase", PASSPHRASE_ENV)
}

/// Prompt for the master passphrase and verify it against the stored
/// digest before returning it.
pub fn prompt_verified_passphrase<S: crate::vault::KeyValueStore>(
    store: &VaultStore<S>,
) -> Result<Zeroizing<String>> {
    if !store.account_exists() {
        return Err(PassVaultError::AccountNotFound);
    }

    let passphrase = prompt_passphrase()?;
    if !store.verify_passphrase(&passphrase) {
        return Err(PassVaultError::WrongPassphrase);
    }
    Ok(passphrase)
}

/// Prompt for a new master passphrase with confirmation and strength
/// validation (used during `init`).
///
/// Also respects `PASSVAULT_PASSPHRASE` for scripted usage; the env
/// value still has to pass the strength rules.
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_new_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSPHRASE_ENV) {
        if !pw.is_empty() {
            let strength = validate_strength(&pw);
            if !strength.is_strong {
                return Err(PassVaultError::WeakPassphrase(strength.message));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let pw = Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Choose a master passphrase")
                .interact()
                .map_err(|e| PassVaultError::CommandFailed(format!("passphrase prompt: {e}")))?,
        );

        let strength = validate_strength(&pw);
        if !strength.is_strong {
            output::warning(&format!("Weak passphrase: {}", strength.message));
            continue;
        }

        let confirm = Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Confirm master passphrase")
                .interact()
                .map_err(|e| PassVaultError::CommandFailed(format!("passphrase prompt: {e}")))?,
        );

        if *pw != *confirm {
            output::warning("Passphrases do not match — try again.");
            continue;
        }

        return Ok(pw);
    }
}

/// Get a passphrase from `env_var` if set, else prompt interactively.
pub fn prompt_with_env(prompt: &str, env_var: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(env_var) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a required single-line value (e.g. an entry title).
pub fn prompt_required(prompt: &str) -> Result<String> {
    let value: String = dialoguer::Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?;

    if value.trim().is_empty() {
        return Err(PassVaultError::CommandFailed(format!(
            "{prompt} cannot be empty"
        )));
    }
    Ok(value)
}

/// Prompt for an optional single-line value; empty input means `None`.
pub fn prompt_optional(prompt: &str) -> Result<Option<String>> {
    let value: String = dialoguer::Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?;

    if value.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Ask the user to confirm a destructive action.
pub fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("confirmation prompt: {e}")))
}
