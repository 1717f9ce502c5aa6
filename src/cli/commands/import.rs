//! `passvault import` — import an encrypted backup file.

use std::fs;

use crate::cli::{
    open_store, output, prompt_verified_passphrase, prompt_with_env, Cli, IMPORT_PASSPHRASE_ENV,
    PASSPHRASE_ENV,
};
use crate::errors::{PassVaultError, Result};

/// Execute the `import` command.
///
/// With `--merge`, existing entries are kept and imported entries with
/// a conflicting id are dropped; without it, the backup replaces the
/// vault's entries entirely.  With `--keep-master`, the result is
/// saved under this device's master passphrase instead of the backup's.
pub fn execute(cli: &Cli, file: &str, merge: bool, keep_master: bool) -> Result<()> {
    let (mut store, _settings) = open_store(cli)?;

    if !store.account_exists() {
        return Err(PassVaultError::AccountNotFound);
    }

    let blob = fs::read_to_string(file)?;

    // The backup may be protected by a different passphrase than the
    // local vault, so the two prompts are separate.
    let target_passphrase = if keep_master {
        Some(prompt_verified_passphrase(&store)?)
    } else {
        None
    };

    let import_env = if std::env::var(IMPORT_PASSPHRASE_ENV).is_ok() {
        IMPORT_PASSPHRASE_ENV
    } else {
        PASSPHRASE_ENV
    };
    let import_passphrase = prompt_with_env("Enter backup passphrase", import_env)?;

    store.import_vault(
        &blob,
        &import_passphrase,
        merge,
        target_passphrase.as_ref().map(|p| p.as_str()),
    )?;

    if merge {
        output::success("Backup merged into the vault.");
    } else {
        output::success("Backup imported — previous entries were replaced.");
    }

    Ok(())
}
