//! `passvault init` — create the account and an empty vault.

use crate::cli::{open_store, output, prompt_new_passphrase, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (mut store, _settings) = open_store(cli)?;

    if store.account_exists() {
        return Err(PassVaultError::AccountAlreadyExists);
    }

    let passphrase = prompt_new_passphrase()?;
    store.create_account(&passphrase)?;

    output::success("Account created — your vault is ready.");
    output::warning("There is no way to recover a forgotten master passphrase.");
    output::tip("Run `passvault add` to store your first credential.");
    output::tip("Run `passvault export <file>` to create an encrypted backup.");

    Ok(())
}
