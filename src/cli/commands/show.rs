//! `passvault show` — print one credential in full, secret included.

use crate::cli::{open_store, output, prompt_verified_passphrase, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `show` command.
pub fn execute(cli: &Cli, id: &str) -> Result<()> {
    let (store, _settings) = open_store(cli)?;
    let passphrase = prompt_verified_passphrase(&store)?;

    let vault = store.load_vault(&passphrase)?;
    let entry = vault
        .entries
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| PassVaultError::EntryNotFound(id.to_string()))?;

    output::print_entry(entry);

    Ok(())
}
