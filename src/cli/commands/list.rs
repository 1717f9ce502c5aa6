//! `passvault list` — list all credentials (no secrets shown).

use crate::cli::{open_store, output, prompt_verified_passphrase, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (store, _settings) = open_store(cli)?;
    let passphrase = prompt_verified_passphrase(&store)?;

    let vault = store.load_vault(&passphrase)?;
    output::print_entries_table(&vault.entries);

    Ok(())
}
