//! `passvault remove` — delete a credential.

use crate::cli::{confirm, open_store, output, prompt_verified_passphrase, Cli};
use crate::errors::Result;

/// Execute the `remove` command.
pub fn execute(cli: &Cli, id: &str, force: bool) -> Result<()> {
    let (mut store, _settings) = open_store(cli)?;
    let passphrase = prompt_verified_passphrase(&store)?;

    if !force && !confirm(&format!("Delete entry {id}?"))? {
        output::info("Nothing deleted.");
        return Ok(());
    }

    // Deleting an id that does not exist is a silent no-op by design.
    store.delete_entry(id, &passphrase)?;
    output::success(&format!("Removed entry {id}"));

    Ok(())
}
