//! `passvault wipe` — delete the account and the vault.

use crate::cli::{confirm, open_store, output, Cli};
use crate::errors::Result;

/// Execute the `wipe` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let (mut store, _settings) = open_store(cli)?;

    if !force
        && !confirm("This permanently deletes the account and every stored credential. Continue?")?
    {
        output::info("Nothing wiped.");
        return Ok(());
    }

    store.wipe()?;
    output::success("All vault data deleted.");

    Ok(())
}
