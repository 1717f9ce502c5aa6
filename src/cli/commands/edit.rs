//! `passvault edit` — update fields of an existing credential.

use zeroize::Zeroizing;

use crate::cli::{open_store, output, prompt_verified_passphrase, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::EntryPatch;

/// Execute the `edit` command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    id: &str,
    title: Option<&str>,
    username: Option<&str>,
    password: bool,
    website: Option<&str>,
    notes: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    let (mut store, _settings) = open_store(cli)?;
    let passphrase = prompt_verified_passphrase(&store)?;

    let new_password = if password {
        Some(Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("New password for this entry")
                .interact()
                .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?,
        ))
    } else {
        None
    };

    let patch = EntryPatch {
        title: title.map(str::to_string),
        username: username.map(str::to_string),
        password: new_password.map(|p| p.to_string()),
        website: website.map(str::to_string),
        notes: notes.map(str::to_string),
        category: category.map(str::to_string),
    };

    store.update_entry(id, patch, &passphrase)?;
    output::success(&format!("Updated entry {id}"));

    Ok(())
}
