//! `passvault add` — add a credential to the vault.

use zeroize::Zeroizing;

use crate::cli::{
    open_store, output, prompt_optional, prompt_required, prompt_verified_passphrase, Cli,
};
use crate::errors::{PassVaultError, Result};
use crate::password;
use crate::vault::EntryDraft;

/// Execute the `add` command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    title: Option<&str>,
    username: Option<&str>,
    generate: bool,
    website: Option<&str>,
    notes: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    let (mut store, settings) = open_store(cli)?;
    let passphrase = prompt_verified_passphrase(&store)?;

    // Title is required for storage; the engine itself does not care.
    let title = match title {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        Some(_) => return Err(PassVaultError::CommandFailed("title cannot be empty".into())),
        None => prompt_required("Title")?,
    };

    let username = match username {
        Some(u) => u.to_string(),
        None => prompt_optional("Username")?.unwrap_or_default(),
    };

    let secret = if generate {
        let generated = Zeroizing::new(password::generate(settings.password_length));
        output::info(&format!("Generated password: {}", &*generated));
        generated
    } else {
        Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Password for this entry")
                .interact()
                .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?,
        )
    };

    let draft = EntryDraft {
        title,
        username,
        password: secret.to_string(),
        website: website.map(str::to_string),
        notes: notes.map(str::to_string),
        category: category.map(str::to_string),
    };

    let entry = store.add_entry(draft, &passphrase)?;
    output::success(&format!("Added '{}' (id: {})", entry.title, entry.id));

    Ok(())
}
