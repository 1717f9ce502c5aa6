//! `passvault export` — write an encrypted backup file.

use std::fs;

use crate::cli::{open_store, output, prompt_verified_passphrase, Cli};
use crate::errors::Result;

/// Execute the `export` command.
///
/// The backup file is a single self-contained ciphertext string:
/// anyone holding it needs only the passphrase to import it, on any
/// device, regardless of how this vault is stored locally.
pub fn execute(cli: &Cli, output_path: &str) -> Result<()> {
    let (store, _settings) = open_store(cli)?;
    let passphrase = prompt_verified_passphrase(&store)?;

    let blob = store.export_vault(&passphrase)?;
    fs::write(output_path, &blob)?;

    output::success(&format!("Encrypted backup written to {output_path}"));
    output::tip("Import it elsewhere with `passvault import <file>`.");

    Ok(())
}
