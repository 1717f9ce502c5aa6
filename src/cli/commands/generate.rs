//! `passvault generate` — generate a strong random password.

use std::path::Path;

use crate::cli::Cli;
use crate::config::Settings;
use crate::errors::Result;
use crate::password;

/// Execute the `generate` command.
///
/// Needs no account and no passphrase; the password is printed to
/// stdout so it can be piped.
pub fn execute(_cli: &Cli, length: Option<usize>) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
    let settings = Settings::load(&cwd).unwrap_or_default();

    let length = length.unwrap_or(settings.password_length);
    println!("{}", password::generate(length));

    Ok(())
}
