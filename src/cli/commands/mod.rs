//! One module per subcommand.

pub mod add;
pub mod edit;
pub mod export;
pub mod generate;
pub mod import;
pub mod init;
pub mod list;
pub mod remove;
pub mod show;
pub mod wipe;
