use clap::Parser;
use passvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli),
        Commands::Add {
            ref title,
            ref username,
            generate,
            ref website,
            ref notes,
            ref category,
        } => passvault::cli::commands::add::execute(
            &cli,
            title.as_deref(),
            username.as_deref(),
            generate,
            website.as_deref(),
            notes.as_deref(),
            category.as_deref(),
        ),
        Commands::List => passvault::cli::commands::list::execute(&cli),
        Commands::Show { ref id } => passvault::cli::commands::show::execute(&cli, id),
        Commands::Edit {
            ref id,
            ref title,
            ref username,
            password,
            ref website,
            ref notes,
            ref category,
        } => passvault::cli::commands::edit::execute(
            &cli,
            id,
            title.as_deref(),
            username.as_deref(),
            password,
            website.as_deref(),
            notes.as_deref(),
            category.as_deref(),
        ),
        Commands::Remove { ref id, force } => {
            passvault::cli::commands::remove::execute(&cli, id, force)
        }
        Commands::Generate { length } => passvault::cli::commands::generate::execute(&cli, length),
        Commands::Export { ref output } => passvault::cli::commands::export::execute(&cli, output),
        Commands::Import {
            ref file,
            merge,
            keep_master,
        } => passvault::cli::commands::import::execute(&cli, file, merge, keep_master),
        Commands::Wipe { force } => passvault::cli::commands::wipe::execute(&cli, force),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
