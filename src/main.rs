use anyhow::{Context, Result};
use clap::Parser;

use folio::cli::{Cli, Commands, handlers};
use folio::config::FolioConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    folio::logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init => handlers::handle_init(),
        Commands::Authors { json } => handlers::handle_authors(&load_context()?, json),
        Commands::Books { json } => handlers::handle_books(&load_context()?, json),
        Commands::AddBook {
            title,
            author_id,
            year,
            json,
        } => handlers::handle_add_book(&load_context()?, title, author_id, year, json),
        Commands::Query { query, variables } => {
            handlers::handle_query(&load_context()?, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(&load_context()?, mutation, variables),
        Commands::Sdl => handlers::handle_sdl(&load_context()?),
        Commands::Serve { port } => handlers::handle_serve(load_context()?, port),
    }
}

fn load_context() -> Result<handlers::CommandContext> {
    let cwd = std::env::current_dir()?;
    let config = FolioConfig::load(&cwd).context("Failed to load folio configuration")?;
    Ok(handlers::CommandContext::new(config))
}
