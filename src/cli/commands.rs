use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(
    author,
    version,
    about = "A tiny in-memory authors/books GraphQL service, for humans and robots"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured JSON logs to this file in addition to stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .folio.yml into the current directory
    Init,

    /// List all authors
    Authors {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all books
    Books {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a book to the library
    #[command(visible_alias = "add")]
    AddBook {
        /// Title of the book
        title: String,

        /// Id of the author to credit
        #[arg(short, long)]
        author_id: String,

        /// Year of publication
        #[arg(short = 'y', long)]
        year: Option<i32>,

        /// Output the created book as JSON
        #[arg(long)]
        json: bool,
    },

    /// Execute a GraphQL query against a freshly seeded library
    #[command(visible_alias = "q")]
    Query {
        /// Query selection, e.g. '{ authors { name } }'
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation against a freshly seeded library
    #[command(visible_alias = "m")]
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Sdl,

    /// Start the GraphQL server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
