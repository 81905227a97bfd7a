//! GraphQL schema and resolvers for the library.
//!
//! Exposes the authors/books collections for querying and mutation. The
//! resolution layer is deliberately thin: each resolver answers one field
//! against the injected [`Library`](crate::store::Library) and leaves
//! traversal to the query engine.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! folio serve --port 4000
//!
//! # Execute a query from CLI
//! folio query '{ authors { name books { title } } }'
//!
//! # Execute a mutation from CLI
//! folio mutate 'addBook(title: "New Book", publishedYear: 2025, authorId: "1") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `authors`, `books`
//! - **Mutations**: `addBook`

mod schema;
mod server;
mod types;

pub use schema::{FolioSchema, build_schema};
pub use server::run_server;
pub use types::*;
