//! # Folio - a tiny authors/books GraphQL service
//!
//! Folio is a teaching example: two small in-memory collections (authors and
//! books, cross-referenced by id) exposed through a GraphQL query-and-mutation
//! API. The interesting part is the relational resolution layer in
//! [`graphql`], which maps a declarative field selection onto the store one
//! field at a time.
//!
//! ## Quick Start
//!
//! ```bash
//! # List the seeded library
//! folio authors
//! folio books
//!
//! # Run a query in-process
//! folio query '{ books { title author { name } } }'
//!
//! # Serve GraphQL over HTTP with a GraphiQL page
//! folio serve --port 4000
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and defaults
//! - [`error`]: Error types and result alias
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: Data models (`Author`, `Book`)
//! - [`store`]: The in-memory `Library` store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.folio.yml` configuration files, falling back to defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `FolioError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema for querying and mutating the library.
pub mod graphql;

/// Data models for the library.
///
/// Includes `Author` and `Book`.
pub mod model;

/// The in-memory store owning both collections and id generation.
pub mod store;

pub mod logging;

/// Input validation utilities.
pub mod validation;
