/// Command definitions using clap.
pub mod commands;

/// Handlers implementing each command.
pub mod handlers;

pub use commands::{Cli, Commands};
