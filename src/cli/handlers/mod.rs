mod add_book;
mod init;
mod list;
mod mutate;
mod query;
mod sdl;
mod serve;
mod utils;

pub use add_book::handle_add_book;
pub use init::handle_init;
pub use list::{handle_authors, handle_books};
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use sdl::handle_sdl;
pub use serve::handle_serve;

use crate::config::FolioConfig;
use crate::store::{Library, SharedLibrary};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: FolioConfig,
    pub library: SharedLibrary,
}

impl CommandContext {
    /// Each process starts from the fixed seed rows; there is no persistence.
    pub fn new(config: FolioConfig) -> Self {
        let library = Library::seeded().into_shared();
        Self { config, library }
    }
}
