mod author;
mod book;

pub use author::Author;
pub use book::Book;
