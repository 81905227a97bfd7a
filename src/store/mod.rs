//! In-memory library store.
//!
//! `Library` owns the two entity collections and is the only authority for id
//! generation. It is constructed explicitly and injected into the GraphQL
//! schema, so tests get isolated instances instead of a process-wide table.
//! Callers that share a `Library` across requests wrap it in
//! `Arc<RwLock<...>>`; taking the write lock for `add_book` serializes id
//! generation, which is count-based and not safe under concurrent writers.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::model::{Author, Book};

/// A `Library` shared between concurrent request handlers.
pub type SharedLibrary = Arc<RwLock<Library>>;

#[derive(Debug, Default)]
pub struct Library {
    authors: Vec<Author>,
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed sample rows every fresh process starts from.
    pub fn seeded() -> Self {
        let mut library = Self::new();

        library.authors = vec![
            Author::new("1", "J. R. R. Tolkien")
                .with_book_ids(vec!["101".to_string(), "102".to_string()]),
            Author::new("2", "Ursula K. Le Guin").with_book_ids(vec!["103".to_string()]),
        ];
        library.books = vec![
            Book::new("101", "The Hobbit", "1").with_published_year(1937),
            Book::new("102", "The Fellowship of the Ring", "1").with_published_year(1954),
            Book::new("103", "A Wizard of Earthsea", "2").with_published_year(1968),
        ];

        library
    }

    pub fn into_shared(self) -> SharedLibrary {
        Arc::new(RwLock::new(self))
    }

    /// All authors, insertion order.
    pub fn list_authors(&self) -> &[Author] {
        &self.authors
    }

    /// All books, insertion order.
    pub fn list_books(&self) -> &[Book] {
        &self.books
    }

    pub fn find_author_by_id(&self, id: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn find_book_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Books whose id appears in `ids`, in the library's own shelf order (not
    /// the order of `ids`). Unknown ids are skipped, not surfaced.
    pub fn find_books_by_ids(&self, ids: &[String]) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| ids.contains(&b.id))
            .cloned()
            .collect()
    }

    /// Appends a new book and, when `author_id` names an existing author,
    /// links it into that author's `book_ids`. A book whose author does not
    /// exist is still created, just left unlinked.
    ///
    /// Id policy preserved from the original: `book count + 101`, as text.
    /// Only sound while books are append-only and writes are serialized.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        published_year: Option<i32>,
        author_id: impl Into<String>,
    ) -> Book {
        let id = self.next_book_id();
        let mut book = Book::new(id, title, author_id);
        book.published_year = published_year;

        match self.authors.iter_mut().find(|a| a.id == book.author_id) {
            Some(author) => author.book_ids.push(book.id.clone()),
            None => debug!(
                book_id = %book.id,
                author_id = %book.author_id,
                "book created without a matching author, leaving it unlinked"
            ),
        }

        self.books.push(book.clone());
        book
    }

    fn next_book_id(&self) -> String {
        (self.books.len() + 101).to_string()
    }
}
