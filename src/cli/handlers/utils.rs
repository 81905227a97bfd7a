use colored::Colorize;

use crate::model::{Author, Book};
use crate::store::Library;

pub fn print_author_list(authors: &[Author]) {
    if authors.is_empty() {
        println!("No authors in the library.");
        return;
    }

    for author in authors {
        let count = author.book_ids.len();
        let books = if count == 1 { "book" } else { "books" };
        println!(
            "{} {} ({} {})",
            author.id.cyan(),
            author.name.bold(),
            count,
            books
        );
    }
}

pub fn print_book_list(books: &[Book], library: &Library) {
    if books.is_empty() {
        println!("No books in the library.");
        return;
    }

    for book in books {
        let year = book
            .published_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        let author = library
            .find_author_by_id(&book.author_id)
            .map(|a| a.name.as_str())
            .unwrap_or("unknown author");
        println!(
            "{} {} ({}) {} {}",
            book.id.cyan(),
            book.title.bold(),
            year.dimmed(),
            "by".dimmed(),
            author.magenta()
        );
    }
}
