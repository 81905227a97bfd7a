use anyhow::Result;

use super::CommandContext;
use super::utils::{print_author_list, print_book_list};

pub fn handle_authors(ctx: &CommandContext, json: bool) -> Result<()> {
    let library = ctx.library.read().expect("library lock poisoned");
    let authors = library.list_authors();

    if json {
        println!("{}", serde_json::to_string_pretty(authors)?);
    } else {
        print_author_list(authors);
    }
    Ok(())
}

pub fn handle_books(ctx: &CommandContext, json: bool) -> Result<()> {
    let library = ctx.library.read().expect("library lock poisoned");
    let books = library.list_books();

    if json {
        println!("{}", serde_json::to_string_pretty(books)?);
    } else {
        print_book_list(books, &library);
    }
    Ok(())
}
