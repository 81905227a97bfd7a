use anyhow::Result;
use colored::Colorize;

use crate::validation;

use super::CommandContext;

pub fn handle_add_book(
    ctx: &CommandContext,
    title: String,
    author_id: String,
    year: Option<i32>,
    json: bool,
) -> Result<()> {
    validation::validate_title(&title)?;

    let mut library = ctx.library.write().expect("library lock poisoned");
    let linked = library.find_author_by_id(&author_id).is_some();
    let book = library.add_book(title, year, author_id);

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        println!("{} {} {}", "Added".green(), book.id.cyan(), book.title);
        if !linked {
            println!(
                "{} author {} does not exist; the book is unlinked",
                "Warning:".yellow(),
                book.author_id.cyan()
            );
        }
    }
    Ok(())
}
