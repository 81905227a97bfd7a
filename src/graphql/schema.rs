use async_graphql::{Context, EmptySubscription, ID, Object, Schema};
use tracing::info;

use crate::store::SharedLibrary;
use crate::validation;

use super::types::*;

pub type FolioSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema around an explicitly injected library. Tests hand in
/// their own isolated instance; the CLI and server share one per process.
pub fn build_schema(library: SharedLibrary) -> FolioSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

pub(super) fn library<'a>(ctx: &'a Context<'a>) -> &'a SharedLibrary {
    ctx.data_unchecked::<SharedLibrary>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List all authors
    async fn authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        let library = library(ctx).read().expect("library lock poisoned");
        library
            .list_authors()
            .iter()
            .cloned()
            .map(Into::into)
            .collect()
    }

    /// List all books
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        let library = library(ctx).read().expect("library lock poisoned");
        library
            .list_books()
            .iter()
            .cloned()
            .map(Into::into)
            .collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a new book
    ///
    /// The book is created even when `authorId` matches no author; it is then
    /// simply not linked into any author's shelf and its `author` field
    /// resolves to null.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        published_year: Option<i32>,
        author_id: ID,
    ) -> async_graphql::Result<Book> {
        validation::validate_title(&title)?;

        let mut library = library(ctx).write().expect("library lock poisoned");
        let book = library.add_book(title, published_year, author_id.to_string());
        info!(book_id = %book.id, author_id = %book.author_id, "added book");
        Ok(book.into())
    }
}
