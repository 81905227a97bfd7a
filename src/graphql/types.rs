use crate::model;
use async_graphql::{ComplexObject, Context, ID, SimpleObject};

use super::schema::library;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,

    #[graphql(skip)]
    pub book_ids: Vec<String>,
}

#[ComplexObject]
impl Author {
    /// Books on this author's shelf, in library order. Stale shelf entries
    /// are filtered out rather than surfaced.
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        let library = library(ctx).read().expect("library lock poisoned");
        library
            .find_books_by_ids(&self.book_ids)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: a.id.into(),
            name: a.name,
            book_ids: a.book_ids,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: ID,
    pub title: String,
    pub published_year: Option<i32>,

    #[graphql(skip)]
    pub author_id: String,
}

#[ComplexObject]
impl Book {
    /// The author this book references, or null when the reference dangles.
    /// A null author is valid data, not an error.
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        let library = library(ctx).read().expect("library lock poisoned");
        library
            .find_author_by_id(&self.author_id)
            .cloned()
            .map(Into::into)
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: b.id.into(),
            title: b.title,
            published_year: b.published_year,
            author_id: b.author_id,
        }
    }
}
