use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,

    /// Id of the author credited with this book. May dangle: the referenced
    /// author is not required to exist, and lookups against a missing author
    /// resolve to absent rather than an error.
    pub author_id: String,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            published_year: None,
            author_id: author_id.into(),
        }
    }

    pub fn with_published_year(mut self, year: i32) -> Self {
        self.published_year = Some(year);
        self
    }
}
