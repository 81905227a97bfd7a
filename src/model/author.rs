use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub book_ids: Vec<String>,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            book_ids: Vec::new(),
        }
    }

    pub fn with_book_ids(mut self, book_ids: Vec<String>) -> Self {
        self.book_ids = book_ids;
        self
    }
}
