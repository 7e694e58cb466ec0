use serde::{Deserialize, Serialize};

/// Body of the add and edit book requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPayload {
    pub name: String,
    pub author: String,
    pub published_year: i32,
    pub book_summary: String,
}

/// A book as returned by the book store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub published_year: i32,
    pub book_summary: String,
}

impl Book {
    pub fn payload(&self) -> BookPayload {
        BookPayload {
            name: self.name.clone(),
            author: self.author.clone(),
            published_year: self.published_year,
            book_summary: self.book_summary.clone(),
        }
    }
}
