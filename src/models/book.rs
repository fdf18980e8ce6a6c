//! Book (physical copy) model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Circulation state of a single copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BookState {
    Available,
    Borrowed,
    Reserved,
}

impl BookState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookState::Available => "Available",
            BookState::Borrowed => "Borrowed",
            BookState::Reserved => "Reserved",
        }
    }
}

impl std::fmt::Display for BookState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(BookState::Available),
            "borrowed" => Ok(BookState::Borrowed),
            "reserved" => Ok(BookState::Reserved),
            _ => Err(format!("Invalid book state: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Genre {
    pub name: String,
}

/// One physical copy. Several copies share an ISBN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub state: BookState,
    pub genres: Vec<Genre>,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.state == BookState::Available
    }
}

/// Catalog entry for one ISBN as shown to the frontend
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    /// Id of the representative copy
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub state: BookState,
    pub genres: Vec<Genre>,
    /// Number of copies with this ISBN currently available
    pub available_copies: u32,
}

impl BookSummary {
    pub fn from_copy(book: Book, available_copies: u32) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            state: book.state,
            genres: book.genres,
            available_copies,
        }
    }
}
