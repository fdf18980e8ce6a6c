//! Book catalog service

use indexmap::{map::Entry, IndexMap};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookSummary},
    persistence::Persistence,
};

#[derive(Clone)]
pub struct BooksService {
    persistence: Persistence,
}

impl BooksService {
    pub fn new(persistence: Persistence) -> Self {
        Self { persistence }
    }

    /// One entry per ISBN, in the order the backend returned the copies
    pub async fn get_all_books(&self) -> AppResult<Vec<BookSummary>> {
        let copies = self.persistence.books.all_books().await?;
        tracing::debug!("Collapsing {} copies by ISBN", copies.len());
        Ok(summarize_by_isbn(copies))
    }

    /// Representative copy of an ISBN, preferring an available one
    pub async fn get_book_by_isbn(&self, isbn: &str) -> AppResult<BookSummary> {
        let copies = self.persistence.books.books_by_isbn(isbn).await?;
        let available = copies.iter().filter(|b| b.is_available()).count() as u32;
        let index = copies.iter().position(Book::is_available).unwrap_or(0);

        copies
            .into_iter()
            .nth(index)
            .map(|book| BookSummary::from_copy(book, available))
            .ok_or_else(|| AppError::NotFound(format!("No book found with ISBN: {}", isbn)))
    }
}

fn summarize_by_isbn(copies: Vec<Book>) -> Vec<BookSummary> {
    let mut by_isbn: IndexMap<String, (Book, u32)> = IndexMap::new();

    for copy in copies {
        let available = u32::from(copy.is_available());
        match by_isbn.entry(copy.isbn.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().1 += available,
            Entry::Vacant(entry) => {
                entry.insert((copy, available));
            }
        }
    }

    by_isbn
        .into_values()
        .map(|(book, available)| BookSummary::from_copy(book, available))
        .collect()
}
