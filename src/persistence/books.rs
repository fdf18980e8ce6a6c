//! Book copies in the persistence service

use async_trait::async_trait;
use tonic::transport::Channel;

use super::proto::{
    book_service_client::BookServiceClient, DtoBook, GetAllBooksRequest, GetBooksByIsbnRequest,
    UpdateBookStateRequest,
};
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookState, Genre},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Every copy of every title
    async fn all_books(&self) -> AppResult<Vec<Book>>;

    /// All copies sharing an ISBN, in backend order
    async fn books_by_isbn(&self, isbn: &str) -> AppResult<Vec<Book>>;

    async fn update_state(&self, id: i32, state: BookState) -> AppResult<()>;
}

#[derive(Clone)]
pub struct GrpcBookStore {
    client: BookServiceClient<Channel>,
}

impl GrpcBookStore {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: BookServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl BookStore for GrpcBookStore {
    async fn all_books(&self) -> AppResult<Vec<Book>> {
        tracing::debug!("Sending gRPC request to get all books");
        let response = self
            .client
            .clone()
            .get_all_books(GetAllBooksRequest {})
            .await?
            .into_inner();

        tracing::debug!("Received {} books", response.books.len());
        response.books.into_iter().map(Book::try_from).collect()
    }

    async fn books_by_isbn(&self, isbn: &str) -> AppResult<Vec<Book>> {
        tracing::debug!(isbn, "Sending gRPC request to get books by ISBN");
        let response = self
            .client
            .clone()
            .get_books_by_isbn(GetBooksByIsbnRequest { isbn: isbn.to_string() })
            .await?
            .into_inner();

        if !response.success && !response.message.is_empty() {
            tracing::debug!(isbn, "Backend reported: {}", response.message);
        }
        response.books.into_iter().map(Book::try_from).collect()
    }

    async fn update_state(&self, id: i32, state: BookState) -> AppResult<()> {
        tracing::debug!(book_id = id, %state, "Sending gRPC request to update book state");
        let response = self
            .client
            .clone()
            .update_book_state(UpdateBookStateRequest {
                id,
                state: state.to_string(),
            })
            .await?
            .into_inner();

        if !response.success {
            return Err(AppError::Grpc(format!(
                "Failed to update state of book {}: {}",
                id, response.message
            )));
        }
        Ok(())
    }
}

impl TryFrom<DtoBook> for Book {
    type Error = AppError;

    fn try_from(dto: DtoBook) -> Result<Self, Self::Error> {
        let state = dto.state.parse::<BookState>().map_err(AppError::Internal)?;
        Ok(Book {
            id: dto.id,
            isbn: dto.isbn,
            title: dto.title,
            author: dto.author,
            state,
            genres: dto.genres.into_iter().map(|g| Genre { name: g.name }).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::proto::DtoGenre;

    fn dto(state: &str) -> DtoBook {
        DtoBook {
            id: 7,
            isbn: "978-0-13-110362-7".into(),
            title: "The C Programming Language".into(),
            author: "Kernighan".into(),
            state: state.into(),
            genres: vec![DtoGenre { name: "Programming".into() }],
        }
    }

    #[test]
    fn test_dto_to_domain() {
        let book = Book::try_from(dto("AVAILABLE")).unwrap();
        assert_eq!(book.id, 7);
        assert_eq!(book.isbn, "978-0-13-110362-7");
        assert_eq!(book.title, "The C Programming Language");
        assert_eq!(book.author, "Kernighan");
        assert_eq!(book.state, BookState::Available);
        assert_eq!(book.genres, vec![Genre { name: "Programming".into() }]);
    }

    #[test]
    fn test_unknown_state_is_mapping_error() {
        assert!(matches!(Book::try_from(dto("Lost")), Err(AppError::Internal(_))));
    }
}
