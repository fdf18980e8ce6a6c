//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Local, Utc};
use serde_json::Value;
use tower::ServiceExt;

use library_logic_server::{
    config::{AppConfig, Branch},
    create_router,
    error::AppResult,
    models::{
        Book, BookState, Genre, Loan, NewLoan, NewReservation, NewReserve, Reservation, Reserve,
        Role, User, UserClaims,
    },
    persistence::{BookStore, LoanStore, Persistence, ReservationStore, ReserveStore, UserStore},
    services::{auth::hash_password, Services},
    AppState,
};

pub const PASSWORD: &str = "Secret123";

/// Initialize test tracing. Subsequent calls are ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("library_logic_server=debug"))
        .try_init();
}

/// Persistence service stand-in holding everything in memory
#[derive(Default)]
pub struct InMemoryLibrary {
    pub books: Mutex<Vec<Book>>,
    pub loans: Mutex<Vec<Loan>>,
    pub reservations: Mutex<Vec<Reservation>>,
    pub reserves: Mutex<Vec<Reserve>>,
    pub users: Mutex<Vec<User>>,
}

impl InMemoryLibrary {
    /// Two titles: "111" with one available and one borrowed copy,
    /// "222" with a single borrowed copy. Users `anna` and `bo` exist.
    pub fn seeded() -> Arc<Self> {
        let library = Arc::new(Self::default());
        {
            let mut books = library.books.lock().unwrap();
            books.push(book(1, "111", "Dune", BookState::Available));
            books.push(book(2, "111", "Dune", BookState::Borrowed));
            books.push(book(3, "222", "Emma", BookState::Borrowed));
        }
        {
            let today = Local::now().date_naive();
            let mut loans = library.loans.lock().unwrap();
            loans.push(Loan {
                loan_id: 1,
                book_id: 2,
                username: "bo".into(),
                borrow_date: today - Duration::days(10),
                due_date: today + Duration::days(20),
                returned: false,
                extensions: 0,
            });
            loans.push(Loan {
                loan_id: 2,
                book_id: 3,
                username: "bo".into(),
                borrow_date: today - Duration::days(29),
                due_date: today + Duration::days(1),
                returned: false,
                extensions: 0,
            });
        }
        {
            let hash = hash_password(PASSWORD).unwrap();
            let mut users = library.users.lock().unwrap();
            users.push(user("anna", &hash));
            users.push(user("bo", &hash));
        }
        library
    }

    pub fn persistence(self: &Arc<Self>) -> Persistence {
        Persistence {
            books: self.clone(),
            loans: self.clone(),
            reservations: self.clone(),
            reserves: self.clone(),
            users: self.clone(),
        }
    }

    pub fn book_state(&self, id: i32) -> Option<BookState> {
        self.books.lock().unwrap().iter().find(|b| b.id == id).map(|b| b.state)
    }

    fn isbn_book_ids(&self, isbn: &str) -> Vec<i32> {
        self.books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.isbn == isbn)
            .map(|b| b.id)
            .collect()
    }
}

fn book(id: i32, isbn: &str, title: &str, state: BookState) -> Book {
    Book {
        id,
        isbn: isbn.into(),
        title: title.into(),
        author: "Author".into(),
        state,
        genres: vec![Genre { name: "Classic".into() }],
    }
}

fn user(username: &str, hash: &str) -> User {
    User {
        name: format!("{} Tester", username),
        username: username.into(),
        password: hash.into(),
        role: Role::Reader,
        phone: "12345678".into(),
        email: format!("{}@example.dk", username),
    }
}

#[async_trait]
impl BookStore for InMemoryLibrary {
    async fn all_books(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.lock().unwrap().clone())
    }

    async fn books_by_isbn(&self, isbn: &str) -> AppResult<Vec<Book>> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.isbn == isbn)
            .cloned()
            .collect())
    }

    async fn update_state(&self, id: i32, state: BookState) -> AppResult<()> {
        if let Some(book) = self.books.lock().unwrap().iter_mut().find(|b| b.id == id) {
            book.state = state;
        }
        Ok(())
    }
}

#[async_trait]
impl LoanStore for InMemoryLibrary {
    async fn create_loan(&self, loan: NewLoan) -> AppResult<Option<Loan>> {
        let mut loans = self.loans.lock().unwrap();
        let created = Loan {
            loan_id: loans.len() as i32 + 1,
            book_id: loan.book_id,
            username: loan.username,
            borrow_date: loan.borrow_date,
            due_date: loan.due_date,
            returned: false,
            extensions: 0,
        };
        loans.push(created.clone());
        Ok(Some(created))
    }

    async fn loans_by_isbn(&self, isbn: &str) -> AppResult<Vec<Loan>> {
        let ids = self.isbn_book_ids(isbn);
        Ok(self
            .loans
            .lock()
            .unwrap()
            .iter()
            .filter(|l| ids.contains(&l.book_id))
            .cloned()
            .collect())
    }

    async fn loan_by_id(&self, id: i32) -> AppResult<Option<Loan>> {
        Ok(self.loans.lock().unwrap().iter().find(|l| l.loan_id == id).cloned())
    }

    async fn extend_loan(&self, loan: &Loan) -> AppResult<()> {
        if let Some(stored) = self
            .loans
            .lock()
            .unwrap()
            .iter_mut()
            .find(|l| l.loan_id == loan.loan_id)
        {
            stored.due_date = loan.due_date;
            stored.extensions = loan.extensions;
        }
        Ok(())
    }

    async fn active_loans_by_username(&self, username: &str) -> AppResult<Vec<Loan>> {
        Ok(self
            .loans
            .lock()
            .unwrap()
            .iter()
            .filter(|l| !l.returned && l.username == username)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReservationStore for InMemoryLibrary {
    async fn create_reservation(&self, reservation: NewReservation) -> AppResult<Option<Reservation>> {
        let mut reservations = self.reservations.lock().unwrap();
        let created = Reservation {
            id: reservations.len() as i32 + 1,
            username: reservation.username,
            book_id: reservation.book_id,
            reservation_date: reservation.reservation_date,
            queue_position: 0,
        };
        reservations.push(created.clone());
        Ok(Some(created))
    }

    async fn reservations_by_isbn(&self, isbn: &str) -> AppResult<Vec<Reservation>> {
        let ids = self.isbn_book_ids(isbn);
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| ids.contains(&r.book_id))
            .cloned()
            .collect())
    }

    async fn reservation_count_by_isbn(&self, isbn: &str) -> AppResult<i32> {
        Ok(self.reservations_by_isbn(isbn).await?.len() as i32)
    }
}

#[async_trait]
impl ReserveStore for InMemoryLibrary {
    async fn create_reserve(&self, reserve: NewReserve) -> AppResult<Option<Reserve>> {
        let mut reserves = self.reserves.lock().unwrap();
        let created = Reserve {
            id: reserves.len() as i32 + 1,
            username: reserve.username,
            book_id: reserve.book_id,
            reserve_date: reserve.reserve_date,
            queue_number: reserve.queue_number,
            status: reserve.status,
        };
        reserves.push(created.clone());
        Ok(Some(created))
    }

    async fn reserves_by_isbn(&self, isbn: &str) -> AppResult<Vec<Reserve>> {
        let ids = self.isbn_book_ids(isbn);
        Ok(self
            .reserves
            .lock()
            .unwrap()
            .iter()
            .filter(|r| ids.contains(&r.book_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserStore for InMemoryLibrary {
    async fn user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, user: User) -> AppResult<Option<User>> {
        self.users.lock().unwrap().push(user.clone());
        Ok(Some(user))
    }
}

pub fn config(branch: Branch) -> AppConfig {
    let mut config = AppConfig::default();
    config.server.branch = branch;
    config
}

pub fn app_with(persistence: Persistence, branch: Branch) -> Router {
    let config = config(branch);
    let services = Services::new(persistence, &config);
    create_router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

pub fn app(library: &Arc<InMemoryLibrary>, branch: Branch) -> Router {
    app_with(library.persistence(), branch)
}

/// Bearer token signed with the default secret
pub fn token_for(username: &str, role: Role) -> String {
    let now = Utc::now().timestamp();
    UserClaims {
        sub: username.into(),
        role,
        iat: now,
        exp: now + 3600,
    }
    .create_token(&AppConfig::default().auth.jwt_secret)
    .unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn send_json(method: &str, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Send one request and return status and JSON body (`Null` when empty)
pub async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
