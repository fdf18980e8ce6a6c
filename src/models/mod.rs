//! Data models for the logic server

pub mod book;
pub mod loan;
pub mod reservation;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookState, BookSummary, Genre};
pub use loan::{Loan, LoanDto, NewLoan};
pub use reservation::{NewReservation, NewReserve, Reservation, Reserve};
pub use user::{Role, User, UserClaims};
