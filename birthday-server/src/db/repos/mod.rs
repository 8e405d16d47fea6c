//! Repository implementations for database access
//!
//! Conflicts are handled via ON CONFLICT (no check-then-insert).

pub mod users;

pub use users::{DbError, PgUserStore, UserStore};
