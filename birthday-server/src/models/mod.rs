//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod birthdate;
pub mod username;
pub mod validation;

pub use birthdate::{is_future, parse_date, Birthdate};
pub use username::Username;
pub use validation::ValidationError;
