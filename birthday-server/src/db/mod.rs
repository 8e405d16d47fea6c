//! Database layer - connection pool, schema and the user repository
//!
//! # Design Principles
//!
//! - Connection pool shared by all requests - no Arc<Mutex<Connection>>
//! - Rely on DB constraints, handle conflicts - no check-then-insert

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool_with_options, initialize};
pub use repos::*;
