//! birthday-server: stores dates of birth and greets users
//!
//! `PUT /hello/{username}` saves a birthdate, `GET /hello/{username}` returns
//! the days left until the next birthday. `/livez` and `/readyz` are probes.

pub mod clock;
pub mod config;
pub mod db;
pub mod greeting;
pub mod http;
pub mod models;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AppConfig, Args, ConfigError};
pub use http::{build_router, run_server, AppState};
