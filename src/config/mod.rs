//! Configuration modules, typically loaded from environment variables.
//!
//! - [`cors`]: Allowed origins for cross-origin requests
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`session`]: Session lifetime settings

pub mod cors;
pub mod database;
pub mod session;
