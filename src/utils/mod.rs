//! Shared utilities used throughout the application:
//!
//! - [`errors`]: Application error type and status mapping
//! - [`password`]: Password hashing and verification
//! - [`session`]: Server-side session store operations

pub mod errors;
pub mod password;
pub mod session;
