//! Request middleware and extractors.
//!
//! - [`auth`]: `AuthSession` extractor backed by the session store
//! - [`role`]: HOD route layer and role-check helpers
//!
//! # Authentication flow
//!
//! 1. Client sends a request carrying the `sid` cookie set at login
//! 2. `AuthSession` resolves the cookie against the `sessions` table and
//!    rejects with 401 when the session is missing or expired
//! 3. Role layers reject with 403 when the session role does not match
//! 4. The handler runs only after all checks pass

pub mod auth;
pub mod role;
