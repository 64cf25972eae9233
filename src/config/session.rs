use std::env;

/// Session configuration.
///
/// `SESSION_TTL_HOURS` controls how long a login remains valid; the
/// default is one day. `SESSION_SECURE_COOKIES` marks the `sid` cookie
/// `Secure` so browsers only send it over HTTPS; it defaults to off for
/// plain-HTTP local development and should be on in production.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub ttl_hours: i64,
    pub secure_cookies: bool,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let ttl_hours = env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        let secure_cookies = env::var("SESSION_SECURE_COOKIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Self {
            ttl_hours,
            secure_cookies,
        }
    }
}
