/**
 * Server Configuration
 *
 * Configuration is read from the environment once at startup. Missing
 * required values are a `ConfigurationError` and abort the process; nothing
 * here is re-read per request.
 *
 * # Variables
 *
 * - `DATABASE_URL` (required) - PostgreSQL connection string
 * - `JWT_SECRET` (required) - token signing secret; rotating it invalidates
 *   all outstanding tokens
 * - `TOKEN_TTL_SECS` (default 300) - bearer token lifetime
 * - `SERVER_PORT` (default 3000)
 */

use crate::error::ApiError;

/// Default token lifetime: five minutes, forcing frequent re-authentication
/// since there is no refresh mechanism.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 300;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ApiError> {
        let database_url = require_var("DATABASE_URL")?;
        let jwt_secret = require_var("JWT_SECRET")?;

        let token_ttl_secs = parse_var("TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        let port = parse_var("SERVER_PORT", DEFAULT_PORT)?;

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl_secs,
            port,
        })
    }
}

fn require_var(name: &str) -> Result<String, ApiError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Config(format!("{name} is not set")))
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ApiError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ApiError::Config(format!("{name} has an invalid value: {raw}"))),
        Err(_) => Ok(default),
    }
}
