//! Startup configuration
//!
//! The connection descriptor is resolved exactly once here and treated as
//! immutable afterwards; handlers only ever see the pool built from it.

use std::net::SocketAddr;

/// Configuration error, fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no database connection string: pass --database-url or set DATABASE_URL")]
    MissingDatabaseUrl,
}

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// Raw connection descriptor, attribute or URL form
    pub database_url: String,
}

impl AppConfig {
    /// Resolve configuration from an optional flag value, falling back to
    /// the `DATABASE_URL` environment variable.
    pub fn resolve(
        bind_addr: SocketAddr,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::from_parts(bind_addr, database_url, std::env::var("DATABASE_URL").ok())
    }

    fn from_parts(
        bind_addr: SocketAddr,
        flag: Option<String>,
        env: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = flag.or(env).ok_or(ConfigError::MissingDatabaseUrl)?;
        Ok(Self {
            bind_addr,
            database_url,
        })
    }
}
