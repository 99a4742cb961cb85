//! Server configuration loaded from the environment.

use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Tracing filter directive, e.g. `info` or `mock_server=debug`.
    pub log_level: String,
}

impl ServerConfig {
    /// Load configuration from environment variables, reading `.env` first
    /// when present. An unparsable `PORT` falls back to 3000.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self { port, log_level }
    }

    pub fn addr(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_binds_loopback() {
        let config = ServerConfig {
            port: 8080,
            log_level: "info".to_string(),
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }
}
