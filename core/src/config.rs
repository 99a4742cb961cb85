//! Client configuration loaded from the environment.

use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the backend. Empty means root-relative paths.
    pub base_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables, reading `.env` first
    /// when present.
    ///
    /// `MARS_API_URL` selects the backend origin.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("MARS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self { base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Client;

    #[test]
    fn default_points_at_local_mock_server() {
        assert_eq!(ClientConfig::default().base_url, "http://localhost:3000");
    }

    // Set and unset in one test: the environment is process-wide and tests
    // run in parallel.
    #[test]
    fn from_env_reads_base_url_and_falls_back_when_unset() {
        env::set_var("MARS_API_URL", "http://mars.example:8080/");
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://mars.example:8080/");

        let client = Client::from_config(&config);
        assert_eq!(client.codec().base_url(), "http://mars.example:8080");
        assert_eq!(
            client.codec().build_get_info().path,
            "http://mars.example:8080/api/info/"
        );

        env::remove_var("MARS_API_URL");
        let config = ClientConfig::from_env();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(
            Client::from_config(&config).codec().build_get_user().path,
            "http://localhost:3000/api/user/"
        );
    }
}
