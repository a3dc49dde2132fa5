//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the auction backend the client's `/api` calls are proxied to
    /// Example: http://localhost:8080
    pub api_url: Option<String>,

    /// Secret key for signing cookies
    /// Should be a long random string in production
    pub secret_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("API_URL").ok(),
            secret_key: std::env::var("SECRET_KEY").ok(),
        }
    }

    /// Check if a backend API is configured
    pub fn has_api(&self) -> bool {
        self.api_url.is_some()
    }

    /// Check if secret key is configured
    pub fn has_secret_key(&self) -> bool {
        self.secret_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            api_url: Some("http://localhost:8080".to_string()),
            secret_key: Some("super-secret-key-123".to_string()),
        };

        assert_eq!(config.api_url, Some("http://localhost:8080".to_string()));
        assert_eq!(config.secret_key, Some("super-secret-key-123".to_string()));
        assert!(config.has_api());
        assert!(config.has_secret_key());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config {
            api_url: None,
            secret_key: None,
        };

        assert!(!config.has_api());
        assert!(!config.has_secret_key());
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();

        let _ = config.has_api();
        let _ = config.has_secret_key();
    }
}
