//! Client configuration loaded from environment variables.

const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Where the client finds the backend.
///
/// Reads from environment variables:
/// - `BACKEND_URL`: server base URL (default: `"http://localhost:3000"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: String,
}

impl ClientConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_backend_url(std::env::var("BACKEND_URL").ok())
    }

    fn from_backend_url(value: Option<String>) -> Self {
        let backend_url = value
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        Self { backend_url }
    }

    /// Base URL of the institutions resource.
    pub fn institutions_url(&self) -> String {
        format!("{}/instituicoes", self.backend_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ClientConfig::default();
        assert_eq!(config.backend_url, "http://localhost:3000");
        assert_eq!(
            config.institutions_url(),
            "http://localhost:3000/instituicoes"
        );
    }

    #[test]
    fn test_unset_or_blank_falls_back_to_default() {
        assert_eq!(ClientConfig::from_backend_url(None), ClientConfig::default());
        assert_eq!(
            ClientConfig::from_backend_url(Some("  ".to_string())),
            ClientConfig::default()
        );
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ClientConfig::from_backend_url(Some("http://api:8080/".to_string()));
        assert_eq!(config.institutions_url(), "http://api:8080/instituicoes");
    }
}
