use std::net::SocketAddr;

pub const PORT_VAR: &str = "ARTIFACT_REDIRECT_PORT";
pub const BASE_URL_VAR: &str = "CIRCLECI_BASE_URL";

/// Service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub circleci_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            circleci_base_url: "https://circleci.com".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            let base_url = base_url.trim().trim_end_matches('/');
            if !base_url.is_empty() {
                config.circleci_base_url = base_url.to_string();
            }
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ARTIFACT_REDIRECT_PORT value: {0:?}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.circleci_base_url, "https://circleci.com");
    }

    #[test]
    fn test_overrides_from_env() {
        let config = Config::from_lookup(lookup_from(&[
            (PORT_VAR, "8081"),
            (BASE_URL_VAR, "http://localhost:9000/"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.circleci_base_url, "http://localhost:9000");
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[(PORT_VAR, "http")])).unwrap_err();
        assert!(err.to_string().contains(PORT_VAR));
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_listen_addr() {
        let config = Config::default();
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:3000");
    }
}
