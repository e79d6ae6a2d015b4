//! Signup endpoint configuration
//!
//! Handles loading the endpoint, bearer credential and timeout.

use secrecy::{ExposeSecret, SecretString};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_ENDPOINT: &str =
    "https://api.challenge.hennge.com/password-validation-challenge-api/001/challenge-signup";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENDPOINT_VAR: &str = "SIGNUP_API_URL";
pub const TOKEN_VAR: &str = "SIGNUP_API_TOKEN";
pub const TOKEN_FILE_VAR: &str = "SIGNUP_API_TOKEN_FILE";
pub const TIMEOUT_VAR: &str = "SIGNUP_TIMEOUT_SECS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No bearer token: set SIGNUP_API_TOKEN or SIGNUP_API_TOKEN_FILE")]
    MissingToken,
    #[error("Invalid signup endpoint {0:?}: {1}")]
    InvalidEndpoint(String, url::ParseError),
    #[error("Invalid timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
    #[error("Token file not found: {0}")]
    TokenFileNotFound(PathBuf),
    #[error("Failed to read token file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Token file is empty")]
    EmptyTokenFile,
}

/// Where and how signup requests are sent.
#[derive(Debug)]
pub struct SignupConfig {
    pub endpoint: Url,
    pub bearer_token: SecretString,
    pub timeout: Duration,
}

impl SignupConfig {
    /// Builds a config for `endpoint` with the default timeout.
    pub fn new(endpoint: &str, bearer_token: SecretString) -> Result<Self, ConfigError> {
        if bearer_token.expose_secret().trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            bearer_token,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads the config from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `SIGNUP_API_URL`: endpoint (default: [`DEFAULT_ENDPOINT`])
    /// - `SIGNUP_API_TOKEN`: bearer token
    /// - `SIGNUP_API_TOKEN_FILE`: file holding the bearer token, read when
    ///   `SIGNUP_API_TOKEN` is unset
    /// - `SIGNUP_TIMEOUT_SECS`: request timeout (default: 30)
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No token is configured, or the token file is missing, unreadable or empty
    /// - The endpoint is not a valid URL
    /// - The timeout is not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = std::env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let bearer_token = match std::env::var(TOKEN_VAR) {
            Ok(token) if !token.trim().is_empty() => SecretString::new(token.trim().into()),
            Ok(_) => return Err(ConfigError::MissingToken),
            Err(_) => match std::env::var(TOKEN_FILE_VAR) {
                Ok(path) => read_token_file(&path)?,
                Err(_) => return Err(ConfigError::MissingToken),
            },
        };

        let timeout = match std::env::var(TIMEOUT_VAR) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        let config = Self::new(&endpoint, bearer_token)?.with_timeout(timeout);

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Signup config loaded: endpoint {} timeout {:?}",
            config.endpoint,
            config.timeout
        );

        Ok(config)
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint(raw.to_string(), e))
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

/// Reads a bearer token from a file, ignoring surrounding whitespace.
pub fn read_token_file<P: AsRef<Path>>(path: P) -> Result<SecretString, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Token file not found: {:?}", path);
        return Err(ConfigError::TokenFileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let token = content.trim();

    if token.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Token file is empty: {:?}", path);
        return Err(ConfigError::EmptyTokenFile);
    }

    Ok(SecretString::new(token.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn clear_env() {
        for key in [ENDPOINT_VAR, TOKEN_VAR, TOKEN_FILE_VAR, TIMEOUT_VAR] {
            remove_env(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        set_env(TOKEN_VAR, "test-token");

        let config = SignupConfig::from_env().expect("config should load");
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.bearer_token.expose_secret(), "test-token");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env(ENDPOINT_VAR, "http://localhost:8080/signup");
        set_env(TOKEN_VAR, "  padded-token\n");
        set_env(TIMEOUT_VAR, "5");

        let config = SignupConfig::from_env().expect("config should load");
        assert_eq!(config.endpoint.as_str(), "http://localhost:8080/signup");
        assert_eq!(config.bearer_token.expose_secret(), "padded-token");
        assert_eq!(config.timeout, Duration::from_secs(5));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_token() {
        clear_env();

        let result = SignupConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingToken)));

        set_env(TOKEN_VAR, "   ");
        let result = SignupConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingToken)));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_endpoint() {
        clear_env();
        set_env(TOKEN_VAR, "test-token");
        set_env(ENDPOINT_VAR, "not a url");

        let result = SignupConfig::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidEndpoint(_, _))));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        clear_env();
        set_env(TOKEN_VAR, "test-token");

        for raw in ["0", "-3", "soon"] {
            set_env(TIMEOUT_VAR, raw);
            let result = SignupConfig::from_env();
            assert!(matches!(result, Err(ConfigError::InvalidTimeout(_))), "timeout {:?}", raw);
        }

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_token_file() {
        clear_env();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "file-token").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env(TOKEN_FILE_VAR, path);

        let config = SignupConfig::from_env().expect("config should load");
        assert_eq!(config.bearer_token.expose_secret(), "file-token");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_token_var_takes_priority_over_file() {
        clear_env();
        set_env(TOKEN_VAR, "env-token");
        set_env(TOKEN_FILE_VAR, "/nonexistent/path/token");

        let config = SignupConfig::from_env().expect("config should load");
        assert_eq!(config.bearer_token.expose_secret(), "env-token");

        clear_env();
    }

    #[test]
    fn test_read_token_file_not_found() {
        let result = read_token_file("/nonexistent/path/token");
        match result {
            Err(ConfigError::TokenFileNotFound(_)) => {}
            _ => panic!("Expected TokenFileNotFound error"),
        }
    }

    #[test]
    fn test_read_token_file_empty() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n").expect("Failed to write");

        let result = read_token_file(temp_file.path());
        assert!(matches!(result, Err(ConfigError::EmptyTokenFile)));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let config = SignupConfig::new(
            DEFAULT_ENDPOINT,
            SecretString::new("super-secret".to_string().into()),
        )
        .expect("config should build");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
