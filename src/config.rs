//! Configuration management for SWAPI Explorer.
//!
//! Configuration is read once at startup from environment variables (and an
//! optional `.env` file). Command-line flags may override individual fields
//! before the values are handed to the [`Fetcher`](crate::client::Fetcher);
//! nothing changes afterwards.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default upstream API root.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/";

/// Default per-request deadline in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default bind address for the demo server.
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3000";

/// Configuration for SWAPI Explorer.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API base URL
    pub base_url: String,

    /// Request deadline in milliseconds (default: 5000)
    pub timeout_ms: u64,

    /// Emit a debug trace for every successful fetch (default: false)
    pub debug: bool,

    /// Skip TLS certificate verification (default: true)
    ///
    /// Trust-all is insecure. Set `SWAPI_ACCEPT_INVALID_CERTS=false` or pass
    /// `--verify-tls` to verify certificates.
    pub accept_invalid_certs: bool,

    /// Bind address for `serve` (default: "127.0.0.1:3000")
    pub server_addr: String,

    /// Log level used when RUST_LOG is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SWAPI_BASE_URL`: Upstream API root (default: https://swapi.dev/api/)
    /// - `REQUEST_TIMEOUT_MS`: Request deadline in milliseconds (default: 5000)
    /// - `SWAPI_DEBUG`: Enable fetch debug traces (default: false)
    /// - `SWAPI_ACCEPT_INVALID_CERTS`: Trust any TLS certificate (default: true)
    /// - `SERVER_ADDR`: Demo server bind address (default: 127.0.0.1:3000)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let base_url = env::var("SWAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::validate_base_url("SWAPI_BASE_URL", &base_url)?;

        let timeout_ms = Self::parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)?;
        Self::validate_timeout("REQUEST_TIMEOUT_MS", timeout_ms)?;

        let debug = Self::parse_env_bool("SWAPI_DEBUG", false)?;
        let accept_invalid_certs = Self::parse_env_bool("SWAPI_ACCEPT_INVALID_CERTS", true)?;

        let server_addr =
            env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            base_url,
            timeout_ms,
            debug,
            accept_invalid_certs,
            server_addr,
            log_level,
        })
    }

    /// The request deadline as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check a base URL override (from the CLI or the environment).
    pub fn validate_base_url(var: &str, url: &str) -> ConfigResult<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(())
    }

    /// Check a timeout override (from the CLI or the environment).
    pub fn validate_timeout(var: &str, timeout_ms: u64) -> ConfigResult<()> {
        if timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: var.to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => parse_bool(&val).ok_or_else(|| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be true/false, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            debug: false,
            accept_invalid_certs: true,
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: &[&str] = &[
        "SWAPI_BASE_URL",
        "REQUEST_TIMEOUT_MS",
        "SWAPI_DEBUG",
        "SWAPI_ACCEPT_INVALID_CERTS",
        "SERVER_ADDR",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://swapi.dev/api/");
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.timeout(), Duration::from_millis(5000));
        assert!(!config.debug);
        assert!(config.accept_invalid_certs);
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.accept_invalid_certs, "trust-all must stay the default");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("SWAPI_BASE_URL", "http://localhost:8080/api/");
        guard.set("REQUEST_TIMEOUT_MS", "750");
        guard.set("SWAPI_DEBUG", "yes");
        guard.set("SWAPI_ACCEPT_INVALID_CERTS", "false");

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api/");
        assert_eq!(config.timeout_ms, 750);
        assert!(config.debug);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("SWAPI_BASE_URL", "swapi.dev/api");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "SWAPI_BASE_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_zero_timeout_rejected() {
        let mut guard = EnvGuard::new();
        guard.set("REQUEST_TIMEOUT_MS", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "REQUEST_TIMEOUT_MS"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_bad_bool_rejected() {
        let mut guard = EnvGuard::new();
        guard.set("SWAPI_DEBUG", "maybe");

        let result = Config::from_env();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_SWAPI_U64", "42");

        assert_eq!(Config::parse_env_u64("TEST_SWAPI_U64", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u64("TEST_SWAPI_MISSING", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_SWAPI_U64_INVALID", "not-a-number");

        assert!(Config::parse_env_u64("TEST_SWAPI_U64_INVALID", 10).is_err());
    }

    #[test]
    fn test_parse_bool_grammar() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" on "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("Off"), Some(false));
        assert_eq!(parse_bool(""), None);
    }
}
