//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PAYABLI_PUBLIC_TOKEN` - Payabli embedded-component public token (safe for browsers)
//! - `PAYABLI_API_KEY` - Payabli server-side API key
//! - `PAYABLI_ENTRY_POINT` - Payabli paypoint entry point identifier
//! - `CHECKOUT_HASH_SECRET` - HMAC secret for checkout sessions (min 32 chars, high entropy)
//!
//! ## Optional
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 3000)
//! - `PAYABLI_ENV` - `sandbox` (default) or `production`
//! - `CHECKOUT_SESSION_MAX_AGE_SECS` - Checkout session lifetime (default: 1800)
//! - `CHECKOUT_AMOUNT_TOLERANCE` - Amount comparison tolerance (default: 0.01)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_HASH_SECRET_LENGTH: usize = 32;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 30 * 60;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Payabli processor configuration
    pub payabli: PayabliConfig,
    /// Checkout session protocol configuration
    pub checkout: CheckoutConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g., "staging", "production")
    pub sentry_environment: Option<String>,
}

/// Payabli processor environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayabliEnvironment {
    #[default]
    Sandbox,
    Production,
}

impl PayabliEnvironment {
    /// Base URL of the Payabli REST API for this environment.
    #[must_use]
    pub const fn api_base_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://api-sandbox.payabli.com",
            Self::Production => "https://api.payabli.com",
        }
    }

    /// URL of the embedded-component script served to browsers.
    #[must_use]
    pub const fn component_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://embedded-component-sandbox.payabli.com/component.js",
            Self::Production => "https://embedded-component.payabli.com/component.js",
        }
    }
}

/// Payabli API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct PayabliConfig {
    /// Embedded-component public token (sent to browsers)
    pub public_token: String,
    /// Server-side API key (never sent to clients)
    pub api_key: SecretString,
    /// Paypoint entry point identifier
    pub entry_point: String,
    /// Sandbox vs production API selection
    pub environment: PayabliEnvironment,
}

impl std::fmt::Debug for PayabliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayabliConfig")
            .field("public_token", &self.public_token)
            .field("api_key", &"[REDACTED]")
            .field("entry_point", &self.entry_point)
            .field("environment", &self.environment)
            .finish()
    }
}

/// Checkout session protocol configuration.
///
/// Implements `Debug` manually to redact the HMAC secret.
#[derive(Clone)]
pub struct CheckoutConfig {
    /// HMAC-SHA256 secret for checkout session hashes
    pub hash_secret: SecretString,
    /// How long a minted session stays valid
    pub session_max_age: Duration,
    /// Absolute tolerance when comparing processor-reported amounts
    pub amount_tolerance: Decimal,
}

impl std::fmt::Debug for CheckoutConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutConfig")
            .field("hash_secret", &"[REDACTED]")
            .field("session_max_age", &self.session_max_age)
            .field("amount_tolerance", &self.amount_tolerance)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;

        let payabli = PayabliConfig::from_env()?;
        let checkout = CheckoutConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            payabli,
            checkout,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl PayabliConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let environment = match get_env_or_default("PAYABLI_ENV", "sandbox").as_str() {
            "sandbox" => PayabliEnvironment::Sandbox,
            "production" => PayabliEnvironment::Production,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "PAYABLI_ENV".to_string(),
                    format!("expected 'sandbox' or 'production', got '{other}'"),
                ));
            }
        };

        Ok(Self {
            public_token: get_required_env("PAYABLI_PUBLIC_TOKEN")?,
            api_key: get_validated_secret("PAYABLI_API_KEY")?,
            entry_point: get_required_env("PAYABLI_ENTRY_POINT")?,
            environment,
        })
    }
}

impl CheckoutConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let hash_secret = get_validated_secret("CHECKOUT_HASH_SECRET")?;
        validate_hash_secret_length(&hash_secret, "CHECKOUT_HASH_SECRET")?;

        let max_age_secs = get_env_or_default(
            "CHECKOUT_SESSION_MAX_AGE_SECS",
            &DEFAULT_SESSION_MAX_AGE_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("CHECKOUT_SESSION_MAX_AGE_SECS".to_string(), e.to_string())
        })?;

        let amount_tolerance = get_env_or_default("CHECKOUT_AMOUNT_TOLERANCE", "0.01")
            .parse::<Decimal>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CHECKOUT_AMOUNT_TOLERANCE".to_string(), e.to_string())
            })?;

        Ok(Self {
            hash_secret,
            session_max_age: Duration::from_secs(max_age_secs),
            amount_tolerance,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that the checkout hash secret meets minimum length requirements.
fn validate_hash_secret_length(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_HASH_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_HASH_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real secrets like API keys have high entropy)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        // All same character = 0 entropy
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        // "ab" has entropy of 1 bit per char (50% a, 50% b)
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_shannon_entropy_high() {
        // Random-looking string should have high entropy
        let entropy = shannon_entropy("aB3$xY9!mK2@nL5#");
        assert!(entropy > 3.3);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-api-key-here", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_changeme() {
        let result = validate_secret_strength("changeme123", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        // High-entropy random string
        let result = validate_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_hash_secret_too_short() {
        let secret = SecretString::from("short");
        let result = validate_hash_secret_length(&secret, "TEST_HASH");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_hash_secret_valid_length() {
        let secret = SecretString::from("a".repeat(32));
        let result = validate_hash_secret_length(&secret, "TEST_HASH");
        assert!(result.is_ok());
    }

    #[test]
    fn test_payabli_environment_urls() {
        assert_eq!(
            PayabliEnvironment::Sandbox.api_base_url(),
            "https://api-sandbox.payabli.com"
        );
        assert_eq!(
            PayabliEnvironment::Production.api_base_url(),
            "https://api.payabli.com"
        );
        assert!(
            PayabliEnvironment::Sandbox
                .component_url()
                .contains("sandbox")
        );
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            payabli: PayabliConfig {
                public_token: "pub-token".to_string(),
                api_key: SecretString::from("api-key"),
                entry_point: "entry".to_string(),
                environment: PayabliEnvironment::Sandbox,
            },
            checkout: CheckoutConfig {
                hash_secret: SecretString::from("x".repeat(32)),
                session_max_age: Duration::from_secs(1800),
                amount_tolerance: Decimal::new(1, 2),
            },
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_payabli_config_debug_redacts_api_key() {
        let config = PayabliConfig {
            public_token: "public_token_value".to_string(),
            api_key: SecretString::from("super_secret_api_key"),
            entry_point: "entry_point_value".to_string(),
            environment: PayabliEnvironment::Sandbox,
        };

        let debug_output = format!("{config:?}");

        // Public fields should be visible
        assert!(debug_output.contains("public_token_value"));
        assert!(debug_output.contains("entry_point_value"));

        // Secret fields should be redacted
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_api_key"));
    }

    #[test]
    fn test_checkout_config_debug_redacts_secret() {
        let config = CheckoutConfig {
            hash_secret: SecretString::from("super_secret_hash_value"),
            session_max_age: Duration::from_secs(1800),
            amount_tolerance: Decimal::new(1, 2),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_hash_value"));
    }
}
