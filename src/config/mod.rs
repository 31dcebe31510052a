//! Service configuration.
//!
//! # Responsibilities
//! - Read the listen address and store connection URL from CLI flags or
//!   the process environment (flags win)
//! - Semantic validation (store URL scheme must be one we can open)
//!
//! # Design Decisions
//! - No config files: the service carries exactly two settings
//! - Validation is a pure function over the parsed config

use clap::Parser;
use std::net::SocketAddr;
use url::Url;

/// Runtime configuration for the phonebook server.
#[derive(Debug, Clone, Parser)]
#[command(name = "phonebook", about = "Phonebook REST service")]
pub struct ServiceConfig {
    /// Socket address to listen on.
    #[arg(long, env = "PHONEBOOK_ADDR", default_value = "0.0.0.0:3001")]
    pub bind_address: SocketAddr,

    /// Contact store connection URL: `memory:` for an in-process store,
    /// `file:///path/to/contacts.json` for the document file store.
    #[arg(long, env = "PHONEBOOK_URL", default_value = "memory:")]
    pub store_url: Url,
}

/// Error type for configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported store url scheme `{0}`, expected `memory` or `file`")]
    UnsupportedScheme(String),
}

impl ServiceConfig {
    /// Check the parts serde/clap cannot: scheme must name a known backend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.store_url.scheme() {
            "memory" | "file" => Ok(()),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let config = ServiceConfig::try_parse_from(["phonebook"]).unwrap();
        assert_eq!(config.bind_address.port(), 3001);
        assert_eq!(config.store_url.scheme(), "memory");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServiceConfig::try_parse_from([
            "phonebook",
            "--bind-address",
            "127.0.0.1:8080",
            "--store-url",
            "file:///tmp/contacts.json",
        ])
        .unwrap();
        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(config.store_url.scheme(), "file");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_scheme_fails_validation() {
        let config = ServiceConfig::try_parse_from([
            "phonebook",
            "--store-url",
            "postgres://localhost/phonebook",
        ])
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedScheme(s)) if s == "postgres"
        ));
    }

    #[test]
    fn malformed_bind_address_is_rejected() {
        assert!(
            ServiceConfig::try_parse_from(["phonebook", "--bind-address", "not-an-addr"]).is_err()
        );
    }
}
