//! Startup-fatal configuration errors.

use thiserror::Error;

/// Errors raised while assembling the process configuration.
///
/// Every variant is fatal: the service must refuse to start rather than
/// run with undefined secrets or connection strings. Nothing here is ever
/// surfaced as a per-request failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable: {name}")]
    MissingVar { name: &'static str },

    #[error("environment variable {name} must not be empty")]
    EmptyVar { name: &'static str },

    #[error("environment variable {name} is not a valid {expected}: {value:?}")]
    InvalidVar {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}
