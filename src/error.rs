//! Read-error taxonomy
//!
//! Callers need to tell "the pool does not exist" apart from "the request
//! failed". Both variants carry the full lookup key so the failure is
//! diagnosable without extra context.

use thiserror::Error;

/// Failure of a single pool read
#[derive(Debug, Error)]
pub enum ReadError {
    /// The addressed pool does not exist. Terminal, not retryable.
    #[error("elastic pool {pool:?} (resource group {resource_group:?}, SQL server {server:?}) was not found")]
    NotFound {
        pool: String,
        resource_group: String,
        server: String,
    },

    /// Any other API or transport failure, wrapping the underlying cause.
    #[error("reading elastic pool {pool:?} (resource group {resource_group:?}, SQL server {server:?}) failed: {source}")]
    RequestFailed {
        pool: String,
        resource_group: String,
        server: String,
        #[source]
        source: anyhow::Error,
    },

    /// A required lookup-key attribute was empty.
    #[error("invalid lookup key: {0} must not be empty")]
    InvalidKey(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_all_three_keys() {
        let err = ReadError::NotFound {
            pool: "ghost-pool".into(),
            resource_group: "prod-rg".into(),
            server: "sql-east".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ghost-pool"));
        assert!(msg.contains("prod-rg"));
        assert!(msg.contains("sql-east"));
    }

    #[test]
    fn request_failed_keeps_the_cause() {
        let err = ReadError::RequestFailed {
            pool: "p".into(),
            resource_group: "rg".into(),
            server: "s".into(),
            source: anyhow::anyhow!("API request failed: 500"),
        };
        assert!(err.to_string().contains("500"));
    }
}
