//! Error types for poke-dl
//!
//! This module provides the error handling for the library, including:
//! - Query validation errors detected before any network activity
//! - Per-identifier fetch failures (transport, not-found, decode)
//! - A serializable failure summary for structured output

use serde::Serialize;
use thiserror::Error;

/// Result type alias for poke-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for poke-dl
///
/// This is the primary error type returned by top-level operations. Each variant
/// includes contextual information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Query validation error (malformed or out-of-range input)
    #[error("invalid query: {0}")]
    Query(#[from] QueryError),

    /// Fetch failure that is fatal to the invocation (single-identifier modes)
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL is not a valid URL
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Query validation errors
///
/// All variants are detected before any network call is made and abort the
/// invocation immediately.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Range string does not match the `<low>-<high>` shape
    #[error("invalid range format '{input}': must be <number>-<number>")]
    Malformed {
        /// The range string as provided
        input: String,
    },

    /// One of the range bounds is not a parseable integer
    #[error("invalid range bound '{bound}': not a number")]
    NonNumericBound {
        /// The bound token that failed to parse
        bound: String,
    },

    /// Lower bound is greater than upper bound
    #[error("invalid range: lower bound {low} is greater than upper bound {high}")]
    Inverted {
        /// The lower bound as provided
        low: u16,
        /// The upper bound as provided
        high: u16,
    },

    /// Bounds fall outside the remote service's valid index space
    #[error("range {low}-{high} is out of bounds: both bounds must be between 1 and {max}")]
    OutOfBounds {
        /// The lower bound as provided
        low: u16,
        /// The upper bound as provided
        high: u16,
        /// The maximum valid index
        max: u16,
    },

    /// Number lookup outside the remote service's valid index space
    #[error("number {number} is out of bounds: must be between 1 and {max}")]
    NumberOutOfBounds {
        /// The number as provided
        number: u16,
        /// The maximum valid index
        max: u16,
    },

    /// Name lookup with an empty name
    #[error("name must not be empty")]
    EmptyName,
}

/// Per-identifier fetch failures
///
/// Each variant carries the offending identifier so that range-mode batches can
/// report which entries failed alongside the assembled successes.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection, timeout)
    #[error("network error fetching '{identifier}': {source}")]
    Transport {
        /// The identifier whose request failed
        identifier: String,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Remote returned a non-success status for the identifier
    #[error("no pokemon found for '{identifier}' (status {status})")]
    NotFound {
        /// The identifier the remote did not recognize
        identifier: String,
        /// The HTTP status code returned
        status: u16,
    },

    /// Response body did not decode into the expected record shape
    #[error("malformed response body for '{identifier}': {source}")]
    Decode {
        /// The identifier whose response was malformed
        identifier: String,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The spawned fetch task was aborted or panicked before producing an outcome
    #[error("fetch task for '{identifier}' did not complete: {source}")]
    Task {
        /// The identifier whose task failed
        identifier: String,
        /// The underlying join error
        #[source]
        source: tokio::task::JoinError,
    },
}

impl FetchError {
    /// The identifier this failure belongs to
    pub fn identifier(&self) -> &str {
        match self {
            Self::Transport { identifier, .. }
            | Self::NotFound { identifier, .. }
            | Self::Decode { identifier, .. }
            | Self::Task { identifier, .. } => identifier,
        }
    }
}

/// Serializable summary of one fetch failure, used in structured output
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FailureReport {
    /// The identifier that failed
    pub identifier: String,
    /// Human-readable reason for the failure
    pub reason: String,
}

impl From<&FetchError> for FailureReport {
    fn from(err: &FetchError) -> Self {
        Self {
            identifier: err.identifier().to_string(),
            reason: err.to_string(),
        }
    }
}
