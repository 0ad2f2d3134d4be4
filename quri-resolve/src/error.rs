//! Error types for URI resolution.
//!
//! Every failure is local and returned immediately; resolution performs no
//! I/O, so nothing here is ever retried.
//!
//! ```rust
//! use quri_resolve::{ResolveError, resolve};
//!
//! let err = resolve("ftp://host").unwrap_err();
//! assert!(matches!(err, ResolveError::UnsupportedScheme { ref scheme } if scheme == "ftp"));
//! ```

use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Where a database index was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbIndexSource {
    /// First segment of the URI path (`redis://host/3`).
    Path,
    /// The `db` query parameter (`redis-socket:///tmp/redis.sock?db=3`).
    Query,
}

impl fmt::Display for DbIndexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Path => {
                "could not parse redis uri: database number should be the first segment of the path"
            }
            Self::Query => "could not parse redis socket uri: query param `db` should be a number",
        };
        f.write_str(message)
    }
}

/// Errors that can occur while resolving a connection URI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The input is not syntactically a URI.
    #[error("could not parse redis uri: {0}")]
    MalformedUri(String),

    /// The scheme is not one of `redis`, `rediss`, `redis-socket`, `redis-sentinel`.
    #[error("unsupported uri scheme: {scheme:?}")]
    UnsupportedScheme {
        /// The scheme token as it appeared in the input.
        scheme: String,
    },

    /// A database index did not parse as a non-negative base-10 integer.
    #[error("{context}")]
    InvalidDatabaseIndex {
        /// Path or query, for diagnostics.
        context: DbIndexSource,
    },

    /// A `redis-socket` URI without a socket path.
    #[error("could not parse redis socket uri: path does not exist")]
    MissingSocketPath,

    /// The sentinel `db` parameter was missing or not a number.
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    /// Environment variable not found.
    #[error("environment variable not found: {0}")]
    EnvNotFound(String),

    /// Invalid environment variable reference or value.
    #[error("invalid environment variable '{name}': {message}")]
    InvalidEnvValue { name: String, message: String },
}

impl ResolveError {
    /// Create a malformed-URI error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedUri(reason.into())
    }

    /// Create an unsupported-scheme error.
    pub fn unsupported_scheme(scheme: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.into(),
        }
    }
}
