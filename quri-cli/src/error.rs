//! CLI error types and result alias.

use miette::Diagnostic;
use quri_resolve::{ResolveError, Scheme};
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(quri::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(quri::config))]
    Config(String),

    /// URI resolution error
    #[error("{source}")]
    #[diagnostic(code(quri::resolve))]
    Resolve {
        source: ResolveError,
        #[help]
        help: Option<String>,
    },

    /// Output error
    #[error("Output error: {0}")]
    #[diagnostic(code(quri::output))]
    Output(String),

    /// Some URIs passed to `check` did not resolve
    #[error("{failed} of {total} URIs failed to resolve")]
    #[diagnostic(code(quri::check))]
    CheckFailed { failed: usize, total: usize },
}

impl From<ResolveError> for CliError {
    fn from(source: ResolveError) -> Self {
        let help = match &source {
            ResolveError::UnsupportedScheme { .. } => {
                let names: Vec<&str> = Scheme::ALL.iter().map(Scheme::name).collect();
                Some(format!("supported schemes are {}", names.join(", ")))
            }
            ResolveError::EnvNotFound(_) => {
                Some("URIs are expanded like a shell word; write `$$` for a literal `$`".into())
            }
            _ => None,
        };
        CliError::Resolve { source, help }
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(format!("Failed to serialize JSON: {}", err))
    }
}
