//! Resolving URIs from the environment.
//!
//! A URI read from a variable may itself reference other variables, so a
//! deployment can keep the password out of the URL:
//!
//! ```rust
//! use quri_resolve::env::{Interpolator, MapVars};
//!
//! let vars = MapVars::new()
//!     .set("REDIS_URL", "redis://:${REDIS_PASSWORD}@cache:6379/1")
//!     .set("REDIS_PASSWORD", "hunter2");
//! let desc = Interpolator::with_source(vars).resolve_var("REDIS_URL").unwrap();
//! assert_eq!(desc.password(), Some("hunter2"));
//! ```
//!
//! Supported references:
//! - `$NAME`, `${NAME}` - value of `NAME`; error when unset
//! - `${NAME:-word}` - `word` when `NAME` is unset or empty
//! - `${NAME:?message}` - error with `message` when `NAME` is unset or empty
//! - `${NAME:+word}` - `word` when `NAME` is set and non-empty, else nothing
//! - `$$` - a literal `$`

use crate::descriptor::ConnectionDescriptor;
use crate::error::{ResolveError, ResolveResult};
use crate::resolver::resolve;
use std::collections::HashMap;
use tracing::debug;

/// Variable conventionally holding the store URI.
pub const REDIS_URL: &str = "REDIS_URL";

/// Where variable values come from.
pub trait VarSource: Send + Sync {
    /// Look up a variable.
    fn get(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessVars;

impl VarSource for ProcessVars {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A fixed set of variables, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapVars {
    vars: HashMap<String, String>,
}

impl MapVars {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl VarSource for MapVars {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Expands variable references and resolves URIs held in variables.
#[derive(Debug, Clone, Default)]
pub struct Interpolator<S: VarSource = ProcessVars> {
    source: S,
}

impl Interpolator<ProcessVars> {
    /// Create an interpolator over the process environment.
    pub fn new() -> Self {
        Self {
            source: ProcessVars,
        }
    }
}

impl<S: VarSource> Interpolator<S> {
    /// Create an interpolator over a custom source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Expand every variable reference in `input`.
    pub fn expand(&self, input: &str) -> ResolveResult<String> {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            if let Some(tail) = after.strip_prefix('$') {
                out.push('$');
                rest = tail;
            } else if let Some(body) = after.strip_prefix('{') {
                let end = body.find('}').ok_or_else(|| ResolveError::InvalidEnvValue {
                    name: body.chars().take_while(|c| *c != ':').collect(),
                    message: "unterminated variable reference".to_string(),
                })?;
                out.push_str(&self.expand_braced(&body[..end])?);
                rest = &body[end + 1..];
            } else {
                let len = identifier_len(after);
                if len == 0 {
                    out.push('$');
                } else {
                    let name = &after[..len];
                    let value = self
                        .source
                        .get(name)
                        .ok_or_else(|| ResolveError::EnvNotFound(name.to_string()))?;
                    out.push_str(&value);
                }
                rest = &after[len..];
            }
        }

        out.push_str(rest);
        Ok(out)
    }

    fn expand_braced(&self, body: &str) -> ResolveResult<String> {
        let (name, op) = match body.split_once(':') {
            Some((name, op)) => (name, Some(op)),
            None => (body, None),
        };
        if name.is_empty() {
            return Err(ResolveError::InvalidEnvValue {
                name: String::new(),
                message: "empty variable name".to_string(),
            });
        }

        let value = self.source.get(name);
        let Some(op) = op else {
            return value.ok_or_else(|| ResolveError::EnvNotFound(name.to_string()));
        };

        let is_set = value.as_deref().is_some_and(|v| !v.is_empty());
        let mut chars = op.chars();
        let modifier = chars.next();
        let word = chars.as_str();

        match modifier {
            Some('-') if is_set => Ok(value.unwrap_or_default()),
            Some('-') => Ok(word.to_string()),
            Some('?') if is_set => Ok(value.unwrap_or_default()),
            Some('?') => Err(ResolveError::InvalidEnvValue {
                name: name.to_string(),
                message: if word.is_empty() {
                    format!("required variable '{name}' is not set")
                } else {
                    word.to_string()
                },
            }),
            Some('+') if is_set => Ok(word.to_string()),
            Some('+') => Ok(String::new()),
            _ => Err(ResolveError::InvalidEnvValue {
                name: name.to_string(),
                message: format!("unsupported modifier ':{op}'"),
            }),
        }
    }

    /// Read `var`, expand references inside it and resolve the result.
    pub fn resolve_var(&self, var: &str) -> ResolveResult<ConnectionDescriptor> {
        let raw = self
            .source
            .get(var)
            .ok_or_else(|| ResolveError::EnvNotFound(var.to_string()))?;
        debug!(var, "Resolving URI from environment");
        resolve(&self.expand(&raw)?)
    }
}

/// Length of the `[A-Za-z_][A-Za-z0-9_]*` prefix of `s`.
fn identifier_len(s: &str) -> usize {
    s.char_indices()
        .find(|&(i, c)| !(c == '_' || c.is_ascii_alphabetic() || (i > 0 && c.is_ascii_digit())))
        .map_or(s.len(), |(i, _)| i)
}

/// Expand variable references using the process environment.
pub fn expand_env(input: &str) -> ResolveResult<String> {
    Interpolator::new().expand(input)
}

/// Resolve the URI held in the environment variable `var`.
pub fn resolve_env(var: &str) -> ResolveResult<ConnectionDescriptor> {
    Interpolator::new().resolve_var(var)
}

/// Resolve the URI held in `REDIS_URL`.
pub fn resolve_from_env() -> ResolveResult<ConnectionDescriptor> {
    resolve_env(REDIS_URL)
}
