//! Logging setup for binaries embedding the resolver.
//!
//! The library itself only emits `tracing` events. Binaries that want them
//! printed call [`init`] once at startup (requires the `tracing-subscriber`
//! feature); it reads:
//!
//! - `QURI_DEBUG=true|1|yes` - debug level
//! - `QURI_LOG_LEVEL=trace|debug|info|warn|error` - explicit level
//! - `QURI_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! When neither `QURI_DEBUG` nor `QURI_LOG_LEVEL` is set, nothing is installed.
//!
//! ```rust,no_run
//! quri_resolve::logging::init();
//! ```
//!
//! Credentials are never logged; events carry the scheme, network and
//! database index only.

use crate::env::{ProcessVars, VarSource};
use std::sync::Once;

static INIT: Once = Once::new();

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line, human-oriented.
    Pretty,
    /// Single-line, human-oriented.
    Compact,
}

/// Settings derived from the `QURI_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Whether any subscriber should be installed.
    pub enabled: bool,
    /// Level directive (`trace` .. `error`).
    pub level: &'static str,
    /// Output format.
    pub format: LogFormat,
}

impl LogSettings {
    /// Read settings from a variable source.
    pub fn from_vars(vars: &impl VarSource) -> Self {
        let debug = vars
            .get("QURI_DEBUG")
            .is_some_and(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"));
        let explicit = vars.get("QURI_LOG_LEVEL");

        let level = match explicit.as_deref().map(str::to_lowercase).as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ if debug => "debug",
            _ => "warn",
        };

        let format = match vars.get("QURI_LOG_FORMAT").map(|f| f.to_lowercase()).as_deref() {
            Some("pretty") => LogFormat::Pretty,
            Some("compact") => LogFormat::Compact,
            _ => LogFormat::Json,
        };

        Self {
            enabled: debug || explicit.is_some(),
            level,
            format,
        }
    }
}

/// Install a global subscriber according to the `QURI_*` variables.
///
/// Subsequent calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        let settings = LogSettings::from_vars(&ProcessVars);
        if !settings.enabled {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(format!(
                "quri={level},quri_resolve={level},quri_cli={level}",
                level = settings.level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            // stdout carries command output
            let layer = fmt::layer().with_writer(std::io::stderr);
            let registry = tracing_subscriber::registry().with(filter);
            match settings.format {
                LogFormat::Json => registry.with(layer.json()).init(),
                LogFormat::Compact => registry.with(layer.compact()).init(),
                LogFormat::Pretty => registry.with(layer.pretty()).init(),
            }

            tracing::info!(
                level = settings.level,
                format = ?settings.format,
                "quri logging initialized"
            );
        }
    });
}
