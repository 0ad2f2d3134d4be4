//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// quri - resolve Redis connection URIs
#[derive(Parser, Debug)]
#[command(name = "quri")]
#[command(version)]
#[command(about = "quri - resolve Redis connection URIs", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a URI (or connection flags) into a connection descriptor
    Resolve(ResolveArgs),

    /// Check that one or more URIs resolve
    Check(CheckArgs),

    /// Display version information
    Version,
}

/// Output format for resolved descriptors
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Key/value listing
    #[default]
    Text,
    /// JSON object
    Json,
}

// =============================================================================
// Resolve Command
// =============================================================================

/// Arguments for the `resolve` command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Connection URI (takes precedence over every other source)
    ///
    /// `$VAR` and `${VAR}` references are expanded; write `$$` for a literal `$`.
    pub uri: Option<String>,

    #[command(flatten)]
    pub redis: RedisArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print passwords instead of masking them
    #[arg(long)]
    pub show_secrets: bool,

    /// Path to config file (defaults to ./quri.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Connection flags used when no URI is given
#[derive(Args, Debug, Clone, Default)]
pub struct RedisArgs {
    /// Connection URI; overrides the individual --redis-* flags
    #[arg(long, env = "REDIS_URL")]
    pub redis_url: Option<String>,

    /// Server address as host:port
    #[arg(long)]
    pub redis_addr: Option<String>,

    /// Database index
    #[arg(long)]
    pub redis_db: Option<u32>,

    /// Server password
    #[arg(long)]
    pub redis_password: Option<String>,

    /// Connect over TLS, verifying the server certificate against this name
    #[arg(long, value_name = "SERVER_NAME")]
    pub redis_tls: Option<String>,
}

// =============================================================================
// Check Command
// =============================================================================

/// Arguments for the `check` command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// URIs to check
    #[arg(required = true)]
    pub uris: Vec<String>,
}
