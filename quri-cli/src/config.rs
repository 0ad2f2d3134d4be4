//! CLI configuration handling.
//!
//! Connection settings come from, in order of precedence: the positional URI,
//! `--redis-url` / `REDIS_URL`, the `url` key in `quri.toml`, the individual
//! `--redis-*` flags, the individual keys in `quri.toml`, and built-in
//! defaults.

use quri_resolve::env::expand_env;
use quri_resolve::{ConnectionDescriptor, TcpOptions, TlsOptions, resolve};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::cli::RedisArgs;
use crate::error::CliResult;

/// Default config file name (lives in the working directory)
pub const CONFIG_FILE_NAME: &str = "quri.toml";

/// Address used when neither a URI nor an address is configured
pub const DEFAULT_ADDR: &str = "127.0.0.1:6379";

/// quri CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Connection settings
    pub redis: RedisConfig,
}

/// `[redis]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Connection URI; wins over the fields below
    pub url: Option<String>,

    /// Server address as host:port
    pub addr: Option<String>,

    /// Database index
    pub db: Option<u32>,

    /// Server password
    pub password: Option<String>,

    /// TLS server name; when set the connection uses TLS
    pub tls_server_name: Option<String>,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> CliResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub async fn load(path: &Path) -> CliResult<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_toml(&content)
    }

    /// Load the explicit file, else `./quri.toml` if it exists, else defaults
    pub async fn discover(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path).await;
        }

        let default_path = Path::new(CONFIG_FILE_NAME);
        if tokio::fs::try_exists(default_path).await.unwrap_or(false) {
            debug!(path = %default_path.display(), "Loading config file");
            Self::load(default_path).await
        } else {
            Ok(Self::default())
        }
    }
}

/// The connection settings chosen from all sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A URI to expand and resolve
    Uri(String),
    /// Individual fields describing a direct connection
    Fields {
        /// Server address
        addr: String,
        /// Database index
        db: u32,
        /// Server password
        password: Option<String>,
        /// TLS server name, if TLS is wanted
        tls_server_name: Option<String>,
    },
}

impl Selection {
    /// Pick the highest-precedence settings
    pub fn choose(uri: Option<&str>, args: &RedisArgs, file: &RedisConfig) -> Self {
        if let Some(uri) = uri.or(args.redis_url.as_deref()).or(file.url.as_deref()) {
            return Self::Uri(uri.to_string());
        }

        Self::Fields {
            addr: args
                .redis_addr
                .clone()
                .or_else(|| file.addr.clone())
                .unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            db: args.redis_db.or(file.db).unwrap_or(0),
            password: args.redis_password.clone().or_else(|| file.password.clone()),
            tls_server_name: args
                .redis_tls
                .clone()
                .or_else(|| file.tls_server_name.clone()),
        }
    }

    /// Short label for logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Uri(_) => "uri",
            Self::Fields { .. } => "fields",
        }
    }

    /// Turn the selection into a descriptor
    pub fn into_descriptor(self) -> CliResult<ConnectionDescriptor> {
        match self {
            Self::Uri(uri) => Ok(resolve(&expand_env(&uri)?)?),
            Self::Fields {
                addr,
                db,
                password,
                tls_server_name,
            } => {
                let tcp = TcpOptions { addr, password, db };
                Ok(match tls_server_name {
                    Some(server_name) => {
                        ConnectionDescriptor::DirectTls(TlsOptions { tcp, server_name })
                    }
                    None => ConnectionDescriptor::Direct(tcp),
                })
            }
        }
    }
}
