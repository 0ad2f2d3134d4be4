//! # quri
//!
//! Resolve Redis connection URIs into typed connection descriptors.
//!
//! quri provides:
//! - One entry point, [`resolve`], for the `redis`, `rediss`, `redis-socket`
//!   and `redis-sentinel` schemes
//! - A plain-value [`ConnectionDescriptor`] that never opens a connection
//! - `REDIS_URL` lookup and `${VAR}` expansion before resolution
//! - Password masking for anything that ends up in logs or terminals
//!
//! ## Quick Start
//!
//! ```rust
//! use quri::prelude::*;
//!
//! # fn main() -> Result<(), quri::ResolveError> {
//! let desc = resolve("redis-sentinel://:spw@s1:26379,s2:26379?master=mymaster&db=0")?;
//!
//! match &desc {
//!     ConnectionDescriptor::Sentinel(opts) => {
//!         assert_eq!(opts.sentinel_addrs, ["s1:26379", "s2:26379"]);
//!         assert_eq!(opts.master_name, "mymaster");
//!     }
//!     other => panic!("unexpected descriptor: {other:?}"),
//! }
//!
//! // Display never shows secrets
//! assert!(!desc.to_string().contains("spw"));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Descriptor types.
pub mod descriptor {
    pub use quri_resolve::descriptor::*;
}

/// Environment lookup and variable expansion.
pub mod env {
    pub use quri_resolve::env::*;
}

/// Logging setup.
pub mod logging {
    pub use quri_resolve::logging::*;
}

/// Generic URI splitting.
pub mod uri {
    pub use quri_resolve::uri::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        ConnectionDescriptor, ResolveError, ResolveResult, Scheme, resolve, resolve_env,
        resolve_from_env,
    };
}

// Re-export key types at the crate root
pub use quri_resolve::{
    ConnectionDescriptor, DbIndexSource, Network, REDACTED, ResolveError, ResolveResult, Scheme,
    SentinelOptions, SocketOptions, TcpOptions, TlsOptions, resolve, resolve_env,
    resolve_from_env,
};
