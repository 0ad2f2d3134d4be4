//! Connection URI resolution for Redis-backed task queues.
//!
//! One textual setting selects the whole connection topology. [`resolve`]
//! classifies a URI by scheme and returns a [`ConnectionDescriptor`]:
//!
//! | Scheme | Descriptor |
//! |--------|------------|
//! | `redis://[:password@]host[:port][/db]` | [`ConnectionDescriptor::Direct`] |
//! | `rediss://[:password@]host[:port][/db]` | [`ConnectionDescriptor::DirectTls`] |
//! | `redis-socket://[:password@]path[?db=N]` | [`ConnectionDescriptor::UnixSocket`] |
//! | `redis-sentinel://[:password@]h1[:port][,h2[:port]...][?master=M&username=U&password=P&db=N]` | [`ConnectionDescriptor::Sentinel`] |
//!
//! Resolution is pure: no I/O, no shared state, safe to call from any thread.
//!
//! # Examples
//!
//! ```rust
//! use quri_resolve::{ConnectionDescriptor, Network, resolve};
//!
//! let desc = resolve("rediss://localhost:6380").unwrap();
//! assert_eq!(desc.tls_server_name(), Some("localhost"));
//! assert_eq!(desc.network(), Network::Tcp);
//!
//! let desc = resolve("redis-sentinel://h1:26379,h2:26379?master=mymaster&db=0").unwrap();
//! match desc {
//!     ConnectionDescriptor::Sentinel(opts) => {
//!         assert_eq!(opts.sentinel_addrs, ["h1:26379", "h2:26379"]);
//!         assert_eq!(opts.master_name, "mymaster");
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! # Errors
//!
//! ```rust
//! use quri_resolve::{ResolveError, resolve};
//!
//! assert!(matches!(resolve("redis-socket://"), Err(ResolveError::MissingSocketPath)));
//!
//! // Sentinel URIs have no default database.
//! assert!(matches!(
//!     resolve("redis-sentinel://host1?master=mymaster"),
//!     Err(ResolveError::ParseInt(_))
//! ));
//! ```

pub mod descriptor;
pub mod env;
pub mod error;
pub mod logging;
pub mod scheme;
pub mod uri;

mod resolver;

pub use descriptor::{
    ConnectionDescriptor, Network, REDACTED, SentinelOptions, SocketOptions, TcpOptions,
    TlsOptions,
};
pub use env::{resolve_env, resolve_from_env};
pub use error::{DbIndexSource, ResolveError, ResolveResult};
pub use resolver::resolve;
pub use scheme::Scheme;
