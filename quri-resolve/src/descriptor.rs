//! Connection descriptors produced by the resolver.
//!
//! A [`ConnectionDescriptor`] is a plain value: it names where the store lives
//! and which credentials to present, but it never opens anything.

use crate::scheme::Scheme;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used in place of secrets by [`ConnectionDescriptor::redacted`].
pub const REDACTED: &str = "****";

/// Characters escaped when a password is rendered into userinfo.
const USERINFO: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Characters escaped when a host is rendered. Non-ASCII is always escaped.
const HOST: &AsciiSet = &CONTROLS.add(b'%');

/// Characters escaped when a socket path is rendered.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Transport used to reach the data node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// TCP, with or without TLS.
    Tcp,
    /// Local Unix domain socket.
    Unix,
}

impl Network {
    /// Get the network name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Unix => "unix",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A plain TCP target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpOptions {
    /// `host[:port]` exactly as written in the URI authority.
    pub addr: String,
    /// Password presented with `AUTH`.
    pub password: Option<String>,
    /// Logical database index.
    pub db: u32,
}

/// A TCP target reached over TLS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsOptions {
    /// Connection target and credentials.
    #[serde(flatten)]
    pub tcp: TcpOptions,
    /// Name used to verify the server certificate.
    pub server_name: String,
}

/// A Unix domain socket target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketOptions {
    /// Socket path, not normalised.
    pub path: String,
    /// Password presented with `AUTH`.
    pub password: Option<String>,
    /// Logical database index.
    pub db: u32,
}

/// A sentinel-managed failover deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentinelOptions {
    /// Sentinel `host[:port]` tokens in the order given. Never empty.
    pub sentinel_addrs: Vec<String>,
    /// Name the sentinels use for the monitored master.
    pub master_name: String,
    /// Password for the sentinel nodes themselves.
    pub sentinel_password: Option<String>,
    /// ACL username for the resolved master or replica.
    pub username: Option<String>,
    /// Password for the resolved master or replica.
    pub password: Option<String>,
    /// Logical database index.
    pub db: u32,
}

/// Describes how to reach the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConnectionDescriptor {
    /// `redis://`
    Direct(TcpOptions),
    /// `rediss://`
    DirectTls(TlsOptions),
    /// `redis-socket://`
    UnixSocket(SocketOptions),
    /// `redis-sentinel://`
    Sentinel(SentinelOptions),
}

impl ConnectionDescriptor {
    /// Get the scheme this descriptor corresponds to.
    pub fn scheme(&self) -> Scheme {
        match self {
            Self::Direct(_) => Scheme::Redis,
            Self::DirectTls(_) => Scheme::Rediss,
            Self::UnixSocket(_) => Scheme::RedisSocket,
            Self::Sentinel(_) => Scheme::RedisSentinel,
        }
    }

    /// Get the transport used to reach the data node.
    pub fn network(&self) -> Network {
        match self {
            Self::UnixSocket(_) => Network::Unix,
            _ => Network::Tcp,
        }
    }

    /// Get the logical database index.
    pub fn db(&self) -> u32 {
        match self {
            Self::Direct(opts) => opts.db,
            Self::DirectTls(opts) => opts.tcp.db,
            Self::UnixSocket(opts) => opts.db,
            Self::Sentinel(opts) => opts.db,
        }
    }

    /// Get the password the data node is authenticated with.
    ///
    /// For sentinel deployments this is the data-node password, not the
    /// sentinel password.
    pub fn password(&self) -> Option<&str> {
        match self {
            Self::Direct(opts) => opts.password.as_deref(),
            Self::DirectTls(opts) => opts.tcp.password.as_deref(),
            Self::UnixSocket(opts) => opts.password.as_deref(),
            Self::Sentinel(opts) => opts.password.as_deref(),
        }
    }

    /// Check if this descriptor uses TLS.
    pub fn is_tls(&self) -> bool {
        matches!(self, Self::DirectTls(_))
    }

    /// Get the TLS server name, if any.
    pub fn tls_server_name(&self) -> Option<&str> {
        match self {
            Self::DirectTls(opts) => Some(opts.server_name.as_str()),
            _ => None,
        }
    }

    /// Return a copy with every password replaced by [`REDACTED`].
    pub fn redacted(&self) -> Self {
        fn mask(secret: &Option<String>) -> Option<String> {
            secret.as_ref().map(|_| REDACTED.to_string())
        }

        let mut copy = self.clone();
        match &mut copy {
            Self::Direct(opts) => opts.password = mask(&opts.password),
            Self::DirectTls(opts) => opts.tcp.password = mask(&opts.tcp.password),
            Self::UnixSocket(opts) => opts.password = mask(&opts.password),
            Self::Sentinel(opts) => {
                opts.sentinel_password = mask(&opts.sentinel_password);
                opts.password = mask(&opts.password);
            }
        }
        copy
    }

    /// Render the descriptor back into a URI.
    ///
    /// Resolving the result yields an equal descriptor, except that a TLS
    /// server name always comes back as the host of `addr`, and a relative
    /// socket path would be read back as a host.
    pub fn to_uri(&self) -> String {
        let mut uri = format!("{}://", self.scheme().name());

        match self {
            Self::Direct(opts) => push_tcp(&mut uri, opts),
            Self::DirectTls(opts) => push_tcp(&mut uri, &opts.tcp),
            Self::UnixSocket(opts) => {
                push_password(&mut uri, opts.password.as_deref());
                uri.extend(utf8_percent_encode(&opts.path, PATH));
                if opts.db != 0 {
                    uri.push_str(&format!("?db={}", opts.db));
                }
            }
            Self::Sentinel(opts) => {
                push_password(&mut uri, opts.sentinel_password.as_deref());
                for (i, addr) in opts.sentinel_addrs.iter().enumerate() {
                    if i > 0 {
                        uri.push(',');
                    }
                    uri.extend(utf8_percent_encode(addr, HOST));
                }

                let mut query = url::form_urlencoded::Serializer::new(String::new());
                query.append_pair("master", &opts.master_name);
                if let Some(ref username) = opts.username {
                    query.append_pair("username", username);
                }
                if let Some(ref password) = opts.password {
                    query.append_pair("password", password);
                }
                query.append_pair("db", &opts.db.to_string());

                uri.push('?');
                uri.push_str(&query.finish());
            }
        }

        uri
    }
}

fn push_password(uri: &mut String, password: Option<&str>) {
    if let Some(password) = password {
        uri.push(':');
        uri.extend(utf8_percent_encode(password, USERINFO));
        uri.push('@');
    }
}

fn push_tcp(uri: &mut String, opts: &TcpOptions) {
    push_password(uri, opts.password.as_deref());
    uri.extend(utf8_percent_encode(&opts.addr, HOST));
    if opts.db != 0 {
        uri.push('/');
        uri.push_str(&opts.db.to_string());
    }
}

impl fmt::Display for ConnectionDescriptor {
    /// Formats as a URI with secrets masked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted().to_uri())
    }
}
