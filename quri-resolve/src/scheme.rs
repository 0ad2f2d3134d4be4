//! Recognized URI schemes.

use crate::error::{ResolveError, ResolveResult};
use serde::{Deserialize, Serialize};

/// URI scheme selecting the connection topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    /// `redis://` - plain TCP.
    Redis,
    /// `rediss://` - TCP over TLS.
    Rediss,
    /// `redis-socket://` - Unix domain socket.
    RedisSocket,
    /// `redis-sentinel://` - sentinel-managed failover.
    RedisSentinel,
}

impl Scheme {
    /// All recognized schemes, in dispatch order.
    pub const ALL: [Scheme; 4] = [
        Self::Redis,
        Self::Rediss,
        Self::RedisSocket,
        Self::RedisSentinel,
    ];

    /// Get the scheme token.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Redis => "redis",
            Self::Rediss => "rediss",
            Self::RedisSocket => "redis-socket",
            Self::RedisSentinel => "redis-sentinel",
        }
    }

    /// Whether the scheme implies a TLS session.
    pub fn is_tls(&self) -> bool {
        matches!(self, Self::Rediss)
    }

    /// Parse a scheme token. Matching is exact and case-sensitive.
    pub fn from_scheme(scheme: &str) -> ResolveResult<Self> {
        match scheme {
            "redis" => Ok(Self::Redis),
            "rediss" => Ok(Self::Rediss),
            "redis-socket" => Ok(Self::RedisSocket),
            "redis-sentinel" => Ok(Self::RedisSentinel),
            other => Err(ResolveError::unsupported_scheme(other)),
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Scheme {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_scheme(s)
    }
}
