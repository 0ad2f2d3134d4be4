//! Scheme dispatch and per-scheme field extraction.

use crate::descriptor::{
    ConnectionDescriptor, SentinelOptions, SocketOptions, TcpOptions, TlsOptions,
};
use crate::error::{DbIndexSource, ResolveError, ResolveResult};
use crate::scheme::Scheme;
use crate::uri::{self, SplitUri};
use tracing::debug;

/// Resolve a connection URI into a [`ConnectionDescriptor`].
///
/// Supported formats:
///
/// ```text
/// redis://[:password@]host[:port][/db]
/// rediss://[:password@]host[:port][/db]
/// redis-socket://[:password@]path[?db=N]
/// redis-sentinel://[:password@]host1[:port][,host2[:port]...][?master=NAME&username=U&password=P&db=N]
/// ```
///
/// # Examples
///
/// ```rust
/// use quri_resolve::{ConnectionDescriptor, resolve};
///
/// let desc = resolve("redis://:secret@localhost:6379/2").unwrap();
/// let ConnectionDescriptor::Direct(opts) = desc else { unreachable!() };
/// assert_eq!(opts.addr, "localhost:6379");
/// assert_eq!(opts.password.as_deref(), Some("secret"));
/// assert_eq!(opts.db, 2);
/// ```
pub fn resolve(uri: &str) -> ResolveResult<ConnectionDescriptor> {
    debug!(uri_len = uri.len(), "resolve()");
    let split = uri::split(uri)?;
    let scheme = Scheme::from_scheme(&split.scheme)?;

    let descriptor = match scheme {
        Scheme::Redis | Scheme::Rediss => extract_direct(scheme, &split)?,
        Scheme::RedisSocket => extract_socket(&split)?,
        Scheme::RedisSentinel => extract_sentinel(&split)?,
    };

    debug!(
        scheme = %scheme,
        network = %descriptor.network(),
        db = descriptor.db(),
        "URI resolved"
    );
    Ok(descriptor)
}

impl std::str::FromStr for ConnectionDescriptor {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

fn extract_direct(scheme: Scheme, uri: &SplitUri) -> ResolveResult<ConnectionDescriptor> {
    // Segments after the first are ignored.
    let db = if uri.path.is_empty() {
        0
    } else {
        let first = uri.path.trim_matches('/').split('/').next().unwrap_or_default();
        first
            .parse::<u32>()
            .map_err(|_| ResolveError::InvalidDatabaseIndex {
                context: DbIndexSource::Path,
            })?
    };

    let tcp = TcpOptions {
        addr: uri.host.clone(),
        password: uri.password().map(String::from),
        db,
    };

    if !scheme.is_tls() {
        return Ok(ConnectionDescriptor::Direct(tcp));
    }

    let server_name = split_host_port(&uri.host)
        .map_or(uri.host.as_str(), |(host, _)| host)
        .to_string();

    Ok(ConnectionDescriptor::DirectTls(TlsOptions { tcp, server_name }))
}

fn extract_socket(uri: &SplitUri) -> ResolveResult<ConnectionDescriptor> {
    if uri.path.is_empty() {
        return Err(ResolveError::MissingSocketPath);
    }

    let db = match uri.query_param("db") {
        Some(n) if !n.is_empty() => {
            n.parse::<u32>()
                .map_err(|_| ResolveError::InvalidDatabaseIndex {
                    context: DbIndexSource::Query,
                })?
        }
        _ => 0,
    };

    Ok(ConnectionDescriptor::UnixSocket(SocketOptions {
        path: uri.path.clone(),
        password: uri.password().map(String::from),
        db,
    }))
}

fn extract_sentinel(uri: &SplitUri) -> ResolveResult<ConnectionDescriptor> {
    let sentinel_addrs = uri.host.split(',').map(String::from).collect();

    // No default here: a missing `db` is a parse failure.
    let db = uri.query_param("db").unwrap_or_default().parse::<u32>()?;

    Ok(ConnectionDescriptor::Sentinel(SentinelOptions {
        sentinel_addrs,
        master_name: uri.query_param("master").unwrap_or_default(),
        sentinel_password: uri.password().map(String::from),
        username: uri.query_param("username"),
        password: uri.query_param("password"),
        db,
    }))
}

/// Split `host:port`, stripping IPv6 brackets.
///
/// Returns `None` when there is no port or the host part is ambiguous.
fn split_host_port(authority: &str) -> Option<(&str, &str)> {
    let colon = authority.rfind(':')?;
    let (host, port) = (&authority[..colon], &authority[colon + 1..]);

    if port.contains(['[', ']']) {
        return None;
    }

    match host.strip_prefix('[') {
        Some(bracketed) => {
            let inner = bracketed.strip_suffix(']')?;
            (!inner.contains(['[', ']'])).then_some((inner, port))
        }
        None => (!host.contains([':', '[', ']'])).then_some((host, port)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Network;
    use pretty_assertions::assert_eq;

    fn direct(addr: &str, password: Option<&str>, db: u32) -> TcpOptions {
        TcpOptions {
            addr: addr.to_string(),
            password: password.map(String::from),
            db,
        }
    }

    #[test]
    fn test_resolve_direct_full() {
        let desc = resolve("redis://:secret@localhost:6379/2").unwrap();
        assert_eq!(
            desc,
            ConnectionDescriptor::Direct(direct("localhost:6379", Some("secret"), 2))
        );
    }

    #[test]
    fn test_resolve_direct_defaults() {
        let desc = resolve("redis://localhost:6379").unwrap();
        assert_eq!(
            desc,
            ConnectionDescriptor::Direct(direct("localhost:6379", None, 0))
        );
    }

    #[test]
    fn test_resolve_direct_ignores_trailing_segments() {
        let desc = resolve("redis://localhost/5/extra/segments/").unwrap();
        assert_eq!(desc.db(), 5);
    }

    #[test]
    fn test_resolve_direct_username_is_not_password() {
        let desc = resolve("redis://user@localhost").unwrap();
        assert_eq!(desc.password(), None);
    }

    #[test]
    fn test_resolve_direct_invalid_db() {
        for uri in [
            "redis://localhost/abc",
            "redis://localhost/-1",
            "redis://localhost/",
            "rediss://localhost/one",
        ] {
            assert_eq!(
                resolve(uri).unwrap_err(),
                ResolveError::InvalidDatabaseIndex {
                    context: DbIndexSource::Path
                },
                "{uri}"
            );
        }
    }

    #[test]
    fn test_resolve_tls() {
        let desc = resolve("rediss://localhost:6380").unwrap();
        assert_eq!(
            desc,
            ConnectionDescriptor::DirectTls(TlsOptions {
                tcp: direct("localhost:6380", None, 0),
                server_name: "localhost".into(),
            })
        );
    }

    #[test]
    fn test_resolve_tls_server_name() {
        let cases = [
            ("rediss://cache.internal", "cache.internal"),
            ("rediss://cache.internal:6380/1", "cache.internal"),
            ("rediss://[::1]:6380", "::1"),
            ("rediss://[::1]", "[::1]"),
            ("rediss://:pw@10.0.0.5:6380", "10.0.0.5"),
        ];
        for (uri, expected) in cases {
            let desc = resolve(uri).unwrap();
            assert_eq!(desc.tls_server_name(), Some(expected), "{uri}");
        }
    }

    #[test]
    fn test_resolve_tls_keeps_full_addr() {
        let ConnectionDescriptor::DirectTls(opts) = resolve("rediss://[::1]:6380").unwrap() else {
            panic!("expected tls descriptor");
        };
        assert_eq!(opts.tcp.addr, "[::1]:6380");
    }

    #[test]
    fn test_resolve_socket() {
        let desc = resolve("redis-socket:///tmp/redis.sock?db=3").unwrap();
        assert_eq!(
            desc,
            ConnectionDescriptor::UnixSocket(SocketOptions {
                path: "/tmp/redis.sock".into(),
                password: None,
                db: 3,
            })
        );
        assert_eq!(desc.network(), Network::Unix);
    }

    #[test]
    fn test_resolve_socket_password_and_default_db() {
        let desc = resolve("redis-socket://:secret@/var/run/redis.sock").unwrap();
        assert_eq!(
            desc,
            ConnectionDescriptor::UnixSocket(SocketOptions {
                path: "/var/run/redis.sock".into(),
                password: Some("secret".into()),
                db: 0,
            })
        );
    }

    #[test]
    fn test_resolve_socket_empty_db_defaults() {
        let desc = resolve("redis-socket:///tmp/redis.sock?db=").unwrap();
        assert_eq!(desc.db(), 0);
    }

    #[test]
    fn test_resolve_socket_path_not_normalised() {
        let desc = resolve("redis-socket:///tmp/../tmp//redis.sock").unwrap();
        let ConnectionDescriptor::UnixSocket(opts) = desc else {
            panic!("expected socket descriptor");
        };
        assert_eq!(opts.path, "/tmp/../tmp//redis.sock");
    }

    #[test]
    fn test_resolve_socket_missing_path() {
        assert_eq!(
            resolve("redis-socket://").unwrap_err(),
            ResolveError::MissingSocketPath
        );
        assert_eq!(
            resolve("redis-socket://?db=1").unwrap_err(),
            ResolveError::MissingSocketPath
        );
    }

    #[test]
    fn test_resolve_socket_invalid_db() {
        assert_eq!(
            resolve("redis-socket:///tmp/redis.sock?db=x").unwrap_err(),
            ResolveError::InvalidDatabaseIndex {
                context: DbIndexSource::Query
            }
        );
    }

    #[test]
    fn test_resolve_sentinel() {
        let desc = resolve("redis-sentinel://host1:26379,host2:26379?master=mymaster&db=0").unwrap();
        assert_eq!(
            desc,
            ConnectionDescriptor::Sentinel(SentinelOptions {
                sentinel_addrs: vec!["host1:26379".into(), "host2:26379".into()],
                master_name: "mymaster".into(),
                sentinel_password: None,
                username: None,
                password: None,
                db: 0,
            })
        );
    }

    #[test]
    fn test_resolve_sentinel_credentials() {
        let desc = resolve(
            "redis-sentinel://:sentinelpw@h1:26379?master=m&username=app&password=datapw&db=7",
        )
        .unwrap();
        let ConnectionDescriptor::Sentinel(opts) = desc else {
            panic!("expected sentinel descriptor");
        };
        assert_eq!(opts.sentinel_password.as_deref(), Some("sentinelpw"));
        assert_eq!(opts.username.as_deref(), Some("app"));
        assert_eq!(opts.password.as_deref(), Some("datapw"));
        assert_eq!(opts.db, 7);
    }

    #[test]
    fn test_resolve_sentinel_missing_master_is_empty() {
        let ConnectionDescriptor::Sentinel(opts) = resolve("redis-sentinel://h1?db=0").unwrap()
        else {
            panic!("expected sentinel descriptor");
        };
        assert_eq!(opts.master_name, "");
    }

    #[test]
    fn test_resolve_sentinel_empty_tokens_pass_through() {
        let ConnectionDescriptor::Sentinel(opts) =
            resolve("redis-sentinel://h1,,h2?master=m&db=0").unwrap()
        else {
            panic!("expected sentinel descriptor");
        };
        assert_eq!(opts.sentinel_addrs, vec!["h1", "", "h2"]);

        let ConnectionDescriptor::Sentinel(opts) =
            resolve("redis-sentinel://?master=m&db=0").unwrap()
        else {
            panic!("expected sentinel descriptor");
        };
        assert_eq!(opts.sentinel_addrs, vec![""]);
    }

    #[test]
    fn test_resolve_sentinel_requires_db() {
        let err = resolve("redis-sentinel://host1?master=mymaster").unwrap_err();
        assert!(matches!(err, ResolveError::ParseInt(_)));

        let err = resolve("redis-sentinel://host1?master=mymaster&db=zero").unwrap_err();
        assert!(matches!(err, ResolveError::ParseInt(_)));
    }

    #[test]
    fn test_resolve_unsupported_scheme() {
        assert_eq!(
            resolve("ftp://host").unwrap_err(),
            ResolveError::unsupported_scheme("ftp")
        );
        assert_eq!(
            resolve("Redis://host").unwrap_err(),
            ResolveError::unsupported_scheme("Redis")
        );
        assert_eq!(
            resolve("localhost").unwrap_err(),
            ResolveError::unsupported_scheme("")
        );
    }

    #[test]
    fn test_resolve_malformed() {
        assert!(matches!(
            resolve("://nothing").unwrap_err(),
            ResolveError::MalformedUri(_)
        ));
        assert!(matches!(
            resolve("redis://localhost:port").unwrap_err(),
            ResolveError::MalformedUri(_)
        ));
    }

    #[test]
    fn test_resolve_host_escapes_cannot_smuggle_delimiters() {
        for uri in [
            "redis://h%2F1",
            "redis://a%40b:6379",
            "redis-sentinel://h1%2Ch2?master=m&db=0",
        ] {
            assert!(
                matches!(resolve(uri), Err(ResolveError::MalformedUri(_))),
                "expected {uri:?} to be malformed"
            );
        }
    }

    #[test]
    fn test_resolve_escaped_host_round_trips() {
        for uri in [
            "redis://caf%C3%A9:6379/1",
            "rediss://[fe80::1%25en0]:6380",
            "redis-sentinel://h1,caf%C3%A9:26379?master=m&db=0",
        ] {
            let desc = resolve(uri).unwrap();
            assert_eq!(resolve(&desc.to_uri()).unwrap(), desc, "{uri}");
        }
    }

    #[test]
    fn test_from_str() {
        let desc: ConnectionDescriptor = "redis://localhost/1".parse().unwrap();
        assert_eq!(desc.db(), 1);
    }

    #[test]
    fn test_split_host_port() {
        assert_eq!(split_host_port("localhost:6379"), Some(("localhost", "6379")));
        assert_eq!(split_host_port("[::1]:6379"), Some(("::1", "6379")));
        assert_eq!(split_host_port("localhost:"), Some(("localhost", "")));
        assert_eq!(split_host_port("localhost"), None);
        assert_eq!(split_host_port("[::1]"), None);
        assert_eq!(split_host_port("a:b:c"), None);
    }
}
