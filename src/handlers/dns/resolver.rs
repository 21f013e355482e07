//! Resolver implementations
//!
//! `SystemResolver` goes through the platform resolver (getaddrinfo via
//! tokio), so `/etc/hosts` and nsswitch apply exactly as for any other
//! process. `HickoryResolver` is available behind the `hickory-dns` feature.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt;
use std::net::IpAddr;
use tracing::{debug, info};

/// One resolved address, rendered as `host/ip`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub host: String,
    pub ip: IpAddr,
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.host, self.ip)
    }
}

/// ホスト名解決の抽象化
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolver name for logs
    fn name(&self) -> &'static str;

    /// Look up every address for `host`, in resolver order
    async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>>;
}

/// Platform resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    fn name(&self) -> &'static str {
        "system"
    }

    async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>> {
        let addrs = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| Error::Resolution(format!("{}: {}", host, e)))?;
        Ok(addrs.map(|sa| sa.ip()).collect())
    }
}

/// hickory-resolver using the system configuration
#[cfg(feature = "hickory-dns")]
pub struct HickoryResolver {
    inner: hickory_resolver::TokioAsyncResolver,
}

#[cfg(feature = "hickory-dns")]
impl HickoryResolver {
    pub fn from_system_conf() -> Result<Self> {
        let inner = hickory_resolver::TokioAsyncResolver::tokio_from_system_conf()
            .map_err(|e| Error::Config(format!("Failed to read resolver config: {}", e)))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "hickory-dns")]
#[async_trait]
impl HostResolver for HickoryResolver {
    fn name(&self) -> &'static str {
        "hickory"
    }

    async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>> {
        let lookup = self
            .inner
            .lookup_ip(host)
            .await
            .map_err(|e| Error::Resolution(format!("{}: {}", host, e)))?;
        Ok(lookup.iter().collect())
    }
}

/// Resolve `host` with the platform resolver
pub async fn resolve_all(host: &str) -> Result<Vec<ResolvedAddress>> {
    resolve_with(&SystemResolver, host).await
}

/// Resolve `host` with the given resolver
///
/// IP literals are returned as-is. Duplicates are dropped, first occurrence
/// wins.
pub async fn resolve_with(
    resolver: &dyn HostResolver,
    host: &str,
) -> Result<Vec<ResolvedAddress>> {
    let host = host.trim();
    if host.is_empty() {
        return Err(Error::InvalidInput("host name is empty".to_string()));
    }

    if let Ok(ip) = host.parse::<IpAddr>() {
        debug!(%ip, "Host is an IP literal, skipping lookup");
        return Ok(vec![ResolvedAddress {
            host: host.to_string(),
            ip,
        }]);
    }

    let ips = resolver.lookup(host).await?;

    let mut resolved: Vec<ResolvedAddress> = Vec::with_capacity(ips.len());
    for ip in ips {
        if !resolved.iter().any(|r| r.ip == ip) {
            resolved.push(ResolvedAddress {
                host: host.to_string(),
                ip,
            });
        }
    }

    if resolved.is_empty() {
        return Err(Error::Resolution(format!("{}: no addresses", host)));
    }

    info!(
        host,
        resolver = resolver.name(),
        count = resolved.len(),
        "Host resolved"
    );

    Ok(resolved)
}

/// `[host/ip, host/ip]`
pub fn format_addresses(addrs: &[ResolvedAddress]) -> String {
    let joined = addrs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}
