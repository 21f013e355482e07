//! Hostname resolution through the platform resolver

use env_probe::handlers::dns::{format_addresses, resolve_all};
use env_probe::Error;

#[tokio::test]
async fn test_localhost_resolves_to_loopback() {
    let addrs = resolve_all("localhost").await.unwrap();

    assert!(!addrs.is_empty());
    assert!(addrs.iter().all(|a| a.host == "localhost"));
    assert!(addrs.iter().any(|a| a.ip.is_loopback()));

    let printed = format_addresses(&addrs);
    assert!(printed.starts_with("[localhost/"));
    assert!(printed.ends_with(']'));
}

#[tokio::test]
async fn test_ipv6_literal() {
    let addrs = resolve_all("::1").await.unwrap();
    assert_eq!(addrs.len(), 1);
    assert_eq!(format_addresses(&addrs), "[::1/::1]");
}

#[tokio::test]
async fn test_unresolvable_host() {
    // .invalid is reserved and never resolves
    let err = resolve_all("no-such-host.invalid").await.unwrap_err();
    assert!(matches!(err, Error::Resolution(_)));
}

#[tokio::test]
async fn test_empty_host() {
    let err = resolve_all("").await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}
