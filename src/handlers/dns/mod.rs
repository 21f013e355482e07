//! Hostname Resolution Probe
//!
//! ホスト名を一度だけ解決し、得られた全アドレスを出力する

pub mod resolver;

pub use resolver::{
    format_addresses, resolve_all, resolve_with, HostResolver, ResolvedAddress, SystemResolver,
};

#[cfg(feature = "hickory-dns")]
pub use resolver::HickoryResolver;
