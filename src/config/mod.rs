//! Configuration loading and types

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, DEFAULT_ENV_PREFIX};
pub use types::{DnsSettings, LogSettings, MySqlSettings, ProbeConfig, QuerySettings};
