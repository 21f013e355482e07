//! # env-probe
//!
//! Smoke probes for a local development environment.
//!
//! Two probes are provided. The query probe opens a single MySQL connection,
//! runs one prepared statement and prints one line per row. The resolve probe
//! looks up every address for a host name. Each probe acquires one resource,
//! performs one operation and releases it.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;

pub use config::{ConfigLoader, ProbeConfig};
pub use error::{Error, Result};
pub use handlers::database::{run_query_probe, DatabaseConnection, MySqlConnection, QueryProbe};
pub use handlers::dns::{format_addresses, resolve_all, ResolvedAddress};
