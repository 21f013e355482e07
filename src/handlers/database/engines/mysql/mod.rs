//! MySQL module organization
//!
//! Single-connection MySQL access built on mysql_async

pub mod connection;
pub mod param_converter;

pub use connection::MySqlConnection;
pub use param_converter::MySqlParamConverter;
