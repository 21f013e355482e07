//! Database Engines Module
//!
//! 各種データベースエンジンの実装を提供
//! MySQL: mysql_asyncライブラリを使用

pub mod mysql;

pub use mysql::MySqlConnection;
