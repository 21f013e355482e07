//! Database Probe Module
//!
//! 一回限りのクエリを実行して結果行を出力する

pub mod engine;
pub mod engines;
pub mod report;
pub mod types;

// 公開API
pub use engine::{run_query_probe, DatabaseConnection, QueryProbe};
pub use engines::MySqlConnection;
pub use types::{ColumnInfo, ConnectionSettings, DatabaseError, QueryResult, Value};
