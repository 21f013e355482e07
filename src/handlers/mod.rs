//! Probe handlers for the systems under check
//!
//! 各ハンドラーは一つのリソースを取得し、一つの操作を行い、結果を出力して解放する

pub mod database;
pub mod dns;
