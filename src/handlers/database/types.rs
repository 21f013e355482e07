//! Database Types and Common Structures
//!
//! データベースプローブで使用される共通の型定義

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 接続設定
///
/// パスワードは `SecretString` で保持し、Debug出力には現れない
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: SecretString,
    pub connect_timeout: Duration,
}

impl ConnectionSettings {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            database: database.into(),
            username: username.into(),
            password: SecretString::from(password.into()),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self::new("localhost", 3306, "test", "tiger", "tiger")
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// データベース値
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Binary(Vec<u8>),
    DateTime(DateTime<Utc>),
}

impl Value {
    /// CLI・設定ファイルの文字列リテラルから値を推定
    ///
    /// `NULL`/`null` → Null, `true`/`false` → Bool, 整数 → Int, 小数 → Float,
    /// それ以外は String
    pub fn from_literal(literal: &str) -> Self {
        match literal {
            "NULL" | "null" => return Value::Null,
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }

        if let Ok(i) = literal.parse::<i64>() {
            return Value::Int(i);
        }

        // "inf"/"NaN" are valid f64 literals but almost certainly meant as text
        if literal.contains('.') {
            if let Ok(f) = literal.parse::<f64>() {
                if f.is_finite() {
                    return Value::Float(f);
                }
            }
        }

        Value::String(literal.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            // JDBC getString style: integral doubles keep one decimal
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{:.1}", x)
            }
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{}", s),
            Value::Binary(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.f")),
        }
    }
}

/// クエリ結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResult {
    /// カラム情報
    pub columns: Vec<ColumnInfo>,
    /// 行データ
    pub rows: Vec<Vec<Value>>,
    /// 実行時間（ミリ秒）
    pub execution_time_ms: u64,
}

impl QueryResult {
    /// カラム名からインデックスを取得（大文字小文字を区別しない）
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// カラム情報
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable: true,
        }
    }
}

/// データベースエラー
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Data conversion error: {0}")]
    ConversionError(String),
}
