//! Database Connection Abstraction
//!
//! プローブが使う最小限の接続インターフェース

use super::report::render_rows;
use super::types::{DatabaseError, QueryResult, Value};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// データベース接続抽象化トレイト
///
/// 一回限りのクエリ実行と、その後の解放のみを提供
#[async_trait]
pub trait DatabaseConnection: Send + Sync {
    /// SELECTクエリを実行
    async fn query(&self, sql: &str, params: &[Value]) -> Result<QueryResult, DatabaseError>;

    /// 接続の健全性をチェック
    async fn ping(&self) -> Result<(), DatabaseError>;

    /// 接続を明示的に閉じる
    async fn close(&self) -> Result<(), DatabaseError>;
}

/// One query probe: statement, bound parameters and how to render rows.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryProbe {
    pub sql: String,
    pub params: Vec<Value>,
    pub column: String,
    pub label: String,
}

impl QueryProbe {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
            column: "name".to_string(),
            label: "User".to_string(),
        }
    }

    pub fn with_params(mut self, params: Vec<Value>) -> Self {
        self.params = params;
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl Default for QueryProbe {
    fn default() -> Self {
        Self::new("select * from student")
    }
}

/// Run `probe` on `conn`, render the rows and release the connection.
///
/// The connection is closed whether or not the query succeeded; a close
/// failure is logged and discarded.
pub async fn run_query_probe(
    conn: &dyn DatabaseConnection,
    probe: &QueryProbe,
) -> Result<Vec<String>, DatabaseError> {
    debug!(sql = %probe.sql, params = probe.params.len(), "Running query probe");

    let outcome = match conn.query(&probe.sql, &probe.params).await {
        Ok(result) => {
            info!(
                rows = result.rows.len(),
                elapsed_ms = result.execution_time_ms,
                "Query probe finished"
            );
            render_rows(&result, &probe.column, &probe.label)
        }
        Err(e) => Err(e),
    };

    if let Err(e) = conn.close().await {
        warn!("Ignoring error while closing connection: {}", e);
    }

    outcome
}
