use crate::error::{Error, Result};
use crate::handlers::database::{ConnectionSettings, QueryProbe, Value};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
///
/// デフォルト値はローカル開発環境の `test` スキーマ（`student` テーブル）を想定
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Logging configuration
    pub log: LogSettings,

    /// MySQL connection
    pub mysql: MySqlSettings,

    /// Statement run by the query probe
    pub query: QuerySettings,

    /// Hostname resolution probe
    pub dns: DnsSettings,
}

/// ログ設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// ログレベル (trace, debug, info, warn, error)
    pub level: String,
    /// ファイル出力有効
    pub file_enabled: bool,
    /// ログディレクトリ（未指定時は自動選択）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    /// JSON形式で出力
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            log_dir: None,
            json: false,
        }
    }
}

/// MySQL接続設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MySqlSettings {
    /// 接続URL（指定時は host/port/database/username/password より優先）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    /// 接続タイムアウト（秒）
    pub connect_timeout_secs: u64,
}

impl Default for MySqlSettings {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 3306,
            database: "test".to_string(),
            username: "tiger".to_string(),
            password: "tiger".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

impl MySqlSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Connection settings with the password moved behind a secret
    pub fn to_connection_settings(&self) -> ConnectionSettings {
        ConnectionSettings::new(
            self.host.clone(),
            self.port,
            self.database.clone(),
            self.username.clone(),
            self.password.clone(),
        )
        .with_connect_timeout(self.connect_timeout())
    }
}

/// クエリ設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySettings {
    pub sql: String,
    /// 位置パラメータ（文字列リテラルから型を推定）
    pub params: Vec<String>,
    /// 出力するカラム
    pub column: String,
    /// 出力行のラベル
    pub label: String,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            sql: "select * from student".to_string(),
            params: Vec::new(),
            column: "name".to_string(),
            label: "User".to_string(),
        }
    }
}

impl QuerySettings {
    pub fn to_probe(&self) -> QueryProbe {
        QueryProbe::new(self.sql.clone())
            .with_params(self.params.iter().map(|p| Value::from_literal(p)).collect())
            .with_column(self.column.clone())
            .with_label(self.label.clone())
    }
}

/// DNS設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsSettings {
    pub host: String,
}

impl Default for DnsSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
        }
    }
}

impl ProbeConfig {
    /// 設定値の整合性を検証
    pub fn validate(&self) -> Result<()> {
        if self.mysql.url.is_none() {
            if self.mysql.host.trim().is_empty() {
                return Err(Error::Config("mysql.host must not be empty".to_string()));
            }
            if self.mysql.port == 0 {
                return Err(Error::Config("mysql.port must not be 0".to_string()));
            }
            if self.mysql.database.trim().is_empty() {
                return Err(Error::Config("mysql.database must not be empty".to_string()));
            }
        }
        if self.mysql.connect_timeout_secs == 0 {
            return Err(Error::Config(
                "mysql.connect_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.query.sql.trim().is_empty() {
            return Err(Error::Config("query.sql must not be empty".to_string()));
        }
        if self.query.column.trim().is_empty() {
            return Err(Error::Config("query.column must not be empty".to_string()));
        }
        Ok(())
    }

    /// サンプル設定ファイルの内容を生成
    pub fn sample_toml() -> Result<String> {
        let body = toml::to_string_pretty(&ProbeConfig::default())
            .map_err(|e| Error::Config(format!("Failed to render sample config: {}", e)))?;

        Ok(format!(
            r#"# env-probe configuration
#
# Save as env-probe.toml or pass --config <path>.
# Every key can be overridden from the environment, e.g.
#   ENV_PROBE_MYSQL__PORT=3307
#   ENV_PROBE_QUERY__PARAMS=18,Alice

{}"#,
            body
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_local_environment() {
        let config = ProbeConfig::default();
        assert_eq!(config.mysql.host, "localhost");
        assert_eq!(config.mysql.port, 3306);
        assert_eq!(config.mysql.database, "test");
        assert_eq!(config.mysql.username, "tiger");
        assert_eq!(config.query.sql, "select * from student");
        assert_eq!(config.dns.host, "localhost");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = ProbeConfig::default();
        config.mysql.port = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_url_skips_host_checks() {
        let mut config = ProbeConfig::default();
        config.mysql.host.clear();
        config.mysql.url = Some("mysql://tiger:tiger@db:3306/test".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_query_params_are_typed() {
        let settings = QuerySettings {
            sql: "select * from student where age > ? and name <> ?".to_string(),
            params: vec!["18".to_string(), "Bob".to_string()],
            ..Default::default()
        };
        let probe = settings.to_probe();
        assert_eq!(
            probe.params,
            vec![Value::Int(18), Value::String("Bob".to_string())]
        );
    }

    #[test]
    fn test_sample_round_trips() {
        let sample = ProbeConfig::sample_toml().unwrap();
        assert!(sample.starts_with("# env-probe configuration"));
        let parsed: ProbeConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.mysql.port, 3306);
    }
}
