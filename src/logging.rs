use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::LogSettings;

/// ログファイル名のプレフィックス
pub const LOG_FILE_NAME: &str = "env-probe.log";

/// ログ設定
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// ログレベル (trace, debug, info, warn, error)
    pub level: String,
    /// ログディレクトリ
    pub log_dir: PathBuf,
    /// ファイルローテーション設定
    pub rotation: LogRotation,
    /// コンソール出力有効（stderr）
    pub console_enabled: bool,
    /// ファイル出力有効
    pub file_enabled: bool,
    /// JSON形式
    pub json: bool,
}

#[derive(Debug, Clone)]
pub enum LogRotation {
    /// 日次ローテーション
    Daily,
    /// 時間毎ローテーション
    Hourly,
    /// ローテーションなし
    Never,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: PathBuf::from("logs"),
            rotation: LogRotation::Daily,
            console_enabled: true,
            file_enabled: false,
            json: false,
        }
    }
}

impl LogConfig {
    /// 設定ファイルのログ設定から作成
    pub fn from_settings(settings: &LogSettings) -> Self {
        let log_dir = settings
            .log_dir
            .clone()
            .unwrap_or_else(get_default_log_dir);

        Self {
            level: settings.level.clone(),
            log_dir,
            file_enabled: settings.file_enabled,
            json: settings.json,
            ..Self::default()
        }
    }

    /// カスタムログディレクトリを設定
    pub fn with_log_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.log_dir = dir.into();
        self
    }

    /// ローテーション設定
    pub fn with_rotation(mut self, rotation: LogRotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// コンソール出力制御
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console_enabled = enabled;
        self
    }

    /// ファイル出力制御
    pub fn with_file(mut self, enabled: bool) -> Self {
        self.file_enabled = enabled;
        self
    }

    /// フィルタを作成（RUST_LOG が設定されていれば優先）
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Keeps the non-blocking file writer alive; drop it last to flush.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// デフォルトログディレクトリを取得
///
/// カレントディレクトリの logs フォルダ。作成はファイル出力が有効な場合のみ行う
fn get_default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

/// ログディレクトリを確保
fn ensure_log_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    Ok(())
}

/// ログシステムを初期化
///
/// コンソール出力は stderr に送り、stdout はプローブ結果専用とする
pub fn init_logging(config: &LogConfig) -> Result<LoggingGuard> {
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    let mut file_guard = None;

    if config.console_enabled {
        let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
        layers.push(if config.json {
            layer.json().boxed()
        } else {
            layer.boxed()
        });
    }

    if config.file_enabled {
        ensure_log_dir(&config.log_dir)?;

        let file_appender = match config.rotation {
            LogRotation::Daily => rolling::daily(&config.log_dir, LOG_FILE_NAME),
            LogRotation::Hourly => rolling::hourly(&config.log_dir, LOG_FILE_NAME),
            LogRotation::Never => rolling::never(&config.log_dir, LOG_FILE_NAME),
        };
        let (writer, guard) = non_blocking(file_appender);
        file_guard = Some(guard);

        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        layers.push(if config.json {
            layer.json().boxed()
        } else {
            layer.boxed()
        });
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(config.env_filter())
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(
        level = %config.level,
        file = config.file_enabled,
        log_dir = %config.log_dir.display(),
        "Logging initialized"
    );

    Ok(LoggingGuard { _file: file_guard })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.console_enabled);
        assert!(!config.file_enabled);
    }

    #[test]
    fn test_log_config_from_settings() {
        let temp_dir = tempdir().unwrap();
        let settings = LogSettings {
            level: "debug".to_string(),
            file_enabled: true,
            log_dir: Some(temp_dir.path().to_path_buf()),
            json: true,
        };

        let config = LogConfig::from_settings(&settings);
        assert_eq!(config.level, "debug");
        assert!(config.file_enabled);
        assert!(config.json);
        assert_eq!(config.log_dir, temp_dir.path());
    }

    #[test]
    fn test_ensure_log_dir() {
        let temp_dir = tempdir().unwrap();
        let log_dir = temp_dir.path().join("test_logs");

        assert!(ensure_log_dir(&log_dir).is_ok());
        assert!(log_dir.exists());
    }

    #[test]
    fn test_builder_methods() {
        let config = LogConfig::default()
            .with_log_dir("/tmp/probe-logs")
            .with_rotation(LogRotation::Never)
            .with_console(false)
            .with_file(true);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/probe-logs"));
        assert!(matches!(config.rotation, LogRotation::Never));
        assert!(!config.console_enabled);
        assert!(config.file_enabled);
    }
}
