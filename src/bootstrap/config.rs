//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read TOML configuration files / 读取 TOML 配置文件
//! - Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! No defaults and no clamping here: that is `EngineSettings`' job.
//! 此处不处理默认值与范围修正，由 `EngineSettings` 负责。

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use cs_core::config::AppConfig;

const APP_DIR_NAME: &str = "clipstack";
const CONFIG_FILE_NAME: &str = "config.toml";

/// `<config dir>/clipstack/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
/// 在以下情况下返回错误：
/// - 无法读取文件（I/O 错误）
/// - 内容不是有效的 TOML（解析错误）
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))?;
    AppConfig::from_toml(&toml_value)
}

/// Pick the config to run with.
///
/// An explicit path must exist. The default path is optional: when it is
/// missing every value falls back to its default.
/// 显式指定的路径必须存在；默认路径不存在时使用默认配置。
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config(&path),
        Some(path) => {
            info!(path = %path.display(), "No config file, using defaults");
            Ok(AppConfig::empty())
        }
        None => Ok(AppConfig::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test that valid TOML is parsed correctly
    /// 测试有效 TOML 被正确解析
    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [history]
            capacity = 20

            [watcher]
            poll_interval_ms = 250

            [paste]
            simulate_paste = true

            [logging]
            file = false
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.history_capacity, Some(20));
        assert_eq!(config.poll_interval_ms, Some(250));
        assert_eq!(config.simulate_paste, Some(true));
        assert_eq!(config.log_to_file, Some(false));
    }

    /// Test that out-of-range values are accepted as facts
    /// 测试越界值被原样接受
    #[test]
    fn test_load_config_does_not_validate_ranges() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[history]\ncapacity = 0\n[watcher]\npoll_interval_ms = 1\n")
            .unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.history_capacity, Some(0));
        assert_eq!(config.poll_interval_ms, Some(1));
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[history\ncapacity = ").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = resolve_config(Some(&missing)).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }
}
