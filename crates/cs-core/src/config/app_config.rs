//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - Define configuration data structures / 定义配置数据结构
//! - Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! Missing keys stay `None`; defaults and clamping are applied by
//! [`EngineSettings`](crate::settings::EngineSettings), not here.
//! 缺失的键保持为 `None`，默认值与范围修正由 `EngineSettings` 负责。

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// `[history] capacity`
    pub history_capacity: Option<usize>,

    /// `[watcher] poll_interval_ms`
    pub poll_interval_ms: Option<u64>,

    /// `[paste] simulate_paste`
    pub simulate_paste: Option<bool>,

    /// `[logging] file`
    pub log_to_file: Option<bool>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Negative integers are mapped to `Some(0)` so the settings layer can
    /// report and clamp them like any other out-of-range value.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section_value = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .cloned()
        };

        Ok(Self {
            history_capacity: section_value("history", "capacity")
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as usize),
            poll_interval_ms: section_value("watcher", "poll_interval_ms")
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64),
            simulate_paste: section_value("paste", "simulate_paste").and_then(|v| v.as_bool()),
            log_to_file: section_value("logging", "file").and_then(|v| v.as_bool()),
        })
    }

    /// Create empty AppConfig (every value missing)
    /// 创建空的 AppConfig（所有字段缺失）
    pub fn empty() -> Self {
        Self::default()
    }
}
