//! # Config 模块
//!
//! 工具配置，集中管理所有配置项。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件（`--config <json>`）
//! 3. 默认值（最低）

use std::fs;
use std::path::Path;
use std::str::FromStr;

use nlmaps_mrl::{Dialect, FunctionaliseOptions, OnLineError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// 工具配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// 叶子标注约定（plain / nlmaps）
    #[serde(default)]
    pub dialect: Dialect,

    /// 行级错误时输出空行（empty）还是跳过（skip）
    #[serde(default)]
    pub on_line_error: OnLineError,

    /// 评测后是否写出 `.eval` / `.sigf` 等报告文件
    #[serde(default = "default_write_reports")]
    pub write_reports: bool,

    /// 还原时给缺少 `@` 的 token 补 `@s`
    #[serde(default)]
    pub insert_missing_at: bool,

    /// 默认日志级别（error / warn / info / debug / trace）
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// 默认值函数
fn default_write_reports() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            on_line_error: OnLineError::default(),
            write_reports: default_write_reports(),
            insert_missing_at: false,
            log_level: default_log_level(),
        }
    }
}

impl ToolConfig {
    /// 加载配置文件
    ///
    /// 未指定路径时使用默认配置；指定了但无法读取或解析时返回错误。
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;
        fs::write(path, json).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        Level::from_str(&self.log_level).map_err(|_| {
            ConfigError::Validation(format!(
                "未知的日志级别 '{}'，可选 error / warn / info / debug / trace",
                self.log_level
            ))
        })?;
        Ok(())
    }

    /// 配置中的日志级别，无法识别时为 WARN
    pub fn level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::WARN)
    }

    /// 还原选项
    pub fn functionalise_options(&self) -> FunctionaliseOptions {
        FunctionaliseOptions {
            dialect: self.dialect,
            insert_missing_at: self.insert_missing_at,
        }
    }
}

/// 配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 读写失败
    #[error("配置文件 {path} IO 错误: {message}")]
    Io { path: String, message: String },

    /// JSON 解析失败
    #[error("配置文件 {path} 解析失败: {message}")]
    Parse { path: String, message: String },

    /// 序列化失败
    #[error("配置序列化失败: {0}")]
    Serialization(String),

    /// 验证失败
    #[error("配置验证失败: {0}")]
    Validation(String),
}
