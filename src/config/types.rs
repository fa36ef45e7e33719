//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 渲染配置
    #[serde(default)]
    pub render: RenderConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 渲染配置
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// 脚本路径（.toml / .json）
    #[serde(default = "default_script")]
    pub script: PathBuf,

    /// 输出文件路径，未设置时输出到 stdout
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_script() -> PathBuf {
    PathBuf::from("script.toml")
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            script: default_script(),
            output: None,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
