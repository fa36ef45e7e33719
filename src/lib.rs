//! SSML Builder - 语音合成标记语言构建
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - SSML Context: 片段校验、格式化与文档拼接（SsmlBuilder）
//! - Script Context: 以 TOML / JSON 描述的片段序列
//!
//! 应用层 (application/):
//! - Ports: ScriptStoragePort
//! - Commands: RenderScript 命令处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 文件系统脚本存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::ssml::{
    AmazonEffect, BreakSpec, EmphasisLevel, PauseStrength, ProsodyPitch, ProsodyRate,
    ProsodyValue, ProsodyVolume, SsmlBuilder, SsmlError,
};
