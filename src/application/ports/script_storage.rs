//! Script Storage Port - 脚本读取与文档写出抽象
//!
//! 定义脚本加载、SSML 文档保存的抽象接口，具体实现在 infrastructure/adapters 层

use std::path::Path;
use thiserror::Error;

use crate::domain::script::Script;

/// 脚本存储错误
#[derive(Debug, Error)]
pub enum ScriptStorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Unsupported script format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse script: {0}")]
    ParseError(String),
}

/// Script Storage Port
pub trait ScriptStoragePort: Send + Sync {
    /// 加载脚本
    fn load_script(&self, path: &Path) -> Result<Script, ScriptStorageError>;

    /// 保存渲染后的 SSML 文档
    fn save_document(&self, path: &Path, ssml: &str) -> Result<(), ScriptStorageError>;
}
