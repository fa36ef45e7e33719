//! File Script Storage - 文件系统脚本存储实现
//!
//! 实现 ScriptStoragePort trait，按扩展名选择 TOML / JSON 解析

use std::fs;
use std::path::Path;

use crate::application::ports::{ScriptStorageError, ScriptStoragePort};
use crate::domain::script::Script;

/// 脚本文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    Toml,
    Json,
}

impl ScriptFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ScriptStorageError> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| ScriptStorageError::UnsupportedFormat(path.display().to_string()))
    }

    /// 解析脚本文本
    pub fn parse(&self, text: &str) -> Result<Script, ScriptStorageError> {
        match self {
            Self::Toml => {
                toml::from_str(text).map_err(|e| ScriptStorageError::ParseError(e.to_string()))
            }
            Self::Json => serde_json::from_str(text)
                .map_err(|e| ScriptStorageError::ParseError(e.to_string())),
        }
    }
}

/// 文件系统脚本存储
#[derive(Debug, Clone, Default)]
pub struct FileScriptStorage;

impl FileScriptStorage {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptStoragePort for FileScriptStorage {
    fn load_script(&self, path: &Path) -> Result<Script, ScriptStorageError> {
        let format = ScriptFormat::from_path(path)?;

        let text =
            fs::read_to_string(path).map_err(|e| ScriptStorageError::IoError(e.to_string()))?;

        let script = format.parse(&text)?;

        tracing::debug!(
            path = %path.display(),
            format = ?format,
            fragments = script.len(),
            "Loaded script"
        );

        Ok(script)
    }

    fn save_document(&self, path: &Path, ssml: &str) -> Result<(), ScriptStorageError> {
        // 确保目录存在
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ScriptStorageError::IoError(e.to_string()))?;
        }

        fs::write(path, ssml).map_err(|e| ScriptStorageError::IoError(e.to_string()))?;

        tracing::debug!(path = %path.display(), size = ssml.len(), "Saved SSML document");

        Ok(())
    }
}
