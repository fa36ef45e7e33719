//! SSML Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SsmlError {
    #[error("无效的音频 URL: {src}: {reason}")]
    InvalidUrl { src: String, reason: String },

    #[error("音频 URL 必须为 https，当前 scheme: {scheme}")]
    InvalidScheme { scheme: String },

    /// 多态参数的取值类型不受支持
    #[error("不支持的 {param} 参数类型: {found}")]
    UnsupportedType { param: &'static str, found: String },
}

impl SsmlError {
    pub fn unsupported(param: &'static str, found: impl Into<String>) -> Self {
        Self::UnsupportedType {
            param,
            found: found.into(),
        }
    }
}
