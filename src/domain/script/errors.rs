//! Script Context - Errors

use thiserror::Error;

use crate::domain::ssml::SsmlError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("第 {index} 个片段 ({kind}) 渲染失败: {source}")]
    Fragment {
        index: usize,
        kind: &'static str,
        #[source]
        source: SsmlError,
    },
}
