//! Render Command Handlers

use std::sync::Arc;

use crate::application::commands::RenderScript;
use crate::application::error::ApplicationError;
use crate::application::ports::ScriptStoragePort;

// ============================================================================
// RenderScript
// ============================================================================

/// 渲染脚本响应
#[derive(Debug, Clone)]
pub struct RenderScriptResponse {
    /// 完整 SSML 文档
    pub ssml: String,
    /// 渲染的片段数
    pub fragment_count: usize,
}

/// RenderScript Handler
pub struct RenderScriptHandler {
    script_storage: Arc<dyn ScriptStoragePort>,
}

impl RenderScriptHandler {
    pub fn new(script_storage: Arc<dyn ScriptStoragePort>) -> Self {
        Self { script_storage }
    }

    pub fn handle(&self, command: RenderScript) -> Result<RenderScriptResponse, ApplicationError> {
        if command.script_path.as_os_str().is_empty() {
            return Err(ApplicationError::validation("Script path cannot be empty"));
        }

        let script = self.script_storage.load_script(&command.script_path)?;
        let ssml = script.render()?;

        if let Some(output_path) = &command.output_path {
            self.script_storage.save_document(output_path, &ssml)?;
        }

        tracing::info!(
            script = %command.script_path.display(),
            output = ?command.output_path,
            fragments = script.len(),
            size = ssml.len(),
            "Script rendered"
        );

        Ok(RenderScriptResponse {
            ssml,
            fragment_count: script.len(),
        })
    }
}
