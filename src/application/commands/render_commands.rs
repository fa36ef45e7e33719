//! Render Commands

use std::path::PathBuf;

/// 渲染脚本命令
#[derive(Debug, Clone)]
pub struct RenderScript {
    /// 脚本路径（.toml / .json）
    pub script_path: PathBuf,
    /// 输出路径，None 表示只返回文档不写文件
    pub output_path: Option<PathBuf>,
}
