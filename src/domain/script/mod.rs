//! Script Context - SSML 脚本上下文
//!
//! 职责:
//! - 以数据形式描述一组有序片段（TOML / JSON）
//! - 将片段逐个交给 SsmlBuilder 渲染

mod entities;
mod errors;

pub use entities::{Script, ScriptFragment};
pub use errors::ScriptError;
