//! 应用层 - 命令
//!
//! 脚本渲染命令及处理器

mod render_commands;

pub mod handlers;

pub use render_commands::*;
