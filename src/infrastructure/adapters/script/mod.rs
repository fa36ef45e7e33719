//! Script Adapters
//!
//! 脚本存储适配器

mod file_script_storage;

pub use file_script_storage::{FileScriptStorage, ScriptFormat};
