//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - SSML Context: 片段校验、格式化与文档拼接
//! - Script Context: 以数据描述的片段序列

pub mod script;
pub mod ssml;
