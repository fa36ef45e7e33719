//! SSML Context - SSML 文档构建上下文
//!
//! 职责:
//! - 属性取值表（音效、强调、停顿、prosody）
//! - 参数校验与格式化
//! - 片段拼接与文档输出

mod builder;
mod errors;
mod params;
mod value_objects;

pub use builder::SsmlBuilder;
pub use errors::SsmlError;
pub use params::{BreakSpec, ProsodyAttribute, ProsodyValue};
pub use value_objects::{
    AmazonEffect, EmphasisLevel, PauseStrength, ProsodyPitch, ProsodyRate, ProsodyVolume,
};
