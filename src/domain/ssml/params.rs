//! SSML Context - 多形态参数
//!
//! - BreakSpec: 停顿强度 或 时长，二选一
//! - ProsodyValue: 缺省 / 命名取值 / 数值偏移

use serde_json::Value;
use std::time::Duration;

use super::{PauseStrength, ProsodyPitch, ProsodyRate, ProsodyVolume, SsmlError};

/// 停顿参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakSpec {
    Strength(PauseStrength),
    Duration(Duration),
}

impl BreakSpec {
    /// 渲染 `<break .../>` 片段
    pub(crate) fn render(&self) -> String {
        match self {
            Self::Strength(strength) => format!("<break strength=\"{}\"/>", strength),
            // as_millis 截断到整毫秒，不做四舍五入
            Self::Duration(duration) => format!("<break time=\"{}ms\"/>", duration.as_millis()),
        }
    }
}

impl From<PauseStrength> for BreakSpec {
    fn from(strength: PauseStrength) -> Self {
        Self::Strength(strength)
    }
}

impl From<Duration> for BreakSpec {
    fn from(duration: Duration) -> Self {
        Self::Duration(duration)
    }
}

/// 从无类型取值转换：字符串为强度，非负整数为毫秒时长
impl TryFrom<&Value> for BreakSpec {
    type Error = SsmlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self::Strength(PauseStrength::from(s.as_str()))),
            Value::Number(n) => n
                .as_u64()
                .map(|ms| Self::Duration(Duration::from_millis(ms)))
                .ok_or_else(|| SsmlError::unsupported("break", describe(value))),
            other => Err(SsmlError::unsupported("break", describe(other))),
        }
    }
}

/// prosody 属性的渲染规则
pub trait ProsodyAttribute: From<String> + std::fmt::Display {
    /// 属性名
    const NAME: &'static str;
    /// 数值单位
    const UNIT: &'static str;
    /// 正数是否显式加 `+`
    const SIGNED: bool;
}

impl ProsodyAttribute for ProsodyRate {
    const NAME: &'static str = "rate";
    const UNIT: &'static str = "%";
    const SIGNED: bool = false;
}

impl ProsodyAttribute for ProsodyPitch {
    const NAME: &'static str = "pitch";
    const UNIT: &'static str = "%";
    const SIGNED: bool = true;
}

impl ProsodyAttribute for ProsodyVolume {
    const NAME: &'static str = "volume";
    const UNIT: &'static str = "dB";
    const SIGNED: bool = true;
}

/// prosody 单个属性的取值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProsodyValue<T> {
    Absent,
    Named(T),
    Offset(i64),
}

impl<T> Default for ProsodyValue<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<T> for ProsodyValue<T>
where
    T: ProsodyAttribute,
{
    fn from(token: T) -> Self {
        Self::Named(token)
    }
}

impl<T: ProsodyAttribute> ProsodyValue<T> {
    /// 渲染为 `name="value"`，缺省时返回 None
    pub(crate) fn render(&self) -> Option<String> {
        let value = match self {
            Self::Absent => return None,
            Self::Named(token) => token.to_string(),
            Self::Offset(n) if T::SIGNED && *n > 0 => format!("+{}{}", n, T::UNIT),
            Self::Offset(n) => format!("{}{}", n, T::UNIT),
        };
        Some(format!("{}=\"{}\"", T::NAME, value))
    }

    /// 从无类型取值转换：缺省/null 为 Absent，字符串为命名取值，整数为偏移
    pub fn from_value(value: Option<&Value>) -> Result<Self, SsmlError> {
        let Some(value) = value else {
            return Ok(Self::Absent);
        };

        match value {
            Value::Null => Ok(Self::Absent),
            Value::String(s) => Ok(Self::Named(T::from(s.clone()))),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Offset)
                .ok_or_else(|| SsmlError::unsupported(T::NAME, describe(value))),
            other => Err(SsmlError::unsupported(T::NAME, describe(other))),
        }
    }
}

fn describe(value: &Value) -> String {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
    };
    format!("{} {}", kind, value)
}
