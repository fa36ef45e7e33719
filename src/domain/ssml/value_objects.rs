//! SSML Context - Value Objects
//!
//! 属性取值表（开放式 token）：既提供常用取值常量，也接受任意字符串

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// 定义一个开放式 token 类型
///
/// 渲染时原样输出，不做转义或校验
macro_rules! open_token {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$const_meta:meta])* $konst:ident => $value:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $(
                $(#[$const_meta])*
                pub const $konst: Self = Self(Cow::Borrowed($value));
            )*

            pub fn new(value: impl Into<String>) -> Self {
                Self(Cow::Owned(value.into()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

open_token! {
    /// Amazon 专有音效 (`<amazon:effect name="...">`)
    AmazonEffect {
        /// 耳语
        WHISPERED => "whispered",
    }
}

impl Default for AmazonEffect {
    fn default() -> Self {
        Self::WHISPERED
    }
}

open_token! {
    /// 强调级别 (`<emphasis level="...">`)
    EmphasisLevel {
        STRONG => "strong",
        MODERATE => "moderate",
        REDUCED => "reduced",
    }
}

impl Default for EmphasisLevel {
    fn default() -> Self {
        Self::MODERATE
    }
}

open_token! {
    /// 停顿强度 (`<break strength="...">`)
    PauseStrength {
        NONE => "none",
        X_WEAK => "x-weak",
        WEAK => "weak",
        MEDIUM => "medium",
        STRONG => "strong",
        X_STRONG => "x-strong",
    }
}

impl Default for PauseStrength {
    fn default() -> Self {
        Self::MEDIUM
    }
}

open_token! {
    /// 语速 (`<prosody rate="...">`)
    ProsodyRate {
        X_SLOW => "x-slow",
        SLOW => "slow",
        MEDIUM => "medium",
        FAST => "fast",
        X_FAST => "x-fast",
    }
}

open_token! {
    /// 音调 (`<prosody pitch="...">`)
    ProsodyPitch {
        X_LOW => "x-low",
        LOW => "low",
        MEDIUM => "medium",
        HIGH => "high",
        X_HIGH => "x-high",
    }
}

open_token! {
    /// 音量 (`<prosody volume="...">`)
    ProsodyVolume {
        SILENT => "silent",
        X_SOFT => "x-soft",
        SOFT => "soft",
        MEDIUM => "medium",
        LOUD => "loud",
        X_LOUD => "x-loud",
    }
}
