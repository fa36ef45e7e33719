//! Script Context - Entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ScriptError;
use crate::domain::ssml::{
    AmazonEffect, BreakSpec, EmphasisLevel, ProsodyValue, SsmlBuilder, SsmlError,
};

/// 脚本片段 - 对应一次 builder 追加操作
///
/// break / prosody 的参数保持无类型，追加时再校验
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptFragment {
    Speech {
        text: String,
    },
    AmazonEffect {
        #[serde(default)]
        effect: AmazonEffect,
        text: String,
    },
    Audio {
        src: String,
    },
    Break {
        value: Value,
    },
    Emphasis {
        #[serde(default)]
        level: EmphasisLevel,
        text: String,
    },
    Paragraph {
        text: String,
    },
    Prosody {
        #[serde(default)]
        rate: Option<Value>,
        #[serde(default)]
        pitch: Option<Value>,
        #[serde(default)]
        volume: Option<Value>,
        text: String,
    },
    Sentence {
        text: String,
    },
    Substitution {
        alias: String,
        text: String,
    },
}

impl ScriptFragment {
    /// 片段类型名（用于日志）
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Speech { .. } => "speech",
            Self::AmazonEffect { .. } => "amazon_effect",
            Self::Audio { .. } => "audio",
            Self::Break { .. } => "break",
            Self::Emphasis { .. } => "emphasis",
            Self::Paragraph { .. } => "paragraph",
            Self::Prosody { .. } => "prosody",
            Self::Sentence { .. } => "sentence",
            Self::Substitution { .. } => "substitution",
        }
    }

    /// 追加到 builder，参数校验失败时 builder 不变
    pub fn apply(&self, builder: &mut SsmlBuilder) -> Result<(), SsmlError> {
        match self {
            Self::Speech { text } => {
                builder.append_plain_speech(text);
            }
            Self::AmazonEffect { effect, text } => {
                builder.append_amazon_effect(effect, text);
            }
            Self::Audio { src } => {
                builder.append_audio(src)?;
            }
            Self::Break { value } => {
                builder.append_break(BreakSpec::try_from(value)?);
            }
            Self::Emphasis { level, text } => {
                builder.append_emphasis(level, text);
            }
            Self::Paragraph { text } => {
                builder.append_paragraph(text);
            }
            Self::Prosody {
                rate,
                pitch,
                volume,
                text,
            } => {
                let rate = ProsodyValue::from_value(rate.as_ref())?;
                let pitch = ProsodyValue::from_value(pitch.as_ref())?;
                let volume = ProsodyValue::from_value(volume.as_ref())?;
                builder.append_prosody(rate, pitch, volume, text);
            }
            Self::Sentence { text } => {
                builder.append_sentence(text);
            }
            Self::Substitution { alias, text } => {
                builder.append_substitution(alias, text);
            }
        }
        Ok(())
    }
}

/// SSML 脚本 - 有序片段列表
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(rename = "fragment", default)]
    fragments: Vec<ScriptFragment>,
}

impl Script {
    pub fn new(fragments: Vec<ScriptFragment>) -> Self {
        Self { fragments }
    }

    pub fn fragments(&self) -> &[ScriptFragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// 按顺序渲染全部片段，第一个失败的片段终止渲染
    pub fn render(&self) -> Result<String, ScriptError> {
        let mut builder = SsmlBuilder::new();

        for (index, fragment) in self.fragments.iter().enumerate() {
            tracing::debug!(index, kind = fragment.kind(), "Rendering fragment");
            fragment
                .apply(&mut builder)
                .map_err(|source| ScriptError::Fragment {
                    index,
                    kind: fragment.kind(),
                    source,
                })?;
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_script_renders_empty_document() {
        assert_eq!(Script::default().render().unwrap(), "<speak></speak>");
    }

    #[test]
    fn test_render_all_kinds() {
        let script = Script::new(vec![
            ScriptFragment::Speech { text: "Hi ".into() },
            ScriptFragment::AmazonEffect {
                effect: AmazonEffect::default(),
                text: "psst".into(),
            },
            ScriptFragment::Audio {
                src: "https://x".into(),
            },
            ScriptFragment::Break { value: json!(1500) },
            ScriptFragment::Break {
                value: json!("x-strong"),
            },
            ScriptFragment::Emphasis {
                level: EmphasisLevel::REDUCED,
                text: "soft".into(),
            },
            ScriptFragment::Paragraph { text: "p".into() },
            ScriptFragment::Prosody {
                rate: None,
                pitch: Some(json!(10)),
                volume: Some(json!(-5)),
                text: "x".into(),
            },
            ScriptFragment::Sentence { text: "s".into() },
            ScriptFragment::Substitution {
                alias: "mercury".into(),
                text: "Hg".into(),
            },
        ]);

        assert_eq!(
            script.render().unwrap(),
            "<speak>Hi <amazon:effect name=\"whispered\">psst</amazon:effect>\
             <audio src=\"https://x\"/><break time=\"1500ms\"/><break strength=\"x-strong\"/>\
             <emphasis level=\"reduced\">soft</emphasis><p>p</p>\
             <prosody pitch=\"+10%\" volume=\"-5dB\">x</prosody><s>s</s>\
             <sub alias=\"mercury\">Hg</sub></speak>"
        );
    }

    #[test]
    fn test_render_reports_failing_fragment() {
        let script = Script::new(vec![
            ScriptFragment::Sentence { text: "ok".into() },
            ScriptFragment::Prosody {
                rate: Some(json!(true)),
                pitch: None,
                volume: None,
                text: "x".into(),
            },
        ]);

        match script.render().unwrap_err() {
            ScriptError::Fragment {
                index,
                kind,
                source: SsmlError::UnsupportedType { param, .. },
            } => {
                assert_eq!(index, 1);
                assert_eq!(kind, "prosody");
                assert_eq!(param, "rate");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_audio_fragment_rejects_http() {
        let script = Script::new(vec![ScriptFragment::Audio {
            src: "http://example.com/a.mp3".into(),
        }]);

        assert!(matches!(
            script.render(),
            Err(ScriptError::Fragment {
                index: 0,
                source: SsmlError::InvalidScheme { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let text = r#"
            [[fragment]]
            kind = "sentence"
            text = "hello"

            [[fragment]]
            kind = "emphasis"
            text = "world"

            [[fragment]]
            kind = "break"
            value = 250

            [[fragment]]
            kind = "prosody"
            rate = "slow"
            volume = 3
            text = "quiet"
        "#;

        let script: Script = toml::from_str(text).unwrap();
        assert_eq!(script.len(), 4);
        assert_eq!(
            script.render().unwrap(),
            "<speak><s>hello</s><emphasis level=\"moderate\">world</emphasis>\
             <break time=\"250ms\"/><prosody rate=\"slow\" volume=\"+3dB\">quiet</prosody></speak>"
        );
    }

    #[test]
    fn test_deserialize_from_json() {
        let text = r#"{"fragment": [
            {"kind": "substitution", "alias": "doctor", "text": "Dr."},
            {"kind": "break", "value": "weak"}
        ]}"#;

        let script: Script = serde_json::from_str(text).unwrap();
        assert_eq!(
            script.render().unwrap(),
            "<speak><sub alias=\"doctor\">Dr.</sub><break strength=\"weak\"/></speak>"
        );
    }
}
