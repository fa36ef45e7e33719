//! SSML Context - Builder
//!
//! 按调用顺序拼接 SSML 片段，最终包裹在 `<speak>` 根元素中

use url::{ParseError, Url};

use super::{
    AmazonEffect, BreakSpec, EmphasisLevel, ProsodyPitch, ProsodyRate, ProsodyValue,
    ProsodyVolume, SsmlError,
};

/// SSML 构建器
///
/// 不变量:
/// - buffer 只追加，不重排、不删除已写入内容
/// - 校验失败时不写入任何内容
#[derive(Debug, Clone, Default)]
pub struct SsmlBuilder {
    buffer: String,
}

impl SsmlBuilder {
    /// 创建空的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加纯文本（不转义）
    pub fn append_plain_speech(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// 追加 Amazon 音效
    pub fn append_amazon_effect(&mut self, effect: &AmazonEffect, text: &str) -> &mut Self {
        self.write(format!(
            "<amazon:effect name=\"{}\">{}</amazon:effect>",
            effect, text
        ))
    }

    /// 追加音频引用
    ///
    /// src 必须是合法的 HTTPS URL，原样写入
    pub fn append_audio(&mut self, src: &str) -> Result<&mut Self, SsmlError> {
        let url = match Url::parse(src) {
            Ok(url) => url,
            // 无 scheme 的相对地址（如 `source1`、`/a.mp3`）可以解析，只是 scheme 为空；
            // 以 `:` 开头则缺少 scheme，无法解析
            Err(ParseError::RelativeUrlWithoutBase) if !src.starts_with(':') => {
                tracing::debug!(src = %src, "Rejected audio src without scheme");
                return Err(SsmlError::InvalidScheme {
                    scheme: String::new(),
                });
            }
            Err(e) => {
                tracing::debug!(src = %src, error = %e, "Rejected audio src");
                return Err(SsmlError::InvalidUrl {
                    src: src.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        if url.scheme() != "https" {
            tracing::debug!(src = %src, scheme = %url.scheme(), "Rejected audio scheme");
            return Err(SsmlError::InvalidScheme {
                scheme: url.scheme().to_string(),
            });
        }

        Ok(self.write(format!("<audio src=\"{}\"/>", src)))
    }

    /// 追加停顿
    pub fn append_break(&mut self, spec: impl Into<BreakSpec>) -> &mut Self {
        self.write(spec.into().render())
    }

    /// 追加强调
    pub fn append_emphasis(&mut self, level: &EmphasisLevel, text: &str) -> &mut Self {
        self.write(format!(
            "<emphasis level=\"{}\">{}</emphasis>",
            level, text
        ))
    }

    /// 追加段落
    pub fn append_paragraph(&mut self, text: &str) -> &mut Self {
        self.write(format!("<p>{}</p>", text))
    }

    /// 追加 prosody
    ///
    /// 只输出存在的属性，顺序固定为 rate、pitch、volume
    pub fn append_prosody(
        &mut self,
        rate: ProsodyValue<ProsodyRate>,
        pitch: ProsodyValue<ProsodyPitch>,
        volume: ProsodyValue<ProsodyVolume>,
        text: &str,
    ) -> &mut Self {
        let attrs = [rate.render(), pitch.render(), volume.render()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        self.write(format!("<prosody {}>{}</prosody>", attrs, text))
    }

    /// 追加句子
    pub fn append_sentence(&mut self, text: &str) -> &mut Self {
        self.write(format!("<s>{}</s>", text))
    }

    /// 追加替换读法
    pub fn append_substitution(&mut self, alias: &str, text: &str) -> &mut Self {
        self.write(format!("<sub alias=\"{}\">{}</sub>", alias, text))
    }

    /// 已累积的片段（不含根元素）
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// 生成完整的 SSML 文档
    pub fn build(&self) -> String {
        format!("<speak>{}</speak>", self.buffer)
    }

    fn write(&mut self, fragment: String) -> &mut Self {
        self.buffer.push_str(&fragment);
        self
    }
}

impl std::fmt::Display for SsmlBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<speak>{}</speak>", self.buffer)
    }
}
