use async_trait::async_trait;

use crate::types::Locale;

use super::{TranslateError, Translator};

/// 翻译契约的 stub 实现（用于测试和开发）
///
/// 成功时返回 `"[<目标语言>] <原文>"`，便于断言。
pub struct TranslatorStub {
    error: Option<TranslateError>,
}

impl TranslatorStub {
    pub fn new() -> Self {
        Self { error: None }
    }

    /// 总是返回指定失败
    pub fn failing(error: TranslateError) -> Self {
        Self { error: Some(error) }
    }
}

impl Default for TranslatorStub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for TranslatorStub {
    async fn translate(
        &self,
        text: &str,
        _src: Locale,
        dst: Locale,
    ) -> Result<String, TranslateError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(format!("[{}] {}", dst.translation_tag(), text)),
        }
    }
}
