use async_trait::async_trait;

use crate::types::{AudioSample, Locale};

use super::{RecognizeError, Recognizer};

/// 识别契约的 stub 实现（用于测试和开发）
pub struct RecognizerStub {
    outcome: Result<String, RecognizeError>,
}

impl RecognizerStub {
    /// 总是返回固定文本
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
        }
    }

    /// 总是返回指定失败
    pub fn failing(error: RecognizeError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl Recognizer for RecognizerStub {
    async fn recognize(
        &self,
        _sample: &AudioSample,
        _locale: Locale,
    ) -> Result<String, RecognizeError> {
        self.outcome.clone()
    }
}
