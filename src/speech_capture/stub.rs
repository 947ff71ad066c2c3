use async_trait::async_trait;

use crate::types::{AudioSample, Locale};

use super::{CaptureError, ListenConfig, SpeechCapture};

/// 采集契约的 stub 实现（用于测试和开发）
pub struct CaptureStub {
    outcome: Result<AudioSample, CaptureError>,
}

impl CaptureStub {
    /// 总是返回一段固定样本
    pub fn new() -> Self {
        Self {
            outcome: Ok(AudioSample {
                data: vec![0; 160],
                sample_rate: 16_000,
            }),
        }
    }

    /// 总是返回指定失败
    pub fn failing(error: CaptureError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

impl Default for CaptureStub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechCapture for CaptureStub {
    async fn listen(
        &self,
        _locale: Locale,
        _config: &ListenConfig,
    ) -> Result<AudioSample, CaptureError> {
        self.outcome.clone()
    }
}
