//! 语音识别契约
//!
//! 音频片段 + 语言 → 文本，或带类型的失败。引擎本身是外部协作方，
//! 这里提供契约、HTTP 远程客户端和测试用 stub。

mod remote;
mod stub;

use std::error::Error;
use std::fmt::{Display, Formatter};

use async_trait::async_trait;

use crate::types::{AudioSample, Locale};

pub use remote::{RemoteRecognizer, RemoteRecognizerConfig};
pub use stub::RecognizerStub;

/// 识别失败的两种结局
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizeError {
    /// 音频无法理解（常见、不弹窗）
    Unintelligible,
    /// 识别服务出错，携带底层诊断信息
    Service(String),
}

impl Display for RecognizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecognizeError::Unintelligible => write!(f, "audio could not be understood"),
            RecognizeError::Service(msg) => write!(f, "recognition service error: {}", msg),
        }
    }
}

impl Error for RecognizeError {}

#[async_trait]
pub trait Recognizer: Send + Sync {
    async fn recognize(
        &self,
        sample: &AudioSample,
        locale: Locale,
    ) -> Result<String, RecognizeError>;
}
