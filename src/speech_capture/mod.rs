//! 音频采集契约
//!
//! 采集由外部实现（麦克风获取、环境噪声校准都在 `listen` 内部完成），
//! 本 crate 只消费契约。

mod stub;

use std::error::Error;
use std::fmt::{Display, Formatter};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::{AudioSample, Locale};

pub use stub::CaptureStub;

/// 单次监听参数（毫秒）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenConfig {
    /// 环境噪声校准时长
    pub calibration_ms: u64,
    /// 等待第一段声音的超时
    pub timeout_ms: u64,
    /// 单句最长采集时长
    pub phrase_cap_ms: u64,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            calibration_ms: 500,
            timeout_ms: 5_000,
            phrase_cap_ms: 10_000,
        }
    }
}

/// 采集失败的两种结局，均终止本轮、不自动重试
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// 找不到可用麦克风
    DeviceUnavailable(String),
    /// 监听窗口内没有听到声音
    Timeout,
}

impl Display for CaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureError::DeviceUnavailable(msg) => {
                write!(f, "audio capture device unavailable: {}", msg)
            }
            CaptureError::Timeout => write!(f, "listening timed out before any speech"),
        }
    }
}

impl Error for CaptureError {}

#[async_trait]
pub trait SpeechCapture: Send + Sync {
    /// 校准环境噪声并采集一句话
    async fn listen(
        &self,
        locale: Locale,
        config: &ListenConfig,
    ) -> Result<AudioSample, CaptureError>;
}
