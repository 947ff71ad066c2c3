//! 单轮处理：采集 → 识别 → 数字本地化 → 双路翻译 → 发布
//!
//! 每个 Turn 在独立的 tokio 任务里跑完全程，所有界面变更经封送发出。
//! 五种失败结局都终止本轮、不自动重试；无论从哪一步退出，两个席位的
//! 触发按钮都会恰好被恢复一次。

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::Ordering;
use std::time::Instant;

use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::numeral::localize_text;
use crate::recognizer::RecognizeError;
use crate::speech_capture::CaptureError;
use crate::translator::TranslateError;
use crate::types::{ChannelKind, Locale, SideId, SideProfile};

use super::core::ConversationPipeline;

/// 一轮处理的五种失败结局（见错误设计：全部终止本轮，不重试）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    CaptureUnavailable(String),
    CaptureTimeout,
    Unintelligible,
    RecognitionService(String),
    Translation(String),
}

impl TurnError {
    /// 状态栏文案
    pub fn status_line(&self) -> &'static str {
        match self {
            TurnError::CaptureUnavailable(_) => "No microphone found.",
            TurnError::CaptureTimeout => "Listening timed out. Try again.",
            TurnError::Unintelligible => "Could not understand the audio.",
            TurnError::RecognitionService(_) => "Speech service error.",
            TurnError::Translation(_) => "Translation failed.",
        }
    }

    /// 需要弹出错误对话框的结局返回（标题, 诊断信息）
    ///
    /// 超时和听不懂是常见情况，只改状态栏，不打扰用户。
    pub fn dialog(&self) -> Option<(&'static str, &str)> {
        match self {
            TurnError::CaptureUnavailable(msg) => Some(("Microphone error", msg)),
            TurnError::RecognitionService(msg) => Some(("Speech recognition error", msg)),
            TurnError::Translation(msg) => Some(("Translation error", msg)),
            TurnError::CaptureTimeout | TurnError::Unintelligible => None,
        }
    }
}

impl Display for TurnError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnError::CaptureUnavailable(msg) => write!(f, "capture unavailable: {}", msg),
            TurnError::CaptureTimeout => write!(f, "capture timed out"),
            TurnError::Unintelligible => write!(f, "audio unintelligible"),
            TurnError::RecognitionService(msg) => write!(f, "recognition service: {}", msg),
            TurnError::Translation(msg) => write!(f, "translation: {}", msg),
        }
    }
}

impl Error for TurnError {}

impl From<CaptureError> for TurnError {
    fn from(e: CaptureError) -> Self {
        match e {
            CaptureError::DeviceUnavailable(msg) => TurnError::CaptureUnavailable(msg),
            CaptureError::Timeout => TurnError::CaptureTimeout,
        }
    }
}

impl From<RecognizeError> for TurnError {
    fn from(e: RecognizeError) -> Self {
        match e {
            RecognizeError::Unintelligible => TurnError::Unintelligible,
            RecognizeError::Service(msg) => TurnError::RecognitionService(msg),
        }
    }
}

impl From<TranslateError> for TurnError {
    fn from(e: TranslateError) -> Self {
        TurnError::Translation(e.0)
    }
}

impl ConversationPipeline {
    /// 为指定席位启动一轮处理
    ///
    /// 同一席位已有活跃 Turn 时是 no-op，返回 `false`。两个席位的 Turn
    /// 可以并发。
    pub fn run_turn(&self, side: SideId) -> bool {
        self.run_turn_handle(side).is_some()
    }

    /// 同 [`run_turn`](Self::run_turn)，返回任务句柄供调用方等待完成
    pub fn run_turn_handle(&self, side: SideId) -> Option<JoinHandle<()>> {
        let flag = &self.busy[side.index()];
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            eprintln!("[TURN] {:?} side already has an active turn, ignoring", side);
            return None;
        }

        let profile = SideProfile::for_side(side);
        // 先发禁用再起任务，保证它先于本轮的任何更新到达展示面
        self.ui.set_trigger_enabled(side, false);

        let pipeline = self.clone();
        Some(tokio::spawn(async move {
            pipeline.execute_turn(profile).await;
        }))
    }

    /// 跑完一轮并做好收尾（状态栏、对话框、恢复触发按钮、清 busy 标志）
    async fn execute_turn(self, profile: SideProfile) {
        let turn_id = Uuid::new_v4();
        let started = Instant::now();

        let result = self.turn_stages(&profile).await;
        let elapsed_ms = started.elapsed().as_millis();

        match &result {
            Ok(()) => {
                self.ui.set_status("Ready.");
                eprintln!(
                    "[TURN {}] {} side completed in {}ms",
                    turn_id, profile.label, elapsed_ms
                );
            }
            Err(e) => {
                self.ui.set_status(e.status_line());
                if let Some((title, message)) = e.dialog() {
                    self.ui.show_error_dialog(title, message);
                }
                eprintln!(
                    "[TURN {}] {} side terminated after {}ms: {}",
                    turn_id, profile.label, elapsed_ms, e
                );
            }
        }

        // 成功或失败都恢复两个席位的触发按钮，且只恢复这一次
        self.ui.set_trigger_enabled(SideId::Vietnamese, true);
        self.ui.set_trigger_enabled(SideId::Chinese, true);
        self.busy[profile.id.index()].store(false, Ordering::Release);
    }

    /// 状态机本体：任一阶段失败立即返回，不发布下游结果
    async fn turn_stages(&self, profile: &SideProfile) -> Result<(), TurnError> {
        // 1. 采集
        self.ui
            .set_status(format!("Listening for {} speech...", profile.label));
        let sample = self.capture.listen(profile.source, &self.listen).await?;

        // 2. 识别
        self.ui.set_status("Recognizing speech...");
        let raw_text = self.recognizer.recognize(&sample, profile.source).await?;

        // 3. 数字本地化；原文通道立即发布，不等待翻译
        let localized = localize_text(&raw_text, profile.source);
        self.ui
            .append_line(profile.channel(ChannelKind::Original), localized.annotated);

        // 4. 双路翻译并发进行；任一失败则两路结果都不发布
        self.ui.set_status("Translating...");
        let plain = localized.plain;
        let (peer, english) = tokio::join!(
            self.translator
                .translate(&plain, profile.source, profile.peer),
            self.translator
                .translate(&plain, profile.source, Locale::English),
        );
        let peer = peer?;
        let english = english?;

        // 5. 先对方语言，后英文
        self.ui.append_line(profile.channel(ChannelKind::Peer), peer);
        self.ui
            .append_line(profile.channel(ChannelKind::English), english);

        Ok(())
    }
}
