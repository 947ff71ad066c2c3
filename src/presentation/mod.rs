//! 展示面封送
//!
//! 展示面（窗口、状态栏、六个文本通道）是单线程的外部协作方，只能在
//! 它自己的线程上变更。后台 Turn 产生的每一次界面变更都先封装成
//! [`UiUpdate`] 经 channel 发出，由展示线程按序取出并应用。

mod channel;

use serde::{Deserialize, Serialize};

use crate::types::{ChannelId, SideId};

pub use channel::{ui_channel, UiDispatcher, UiUpdates};

/// 一次展示面变更
///
/// 同一 Turn 发出的更新在接收端保持发送顺序（mpsc 按发送方 FIFO）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiUpdate {
    Status(String),
    AppendLine { channel: ChannelId, text: String },
    TriggerEnabled { side: SideId, enabled: bool },
    ErrorDialog { title: String, message: String },
}

/// 展示面契约（由嵌入方实现）
///
/// 所有方法只允许在展示线程上调用；封送由本模块保证，实现方不需要
/// 自己加锁。
pub trait PresentationSink {
    fn set_status(&mut self, text: &str);
    fn append_line(&mut self, channel: ChannelId, text: &str);
    fn set_trigger_enabled(&mut self, side: SideId, enabled: bool);
    fn show_error_dialog(&mut self, title: &str, message: &str);
}

/// 把一条更新应用到展示面
pub fn apply(update: &UiUpdate, sink: &mut dyn PresentationSink) {
    match update {
        UiUpdate::Status(text) => sink.set_status(text),
        UiUpdate::AppendLine { channel, text } => sink.append_line(*channel, text),
        UiUpdate::TriggerEnabled { side, enabled } => sink.set_trigger_enabled(*side, *enabled),
        UiUpdate::ErrorDialog { title, message } => sink.show_error_dialog(title, message),
    }
}
