//! 基于 tokio mpsc channel 的展示面封送实现

use tokio::sync::mpsc;

use crate::types::{ChannelId, SideId};

use super::{apply, PresentationSink, UiUpdate};

/// 创建一对封送端点：后台任务持有 [`UiDispatcher`]，展示线程持有
/// [`UiUpdates`]。
pub fn ui_channel() -> (UiDispatcher, UiUpdates) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (UiDispatcher { sender }, UiUpdates { receiver })
}

/// 发送端：每个展示面操作一个方法
///
/// 展示面已经关闭时发送只会被丢弃并记录日志，绝不让 Turn 因此失败。
#[derive(Clone)]
pub struct UiDispatcher {
    sender: mpsc::UnboundedSender<UiUpdate>,
}

impl UiDispatcher {
    fn send(&self, update: UiUpdate) {
        if self.sender.send(update).is_err() {
            eprintln!("[UI] presentation surface is gone, dropping update");
        }
    }

    pub fn set_status(&self, text: impl Into<String>) {
        self.send(UiUpdate::Status(text.into()));
    }

    pub fn append_line(&self, channel: ChannelId, text: impl Into<String>) {
        self.send(UiUpdate::AppendLine {
            channel,
            text: text.into(),
        });
    }

    pub fn set_trigger_enabled(&self, side: SideId, enabled: bool) {
        self.send(UiUpdate::TriggerEnabled { side, enabled });
    }

    pub fn show_error_dialog(&self, title: impl Into<String>, message: impl Into<String>) {
        self.send(UiUpdate::ErrorDialog {
            title: title.into(),
            message: message.into(),
        });
    }
}

/// 接收端：由展示线程独占，按发送顺序取出更新
pub struct UiUpdates {
    receiver: mpsc::UnboundedReceiver<UiUpdate>,
}

impl UiUpdates {
    /// 等待下一条更新；所有发送端关闭后返回 `None`
    pub async fn recv(&mut self) -> Option<UiUpdate> {
        self.receiver.recv().await
    }

    /// 非阻塞取出一条更新（事件循环空转时使用）
    pub fn try_recv(&mut self) -> Option<UiUpdate> {
        self.receiver.try_recv().ok()
    }

    /// 取出并应用更新，直到所有发送端关闭
    pub async fn drain_into(&mut self, sink: &mut dyn PresentationSink) {
        while let Some(update) = self.receiver.recv().await {
            apply(&update, sink);
        }
    }
}
