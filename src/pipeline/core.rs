use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::presentation::UiDispatcher;
use crate::recognizer::Recognizer;
use crate::speech_capture::{ListenConfig, SpeechCapture};
use crate::translator::Translator;

/// 每轮对话的编排器
///
/// 采集、识别、翻译都是注入的共享实例，可以被两个席位的 Turn 并发调用；
/// 展示面只通过 [`UiDispatcher`] 封送触达。`busy` 每席位一个标志，
/// 保证同一席位同时最多一个活跃 Turn。
pub struct ConversationPipeline {
    pub(crate) capture: Arc<dyn SpeechCapture>,
    pub(crate) recognizer: Arc<dyn Recognizer>,
    pub(crate) translator: Arc<dyn Translator>,
    pub(crate) ui: UiDispatcher,
    pub(crate) listen: ListenConfig,
    pub(crate) busy: Arc<[AtomicBool; 2]>,
}

impl Clone for ConversationPipeline {
    fn clone(&self) -> Self {
        Self {
            capture: Arc::clone(&self.capture),
            recognizer: Arc::clone(&self.recognizer),
            translator: Arc::clone(&self.translator),
            ui: self.ui.clone(),
            listen: self.listen.clone(),
            busy: Arc::clone(&self.busy),
        }
    }
}
