use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::error::{BridgeError, BridgeResult};
use crate::presentation::UiDispatcher;
use crate::recognizer::Recognizer;
use crate::speech_capture::{ListenConfig, SpeechCapture};
use crate::translator::Translator;

use super::core::ConversationPipeline;

pub struct ConversationPipelineBuilder {
    capture: Option<Arc<dyn SpeechCapture>>,
    recognizer: Option<Arc<dyn Recognizer>>,
    translator: Option<Arc<dyn Translator>>,
    ui: Option<UiDispatcher>,
    listen: ListenConfig,
}

impl ConversationPipelineBuilder {
    pub fn new() -> Self {
        Self {
            capture: None,
            recognizer: None,
            translator: None,
            ui: None,
            listen: ListenConfig::default(),
        }
    }

    pub fn capture(mut self, capture: Arc<dyn SpeechCapture>) -> Self {
        self.capture = Some(capture);
        self
    }

    pub fn recognizer(mut self, recognizer: Arc<dyn Recognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn ui(mut self, ui: UiDispatcher) -> Self {
        self.ui = Some(ui);
        self
    }

    /// 覆盖默认的监听参数（0.5s 校准 / 5s 超时 / 10s 单句上限）
    pub fn with_listen_config(mut self, listen: ListenConfig) -> Self {
        self.listen = listen;
        self
    }

    pub fn build(self) -> BridgeResult<ConversationPipeline> {
        Ok(ConversationPipeline {
            capture: self
                .capture
                .ok_or_else(|| BridgeError::new("capture is missing"))?,
            recognizer: self
                .recognizer
                .ok_or_else(|| BridgeError::new("recognizer is missing"))?,
            translator: self
                .translator
                .ok_or_else(|| BridgeError::new("translator is missing"))?,
            ui: self.ui.ok_or_else(|| BridgeError::new("ui is missing"))?,
            listen: self.listen,
            busy: Arc::new([AtomicBool::new(false), AtomicBool::new(false)]),
        })
    }
}

impl Default for ConversationPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
