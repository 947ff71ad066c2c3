pub mod error;
pub mod numeral;
pub mod pipeline;
pub mod presentation;
pub mod recognizer;
pub mod speech_capture;
pub mod translator;
pub mod types;

pub use error::{BridgeError, BridgeResult};
pub use numeral::{localize_number, localize_text, vn_cardinal, zh_digits, LocalizedText};
pub use pipeline::{ConversationPipeline, ConversationPipelineBuilder, TurnError};
pub use presentation::{apply, ui_channel, PresentationSink, UiDispatcher, UiUpdate, UiUpdates};
pub use recognizer::{
    RecognizeError, Recognizer, RecognizerStub, RemoteRecognizer, RemoteRecognizerConfig,
};
pub use speech_capture::{CaptureError, CaptureStub, ListenConfig, SpeechCapture};
pub use translator::{
    RemoteTranslator, RemoteTranslatorConfig, TranslateError, Translator, TranslatorStub,
};
pub use types::{AudioSample, ChannelId, ChannelKind, Locale, SideId, SideProfile};
