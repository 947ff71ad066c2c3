//! 机器翻译契约
//!
//! 文本 + 源语言 + 目标语言 → 译文。与识别一样，引擎是外部协作方，
//! 这里只有契约、HTTP 远程客户端和 stub。

mod remote;
mod stub;

use std::error::Error;
use std::fmt::{Display, Formatter};

use async_trait::async_trait;

use crate::types::Locale;

pub use remote::{RemoteTranslator, RemoteTranslatorConfig};
pub use stub::TranslatorStub;

/// 翻译失败，携带底层诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateError(pub String);

impl Display for TranslateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "translation failed: {}", self.0)
    }
}

impl Error for TranslateError {}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        src: Locale,
        dst: Locale,
    ) -> Result<String, TranslateError>;
}
