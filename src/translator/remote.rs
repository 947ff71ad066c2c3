//! 远程翻译服务 HTTP 客户端

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::types::Locale;

use super::{TranslateError, Translator};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteTranslatorConfig {
    /// 服务基础 URL，例如 "http://127.0.0.1:5008"
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for RemoteTranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5008".to_string(),
            timeout_ms: 30_000,
        }
    }
}

#[derive(Debug, Serialize)]
struct TranslateHttpRequest {
    src_lang: String,
    tgt_lang: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct TranslateHttpResponse {
    ok: bool,
    text: Option<String>,
    error: Option<String>,
}

/// 远程翻译服务客户端
#[derive(Clone)]
pub struct RemoteTranslator {
    http: Client,
    config: RemoteTranslatorConfig,
}

impl RemoteTranslator {
    pub fn new(config: RemoteTranslatorConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl Translator for RemoteTranslator {
    async fn translate(
        &self,
        text: &str,
        src: Locale,
        dst: Locale,
    ) -> Result<String, TranslateError> {
        let request = TranslateHttpRequest {
            src_lang: src.translation_tag().to_string(),
            tgt_lang: dst.translation_tag().to_string(),
            text: text.to_string(),
        };

        let url = format!("{}/v1/translate", self.config.endpoint);
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslateError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError(format!("HTTP error: {} - {}", status, body)));
        }

        let body: TranslateHttpResponse = response
            .json()
            .await
            .map_err(|e| TranslateError(format!("invalid response: {}", e)))?;

        map_response(body)
    }
}

/// 把服务响应体映射为翻译契约的结果
fn map_response(body: TranslateHttpResponse) -> Result<String, TranslateError> {
    if !body.ok {
        return Err(TranslateError(
            body.error.unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }

    body.text
        .ok_or_else(|| TranslateError("No text in response".to_string()))
}
