// src/recognizer/remote.rs
// HTTP client implementation for a local speech recognition service

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::types::{AudioSample, Locale};

use super::{RecognizeError, Recognizer};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteRecognizerConfig {
    /// 服务基础 URL，例如 "http://127.0.0.1:6006"
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for RemoteRecognizerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:6006".to_string(),
            timeout_ms: 30_000,
        }
    }
}

#[derive(Debug, Serialize)]
struct RecognizeHttpRequest {
    audio_b64: String,
    sample_rate: u32,
    language: String,
}

#[derive(Debug, Deserialize)]
struct RecognizeHttpResponse {
    ok: bool,
    text: Option<String>,
    /// 服务听清了请求但听不懂音频
    #[serde(default)]
    unintelligible: bool,
    error: Option<String>,
}

/// 远程识别服务客户端
pub struct RemoteRecognizer {
    http: Client,
    config: RemoteRecognizerConfig,
}

impl RemoteRecognizer {
    pub fn new(config: RemoteRecognizerConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { http, config })
    }

    async fn post(
        &self,
        request: &RecognizeHttpRequest,
    ) -> anyhow::Result<RecognizeHttpResponse> {
        let url = format!("{}/v1/recognize", self.config.endpoint);
        let response = self.http.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "HTTP error: {} - {}",
                response.status(),
                response.text().await.unwrap_or_default()
            ));
        }

        Ok(response.json().await?)
    }
}

// Maps a service response body to the recognizer contract:
// unintelligible flag wins over everything else, then ok/error, then text.
fn map_response(response: RecognizeHttpResponse) -> Result<String, RecognizeError> {
    if response.unintelligible {
        return Err(RecognizeError::Unintelligible);
    }
    if !response.ok {
        return Err(RecognizeError::Service(
            response.error.unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }

    response
        .text
        .ok_or_else(|| RecognizeError::Service("No text in response".to_string()))
}

#[async_trait]
impl Recognizer for RemoteRecognizer {
    async fn recognize(
        &self,
        sample: &AudioSample,
        locale: Locale,
    ) -> Result<String, RecognizeError> {
        let request = RecognizeHttpRequest {
            audio_b64: BASE64.encode(&sample.data),
            sample_rate: sample.sample_rate,
            language: locale.recognition_tag().to_string(),
        };

        eprintln!(
            "[ASR] Sending request to recognition service: {} (audio: {} bytes, language: {})",
            self.config.endpoint,
            sample.data.len(),
            request.language
        );

        let response = self
            .post(&request)
            .await
            .map_err(|e| RecognizeError::Service(e.to_string()))?;

        map_response(response)
    }
}
