//! Gemini API連携
//!
//! ClassificationRequest を generateContent のリクエストに変換して送信し、
//! 先頭候補のテキストパートを連結して返す。

use super::Classifier;
use crate::config::Config;
use crate::error::{Result, ScamScanError};
use async_trait::async_trait;
use scam_scan_common::{ClassificationRequest, ContentPart};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Gemini APIリクエスト
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

/// Gemini APIレスポンス
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiRequest {
    fn from_classification(request: &ClassificationRequest) -> Self {
        let parts = request
            .parts
            .iter()
            .map(|part| match part {
                ContentPart::InlineData { data, media_type } => Part::InlineData {
                    inline_data: InlineData {
                        mime_type: media_type.clone(),
                        data: data.clone(),
                    },
                },
                ContentPart::Text(text) => Part::Text { text: text.clone() },
            })
            .collect();

        Self {
            system_instruction: SystemInstruction {
                parts: vec![Part::Text {
                    text: request.system_instruction.clone(),
                }],
            },
            contents: vec![Content { role: "user", parts }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: request.response_schema.clone(),
            },
        }
    }
}

impl GeminiResponse {
    /// 先頭候補のテキストを連結（なければ None）
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Gemini generateContent を呼ぶ Classifier
pub struct GeminiClassifier {
    http: reqwest::Client,
    config: Config,
}

impl GeminiClassifier {
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        let http = builder
            .build()
            .map_err(|e| ScamScanError::Config(format!("HTTPクライアント初期化エラー: {}", e)))?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl Classifier for GeminiClassifier {
    async fn classify(&self, request: &ClassificationRequest) -> Result<Option<String>> {
        // APIキーは呼び出し時に解決する
        let api_key = self.config.get_api_key()?;
        let url = self.config.generate_content_url();
        let body = GeminiRequest::from_classification(request);

        tracing::debug!(model = %self.config.model, %url, "calling Gemini");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Gemini returned an error status");
            return Err(ScamScanError::Transport(format!("API error {}: {}", status, text)));
        }

        let payload: GeminiResponse = response.json().await?;
        Ok(payload.into_text())
    }
}
