//! 分類リクエストの組み立て
//!
//! AnalysisRequest（テキスト・画像）からコンテンツパート列を作り、
//! 指示文とスキーマを添えて ClassificationRequest にまとめる。

use crate::error::{Error, Result};
use crate::prompts::{build_system_instruction, response_schema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Base64エンコード済み画像
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    /// Base64（標準アルファベット）
    pub data: String,
    /// 例: "image/png"
    pub media_type: String,
}

impl ImagePayload {
    pub fn new(data: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            media_type: media_type.into(),
        }
    }

    /// データとMIMEタイプの両方が揃っているか
    pub fn is_present(&self) -> bool {
        !self.data.is_empty() && !self.media_type.is_empty()
    }
}

/// マルチモーダルリクエストの1単位
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    InlineData { data: String, media_type: String },
    Text(String),
}

impl ContentPart {
    pub fn is_image(&self) -> bool {
        matches!(self, ContentPart::InlineData { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ContentPart::Text(_))
    }
}

/// 解析リクエスト（送信時に作られ、送信後に破棄される）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    text: Option<String>,
    image: Option<ImagePayload>,
}

impl AnalysisRequest {
    /// テキストか画像の少なくとも一方が必要
    ///
    /// 空白のみのテキスト、データまたはMIMEタイプが空の画像は「なし」とみなす。
    pub fn new(text: Option<String>, image: Option<ImagePayload>) -> Result<Self> {
        let text = text.filter(|t| !t.trim().is_empty());
        let image = image.filter(ImagePayload::is_present);

        if text.is_none() && image.is_none() {
            return Err(Error::InvalidInput);
        }

        Ok(Self { text, image })
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    /// コンテンツパート列（画像 → テキストの順）
    pub fn content_parts(&self) -> Vec<ContentPart> {
        let mut parts = Vec::with_capacity(2);

        if let Some(image) = &self.image {
            parts.push(ContentPart::InlineData {
                data: image.data.clone(),
                media_type: image.media_type.clone(),
            });
        }

        if let Some(text) = &self.text {
            parts.push(ContentPart::Text(text.clone()));
        }

        parts
    }
}

/// 分類サービスに渡すプロバイダ非依存のリクエスト
#[derive(Debug, Clone)]
pub struct ClassificationRequest {
    pub system_instruction: String,
    pub response_schema: Value,
    pub parts: Vec<ContentPart>,
}

impl ClassificationRequest {
    pub fn from_analysis(request: &AnalysisRequest) -> Result<Self> {
        let parts = request.content_parts();
        if parts.is_empty() {
            return Err(Error::InvalidInput);
        }

        Ok(Self {
            system_instruction: build_system_instruction(),
            response_schema: response_schema(),
            parts,
        })
    }

    /// テキストパートの合計文字数（ログ用）
    pub fn text_len(&self) -> usize {
        self.parts
            .iter()
            .map(|p| match p {
                ContentPart::Text(t) => t.chars().count(),
                ContentPart::InlineData { .. } => 0,
            })
            .sum()
    }
}
