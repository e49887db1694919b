//! 解析クライアント
//!
//! 1回のリクエスト/レスポンスで AnalysisResult を得るか、失敗を返す。
//! 外部の分類サービスは `Classifier` として注入する（テストではスタブ）。

pub mod gemini;

pub use gemini::GeminiClassifier;

use crate::error::Result;
use async_trait::async_trait;
use scam_scan_common::{
    parse_analysis_response, AnalysisRequest, AnalysisResult, ClassificationRequest, ImagePayload,
};

/// 外部分類サービス
///
/// 返り値はモデルが返したテキストそのもの。空なら `None`。
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, request: &ClassificationRequest) -> Result<Option<String>>;
}

#[async_trait]
impl<C: Classifier + ?Sized> Classifier for Box<C> {
    async fn classify(&self, request: &ClassificationRequest) -> Result<Option<String>> {
        (**self).classify(request).await
    }
}

pub struct AnalysisClient<C> {
    classifier: C,
}

impl<C: Classifier> AnalysisClient<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// 解析を1回実行（リトライなし）
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let classification = ClassificationRequest::from_analysis(request)?;

        tracing::debug!(
            parts = classification.parts.len(),
            has_image = request.image().is_some(),
            text_chars = classification.text_len(),
            instruction_chars = classification.system_instruction.len(),
            "sending classification request"
        );

        let payload = self.classifier.classify(&classification).await?;

        if let Some(text) = &payload {
            tracing::debug!(payload_chars = text.len(), "classification payload received");
        }

        let result = parse_analysis_response(payload.as_deref())?;

        tracing::info!(
            risk_score = result.risk_score,
            category = %result.category,
            confidence = %result.confidence,
            "analysis complete"
        );

        Ok(result)
    }

    /// テキスト・画像データ・MIMEタイプを個別に受け取る版
    ///
    /// 画像はデータとMIMEタイプの両方があるときだけ送る。
    pub async fn analyze_content(
        &self,
        text: &str,
        image_data: Option<&str>,
        image_media_type: Option<&str>,
    ) -> Result<AnalysisResult> {
        let image = match (image_data, image_media_type) {
            (Some(data), Some(media_type)) => Some(ImagePayload::new(data, media_type)),
            _ => None,
        };
        let request = AnalysisRequest::new(Some(text.to_string()), image)?;
        self.analyze(&request).await
    }
}
