//! 入力収集
//!
//! ユーザー操作（テキスト入力・画像選択・画像削除）を保持し、
//! 送信可能なときだけ AnalysisRequest を作る。

use crate::error::Result;
use crate::request::{AnalysisRequest, ImagePayload};

/// 選択中の画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    /// 選択元（ファイルパスなど）
    pub source: String,
    pub payload: ImagePayload,
}

/// テキストと画像1枚を集める
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    text: String,
    image: Option<SelectedImage>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    /// 画像を選択（既存の選択は置き換え）
    pub fn select_image(&mut self, source: impl Into<String>, payload: ImagePayload) {
        self.image = Some(SelectedImage {
            source: source.into(),
            payload,
        });
    }

    /// 選択を解除。選択元も忘れるので同じファイルを再選択できる
    pub fn remove_image(&mut self) -> Option<SelectedImage> {
        self.image.take()
    }

    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
            || self.image.as_ref().is_some_and(|img| img.payload.is_present())
    }

    pub fn build_request(&self) -> Result<AnalysisRequest> {
        AnalysisRequest::new(
            Some(self.text.clone()),
            self.image.as_ref().map(|img| img.payload.clone()),
        )
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.image = None;
    }
}
