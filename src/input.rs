//! 画像ファイル読み込み
//!
//! ファイルを非同期に読み、MIMEタイプを判定してBase64化する。

use crate::error::{Result, ScamScanError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageFormat;
use scam_scan_common::ImagePayload;
use std::path::Path;

/// 画像を読み込んで ImagePayload にする
///
/// MIMEタイプはマジックバイト優先、判定できなければ拡張子から。
/// どちらでも画像と判定できないファイルは拒否する。
pub async fn load_image(path: &Path) -> Result<ImagePayload> {
    if !path.is_file() {
        return Err(ScamScanError::ImageLoad(format!(
            "ファイルが見つかりません: {}",
            path.display()
        )));
    }

    let bytes = tokio::fs::read(path).await?;
    let media_type = detect_media_type(path, &bytes).ok_or_else(|| {
        ScamScanError::ImageLoad(format!("画像ファイルではありません: {}", path.display()))
    })?;

    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        media_type,
        "image loaded"
    );

    Ok(encode_image(&bytes, media_type))
}

pub fn encode_image(bytes: &[u8], media_type: &str) -> ImagePayload {
    ImagePayload::new(STANDARD.encode(bytes), media_type)
}

fn detect_media_type(path: &Path, bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes)
        .ok()
        .or_else(|| ImageFormat::from_path(path).ok())
        .map(|format| format.to_mime_type())
        .filter(|mime| mime.starts_with("image/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_encode_image() {
        let payload = encode_image(b"hello", "image/png");
        assert_eq!(payload.data, "aGVsbG8=");
        assert_eq!(payload.media_type, "image/png");
    }

    #[test]
    fn test_detect_by_magic_bytes() {
        let mut bytes = PNG_MAGIC.to_vec();
        bytes.extend_from_slice(b"rest-of-file");
        // 拡張子よりマジックバイトを優先
        assert_eq!(detect_media_type(Path::new("shot.jpg"), &bytes), Some("image/png"));
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(detect_media_type(Path::new("shot.jpeg"), b"??"), Some("image/jpeg"));
        assert_eq!(detect_media_type(Path::new("notes.txt"), b"plain text"), None);
    }

    #[tokio::test]
    async fn test_load_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("screenshot.png");
        std::fs::write(&path, PNG_MAGIC).unwrap();

        let payload = load_image(&path).await.unwrap();
        assert_eq!(payload.media_type, "image/png");
        assert_eq!(payload.data, STANDARD.encode(PNG_MAGIC));
    }

    #[tokio::test]
    async fn test_load_image_missing() {
        let result = load_image(Path::new("/nonexistent/shot.png")).await;
        assert!(matches!(result, Err(ScamScanError::ImageLoad(_))));
    }

    #[tokio::test]
    async fn test_load_image_not_an_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("message.txt");
        std::fs::write(&path, "Your parcel is held").unwrap();

        let result = load_image(&path).await;
        assert!(matches!(result, Err(ScamScanError::ImageLoad(_))));
    }
}
