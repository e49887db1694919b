use thiserror::Error;

/// 解析失敗時にユーザーへ出す共通メッセージ
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Unable to analyze content. Please try again or check your connection.";

#[derive(Error, Debug)]
pub enum ScamScanError {
    #[error(transparent)]
    Common(#[from] scam_scan_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`scam-scan config --set-api-key YOUR_KEY` で設定するか GEMINI_API_KEY を設定してください")]
    MissingApiKey,

    #[error("通信エラー: {0}")]
    Transport(String),

    #[error("解析中のリクエストがあります。完了してから再送信してください")]
    Busy,

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

impl From<reqwest::Error> for ScamScanError {
    fn from(e: reqwest::Error) -> Self {
        ScamScanError::Transport(e.to_string())
    }
}

impl From<dialoguer::Error> for ScamScanError {
    fn from(e: dialoguer::Error) -> Self {
        ScamScanError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScamScanError>;
