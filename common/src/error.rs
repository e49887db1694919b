//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: text or image is required")]
    InvalidInput,

    #[error("Empty response from classifier")]
    EmptyResponse,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
