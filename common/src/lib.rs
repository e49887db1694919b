//! Scam Scan Common Library
//!
//! 分類リクエストの組み立てとレスポンス解析（I/Oなし）

pub mod types;
pub mod error;
pub mod prompts;
pub mod request;
pub mod collector;
pub mod parser;

pub use types::{AnalysisResult, ConfidenceLevel, RiskBand, ScamCategory};
pub use error::{Error, Result};
pub use prompts::{build_system_instruction, response_schema, RESPONSE_FIELDS};
pub use request::{AnalysisRequest, ClassificationRequest, ContentPart, ImagePayload};
pub use collector::{InputCollector, SelectedImage};
pub use parser::{parse_analysis_response, strip_json_fence};
