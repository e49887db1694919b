//! APIレスポンスパーサー
//!
//! 分類サービスが返したテキストをJSONとして AnalysisResult にパースする
//! （全体を囲む ```json フェンスのみ外す）

use crate::error::{Error, Result};
use crate::types::AnalysisResult;

/// レスポンス全体を囲む ```json フェンスを外す
///
/// フェンスがレスポンス全体を囲んでいるときだけ中身を返す。
/// それ以外はトリムしたレスポンスをそのまま返す（前後に文章があればJSONとして失敗する）。
///
/// # Examples
/// ```
/// use scam_scan_common::strip_json_fence;
///
/// let response = "```json\n{\"riskScore\": 10}\n```";
/// assert_eq!(strip_json_fence(response), "{\"riskScore\": 10}");
///
/// let response = "Result: {\"riskScore\": 10}";
/// assert_eq!(strip_json_fence(response), response);
/// ```
pub fn strip_json_fence(response: &str) -> &str {
    let trimmed = response.trim();

    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"));

    match inner {
        // 中にさらにフェンスがあれば1ブロックではない
        Some(body) if !body.contains("```") => body.trim(),
        _ => trimmed,
    }
}

/// 分類レスポンスをパース
///
/// # Arguments
/// * `payload` - 分類サービスが返したテキスト（None はペイロードなし）
///
/// # Returns
/// * `Ok(AnalysisResult)` - パース成功
/// * `Err(EmptyResponse)` - ペイロードなし、または空白のみ
/// * `Err(MalformedResponse)` - JSONでない、またはスキーマ不一致
pub fn parse_analysis_response(payload: Option<&str>) -> Result<AnalysisResult> {
    let text = match payload {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(Error::EmptyResponse),
    };

    serde_json::from_str(strip_json_fence(text))
        .map_err(|e| Error::MalformedResponse(format!("JSON parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConfidenceLevel, ScamCategory};

    const SAMPLE: &str = r#"{"riskScore":85,"category":"UPI fraud","reason":"Unknown receiver asks to pay a refund fee.","actions":["Do not pay"],"confidence":"High"}"#;

    // =============================================
    // strip_json_fence テスト
    // =============================================

    #[test]
    fn test_strip_fence_raw() {
        assert_eq!(strip_json_fence(SAMPLE), SAMPLE);
        assert_eq!(strip_json_fence(&format!("\n  {}  \n", SAMPLE)), SAMPLE);
    }

    #[test]
    fn test_strip_fence_json_block() {
        let response = format!("```json\n{}\n```", SAMPLE);
        assert_eq!(strip_json_fence(&response), SAMPLE);

        let response = format!("```\n{}\n```", SAMPLE);
        assert_eq!(strip_json_fence(&response), SAMPLE);
    }

    #[test]
    fn test_strip_fence_keeps_surrounding_text() {
        let response = format!("Here is the analysis:\n```json\n{}\n```\nStay safe.", SAMPLE);
        assert_eq!(strip_json_fence(&response), response.trim());
    }

    // =============================================
    // parse_analysis_response テスト
    // =============================================

    #[test]
    fn test_parse_sample_payload() {
        let result = parse_analysis_response(Some(SAMPLE)).unwrap();
        assert_eq!(result.risk_score, 85);
        assert_eq!(result.category, ScamCategory::UpiFraud);
        assert_eq!(result.reason, "Unknown receiver asks to pay a refund fee.");
        assert_eq!(result.actions, vec!["Do not pay".to_string()]);
        assert_eq!(result.confidence, ConfidenceLevel::High);
    }

    #[test]
    fn test_parse_keeps_action_order() {
        let payload = r#"{"riskScore":64,"category":"OTP scam","reason":"Asks for OTP","actions":["Do NOT share OTP/UPI PIN","Block the sender","Verify on official website/app"],"confidence":"Medium"}"#;
        let result = parse_analysis_response(Some(payload)).unwrap();
        assert_eq!(
            result.actions,
            vec!["Do NOT share OTP/UPI PIN", "Block the sender", "Verify on official website/app"]
        );
    }

    #[test]
    fn test_parse_unrecognized_category() {
        let payload = r#"{"riskScore":40,"category":"Crypto giveaway","reason":"r","actions":[],"confidence":"Low"}"#;
        let result = parse_analysis_response(Some(payload)).unwrap();
        assert_eq!(result.category, ScamCategory::Unrecognized("Crypto giveaway".into()));
    }

    #[test]
    fn test_parse_empty_payload() {
        assert!(matches!(parse_analysis_response(None), Err(Error::EmptyResponse)));
        assert!(matches!(parse_analysis_response(Some("")), Err(Error::EmptyResponse)));
        assert!(matches!(parse_analysis_response(Some(" \n ")), Err(Error::EmptyResponse)));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_analysis_response(Some(r#"{"riskScore": 85, "category": }"#));
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_missing_field() {
        let payload = r#"{"riskScore":85,"category":"UPI fraud","actions":[],"confidence":"High"}"#;
        let result = parse_analysis_response(Some(payload));
        match result {
            Err(Error::MalformedResponse(msg)) => assert!(msg.contains("reason")),
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_confidence() {
        let payload = r#"{"riskScore":85,"category":"UPI fraud","reason":"r","actions":[],"confidence":"Certain"}"#;
        assert!(matches!(
            parse_analysis_response(Some(payload)),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_fenced_payload() {
        let response = format!("```json\n{}\n```", SAMPLE);
        let result = parse_analysis_response(Some(&response)).unwrap();
        assert_eq!(result.risk_score, 85);
    }

    #[test]
    fn test_parse_prose_around_object_is_malformed() {
        let response = format!("Sure! Here is my analysis: {} Hope this helps.", SAMPLE);
        assert!(matches!(
            parse_analysis_response(Some(&response)),
            Err(Error::MalformedResponse(_))
        ));

        let response = format!("Here is the analysis:\n```json\n{}\n```\nStay safe.", SAMPLE);
        assert!(matches!(
            parse_analysis_response(Some(&response)),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_array_is_malformed() {
        let payload = r#"[1, 2, 3]"#;
        assert!(matches!(
            parse_analysis_response(Some(payload)),
            Err(Error::MalformedResponse(_))
        ));
    }
}
