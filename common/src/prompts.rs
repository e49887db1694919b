//! プロンプト生成モジュール
//!
//! 分類サービスに渡す固定の指示文と、返却JSONのスキーマ宣言:
//! - build_system_instruction: 分類ポリシー（スコア帯・カテゴリ・理由・対処・信頼度）
//! - response_schema: 返却オブジェクトの形（Gemini responseSchema 形式）

use crate::types::{ConfidenceLevel, ScamCategory};
use serde_json::{json, Value};

/// 返却JSONの必須フィールド
pub const RESPONSE_FIELDS: &[&str] = &["riskScore", "category", "reason", "actions", "confidence"];

/// 推奨アクションの例（プロンプトに列挙）
pub const EXAMPLE_ACTIONS: &[&str] = &[
    "⚠ Unverified Receiver Detected - Do NOT Pay",
    "Do NOT click the link",
    "Do NOT share OTP/UPI PIN",
    "Block the sender",
    "Verify on official website/app",
];

/// システム指示文を生成
///
/// カテゴリ一覧は `ScamCategory::known()` から組み立てる。
/// `Other` はモデルに提示しない（未知ラベルはそのまま受け取る）。
pub fn build_system_instruction() -> String {
    let categories = ScamCategory::known()
        .iter()
        .filter(|c| **c != ScamCategory::Other)
        .map(|c| match c {
            ScamCategory::UpiFraud => "   - UPI fraud / Unverified Receiver".to_string(),
            ScamCategory::Safe => "   - Safe (if no scam detected)".to_string(),
            other => format!("   - {}", other.label()),
        })
        .collect::<Vec<_>>()
        .join("\n");

    let actions = EXAMPLE_ACTIONS
        .iter()
        .map(|a| format!("   - {}", a))
        .collect::<Vec<_>>()
        .join("\n");

    let confidence = ConfidenceLevel::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(" / ");

    format!(
        r#"You are an early-warning scam detection system. Your job is to flag scams BEFORE the user clicks, pays, or responds.

Analyze any text, message, screenshot (read the text in it), email, UPI payment request, job offer, website link, or unknown phone number.

For every input, follow this structure and output strictly valid JSON:

1. SCAM RISK SCORE (riskScore, 0-100):
   - 0-30: Safe
   - 31-60: Suspicious (Potential Risk)
   - 61-100: High Risk (likely a scam)

2. SCAM CATEGORY (category, pick the best match):
{categories}

3. RED FLAGS DETECTED (reason):
   Identify phishing tone, fake urgency, malicious links, or unusual requests.
   Explain clearly why this score was given.

4. ACTIONS TO TAKE BEFORE MONEY IS LOST (actions):
   Give short, simple steps such as:
{actions}

5. CONFIDENCE LEVEL (confidence):
   {confidence}

RULES:
- Keep explanations professional, and urgent when a scam is detected.
- NEVER ask for personal information.
"#
    )
}

/// 返却JSONスキーマ（Gemini responseSchema 形式）
pub fn response_schema() -> Value {
    let confidence: Vec<&str> = ConfidenceLevel::ALL.iter().map(|c| c.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "riskScore": {
                "type": "NUMBER",
                "description": "A score from 0 to 100 indicating the likelihood of a scam."
            },
            "category": {
                "type": "STRING",
                "description": "The category of the scam or 'Safe'."
            },
            "reason": {
                "type": "STRING",
                "description": "Red flags detected and a brief explanation of the analysis."
            },
            "actions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Recommended actions for the user, most urgent first."
            },
            "confidence": {
                "type": "STRING",
                "enum": confidence,
                "description": "Confidence level of the analysis."
            }
        },
        "required": RESPONSE_FIELDS
    })
}
