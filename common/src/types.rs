//! 解析結果の型定義
//!
//! - AnalysisResult: 分類サービスから返る構造化結果
//! - ScamCategory: 既知カテゴリ + 未知ラベル（そのまま保持）
//! - ConfidenceLevel: Low / Medium / High の閉じた列挙
//! - RiskBand: スコア帯（表示用）

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 分類結果（全フィールド必須）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0〜100。数値なら丸めて範囲内に収める
    #[serde(deserialize_with = "deserialize_risk_score")]
    pub risk_score: u8,

    pub category: ScamCategory,

    /// 検出したレッドフラグと判定理由
    pub reason: String,

    /// 推奨アクション（順序あり）
    pub actions: Vec<String>,

    pub confidence: ConfidenceLevel,
}

impl AnalysisResult {
    pub fn band(&self) -> RiskBand {
        RiskBand::from_score(self.risk_score)
    }
}

fn deserialize_risk_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom("riskScore must be a finite number"));
    }
    Ok(value.round().clamp(0.0, 100.0) as u8)
}

/// 詐欺カテゴリ
///
/// 既知ラベルは大文字小文字を区別せずに照合する。
/// 一致しないラベルは `Unrecognized` に原文のまま入る。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScamCategory {
    UpiFraud,
    OtpScam,
    FakeJobOffer,
    OnlineShoppingScam,
    KycUpdateScam,
    PhishingLink,
    LoanScam,
    RomanceScam,
    GovernmentImpersonation,
    InvestmentScam,
    TechSupportScam,
    LotteryPrizeScam,
    SubscriptionFraud,
    SocialEngineering,
    Other,
    Safe,
    Unrecognized(String),
}

impl ScamCategory {
    /// 既知カテゴリ一覧（プロンプトの並び順）
    pub fn known() -> [ScamCategory; 16] {
        [
            ScamCategory::UpiFraud,
            ScamCategory::OtpScam,
            ScamCategory::FakeJobOffer,
            ScamCategory::OnlineShoppingScam,
            ScamCategory::KycUpdateScam,
            ScamCategory::PhishingLink,
            ScamCategory::LoanScam,
            ScamCategory::RomanceScam,
            ScamCategory::GovernmentImpersonation,
            ScamCategory::InvestmentScam,
            ScamCategory::TechSupportScam,
            ScamCategory::LotteryPrizeScam,
            ScamCategory::SubscriptionFraud,
            ScamCategory::SocialEngineering,
            ScamCategory::Other,
            ScamCategory::Safe,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            ScamCategory::UpiFraud => "UPI fraud",
            ScamCategory::OtpScam => "OTP scam",
            ScamCategory::FakeJobOffer => "Fake job offer",
            ScamCategory::OnlineShoppingScam => "Online shopping scam",
            ScamCategory::KycUpdateScam => "KYC update scam",
            ScamCategory::PhishingLink => "Phishing link / Fake website",
            ScamCategory::LoanScam => "Loan scam",
            ScamCategory::RomanceScam => "Romance scam",
            ScamCategory::GovernmentImpersonation => "Government impersonation",
            ScamCategory::InvestmentScam => "Investment scam",
            ScamCategory::TechSupportScam => "Tech support scam",
            ScamCategory::LotteryPrizeScam => "Lottery / Prize scam",
            ScamCategory::SubscriptionFraud => "Subscription fraud",
            ScamCategory::SocialEngineering => "Social Engineering",
            ScamCategory::Other => "Other",
            ScamCategory::Safe => "Safe",
            ScamCategory::Unrecognized(raw) => raw,
        }
    }

    /// ラベル文字列からカテゴリを判定
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();

        // プロンプト上の表記ゆれ
        if trimmed.eq_ignore_ascii_case("UPI fraud / Unverified Receiver") {
            return ScamCategory::UpiFraud;
        }

        Self::known()
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| ScamCategory::Unrecognized(label.to_string()))
    }
}

impl From<String> for ScamCategory {
    fn from(label: String) -> Self {
        ScamCategory::from_label(&label)
    }
}

impl From<ScamCategory> for String {
    fn from(category: ScamCategory) -> Self {
        match category {
            ScamCategory::Unrecognized(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for ScamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 信頼度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 3] = [
        ConfidenceLevel::Low,
        ConfidenceLevel::Medium,
        ConfidenceLevel::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::High => "High",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// リスクスコア帯
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    /// 0〜30
    Safe,
    /// 31〜60
    Suspicious,
    /// 61〜100
    HighRisk,
}

impl RiskBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=30 => RiskBand::Safe,
            31..=60 => RiskBand::Suspicious,
            _ => RiskBand::HighRisk,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Safe => "Safe",
            RiskBand::Suspicious => "Suspicious",
            RiskBand::HighRisk => "High Risk",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
