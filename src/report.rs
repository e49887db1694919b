//! 解析結果のターミナル表示

use indicatif::{ProgressBar, ProgressStyle};
use scam_scan_common::{AnalysisResult, RiskBand};
use std::fmt::Write as _;
use std::time::Duration;

/// 解析中スピナー
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({elapsed})") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn band_marker(band: RiskBand) -> &'static str {
    match band {
        RiskBand::Safe => "✅",
        RiskBand::Suspicious => "⚠",
        RiskBand::HighRisk => "🚨",
    }
}

/// スコアバー（20マス）
fn score_bar(score: u8) -> String {
    let filled = (score as usize * 20 + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

/// 結果カードを文字列で組み立てる
pub fn render(result: &AnalysisResult) -> String {
    let band = result.band();
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", band_marker(band), band.label().to_uppercase());
    let _ = writeln!(out, "  リスクスコア: {}/100 {}", result.risk_score, score_bar(result.risk_score));
    let _ = writeln!(out, "  カテゴリ    : {}", result.category);
    let _ = writeln!(out, "  信頼度      : {}", result.confidence);
    let _ = writeln!(out);
    let _ = writeln!(out, "危険な兆候:");
    for line in result.reason.lines() {
        let _ = writeln!(out, "  {}", line);
    }

    if !result.actions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "対処法:");
        for (i, action) in result.actions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, action);
        }
    }

    out
}
