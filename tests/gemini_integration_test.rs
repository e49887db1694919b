use scam_scan::analyzer::{AnalysisClient, GeminiClassifier};
use scam_scan::config::Config;
use scam_scan_common::ScamCategory;

#[tokio::test]
async fn gemini_text_analysis_integration() {
    match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => {}
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            return;
        }
    }

    let message = "Dear customer, your SBI account KYC has expired and will be blocked today. \
                   Update now at http://sbi-kyc-update.top and share the OTP you receive.";

    let classifier = GeminiClassifier::new(Config::default()).expect("client init failed");
    let client = AnalysisClient::new(classifier);
    let result = client
        .analyze_content(message, None, None)
        .await
        .expect("analysis failed");

    assert!(result.risk_score > 60, "expected high risk, got {}", result.risk_score);
    assert!(!result.reason.is_empty());
    assert!(!result.actions.is_empty());
    assert_ne!(result.category, ScamCategory::Safe);
}
