//! バイナリの終了コードと出力のテスト
//!
//! HOME を一時ディレクトリに差し替えて実行する

use scam_scan::error::GENERIC_FAILURE_MESSAGE;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scam-scan"))
        .args(args)
        .env("HOME", home)
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_config(home: &Path, content: &str) {
    let dir = home.join(".config").join("scam-scan");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.json"), content).unwrap();
}

#[test]
fn test_schema_ignores_corrupt_config() {
    let home = tempdir().unwrap();
    write_config(home.path(), "{ not json");

    let output = run(home.path(), &["schema"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("riskScore"));
}

#[test]
fn test_config_show_reports_corrupt_config() {
    let home = tempdir().unwrap();
    write_config(home.path(), "{ not json");

    let output = run(home.path(), &["config", "--show"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("設定ファイルの読み込みに失敗"));
}

#[test]
fn test_analyze_failure_prints_banner_once() {
    let home = tempdir().unwrap();

    // キー未設定なので解析は失敗する
    let output = run(home.path(), &["analyze", "--text", "Your KYC expires today"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches(GENERIC_FAILURE_MESSAGE).count(), 1);
    assert!(!stderr.contains("Error:"));
    assert!(!stderr.contains("APIキー"));
}
