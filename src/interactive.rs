//! 対話モード
//!
//! テキスト入力・画像添付/削除・解析をメニューで繰り返す。
//! 解析失敗は共通メッセージを出してメニューに戻る。

use crate::analyzer::Classifier;
use crate::error::Result;
use crate::input::load_image;
use crate::report;
use crate::session::Session;
use dialoguer::{Input, Select};
use scam_scan_common::InputCollector;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    EditText,
    AttachImage,
    RemoveImage,
    Analyze,
    AnalyzeAnother,
    Quit,
}

impl MenuAction {
    fn label(&self) -> &'static str {
        match self {
            MenuAction::EditText => "テキストを入力 / 編集",
            MenuAction::AttachImage => "スクリーンショットを添付",
            MenuAction::RemoveImage => "スクリーンショットを削除",
            MenuAction::Analyze => "解析する",
            MenuAction::AnalyzeAnother => "別の内容を解析",
            MenuAction::Quit => "終了",
        }
    }
}

/// 現在の入力状態で選べるメニュー
fn menu_actions(input: &InputCollector) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::EditText, MenuAction::AttachImage];
    if input.image().is_some() {
        actions.push(MenuAction::RemoveImage);
    }
    // 送信できないときは解析を出さない
    if input.can_submit() {
        actions.push(MenuAction::Analyze);
    }
    actions.push(MenuAction::AnalyzeAnother);
    actions.push(MenuAction::Quit);
    actions
}

fn preview(text: &str) -> String {
    let first_line = text.trim().lines().next().unwrap_or("");
    let short: String = first_line.chars().take(60).collect();
    if short.chars().count() < text.trim().chars().count() {
        format!("{}…", short)
    } else {
        short
    }
}

fn print_status(input: &InputCollector) {
    println!();
    if input.text().trim().is_empty() {
        println!("  テキスト: (なし)");
    } else {
        println!("  テキスト: {}", preview(input.text()));
    }
    match input.image() {
        Some(img) => println!("  画像    : {} ({})", img.source, img.payload.media_type),
        None => println!("  画像    : (なし)"),
    }
}

pub async fn run<C: Classifier>(session: &Session<C>) -> Result<()> {
    println!("🛡  scam-scan - 対話モード\n");
    println!("怪しいメッセージを貼り付けるかスクリーンショットを添付し、「解析する」を選んでください。");

    let mut input = InputCollector::new();

    loop {
        print_status(&input);

        let actions = menu_actions(&input);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let selected = Select::new()
            .with_prompt("操作を選択")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selected] {
            MenuAction::EditText => {
                let text: String = Input::new()
                    .with_prompt("メッセージ本文")
                    .with_initial_text(input.text())
                    .allow_empty(true)
                    .interact_text()?;
                input.set_text(text);
            }

            MenuAction::AttachImage => {
                let path: String = Input::new()
                    .with_prompt("画像のパス")
                    .allow_empty(true)
                    .interact_text()?;
                let path = path.trim();
                if path.is_empty() {
                    continue;
                }

                match load_image(&PathBuf::from(path)).await {
                    Ok(payload) => {
                        input.select_image(path, payload);
                        println!("✔ 添付しました: {}", path);
                    }
                    Err(e) => println!("✖ {}", e),
                }
            }

            MenuAction::RemoveImage => {
                if let Some(removed) = input.remove_image() {
                    println!("✔ 削除しました: {}", removed.source);
                }
            }

            MenuAction::Analyze => {
                let pb = report::spinner("解析中...");
                let outcome = session.submit(&input).await;
                pb.finish_and_clear();

                let view = session.view().await;
                match (outcome, view.result, view.error) {
                    (Ok(_), Some(result), _) => println!("\n{}", report::render(&result)),
                    (_, _, Some(message)) => println!("\n🚨 {}", message),
                    (Err(e), _, None) => println!("\n✖ {}", e),
                    (Ok(_), None, None) => {}
                }
            }

            MenuAction::AnalyzeAnother => {
                input.clear();
                session.reset().await;
                println!("✔ 入力をクリアしました");
            }

            MenuAction::Quit => break,
        }
    }

    Ok(())
}
