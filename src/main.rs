use anyhow::Context;
use clap::Parser;
use scam_scan::{analyzer, cli, config, error, input, interactive, logging, report, session};
use analyzer::{AnalysisClient, GeminiClassifier};
use cli::{Cli, Commands};
use config::Config;
use scam_scan_common::{build_system_instruction, response_schema, InputCollector};
use session::Session;
use std::io::Read;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Analyze { text, image, json } => {
            let mut collector = InputCollector::new();

            // 1. 入力
            if let Some(text) = text {
                let text = if text == "-" {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("標準入力の読み込みに失敗")?;
                    buf
                } else {
                    text
                };
                collector.set_text(text);
            }

            if let Some(path) = image {
                let payload = input::load_image(&path).await?;
                collector.select_image(path.display().to_string(), payload);
            }

            if !collector.can_submit() {
                anyhow::bail!("--text または --image を指定してください");
            }

            // 2. 解析
            let config = load_config()?;
            let session = Session::new(AnalysisClient::new(GeminiClassifier::new(config)?));
            let pb = (!json).then(|| report::spinner("解析中..."));
            let outcome = session.submit(&collector).await;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }

            // 3. 表示
            match outcome {
                Ok(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
                Ok(result) => print!("{}", report::render(&result)),
                // 詳細は --verbose のログに出る
                Err(_) => {
                    eprintln!("🚨 {}", error::GENERIC_FAILURE_MESSAGE);
                    std::process::exit(1);
                }
            }
        }

        Commands::Interactive => {
            let config = load_config()?;
            let session = Session::new(AnalysisClient::new(GeminiClassifier::new(config)?));
            interactive::run(&session).await?;
        }

        Commands::Config { set_api_key, model, show } => {
            let mut config = load_config()?;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = model {
                config.model = model;
                config.save()?;
                println!("✔ モデルを設定しました: {}", config.model);
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  エンドポイント: {}", config.generate_content_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  APIキー: {}", if config.get_api_key().is_ok() { "設定済み" } else { "未設定" });
            }
        }

        Commands::Schema => {
            println!("{}", build_system_instruction());
            println!("{}", serde_json::to_string_pretty(&response_schema())?);
        }
    }

    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    Config::load().context("設定ファイルの読み込みに失敗")
}
