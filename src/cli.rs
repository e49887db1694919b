use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scam-scan")]
#[command(about = "メッセージ・スクリーンショットの詐欺リスク判定ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// テキスト・画像を1回解析
    Analyze {
        /// 解析するテキスト（"-" で標準入力から読む）
        #[arg(short, long)]
        text: Option<String>,

        /// スクリーンショット等の画像ファイル
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話モード（テキスト入力・画像添付・解析を繰り返す）
    Interactive,

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 使用モデルを設定
        #[arg(long)]
        model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// 分類用の指示文と返却スキーマを表示
    Schema,
}
