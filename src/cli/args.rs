// src/cli/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "file_times",
    version = crate::VERSION,
    about = "ファイルの作成日時/更新日時を表示・変更するツール",
    after_help = "日時の形式: dd/mm/yyyy hh:mm:ss (24時間表記, ローカル時刻)"
)]
pub struct Args {
    /// 詳細ログを表示（-vv でデバッグ）
    #[arg(short, long, action = clap::ArgAction::Count, global = true, conflicts_with = "quiet")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 現在の作成日時と更新日時を表示
    Show(ShowArgs),

    /// 作成日時/更新日時を変更（省略した項目は現在値のまま）
    Set(SetArgs),

    /// 対話モード（open / show / created / modified / apply ...）
    Interactive,
}

#[derive(ClapArgs, Debug)]
pub struct ShowArgs {
    /// 対象ファイル
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: PathBuf,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text")]
    pub format: CliOutputFormat,
}

#[derive(ClapArgs, Debug)]
pub struct SetArgs {
    /// 対象ファイル
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: PathBuf,

    /// 新しい作成日時 (dd/mm/yyyy hh:mm:ss)
    #[arg(long, value_name = "DATE")]
    pub created: Option<String>,

    /// 新しい更新日時 (dd/mm/yyyy hh:mm:ss)
    #[arg(long, value_name = "DATE")]
    pub modified: Option<String>,
}
