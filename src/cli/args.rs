// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use marker_tally_shared_kernel::MarkerPair;

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "marker_tally",
    version = crate::VERSION,
    about = "ログ中の開始/終了マーカーを含む行数とその差分を表示するツール"
)]
pub struct Args {
    /// 対象ファイル（既定: out.txt）
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub input: Option<PathBuf>,

    /// マーカー対 START:END（複数指定可、指定すると既定の対を置き換える）
    #[arg(long = "pair", value_name = "START:END", help_heading = "入力")]
    pub pairs: Vec<MarkerPair>,

    /// 設定ファイル（YAML）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub config: Option<PathBuf>,

    /// バックアップ先（既定: <INPUT>.bak）
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "no_backup", help_heading = "バックアップ")]
    pub backup: Option<PathBuf>,

    /// バックアップを作成しない
    #[arg(long, help_heading = "バックアップ")]
    pub no_backup: bool,

    /// 出力フォーマット（既定: text）
    #[arg(long, value_enum, help_heading = "出力")]
    pub format: Option<CliOutputFormat>,

    /// 結果をファイルへ出力（既定: 標準出力）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// 途中で問題があれば終了コード 1 を返す
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// ログを詳細に（-v, -vv, -vvv）
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "動作")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, help_heading = "動作")]
    pub quiet: bool,
}
