// crates/cli/src/args.rs
use crate::VERSION;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `{key=min/mean/max, ...}` の 1 行サマリ
    Brc,
    Table,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "station_stats", version = VERSION, about = "気温計測データの地点別統計 (min/mean/max) 集計ツール")]
pub struct Args {
    /// 入力ファイル (1 行 = `地点;値`)
    #[arg(default_value = "measurements.txt")]
    pub path: PathBuf,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "brc")]
    pub format: OutputFormat,

    /// 並列数 (チャンク数、省略時は論理コア数)
    #[arg(long, short = 'j')]
    pub workers: Option<usize>,

    /// チャンク境界スキャンの遡り幅 (バイト)
    #[arg(long)]
    pub scan_window: Option<u64>,

    /// 結果をファイルへ書き出す
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// mmap を使わずヒープへ読み込む
    #[arg(long)]
    pub no_mmap: bool,
}
