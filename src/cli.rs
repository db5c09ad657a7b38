use clap::Parser;
use std::path::PathBuf;

/// 縦長の画像を縦の中心線で二分割し、左半分を保存するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 分割する画像ファイルのパス (複数指定可。`*.jpg` のようなワイルドカードも使える)
    pub images: Vec<PathBuf>,

    /// 左半分の出力先フォルダのパス (オプション: デフォルトはホームディレクトリの Downloads)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// 画像が1つも指定されなかったときに表示する使い方。
pub fn usage() -> String {
    let program = env!("CARGO_BIN_NAME");
    format!(
        "使い方: {program} <画像1> <画像2> ...\nまたは: {program} *.jpg",
        program = program
    )
}
