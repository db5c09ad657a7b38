mod cli;
mod workflow;

use clap::Parser;
use cli::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    // RUST_LOG が無ければ警告以上だけを表示する
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // コマンドライン引数を解析します
    let args = Args::parse();

    // 画像が1つも指定されていなければ、何も作らずに使い方を表示して終了する
    if args.images.is_empty() {
        eprintln!("{}", cli::usage());
        return ExitCode::FAILURE;
    }

    match workflow::run(&args) {
        // 個々の画像の失敗は終了コードに反映しない
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラー: {}", e);
            ExitCode::FAILURE
        }
    }
}
