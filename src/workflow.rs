//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 入力パスごとの分割処理と結果の集計を行います。

use crate::cli::Args;
use frame_cutter::domain::{default_output_root, split_left_half, ImageFilePath, OutputDir};
use frame_cutter::error::AppError;
use std::path::{Path, PathBuf};

/// 1回の実行の集計結果。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// 左半分を保存できた画像の数
    pub succeeded: usize,
    /// 読み込み・保存に失敗した画像の数
    pub failed: usize,
    /// 有効なファイルでなかったため飛ばしたパスの数
    pub skipped: usize,
}

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 戻り値
/// * `Ok(RunSummary)`: 出力先を用意でき、すべての入力を処理し終えた場合。
///   個々の画像の失敗はここに数えられるだけで、エラーにはならない。
/// * `Err(AppError)`: 出力先ディレクトリを決められない、または作成できない場合。
pub fn run(args: &Args) -> Result<RunSummary, AppError> {
    // 1. 出力ディレクトリの決定
    // `--output-dir` が指定されていればそれを使い、無ければ ~/Downloads とする。
    let output_root = resolve_output_root(args.output_dir.as_deref())?;

    // 2. 出力ディレクトリの作成 (既に存在していてもよい)
    let output_dir = OutputDir::ensure(&output_root)?;
    log::debug!("output directory ready: {}", output_dir.as_path().display());

    // 3. 入力パスを順に処理
    let summary = process_paths(&args.images, &output_dir);

    // 4. 結果の報告
    println!("\n{} 枚の画像を正常に処理しました。", summary.succeeded);
    log::debug!(
        "succeeded={} failed={} skipped={}",
        summary.succeeded,
        summary.failed,
        summary.skipped
    );

    Ok(summary)
}

// --- private なヘルパー関数 ---

fn resolve_output_root(explicit: Option<&Path>) -> Result<PathBuf, AppError> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => default_output_root().ok_or(AppError::HomeDirNotFound),
    }
}

/// 入力パスを与えられた順に1つずつ処理する。
///
/// 1つの失敗が後続の処理を止めることはない。
fn process_paths(paths: &[PathBuf], output_dir: &OutputDir) -> RunSummary {
    let mut summary = RunSummary::default();

    for path in paths {
        // 存在する通常ファイルでなければ警告して次へ
        let image = match ImageFilePath::new(path) {
            Ok(image) => image,
            Err(_) => {
                eprintln!("[警告] {} は有効なファイルではありません", path.display());
                summary.skipped += 1;
                continue;
            }
        };

        if split_one(&image, output_dir) {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }
    }

    summary
}

/// 画像1枚を分割して保存し、結果を表示する。成功したかどうかだけを返す。
fn split_one(image: &ImageFilePath, output_dir: &OutputDir) -> bool {
    match split_left_half(image, output_dir) {
        Ok(output_path) => {
            println!("保存しました: {}", output_path.display());
            true
        }
        Err(e) => {
            eprintln!(
                "[エラー] '{}' の処理中にエラーが発生しました: {}",
                image, e
            );
            false
        }
    }
}
