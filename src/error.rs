use crate::domain::PathError;
use thiserror::Error;

/// 実行全体を中断させるエラー。
///
/// 個々の画像の失敗はここには含めない (ワークフロー側で報告して次へ進む)。
#[derive(Debug, Error)]
pub enum AppError {
    #[error("出力先ディレクトリを用意できませんでした: {0}")]
    Path(#[from] PathError),

    #[error("ホームディレクトリが見つかりません (--output-dir で出力先を指定してください)")]
    HomeDirNotFound,
}
