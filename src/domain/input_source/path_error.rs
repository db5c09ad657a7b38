use std::path::PathBuf;
use thiserror::Error;

// 入力パスや出力先パスの検証で発生するエラー
#[derive(Debug, Error)]
pub enum PathError {
    /// パスが存在しない。
    #[error("パス '{0}' は存在しません")]
    NotFound(PathBuf),

    /// 存在するが通常のファイルではない (ディレクトリなど)。
    #[error("パス '{0}' は有効なファイルではありません")]
    NotAFile(PathBuf),

    #[error("I/Oエラー: {0}")]
    IoError(#[from] std::io::Error),
}
