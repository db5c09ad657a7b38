use crate::domain::input_source::image_file_path::ImageFilePath;
use crate::domain::input_source::path_error::PathError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 既定の出力先としてホームディレクトリの下に使うフォルダ名
pub const DEFAULT_SUBDIR: &str = "Downloads";

// 出力先ディレクトリ。`ensure` で生成され、その時点で存在が保証される。
#[derive(Debug)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    /// ディレクトリを (足りない親ディレクトリも含めて) 作成し、`OutputDir` を返す。
    ///
    /// 既に存在していてもエラーにはならない。
    pub fn ensure<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();
        fs::create_dir_all(path)?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// 入力画像に対応する左半分の保存先パスを返す。
    pub fn left_half_path(&self, image: &ImageFilePath) -> PathBuf {
        self.path.join(image.left_half_file_name())
    }
}

/// 既定の出力先 `ホームディレクトリ/Downloads` を返す。
///
/// `HOME` を優先し、未設定なら `USERPROFILE` を見る。どちらも無ければ `None`。
pub fn default_output_root() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(DEFAULT_SUBDIR))
}
