use super::path_error::PathError;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// 分割対象となる画像ファイルへのパス。
///
/// `new` を通じてのみ生成でき、生成時点でパスが存在する通常ファイルであることが保証される。
/// 中身が画像としてデコードできるかどうかはここでは検証しない。
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFilePath {
    path: PathBuf,
    file_name: OsString,
}

impl ImageFilePath {
    /// 出力ファイル名で語幹と拡張子の間に挟む接尾辞。
    pub const LEFT_SUFFIX: &'static str = "_left";

    /// パスを検証して `ImageFilePath` を生成する。
    ///
    /// シンボリックリンクは辿った先で判定する。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PathError::NotFound(path.to_path_buf()));
        }
        // 通常ファイルならファイル名部分も必ずある
        let file_name = match path.file_name() {
            Some(name) if path.is_file() => name.to_os_string(),
            _ => return Err(PathError::NotAFile(path.to_path_buf())),
        };

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
        })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// 左半分を保存するときのファイル名 `{語幹}_left{拡張子}` を返す。
    ///
    /// 拡張子は先頭のドットを含めて大文字小文字もそのまま引き継ぐ。
    /// 拡張子が無い場合 (`README` や `.bashrc`、末尾がドットの `photo.`) は
    /// ファイル名全体を語幹として扱い、接尾辞だけを付ける。
    pub fn left_half_file_name(&self) -> OsString {
        let file_name = Path::new(&self.file_name);
        let (stem, extension): (&OsStr, Option<&OsStr>) = match file_name.extension() {
            Some(ext) if !ext.is_empty() => {
                (file_name.file_stem().unwrap_or(&self.file_name), Some(ext))
            }
            _ => (&self.file_name, None),
        };

        let mut name = stem.to_os_string();
        name.push(Self::LEFT_SUFFIX);
        if let Some(ext) = extension {
            name.push(".");
            name.push(ext);
        }
        name
    }
}

impl fmt::Display for ImageFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
