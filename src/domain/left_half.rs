// use宣言：必要なクレートやモジュールをスコープに取り込む

use crate::domain::input_source::image_file_path::ImageFilePath;
use crate::domain::output_dir::OutputDir;
use image::{DynamicImage, GenericImageView, ImageError, ImageReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

// --- エラー定義 ---

/// 1枚の画像を分割・保存する過程で発生するエラー。
///
/// 呼び出し側はこれを1ファイル分の失敗として扱い、次のファイルの処理を続ける。
#[derive(Debug, Error)]
pub enum SplitError {
    /// 入力ファイルを開けない、または画像としてデコードできない。
    #[error("画像を読み込めませんでした ({path}): {source}")]
    Decode { path: PathBuf, source: ImageError },

    /// エンコードまたは書き込みに失敗した。未対応の拡張子もここに含まれる。
    #[error("画像を保存できませんでした ({path}): {source}")]
    Encode { path: PathBuf, source: ImageError },
}

// --- 構造体定義 ---

/// 元画像の左半分。
///
/// 元画像の列 `0..幅/2` と全行をそのまま切り出したもので、リサンプリングは行わない。
#[derive(Debug)]
pub struct LeftHalf {
    image: DynamicImage,
}

/// 分割位置の列 (幅の半分、切り捨て)。
#[inline]
pub fn split_column(width: u32) -> u32 {
    width / 2
}

impl LeftHalf {
    /// メモリ上の画像から左半分を切り出す。
    ///
    /// 幅が 0 または 1 の場合は幅 0 の画像になる。エラーにはしない。
    pub fn from_image(source: &DynamicImage) -> Self {
        let (width, height) = source.dimensions();
        let column = split_column(width);
        log::debug!("source {}x{}, split column {}", width, height, column);

        Self {
            image: source.crop_imm(0, 0, column, height),
        }
    }

    /// ファイルを読み込んで左半分を切り出す。
    ///
    /// フォーマットはまずファイルの中身から推定し、判別できなければ拡張子に従う。
    pub fn open(path: &Path) -> Result<Self, SplitError> {
        let decode_err = |source: ImageError| SplitError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)
            .map_err(ImageError::IoError)
            .and_then(|reader| reader.with_guessed_format().map_err(ImageError::IoError))
            .and_then(|reader| reader.decode())
            .map_err(decode_err)?;

        Ok(Self::from_image(&image))
    }

    /// 出力先の拡張子が示すフォーマットで保存する。既存のファイルは上書きされる。
    pub fn save_to_path(&self, path: &Path) -> Result<(), SplitError> {
        self.image.save(path).map_err(|source| SplitError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// 画像を読み込み、左半分を `output_dir` に `{語幹}_left{拡張子}` として保存する。
///
/// 成功すると書き込んだファイルのパスを返す。
pub fn split_left_half(
    image_path: &ImageFilePath,
    output_dir: &OutputDir,
) -> Result<PathBuf, SplitError> {
    let output_path = output_dir.left_half_path(image_path);

    let left_half = LeftHalf::open(image_path.as_path())?;
    left_half.save_to_path(&output_path)?;

    Ok(output_path)
}

// --- テストモジュール ---

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;
    use tempfile::tempdir;

    // --- テスト用ヘルパー関数 ---

    /// 画素値が座標から決まるグラデーション画像
    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        })
    }

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> ImageFilePath {
        let path = dir.join(name);
        gradient(width, height).save(&path).expect("PNGの保存に失敗");
        ImageFilePath::new(&path).unwrap()
    }

    #[test]
    fn split_column_floors_odd_widths() {
        assert_eq!(split_column(1200), 600);
        assert_eq!(split_column(101), 50);
        assert_eq!(split_column(1), 0);
        assert_eq!(split_column(0), 0);
    }

    #[test]
    fn from_image_is_an_exact_crop() {
        let source = DynamicImage::ImageRgb8(gradient(101, 7));
        let left = LeftHalf::from_image(&source);

        assert_eq!(left.image.dimensions(), (50, 7));
        let cropped = left.image.to_rgb8();
        let original = source.to_rgb8();
        for y in 0..7 {
            for x in 0..50 {
                assert_eq!(cropped.get_pixel(x, y), original.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn from_image_single_column_gives_zero_width() {
        let source = DynamicImage::ImageRgb8(gradient(1, 10));
        let left = LeftHalf::from_image(&source);
        assert_eq!(left.image.dimensions(), (0, 10));
    }

    #[test]
    fn split_left_half_writes_expected_file() {
        let dir = tempdir().unwrap();
        let input = write_png(dir.path(), "portrait.png", 120, 180);
        let out = OutputDir::ensure(dir.path().join("Downloads")).unwrap();

        let written = split_left_half(&input, &out).expect("split should succeed");
        assert_eq!(written, dir.path().join("Downloads").join("portrait_left.png"));

        let saved = image::open(&written).unwrap().to_rgb8();
        assert_eq!(saved.dimensions(), (60, 180));
        let source = gradient(120, 180);
        let expected = image::imageops::crop_imm(&source, 0, 0, 60, 180).to_image();
        assert_eq!(saved, expected);
    }

    #[test]
    fn split_left_half_overwrites_previous_output() {
        let dir = tempdir().unwrap();
        let out = OutputDir::ensure(dir.path().join("out")).unwrap();

        let input = write_png(dir.path(), "frame.png", 40, 20);
        split_left_half(&input, &out).unwrap();

        // 同名の入力を別サイズで作り直して再実行
        let input = write_png(dir.path(), "frame.png", 10, 30);
        let written = split_left_half(&input, &out).unwrap();

        assert_eq!(image::open(&written).unwrap().dimensions(), (5, 30));
        assert_eq!(fs::read_dir(out.as_path()).unwrap().count(), 1);
    }

    #[test]
    fn split_left_half_decodes_by_content_before_extension() {
        let dir = tempdir().unwrap();
        // 中身はPNGだが拡張子は .img (画像形式としては不明)
        let path = dir.path().join("mislabelled.img");
        gradient(8, 4)
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();
        let input = ImageFilePath::new(&path).unwrap();
        let out = OutputDir::ensure(dir.path().join("out")).unwrap();

        // 読み込みは成功し、.img では保存できないためエンコードで失敗する
        let err = split_left_half(&input, &out).unwrap_err();
        assert!(matches!(err, SplitError::Encode { .. }), "{:?}", err);
    }

    #[test]
    fn split_left_half_reports_corrupt_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"this is not an image").unwrap();
        let input = ImageFilePath::new(&path).unwrap();
        let out = OutputDir::ensure(dir.path().join("out")).unwrap();

        let err = split_left_half(&input, &out).unwrap_err();
        match &err {
            SplitError::Decode { path: p, .. } => assert_eq!(p, &path),
            other => panic!("予期せぬエラーが返されました: {:?}", other),
        }
        assert!(err.to_string().contains("broken.png"));
        assert!(!out.as_path().join("broken_left.png").exists());
    }

    #[test]
    fn split_left_half_of_one_pixel_wide_image_fails_without_panic() {
        let dir = tempdir().unwrap();
        let input = write_png(dir.path(), "sliver.png", 1, 16);
        let out = OutputDir::ensure(dir.path().join("out")).unwrap();

        let result = split_left_half(&input, &out);
        assert!(matches!(result, Err(SplitError::Encode { .. })));
    }

    #[test]
    fn split_left_half_keeps_jpeg_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shot.JPG");
        gradient(33, 12)
            .save_with_format(&path, image::ImageFormat::Jpeg)
            .unwrap();
        let input = ImageFilePath::new(&path).unwrap();
        let out = OutputDir::ensure(dir.path().join("out")).unwrap();

        let written = split_left_half(&input, &out).unwrap();
        assert_eq!(written.file_name().unwrap(), "shot_left.JPG");
        assert_eq!(
            image::ImageFormat::from_path(&written).unwrap(),
            image::ImageFormat::Jpeg
        );
        assert_eq!(image::open(&written).unwrap().dimensions(), (16, 12));
    }
}
