use std::io::Write;
use std::path::{Path, PathBuf};

use image::io::Reader as ImageReader;
use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, ImageResult};

use crate::error::IconError;
use crate::logger::log_line;
use crate::models::{ICON_FILTER, ICON_SIZES, TargetSize};

/// Decode by sniffing the file contents; the extension is only a fallback hint.
fn decode_source(source: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(source)?
        .with_guessed_format()
        .map_err(ImageError::IoError)?
        .decode()
}

/// Square nearest-neighbor copy of `img`. Non-square sources are stretched.
pub fn resize_icon(img: &DynamicImage, size: TargetSize) -> DynamicImage {
    img.resize_exact(size.px(), size.px(), ICON_FILTER)
}

/// Decode `source` once and write `icon-<size>.png` into `out_dir` for every
/// entry of [`ICON_SIZES`], reporting each file on `out`.
///
/// Stops at the first failure. Icons written before it are kept.
pub fn produce_icon_set<W: Write>(
    source: &Path,
    out_dir: &Path,
    out: &mut W,
) -> Result<Vec<PathBuf>, IconError> {
    let img = decode_source(source).map_err(|e| IconError::Decode {
        path: source.to_path_buf(),
        source: e,
    })?;
    let (w, h) = img.dimensions();
    log_line(&format!(
        "Decoded {} ({}x{}, {:?})",
        source.display(),
        w,
        h,
        img.color()
    ));

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let resized = resize_icon(&img, size);
        let name = size.file_name();
        let path = out_dir.join(&name);
        resized
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| IconError::Write {
                path: path.clone(),
                source: e,
            })?;
        log_line(&format!("Wrote {} ({})", path.display(), size));
        writeln!(out, "Created {}", name)?;
        written.push(path);
    }

    Ok(written)
}
