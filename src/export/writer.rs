//! Encoding pixel buffers to image files.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::codecs::tga::TgaEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::ExportError;
use super::settings::{ImageFileFormat, file_path};
use super::texture::texture_size;
use crate::pixel::{PixelBuffer, Rgba8};
use crate::splatmap::{Alphamap, splatmaps};

/// A texture written to disk.
#[derive(Clone, Debug)]
pub struct ExportedTexture {
    pub path: PathBuf,
    pub buffer: PixelBuffer<Rgba8>,
}

/// Encodes `buffer` as an RGBA8 image at `path`.
///
/// Parent directories are created as needed. TGA output is written without
/// run-length encoding. A file left half-written by a failed encode is removed.
pub fn write_buffer(
    buffer: &PixelBuffer<Rgba8>,
    path: &Path,
    format: ImageFileFormat,
) -> Result<(), ExportError> {
    let size = texture_size(buffer.resolution())?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let writer = BufWriter::new(File::create(path)?);
    encode(buffer, size, writer, format).inspect_err(|_| {
        let _ = fs::remove_file(path);
    })
}

fn encode(
    buffer: &PixelBuffer<Rgba8>,
    size: u32,
    writer: BufWriter<File>,
    format: ImageFileFormat,
) -> Result<(), ExportError> {
    match format {
        ImageFileFormat::Png => PngEncoder::new(writer).write_image(
            buffer.as_bytes(),
            size,
            size,
            ExtendedColorType::Rgba8,
        )?,
        ImageFileFormat::Tga => TgaEncoder::new(writer).disable_rle().write_image(
            buffer.as_bytes(),
            size,
            size,
            ExtendedColorType::Rgba8,
        )?,
    }
    Ok(())
}

/// Writes every splatmap of `alphamap` into `dir` as `<name>_splat<i>.<ext>`.
///
/// The export is all or nothing: every splatmap is built before the first
/// file is written, and if any write fails the files already written by this
/// call are removed again.
pub fn export_splatmaps(
    alphamap: &Alphamap,
    dir: &Path,
    name: &str,
    format: ImageFileFormat,
) -> Result<Vec<ExportedTexture>, ExportError> {
    let buffers = splatmaps(alphamap)?;

    let mut exported: Vec<ExportedTexture> = Vec::with_capacity(buffers.len());
    for (index, buffer) in buffers.into_iter().enumerate() {
        let path = file_path(dir, &format!("{name}_splat{index}"), format);
        if let Err(err) = write_buffer(&buffer, &path, format) {
            for written in &exported {
                let _ = fs::remove_file(&written.path);
            }
            return Err(err);
        }
        exported.push(ExportedTexture { path, buffer });
    }
    Ok(exported)
}

/// Combines the RGB of `color` with the luminance of `alpha` and writes the
/// result to `path`.
///
/// Nothing is written when the buffers do not share a resolution.
pub fn export_composite(
    color: &PixelBuffer<Rgba8>,
    alpha: &PixelBuffer<Rgba8>,
    path: &Path,
    format: ImageFileFormat,
) -> Result<ExportedTexture, ExportError> {
    let buffer = color.compose_alpha(alpha)?;
    write_buffer(&buffer, path, format)?;
    Ok(ExportedTexture {
        path: path.to_path_buf(),
        buffer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::TransformError;

    fn read_back(path: &Path) -> Vec<u8> {
        image::open(path).unwrap().to_rgba8().into_raw()
    }

    #[test]
    fn test_write_png_and_tga() {
        let dir = tempfile::tempdir().unwrap();
        let buffer = PixelBuffer::from_fn(4, |x, y| Rgba8::new(x as u8 * 60, y as u8 * 60, 9, 200));

        for format in [ImageFileFormat::Png, ImageFileFormat::Tga] {
            let path = file_path(&dir.path().join("nested"), "out", format);
            write_buffer(&buffer, &path, format).unwrap();
            assert_eq!(read_back(&path), buffer.as_bytes(), "{format:?}");
        }
    }

    #[test]
    fn test_export_splatmaps_names_and_contents() {
        let dir = tempfile::tempdir().unwrap();
        let alphamap = Alphamap::from_fn(4, 6, |x, _, texel| {
            texel[0] = 1.0;
            texel[5] = x as f32 / 3.0;
        })
        .unwrap();

        let exported =
            export_splatmaps(&alphamap, dir.path(), "terrain", ImageFileFormat::Png).unwrap();

        assert_eq!(exported.len(), 2);
        assert_eq!(exported[0].path, dir.path().join("terrain_splat0.png"));
        assert_eq!(exported[1].path, dir.path().join("terrain_splat1.png"));
        for texture in &exported {
            assert_eq!(read_back(&texture.path), texture.buffer.as_bytes());
        }

        // Layer 5 varies along x, which becomes the row axis after export.
        let second = &exported[1].buffer;
        assert_eq!(second.get(0, 0).map(|px| px.g), Some(0));
        assert_eq!(second.get(0, 3).map(|px| px.g), Some(255));
        assert_eq!(second.get(3, 0).map(|px| px.g), Some(0));
    }

    #[test]
    fn test_export_splatmaps_failure_removes_written_files() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the second splatmap makes its write fail.
        fs::create_dir(dir.path().join("t_splat1.png")).unwrap();

        let result = export_splatmaps(
            &Alphamap::filled(2, 8, 0),
            dir.path(),
            "t",
            ImageFileFormat::Png,
        );

        assert!(matches!(result, Err(ExportError::Io(_))));
        assert!(!dir.path().join("t_splat0.png").exists());
        assert!(dir.path().join("t_splat1.png").is_dir());
    }

    #[test]
    fn test_export_composite() {
        let dir = tempfile::tempdir().unwrap();
        let color = PixelBuffer::filled(2, Rgba8::new(10, 20, 30, 255));
        let alpha = PixelBuffer::from_fn(2, |x, y| Rgba8::gray((x + 2 * y) as u8 * 50));
        let path = dir.path().join("combined.tga");

        let exported = export_composite(&color, &alpha, &path, ImageFileFormat::Tga).unwrap();

        let alphas: Vec<u8> = exported.buffer.as_slice().iter().map(|px| px.a).collect();
        assert_eq!(alphas, vec![0, 50, 100, 150]);
        assert_eq!(read_back(&path), exported.buffer.as_bytes());
    }

    #[test]
    fn test_export_composite_mismatch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let color = PixelBuffer::filled(2, Rgba8::BLACK);
        let alpha = PixelBuffer::filled(4, Rgba8::WHITE);
        let path = dir.path().join("combined.png");

        let result = export_composite(&color, &alpha, &path, ImageFileFormat::Png);

        assert!(matches!(
            result,
            Err(ExportError::Transform(TransformError::DimensionMismatch {
                color: 2,
                alpha: 4
            }))
        ));
        assert!(!path.exists());
    }
}
