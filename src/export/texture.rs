//! Conversion between pixel buffers and Bevy [`Image`] assets.

use bevy::asset::RenderAssetUsages;
use bevy::image::Image;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use super::ExportError;
use crate::pixel::{PixelBuffer, Rgba8};

/// Check if a texture format can be read as tightly packed RGBA8.
pub fn is_rgba8_format(format: TextureFormat) -> bool {
    matches!(
        format,
        TextureFormat::Rgba8Unorm | TextureFormat::Rgba8UnormSrgb
    )
}

/// Image extent for a buffer of `resolution`.
pub(crate) fn texture_size(resolution: usize) -> Result<u32, ExportError> {
    u32::try_from(resolution).map_err(|_| ExportError::TextureTooLarge { resolution })
}

/// Wraps a buffer in a 2D RGBA8 image.
///
/// Splatmaps hold blend weights and should stay linear (`srgb = false`);
/// color textures use `srgb = true`.
pub fn buffer_to_image(buffer: &PixelBuffer<Rgba8>, srgb: bool) -> Result<Image, ExportError> {
    let size = texture_size(buffer.resolution())?;
    let format = if srgb {
        TextureFormat::Rgba8UnormSrgb
    } else {
        TextureFormat::Rgba8Unorm
    };

    Ok(Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        buffer.as_bytes().to_vec(),
        format,
        RenderAssetUsages::default(),
    ))
}

/// Reads a square RGBA8 image into a pixel buffer.
pub fn image_to_buffer(image: &Image) -> Result<PixelBuffer<Rgba8>, ExportError> {
    let format = image.texture_descriptor.format;
    if !is_rgba8_format(format) {
        return Err(ExportError::UnsupportedFormat { found: format });
    }

    let width = image.width();
    let height = image.height();
    if width != height {
        return Err(ExportError::NotSquare { width, height });
    }

    let data = image.data.as_deref().ok_or(ExportError::MissingData)?;
    Ok(PixelBuffer::from_rgba_bytes(data, width as usize)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba_image(width: u32, height: u32, format: TextureFormat) -> Image {
        Image::new(
            Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            vec![0; (width * height * 4) as usize],
            format,
            RenderAssetUsages::default(),
        )
    }

    #[test]
    fn test_buffer_to_image() {
        let buffer = PixelBuffer::from_fn(3, |x, y| Rgba8::new(x as u8, y as u8, 0, 255));
        let image = buffer_to_image(&buffer, false).unwrap();

        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 3);
        assert_eq!(image.texture_descriptor.format, TextureFormat::Rgba8Unorm);
        assert_eq!(image.data.as_deref(), Some(buffer.as_bytes()));

        let back = image_to_buffer(&image).unwrap();
        assert_eq!(back, buffer);
    }

    #[test]
    fn test_texture_size() {
        assert_eq!(texture_size(0).unwrap(), 0);
        assert_eq!(texture_size(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_texture_size_rejects_truncation() {
        let resolution = u32::MAX as usize + 2;
        assert!(matches!(
            texture_size(resolution),
            Err(ExportError::TextureTooLarge { resolution: r }) if r == resolution
        ));
    }

    #[test]
    fn test_srgb_flag() {
        let buffer = PixelBuffer::filled(2, Rgba8::WHITE);
        let image = buffer_to_image(&buffer, true).unwrap();
        assert_eq!(image.texture_descriptor.format, TextureFormat::Rgba8UnormSrgb);
    }

    #[test]
    fn test_not_square() {
        let image = rgba_image(4, 2, TextureFormat::Rgba8Unorm);
        assert!(matches!(
            image_to_buffer(&image),
            Err(ExportError::NotSquare {
                width: 4,
                height: 2
            })
        ));
    }

    #[test]
    fn test_unsupported_format() {
        let image = Image::new_fill(
            Extent3d {
                width: 2,
                height: 2,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            &[0; 16],
            TextureFormat::Rgba32Float,
            RenderAssetUsages::default(),
        );
        assert!(matches!(
            image_to_buffer(&image),
            Err(ExportError::UnsupportedFormat {
                found: TextureFormat::Rgba32Float
            })
        ));
    }

    #[test]
    fn test_missing_data() {
        let mut image = rgba_image(2, 2, TextureFormat::Rgba8UnormSrgb);
        image.data = None;
        assert!(matches!(image_to_buffer(&image), Err(ExportError::MissingData)));
    }
}
