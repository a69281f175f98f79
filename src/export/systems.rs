//! Message-driven export systems.

use std::path::PathBuf;

use bevy::prelude::*;

use super::settings::ExportSettings;
use super::texture::{buffer_to_image, image_to_buffer};
use super::writer::{ExportedTexture, export_composite, export_splatmaps};
use super::ExportError;
use crate::splatmap::TerrainAlphamap;

/// Request to export every splatmap of a terrain entity.
///
/// Files are named `<name>_splat<i>` inside [`ExportSettings::output_dir`].
#[derive(Message, Clone, Debug)]
pub struct ExportSplatmap {
    pub terrain: Entity,
    pub name: String,
}

/// Request to combine a color texture with a grayscale texture used as alpha.
#[derive(Message, Clone, Debug)]
pub struct ExportComposite {
    pub color: Handle<Image>,
    pub alpha: Handle<Image>,
    pub name: String,
}

/// Written once per file produced by an export request.
#[derive(Message, Clone, Debug)]
pub struct TextureExported {
    pub path: PathBuf,
    /// The registered asset, when [`ExportSettings::register_assets`] is set.
    pub image: Option<Handle<Image>>,
}

fn publish(
    texture: ExportedTexture,
    srgb: bool,
    settings: &ExportSettings,
    images: &mut Assets<Image>,
    exported: &mut MessageWriter<TextureExported>,
) {
    info!("Exported {}", texture.path.display());
    let image = if settings.register_assets {
        match buffer_to_image(&texture.buffer, srgb) {
            Ok(image) => Some(images.add(image)),
            Err(e) => {
                warn!("Not registering {}: {}", texture.path.display(), e);
                None
            }
        }
    } else {
        None
    };
    exported.write(TextureExported {
        path: texture.path,
        image,
    });
}

/// System that handles [`ExportSplatmap`] requests.
///
/// Failures are logged and do not affect other requests.
pub fn export_splatmaps_on_request(
    mut requests: MessageReader<ExportSplatmap>,
    terrains: Query<&TerrainAlphamap>,
    settings: Res<ExportSettings>,
    mut images: ResMut<Assets<Image>>,
    mut exported: MessageWriter<TextureExported>,
) {
    for request in requests.read() {
        let result = terrains
            .get(request.terrain)
            .map_err(|_| ExportError::MissingTerrain(request.terrain))
            .and_then(|terrain| {
                export_splatmaps(
                    terrain,
                    &settings.output_dir,
                    &request.name,
                    settings.format,
                )
            });

        match result {
            Ok(textures) => {
                for texture in textures {
                    publish(texture, false, &settings, &mut images, &mut exported);
                }
            }
            Err(e) => error!("Splatmap export '{}' failed: {}", request.name, e),
        }
    }
}

/// System that handles [`ExportComposite`] requests.
///
/// Both images must already be loaded, square, RGBA8 and of equal size.
pub fn export_composites_on_request(
    mut requests: MessageReader<ExportComposite>,
    settings: Res<ExportSettings>,
    mut images: ResMut<Assets<Image>>,
    mut exported: MessageWriter<TextureExported>,
) {
    for request in requests.read() {
        let result = composite(request, &settings, &images);
        match result {
            Ok((texture, srgb)) => publish(texture, srgb, &settings, &mut images, &mut exported),
            Err(e) => error!("Composite export '{}' failed: {}", request.name, e),
        }
    }
}

fn composite(
    request: &ExportComposite,
    settings: &ExportSettings,
    images: &Assets<Image>,
) -> Result<(ExportedTexture, bool), ExportError> {
    let color = images
        .get(&request.color)
        .ok_or(ExportError::ImageNotLoaded(request.color.id()))?;
    let alpha = images
        .get(&request.alpha)
        .ok_or(ExportError::ImageNotLoaded(request.alpha.id()))?;

    let srgb = color.texture_descriptor.format.is_srgb();
    let texture = export_composite(
        &image_to_buffer(color)?,
        &image_to_buffer(alpha)?,
        &settings.path_for(&request.name),
        settings.format,
    )?;
    Ok((texture, srgb))
}
