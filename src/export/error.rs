use bevy::asset::AssetId;
use bevy::ecs::entity::Entity;
use bevy::image::Image;
use bevy::render::render_resource::TextureFormat;
use thiserror::Error;

use crate::pixel::TransformError;
use crate::splatmap::SplatmapError;

/// Errors that can occur while exporting a texture.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Splatmap(#[from] SplatmapError),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Texture is not square: {width}x{height}")]
    NotSquare { width: u32, height: u32 },

    #[error("Texture has unsupported format {found:?}: expected Rgba8Unorm or Rgba8UnormSrgb")]
    UnsupportedFormat { found: TextureFormat },

    #[error("Texture resolution {resolution} does not fit a 32-bit image extent")]
    TextureTooLarge { resolution: usize },

    #[error("Texture has no CPU-side pixel data")]
    MissingData,

    #[error("Entity {0} has no terrain alphamap")]
    MissingTerrain(Entity),

    #[error("Image {0:?} is not loaded")]
    ImageNotLoaded(AssetId<Image>),
}
