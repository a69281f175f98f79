//! Writing splatmaps and composite textures to disk.
//!
//! Requires the `file_export` feature (enabled by default).
//!
//! The free functions ([`export_splatmaps`], [`export_composite`]) work on
//! plain buffers; the systems in this module answer [`ExportSplatmap`] and
//! [`ExportComposite`] messages using data from the Bevy world, and can
//! register every written file as an `Image` asset.

mod error;
mod settings;
mod systems;
mod texture;
mod writer;

pub use error::ExportError;
pub use settings::{ExportSettings, ImageFileFormat};
pub use systems::{
    ExportComposite, ExportSplatmap, TextureExported, export_composites_on_request,
    export_splatmaps_on_request,
};
pub use texture::{buffer_to_image, image_to_buffer, is_rgba8_format};
pub use writer::{ExportedTexture, export_composite, export_splatmaps, write_buffer};
