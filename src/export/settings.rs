//! Export configuration.

use std::path::{Path, PathBuf};

use bevy::prelude::*;

/// File format used when writing exported textures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum ImageFileFormat {
    /// Lossless PNG.
    Png,
    /// Uncompressed 32-bit truecolor TGA.
    #[default]
    Tga,
}

impl ImageFileFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Tga => "tga",
        }
    }
}

/// Settings for the export systems.
#[derive(Resource, Clone, Debug)]
pub struct ExportSettings {
    /// Directory exported files are written into. Created on demand.
    /// Default: `assets/splatmaps`
    pub output_dir: PathBuf,

    /// Encoding of written files.
    /// Default: [`ImageFileFormat::Tga`]
    pub format: ImageFileFormat,

    /// Whether each exported texture is also added to `Assets<Image>`.
    /// Default: true
    pub register_assets: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("assets/splatmaps"),
            format: ImageFileFormat::default(),
            register_assets: true,
        }
    }
}

impl ExportSettings {
    /// Create settings writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: ImageFileFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_register_assets(mut self, register: bool) -> Self {
        self.register_assets = register;
        self
    }

    /// Path of a file named `stem` in the output directory.
    pub fn path_for(&self, stem: &str) -> PathBuf {
        file_path(&self.output_dir, stem, self.format)
    }
}

pub(crate) fn file_path(dir: &Path, stem: &str, format: ImageFileFormat) -> PathBuf {
    dir.join(format!("{stem}.{}", format.extension()))
}
