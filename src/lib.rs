//! # bevy_splat_tools
//!
//! Editor-side utilities for Bevy scenes with painted terrain.
//!
//! ## Features
//!
//! - Terrain alphamaps packed into RGBA splatmaps, four layers per map
//! - Pure square-buffer transforms: vertical flip, 90° rotation and
//!   color + grayscale-alpha composition
//! - PNG / uncompressed TGA export, with optional registration as `Image` assets
//! - Mesh search by name driving the editor selection
//! - Camera auto-focus on selection changes
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_splat_tools::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(EditorToolsPlugin)
//!         .add_systems(Startup, setup)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands, mut export: MessageWriter<ExportSplatmap>) {
//!     let alphamap = Alphamap::filled(512, 4, 0);
//!     let terrain = commands.spawn(TerrainAlphamap(alphamap)).id();
//!     export.write(ExportSplatmap {
//!         terrain,
//!         name: "island".into(),
//!     });
//! }
//! ```

pub mod focus;
pub mod pixel;
mod plugin;
pub mod selection;
pub mod splatmap;

/// Writing splatmaps and composite textures to image files.
#[cfg(feature = "file_export")]
pub mod export;

pub mod prelude {
    pub use crate::focus::{AutoFocus, FocusCamera, ToggleAutoFocus};
    pub use crate::pixel::{
        PixelBuffer, Rgba8, TransformError, compose_color_alpha, rotate_90, vertical_flip,
    };
    pub use crate::plugin::{EditorToolsPlugin, EditorToolsSystems};
    pub use crate::selection::{
        MeshSearch, PickMeshNameFromSelection, SelectMeshesByName, Selection, SelectionChanged,
    };
    pub use crate::splatmap::{Alphamap, SplatmapError, TerrainAlphamap, splatmap};

    #[cfg(feature = "file_export")]
    pub use crate::export::{
        ExportComposite, ExportError, ExportSettings, ExportSplatmap, ImageFileFormat,
        TextureExported,
    };
}
