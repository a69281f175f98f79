//! Terrain alphamaps and splatmap packing.
//!
//! An [`Alphamap`] holds per-texel weights for any number of surface layers.
//! Every group of four layers becomes one RGBA splatmap, reoriented by
//! [`splatmap`] so row 0 of the image matches the terrain's first column.

mod alphamap;
mod pipeline;

pub use alphamap::{Alphamap, LAYERS_PER_SPLAT, SplatmapError, TerrainAlphamap};
pub use pipeline::{quantize_weight, splatmap, splatmaps};
