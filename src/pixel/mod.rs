//! Pure pixel-buffer transforms.
//!
//! Provides [`PixelBuffer`], a square row-major sample grid, and the three
//! operations the splatmap and composite exporters are built from:
//! vertical flip, 90° rotation and color + grayscale-alpha composition.

mod buffer;
mod luminance;
mod transform;

pub use buffer::{PixelBuffer, Rgba8};
pub use luminance::luminance;
pub use transform::{TransformError, compose_color_alpha, rotate_90, vertical_flip};
