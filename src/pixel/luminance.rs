//! Grayscale conversion used when an image supplies an alpha channel.

use super::buffer::Rgba8;

/// Rec. 601 luma weights, scaled by 1000.
const WEIGHTS: [u32; 3] = [299, 587, 114];

/// Perceptual luminance of an RGB sample (Rec. 601), rounded to nearest.
///
/// The sample's own alpha is ignored.
///
/// ```
/// use bevy_splat_tools::pixel::{Rgba8, luminance};
///
/// assert_eq!(luminance(Rgba8::WHITE), 255);
/// assert_eq!(luminance(Rgba8::gray(128)), 128);
/// ```
#[inline]
pub fn luminance(px: Rgba8) -> u8 {
    let sum = WEIGHTS[0] * px.r as u32 + WEIGHTS[1] * px.g as u32 + WEIGHTS[2] * px.b as u32;
    ((sum + 500) / 1000) as u8
}
