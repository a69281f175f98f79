//! Geometric reindexing and channel substitution over square pixel buffers.
//!
//! All operations take a row-major slice plus its resolution, validate the
//! length up front and return a freshly allocated buffer. Nothing here
//! interpolates: flip and rotate are pure index permutations.

use thiserror::Error;

use super::buffer::Rgba8;
use super::luminance::luminance;

/// Errors raised when a buffer does not match its stated shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Buffer holds {len} samples, which does not match resolution {resolution}x{resolution}")]
    InvalidArgument { len: usize, resolution: usize },

    #[error("Resolution mismatch: color is {color}x{color}, alpha is {alpha}x{alpha}")]
    DimensionMismatch { color: usize, alpha: usize },

    #[error("Byte buffer of length {len} is not a whole number of RGBA8 samples")]
    MisalignedBytes { len: usize },
}

/// Checks that a buffer of `len` samples is a non-empty `resolution²` square.
pub(crate) fn check_len(len: usize, resolution: usize) -> Result<(), TransformError> {
    let expected = resolution.checked_mul(resolution);
    if resolution == 0 || expected != Some(len) {
        return Err(TransformError::InvalidArgument { len, resolution });
    }
    Ok(())
}

/// Reverses the row order of a square buffer.
///
/// `out[x + (r - y - 1) * r] = in[x + y * r]`. Applying it twice yields the
/// input.
///
/// # Example
///
/// ```
/// use bevy_splat_tools::pixel::vertical_flip;
///
/// // A B       C D
/// // C D  ->   A B
/// let flipped = vertical_flip(&['A', 'B', 'C', 'D'], 2).unwrap();
/// assert_eq!(flipped, vec!['C', 'D', 'A', 'B']);
/// ```
pub fn vertical_flip<P: Copy>(pixels: &[P], resolution: usize) -> Result<Vec<P>, TransformError> {
    check_len(pixels.len(), resolution)?;
    Ok(flip_rows(pixels, resolution))
}

/// Rotates a square buffer by 90°.
///
/// `out[(r - y - 1) + x * r] = in[x + y * r]`. Four applications yield the
/// input.
pub fn rotate_90<P: Copy>(pixels: &[P], resolution: usize) -> Result<Vec<P>, TransformError> {
    check_len(pixels.len(), resolution)?;
    Ok(rotate_indices(pixels, resolution))
}

/// Builds an RGBA buffer from the RGB of `color` and the luminance of `alpha`.
///
/// Each buffer is checked against its own resolution first, then the two
/// resolutions are compared.
pub fn compose_color_alpha(
    color: &[Rgba8],
    color_resolution: usize,
    alpha: &[Rgba8],
    alpha_resolution: usize,
) -> Result<Vec<Rgba8>, TransformError> {
    check_len(color.len(), color_resolution)?;
    check_len(alpha.len(), alpha_resolution)?;
    if color_resolution != alpha_resolution {
        return Err(TransformError::DimensionMismatch {
            color: color_resolution,
            alpha: alpha_resolution,
        });
    }
    Ok(merge_alpha(color, alpha))
}

// Unchecked kernels. Callers guarantee `pixels.len() == resolution²`.

pub(crate) fn flip_rows<P: Copy>(pixels: &[P], resolution: usize) -> Vec<P> {
    let mut out = Vec::with_capacity(pixels.len());
    for row in pixels.chunks_exact(resolution).rev() {
        out.extend_from_slice(row);
    }
    out
}

pub(crate) fn rotate_indices<P: Copy>(pixels: &[P], resolution: usize) -> Vec<P> {
    let mut out = pixels.to_vec();
    for y in 0..resolution {
        for x in 0..resolution {
            out[(resolution - y - 1) + x * resolution] = pixels[x + y * resolution];
        }
    }
    out
}

pub(crate) fn merge_alpha(color: &[Rgba8], alpha: &[Rgba8]) -> Vec<Rgba8> {
    color
        .iter()
        .zip(alpha)
        .map(|(c, a)| c.with_alpha(luminance(*a)))
        .collect()
}
