//! Terrain alphamap storage.

use bevy::prelude::*;
use thiserror::Error;

/// Number of layers packed into one RGBA splatmap.
pub const LAYERS_PER_SPLAT: usize = 4;

/// Errors that can occur when building or reading an alphamap.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplatmapError {
    #[error("Alphamap resolution must be at least 1")]
    ZeroResolution,

    #[error("Alphamap must have at least one layer")]
    NoLayers,

    #[error(
        "Alphamap holds {len} weights, expected {expected} ({resolution}x{resolution} texels, {layers} layers)"
    )]
    WeightCountMismatch {
        len: usize,
        expected: usize,
        resolution: usize,
        layers: usize,
    },

    #[error("Alphamap of {resolution}x{resolution} texels with {layers} layers is too large to address")]
    TooLarge { resolution: usize, layers: usize },

    #[error("Splat index {index} out of range: alphamap has {count} splats")]
    SplatOutOfRange { index: usize, count: usize },
}

/// Per-texel blend weights for a set of terrain surface layers.
///
/// # Layout
///
/// Weights are stored in the terrain's native `[y, x, layer]` order:
/// the weight of `layer` at column `x`, row `y` lives at
/// `(y * resolution + x) * layers + layer`. Row `y` runs along the terrain's
/// Z axis with row 0 at the terrain origin.
///
/// # Example
///
/// ```
/// use bevy_splat_tools::splatmap::Alphamap;
///
/// let mut alphamap = Alphamap::filled(4, 2, 0);
/// alphamap.set_weight(1, 2, 0, 0.25);
/// alphamap.set_weight(1, 2, 1, 0.75);
/// assert_eq!(alphamap.weight(1, 2, 1), 0.75);
/// assert_eq!(alphamap.splat_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Alphamap {
    resolution: usize,
    layers: usize,
    weights: Vec<f32>,
}

/// Number of weights held by a `resolution²` alphamap with `layers` layers.
fn weight_count(resolution: usize, layers: usize) -> Result<usize, SplatmapError> {
    if resolution == 0 {
        return Err(SplatmapError::ZeroResolution);
    }
    if layers == 0 {
        return Err(SplatmapError::NoLayers);
    }
    resolution
        .checked_mul(resolution)
        .and_then(|n| n.checked_mul(layers))
        .ok_or(SplatmapError::TooLarge { resolution, layers })
}

impl Alphamap {
    /// Wraps raw weights in `[y, x, layer]` order.
    pub fn new(resolution: usize, layers: usize, weights: Vec<f32>) -> Result<Self, SplatmapError> {
        let expected = weight_count(resolution, layers)?;
        if weights.len() != expected {
            return Err(SplatmapError::WeightCountMismatch {
                len: weights.len(),
                expected,
                resolution,
                layers,
            });
        }
        Ok(Self {
            resolution,
            layers,
            weights,
        })
    }

    /// Creates an alphamap where every texel is fully weighted to `layer`.
    ///
    /// # Panics
    ///
    /// Panics if `resolution` or `layers` is zero, `layer >= layers`, or the
    /// weight count overflows `usize`.
    pub fn filled(resolution: usize, layers: usize, layer: usize) -> Self {
        assert!(layer < layers, "Layer {layer} out of range for {layers} layers");
        let count = weight_count(resolution, layers).unwrap_or_else(|err| panic!("{err}"));

        let mut weights = vec![0.0; count];
        for texel in weights.chunks_exact_mut(layers) {
            texel[layer] = 1.0;
        }
        Self {
            resolution,
            layers,
            weights,
        }
    }

    /// Creates an alphamap by sampling `f(x, y)` for each texel's weights.
    ///
    /// `f` receives a mutable slice of `layers` weights, zero-initialized.
    pub fn from_fn<F: FnMut(usize, usize, &mut [f32])>(
        resolution: usize,
        layers: usize,
        mut f: F,
    ) -> Result<Self, SplatmapError> {
        let count = weight_count(resolution, layers)?;
        let mut alphamap = Self::new(resolution, layers, vec![0.0; count])?;
        for y in 0..resolution {
            for x in 0..resolution {
                let start = alphamap.offset(x, y);
                f(x, y, &mut alphamap.weights[start..start + layers]);
            }
        }
        Ok(alphamap)
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[inline]
    pub fn layers(&self) -> usize {
        self.layers
    }

    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Number of RGBA splatmaps needed to hold every layer.
    #[inline]
    pub fn splat_count(&self) -> usize {
        self.layers.div_ceil(LAYERS_PER_SPLAT)
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.resolution + x) * self.layers
    }

    /// All layer weights of the texel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> &[f32] {
        let start = self.offset(x, y);
        &self.weights[start..start + self.layers]
    }

    /// Weight of `layer` at `(x, y)`. Out-of-bounds reads return 0.
    #[inline]
    pub fn weight(&self, x: usize, y: usize, layer: usize) -> f32 {
        if x >= self.resolution || y >= self.resolution || layer >= self.layers {
            return 0.0;
        }
        self.weights[self.offset(x, y) + layer]
    }

    /// Sets the weight of `layer` at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_weight(&mut self, x: usize, y: usize, layer: usize, weight: f32) {
        if x >= self.resolution || y >= self.resolution || layer >= self.layers {
            return;
        }
        let i = self.offset(x, y) + layer;
        self.weights[i] = weight;
    }
}

/// Alphamap attached to a terrain entity, exported by
/// [`ExportSplatmap`](crate::export::ExportSplatmap).
#[derive(Component, Clone, Debug, Deref, DerefMut)]
pub struct TerrainAlphamap(pub Alphamap);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_shape() {
        assert_eq!(Alphamap::new(0, 1, vec![]), Err(SplatmapError::ZeroResolution));
        assert_eq!(Alphamap::new(2, 0, vec![]), Err(SplatmapError::NoLayers));
        assert_eq!(
            Alphamap::new(2, 3, vec![0.0; 11]),
            Err(SplatmapError::WeightCountMismatch {
                len: 11,
                expected: 12,
                resolution: 2,
                layers: 3,
            })
        );
        assert!(Alphamap::new(2, 3, vec![0.0; 12]).is_ok());
    }

    #[test]
    fn test_oversized_shape_rejected() {
        let huge = 1usize << (usize::BITS / 2 + 1);
        assert_eq!(
            Alphamap::new(huge, 4, vec![0.0; 4]),
            Err(SplatmapError::TooLarge {
                resolution: huge,
                layers: 4
            })
        );
        assert_eq!(
            Alphamap::new(3, usize::MAX, vec![]),
            Err(SplatmapError::TooLarge {
                resolution: 3,
                layers: usize::MAX
            })
        );
        assert!(Alphamap::from_fn(huge, 1, |_, _, _| {}).is_err());
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_filled_oversized_panics() {
        Alphamap::filled(1usize << (usize::BITS / 2 + 1), 1, 0);
    }

    #[test]
    fn test_layout_is_y_x_layer() {
        let weights: Vec<f32> = (0..18).map(|i| i as f32).collect();
        let alphamap = Alphamap::new(3, 2, weights).unwrap();
        // (y=1, x=2) -> (1 * 3 + 2) * 2 = 10
        assert_eq!(alphamap.weight(2, 1, 0), 10.0);
        assert_eq!(alphamap.weight(2, 1, 1), 11.0);
        assert_eq!(alphamap.texel(2, 1), &[10.0, 11.0]);
    }

    #[test]
    fn test_filled() {
        let alphamap = Alphamap::filled(4, 3, 2);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(alphamap.texel(x, y), &[0.0, 0.0, 1.0]);
            }
        }
    }

    #[test]
    fn test_from_fn() {
        let alphamap = Alphamap::from_fn(2, 2, |x, y, texel| {
            texel[0] = x as f32;
            texel[1] = y as f32;
        })
        .unwrap();
        assert_eq!(alphamap.texel(1, 0), &[1.0, 0.0]);
        assert_eq!(alphamap.texel(0, 1), &[0.0, 1.0]);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut alphamap = Alphamap::filled(2, 1, 0);
        alphamap.set_weight(5, 0, 0, 0.5);
        alphamap.set_weight(0, 0, 3, 0.5);
        assert_eq!(alphamap.weight(5, 0, 0), 0.0);
        assert_eq!(alphamap.weight(0, 0, 3), 0.0);
        assert!(alphamap.weights().iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_splat_count() {
        assert_eq!(Alphamap::filled(1, 1, 0).splat_count(), 1);
        assert_eq!(Alphamap::filled(1, 4, 0).splat_count(), 1);
        assert_eq!(Alphamap::filled(1, 5, 0).splat_count(), 2);
        assert_eq!(Alphamap::filled(1, 8, 0).splat_count(), 2);
    }
}
