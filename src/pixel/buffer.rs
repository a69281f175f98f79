//! Square pixel buffer storage.

use bytemuck::{Pod, Zeroable};

use super::transform::{self, TransformError};

/// A single RGBA sample with 8-bit channels.
///
/// Laid out as `[r, g, b, a]` so a slice of samples can be handed to an
/// encoder or a GPU texture as raw bytes via [`bytemuck::cast_slice`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray sample.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value, 255)
    }

    /// Returns a copy with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(px: Rgba8) -> Self {
        px.to_array()
    }
}

/// A square, row-major buffer of pixel samples.
///
/// The sample at column `x`, row `y` lives at index `x + y * resolution`.
/// Construction validates that the buffer holds exactly `resolution²`
/// samples, so every transform on a `PixelBuffer` is infallible with respect
/// to its own length.
///
/// # Example
///
/// ```
/// use bevy_splat_tools::pixel::PixelBuffer;
///
/// let buffer = PixelBuffer::new(vec![1, 2, 3, 4], 2).unwrap();
/// assert_eq!(buffer.get(1, 0), Some(&2));
/// assert_eq!(buffer.vertical_flip().as_slice(), &[3, 4, 1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer<P> {
    resolution: usize,
    pixels: Vec<P>,
}

impl<P: Copy> PixelBuffer<P> {
    /// Wraps `pixels` as a `resolution × resolution` buffer.
    pub fn new(pixels: Vec<P>, resolution: usize) -> Result<Self, TransformError> {
        transform::check_len(pixels.len(), resolution)?;
        Ok(Self { resolution, pixels })
    }

    /// Creates a buffer with every sample set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `resolution` is zero.
    pub fn filled(resolution: usize, value: P) -> Self {
        assert!(resolution > 0, "Resolution must be at least 1");
        Self {
            resolution,
            pixels: vec![value; resolution * resolution],
        }
    }

    /// Creates a buffer by sampling `f(x, y)` for every position.
    ///
    /// # Panics
    ///
    /// Panics if `resolution` is zero.
    pub fn from_fn<F: FnMut(usize, usize) -> P>(resolution: usize, mut f: F) -> Self {
        assert!(resolution > 0, "Resolution must be at least 1");
        let mut pixels = Vec::with_capacity(resolution * resolution);
        for y in 0..resolution {
            for x in 0..resolution {
                pixels.push(f(x, y));
            }
        }
        Self { resolution, pixels }
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false: a valid buffer holds at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[P] {
        &self.pixels
    }

    #[inline]
    pub fn into_vec(self) -> Vec<P> {
        self.pixels
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.resolution && y < self.resolution).then(|| x + y * self.resolution)
    }

    /// Sample at column `x`, row `y`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&P> {
        self.index(x, y).map(|i| &self.pixels[i])
    }

    /// Sets the sample at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: P) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = value;
        }
    }

    /// Reverses row order. See [`transform::vertical_flip`].
    pub fn vertical_flip(&self) -> Self {
        Self {
            resolution: self.resolution,
            pixels: transform::flip_rows(&self.pixels, self.resolution),
        }
    }

    /// Rotates by 90°. See [`transform::rotate_90`].
    pub fn rotate_90(&self) -> Self {
        Self {
            resolution: self.resolution,
            pixels: transform::rotate_indices(&self.pixels, self.resolution),
        }
    }
}

impl PixelBuffer<Rgba8> {
    /// Raw `[r, g, b, a]` bytes in row-major order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Builds a buffer from tightly packed RGBA8 bytes.
    pub fn from_rgba_bytes(bytes: &[u8], resolution: usize) -> Result<Self, TransformError> {
        if bytes.len() % 4 != 0 {
            return Err(TransformError::MisalignedBytes { len: bytes.len() });
        }
        let pixels: Vec<Rgba8> = bytes
            .chunks_exact(4)
            .map(|c| Rgba8::new(c[0], c[1], c[2], c[3]))
            .collect();
        Self::new(pixels, resolution)
    }

    /// Combines this buffer's RGB with the luminance of `alpha`.
    /// See [`transform::compose_color_alpha`].
    pub fn compose_alpha(&self, alpha: &PixelBuffer<Rgba8>) -> Result<Self, TransformError> {
        if self.resolution != alpha.resolution {
            return Err(TransformError::DimensionMismatch {
                color: self.resolution,
                alpha: alpha.resolution,
            });
        }
        Ok(Self {
            resolution: self.resolution,
            pixels: transform::merge_alpha(&self.pixels, &alpha.pixels),
        })
    }
}
