//! Alphamap to splatmap conversion.

use super::alphamap::{Alphamap, LAYERS_PER_SPLAT, SplatmapError};
use crate::pixel::{PixelBuffer, Rgba8};

/// Quantizes a blend weight to an 8-bit channel value.
#[inline]
pub fn quantize_weight(weight: f32) -> u8 {
    (weight.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Alphamap {
    /// Packs layers `4 * index .. 4 * index + 4` into an RGBA buffer, keeping
    /// the alphamap's `[y, x]` order.
    ///
    /// Layers past the end of the alphamap pack as 0.
    pub fn pack_splat(&self, index: usize) -> Result<PixelBuffer<Rgba8>, SplatmapError> {
        let count = self.splat_count();
        if index >= count {
            return Err(SplatmapError::SplatOutOfRange { index, count });
        }

        let first = index * LAYERS_PER_SPLAT;
        let layers = self.layers();
        Ok(PixelBuffer::from_fn(self.resolution(), |x, y| {
            let texel = self.texel(x, y);
            let mut channels = [0u8; LAYERS_PER_SPLAT];
            for (channel, layer) in channels.iter_mut().zip(first..layers) {
                *channel = quantize_weight(texel[layer]);
            }
            Rgba8::from(channels)
        }))
    }
}

/// Builds splatmap `index` of `alphamap`, oriented for image export.
///
/// The packed buffer is flipped vertically and then rotated by 90°. The flip
/// has to come first: together the two steps transpose the buffer, turning
/// the terrain's `[y, x]` weight order into image row order.
pub fn splatmap(alphamap: &Alphamap, index: usize) -> Result<PixelBuffer<Rgba8>, SplatmapError> {
    let packed = alphamap.pack_splat(index)?;
    Ok(packed.vertical_flip().rotate_90())
}

/// Builds every splatmap of `alphamap`, in layer order.
///
/// Fails on the first splat that cannot be built; no partial list is returned.
pub fn splatmaps(alphamap: &Alphamap) -> Result<Vec<PixelBuffer<Rgba8>>, SplatmapError> {
    (0..alphamap.splat_count())
        .map(|index| splatmap(alphamap, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_weight() {
        assert_eq!(quantize_weight(0.0), 0);
        assert_eq!(quantize_weight(1.0), 255);
        assert_eq!(quantize_weight(0.5), 128);
        assert_eq!(quantize_weight(-2.0), 0);
        assert_eq!(quantize_weight(3.0), 255);
    }

    #[test]
    fn test_pack_single_splat() {
        let alphamap = Alphamap::from_fn(2, 4, |x, y, texel| {
            texel[x + 2 * y] = 1.0;
        })
        .unwrap();
        let packed = alphamap.pack_splat(0).unwrap();

        assert_eq!(packed.get(0, 0), Some(&Rgba8::new(255, 0, 0, 0)));
        assert_eq!(packed.get(1, 0), Some(&Rgba8::new(0, 255, 0, 0)));
        assert_eq!(packed.get(0, 1), Some(&Rgba8::new(0, 0, 255, 0)));
        assert_eq!(packed.get(1, 1), Some(&Rgba8::new(0, 0, 0, 255)));
    }

    #[test]
    fn test_pack_partial_splat_zero_fills() {
        let alphamap = Alphamap::filled(2, 6, 5);
        assert_eq!(alphamap.pack_splat(0).unwrap().as_slice(), &[Rgba8::TRANSPARENT; 4]);
        assert_eq!(
            alphamap.pack_splat(1).unwrap().as_slice(),
            &[Rgba8::new(0, 255, 0, 0); 4]
        );
    }

    #[test]
    fn test_pack_out_of_range() {
        let alphamap = Alphamap::filled(2, 4, 0);
        assert_eq!(
            alphamap.pack_splat(1),
            Err(SplatmapError::SplatOutOfRange { index: 1, count: 1 })
        );
    }

    #[test]
    fn test_splatmap_transposes_packed_buffer() {
        let alphamap = Alphamap::from_fn(3, 1, |x, y, texel| {
            texel[0] = (x + 3 * y) as f32 / 8.0;
        })
        .unwrap();
        let packed = alphamap.pack_splat(0).unwrap();
        let splat = splatmap(&alphamap, 0).unwrap();

        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(splat.get(y, x), packed.get(x, y));
            }
        }
    }

    #[test]
    fn test_splatmap_resolution_one() {
        let alphamap = Alphamap::filled(1, 2, 1);
        let splat = splatmap(&alphamap, 0).unwrap();
        assert_eq!(splat.as_slice(), &[Rgba8::new(0, 255, 0, 0)]);
    }

    #[test]
    fn test_splatmaps_covers_all_layers() {
        let alphamap = Alphamap::filled(4, 9, 8);
        let splats = splatmaps(&alphamap).unwrap();
        assert_eq!(splats.len(), alphamap.splat_count());
        assert_eq!(splats.len(), 3);
        assert!(splats[2].as_slice().iter().all(|px| px.r == 255));
        assert!(splats[0].as_slice().iter().all(|px| *px == Rgba8::TRANSPARENT));
    }

    #[test]
    fn test_splatmaps_match_individual_splats() {
        let alphamap = Alphamap::from_fn(3, 7, |x, y, texel| {
            texel[(x + y) % 7] = 1.0;
        })
        .unwrap();
        let splats = splatmaps(&alphamap).unwrap();
        for (index, splat) in splats.iter().enumerate() {
            assert_eq!(Ok(splat.clone()), splatmap(&alphamap, index));
        }
    }
}
