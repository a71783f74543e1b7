//! In-memory render target.

use crate::RenderError;
use glint_math::Vec3;
use image::{Rgb, RgbImage};
use std::path::Path;

/// A raster of linear RGB pixel values.
///
/// Channel values are unclamped floats while rendering accumulates light;
/// clamping into the displayable range happens only on conversion to 8-bit.
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Vec3>,
}

impl Raster {
    /// Create a raster filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// The pixel at (x, y) clamped to 8-bit RGB.
    pub fn rgb8_at(&self, x: u32, y: u32) -> [u8; 3] {
        let c = self.get(x, y).clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
        [c.x as u8, c.y as u8, c.z as u8]
    }

    /// Convert to packed 8-bit RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                bytes.extend_from_slice(&self.rgb8_at(x, y));
            }
        }
        bytes
    }

    /// Encode as PNG and write to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let img = RgbImage::from_fn(self.width, self.height, |x, y| Rgb(self.rgb8_at(x, y)));
        img.save(path.as_ref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_get_set() {
        let mut raster = Raster::new(4, 3);
        raster.set(2, 1, Vec3::new(0.5, 0.25, 1.0));
        assert_eq!(raster.get(2, 1), Vec3::new(0.5, 0.25, 1.0));
        assert_eq!(raster.get(0, 0), Vec3::ZERO);
    }

    #[test]
    fn test_rgb8_clamps_out_of_range_channels() {
        let mut raster = Raster::new(1, 1);
        // Reflection sums can exceed 1; negatives never happen but clamp anyway.
        raster.set(0, 0, Vec3::new(2.0, -1.0, 0.5));
        assert_eq!(raster.rgb8_at(0, 0), [255, 0, 127]);
    }

    #[test]
    fn test_to_rgb8_layout() {
        let mut raster = Raster::new(2, 1);
        raster.set(0, 0, Vec3::new(1.0, 0.0, 0.0));
        raster.set(1, 0, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(raster.to_rgb8(), vec![255, 0, 0, 0, 0, 255]);
    }
}
