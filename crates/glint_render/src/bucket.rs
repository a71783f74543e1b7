//! Tile decomposition of the image for parallel rendering.
//!
//! The image is divided into rectangular buckets that are rendered
//! independently on the rayon pool and blitted back into the raster in a
//! deterministic order.

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    /// X coordinate of the bucket's top-left corner.
    pub x: u32,
    /// Y coordinate of the bucket's top-left corner.
    pub y: u32,
    /// Width of the bucket in pixels.
    pub width: u32,
    /// Height of the bucket in pixels.
    pub height: u32,
    /// Index of this bucket in row-major order; seeds the bucket's RNG.
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate the bucket grid for an image, in row-major order.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}
