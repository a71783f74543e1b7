//! Pinhole camera: maps pixel coordinates to points on the image plane.

use crate::RenderError;
use glint_math::{Point3, Vec3};

/// A pinhole camera with an orthonormal viewing basis.
///
/// Construction fixes the eye position and orientation; the per-pixel
/// geometry depends on the output resolution and is derived by
/// [`PinholeCamera::at_resolution`], which must run before any call to
/// [`PinholeCamera::transform`].
#[derive(Debug, Clone, Copy)]
pub struct PinholeCamera {
    position: Point3,
    towards: Vec3,
    up: Vec3,
    right: Vec3,
    distance_to_plane: f64,

    // Derived per-resolution fields, set by at_resolution().
    plane_center: Point3,
    pixel_width: f64,
    image_width: u32,
    image_height: u32,
}

impl PinholeCamera {
    /// Create a camera at `position` looking along `towards` with `up`
    /// fixing the roll, with the image plane `distance_to_plane` away.
    ///
    /// The basis is orthonormalized; degenerate inputs (zero-length or
    /// parallel towards/up, non-positive distance) are rejected.
    pub fn new(
        position: Point3,
        towards: Vec3,
        up: Vec3,
        distance_to_plane: f64,
    ) -> Result<Self, RenderError> {
        if distance_to_plane <= 0.0 {
            return Err(RenderError::InvalidPlaneDistance(distance_to_plane));
        }
        let towards = towards
            .try_normalize()
            .ok_or(RenderError::DegenerateCamera)?;
        let right = towards
            .cross(up)
            .try_normalize()
            .ok_or(RenderError::DegenerateCamera)?;
        let up = right.cross(towards).normalize();

        Ok(Self {
            position,
            towards,
            up,
            right,
            distance_to_plane,
            plane_center: position + towards * distance_to_plane,
            pixel_width: 0.0,
            image_width: 0,
            image_height: 0,
        })
    }

    /// Return a copy with the per-pixel plane geometry established for the
    /// given resolution and physical plane width.
    ///
    /// Pixels are square; the plane height follows from the aspect ratio.
    pub fn at_resolution(mut self, width: u32, height: u32, plane_width: f64) -> Self {
        self.image_width = width;
        self.image_height = height;
        self.pixel_width = plane_width / width as f64;
        self.plane_center = self.position + self.towards * self.distance_to_plane;
        self
    }

    /// The point on the image plane at the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left; x grows to the right, y grows down.
    pub fn transform(&self, x: u32, y: u32) -> Point3 {
        self.transform_offset(x, y, 0.0, 0.0)
    }

    /// Like [`PinholeCamera::transform`] with a sub-pixel offset
    /// `(dx, dy)` in pixel units, used for anti-aliasing jitter.
    pub fn transform_offset(&self, x: u32, y: u32, dx: f64, dy: f64) -> Point3 {
        let half_w = (self.image_width as f64 - 1.0) / 2.0;
        let half_h = (self.image_height as f64 - 1.0) / 2.0;
        let u = (x as f64 - half_w + dx) * self.pixel_width;
        let v = (y as f64 - half_h + dy) * self.pixel_width;
        self.plane_center + u * self.right - v * self.up
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    pub fn pixel_width(&self) -> f64 {
        self.pixel_width
    }
}
