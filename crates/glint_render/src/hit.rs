//! Intersection results.

use crate::Surface;
use glint_math::Vec3;

/// Record of a single ray-shape intersection.
///
/// `t` is the smallest parametric distance past epsilon that satisfies the
/// shape equation for the query that produced this record. `normal` is unit
/// length and points out of the shape; when the ray started inside the shape
/// `within` is set and the refraction path flips the normal itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parametric distance along the ray.
    pub t: f64,
    /// Unit surface normal at the intersection point.
    pub normal: Vec3,
    /// True when the ray origin was inside the shape.
    pub within: bool,
}

impl Hit {
    /// Create a hit with the ray origin outside the shape.
    pub fn new(t: f64, normal: Vec3) -> Self {
        Self {
            t,
            normal,
            within: false,
        }
    }

    /// Mark this hit as originating from inside the shape.
    pub fn within(mut self) -> Self {
        self.within = true;
        self
    }
}

/// A scene-level closest hit: the geometric record plus a back-reference
/// to the surface that produced it.
///
/// The reference is non-owning and only lives for the duration of the
/// shading computation that consumes it.
#[derive(Clone, Copy)]
pub struct SurfaceHit<'a> {
    pub hit: Hit,
    pub surface: &'a Surface,
}
