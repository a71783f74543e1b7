//! Sphere primitive.

use crate::Hit;
use glint_math::{Point3, Ray, EPSILON};

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Closest forward intersection of `ray` with the sphere.
    ///
    /// Solves ||o + t*d - c||^2 = r^2 for t. With two distinct roots the
    /// smaller one past epsilon wins; if only the larger root is forward the
    /// ray started inside and the hit is flagged `within`. A grazing ray
    /// (vanishing discriminant) is treated as a single tangential hit.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let near = (-b - sqrt_d) / (2.0 * a);
        let far = (-b + sqrt_d) / (2.0 * a);

        if far - near < EPSILON {
            // Tangent hit. Kept identical to the generic single-root case:
            // accepted past epsilon and flagged as within.
            if near < EPSILON {
                return None;
            }
            return Some(Hit::new(near, self.normal_at(ray, near)).within());
        }

        if far <= EPSILON {
            return None;
        }
        if near <= EPSILON {
            // Origin inside the sphere; exit through the far root.
            return Some(Hit::new(far, self.normal_at(ray, far)).within());
        }
        Some(Hit::new(near, self.normal_at(ray, near)))
    }

    fn normal_at(&self, ray: &Ray, t: f64) -> glint_math::Vec3 {
        (ray.at(t) - self.center).normalize()
    }
}
