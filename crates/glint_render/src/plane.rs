//! Implicit plane primitive.

use crate::Hit;
use glint_math::{Ray, Vec3, EPSILON};

/// An infinite plane given implicitly by ax + by + cz + d = 0.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Plane {
    /// Create a new plane from its implicit equation coefficients.
    ///
    /// (a, b, c) must not all be zero.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    fn normal(&self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// Forward intersection of `ray` with the plane.
    ///
    /// A ray parallel to the plane (denominator below epsilon) misses. The
    /// returned normal is oriented against the incoming ray so both sides
    /// of the plane shade correctly.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let n = self.normal();
        let denominator = n.dot(ray.direction);
        if denominator.abs() <= EPSILON {
            return None;
        }

        let t = -(n.dot(ray.origin) + self.d) / denominator;
        if t <= EPSILON {
            return None;
        }

        let normal = if denominator > 0.0 {
            -n.normalize()
        } else {
            n.normalize()
        };
        Some(Hit::new(t, normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Point3;

    #[test]
    fn test_plane_hit_from_above() {
        // The plane z = -2.5 (0x + 0y + 1z + 2.5 = 0).
        let plane = Plane::new(0.0, 0.0, 1.0, 2.5);
        let ray = Ray::new(Point3::new(0.0, 0.0, 4.0), Vec3::new(0.0, 0.0, -1.0));

        let hit = plane.intersect(&ray).unwrap();
        assert!((hit.t - 6.5).abs() < 1e-9);
        assert_eq!(hit.normal, Vec3::Z);
        assert!(!hit.within);
    }

    #[test]
    fn test_plane_normal_faces_ray_from_below() {
        let plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, -4.0), Vec3::Z);

        let hit = plane.intersect(&ray).unwrap();
        assert_eq!(hit.normal, -Vec3::Z);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::X);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::Z);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_unnormalized_coefficients() {
        // 2z + 4 = 0 is the plane z = -2.
        let plane = Plane::new(0.0, 0.0, 2.0, 4.0);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = plane.intersect(&ray).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-9);
        assert!((hit.normal.length() - 1.0).abs() < 1e-9);
    }
}
