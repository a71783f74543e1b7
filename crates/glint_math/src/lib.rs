//! Math foundation for the glint ray tracer.
//!
//! All geometry is double precision. The 3-component vector type comes
//! from glam (`DVec3`), re-exported here as [`Vec3`]; positions use the
//! [`Point3`] alias so intersection and camera code reads naturally.

pub use glam::DVec3 as Vec3;

/// A position in 3-space. Same representation as [`Vec3`], separate name.
pub type Point3 = Vec3;

mod interval;
pub mod ops;
mod ray;

pub use interval::Interval;
pub use ops::{reflect, refract, EPSILON};
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_componentwise_mul() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
    }

    #[test]
    fn test_try_normalize_zero_vector() {
        // Zero-length input has no direction; glam reports it as None
        // rather than returning NaNs.
        assert!(Vec3::ZERO.try_normalize().is_none());
        assert!(Vec3::X.try_normalize().is_some());
    }
}
