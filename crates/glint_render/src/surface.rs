//! A shape paired with its material.

use crate::{Hit, Material, Shape};
use glint_math::Ray;
use std::sync::Arc;

/// The unit of scene composition: geometry plus appearance.
///
/// Materials are reference counted so one material instance can back any
/// number of surfaces.
#[derive(Debug, Clone)]
pub struct Surface {
    shape: Shape,
    material: Arc<Material>,
}

impl Surface {
    /// Create a new surface.
    pub fn new(shape: impl Into<Shape>, material: Arc<Material>) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    /// Closest forward intersection of `ray` with this surface's shape.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.shape.intersect(ray)
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;
    use glint_math::{Point3, Vec3};

    #[test]
    fn test_material_shared_across_surfaces() {
        let material = Arc::new(Material::gold());
        let s1 = Surface::new(Sphere::new(Point3::ZERO, 1.0), material.clone());
        let s2 = Surface::new(Sphere::new(Point3::X, 1.0), material.clone());

        assert_eq!(Arc::strong_count(&material), 3);
        assert_eq!(s1.material().kd, s2.material().kd);
    }

    #[test]
    fn test_surface_forwards_intersection() {
        let surface = Surface::new(
            Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0),
            Arc::new(Material::default()),
        );
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(surface.intersect(&ray).is_some());
    }
}
