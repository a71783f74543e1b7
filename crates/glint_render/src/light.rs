//! Light sources: directional and cutoff spotlight.

use crate::Surface;
use glint_math::{Interval, Point3, Ray, Vec3, EPSILON};

/// A light source in the scene.
///
/// Each variant answers three questions about a shaded point: which ray
/// leads from the point to the light, how much light arrives there, and
/// whether a candidate surface blocks that ray.
#[derive(Debug, Clone)]
pub enum Light {
    Directional(DirectionalLight),
    Spotlight(CutoffSpotlight),
}

/// A light infinitely far away, shining in a fixed direction with
/// constant intensity.
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    direction: Vec3,
    intensity: Vec3,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, intensity: Vec3) -> Self {
        Self {
            direction,
            intensity,
        }
    }
}

/// A positional light that illuminates only inside a cone around its aim
/// direction. The cutoff is hard: full intensity inside the cone, nothing
/// outside.
#[derive(Debug, Clone)]
pub struct CutoffSpotlight {
    position: Point3,
    direction: Vec3,
    intensity: Vec3,
    cutoff_degrees: f64,
}

impl CutoffSpotlight {
    pub fn new(position: Point3, direction: Vec3, intensity: Vec3, cutoff_degrees: f64) -> Self {
        Self {
            position,
            direction,
            intensity,
            cutoff_degrees,
        }
    }
}

impl From<DirectionalLight> for Light {
    fn from(light: DirectionalLight) -> Self {
        Light::Directional(light)
    }
}

impl From<CutoffSpotlight> for Light {
    fn from(light: CutoffSpotlight) -> Self {
        Light::Spotlight(light)
    }
}

impl Light {
    /// The ray from `point` towards the light, with unit direction.
    pub fn ray_to_light(&self, point: Point3) -> Ray {
        match self {
            Light::Directional(light) => Ray::new(point, (-light.direction).normalize()),
            Light::Spotlight(light) => Ray::new(point, (light.position - point).normalize()),
        }
    }

    /// Incident intensity at `point`.
    ///
    /// `ray_to_light` must be the ray returned by [`Light::ray_to_light`]
    /// for the same point.
    pub fn intensity(&self, point: Point3, _ray_to_light: &Ray) -> Vec3 {
        match self {
            Light::Directional(light) => light.intensity,
            Light::Spotlight(light) => {
                let Some(to_point) = (point - light.position).try_normalize() else {
                    return light.intensity;
                };
                let cos_angle = light.direction.normalize().dot(to_point);
                if cos_angle < light.cutoff_degrees.to_radians().cos() {
                    Vec3::ZERO
                } else {
                    light.intensity
                }
            }
        }
    }

    /// The range of parametric distances along the shadow ray within which
    /// an intersection counts as an occluder. A surface beyond a positional
    /// light does not cast a shadow.
    pub fn occlusion_range(&self, point: Point3) -> Interval {
        match self {
            Light::Directional(_) => Interval::positive(),
            Light::Spotlight(light) => Interval::new(EPSILON, (light.position - point).length()),
        }
    }

    /// True if `surface` blocks the light along `ray_to_light`.
    pub fn is_occluded_by(&self, surface: &Surface, ray_to_light: &Ray) -> bool {
        match surface.intersect(ray_to_light) {
            Some(hit) => self.occlusion_range(ray_to_light.origin).surrounds(hit.t),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};
    use std::sync::Arc;

    fn sphere_at(center: Point3) -> Surface {
        Surface::new(Sphere::new(center, 1.0), Arc::new(Material::default()))
    }

    #[test]
    fn test_directional_ray_opposes_light_direction() {
        let light: Light = DirectionalLight::new(Vec3::new(0.0, 0.0, -1.0), Vec3::ONE).into();
        let ray = light.ray_to_light(Point3::new(1.0, 2.0, 3.0));

        assert_eq!(ray.origin, Point3::new(1.0, 2.0, 3.0));
        assert!((ray.direction - Vec3::Z).length() < 1e-9);
    }

    #[test]
    fn test_directional_intensity_is_constant() {
        let light: Light = DirectionalLight::new(Vec3::NEG_Z, Vec3::splat(0.4)).into();
        let p1 = Point3::ZERO;
        let p2 = Point3::new(100.0, -50.0, 3.0);
        assert_eq!(light.intensity(p1, &light.ray_to_light(p1)), Vec3::splat(0.4));
        assert_eq!(light.intensity(p2, &light.ray_to_light(p2)), Vec3::splat(0.4));
    }

    #[test]
    fn test_directional_occluded_by_any_forward_surface() {
        let light: Light = DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0), Vec3::ONE).into();
        let point = Point3::ZERO;
        let ray = light.ray_to_light(point);

        // Sphere far along the shadow ray still occludes a directional light.
        assert!(light.is_occluded_by(&sphere_at(Point3::new(0.0, 500.0, 0.0)), &ray));
        // Sphere off to the side does not.
        assert!(!light.is_occluded_by(&sphere_at(Point3::new(10.0, 5.0, 0.0)), &ray));
    }

    #[test]
    fn test_spotlight_hard_cutoff() {
        let light: Light = CutoffSpotlight::new(
            Point3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::splat(0.8),
            30.0,
        )
        .into();

        // Directly below the light: inside the cone.
        let inside = Point3::ZERO;
        assert_eq!(light.intensity(inside, &light.ray_to_light(inside)), Vec3::splat(0.8));

        // Far off axis: 45 degrees off the aim direction, past the cutoff.
        let outside = Point3::new(10.0, 0.0, 0.0);
        assert_eq!(light.intensity(outside, &light.ray_to_light(outside)), Vec3::ZERO);
    }

    #[test]
    fn test_spotlight_surface_beyond_light_does_not_shadow() {
        let light: Light = CutoffSpotlight::new(
            Point3::new(0.0, 5.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::ONE,
            45.0,
        )
        .into();
        let point = Point3::ZERO;
        let ray = light.ray_to_light(point);

        // Between the point and the light: shadows.
        assert!(light.is_occluded_by(&sphere_at(Point3::new(0.0, 2.5, 0.0)), &ray));
        // Past the light: does not.
        assert!(!light.is_occluded_by(&sphere_at(Point3::new(0.0, 20.0, 0.0)), &ray));
    }

    #[test]
    fn test_occlusion_is_monotone_under_added_surfaces() {
        let light: Light = DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0), Vec3::ONE).into();
        let point = Point3::ZERO;
        let ray = light.ray_to_light(point);

        let surfaces = vec![sphere_at(Point3::new(10.0, 5.0, 0.0))];
        let occluded_before = surfaces.iter().any(|s| light.is_occluded_by(s, &ray));
        assert!(!occluded_before);

        // Adding an opaque surface on the shadow ray can only flip the
        // answer from false to true.
        let mut more = surfaces.clone();
        more.push(sphere_at(Point3::new(0.0, 3.0, 0.0)));
        let occluded_after = more.iter().any(|s| light.is_occluded_by(s, &ray));
        assert!(occluded_after);
    }
}
