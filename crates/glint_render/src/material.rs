//! Phong material parameters and preset materials.

use crate::Hit;
use glint_math::Vec3;
use rand::Rng;

/// Optical properties of a surface.
///
/// The reflectance coefficients are per RGB channel and expected in [0, 1];
/// the shading math assumes that range but does not enforce it. Materials
/// are immutable once built and shared across surfaces via `Arc`.
#[derive(Debug, Clone)]
pub struct Material {
    /// Ambient reflectance.
    pub ka: Vec3,
    /// Diffuse reflectance.
    pub kd: Vec3,
    /// Specular reflectance.
    pub ks: Vec3,
    /// Reflection attenuation, applied to the recursively traced mirror ray.
    pub kr: Vec3,
    /// Transmission attenuation, applied to the recursively traced refracted ray.
    pub kt: Vec3,
    /// Phong specular exponent.
    pub shininess: f64,
    /// Whether the reflection term is evaluated at all.
    pub reflecting: bool,
    /// Whether the refraction term is evaluated at all.
    pub transparent: bool,
    /// Refraction index of the material interior (the exterior is air, 1.0).
    pub refraction_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ka: Vec3::splat(0.1),
            kd: Vec3::splat(0.7),
            ks: Vec3::ONE,
            kr: Vec3::ZERO,
            kt: Vec3::ZERO,
            shininess: 10.0,
            reflecting: false,
            transparent: false,
            refraction_index: 1.5,
        }
    }
}

impl Material {
    /// Create a material with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ka(mut self, ka: Vec3) -> Self {
        self.ka = ka;
        self
    }

    pub fn with_kd(mut self, kd: Vec3) -> Self {
        self.kd = kd;
        self
    }

    pub fn with_ks(mut self, ks: Vec3) -> Self {
        self.ks = ks;
        self
    }

    pub fn with_kr(mut self, kr: Vec3) -> Self {
        self.kr = kr;
        self
    }

    pub fn with_kt(mut self, kt: Vec3) -> Self {
        self.kt = kt;
        self
    }

    pub fn with_shininess(mut self, shininess: f64) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_reflecting(mut self, reflecting: bool) -> Self {
        self.reflecting = reflecting;
        self
    }

    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn with_refraction_index(mut self, refraction_index: f64) -> Self {
        self.refraction_index = refraction_index;
        self
    }

    /// Refraction index on the side the ray arrives from.
    pub fn n1(&self, hit: &Hit) -> f64 {
        if hit.within {
            self.refraction_index
        } else {
            1.0
        }
    }

    /// Refraction index on the side the ray leaves into.
    pub fn n2(&self, hit: &Hit) -> f64 {
        if hit.within {
            1.0
        } else {
            self.refraction_index
        }
    }

    // Preset materials, OpenGL material table values.

    pub fn gold() -> Self {
        Self::new()
            .with_ka(Vec3::new(0.24725, 0.1995, 0.0745))
            .with_kd(Vec3::new(0.75164, 0.60648, 0.22648))
            .with_ks(Vec3::new(0.628281, 0.555802, 0.366065))
            .with_shininess(51.2)
    }

    pub fn silver() -> Self {
        Self::new()
            .with_ka(Vec3::splat(0.19225))
            .with_kd(Vec3::splat(0.50754))
            .with_ks(Vec3::splat(0.508273))
            .with_shininess(51.2)
    }

    pub fn red_plastic() -> Self {
        Self::new()
            .with_ka(Vec3::ZERO)
            .with_kd(Vec3::new(0.5, 0.0, 0.0))
            .with_ks(Vec3::new(0.7, 0.6, 0.6))
            .with_shininess(32.0)
    }

    pub fn white_plastic() -> Self {
        Self::new()
            .with_ka(Vec3::ZERO)
            .with_kd(Vec3::splat(0.55))
            .with_ks(Vec3::splat(0.7))
            .with_shininess(32.0)
    }

    pub fn white_rubber() -> Self {
        Self::new()
            .with_ka(Vec3::splat(0.05))
            .with_kd(Vec3::splat(0.5))
            .with_ks(Vec3::splat(0.7))
            .with_shininess(10.0)
    }

    pub fn blue_rubber() -> Self {
        Self::new()
            .with_ka(Vec3::new(0.0, 0.0, 0.05))
            .with_kd(Vec3::new(0.4, 0.4, 0.5))
            .with_ks(Vec3::new(0.04, 0.04, 0.7))
            .with_shininess(10.0)
    }

    pub fn mirror() -> Self {
        Self::new()
            .with_ka(Vec3::ZERO)
            .with_kd(Vec3::splat(0.05))
            .with_ks(Vec3::ONE)
            .with_kr(Vec3::splat(0.95))
            .with_reflecting(true)
            .with_shininess(100.0)
    }

    pub fn glass() -> Self {
        Self::new()
            .with_ka(Vec3::ZERO)
            .with_kd(Vec3::splat(0.05))
            .with_ks(Vec3::ONE)
            .with_kt(Vec3::splat(0.9))
            .with_transparent(true)
            .with_refraction_index(1.5)
            .with_shininess(100.0)
    }

    /// A random matte material, for generated scenes.
    pub fn random(rng: &mut impl Rng) -> Self {
        let kd = Vec3::new(rng.gen(), rng.gen(), rng.gen());
        Self::new()
            .with_ka(kd * 0.1)
            .with_kd(kd)
            .with_ks(Vec3::splat(0.7))
            .with_shininess(10.0 + 40.0 * rng.gen::<f64>())
    }
}
