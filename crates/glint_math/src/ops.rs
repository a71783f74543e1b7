//! Reflection and refraction of direction vectors.

use crate::Vec3;

/// Tolerance for floating point comparisons: self-intersection rejection,
/// degenerate denominators and grazing discriminants all test against this.
pub const EPSILON: f64 = 1e-5;

/// Mirror `incident` about `normal`.
///
/// `normal` must be unit length; `incident` may have any magnitude.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Refract `incident` through a surface boundary by Snell's law.
///
/// `n1` is the refraction index on the side the ray arrives from, `n2` the
/// side it leaves into. `normal` must be unit length and point towards the
/// arriving ray's side. Returns `None` on total internal reflection.
pub fn refract(incident: Vec3, normal: Vec3, n1: f64, n2: f64) -> Option<Vec3> {
    let incident = incident.normalize();
    let eta = n1 / n2;
    let cos_i = (-incident).dot(normal).min(1.0);
    let sin2_t = eta * eta * (1.0 - cos_i * cos_i);
    if sin2_t > 1.0 {
        return None;
    }
    let cos_t = (1.0 - sin2_t).sqrt();
    Some(eta * incident + (eta * cos_i - cos_t) * normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_reflect_basic() {
        // 45 degree incidence on the XZ plane.
        let incident = Vec3::new(1.0, -1.0, 0.0);
        let reflected = reflect(incident, Vec3::Y);
        assert!(close(reflected, Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_reflect_is_involution() {
        let incident = Vec3::new(0.3, -0.8, 0.2);
        let normal = Vec3::new(0.1, 0.9, -0.2).normalize();
        let twice = reflect(reflect(incident, normal), normal);
        assert!(close(twice, incident));
    }

    #[test]
    fn test_reflect_preserves_length() {
        let incident = Vec3::new(2.0, -3.0, 1.0);
        let normal = Vec3::new(0.0, 1.0, 0.0);
        let reflected = reflect(incident, normal);
        assert!((reflected.length() - incident.length()).abs() < 1e-9);
    }

    #[test]
    fn test_refract_matched_indices_is_straight() {
        let incident = Vec3::new(1.0, -1.0, 0.0);
        let out = refract(incident, Vec3::Y, 1.0, 1.0).unwrap();
        assert!(close(out, incident.normalize()));
    }

    #[test]
    fn test_refract_bends_towards_normal_entering_denser() {
        let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
        let out = refract(incident, Vec3::Y, 1.0, 1.5).unwrap();
        // sin(theta_t) = sin(45 deg) / 1.5
        let expected_sin = (0.5f64).sqrt() / 1.5;
        assert!((out.x - expected_sin).abs() < 1e-9);
        assert!(out.y < 0.0);
        assert!((out.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Glass to air at a grazing angle: past the critical angle
        // (~41.8 degrees for n = 1.5) there is no transmitted ray.
        let incident = Vec3::new(1.0, -1.0, 0.0);
        assert!(refract(incident, Vec3::Y, 1.5, 1.0).is_none());
    }

    #[test]
    fn test_refract_normal_incidence() {
        let out = refract(-Vec3::Y, Vec3::Y, 1.0, 1.5).unwrap();
        assert!(close(out, -Vec3::Y));
    }
}
