//! Axis-aligned box primitive.

use crate::Hit;
use glint_math::{Point3, Ray, Vec3, EPSILON};

/// An axis-aligned box spanned by two corners `a` and `b` with
/// `a <= b` componentwise.
#[derive(Debug, Clone, Copy)]
pub struct AxisAlignedBox {
    a: Point3,
    b: Point3,
}

impl AxisAlignedBox {
    /// Create a new box from its minimum corner `a` and maximum corner `b`.
    pub fn new(a: Point3, b: Point3) -> Self {
        debug_assert!(a.x <= b.x && a.y <= b.y && a.z <= b.z);
        Self { a, b }
    }

    /// Closest forward intersection of `ray` with the box, by the slab
    /// method.
    ///
    /// Each axis contributes an entry/exit interval; their intersection is
    /// the span the ray spends inside the box. A ray parallel to a slab
    /// whose origin lies outside that slab's extent misses outright. The
    /// axis that produced the entry (or, from inside, the exit) determines
    /// the face normal.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let origin = ray.origin.to_array();
        let direction = ray.direction.to_array();
        let lo = self.a.to_array();
        let hi = self.b.to_array();

        let mut t_enter = f64::NEG_INFINITY;
        let mut t_exit = f64::INFINITY;
        let mut enter_axis = 0;
        let mut exit_axis = 0;

        for axis in 0..3 {
            if direction[axis].abs() <= EPSILON {
                if origin[axis] < lo[axis] || origin[axis] > hi[axis] {
                    return None;
                }
                // Parallel and inside the slab: no constraint from this axis.
                continue;
            }

            let t0 = (lo[axis] - origin[axis]) / direction[axis];
            let t1 = (hi[axis] - origin[axis]) / direction[axis];
            let (t_min, t_max) = if t0 < t1 { (t0, t1) } else { (t1, t0) };

            if t_min > t_enter {
                t_enter = t_min;
                enter_axis = axis;
            }
            if t_max < t_exit {
                t_exit = t_max;
                exit_axis = axis;
            }
        }

        if t_enter > t_exit || t_exit <= EPSILON {
            return None;
        }

        if t_enter > EPSILON {
            let normal = Self::face_normal(enter_axis, direction[enter_axis]);
            Some(Hit::new(t_enter, normal))
        } else {
            // Ray origin inside the box: the exit point is the hit and the
            // normal faces back towards the origin.
            let normal = Self::face_normal(exit_axis, direction[exit_axis]);
            Some(Hit::new(t_exit, normal).within())
        }
    }

    /// Unit normal of the face crossed on `axis`, oriented against the
    /// direction of travel.
    fn face_normal(axis: usize, direction_component: f64) -> Vec3 {
        if direction_component > 0.0 {
            -Vec3::AXES[axis]
        } else {
            Vec3::AXES[axis]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> AxisAlignedBox {
        AxisAlignedBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_box_hit_face_on() {
        let ray = Ray::new(Point3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));

        let hit = unit_box().intersect(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-9);
        assert_eq!(hit.normal, Vec3::X);
        assert!(!hit.within);
    }

    #[test]
    fn test_box_miss_aimed_away() {
        let ray = Ray::new(Point3::new(5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(unit_box().intersect(&ray).is_none());
    }

    #[test]
    fn test_box_miss_parallel_outside_slab() {
        // Direction has no Y component and the origin is above the box.
        let ray = Ray::new(Point3::new(5.0, 2.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        assert!(unit_box().intersect(&ray).is_none());
    }

    #[test]
    fn test_box_hit_parallel_inside_slab() {
        let ray = Ray::new(Point3::new(5.0, 0.5, 0.5), Vec3::new(-1.0, 0.0, 0.0));

        let hit = unit_box().intersect(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-9);
        assert_eq!(hit.normal, Vec3::X);
    }

    #[test]
    fn test_box_hit_from_inside() {
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = unit_box().intersect(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-9);
        assert!(hit.within);
        // Normal faces back towards the ray origin.
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_box_diagonal_hit_picks_entry_face() {
        let ray = Ray::new(
            Point3::new(3.0, 0.2, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
        );
        let hit = unit_box().intersect(&ray).unwrap();
        assert_eq!(hit.normal, Vec3::X);
        let point = ray.at(hit.t);
        assert!((point.x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_box_corner_graze_rejected_behind() {
        // Box entirely behind the ray.
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(unit_box().intersect(&ray).is_none());
    }
}
