//! The closed set of geometric primitives.

use crate::{AxisAlignedBox, Hit, Plane, Sphere};
use glint_math::Ray;

/// A geometric primitive that rays can intersect.
///
/// The set of variants is closed so intersection dispatch stays an
/// exhaustive match; adding a primitive means adding a variant here and
/// an arm below.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Sphere(Sphere),
    AxisAlignedBox(AxisAlignedBox),
    Plane(Plane),
}

impl Shape {
    /// Closest forward intersection of `ray` with this shape.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::AxisAlignedBox(aabox) => aabox.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<AxisAlignedBox> for Shape {
    fn from(aabox: AxisAlignedBox) -> Self {
        Shape::AxisAlignedBox(aabox)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}
