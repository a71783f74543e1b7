//! glint - Whitted-style recursive ray tracing on the CPU.
//!
//! Renders scenes of spheres, axis-aligned boxes and planes under
//! directional and cutoff-spotlight illumination, with Phong local
//! shading, shadows, reflection, refraction and multi-sampled
//! anti-aliasing. Pixels are evaluated in parallel over image tiles.

mod aabox;
mod bucket;
mod camera;
mod error;
mod hit;
mod light;
mod material;
mod plane;
mod raster;
mod scene;
mod shape;
mod sphere;
mod surface;

pub use aabox::AxisAlignedBox;
pub use bucket::{generate_buckets, Bucket, DEFAULT_BUCKET_SIZE};
pub use camera::PinholeCamera;
pub use error::RenderError;
pub use hit::{Hit, SurfaceHit};
pub use light::{CutoffSpotlight, DirectionalLight, Light};
pub use material::Material;
pub use plane::Plane;
pub use raster::Raster;
pub use scene::{Scene, SceneBuilder};
pub use shape::Shape;
pub use sphere::Sphere;
pub use surface::Surface;

/// Re-export the math types the public API is expressed in.
pub use glint_math::{Interval, Point3, Ray, Vec3, EPSILON};
