//! Render-level errors.
//!
//! Only configuration problems and infrastructure failures surface as
//! errors. Numerical degeneracies (zero-length normals, parallel slabs,
//! total internal reflection) are ordinary geometric branching and are
//! handled locally as "no intersection" / "no contribution".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("scene `{0}` has no camera")]
    MissingCamera(String),

    #[error("anti-aliasing factor must be at least 1, got {0}")]
    InvalidAntiAliasingFactor(u32),

    #[error("camera towards/up vectors are degenerate (zero length or parallel)")]
    DegenerateCamera,

    #[error("camera distance to the image plane must be positive, got {0}")]
    InvalidPlaneDistance(f64),

    #[error("failed to build render thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write image")]
    ImageWrite(#[from] image::ImageError),
}
