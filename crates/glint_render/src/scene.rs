//! Scene graph, render loop and the recursive color evaluator.

use crate::bucket::{generate_buckets, Bucket, DEFAULT_BUCKET_SIZE};
use crate::{Light, PinholeCamera, Raster, RenderError, Surface, SurfaceHit};
use glint_math::{ops, Point3, Ray, Vec3, EPSILON};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// A renderable world: camera, surfaces, lights and global parameters.
///
/// Built once through [`SceneBuilder`], then immutable; a built scene can
/// be rendered any number of times and is safely shared across the render
/// worker threads.
pub struct Scene {
    name: String,
    camera: PinholeCamera,
    ambient: Vec3,
    background: Vec3,
    surfaces: Vec<Surface>,
    lights: Vec<Light>,
    max_recursion_level: u32,
    anti_aliasing_factor: u32,
    render_reflections: bool,
    render_refractions: bool,
    aa_seed: Option<u64>,
}

/// Configuration collected before a [`Scene`] exists.
///
/// Validation happens once in [`SceneBuilder::build`]: a camera must have
/// been set, the camera basis must be well-formed and the anti-aliasing
/// factor must be at least 1.
pub struct SceneBuilder {
    name: String,
    camera: Option<(Point3, Vec3, Vec3, f64)>,
    ambient: Vec3,
    background: Vec3,
    surfaces: Vec<Surface>,
    lights: Vec<Light>,
    max_recursion_level: u32,
    anti_aliasing_factor: u32,
    render_reflections: bool,
    render_refractions: bool,
    aa_seed: Option<u64>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self {
            name: "scene".to_string(),
            camera: None,
            ambient: Vec3::splat(0.1),
            background: Vec3::new(0.0, 0.5, 1.0),
            surfaces: Vec::new(),
            lights: Vec::new(),
            max_recursion_level: 1,
            anti_aliasing_factor: 1,
            render_reflections: false,
            render_refractions: false,
            aa_seed: None,
        }
    }
}

impl SceneBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the camera: eye position, viewing direction, up vector and the
    /// distance from the eye to the image plane.
    pub fn camera(mut self, eye: Point3, towards: Vec3, up: Vec3, distance_to_plane: f64) -> Self {
        self.camera = Some((eye, towards, up, distance_to_plane));
        self
    }

    pub fn ambient(mut self, ambient: Vec3) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn background(mut self, background: Vec3) -> Self {
        self.background = background;
        self
    }

    pub fn add_surface(mut self, surface: Surface) -> Self {
        self.surfaces.push(surface);
        self
    }

    pub fn add_light(mut self, light: impl Into<Light>) -> Self {
        self.lights.push(light.into());
        self
    }

    pub fn max_recursion_level(mut self, level: u32) -> Self {
        self.max_recursion_level = level;
        self
    }

    pub fn anti_aliasing_factor(mut self, factor: u32) -> Self {
        self.anti_aliasing_factor = factor;
        self
    }

    pub fn render_reflections(mut self, enabled: bool) -> Self {
        self.render_reflections = enabled;
        self
    }

    pub fn render_refractions(mut self, enabled: bool) -> Self {
        self.render_refractions = enabled;
        self
    }

    /// Fix the anti-aliasing jitter seed, making multi-sampled renders
    /// reproducible. Unseeded scenes draw a fresh seed per render.
    pub fn aa_seed(mut self, seed: u64) -> Self {
        self.aa_seed = Some(seed);
        self
    }

    /// Validate the configuration and produce an immutable [`Scene`].
    pub fn build(self) -> Result<Scene, RenderError> {
        let (eye, towards, up, distance) = self
            .camera
            .ok_or_else(|| RenderError::MissingCamera(self.name.clone()))?;
        let camera = PinholeCamera::new(eye, towards, up, distance)?;

        if self.anti_aliasing_factor < 1 {
            return Err(RenderError::InvalidAntiAliasingFactor(
                self.anti_aliasing_factor,
            ));
        }

        Ok(Scene {
            name: self.name,
            camera,
            ambient: self.ambient,
            background: self.background,
            surfaces: self.surfaces,
            lights: self.lights,
            max_recursion_level: self.max_recursion_level,
            anti_aliasing_factor: self.anti_aliasing_factor,
            render_reflections: self.render_reflections,
            render_refractions: self.render_refractions,
            aa_seed: self.aa_seed,
        })
    }
}

impl Scene {
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the scene to a raster of the given resolution.
    ///
    /// `plane_width` is the physical width of the camera's image plane.
    /// The image is split into tiles rendered in parallel on a dedicated
    /// pool (at least two workers); a render either completes fully or
    /// fails as a whole.
    pub fn render(&self, width: u32, height: u32, plane_width: f64) -> Result<Raster, RenderError> {
        // Resolution-dependent camera fields are derived once, before any
        // pixel task is submitted.
        let camera = self.camera.at_resolution(width, height, plane_width);

        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .max(2);
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;

        info!(
            "rendering `{}` at {}x{} on {} threads, {} rays",
            self.name,
            width,
            height,
            threads,
            width as u64 * height as u64 * self.anti_aliasing_factor as u64
        );

        let seed = self.aa_seed.unwrap_or_else(rand::random);
        let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);

        let results: Vec<(Bucket, Vec<Vec3>)> = pool.install(|| {
            buckets
                .par_iter()
                .map(|bucket| {
                    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(bucket.index as u64));
                    (*bucket, self.render_bucket(&camera, bucket, &mut rng))
                })
                .collect()
        });

        let mut raster = Raster::new(width, height);
        for (bucket, pixels) in results {
            let mut i = 0;
            for local_y in 0..bucket.height {
                for local_x in 0..bucket.width {
                    raster.set(bucket.x + local_x, bucket.y + local_y, pixels[i]);
                    i += 1;
                }
            }
        }

        info!("ray tracing of `{}` completed", self.name);
        Ok(raster)
    }

    /// Render one bucket to a row-major pixel vector.
    fn render_bucket(&self, camera: &PinholeCamera, bucket: &Bucket, rng: &mut StdRng) -> Vec<Vec3> {
        let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                pixels.push(self.render_pixel(camera, bucket.x + local_x, bucket.y + local_y, rng));
            }
        }
        pixels
    }

    /// Evaluate one pixel: the primary ray through the pixel center plus,
    /// for anti-aliasing factors above 1, jittered sub-pixel rays, box
    /// filtered by arithmetic average.
    fn render_pixel(&self, camera: &PinholeCamera, x: u32, y: u32, rng: &mut StdRng) -> Vec3 {
        let eye = camera.position();
        let mut color = self.trace(&Ray::towards(eye, camera.transform(x, y)), 0);

        if self.anti_aliasing_factor > 1 {
            for _ in 1..self.anti_aliasing_factor {
                // Uniform jitter bounded by half a pixel in each direction.
                let dx = rng.gen::<f64>() - 0.5;
                let dy = rng.gen::<f64>() - 0.5;
                let sample = camera.transform_offset(x, y, dx, dy);
                color += self.trace(&Ray::towards(eye, sample), 0);
            }
            color /= self.anti_aliasing_factor as f64;
        }

        color
    }

    /// The recursive color evaluator.
    ///
    /// Terminal states: no intersection (background) and `depth` at the
    /// configured maximum (local shading only). Otherwise the local Phong
    /// shading is augmented by up to two child traces at `depth + 1`, one
    /// for reflection and one for refraction. Channel sums are unclamped.
    fn trace(&self, ray: &Ray, depth: u32) -> Vec3 {
        let Some(surface_hit) = self.closest_hit(ray) else {
            return self.background;
        };
        let point = ray.at(surface_hit.hit.t);
        let mut color = self.shade_local(ray, &surface_hit, point);

        if depth == self.max_recursion_level {
            return color;
        }

        let material = surface_hit.surface.material();
        let normal = surface_hit.hit.normal;

        if self.render_reflections && material.reflecting {
            let direction = ops::reflect(ray.direction.normalize(), normal).normalize();
            let reflected = self.trace(&Ray::new(point, direction), depth + 1);
            color += material.kr * reflected;
        }

        if self.render_refractions && material.transparent {
            // A hit from inside sees the flipped normal and swapped indices.
            let facing_normal = if surface_hit.hit.within { -normal } else { normal };
            let n1 = material.n1(&surface_hit.hit);
            let n2 = material.n2(&surface_hit.hit);
            // Total internal reflection contributes nothing.
            if let Some(direction) =
                ops::refract(ray.direction.normalize(), facing_normal, n1, n2)
            {
                let refracted = self.trace(&Ray::new(point, direction.normalize()), depth + 1);
                color += material.kt * refracted;
            }
        }

        color
    }

    /// Linear scan over the surface list; the smallest positive t wins.
    fn closest_hit(&self, ray: &Ray) -> Option<SurfaceHit<'_>> {
        let mut closest: Option<SurfaceHit> = None;
        for surface in &self.surfaces {
            if let Some(hit) = surface.intersect(ray) {
                if closest.map_or(true, |c| hit.t < c.hit.t) {
                    closest = Some(SurfaceHit { hit, surface });
                }
            }
        }
        closest
    }

    /// Phong shading at the hit point: ambient plus, per unoccluded light,
    /// diffuse and specular terms scaled by the incident intensity.
    fn shade_local(&self, ray: &Ray, surface_hit: &SurfaceHit<'_>, point: Point3) -> Vec3 {
        let material = surface_hit.surface.material();
        let normal = surface_hit.hit.normal;
        let mut color = material.ka * self.ambient;

        for light in &self.lights {
            let ray_to_light = light.ray_to_light(point);
            if self.is_occluded_from_light(light, &ray_to_light) {
                continue;
            }
            let intensity = light.intensity(point, &ray_to_light);

            let diffuse = material.kd * normal.dot(ray_to_light.direction).max(0.0);

            let viewer = (-ray.direction).normalize();
            let reflected_light = ops::reflect(-ray_to_light.direction, normal);
            let cos_alpha = viewer.dot(reflected_light);
            let specular = if cos_alpha < EPSILON {
                Vec3::ZERO
            } else {
                material.ks * cos_alpha.powf(material.shininess)
            };

            color += (diffuse + specular) * intensity;
        }

        color
    }

    fn is_occluded_from_light(&self, light: &Light, ray_to_light: &Ray) -> bool {
        self.surfaces
            .iter()
            .any(|surface| light.is_occluded_by(surface, ray_to_light))
    }
}
