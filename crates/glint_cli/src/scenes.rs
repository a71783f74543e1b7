//! Preset demo scenes.

use glint_math::{Point3, Vec3};
use glint_render::{
    AxisAlignedBox, CutoffSpotlight, DirectionalLight, Material, Plane, RenderError, Scene,
    SceneBuilder, Sphere, Surface,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Two boxes on a rubber floor, lit by a red spotlight and a white
/// directional light.
pub fn scene1() -> Result<Scene, RenderError> {
    Scene::builder()
        .name("scene1")
        .ambient(Vec3::new(0.1, 0.2, 0.3))
        .camera(
            Point3::new(0.0, 0.0, 4.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
            4.0,
        )
        .add_light(DirectionalLight::new(
            Vec3::new(0.0, 0.1, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ))
        .add_light(CutoffSpotlight::new(
            Point3::new(0.0, 0.0, 1.5),
            Vec3::new(-0.25, 0.0, -0.5),
            Vec3::new(0.5, 0.0, 0.0),
            15.0,
        ))
        .add_surface(Surface::new(
            Plane::new(0.0, 0.0, 1.0, 2.5),
            Arc::new(Material::white_rubber()),
        ))
        .add_surface(Surface::new(
            AxisAlignedBox::new(Point3::new(-1.5, -1.5, -2.5), Point3::new(-0.2, -0.2, -1.5)),
            Arc::new(Material::gold()),
        ))
        .add_surface(Surface::new(
            AxisAlignedBox::new(Point3::new(0.1, -1.0, -2.5), Point3::new(1.1, 0.0, -0.4)),
            Arc::new(Material::red_plastic()),
        ))
        .build()
}

/// A mirror corridor: five tinted reflecting planes lit by three
/// spotlights.
pub fn scene2() -> Result<Scene, RenderError> {
    let reflective_plane = |kd: Vec3, shininess: f64| {
        Arc::new(
            Material::new()
                .with_ka(Vec3::ONE)
                .with_kd(kd)
                .with_ks(Vec3::splat(0.7))
                .with_kr(Vec3::splat(0.3))
                .with_reflecting(true)
                .with_shininess(shininess),
        )
    };

    Scene::builder()
        .name("scene2")
        .ambient(Vec3::new(0.2, 0.1, 0.0))
        .camera(
            Point3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
            1.0,
        )
        .render_reflections(true)
        .max_recursion_level(2)
        .add_light(CutoffSpotlight::new(
            Point3::ZERO,
            Vec3::new(0.0, 0.5, -1.0),
            Vec3::new(0.3, 0.9, 0.2),
            36.0,
        ))
        .add_light(CutoffSpotlight::new(
            Point3::ZERO,
            Vec3::new(0.5, 0.0, -1.0),
            Vec3::new(0.9, 0.5, 0.5),
            25.0,
        ))
        .add_light(CutoffSpotlight::new(
            Point3::new(-0.2, 0.0, 0.0),
            Vec3::new(-0.4, -0.3, -1.0),
            Vec3::new(0.3, 0.5, 0.9),
            45.0,
        ))
        .add_surface(Surface::new(
            Plane::new(1.0, 0.0, -0.1, -3.0),
            reflective_plane(Vec3::new(0.6, 0.0, 0.8), 20.0),
        ))
        .add_surface(Surface::new(
            Plane::new(0.0, 0.0, -1.0, -3.5),
            reflective_plane(Vec3::new(0.7, 0.7, 0.0), 10.0),
        ))
        .add_surface(Surface::new(
            Plane::new(-1.0, 0.0, -0.1, -3.0),
            reflective_plane(Vec3::new(0.0, 0.9, 0.5), 15.0),
        ))
        .add_surface(Surface::new(
            Plane::new(0.0, 1.0, -0.1, -3.0),
            reflective_plane(Vec3::new(0.0, 0.4, 0.4), 10.0),
        ))
        .add_surface(Surface::new(
            Plane::new(0.0, -1.0, -0.1, -3.0),
            reflective_plane(Vec3::new(0.9, 0.0, 0.1), 15.0),
        ))
        .build()
}

/// Shared base for scenes 3-5: a pyramid of boxes on a ground plane under
/// one directional light and three spotlights.
fn pyramid_builder() -> SceneBuilder {
    let mut builder = Scene::builder()
        .ambient(Vec3::ONE)
        .camera(
            Point3::new(12.0, -12.0, 8.0),
            Vec3::new(-0.5, 1.0, -0.5),
            Vec3::new(0.0, 0.0, 1.0),
            5.0,
        )
        .add_light(DirectionalLight::new(
            Vec3::new(0.0, 0.5, -1.0),
            Vec3::splat(0.4),
        ))
        .add_light(CutoffSpotlight::new(
            Point3::new(-2.0, 10.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(0.8),
            45.0,
        ))
        .add_light(CutoffSpotlight::new(
            Point3::new(2.0, 10.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(0.8),
            45.0,
        ))
        .add_light(CutoffSpotlight::new(
            Point3::new(0.0, 5.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(0.8),
            45.0,
        ))
        .add_surface(Surface::new(
            Plane::new(0.0, 0.0, 1.0, 0.0),
            Arc::new(Material::white_plastic()),
        ));

    // Triangle-shaped stack of boxes, widening row by row.
    let mut rng = StdRng::seed_from_u64(17);
    const NUM_ROWS: i32 = 5;
    const LENGTH: f64 = 2.0;
    const SPACING: f64 = 0.25;
    for i in 0..NUM_ROWS {
        let per_row = 2 * i + 1;
        let dx = per_row as f64 * (LENGTH + SPACING) - SPACING;
        for j in 0..per_row {
            let a = Point3::new(
                j as f64 * (LENGTH + SPACING) - dx / 2.0,
                i as f64 * (LENGTH + SPACING),
                0.0,
            );
            let b = Point3::new(
                j as f64 * (LENGTH + SPACING) + LENGTH - dx / 2.0,
                i as f64 * (LENGTH + SPACING) + LENGTH,
                LENGTH,
            );
            builder = builder.add_surface(Surface::new(
                AxisAlignedBox::new(a, b),
                Arc::new(Material::random(&mut rng)),
            ));
        }
    }
    builder
}

/// The box pyramid with local shading only.
pub fn scene3() -> Result<Scene, RenderError> {
    pyramid_builder().name("scene3").build()
}

/// The box pyramid with reflections.
pub fn scene4() -> Result<Scene, RenderError> {
    pyramid_builder()
        .name("scene4")
        .render_reflections(true)
        .max_recursion_level(4)
        .build()
}

/// The box pyramid with reflections and refractions at deep recursion.
pub fn scene5() -> Result<Scene, RenderError> {
    pyramid_builder()
        .name("scene5")
        .render_reflections(true)
        .render_refractions(true)
        .max_recursion_level(8)
        .build()
}

/// Glass and mirror spheres over a reflective floor, anti-aliased.
pub fn scene6() -> Result<Scene, RenderError> {
    let mut rng = StdRng::seed_from_u64(23);
    let mut builder = Scene::builder()
        .name("scene6")
        .ambient(Vec3::ONE)
        .camera(
            Point3::new(11.0, -12.0, 8.0),
            Vec3::new(-0.5, 1.0, -0.5),
            Vec3::new(0.0, 0.0, 1.0),
            5.0,
        )
        .render_reflections(true)
        .render_refractions(true)
        .max_recursion_level(8)
        .anti_aliasing_factor(4)
        .aa_seed(23)
        .add_light(DirectionalLight::new(
            Vec3::new(0.0, 0.5, -1.0),
            Vec3::splat(0.4),
        ))
        .add_light(CutoffSpotlight::new(
            Point3::new(0.0, 5.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(0.8),
            45.0,
        ))
        .add_surface(Surface::new(
            Plane::new(0.0, 0.0, 1.0, 0.0),
            Arc::new(Material::mirror()),
        ))
        .add_surface(Surface::new(
            Sphere::new(Point3::new(0.0, 4.0, 2.0), 2.0),
            Arc::new(Material::glass()),
        ))
        .add_surface(Surface::new(
            Sphere::new(Point3::new(-4.0, 8.0, 1.5), 1.5),
            Arc::new(Material::gold()),
        ));

    for i in 0..5 {
        builder = builder.add_surface(Surface::new(
            Sphere::new(Point3::new(-4.0 + 2.0 * i as f64, 12.0, 1.0), 1.0),
            Arc::new(Material::random(&mut rng)),
        ));
    }
    builder.build()
}

/// Look up a preset scene by number.
pub fn by_number(n: u32) -> Option<Result<Scene, RenderError>> {
    match n {
        1 => Some(scene1()),
        2 => Some(scene2()),
        3 => Some(scene3()),
        4 => Some(scene4()),
        5 => Some(scene5()),
        6 => Some(scene6()),
        _ => None,
    }
}
