//! Marble spheres under a single directional light.
//!
//! Assembles a column of noise-textured spheres above a plain floor mesh
//! and renders it to `marble.png`. Pass an OBJ path as the first argument
//! to drop an extra model into the scene.

use std::sync::Arc;

use anyhow::Context;
use opal_renderer::{
    load_obj, render_to_file, Camera, DirectionalLight, NoiseField, Scene, Sphere, Surface,
    TriMesh, Vec3,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut scene = Scene::new();

    // Three marble spheres in a column, each with its own noise field.
    for (centre, radius, grey, seed) in [
        (Vec3::new(-4.0, -2.5, 7.0), 0.5, Vec3::new(0.8, 0.8, 0.75), 6),
        (Vec3::new(-4.0, -1.0, 7.0), 1.0, Vec3::new(0.85, 0.85, 0.85), 10),
        (Vec3::new(-4.0, 0.5, 7.0), 0.5, Vec3::new(0.7, 0.73, 0.7), 8),
    ] {
        let surface = Surface::new(grey, 0.8, 1.0, 40)
            .with_noise(Arc::new(NoiseField::solid(Some(seed))));
        scene.add_primitive(Sphere::with_surface(centre, radius, surface));
    }

    scene.add_primitive(floor());

    if let Some(path) = std::env::args().nth(1) {
        let mesh = load_obj(&path, Vec3::new(0.7, 0.7, 0.65))
            .with_context(|| format!("loading {path}"))?;
        scene.add_primitive(mesh);
    }

    scene.add_light(DirectionalLight::with_intensities(
        Vec3::new(1.0, -1.0, 0.3),
        0.5,
        0.8,
    ));

    let camera = Camera::new();
    render_to_file(&camera, 800, 800, &scene, "marble.png").context("rendering scene")?;

    Ok(())
}

/// A plain floor below the spheres, two triangles.
fn floor() -> TriMesh {
    TriMesh::new(
        vec![
            Vec3::new(-12.0, -3.0, 1.0),
            Vec3::new(12.0, -3.0, 1.0),
            Vec3::new(12.0, -3.0, 25.0),
            Vec3::new(-12.0, -3.0, 25.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
        Vec3::new(0.8, 0.8, 0.8),
    )
}
