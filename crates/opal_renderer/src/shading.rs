//! Direct illumination with hard shadows.

use opal_core::{Scene, Surface};
use opal_math::{Ray, Vec3};

use crate::camera::Camera;

/// Minimum shadow-ray distance; hits closer than this are the shaded
/// point occluding itself.
pub const SHADOW_EPSILON: f32 = 1e-4;

/// Compute per-channel shading intensity at a hit point.
///
/// For every light the ambient term is always added. When the surface
/// faces the light, a shadow ray from the hit point toward the light is
/// tested against every primitive in the scene; the first occluder past
/// [`SHADOW_EPSILON`] suppresses the diffuse and specular terms for that
/// light.
///
/// The specular viewer vector is `splat(focal_length) + t * world_coords`,
/// normalized. That is not the true view direction, but it is the exact
/// term the output images are calibrated against, so it stays.
#[allow(clippy::too_many_arguments)]
pub fn shade(
    camera: &Camera,
    scene: &Scene,
    surface: &Surface,
    normal: Vec3,
    world_coords: Vec3,
    t: f32,
    direction: Vec3,
) -> Vec3 {
    let mut intensity = Vec3::ZERO;

    for light in &scene.lights {
        let ambient = light.ambient * surface.ambient;
        let mut diffuse = Vec3::ZERO;
        let mut specular = Vec3::ZERO;

        let n_dot_l = normal.dot(light.toward);
        if n_dot_l > 0.0 {
            let intersection_point = camera.focal_point + t * direction;
            let shadow_ray = Ray::new(intersection_point, light.toward);

            let in_shadow = scene
                .primitives
                .iter()
                .filter_map(|p| p.intersect(&shadow_ray))
                .any(|hit| hit.t > SHADOW_EPSILON);

            if !in_shadow {
                diffuse = light.color * light.local * surface.diffuse * n_dot_l;

                let reflected = light.toward - 2.0 * normal * light.toward.dot(normal);
                let r = reflected.normalize();
                let viewer = Vec3::splat(camera.focal_length) + t * world_coords;
                let v = viewer.normalize();
                // Integer exponent: an even shininess keeps negative
                // alignments positive instead of going NaN through powf.
                specular = light.local * surface.specular * r.dot(v).powi(surface.shininess);
            }
        }

        intensity += Vec3::splat(ambient) + diffuse + specular;
    }

    intensity
}
