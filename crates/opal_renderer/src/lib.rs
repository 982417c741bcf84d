//! Opal renderer - CPU ray casting.
//!
//! A direct-illumination ray caster: one primary ray per pixel, hard
//! shadows, ambient/diffuse/specular shading, and optional solid-noise
//! texture modulation. Rows render in parallel across the rayon pool.

mod camera;
mod renderer;
mod shading;

pub use camera::Camera;
pub use renderer::{
    render, render_to_file, write_png, FrameBuffer, RenderError, RenderResult,
};
pub use shading::{shade, SHADOW_EPSILON};

/// Re-export the scene model and math types
pub use opal_core::{
    load_obj, DirectionalLight, Hit, NoiseField, Primitive, Scene, Sphere, Surface, TriMesh,
};
pub use opal_math::{Ray, Vec3};
