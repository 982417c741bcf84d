//! Opal core - scene data model for the ray caster.
//!
//! This crate provides:
//!
//! - **Primitives**: [`Sphere`] and [`TriMesh`], unified under the closed
//!   [`Primitive`] enum with a single intersection contract
//! - **Lights**: [`DirectionalLight`]
//! - **Noise fields**: 2D/3D gradient noise with turbulence and marble
//!   mappings, used as solid texture modulators
//! - **OBJ support**: a minimal Wavefront loader feeding [`TriMesh`]
//!
//! # Example
//!
//! ```ignore
//! use opal_core::{Scene, Sphere, DirectionalLight};
//! use opal_math::Vec3;
//!
//! let mut scene = Scene::new();
//! scene.add_primitive(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Vec3::ONE));
//! scene.add_light(DirectionalLight::new(Vec3::new(1.0, -1.0, 0.3)));
//! ```

pub mod light;
pub mod mesh;
pub mod noise;
pub mod obj;
pub mod primitive;
pub mod scene;
pub mod sphere;
pub mod surface;

// Re-export commonly used types
pub use light::DirectionalLight;
pub use mesh::TriMesh;
pub use noise::{NoiseField, Perlin2, Perlin3};
pub use obj::{load_obj, parse_obj, ObjError};
pub use primitive::{Hit, Primitive};
pub use scene::Scene;
pub use sphere::Sphere;
pub use surface::Surface;
