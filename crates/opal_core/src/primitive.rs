//! Closed set of intersectable primitives.

use opal_math::{Ray, Vec3};

use crate::mesh::TriMesh;
use crate::sphere::Sphere;
use crate::surface::Surface;

/// Result of a ray-primitive intersection: the parametric distance along
/// the ray and the outward unit normal at the hit point.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub t: f32,
    pub normal: Vec3,
}

/// A renderable primitive.
///
/// The renderer only knows these two shape kinds, so intersection dispatch
/// is a closed match rather than an open trait object.
#[derive(Clone, Debug)]
pub enum Primitive {
    Sphere(Sphere),
    Mesh(TriMesh),
}

impl Primitive {
    /// Find the nearest forward intersection of `ray` with this primitive.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Mesh(mesh) => mesh.intersect(ray),
        }
    }

    /// Surface attributes used by the shading engine.
    pub fn surface(&self) -> &Surface {
        match self {
            Primitive::Sphere(sphere) => &sphere.surface,
            Primitive::Mesh(mesh) => &mesh.surface,
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<TriMesh> for Primitive {
    fn from(mesh: TriMesh) -> Self {
        Primitive::Mesh(mesh)
    }
}
