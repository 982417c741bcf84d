//! Triangle mesh primitive with a bounding-sphere prune.

use opal_math::{Ray, Vec3};

use crate::primitive::Hit;
use crate::surface::Surface;

/// A triangle mesh with precomputed per-face normals and an approximate
/// bounding sphere used as a cheap whole-mesh rejection test.
///
/// The bounding sphere is centred at the midpoint of the componentwise
/// min/max vertex, with radius reaching the min-vertex corner. That is not
/// a minimal enclosing sphere, but it always contains every vertex, which
/// is all the prune requires.
#[derive(Clone, Debug)]
pub struct TriMesh {
    /// Vertex positions (0-indexed)
    pub vertices: Vec<Vec3>,
    /// Triangle indices into `vertices`
    pub faces: Vec<[u32; 3]>,
    /// Unit face normals, one per face, computed at construction
    normals: Vec<Vec3>,
    bounding_centre: Vec3,
    bounding_radius: f32,
    pub surface: Surface,
}

impl TriMesh {
    /// Create a mesh with the default material parameters
    /// (diffuse proportion 0.7, ambient reflectivity 1, shininess 40).
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[u32; 3]>, color: Vec3) -> Self {
        Self::with_surface(vertices, faces, Surface::new(color, 0.7, 1.0, 40))
    }

    /// Create a mesh with explicit surface attributes.
    pub fn with_surface(vertices: Vec<Vec3>, faces: Vec<[u32; 3]>, surface: Surface) -> Self {
        let normals = faces
            .iter()
            .map(|face| {
                let edge_a = vertices[face[0] as usize] - vertices[face[1] as usize];
                let edge_b = vertices[face[2] as usize] - vertices[face[1] as usize];
                edge_b.cross(edge_a).normalize()
            })
            .collect();

        let mut v_min = Vec3::splat(f32::INFINITY);
        let mut v_max = Vec3::splat(f32::NEG_INFINITY);
        for v in &vertices {
            v_min = v_min.min(*v);
            v_max = v_max.max(*v);
        }
        let bounding_centre = (v_max + v_min) / 2.0;
        let bounding_radius = (bounding_centre - v_min).length();

        Self {
            vertices,
            faces,
            normals,
            bounding_centre,
            bounding_radius,
            surface,
        }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Bounding sphere centre and radius, mainly useful for diagnostics.
    pub fn bounding_sphere(&self) -> (Vec3, f32) {
        (self.bounding_centre, self.bounding_radius)
    }

    /// Find an intersection of `ray` with the mesh.
    ///
    /// The bounding sphere rejects most rays before any per-face work.
    /// Faces are then scanned in storage order and the first face whose
    /// plane intersection lies inside the triangle wins, which for meshes
    /// with several faces along one ray is not necessarily the nearest.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        // Bounding sphere prune, reusing the sphere quadratic's discriminant.
        let l = ray.origin() - self.bounding_centre;
        let b = 2.0 * ray.direction().dot(l);
        let c = l.dot(l) - self.bounding_radius * self.bounding_radius;
        if b * b - 4.0 * c < 0.0 {
            return None;
        }

        for (face, normal) in self.faces.iter().zip(&self.normals) {
            let vertex_1 = self.vertices[face[0] as usize];
            let vertex_2 = self.vertices[face[1] as usize];
            let vertex_3 = self.vertices[face[2] as usize];

            // Ray parallel to the face plane
            let n_dot_d = normal.dot(ray.direction());
            if n_dot_d == 0.0 {
                continue;
            }
            // Ray origin lying exactly in the face plane
            let n_dot_l = (vertex_1 - ray.origin()).dot(*normal);
            if n_dot_l == 0.0 {
                continue;
            }

            let t = n_dot_l / n_dot_d;
            if t < 0.0 {
                continue;
            }
            let point = ray.at(t);

            // Edge vectors around the triangle
            let e1 = vertex_2 - vertex_1;
            let e2 = vertex_3 - vertex_2;
            let e3 = vertex_1 - vertex_3;

            let c1 = (point - vertex_1).cross(e1);
            let c2 = (point - vertex_2).cross(e2);
            let c3 = (point - vertex_3).cross(e3);

            // Inside when consecutive edge cross products agree in direction
            if c1.dot(c2) > 0.0 && c2.dot(c3) > 0.0 {
                return Some(Hit { t, normal: *normal });
            }
        }

        None
    }
}
