//! Analytic sphere primitive.

use opal_math::{Ray, Vec3};

use crate::primitive::Hit;
use crate::surface::Surface;

/// A sphere defined by centre and radius.
#[derive(Clone, Debug)]
pub struct Sphere {
    pub centre: Vec3,
    pub radius: f32,
    pub surface: Surface,
}

impl Sphere {
    /// Create a sphere with the default material parameters
    /// (diffuse proportion 0.8, ambient reflectivity 1, shininess 40).
    pub fn new(centre: Vec3, radius: f32, color: Vec3) -> Self {
        Self {
            centre,
            radius,
            surface: Surface::new(color, 0.8, 1.0, 40),
        }
    }

    /// Create a sphere with explicit surface attributes.
    pub fn with_surface(centre: Vec3, radius: f32, surface: Surface) -> Self {
        Self {
            centre,
            radius,
            surface,
        }
    }

    /// Find the nearest forward intersection of `ray` with the sphere.
    ///
    /// Solves t^2 + b*t + c = 0 (a = 1 for a unit-length direction). When
    /// both roots are positive the nearer one is the hit; when exactly one
    /// is positive the ray starts inside the sphere and exits through it.
    /// A sphere entirely behind the origin reports no hit.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let l = ray.origin() - self.centre;
        let b = 2.0 * ray.direction().dot(l);
        let c = l.dot(l) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b + sqrtd) / 2.0;
        let t2 = (-b - sqrtd) / 2.0;

        let t = if t1 > 0.0 && t2 > 0.0 {
            t1.min(t2)
        } else {
            t1.max(t2)
        };
        if t <= 0.0 {
            return None;
        }

        let normal = (ray.at(t) - self.centre).normalize();
        Some(Hit { t, normal })
    }
}
