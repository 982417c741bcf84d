//! Scene container.

use crate::light::DirectionalLight;
use crate::primitive::Primitive;

/// A complete scene: primitives to intersect and lights to shade with.
///
/// Built once before rendering and read-only from then on. Primitive order
/// matters only for ties between coincident hits; light order only affects
/// summation order.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub lights: Vec<DirectionalLight>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the scene.
    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: DirectionalLight) {
        self.lights.push(light);
    }

    /// Get the number of primitives.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Total triangle count across all mesh primitives.
    pub fn triangle_count(&self) -> usize {
        self.primitives
            .iter()
            .map(|p| match p {
                Primitive::Mesh(mesh) => mesh.triangle_count(),
                Primitive::Sphere(_) => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;
    use opal_math::Vec3;

    #[test]
    fn test_scene_building() {
        let mut scene = Scene::new();
        assert_eq!(scene.primitive_count(), 0);

        scene.add_primitive(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Vec3::ONE));
        scene.add_light(DirectionalLight::new(Vec3::new(1.0, -1.0, 0.3)));

        assert_eq!(scene.primitive_count(), 1);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.triangle_count(), 0);
    }
}
