//! Surface attributes shared by all primitive kinds.

use std::sync::Arc;

use opal_math::Vec3;

use crate::noise::NoiseField;

/// Base color used when a primitive is built without an explicit color.
pub const DEFAULT_COLOR: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Shading attributes of a primitive's surface.
///
/// The diffuse and specular terms are derived from the base color and a
/// single diffuse proportion: `diffuse = color * proportion` and
/// `specular = splat(1 - proportion)`. The specular exponent is kept as an
/// integer so that it behaves like integer exponentiation during shading
/// (an even exponent of a negative base stays positive).
#[derive(Clone, Debug)]
pub struct Surface {
    /// Base color, RGB in [0, 1]
    pub color: Vec3,
    /// Ambient reflectivity
    pub ambient: f32,
    /// Per-channel diffuse color (base color scaled by the diffuse proportion)
    pub diffuse: Vec3,
    /// Per-channel specular intensity
    pub specular: Vec3,
    /// Specular exponent (shininess)
    pub shininess: i32,
    /// Optional solid-noise modulator applied at shading time
    pub noise: Option<Arc<NoiseField>>,
}

impl Surface {
    /// Create a surface from a base color and a diffuse proportion.
    pub fn new(color: Vec3, diffuse_proportion: f32, ambient: f32, shininess: i32) -> Self {
        Self {
            color,
            ambient,
            diffuse: color * diffuse_proportion,
            specular: Vec3::splat(1.0 - diffuse_proportion),
            shininess,
            noise: None,
        }
    }

    /// Attach a noise field modulator.
    pub fn with_noise(mut self, noise: Arc<NoiseField>) -> Self {
        self.noise = Some(noise);
        self
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR, 0.8, 1.0, 40)
    }
}
