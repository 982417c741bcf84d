//! Light sources.

use opal_math::Vec3;

/// A directional light, defined by the direction it shines in.
///
/// Shading works with `toward`, the unit vector pointing from any surface
/// point back toward the light (the negated, normalized direction).
#[derive(Clone, Debug)]
pub struct DirectionalLight {
    /// Direction the light travels, as given
    pub direction: Vec3,
    /// Unit vector pointing toward the light
    pub toward: Vec3,
    /// Ambient intensity contribution
    pub ambient: f32,
    /// Local intensity driving the diffuse and specular terms
    pub local: f32,
    /// Light color, RGB
    pub color: Vec3,
}

impl DirectionalLight {
    /// Create a directional light with default intensities
    /// (ambient 0.4, local 0.6) and white color.
    pub fn new(direction: Vec3) -> Self {
        Self::with_intensities(direction, 0.4, 0.6)
    }

    /// Create a directional light with explicit intensities.
    pub fn with_intensities(direction: Vec3, ambient: f32, local: f32) -> Self {
        Self {
            direction,
            toward: (-direction).normalize(),
            ambient,
            local,
            color: Vec3::ONE,
        }
    }

    /// Override the light color.
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }
}
