//! Pinhole camera and pixel-to-ray mapping.

use opal_math::{Ray, Vec3};

/// A pinhole camera: a focal point looking through a rectangular image
/// plane one focal length away along `forward`.
///
/// The basis vectors are expected to be orthonormal; the defaults look
/// down +Z with a 2x2 world-unit plane.
#[derive(Clone, Debug)]
pub struct Camera {
    /// Eye position
    pub focal_point: Vec3,
    /// Distance from the focal point to the image plane
    pub focal_length: f32,
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
    /// Image plane width in world units
    pub plane_width: f32,
    /// Image plane height in world units
    pub plane_height: f32,
}

impl Camera {
    /// Create a camera with default settings.
    pub fn new() -> Self {
        Self {
            focal_point: Vec3::ZERO,
            focal_length: 1.0,
            right: Vec3::X,
            up: Vec3::Y,
            forward: Vec3::Z,
            plane_width: 2.0,
            plane_height: 2.0,
        }
    }

    /// Set the focal point and length.
    pub fn with_focus(mut self, focal_point: Vec3, focal_length: f32) -> Self {
        self.focal_point = focal_point;
        self.focal_length = focal_length;
        self
    }

    /// Set the orthonormal camera basis.
    pub fn with_basis(mut self, right: Vec3, up: Vec3, forward: Vec3) -> Self {
        self.right = right;
        self.up = up;
        self.forward = forward;
        self
    }

    /// Set the image plane size in world units.
    pub fn with_plane(mut self, width: f32, height: f32) -> Self {
        self.plane_width = width;
        self.plane_height = height;
        self
    }

    /// Build the primary ray for pixel (i, j) of a width x height canvas.
    ///
    /// Returns the world-space point on the image plane along with the
    /// ray through it; the shading engine needs both.
    pub fn primary_ray(&self, i: u32, j: u32, width: u32, height: u32) -> (Vec3, Ray) {
        // Pixel centre mapped to the image plane, top-left origin.
        let r = self.plane_width * ((i as f32 + 0.5) / width as f32 - 0.5);
        let b = self.plane_height * ((j as f32 + 0.5) / height as f32 - 0.5);

        let world_coords =
            self.focal_point + self.focal_length * self.forward + r * self.right - b * self.up;
        let direction = (world_coords - self.focal_point).normalize();

        (world_coords, Ray::new(self.focal_point, direction))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
