//! Frame buffer and the row-parallel render loop.

use std::path::Path;
use std::time::Instant;

use opal_core::Scene;
use opal_math::Vec3;
use rayon::prelude::*;
use thiserror::Error;

use crate::camera::Camera;
use crate::shading::shade;

/// Errors that can occur while rendering or writing the output image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid render configuration: {0}")]
    Config(String),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render output: RGB floats in [0, 1], row-major, top-left origin.
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl FrameBuffer {
    /// Create a frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to 8-bit RGB bytes for encoding.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.push((color.x * 255.0) as u8);
            bytes.push((color.y * 255.0) as u8);
            bytes.push((color.z * 255.0) as u8);
        }
        bytes
    }
}

/// Noise modulation constants: octave count, frequency, and the sampling
/// offset applied to the world-space plane point.
const MARBLE_OCTAVES: u32 = 6;
const MARBLE_FREQUENCY: f32 = 4.0;
const MARBLE_OFFSET: f32 = 350.0;

/// Render one row of the image into `row`.
fn render_row(camera: &Camera, scene: &Scene, width: u32, height: u32, j: u32, row: &mut [Vec3]) {
    for (i, pixel) in row.iter_mut().enumerate() {
        let i = i as u32;
        let (world_coords, ray) = camera.primary_ray(i, j, width, height);

        // Nearest-hit linear scan; strict < keeps the first primitive in
        // scene order on exact ties.
        let mut t_smallest = f32::INFINITY;
        let mut nearest = None;
        for primitive in &scene.primitives {
            if let Some(hit) = primitive.intersect(&ray) {
                if hit.t < t_smallest {
                    t_smallest = hit.t;
                    nearest = Some((hit, primitive));
                }
            }
        }

        if let Some((hit, primitive)) = nearest {
            let surface = primitive.surface();
            let intensity = shade(
                camera,
                scene,
                surface,
                hit.normal,
                world_coords,
                hit.t,
                ray.direction(),
            );

            let noise_factor = match &surface.noise {
                Some(noise) => noise.marble(
                    MARBLE_OCTAVES,
                    MARBLE_FREQUENCY,
                    (world_coords * 3.0 + Vec3::splat(MARBLE_OFFSET)).abs(),
                ),
                None => 1.0,
            };

            *pixel = (intensity * surface.color * noise_factor).clamp(Vec3::ZERO, Vec3::ONE);
        }
        // Misses keep the buffer's black default.
    }

    log::debug!("rendered row {}/{}", j + 1, height);
}

/// Render the scene through `camera` onto a width x height canvas.
///
/// Rows are distributed across the rayon thread pool; every pixel depends
/// only on the immutable scene, so the output is identical to a
/// sequential render.
pub fn render(
    camera: &Camera,
    width: u32,
    height: u32,
    scene: &Scene,
) -> RenderResult<FrameBuffer> {
    if width == 0 || height == 0 {
        return Err(RenderError::Config(format!(
            "canvas must be non-empty, got {width}x{height}"
        )));
    }
    if scene.primitives.is_empty() {
        return Err(RenderError::Config("scene contains no primitives".into()));
    }
    if scene.lights.is_empty() {
        log::warn!("scene contains no lights; every hit will shade to black");
    }

    log::info!(
        "rendering {width}x{height}: {} primitives ({} triangles), {} lights",
        scene.primitive_count(),
        scene.triangle_count(),
        scene.light_count(),
    );
    let start = Instant::now();

    let mut buffer = FrameBuffer::new(width, height);
    buffer
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(j, row)| {
            render_row(camera, scene, width, height, j as u32, row);
        });

    log::info!("rendered in {:?}", start.elapsed());
    Ok(buffer)
}

/// Encode a frame buffer as an 8-bit RGB PNG.
pub fn write_png<P: AsRef<Path>>(buffer: &FrameBuffer, path: P) -> RenderResult<()> {
    let image = image::RgbImage::from_raw(buffer.width, buffer.height, buffer.to_rgb8())
        .ok_or_else(|| RenderError::Config("frame buffer size mismatch".into()))?;
    image.save(path.as_ref())?;

    log::info!("wrote {}", path.as_ref().display());
    Ok(())
}

/// Render the scene and write it straight to an image file.
pub fn render_to_file<P: AsRef<Path>>(
    camera: &Camera,
    width: u32,
    height: u32,
    scene: &Scene,
    path: P,
) -> RenderResult<()> {
    let buffer = render(camera, width, height, scene)?;
    write_png(&buffer, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opal_core::{DirectionalLight, Sphere, TriMesh};

    fn unit_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Vec3::new(0.8, 0.8, 0.8),
        ));
        scene.add_light(DirectionalLight::new(Vec3::new(0.0, 0.0, 1.0)));
        scene
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let scene = unit_sphere_scene();
        let camera = Camera::new();

        assert!(matches!(
            render(&camera, 0, 4, &scene),
            Err(RenderError::Config(_))
        ));
        assert!(matches!(
            render(&camera, 4, 0, &scene),
            Err(RenderError::Config(_))
        ));
    }

    #[test]
    fn test_empty_scene_rejected() {
        let camera = Camera::new();
        let scene = Scene::new();

        assert!(matches!(
            render(&camera, 4, 4, &scene),
            Err(RenderError::Config(_))
        ));
    }

    #[test]
    fn test_sphere_renders_centre_not_corners() {
        let scene = unit_sphere_scene();
        // Narrow the plane so the unit sphere at distance 5 covers the
        // middle of a 4x4 canvas but not its corners.
        let camera = Camera::new().with_plane(1.0, 1.0);

        let buffer = render(&camera, 4, 4, &scene).unwrap();

        for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            assert!(
                buffer.get(x, y).length() > 0.0,
                "centre pixel ({x},{y}) should be lit"
            );
        }
        for (x, y) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
            assert_eq!(
                buffer.get(x, y),
                Vec3::ZERO,
                "corner pixel ({x},{y}) should be black"
            );
        }
    }

    #[test]
    fn test_nearest_primitive_wins() {
        let mut scene = Scene::new();
        // Far sphere added first; the near one must still win the scan.
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 0.0, 10.0),
            1.0,
            Vec3::new(1.0, 0.0, 0.0),
        ));
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Vec3::new(0.0, 1.0, 0.0),
        ));
        scene.add_light(DirectionalLight::new(Vec3::new(0.0, 0.0, 1.0)));

        let camera = Camera::new().with_plane(0.5, 0.5);
        let buffer = render(&camera, 3, 3, &scene).unwrap();

        let centre = buffer.get(1, 1);
        assert_eq!(centre.x, 0.0, "occluded red sphere should not show");
        assert!(centre.y > 0.0, "near green sphere should show");
    }

    #[test]
    fn test_mesh_and_sphere_mix() {
        let mut scene = unit_sphere_scene();
        // A large triangle behind the sphere, filling the view.
        scene.add_primitive(TriMesh::new(
            vec![
                Vec3::new(-20.0, -20.0, 9.0),
                Vec3::new(20.0, -20.0, 9.0),
                Vec3::new(0.0, 30.0, 9.0),
            ],
            vec![[0, 1, 2]],
            Vec3::new(0.2, 0.2, 1.0),
        ));

        let camera = Camera::new().with_plane(1.0, 1.0);
        let buffer = render(&camera, 5, 5, &scene).unwrap();

        // Centre shows the sphere (grey), edges show the triangle (blue).
        let centre = buffer.get(2, 2);
        let edge = buffer.get(0, 2);
        assert!(centre.x > 0.0 && (centre.x - centre.z).abs() < 1e-5);
        assert!(edge.z > edge.x, "background triangle should read blue");
    }

    #[test]
    fn test_row_major_buffer_round_trip() {
        let mut buffer = FrameBuffer::new(3, 2);
        buffer.set(2, 1, Vec3::ONE);

        assert_eq!(buffer.get(2, 1), Vec3::ONE);
        let bytes = buffer.to_rgb8();
        assert_eq!(bytes.len(), 3 * 2 * 3);
        // Last pixel of the last row
        assert_eq!(&bytes[15..18], &[255, 255, 255]);
    }
}
