//! Procedural gradient noise used as a solid texture modulator.
//!
//! Both variants hold a fixed 100-per-axis grid of unit-length random
//! gradient vectors, seeded once at construction. Queries wrap into the
//! grid with a floored modulo, dot the corner gradients with the offset to
//! the query point, and blend with the quintic smoothstep
//! `6p^5 - 15p^4 + 10p^3`, axis by axis.

use std::time::Instant;

use opal_math::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Gradient grid side length per axis.
pub const GRID_SIZE: usize = 100;

/// Wrap modulus: cell corners index up to `GRID_SIZE - 1`, so coordinates
/// wrap into `[0, GRID_SIZE - 1)`.
const WRAP: f32 = (GRID_SIZE - 1) as f32;

/// Quintic smoothstep with zero first and second derivatives at 0 and 1.
#[inline]
fn smoothstep(p: f32) -> f32 {
    6.0 * p.powi(5) - 15.0 * p.powi(4) + 10.0 * p.powi(3)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Floored modulo into `[0, WRAP)`.
///
/// `rem_euclid` can round up to the modulus itself for tiny negative
/// inputs, so the cell index below is clamped to the last full cell.
#[inline]
fn wrap(x: f32) -> f32 {
    x.rem_euclid(WRAP)
}

#[inline]
fn cell_index(x: f32) -> usize {
    (x.floor() as usize).min(GRID_SIZE - 2)
}

/// 2D gradient noise field.
#[derive(Clone, Debug)]
pub struct Perlin2 {
    grid: Vec<Vec2>,
}

impl Perlin2 {
    /// Build the gradient grid. A `Some` seed makes the field fully
    /// deterministic; `None` seeds from entropy and the field will differ
    /// from run to run.
    pub fn new(seed: Option<u64>) -> Self {
        let start = Instant::now();
        let mut rng = make_rng(seed);

        let grid = (0..GRID_SIZE * GRID_SIZE)
            .map(|_| {
                Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)).normalize()
            })
            .collect();

        log::debug!(
            "generated {size}x{size} 2d noise gradient grid in {:?}",
            start.elapsed(),
            size = GRID_SIZE,
        );
        Self { grid }
    }

    #[inline]
    fn gradient(&self, x: usize, y: usize) -> Vec2 {
        self.grid[x * GRID_SIZE + y]
    }

    /// Smoothed gradient noise at `point`, roughly in [-1, 1].
    pub fn value_at(&self, point: Vec2) -> f32 {
        let point = Vec2::new(wrap(point.x), wrap(point.y));
        let x0 = cell_index(point.x);
        let y0 = cell_index(point.y);

        // Corner order: x varies fastest, matching the interpolation below.
        let corners = [
            (x0, y0),
            (x0 + 1, y0),
            (x0, y0 + 1),
            (x0 + 1, y0 + 1),
        ];
        let mut dots = [0.0f32; 4];
        for (i, &(cx, cy)) in corners.iter().enumerate() {
            let corner = Vec2::new(cx as f32, cy as f32);
            dots[i] = self.gradient(cx, cy).dot(point - corner);
        }

        let frac = point - Vec2::new(x0 as f32, y0 as f32);
        let wx = smoothstep(frac.x);
        let wy = smoothstep(frac.y);

        // Lerp along x, then y.
        let x_1 = dots[0] + wx * (dots[1] - dots[0]);
        let x_2 = dots[2] + wx * (dots[3] - dots[2]);
        x_1 + wy * (x_2 - x_1)
    }

    /// Octave sum of noise magnitudes at halving scales.
    pub fn turbulence(&self, octaves: u32, point: Vec2) -> f32 {
        let floor = 0.5f32.powi(octaves as i32);
        let mut sum = 0.0;
        let mut scale = 1.0;
        while scale > floor {
            sum += (self.value_at(point / scale) * scale).abs();
            scale /= 2.0;
        }
        sum
    }

    /// Marble-vein remapping of turbulence. The `+ 1` keeps the radicand
    /// in [0, 2], so the result is real for any finite input.
    pub fn marble(&self, octaves: u32, frequency: f32, point: Vec2) -> f32 {
        ((point.x + frequency * self.turbulence(octaves, point)).sin() + 1.0).sqrt()
    }
}

/// 3D gradient noise field.
#[derive(Clone, Debug)]
pub struct Perlin3 {
    grid: Vec<Vec3>,
}

impl Perlin3 {
    /// Build the gradient grid; see [`Perlin2::new`] for seeding behavior.
    pub fn new(seed: Option<u64>) -> Self {
        let start = Instant::now();
        let mut rng = make_rng(seed);

        let grid = (0..GRID_SIZE * GRID_SIZE * GRID_SIZE)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                )
                .normalize()
            })
            .collect();

        log::debug!(
            "generated {size}^3 noise gradient grid in {:?}",
            start.elapsed(),
            size = GRID_SIZE,
        );
        Self { grid }
    }

    #[inline]
    fn gradient(&self, x: usize, y: usize, z: usize) -> Vec3 {
        self.grid[(x * GRID_SIZE + y) * GRID_SIZE + z]
    }

    /// Smoothed gradient noise at `point`, roughly in [-1, 1].
    pub fn value_at(&self, point: Vec3) -> f32 {
        let point = Vec3::new(wrap(point.x), wrap(point.y), wrap(point.z));
        let x0 = cell_index(point.x);
        let y0 = cell_index(point.y);
        let z0 = cell_index(point.z);

        let corners = [
            (x0, y0, z0),
            (x0 + 1, y0, z0),
            (x0, y0 + 1, z0),
            (x0 + 1, y0 + 1, z0),
            (x0, y0, z0 + 1),
            (x0 + 1, y0, z0 + 1),
            (x0, y0 + 1, z0 + 1),
            (x0 + 1, y0 + 1, z0 + 1),
        ];
        let mut dots = [0.0f32; 8];
        for (i, &(cx, cy, cz)) in corners.iter().enumerate() {
            let corner = Vec3::new(cx as f32, cy as f32, cz as f32);
            dots[i] = self.gradient(cx, cy, cz).dot(point - corner);
        }

        let frac = point - Vec3::new(x0 as f32, y0 as f32, z0 as f32);
        let wx = smoothstep(frac.x);
        let wy = smoothstep(frac.y);
        let wz = smoothstep(frac.z);

        // Lerp along x, then y, then z.
        let x_1 = dots[0] + wx * (dots[1] - dots[0]);
        let x_2 = dots[2] + wx * (dots[3] - dots[2]);
        let x_3 = dots[4] + wx * (dots[5] - dots[4]);
        let x_4 = dots[6] + wx * (dots[7] - dots[6]);

        let y_1 = x_1 + wy * (x_2 - x_1);
        let y_2 = x_3 + wy * (x_4 - x_3);

        y_1 + wz * (y_2 - y_1)
    }

    /// Octave sum of noise magnitudes at halving scales.
    pub fn turbulence(&self, octaves: u32, point: Vec3) -> f32 {
        let floor = 0.5f32.powi(octaves as i32);
        let mut sum = 0.0;
        let mut scale = 1.0;
        while scale > floor {
            sum += (self.value_at(point / scale) * scale).abs();
            scale /= 2.0;
        }
        sum
    }

    /// Marble-vein remapping of turbulence; always real for finite input.
    pub fn marble(&self, octaves: u32, frequency: f32, point: Vec3) -> f32 {
        ((point.x + frequency * self.turbulence(octaves, point)).sin() + 1.0).sqrt()
    }
}

/// A noise field of either dimensionality, attachable to a primitive as a
/// texture modulator.
///
/// Shading queries are 3D points; the planar variant evaluates on their
/// xy projection.
#[derive(Clone, Debug)]
pub enum NoiseField {
    Plane(Perlin2),
    Solid(Perlin3),
}

impl NoiseField {
    /// A 2D field; see [`Perlin2::new`] for seeding behavior.
    pub fn plane(seed: Option<u64>) -> Self {
        NoiseField::Plane(Perlin2::new(seed))
    }

    /// A 3D field; see [`Perlin3::new`] for seeding behavior.
    pub fn solid(seed: Option<u64>) -> Self {
        NoiseField::Solid(Perlin3::new(seed))
    }

    /// Marble pattern value at a world-space point.
    pub fn marble(&self, octaves: u32, frequency: f32, point: Vec3) -> f32 {
        match self {
            NoiseField::Plane(perlin) => perlin.marble(octaves, frequency, point.truncate()),
            NoiseField::Solid(perlin) => perlin.marble(octaves, frequency, point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_is_deterministic() {
        let a = Perlin2::new(Some(7));
        let b = Perlin2::new(Some(7));

        let p = Vec2::new(12.3, 45.6);
        assert_eq!(a.value_at(p), b.value_at(p));
        assert_eq!(a.turbulence(6, p), b.turbulence(6, p));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Perlin2::new(Some(1));
        let b = Perlin2::new(Some(2));

        // A handful of probe points; identical grids would be a miracle.
        let probes = [
            Vec2::new(3.7, 9.1),
            Vec2::new(55.5, 21.2),
            Vec2::new(80.25, 4.75),
        ];
        assert!(probes.iter().any(|&p| a.value_at(p) != b.value_at(p)));
    }

    #[test]
    fn test_negative_coordinates_wrap() {
        let noise = Perlin2::new(Some(3));
        let v = noise.value_at(Vec2::new(-41.5, -3.25));
        assert!(v.is_finite());

        // Floored modulo: -41.5 lands in the same cell as -41.5 + 99.
        let wrapped = noise.value_at(Vec2::new(-41.5 + WRAP, -3.25 + WRAP));
        assert!((v - wrapped).abs() < 1e-5);
    }

    #[test]
    fn test_smoothstep_endpoints() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_turbulence_octave_count_and_sign() {
        let noise = Perlin2::new(Some(11));
        let p = Vec2::new(17.0, 23.0);

        // Non-negative by construction.
        assert!(noise.turbulence(6, p) >= 0.0);
        // More octaves only ever add non-negative terms.
        assert!(noise.turbulence(6, p) >= noise.turbulence(3, p));
    }

    #[test]
    fn test_marble_is_real_and_bounded() {
        let noise = Perlin3::new(Some(9));
        let probes = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(350.0, 351.5, 352.25),
            Vec3::new(-17.0, 4.5, 1000.0),
        ];

        for p in probes {
            let m = noise.marble(6, 4.0, p);
            assert!(m.is_finite());
            // sin + 1 lies in [0, 2], so marble lies in [0, sqrt(2)].
            assert!((0.0..=2.0f32.sqrt() + 1e-5).contains(&m));
        }
    }

    #[test]
    fn test_solid_field_determinism_through_enum() {
        let a = NoiseField::solid(Some(5));
        let b = NoiseField::solid(Some(5));

        let p = Vec3::new(350.0, 349.0, 351.0);
        assert_eq!(a.marble(6, 4.0, p), b.marble(6, 4.0, p));
    }
}
