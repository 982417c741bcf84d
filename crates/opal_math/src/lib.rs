// Re-export glam for convenience
pub use glam::*;

// Opal math types
mod ray;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_normalize_is_unit_length() {
        let vectors = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-5.0, 0.25, 100.0),
            Vec3::new(0.0, 0.0, 1e-3),
        ];

        for v in vectors {
            assert!((v.normalize().length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_cross_anti_commutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 5.0, 0.5);

        assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn test_cross_orthogonal_to_inputs() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.0, 1.0, -1.0);
        let c = a.cross(b);

        assert!(c.dot(a).abs() < 1e-6);
        assert!(c.dot(b).abs() < 1e-6);
    }
}
