//! Wavefront OBJ loading.
//!
//! Only the subset the renderer needs: `v` vertex lines and `f` face lines
//! with 1-indexed vertex references. Comments, blank lines, and any other
//! statement kinds (`vn`, `vt`, `usemtl`, ...) are skipped.

use std::path::Path;

use opal_math::Vec3;
use thiserror::Error;

use crate::mesh::TriMesh;

/// Errors that can occur while loading an OBJ file.
#[derive(Error, Debug)]
pub enum ObjError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 3 vertex coordinates, found {found}")]
    VertexArity { line: usize, found: usize },

    #[error("line {line}: expected at least 3 face indices, found {found}")]
    FaceArity { line: usize, found: usize },

    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: face index {index} out of range for {vertices} vertices")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        vertices: usize,
    },
}

/// Result type for OBJ loading.
pub type ObjResult<T> = Result<T, ObjError>;

/// Load an OBJ file into a mesh with the given base color.
pub fn load_obj<P: AsRef<Path>>(path: P, color: Vec3) -> ObjResult<TriMesh> {
    let content = std::fs::read_to_string(path)?;
    parse_obj(&content, color)
}

/// Parse OBJ text into a mesh with the given base color.
///
/// Face indices are converted from the format's 1-indexed convention to
/// 0-indexed. Faces with more than three indices keep only their first
/// three vertices; the mesh is expected to be pre-triangulated.
pub fn parse_obj(content: &str, color: Vec3) -> ObjResult<TriMesh> {
    let mut vertices: Vec<Vec3> = Vec::new();
    let mut faces: Vec<[u32; 3]> = Vec::new();

    for (line_idx, raw) in content.lines().enumerate() {
        let line = line_idx + 1;
        let mut tokens = raw.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let coords = parse_floats(tokens, line)?;
                if coords.len() != 3 {
                    return Err(ObjError::VertexArity {
                        line,
                        found: coords.len(),
                    });
                }
                vertices.push(Vec3::new(coords[0], coords[1], coords[2]));
            }
            Some("f") => {
                let indices = parse_indices(tokens, line)?;
                if indices.len() < 3 {
                    return Err(ObjError::FaceArity {
                        line,
                        found: indices.len(),
                    });
                }
                if indices.len() > 3 {
                    log::warn!(
                        "line {line}: face with {} indices, keeping the first 3",
                        indices.len()
                    );
                }

                let mut face = [0u32; 3];
                for (slot, &index) in face.iter_mut().zip(&indices) {
                    // 1-indexed in the file
                    let shifted = index - 1;
                    if shifted < 0 || shifted as usize >= vertices.len() {
                        return Err(ObjError::IndexOutOfRange {
                            line,
                            index,
                            vertices: vertices.len(),
                        });
                    }
                    *slot = shifted as u32;
                }
                faces.push(face);
            }
            // Comments, blank lines, and unsupported statements
            _ => continue,
        }
    }

    log::debug!(
        "parsed obj: {} vertices, {} faces",
        vertices.len(),
        faces.len()
    );
    Ok(TriMesh::new(vertices, faces, color))
}

fn parse_floats<'a, I>(tokens: I, line: usize) -> ObjResult<Vec<f32>>
where
    I: Iterator<Item = &'a str>,
{
    tokens
        .map(|token| {
            token.parse::<f32>().map_err(|_| ObjError::InvalidNumber {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

fn parse_indices<'a, I>(tokens: I, line: usize) -> ObjResult<Vec<i64>>
where
    I: Iterator<Item = &'a str>,
{
    tokens
        .map(|token| {
            // "f 1/2/3" style references use the vertex index before the slash
            let vertex_ref = token.split('/').next().unwrap_or(token);
            vertex_ref
                .parse::<i64>()
                .map_err(|_| ObjError::InvalidNumber {
                    line,
                    token: token.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
# a single triangle
v -1.0 -1.0 5.0
v 1.0 -1.0 5.0

v 0.0 1.0 5.0
f 1 2 3
";

    #[test]
    fn test_parse_triangle() {
        let mesh = parse_obj(TRIANGLE, Vec3::new(0.7, 0.7, 0.65)).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        // 1-indexed input becomes 0-indexed storage
        assert_eq!(mesh.faces[0], [0, 1, 2]);
        assert_eq!(mesh.vertices[0], Vec3::new(-1.0, -1.0, 5.0));
    }

    #[test]
    fn test_unknown_statements_skipped() {
        let content = "\
vn 0.0 0.0 1.0
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
usemtl stone
f 1 2 3
";
        let mesh = parse_obj(content, Vec3::ONE).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_slash_references() {
        let content = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1/1/1 2/2/2 3/3/3
";
        let mesh = parse_obj(content, Vec3::ONE).unwrap();
        assert_eq!(mesh.faces[0], [0, 1, 2]);
    }

    #[test]
    fn test_quad_face_truncated() {
        let content = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3 4
";
        let mesh = parse_obj(content, Vec3::ONE).unwrap();
        assert_eq!(mesh.faces[0], [0, 1, 2]);
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let content = "v 0.0 zero 0.0\n";
        match parse_obj(content, Vec3::ONE) {
            Err(ObjError::InvalidNumber { line, token }) => {
                assert_eq!(line, 1);
                assert_eq!(token, "zero");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_face_index_out_of_range() {
        let content = "\
v 0.0 0.0 0.0
f 1 2 3
";
        match parse_obj(content, Vec3::ONE) {
            Err(ObjError::IndexOutOfRange { line, index, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(index, 2);
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }
}
