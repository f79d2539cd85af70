//! Mesh and face storage.
//!
//! A [`Mesh`] holds model-space vertices and the triangular faces that index
//! them, together with the transform parameters the engine composes into a
//! world matrix each frame. Face indices are 1-based, matching the OBJ
//! convention; the engine subtracts 1 when resolving them.

use crate::colors;
use crate::math::vec3::Vec3;
use crate::render::TexCoord;

/// A triangular face referencing three mesh vertices (1-based indices),
/// with per-corner texture coordinates and a flat fill color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub a_uv: TexCoord,
    pub b_uv: TexCoord,
    pub c_uv: TexCoord,
    pub color: u32,
}

/// Error loading a mesh from disk.
#[derive(Debug)]
pub enum LoadError {
    Obj(tobj::LoadError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "failed to load OBJ mesh: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(e) => Some(e),
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    rotation: Vec3,
    scale: Vec3,
    translation: Vec3,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            faces,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            translation: Vec3::ZERO,
        }
    }

    /// The canonical unit cube centered on the origin.
    pub fn cube() -> Self {
        Self::new(CUBE_VERTICES.to_vec(), CUBE_FACES.to_vec())
    }

    /// Load a mesh from an OBJ file, merging all objects in the file.
    ///
    /// Faces are triangulated by the loader. Texture coordinates default to
    /// (0, 0) when the file carries none.
    pub fn from_obj(file_path: &str) -> Result<Self, LoadError> {
        let (models, _materials) = tobj::load_obj(file_path, &tobj::GPU_LOAD_OPTIONS)?;

        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            // Indices in this file are local to the model; offset them past
            // the vertices merged so far (and keep the 1-based convention)
            let base = vertices.len() as u32;

            for xyz in mesh.positions.chunks_exact(3) {
                vertices.push(Vec3::new(xyz[0], xyz[1], xyz[2]));
            }

            let uv_at = |index: u32| -> TexCoord {
                if mesh.texcoords.is_empty() {
                    TexCoord::ZERO
                } else {
                    let i = index as usize * 2;
                    TexCoord::new(mesh.texcoords[i], mesh.texcoords[i + 1])
                }
            };

            for tri in mesh.indices.chunks_exact(3) {
                faces.push(Face {
                    a: base + tri[0] + 1,
                    b: base + tri[1] + 1,
                    c: base + tri[2] + 1,
                    a_uv: uv_at(tri[0]),
                    b_uv: uv_at(tri[1]),
                    c_uv: uv_at(tri[2]),
                    color: colors::FILL,
                });
            }
        }

        Ok(Self::new(vertices, faces))
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn rotation_mut(&mut self) -> &mut Vec3 {
        &mut self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn scale_mut(&mut self) -> &mut Vec3 {
        &mut self.scale
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn translation_mut(&mut self) -> &mut Vec3 {
        &mut self.translation
    }
}

pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

// Each cube side is two triangles sharing the same quad UV layout
const fn cube_face(a: u32, b: u32, c: u32, second_half: bool, color: u32) -> Face {
    if second_half {
        Face {
            a,
            b,
            c,
            a_uv: TexCoord::new(0.0, 1.0),
            b_uv: TexCoord::new(1.0, 0.0),
            c_uv: TexCoord::new(1.0, 1.0),
            color,
        }
    } else {
        Face {
            a,
            b,
            c,
            a_uv: TexCoord::new(0.0, 1.0),
            b_uv: TexCoord::new(0.0, 0.0),
            c_uv: TexCoord::new(1.0, 0.0),
            color,
        }
    }
}

pub const CUBE_FACES: [Face; 12] = [
    // Front
    cube_face(1, 2, 3, false, 0xFFC04040),
    cube_face(1, 3, 4, true, 0xFFC04040),
    // Right
    cube_face(4, 3, 5, false, 0xFF40C040),
    cube_face(4, 5, 6, true, 0xFF40C040),
    // Back
    cube_face(6, 5, 7, false, 0xFF4040C0),
    cube_face(6, 7, 8, true, 0xFF4040C0),
    // Left
    cube_face(8, 7, 2, false, 0xFFC0C040),
    cube_face(8, 2, 1, true, 0xFFC0C040),
    // Top
    cube_face(2, 7, 5, false, 0xFF40C0C0),
    cube_face(2, 5, 3, true, 0xFF40C0C0),
    // Bottom
    cube_face(6, 8, 1, false, 0xFFC040C0),
    cube_face(6, 1, 4, true, 0xFFC040C0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_expected_topology() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.faces().len(), 12);
    }

    #[test]
    fn cube_face_indices_are_in_range() {
        for face in CUBE_FACES {
            for index in [face.a, face.b, face.c] {
                assert!(index >= 1 && index <= CUBE_VERTICES.len() as u32);
            }
        }
    }

    #[test]
    fn cube_defaults_to_unit_transform() {
        let cube = Mesh::cube();
        assert_eq!(cube.rotation(), Vec3::ZERO);
        assert_eq!(cube.scale(), Vec3::ONE);
        assert_eq!(cube.translation(), Vec3::ZERO);
    }
}
