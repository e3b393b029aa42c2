//! # Mesh Data Structure
//!
//! Core mesh representation: an indexed triangle buffer with optional
//! per-vertex colors.

use config::constants::{DEFAULT_VERTEX_COLOR, MAX_VERTICES};
use glam::{DMat4, DVec3};

use crate::error::{MeshError, MeshResult};

/// RGBA color tag, 0-255 per channel.
pub type Rgba = [u8; 4];

/// A triangle mesh with vertices and indices.
///
/// Indices are local to this mesh: every index of every triangle is
/// `< vertex_count()`. [`Mesh::merge`] rebases the indices of the appended
/// mesh so that this stays true after concatenation.
///
/// # Example
///
/// ```rust
/// use starforge_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex colors, one per vertex when present
    colors: Option<Vec<Rgba>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            colors: None,
        }
    }

    /// Builds a mesh from explicit buffers, checking index integrity.
    ///
    /// # Errors
    ///
    /// [`MeshError::IndexIntegrity`] if a triangle references a missing
    /// vertex, [`MeshError::TooManyVertices`] beyond the u32 index range.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> MeshResult<Self> {
        if vertices.len() > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertices.len(),
                max: MAX_VERTICES,
            });
        }
        let mesh = Self {
            vertices,
            triangles,
            colors: None,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    ///
    /// A colored mesh gives the new vertex [`DEFAULT_VERTEX_COLOR`].
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        if let Some(colors) = &mut self.colors {
            colors.push(DEFAULT_VERTEX_COLOR);
        }
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the three corner positions of a triangle.
    pub fn triangle_corners(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [self.vertex(a), self.vertex(b), self.vertex(c)]
    }

    /// Unit normal of a triangle from its winding, or zero when degenerate.
    pub fn triangle_normal(&self, index: usize) -> DVec3 {
        let [v0, v1, v2] = self.triangle_corners(index);
        (v1 - v0).cross(v2 - v0).normalize_or_zero()
    }

    /// Sets a uniform color for all vertices.
    pub fn set_uniform_color(&mut self, color: Rgba) {
        self.colors = Some(vec![color; self.vertices.len()]);
    }

    /// Returns the vertex colors.
    pub fn colors(&self) -> Option<&[Rgba]> {
        self.colors.as_deref()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns `(min, max)` corners, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let (first, rest) = self.vertices.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)));
        Some((min, max))
    }

    /// Transforms all vertices by a 4x4 affine matrix in place.
    ///
    /// A mirroring matrix (negative determinant) reverses every triangle so
    /// the winding keeps facing outward.
    pub(crate) fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        if matrix.determinant() < 0.0 {
            for tri in &mut self.triangles {
                tri.swap(1, 2);
            }
        }
    }

    /// Appends another mesh, rebasing its indices by the current vertex count.
    ///
    /// # Errors
    ///
    /// [`MeshError::TooManyVertices`] if the merged buffer would exceed the
    /// u32 index range.
    pub fn merge(&mut self, other: &Mesh) -> MeshResult<()> {
        let offset = self.vertices.len();
        let total = offset + other.vertices.len();
        if total > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: total,
                max: MAX_VERTICES,
            });
        }

        self.colors = match (self.colors.take(), &other.colors) {
            (Some(mut own), Some(theirs)) => {
                own.resize(offset, DEFAULT_VERTEX_COLOR);
                own.extend_from_slice(theirs);
                own.resize(total, DEFAULT_VERTEX_COLOR);
                Some(own)
            }
            (Some(mut own), None) => {
                own.resize(total, DEFAULT_VERTEX_COLOR);
                Some(own)
            }
            (None, Some(theirs)) => {
                let mut colors = vec![DEFAULT_VERTEX_COLOR; offset];
                colors.extend_from_slice(theirs);
                colors.resize(total, DEFAULT_VERTEX_COLOR);
                Some(colors)
            }
            (None, None) => None,
        };

        self.vertices.extend_from_slice(&other.vertices);

        let offset = offset as u32;
        self.triangles.reserve(other.triangles.len());
        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }

        Ok(())
    }

    /// Validates index integrity.
    ///
    /// Checks that every triangle index is `< vertex_count()`. Degenerate or
    /// overlapping triangles are legal and not reported.
    ///
    /// # Errors
    ///
    /// [`MeshError::IndexIntegrity`] naming the first offending face.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();

        for (face, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexIntegrity {
                    face,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(())
    }

    /// Exports vertices as f32 array.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}
