use crate::bounding_volume::Aabb;
use crate::grid::VoxelGrid;
use crate::math::{Point, Real};
use alloc::vec::Vec;

/// Error indicating that a triangle soup can’t be rasterized.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RasterizationError {
    /// The index buffer length isn’t a multiple of three.
    #[error("the index buffer has {len} elements, which isn’t a multiple of 3")]
    MalformedIndexBuffer {
        /// The length of the index buffer.
        len: usize,
    },
    /// A triangle references a vertex that doesn’t exist.
    #[error("triangle {triangle} references the vertex {index} but there are only {num_vertices} vertices")]
    IndexOutOfBounds {
        /// The triangle with the invalid index.
        triangle: usize,
        /// The invalid vertex index.
        index: u32,
        /// The number of vertices of the soup.
        num_vertices: usize,
    },
}

/// An unstructured set of triangles described by a vertex buffer and a flat
/// index buffer.
///
/// Each consecutive triplet of `indices` is one triangle. No topological
/// property is assumed: triangles may be disconnected, duplicated, or
/// degenerate.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleSoup {
    /// The vertex buffer.
    pub vertices: Vec<Point<Real>>,
    /// The index buffer, three indices per triangle.
    pub indices: Vec<u32>,
}

impl TriangleSoup {
    /// Creates a triangle soup from its raw buffers, without validating them.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// The number of complete triangles described by the index buffer.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Does this soup contain no triangle?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_triangles() == 0
    }

    /// The bounding box of all the vertices, referenced or not.
    ///
    /// Returns an invalid box (see [`Aabb::new_invalid`]) if there are no vertices.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points_ref(&self.vertices)
    }

    /// Checks that the index buffer describes whole triangles referencing
    /// existing vertices only.
    pub fn validate(&self) -> Result<(), RasterizationError> {
        if !self.indices.len().is_multiple_of(3) {
            return Err(RasterizationError::MalformedIndexBuffer {
                len: self.indices.len(),
            });
        }

        let num_vertices = self.vertices.len();
        if let Some((i, index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, index)| **index as usize >= num_vertices)
        {
            return Err(RasterizationError::IndexOutOfBounds {
                triangle: i / 3,
                index: *index,
                num_vertices,
            });
        }

        Ok(())
    }

    /// The `i`-th triangle, if it exists and only references existing vertices.
    pub fn triangle(&self, i: usize) -> Option<[Point<Real>; 3]> {
        let idx = self.indices.get(i * 3..i * 3 + 3)?;
        Some([
            *self.vertices.get(idx[0] as usize)?,
            *self.vertices.get(idx[1] as usize)?,
            *self.vertices.get(idx[2] as usize)?,
        ])
    }

    /// Iterates through all the triangles of this soup.
    ///
    /// Triangles referencing missing vertices are silently skipped; call
    /// [`TriangleSoup::validate`] first to detect them.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Option<[Point<Real>; 3]>> + '_ {
        (0..self.num_triangles()).map(|i| self.triangle(i))
    }
}

impl VoxelGrid {
    /// Rasterizes every triangle of `soup` into this grid.
    ///
    /// The soup is validated before the grid is modified: on error, the grid
    /// is left untouched. Returns the number of rasterized triangles.
    pub fn rasterize_soup(&mut self, soup: &TriangleSoup) -> Result<usize, RasterizationError> {
        soup.validate()?;

        let mut num_triangles = 0;
        for [a, b, c] in soup.triangles().flatten() {
            self.rasterize_triangle(&a, &b, &c);
            num_triangles += 1;
        }

        Ok(num_triangles)
    }
}
