use super::{CellIndex, OccupancyBits, VoxelGridError};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use alloc::vec::Vec;
use na::Vector3;

/// A dense grid of solid/empty cells covering an axis-aligned box.
///
/// The grid has square cells of side `cell_size` on the horizontal `xy` plane
/// and a (usually different) `cell_height` along `z`. The cell `(0, 0, 0)` has
/// its minimum corner at `bounds.mins`.
///
/// A grid is created empty by [`VoxelGrid::new`], filled by rasterizing
/// triangles (see [`VoxelGrid::rasterize_triangle`]), then only read, e.g., by
/// a [`GridPathfinder`](crate::pathfinding::GridPathfinder). Its dimensions
/// never change: covering another region requires a new grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VoxelGrid {
    bounds: Aabb,
    cell_size: Real,
    cell_height: Real,
    occupancy: OccupancyBits,
}

impl VoxelGrid {
    /// Creates a grid with all its cells empty.
    ///
    /// The number of cells along each axis is the extent of `bounds` along that
    /// axis divided by the matching cell dimension, rounded to the nearest
    /// integer (`+0.5` then truncated). The grid may therefore cover slightly
    /// less or slightly more than `bounds`.
    ///
    /// # Errors
    /// Fails if `cell_size` or `cell_height` isn’t strictly positive and
    /// finite, if `bounds` is inverted or not finite, or if the cell count
    /// overflows.
    pub fn new(bounds: Aabb, cell_size: Real, cell_height: Real) -> Result<Self, VoxelGridError> {
        if !(cell_size > 0.0 && cell_size.is_finite()) {
            return Err(VoxelGridError::InvalidCellSize(cell_size));
        }

        if !(cell_height > 0.0 && cell_height.is_finite()) {
            return Err(VoxelGridError::InvalidCellHeight(cell_height));
        }

        let is_finite = bounds.mins.iter().chain(bounds.maxs.iter()).all(|e| e.is_finite());
        if !bounds.is_valid() || !is_finite {
            return Err(VoxelGridError::InvalidBounds);
        }

        let extents = bounds.extents();
        let cell_dims = Vector::new(cell_size, cell_size, cell_height);
        // NOTE: float-to-int `as` casts saturate, so absurd ratios end up
        //       rejected by the checks below instead of wrapping.
        let dims = extents
            .component_div(&cell_dims)
            .map(|e| (e + 0.5) as u32);

        let too_many = || VoxelGridError::TooManyCells {
            nx: dims.x,
            ny: dims.y,
            nz: dims.z,
        };

        if dims.iter().any(|e| *e > i32::MAX as u32) {
            return Err(too_many());
        }

        let num_cells = (dims.x as usize)
            .checked_mul(dims.y as usize)
            .and_then(|e| e.checked_mul(dims.z as usize));

        if !num_cells.is_some_and(|n| n.div_ceil(8) < isize::MAX as usize) {
            return Err(too_many());
        }

        let occupancy = OccupancyBits::new(dims);
        log::debug!(
            "Allocated a {}x{}x{} voxel grid ({} bytes).",
            dims.x,
            dims.y,
            dims.z,
            occupancy.len_bytes()
        );

        Ok(Self {
            bounds,
            cell_size,
            cell_height,
            occupancy,
        })
    }

    /// The region covered by this grid, as given at construction.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// The horizontal (`x` and `y`) size of a cell.
    #[inline]
    pub fn cell_size(&self) -> Real {
        self.cell_size
    }

    /// The vertical (`z`) size of a cell.
    #[inline]
    pub fn cell_height(&self) -> Real {
        self.cell_height
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn dims(&self) -> Vector3<u32> {
        self.occupancy.dims()
    }

    /// The total number of cells, solid or not.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.occupancy.num_bits()
    }

    /// The number of solid cells.
    pub fn num_occupied(&self) -> usize {
        self.occupancy.count_ones()
    }

    /// The bit-dense storage of this grid.
    #[inline]
    pub fn occupancy(&self) -> &OccupancyBits {
        &self.occupancy
    }

    /// Is `cell` a valid index of this grid, i.e., within `[0, dims)` on every axis?
    #[inline]
    pub fn is_inside(&self, cell: CellIndex) -> bool {
        let dims = self.dims();
        cell.x >= 0
            && cell.y >= 0
            && cell.z >= 0
            && (cell.x as u32) < dims.x
            && (cell.y as u32) < dims.y
            && (cell.z as u32) < dims.z
    }

    /// Is the given cell solid?
    ///
    /// The caller must make sure `cell` is inside of the grid (see
    /// [`VoxelGrid::is_inside`]). This is only checked on debug builds.
    #[inline]
    pub fn is_occupied(&self, cell: CellIndex) -> bool {
        debug_assert!(self.is_inside(cell), "Cell {:?} out of bounds.", cell);
        self.occupancy
            .get(cell.x as u32, cell.y as u32, cell.z as u32)
    }

    /// Marks the given cell as solid (`value = true`) or empty.
    ///
    /// The caller must make sure `cell` is inside of the grid (see
    /// [`VoxelGrid::is_inside`]). This is only checked on debug builds.
    #[inline]
    pub fn set_occupied(&mut self, cell: CellIndex, value: bool) {
        debug_assert!(self.is_inside(cell), "Cell {:?} out of bounds.", cell);
        self.occupancy
            .set(cell.x as u32, cell.y as u32, cell.z as u32, value)
    }

    /// The cell whose minimum corner is the closest to `point`.
    ///
    /// Each coordinate is rounded to the nearest integer:
    /// `floor((point - bounds.mins) / cell_dim + 0.5)`. The result may lie
    /// outside of the grid.
    #[inline]
    pub fn world_to_cell(&self, point: &Point<Real>) -> CellIndex {
        let local = point - self.bounds.mins;
        CellIndex::new(
            (local.x / self.cell_size + 0.5).floor() as i32,
            (local.y / self.cell_size + 0.5).floor() as i32,
            (local.z / self.cell_height + 0.5).floor() as i32,
        )
    }

    /// The world-space minimum corner of a cell.
    #[inline]
    pub fn cell_mins(&self, cell: CellIndex) -> Point<Real> {
        self.bounds.mins
            + Vector::new(
                cell.x as Real * self.cell_size,
                cell.y as Real * self.cell_size,
                cell.z as Real * self.cell_height,
            )
    }

    /// Half the size of any cell of this grid.
    #[inline]
    pub fn cell_half_extents(&self) -> Vector<Real> {
        Vector::new(self.cell_size, self.cell_size, self.cell_height) * 0.5
    }

    /// The world-space center of a cell.
    #[inline]
    pub fn cell_center(&self, cell: CellIndex) -> Point<Real> {
        self.cell_mins(cell) + self.cell_half_extents()
    }

    /// The world-space box of a cell.
    #[inline]
    pub fn cell_aabb(&self, cell: CellIndex) -> Aabb {
        Aabb::from_half_extents(self.cell_center(cell), self.cell_half_extents())
    }

    /// Iterates through all the solid cells, ordered by increasing `x`, then `y`, then `z`.
    pub fn occupied_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.occupancy.iter_ones().map(|bit| {
            let [x, y, z] = self.occupancy.cell_coords(bit);
            CellIndex::new(x as i32, y as i32, z as i32)
        })
    }

    /// Builds a triangle mesh made of one closed box per solid cell.
    ///
    /// All the triangles are oriented counter-clockwise when seen from the
    /// outside of their box.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        self.to_trimesh_shrunk(Vector::zeros())
    }

    /// Same as [`VoxelGrid::to_trimesh`], but each box is shrunk by `shrink`
    /// on every side so that neighbouring boxes stay visually apart.
    ///
    /// Each component of `shrink` is clamped to a quarter of the matching cell
    /// dimension.
    pub fn to_trimesh_shrunk(&self, shrink: Vector<Real>) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        const BOX_TRIANGLES: [[u32; 3]; 12] = [
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [3, 7, 6],
            [3, 6, 2],
            [0, 4, 7],
            [0, 7, 3],
            [1, 2, 6],
            [1, 6, 5],
        ];

        let full = self.cell_half_extents();
        let half_extents = full - shrink.zip_map(&full, |s, h| s.clamp(0.0, h * 0.5));
        let num_occupied = self.num_occupied();
        let mut vertices = Vec::with_capacity(num_occupied * 8);
        let mut indices = Vec::with_capacity(num_occupied * 12);

        for cell in self.occupied_cells() {
            let base = vertices.len() as u32;
            let aabb = Aabb::from_half_extents(self.cell_center(cell), half_extents);
            vertices.extend_from_slice(&aabb.vertices());
            indices.extend(
                BOX_TRIANGLES
                    .iter()
                    .map(|tri| [base + tri[0], base + tri[1], base + tri[2]]),
            );
        }

        (vertices, indices)
    }
}
