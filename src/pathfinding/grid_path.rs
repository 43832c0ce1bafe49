use crate::grid::{CellIndex, VoxelGrid};
use crate::math::{Point, Real, Vector};
use alloc::vec::Vec;

/// A route through a grid, as found by a
/// [`GridPathfinder`](super::GridPathfinder).
///
/// A path always contains at least one cell. It starts at the start cell, ends
/// at the end cell, and each cell is a face-neighbour of the previous one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPath {
    cells: Vec<CellIndex>,
}

impl GridPath {
    pub(crate) fn new(cells: Vec<CellIndex>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// The cells of this path, from start to end.
    #[inline]
    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    /// The number of cells of this path, both ends included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Is this path empty? Always `false` for a path returned by a search.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The number of moves from one cell to the next.
    #[inline]
    pub fn num_hops(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// The first cell of this path.
    #[inline]
    pub fn start(&self) -> CellIndex {
        self.cells[0]
    }

    /// The last cell of this path.
    #[inline]
    pub fn end(&self) -> CellIndex {
        self.cells[self.cells.len() - 1]
    }

    /// Are all the consecutive cells of this path face-neighbours?
    pub fn is_contiguous(&self) -> bool {
        self.cells
            .windows(2)
            .all(|w| (w[1] - w[0]).abs().sum() == 1)
    }

    /// Converts this path into a world-space polyline, one vertex per cell.
    ///
    /// Each vertex is the minimum corner of its cell raised by one cell
    /// height, i.e., the bottom corner of the cell above it.
    pub fn to_polyline(&self, grid: &VoxelGrid) -> Vec<Point<Real>> {
        let lift = Vector::z() * grid.cell_height();
        self.cells
            .iter()
            .map(|cell| grid.cell_mins(*cell) + lift)
            .collect()
    }
}
