use crate::grid::{CellIndex, VoxelGrid};
use crate::math::{Point, Real};

/// The number of cells, starting with the probed one, searched for a cell
/// resting directly on solid ground.
pub const PROBE_MAX_STEPS: u32 = 3;

impl VoxelGrid {
    /// Snaps a world-space position onto the ground.
    ///
    /// The position is first mapped to its nearest cell (see
    /// [`VoxelGrid::world_to_cell`]). That cell must be inside of the grid and
    /// empty. Then, starting with that cell and walking down, the first of
    /// at most [`PROBE_MAX_STEPS`] cells whose cell below is solid is returned.
    ///
    /// Returns `None` if the position is outside of the grid, inside of a solid
    /// cell, or too high above the ground (or above the bottom of the grid).
    pub fn probe(&self, point: &Point<Real>) -> Option<CellIndex> {
        let mut cell = self.world_to_cell(point);

        if !self.is_inside(cell) || self.is_occupied(cell) {
            return None;
        }

        for _ in 0..PROBE_MAX_STEPS {
            let below = CellIndex::new(cell.x, cell.y, cell.z - 1);

            if !self.is_inside(below) {
                return None;
            }

            if self.is_occupied(below) {
                return Some(cell);
            }

            cell = below;
        }

        None
    }
}
