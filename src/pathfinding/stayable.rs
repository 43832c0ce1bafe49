use crate::grid::{CellIndex, VoxelGrid};
use na::Vector3;

impl VoxelGrid {
    /// Can an agent stand in the given cell?
    ///
    /// The cell must be inside of the grid and empty, and at least one of the
    /// 17 cells of the 3×3×2 block made of its layer and the layer below it
    /// (the cell itself excluded) must be solid.
    pub fn is_stayable(&self, cell: CellIndex) -> bool {
        if !self.is_inside(cell) || self.is_occupied(cell) {
            return false;
        }

        (-1..=0).any(|dz| {
            (-1..=1).any(|dy| {
                (-1..=1).any(|dx| {
                    if dx == 0 && dy == 0 && dz == 0 {
                        return false;
                    }

                    let neighbor = cell + Vector3::new(dx, dy, dz);
                    self.is_inside(neighbor) && self.is_occupied(neighbor)
                })
            })
        })
    }
}
