//! Dense voxel occupancy grids.
//!
//! A [`VoxelGrid`] discretizes an [`Aabb`](crate::bounding_volume::Aabb) into
//! `nx × ny × nz` cells and stores one bit per cell telling whether the cell is
//! solid. Cells are addressed by signed integer [`CellIndex`]es so neighbor
//! offsets can step outside of the grid and be rejected by
//! [`VoxelGrid::is_inside`].

pub use self::occupancy_bits::OccupancyBits;
pub use self::voxel_grid::VoxelGrid;
pub use self::voxel_grid_error::VoxelGridError;

mod occupancy_bits;
mod voxel_grid;
mod voxel_grid_error;

/// The integer coordinates `(x, y, z)` of a cell of a [`VoxelGrid`].
///
/// Valid indices lie in `[0, dims)` on every axis. Any other value (including
/// negative ones) is a perfectly fine `CellIndex` that simply doesn’t address
/// a cell of the grid.
pub type CellIndex = na::Point3<i32>;
