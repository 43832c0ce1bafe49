//! Route search over the walkable cells of a [`VoxelGrid`](crate::grid::VoxelGrid).
//!
//! A cell is walkable (“stayable”) if it is empty and has solid ground
//! somewhere in the 3×3 block of cells at its level and directly below it.
//! World-space endpoints are first snapped onto the ground with
//! [`VoxelGrid::probe`](crate::grid::VoxelGrid::probe), then connected by a
//! breadth-first search over the six face-adjacent neighbours of each cell.

pub use self::grid_path::GridPath;
pub use self::path_search::{GoalAcceptance, GridPathfinder};
pub use self::path_search_error::PathSearchError;
pub use self::probe::PROBE_MAX_STEPS;

mod grid_path;
mod path_search;
mod path_search_error;
mod probe;
mod stayable;
