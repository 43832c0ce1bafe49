use crate::grid::CellIndex;

/// Error indicating that no route could be found between two positions.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathSearchError {
    /// The start position is outside of the grid, inside of a solid cell, or
    /// too high above the ground.
    #[error("the start position isn’t standing on the ground")]
    StartNotGrounded,
    /// The end position is outside of the grid, inside of a solid cell, or
    /// too high above the ground.
    #[error("the end position isn’t standing on the ground")]
    EndNotGrounded,
    /// The search exhausted every walkable cell reachable from the start.
    #[error("no walkable route from cell {start} to cell {end}")]
    Unreachable {
        /// The grounded start cell.
        start: CellIndex,
        /// The grounded end cell.
        end: CellIndex,
    },
}
