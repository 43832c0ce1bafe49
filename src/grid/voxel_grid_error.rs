use crate::math::Real;

/// Error indicating that a [`VoxelGrid`](super::VoxelGrid) could not be created.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum VoxelGridError {
    /// The horizontal cell size must be strictly positive and finite.
    #[error("the cell size must be strictly positive, got {0}")]
    InvalidCellSize(Real),
    /// The vertical cell size must be strictly positive and finite.
    #[error("the cell height must be strictly positive, got {0}")]
    InvalidCellHeight(Real),
    /// The grid bounds have non-finite coordinates or `mins > maxs` on some axis.
    #[error("the grid bounds are invalid (non-finite or inverted)")]
    InvalidBounds,
    /// The number of cells doesn’t fit in memory addressing.
    #[error("the grid would contain too many cells ({nx}x{ny}x{nz})")]
    TooManyCells {
        /// Number of cells along `x`.
        nx: u32,
        /// Number of cells along `y`.
        ny: u32,
        /// Number of cells along `z`.
        nz: u32,
    },
}
