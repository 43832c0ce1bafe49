use crate::math::Real;
use crate::pathfinding::GoalAcceptance;
use crate::scene::NavConfigSource;

/// Error indicating that a configuration can’t be used to build a grid.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The horizontal cell size isn’t strictly positive and finite.
    #[error("invalid cell size: {0}")]
    InvalidCellSize(Real),
    /// The vertical cell height isn’t strictly positive and finite.
    #[error("invalid cell height: {0}")]
    InvalidCellHeight(Real),
    /// The padding around a previewed mesh is negative or not finite.
    #[error("invalid padding: {0}")]
    InvalidPadding(Real),
}

fn check_cell_dimensions(cell_size: Real, cell_height: Real) -> Result<(), ConfigError> {
    if !(cell_size > 0.0 && cell_size.is_finite()) {
        return Err(ConfigError::InvalidCellSize(cell_size));
    }

    if !(cell_height > 0.0 && cell_height.is_finite()) {
        return Err(ConfigError::InvalidCellHeight(cell_height));
    }

    Ok(())
}

/// Configuration of a [`VoxelSpace`](crate::scene::VoxelSpace).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VoxelSpaceConfig {
    /// The size of the cells along `x` and `y`.
    pub cell_size: Real,
    /// The size of the cells along `z`.
    pub cell_height: Real,
    /// When path searches accept the end cell.
    pub goal_acceptance: GoalAcceptance,
}

impl Default for VoxelSpaceConfig {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            cell_height: 50.0,
            goal_acceptance: GoalAcceptance::OnGeneration,
        }
    }
}

impl VoxelSpaceConfig {
    /// Checks that this configuration can be used to build a grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_cell_dimensions(self.cell_size, self.cell_height)
    }
}

/// Configuration of a [`MeshPreview`](crate::scene::MeshPreview).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MeshPreviewConfig {
    /// The size of the cells along `x` and `y`.
    pub cell_size: Real,
    /// The size of the cells along `z`.
    pub cell_height: Real,
    /// The distance added on every side of the previewed mesh bounds.
    pub padding: Real,
    /// The horizontal gap left between each preview box and its cell
    /// boundary.
    pub box_inset: Real,
}

impl Default for MeshPreviewConfig {
    fn default() -> Self {
        Self {
            cell_size: 25.0,
            cell_height: 50.0,
            padding: 10.0,
            box_inset: 2.0,
        }
    }
}

impl MeshPreviewConfig {
    /// Checks that this configuration can be used to build a grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_cell_dimensions(self.cell_size, self.cell_height)?;

        if !(self.padding >= 0.0 && self.padding.is_finite()) {
            return Err(ConfigError::InvalidPadding(self.padding));
        }

        Ok(())
    }

    /// This configuration with its cell dimensions replaced by the ones of the
    /// host’s navigation system.
    ///
    /// The configuration is returned unchanged if the host has no navigation
    /// system configured, or if its cell dimensions are invalid.
    pub fn with_nav_config(mut self, source: &(impl NavConfigSource + ?Sized)) -> Self {
        match source.cell_dimensions() {
            Some((cell_size, cell_height)) => {
                if check_cell_dimensions(cell_size, cell_height).is_ok() {
                    self.cell_size = cell_size;
                    self.cell_height = cell_height;
                } else {
                    log::warn!(
                        "Ignoring invalid navigation cell dimensions ({}, {}).",
                        cell_size,
                        cell_height
                    );
                }
            }
            None => log::debug!("No navigation configuration, keeping the preview cell dimensions."),
        }

        self
    }
}
