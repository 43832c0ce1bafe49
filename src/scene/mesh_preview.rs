use crate::grid::VoxelGrid;
use crate::math::{Point, Real, Vector};
use crate::scene::{Color, GeometryProvider, MeshPreviewConfig, NavConfigSource, VoxelSpaceError};
use alloc::vec::Vec;
use core::time::Duration;
use std::time::Instant;

/// A triangle mesh made of one box per solid cell of a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewMesh {
    /// The vertex buffer, eight vertices per box.
    pub vertices: Vec<Point<Real>>,
    /// The index buffer, twelve counter-clockwise triangles per box.
    pub indices: Vec<[u32; 3]>,
    /// The suggested display color.
    pub color: Color,
}

impl PreviewMesh {
    /// Builds the preview of every solid cell of `grid`, each box being
    /// shrunk horizontally by `inset` on each side.
    pub fn from_grid(grid: &VoxelGrid, inset: Real) -> Self {
        let (vertices, indices) = grid.to_trimesh_shrunk(Vector::new(inset, inset, 0.0));
        Self {
            vertices,
            indices,
            color: Color::PREVIEW,
        }
    }

    /// The number of boxes of this mesh.
    pub fn num_boxes(&self) -> usize {
        self.vertices.len() / 8
    }
}

/// Voxelizes a single object over its own bounds, to inspect how it is seen
/// by the rasterizer.
#[derive(Clone, Debug)]
pub struct MeshPreview<O> {
    /// The configuration used by the next preview.
    pub config: MeshPreviewConfig,
    /// The previewed object.
    pub target: Option<O>,
    build_time: Option<Duration>,
    grid: Option<VoxelGrid>,
}

impl<O> Default for MeshPreview<O> {
    fn default() -> Self {
        Self::new(MeshPreviewConfig::default())
    }
}

impl<O> MeshPreview<O> {
    /// Creates a preview tool without target.
    pub fn new(config: MeshPreviewConfig) -> Self {
        Self {
            config,
            target: None,
            build_time: None,
            grid: None,
        }
    }

    /// Sets the previewed object.
    pub fn with_target(mut self, target: O) -> Self {
        self.target = Some(target);
        self
    }

    /// The time taken by the last successful grid build.
    pub fn build_time(&self) -> Option<Duration> {
        self.build_time
    }

    /// The grid built by the last successful preview.
    pub fn grid(&self) -> Option<&VoxelGrid> {
        self.grid.as_ref()
    }

    /// Voxelizes the target object and returns its solid cells as a mesh.
    ///
    /// If `nav_config` is given, the cell dimensions of the host’s navigation
    /// system replace the configured ones (see
    /// [`MeshPreviewConfig::with_nav_config`]). They are stored in
    /// `self.config` only if the preview succeeds. The grid covers the bounds
    /// of the target object, enlarged by the configured padding.
    pub fn compute<G>(
        &mut self,
        geometry: &G,
        nav_config: Option<&dyn NavConfigSource>,
    ) -> Result<PreviewMesh, VoxelSpaceError>
    where
        G: GeometryProvider<O> + ?Sized,
    {
        let config = match nav_config {
            Some(source) => self.config.with_nav_config(source),
            None => self.config,
        };
        config.validate()?;

        let target = self.target.as_ref().ok_or(VoxelSpaceError::MissingTarget)?;
        let soup = geometry
            .export_triangles(target)
            .filter(|soup| !soup.vertices.is_empty())
            .ok_or(VoxelSpaceError::NoGeometry)?;
        soup.validate()?;

        let bounds = geometry
            .object_bounds(target)
            .unwrap_or_else(|| soup.aabb())
            .loosened(config.padding);

        let timer = Instant::now();
        let mut grid = VoxelGrid::new(bounds, config.cell_size, config.cell_height)?;
        let num_triangles = grid.rasterize_soup(&soup)?;
        let build_time = timer.elapsed();

        log::debug!(
            "Previewed {} triangles as {} solid cells in {:?}.",
            num_triangles,
            grid.num_occupied(),
            build_time
        );

        let mesh = PreviewMesh::from_grid(&grid, config.box_inset);
        self.config = config;
        self.build_time = Some(build_time);
        self.grid = Some(grid);

        Ok(mesh)
    }
}
