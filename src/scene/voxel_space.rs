use crate::bounding_volume::Aabb;
use crate::grid::{VoxelGrid, VoxelGridError};
use crate::pathfinding::{GridPath, GridPathfinder, PathSearchError};
use crate::rasterization::RasterizationError;
use crate::scene::{
    draw_occupied_cells, draw_path, ConfigError, DebugRenderer, GeometryProvider, SceneEnumerator,
    VoxelSpaceConfig,
};
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;
use std::time::Instant;

/// One of the two objects marking the endpoints of a path search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    /// The object marking the start of the path.
    Start,
    /// The object marking the end of the path.
    End,
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProbeKind::Start => write!(f, "start"),
            ProbeKind::End => write!(f, "end"),
        }
    }
}

/// Errors of the scene-level operations.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum VoxelSpaceError {
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The grid can’t be created over the requested region.
    #[error(transparent)]
    Grid(#[from] VoxelGridError),
    /// The geometry of an object is malformed.
    #[error(transparent)]
    Rasterization(#[from] RasterizationError),
    /// No path could be found.
    #[error(transparent)]
    PathSearch(#[from] PathSearchError),
    /// A probe object isn’t set or no longer exists in the scene.
    #[error("the {0} probe object is missing")]
    MissingProbeObject(ProbeKind),
    /// A path was requested before any grid was built.
    #[error("no voxel grid was built yet")]
    NoGrid,
    /// A mesh preview was requested without a target object.
    #[error("no target object to preview")]
    MissingTarget,
    /// The previewed object has no geometry.
    #[error("the target object has no geometry")]
    NoGeometry,
}

/// Statistics of a [`VoxelSpace::voxelize_in_box`] run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VoxelizeReport {
    /// The number of objects whose geometry was rasterized.
    pub num_objects: usize,
    /// The number of triangles rasterized.
    pub num_triangles: usize,
    /// The number of solid cells of the resulting grid.
    pub num_occupied: usize,
    /// The time taken to build the grid.
    pub elapsed: Duration,
}

/// A region of the host’s world that can be voxelized and searched for paths.
///
/// `O` is the host’s handle to one of its objects. The start and end probe
/// objects mark the endpoints of path searches, and are never voxelized.
#[derive(Clone, Debug)]
pub struct VoxelSpace<O> {
    /// The configuration used by the next voxelization and path search.
    pub config: VoxelSpaceConfig,
    /// The voxelized region.
    pub region: Aabb,
    /// The object marking the start of the path.
    pub start: Option<O>,
    /// The object marking the end of the path.
    pub end: Option<O>,
    grid: Option<VoxelGrid>,
}

impl<O: Clone + PartialEq> VoxelSpace<O> {
    /// Creates a voxel space covering `region`, without probe objects.
    pub fn new(region: Aabb, config: VoxelSpaceConfig) -> Self {
        Self {
            config,
            region,
            start: None,
            end: None,
            grid: None,
        }
    }

    /// Sets the probe objects marking the endpoints of path searches.
    pub fn with_probes(mut self, start: O, end: O) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// The grid built by the last successful [`VoxelSpace::voxelize_in_box`].
    pub fn grid(&self) -> Option<&VoxelGrid> {
        self.grid.as_ref()
    }

    fn is_probe(&self, object: &O) -> bool {
        self.start.as_ref() == Some(object) || self.end.as_ref() == Some(object)
    }

    /// Rebuilds the grid from the geometry of every object overlapping the
    /// region, then draws its solid cells.
    ///
    /// The previous grid is replaced only once the new one is complete: on
    /// error, it is left untouched.
    pub fn voxelize_in_box<S, G, R>(
        &mut self,
        scene: &S,
        geometry: &G,
        renderer: &mut R,
    ) -> Result<VoxelizeReport, VoxelSpaceError>
    where
        S: SceneEnumerator<O> + ?Sized,
        G: GeometryProvider<O> + ?Sized,
        R: DebugRenderer + ?Sized,
    {
        self.config.validate()?;

        let timer = Instant::now();
        let mut grid = VoxelGrid::new(self.region, self.config.cell_size, self.config.cell_height)?;
        let mut report = VoxelizeReport::default();

        let probes: Vec<O> = self.start.iter().chain(self.end.iter()).cloned().collect();

        for object in scene.relevant_objects(&self.region, &probes) {
            if self.is_probe(&object) {
                log::trace!("Skipping a probe object.");
                continue;
            }

            let overlaps = geometry
                .object_bounds(&object)
                .is_some_and(|bounds| bounds.intersects(&self.region));
            if !overlaps {
                log::trace!("Skipping an object outside of the voxelized region.");
                continue;
            }

            let Some(soup) = geometry
                .export_triangles(&object)
                .filter(|soup| !soup.vertices.is_empty())
            else {
                log::trace!("Skipping an object without geometry.");
                continue;
            };

            report.num_triangles += grid.rasterize_soup(&soup)?;
            report.num_objects += 1;
        }

        report.num_occupied = grid.num_occupied();
        report.elapsed = timer.elapsed();

        renderer.flush();
        let num_boxes = draw_occupied_cells(&grid, renderer);

        let dims = grid.dims();
        log::debug!(
            "Voxelized {} triangles from {} objects into {}x{}x{} cells ({} solid, {} drawn) in {:?}.",
            report.num_triangles,
            report.num_objects,
            dims.x,
            dims.y,
            dims.z,
            report.num_occupied,
            num_boxes,
            report.elapsed
        );
        self.grid = Some(grid);

        Ok(report)
    }

    /// Searches a path between the probe objects through the last built grid,
    /// then draws it.
    pub fn find_path<S, R>(&self, scene: &S, renderer: &mut R) -> Result<GridPath, VoxelSpaceError>
    where
        S: SceneEnumerator<O> + ?Sized,
        R: DebugRenderer + ?Sized,
    {
        let locate = |object: Option<&O>, kind| {
            object
                .and_then(|object| scene.location(object))
                .ok_or(VoxelSpaceError::MissingProbeObject(kind))
        };

        let start = locate(self.start.as_ref(), ProbeKind::Start);
        let end = locate(self.end.as_ref(), ProbeKind::End);
        let (start, end) = match (start, end) {
            (Ok(start), Ok(end)) => (start, end),
            (Err(err), _) | (_, Err(err)) => {
                log::warn!("Path search skipped: {}.", err);
                return Err(err);
            }
        };

        let grid = self.grid.as_ref().ok_or(VoxelSpaceError::NoGrid)?;
        let path = GridPathfinder::new(grid)
            .with_goal_acceptance(self.config.goal_acceptance)
            .find_path(&start, &end)?;

        log::debug!("Found a path of {} cells.", path.len());
        draw_path(grid, &path, renderer);

        Ok(path)
    }
}
