//! Integration of the voxel grid and the pathfinder into a host application.
//!
//! The host (an editor, a game engine, a test harness) exposes its world
//! through a few narrow traits: [`SceneEnumerator`] to list the objects
//! overlapping a region, [`GeometryProvider`] to export their triangles,
//! [`DebugRenderer`] to display results, and optionally [`NavConfigSource`]
//! to share the cell dimensions of its navigation system. None of them has
//! any influence on the grid or the paths computed.

pub use self::collaborators::{DebugRenderer, GeometryProvider, NavConfigSource, SceneEnumerator};
pub use self::color::Color;
pub use self::config::{ConfigError, MeshPreviewConfig, VoxelSpaceConfig};
pub use self::mesh_preview::{MeshPreview, PreviewMesh};
pub use self::visualization::{draw_occupied_cells, draw_path};
pub use self::voxel_space::{ProbeKind, VoxelSpace, VoxelSpaceError, VoxelizeReport};

mod collaborators;
mod color;
mod config;
mod mesh_preview;
mod visualization;
mod voxel_space;
