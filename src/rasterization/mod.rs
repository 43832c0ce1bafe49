//! Exact rasterization of triangles into a [`VoxelGrid`](crate::grid::VoxelGrid).
//!
//! A triangle is sliced into rows along `y`, each row into cells along `x`,
//! by exact half-space splits. The vertical extent of the polygon left in each
//! cell column gives the range of cells marked as solid. No sampling is
//! involved: a cell is solid as soon as the triangle overlaps its column
//! within its vertical span.

pub use self::split_polygon::{split_polygon, ClipPolygon, MAX_POLYGON_VERTICES};
pub use self::triangle_soup::{RasterizationError, TriangleSoup};

mod rasterize_triangle;
mod split_polygon;
mod triangle_soup;
