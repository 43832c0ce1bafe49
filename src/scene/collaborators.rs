use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::rasterization::TriangleSoup;
use crate::scene::Color;
use alloc::vec::Vec;

/// Exports the collision geometry of the host’s objects.
///
/// `O` is the host’s handle to one of its objects.
pub trait GeometryProvider<O> {
    /// The world-space triangles of `object`.
    ///
    /// Returns `None` if the object has no geometry relevant to navigation.
    fn export_triangles(&self, object: &O) -> Option<TriangleSoup>;

    /// The world-space bounds of `object`, used to skip objects far from the
    /// voxelized region without exporting their geometry.
    ///
    /// Defaults to the bounding box of the exported triangles.
    fn object_bounds(&self, object: &O) -> Option<Aabb> {
        self.export_triangles(object)
            .filter(|soup| !soup.vertices.is_empty())
            .map(|soup| soup.aabb())
    }
}

/// Lists the host’s objects.
pub trait SceneEnumerator<O> {
    /// The objects that may overlap `region`, except the ones listed in
    /// `exclude`.
    ///
    /// Returning objects that don’t overlap `region`, or that are in
    /// `exclude`, is allowed: they are filtered out afterwards.
    fn relevant_objects(&self, region: &Aabb, exclude: &[O]) -> Vec<O>;

    /// The world-space location of `object`, or `None` if it no longer exists.
    fn location(&self, object: &O) -> Option<Point<Real>>;
}

/// Displays debug shapes.
pub trait DebugRenderer {
    /// Removes everything previously drawn by this renderer.
    fn flush(&mut self) {}

    /// Draws the wireframe of a box.
    fn draw_box(&mut self, center: &Point<Real>, half_extents: &Vector<Real>, color: Color);

    /// Draws a line segment.
    fn draw_line(&mut self, a: &Point<Real>, b: &Point<Real>, color: Color);
}

/// Provides the cell dimensions used by the host’s navigation system.
pub trait NavConfigSource {
    /// The horizontal cell size and the vertical cell height, if the host has a
    /// navigation system configured.
    fn cell_dimensions(&self) -> Option<(Real, Real)>;
}
