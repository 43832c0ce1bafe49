use crate::math::{Point, Real};
use arrayvec::ArrayVec;

/// The maximum number of vertices of a polygon produced while rasterizing a triangle.
///
/// Splitting a convex polygon by a plane adds at most one vertex to each piece. A
/// triangle cut by two planes orthogonal to `y` then by two planes orthogonal to `x`
/// thus never has more than `3 + 4 = 7` vertices.
pub const MAX_POLYGON_VERTICES: usize = 7;

static_assertions::const_assert!(MAX_POLYGON_VERTICES >= 3 + 4);

/// A polygon stored inline, used by the triangle rasterizer.
pub type ClipPolygon = ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>;

/// Splits a convex polygon by the plane orthogonal to the `axis`-th coordinate axis
/// and passing through `threshold` on that axis.
///
/// Returns the piece lying on the `point[axis] <= threshold` side, followed by the
/// piece lying on the `point[axis] >= threshold` side. Either may have less than
/// three vertices (or none) if the polygon doesn’t cross the plane.
///
/// Edges crossing the plane contribute their intersection point to both pieces
/// (with its `axis` coordinate set exactly to `threshold`), and vertices lying
/// exactly on the plane are kept by both pieces, so adjacent pieces share their
/// boundary exactly.
///
/// # Panics
/// Panics if one of the pieces has more than [`MAX_POLYGON_VERTICES`] vertices. This
/// can only happen if `polygon` isn’t convex or already has
/// [`MAX_POLYGON_VERTICES`] vertices.
pub fn split_polygon(
    polygon: &[Point<Real>],
    axis: usize,
    threshold: Real,
) -> (ClipPolygon, ClipPolygon) {
    let mut below = ClipPolygon::new();
    let mut above = ClipPolygon::new();

    let Some(last_pt) = polygon.last() else {
        return (below, above);
    };

    let mut prev_pt = last_pt;
    let mut prev_dist = last_pt[axis] - threshold;

    for pt in polygon {
        let dist = pt[axis] - threshold;

        if (prev_dist < 0.0 && dist > 0.0) || (prev_dist > 0.0 && dist < 0.0) {
            // We crossed the plane, so we need to cut the edge.
            let t = prev_dist / (prev_dist - dist);
            let mut cut = prev_pt + (pt - prev_pt) * t;
            // Keep the cut on the edge despite rounding errors.
            cut = cut.sup(&prev_pt.inf(pt)).inf(&prev_pt.sup(pt));
            cut[axis] = threshold;
            push_vertex(&mut below, cut);
            push_vertex(&mut above, cut);
        }

        if dist <= 0.0 {
            push_vertex(&mut below, *pt);
        }

        if dist >= 0.0 {
            push_vertex(&mut above, *pt);
        }

        prev_pt = pt;
        prev_dist = dist;
    }

    (below, above)
}

#[inline]
fn push_vertex(polygon: &mut ClipPolygon, pt: Point<Real>) {
    assert!(
        !polygon.is_full(),
        "Clipped polygon exceeds {} vertices.",
        MAX_POLYGON_VERTICES
    );
    polygon.push(pt);
}
