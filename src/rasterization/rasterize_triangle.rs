use super::split_polygon;
use crate::bounding_volume::Aabb;
use crate::grid::{CellIndex, VoxelGrid};
use crate::math::{Point, Real};
use na::Vector3;

impl VoxelGrid {
    /// Marks as solid every cell overlapped by the triangle `(a, b, c)`.
    ///
    /// A cell `(x, y, z)` is marked if the part of the triangle above the
    /// horizontal footprint of the column `(x, y)` has a vertical extent
    /// overlapping the cell’s vertical span (the uppermost cell of the extent
    /// excluded, and the uppermost layer of the grid is never marked).
    /// Triangles, or parts of triangles, outside of the grid are ignored.
    ///
    /// Rasterization never clears a cell, so the result of rasterizing a set of
    /// triangles doesn’t depend on their order.
    pub fn rasterize_triangle(&mut self, a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) {
        let bounds = *self.bounds();
        let (cell_size, cell_height, dims) = (self.cell_size(), self.cell_height(), self.dims());
        covered_cells(&bounds, cell_size, cell_height, dims, a, b, c, |cell| {
            self.set_occupied(cell, true)
        });
    }

    /// Calls `f` on every cell [`VoxelGrid::rasterize_triangle`] would mark as
    /// solid for the triangle `(a, b, c)`, without modifying the grid.
    ///
    /// Cells are reported column by column, each at most once.
    pub fn covered_cells(
        &self,
        a: &Point<Real>,
        b: &Point<Real>,
        c: &Point<Real>,
        f: impl FnMut(CellIndex),
    ) {
        covered_cells(
            self.bounds(),
            self.cell_size(),
            self.cell_height(),
            self.dims(),
            a,
            b,
            c,
            f,
        )
    }

    /// Rasterizes a batch of triangles, computing their coverage in parallel.
    ///
    /// The bit writes are applied serially once all the coverages are known
    /// (two triangles may cover cells stored in the same byte). The result is
    /// identical to calling [`VoxelGrid::rasterize_triangle`] on each triangle.
    #[cfg(feature = "parallel")]
    pub fn rasterize_triangles_par(&mut self, triangles: &[[Point<Real>; 3]]) {
        use alloc::vec::Vec;
        use rayon::prelude::*;

        let grid = &*self;
        let coverages: Vec<Vec<CellIndex>> = triangles
            .par_iter()
            .map(|tri| {
                let mut cells = Vec::new();
                grid.covered_cells(&tri[0], &tri[1], &tri[2], |cell| cells.push(cell));
                cells
            })
            .collect();

        for cell in coverages.into_iter().flatten() {
            self.set_occupied(cell, true);
        }
    }
}

/// The inclusive range of cells along one axis overlapped by `[min, max]`,
/// clamped to `[0, n - 1]`.
#[inline]
fn clamped_range(min: Real, max: Real, origin: Real, cell_dim: Real, n: i32) -> (i32, i32) {
    let i0 = ((min - origin) / cell_dim).floor() as i32;
    let i1 = ((max - origin) / cell_dim).ceil() as i32;
    (i0.clamp(0, n - 1), i1.clamp(0, n - 1))
}

fn covered_cells(
    bounds: &Aabb,
    cell_size: Real,
    cell_height: Real,
    dims: Vector3<u32>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    mut f: impl FnMut(CellIndex),
) {
    if dims.iter().any(|n| *n == 0) {
        return;
    }

    let tri_aabb = Aabb::from_points([*a, *b, *c]);
    if !tri_aabb.intersects(bounds) {
        return;
    }

    let [nx, ny, nz] = [dims.x as i32, dims.y as i32, dims.z as i32];
    let (y0, y1) = clamped_range(
        tri_aabb.mins.y,
        tri_aabb.maxs.y,
        bounds.mins.y,
        cell_size,
        ny,
    );

    // Discard whatever lies before the first row, then peel one row at a time.
    let row_start = bounds.mins.y + y0 as Real * cell_size;
    let (_, mut rest) = split_polygon(&[*a, *b, *c], 1, row_start);

    for y in y0..=y1 {
        let row_end = bounds.mins.y + (y + 1) as Real * cell_size;
        let (row, next_rest) = split_polygon(&rest, 1, row_end);
        rest = next_rest;

        if row.len() < 3 {
            continue;
        }

        let (min_x, max_x) = row
            .iter()
            .fold((Real::MAX, -Real::MAX), |(lo, hi), pt| (lo.min(pt.x), hi.max(pt.x)));
        let (x0, x1) = clamped_range(min_x, max_x, bounds.mins.x, cell_size, nx);

        let col_start = bounds.mins.x + x0 as Real * cell_size;
        let (_, mut row_rest) = split_polygon(&row, 0, col_start);

        for x in x0..=x1 {
            let col_end = bounds.mins.x + (x + 1) as Real * cell_size;
            let (cell_poly, next_row_rest) = split_polygon(&row_rest, 0, col_end);
            row_rest = next_row_rest;

            if cell_poly.len() < 3 {
                continue;
            }

            // Vertical span of the triangle within this column.
            let (smin, smax) = cell_poly
                .iter()
                .fold((Real::MAX, -Real::MAX), |(lo, hi), pt| (lo.min(pt.z), hi.max(pt.z)));

            if smax < bounds.mins.z || smin > bounds.maxs.z {
                continue;
            }

            let smin = smin.max(bounds.mins.z);
            let smax = smax.min(bounds.maxs.z);
            let (z_min, z_max) = clamped_range(smin, smax, bounds.mins.z, cell_height, nz);

            for z in z_min..z_max {
                f(CellIndex::new(x, y, z));
            }
        }
    }
}
