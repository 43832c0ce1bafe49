use crate::grid;
use navvox3d::grid::CellIndex;
use navvox3d::na::{Point2, Point3};
use navvox3d::rasterization::{RasterizationError, TriangleSoup};

fn strictly_inside(p: Point2<f32>, tri: [Point2<f32>; 3]) -> bool {
    let side = |a: Point2<f32>, b: Point2<f32>| {
        let ab = b - a;
        let ap = p - a;
        ab.x * ap.y - ab.y * ap.x
    };
    let s = [side(tri[0], tri[1]), side(tri[1], tri[2]), side(tri[2], tri[0])];
    s.iter().all(|s| *s > 1.0e-3) || s.iter().all(|s| *s < -1.0e-3)
}

#[test]
fn flat_triangle_covers_every_column_it_overlaps() {
    let mut grid = grid([100.0, 100.0, 40.0], 10.0, 10.0);
    let tri = [
        Point3::new(3.0, 7.0, 15.0),
        Point3::new(96.0, 31.0, 15.0),
        Point3::new(42.0, 88.0, 15.0),
    ];
    grid.rasterize_triangle(&tri[0], &tri[1], &tri[2]);

    let tri2 = tri.map(|p| p.xy());
    let aabb = navvox3d::bounding_volume::Aabb::from_points(tri);

    for x in 0..10 {
        for y in 0..10 {
            let cell = CellIndex::new(x, y, 1);
            let center = Point2::new(x as f32 * 10.0 + 5.0, y as f32 * 10.0 + 5.0);

            if strictly_inside(center, tri2) {
                assert!(grid.is_occupied(cell), "{:?} should be solid", cell);
            }

            if grid.is_occupied(cell) {
                let mins = grid.cell_mins(cell);
                assert!(mins.x <= aabb.maxs.x && mins.x + 10.0 >= aabb.mins.x);
                assert!(mins.y <= aabb.maxs.y && mins.y + 10.0 >= aabb.mins.y);
            }
        }
    }

    // Only the layer containing the triangle is touched.
    assert!(grid.occupied_cells().all(|cell| cell.z == 1));
}

#[test]
fn steep_triangle_fills_its_vertical_span() {
    let mut grid = grid([40.0, 40.0, 100.0], 10.0, 10.0);
    // Nearly vertical, within the column (1, 1), from z = 12 to z = 67.
    grid.rasterize_triangle(
        &Point3::new(12.0, 12.0, 12.0),
        &Point3::new(18.0, 12.0, 12.0),
        &Point3::new(15.0, 18.0, 67.0),
    );

    let cells: Vec<_> = grid.occupied_cells().collect();
    let expected: Vec<_> = (1..7).map(|z| CellIndex::new(1, 1, z)).collect();
    assert_eq!(cells, expected);
}

#[test]
fn top_layer_is_never_marked() {
    let mut grid = grid([20.0, 20.0, 30.0], 10.0, 10.0);
    grid.rasterize_triangle(
        &Point3::new(-5.0, -5.0, 25.0),
        &Point3::new(40.0, -5.0, 25.0),
        &Point3::new(-5.0, 40.0, 25.0),
    );
    assert_eq!(grid.num_occupied(), 0);

    grid.rasterize_triangle(
        &Point3::new(-5.0, -5.0, 15.0),
        &Point3::new(40.0, -5.0, 15.0),
        &Point3::new(-5.0, 40.0, 15.0),
    );
    assert_eq!(grid.num_occupied(), 4);
}

#[test]
fn soups_with_dangling_indices_leave_the_grid_untouched() {
    let mut grid = grid([20.0, 20.0, 20.0], 10.0, 10.0);
    let soup = TriangleSoup::new(
        vec![
            Point3::new(1.0, 1.0, 5.0),
            Point3::new(19.0, 1.0, 5.0),
            Point3::new(1.0, 19.0, 5.0),
        ],
        vec![0, 1, 2, 2, 1, 3],
    );

    assert_eq!(
        grid.rasterize_soup(&soup),
        Err(RasterizationError::IndexOutOfBounds {
            triangle: 1,
            index: 3,
            num_vertices: 3,
        })
    );
    assert_eq!(grid.num_occupied(), 0);
}

#[test]
fn world_and_cell_indices_round_trip() {
    let grid = grid([90.0, 60.0, 120.0], 15.0, 20.0);
    let dims = grid.dims();

    for x in 0..dims.x as i32 {
        for y in 0..dims.y as i32 {
            for z in 0..dims.z as i32 {
                let cell = CellIndex::new(x, y, z);
                assert_eq!(grid.world_to_cell(&grid.cell_mins(cell)), cell);
                let linear = grid.occupancy().linear_index(x as u32, y as u32, z as u32);
                assert_eq!(grid.occupancy().cell_coords(linear), [x as u32, y as u32, z as u32]);
            }
        }
    }
}
