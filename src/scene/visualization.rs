use crate::grid::VoxelGrid;
use crate::pathfinding::GridPath;
use crate::scene::{Color, DebugRenderer};

/// Draws one [`Color::OCCUPIED`] box per solid cell of `grid`.
///
/// Returns the number of boxes drawn.
pub fn draw_occupied_cells<R>(grid: &VoxelGrid, renderer: &mut R) -> usize
where
    R: DebugRenderer + ?Sized,
{
    let mut num_boxes = 0;

    for cell in grid.occupied_cells() {
        let aabb = grid.cell_aabb(cell);
        renderer.draw_box(&aabb.center(), &aabb.half_extents(), Color::OCCUPIED);
        num_boxes += 1;
    }

    num_boxes
}

/// Draws `path` as a [`Color::PATH`] polyline (see [`GridPath::to_polyline`]).
pub fn draw_path<R>(grid: &VoxelGrid, path: &GridPath, renderer: &mut R)
where
    R: DebugRenderer + ?Sized,
{
    let polyline = path.to_polyline(grid);

    for segment in polyline.windows(2) {
        renderer.draw_line(&segment[0], &segment[1], Color::PATH);
    }
}
