use navvox3d::bounding_volume::Aabb;
use navvox3d::grid::VoxelGrid;
use navvox3d::na::Point3;

mod order_independence;
mod path_search;
mod rasterization_coverage;
mod voxel_space;

fn grid(maxs: [f32; 3], cell_size: f32, cell_height: f32) -> VoxelGrid {
    let bounds = Aabb::new(Point3::origin(), Point3::from(maxs));
    VoxelGrid::new(bounds, cell_size, cell_height).unwrap()
}

fn random_triangles(rng: &mut oorandom::Rand32, n: usize, extent: f32) -> Vec<[Point3<f32>; 3]> {
    // Triangles may stick out of the `[0, extent]` cube.
    let mut point = || {
        Point3::new(
            rng.rand_float() * extent * 1.2 - extent * 0.1,
            rng.rand_float() * extent * 1.2 - extent * 0.1,
            rng.rand_float() * extent * 1.2 - extent * 0.1,
        )
    };

    (0..n).map(|_| [point(), point(), point()]).collect()
}
