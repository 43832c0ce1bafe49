/*!
navvox
========

**navvox** rasterizes triangle meshes into a dense voxel occupancy grid and
searches that grid for a walkable route between two probe points.

The typical flow is:

1. build a [`grid::VoxelGrid`] over a region of interest,
2. rasterize every relevant triangle into it (see [`rasterization`]),
3. run a [`pathfinding::GridPathfinder`] between two world-space positions.

The [`scene`] module wraps these steps behind the narrow collaborator traits a
host application (editor, game engine, test harness) implements.

```
# #[cfg(feature = "f32")] {
use navvox3d::bounding_volume::Aabb;
use navvox3d::grid::VoxelGrid;
use navvox3d::na::Point3;
use navvox3d::pathfinding::GridPathfinder;

let bounds = Aabb::new(Point3::origin(), Point3::new(100.0, 100.0, 100.0));
let mut grid = VoxelGrid::new(bounds, 10.0, 10.0).unwrap();

// A floor made of two triangles, 5 units above the bottom of the grid.
let (a, b, c, d) = (
    Point3::new(0.0, 0.0, 5.0),
    Point3::new(100.0, 0.0, 5.0),
    Point3::new(100.0, 100.0, 5.0),
    Point3::new(0.0, 100.0, 5.0),
);
grid.rasterize_triangle(&a, &b, &c);
grid.rasterize_triangle(&a, &c, &d);

let path = GridPathfinder::new(&grid)
    .find_path(&Point3::new(10.0, 10.0, 12.0), &Point3::new(90.0, 10.0, 12.0))
    .unwrap();
assert_eq!(path.num_hops(), 8);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

extern crate alloc;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod grid;
pub mod pathfinding;
pub mod rasterization;
pub mod scene;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
