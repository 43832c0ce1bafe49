use crate::grid;
use navvox3d::grid::{CellIndex, VoxelGrid};
use navvox3d::na::{Point3, Vector3};
use navvox3d::pathfinding::{GoalAcceptance, GridPathfinder, PathSearchError};
use std::collections::{HashMap, VecDeque};

// Columns of random height between 1 and 3 cells.
fn random_terrain(rng: &mut oorandom::Rand32) -> (VoxelGrid, Vec<Vec<i32>>) {
    let mut grid = grid([12.0, 12.0, 6.0], 1.0, 1.0);
    let heights: Vec<Vec<i32>> = (0..12)
        .map(|_| (0..12).map(|_| rng.rand_range(1..4) as i32).collect())
        .collect();

    for (x, column) in heights.iter().enumerate() {
        for (y, h) in column.iter().enumerate() {
            for z in 0..*h {
                grid.set_occupied(CellIndex::new(x as i32, y as i32, z), true);
            }
        }
    }

    (grid, heights)
}

// Hop distances from `start` to every reachable stayable cell.
fn reference_distances(grid: &VoxelGrid, start: CellIndex) -> HashMap<CellIndex, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    let _ = dist.insert(start, 0);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        let d = dist[&cell];
        for dir in [
            Vector3::x(),
            -Vector3::x(),
            Vector3::y(),
            -Vector3::y(),
            Vector3::z(),
            -Vector3::z(),
        ] {
            let next = cell + dir;
            if grid.is_stayable(next) && !dist.contains_key(&next) {
                let _ = dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }

    dist
}

#[test]
fn paths_have_the_fewest_hops() {
    let mut rng = oorandom::Rand32::new(2024);

    for _ in 0..5 {
        let (grid, heights) = random_terrain(&mut rng);
        let ground = |x: usize, y: usize| CellIndex::new(x as i32, y as i32, heights[x][y]);

        for _ in 0..20 {
            let mut pick = || ground(rng.rand_range(0..12) as usize, rng.rand_range(0..12) as usize);
            let (start, end) = (pick(), pick());
            let reference = reference_distances(&grid, start);

            for policy in [GoalAcceptance::OnGeneration, GoalAcceptance::Validated] {
                let result = GridPathfinder::new(&grid)
                    .with_goal_acceptance(policy)
                    .find_path_between_cells(start, end);

                match reference.get(&end) {
                    Some(hops) => {
                        let path = result.unwrap();
                        assert_eq!(path.num_hops(), *hops);
                        assert_eq!(path.start(), start);
                        assert_eq!(path.end(), end);
                        assert!(path.is_contiguous());
                        assert!(path.cells()[1..].iter().all(|cell| grid.is_stayable(*cell)));
                    }
                    None => assert_eq!(result, Err(PathSearchError::Unreachable { start, end })),
                }
            }
        }
    }
}

#[test]
fn path_climbs_a_staircase() {
    // Steps of one cell every two cells along x.
    let mut grid = grid([8.0, 1.0, 6.0], 1.0, 1.0);
    for x in 0..8 {
        for z in 0..=x / 2 {
            grid.set_occupied(CellIndex::new(x, 0, z), true);
        }
    }

    let path = GridPathfinder::new(&grid)
        .find_path(&Point3::new(0.0, 0.0, 1.0), &Point3::new(7.0, 0.0, 4.0))
        .unwrap();

    assert_eq!(path.start(), CellIndex::new(0, 0, 1));
    assert_eq!(path.end(), CellIndex::new(7, 0, 4));
    assert_eq!(path.num_hops(), 7 + 3);
    assert!(path.is_contiguous());
    assert!(path.cells().windows(2).all(|w| w[1].z >= w[0].z));
}

#[test]
fn probes_on_the_grid_boundary_are_rejected() {
    let mut grid = grid([4.0, 4.0, 3.0], 1.0, 1.0);
    for x in 0..4 {
        for y in 0..4 {
            grid.set_occupied(CellIndex::new(x, y, 0), true);
        }
    }
    let finder = GridPathfinder::new(&grid);
    let inside = Point3::new(1.0, 1.0, 1.0);

    // x = 3.6 rounds to the cell x = 4, outside of the grid.
    assert_eq!(
        finder.find_path(&Point3::new(3.6, 1.0, 1.0), &inside),
        Err(PathSearchError::StartNotGrounded)
    );
    assert_eq!(
        finder.find_path(&inside, &Point3::new(1.0, -0.6, 1.0)),
        Err(PathSearchError::EndNotGrounded)
    );
    assert!(finder
        .find_path(&Point3::new(3.4, 1.0, 1.0), &inside)
        .is_ok());
}
