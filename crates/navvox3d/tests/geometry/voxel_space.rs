use navvox3d::bounding_volume::Aabb;
use navvox3d::grid::CellIndex;
use navvox3d::na::{Point3, Vector3};
use navvox3d::pathfinding::PathSearchError;
use navvox3d::rasterization::TriangleSoup;
use navvox3d::scene::{
    Color, DebugRenderer, GeometryProvider, SceneEnumerator, VoxelSpace, VoxelSpaceConfig,
    VoxelSpaceError,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Object {
    Floor,
    Wall,
    Start,
    End,
}

// A 100x50 room with a wall at x = 55 leaving a 10-unit door at y in [40, 50].
struct Room {
    start: Point3<f32>,
    end: Point3<f32>,
}

fn quad(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>, d: Point3<f32>) -> TriangleSoup {
    TriangleSoup::new(vec![a, b, c, d], vec![0, 1, 2, 0, 2, 3])
}

impl SceneEnumerator<Object> for Room {
    fn relevant_objects(&self, _: &Aabb, exclude: &[Object]) -> Vec<Object> {
        [Object::Floor, Object::Wall, Object::Start, Object::End]
            .into_iter()
            .filter(|obj| !exclude.contains(obj))
            .collect()
    }

    fn location(&self, object: &Object) -> Option<Point3<f32>> {
        match object {
            Object::Start => Some(self.start),
            Object::End => Some(self.end),
            _ => None,
        }
    }
}

impl GeometryProvider<Object> for Room {
    fn export_triangles(&self, object: &Object) -> Option<TriangleSoup> {
        match object {
            Object::Floor => Some(quad(
                Point3::new(0.0, 0.0, 5.0),
                Point3::new(100.0, 0.0, 5.0),
                Point3::new(100.0, 50.0, 5.0),
                Point3::new(0.0, 50.0, 5.0),
            )),
            Object::Wall => Some(quad(
                Point3::new(55.0, 0.0, 0.0),
                Point3::new(55.0, 40.0, 0.0),
                Point3::new(55.0, 40.0, 60.0),
                Point3::new(55.0, 0.0, 60.0),
            )),
            Object::Start | Object::End => None,
        }
    }
}

#[derive(Default)]
struct Counter {
    boxes: usize,
    lines: Vec<(Point3<f32>, Point3<f32>)>,
}

impl DebugRenderer for Counter {
    fn draw_box(&mut self, _: &Point3<f32>, _: &Vector3<f32>, color: Color) {
        assert_eq!(color, Color::OCCUPIED);
        self.boxes += 1;
    }

    fn draw_line(&mut self, a: &Point3<f32>, b: &Point3<f32>, color: Color) {
        assert_eq!(color, Color::PATH);
        self.lines.push((*a, *b));
    }
}

fn room_space() -> VoxelSpace<Object> {
    let region = Aabb::new(Point3::origin(), Point3::new(100.0, 50.0, 60.0));
    let config = VoxelSpaceConfig {
        cell_size: 10.0,
        cell_height: 10.0,
        ..VoxelSpaceConfig::default()
    };
    VoxelSpace::new(region, config).with_probes(Object::Start, Object::End)
}

#[test]
fn path_goes_through_the_door() {
    let room = Room {
        start: Point3::new(10.0, 30.0, 10.0),
        end: Point3::new(80.0, 30.0, 10.0),
    };
    let mut renderer = Counter::default();
    let mut space = room_space();

    let report = space.voxelize_in_box(&room, &room, &mut renderer).unwrap();
    assert_eq!(report.num_objects, 2);
    assert_eq!(report.num_triangles, 4);
    // The floor layer, plus five layers of wall above four rows, minus their overlap.
    assert_eq!(report.num_occupied, 50 + 20 - 4);
    assert_eq!(renderer.boxes, report.num_occupied);

    let grid = space.grid().unwrap();
    assert!(grid.is_occupied(CellIndex::new(5, 3, 4)));
    assert!(!grid.is_occupied(CellIndex::new(5, 4, 1)));
    assert!(!grid.is_occupied(CellIndex::new(5, 0, 5)));

    let path = space.find_path(&room, &mut renderer).unwrap();
    assert_eq!(path.start(), CellIndex::new(1, 3, 1));
    assert_eq!(path.end(), CellIndex::new(8, 3, 1));
    assert_eq!(path.num_hops(), 1 + 7 + 1);
    assert!(path.cells().contains(&CellIndex::new(5, 4, 1)));
    assert_eq!(renderer.lines.len(), path.num_hops());
    assert!(renderer.lines.windows(2).all(|w| w[0].1 == w[1].0));
}

#[test]
fn probe_inside_the_wall_fails() {
    let room = Room {
        start: Point3::new(10.0, 30.0, 10.0),
        end: Point3::new(50.0, 10.0, 20.0),
    };
    let mut renderer = Counter::default();
    let mut space = room_space();

    let _ = space.voxelize_in_box(&room, &room, &mut renderer).unwrap();
    assert_eq!(
        space.find_path(&room, &mut renderer),
        Err(VoxelSpaceError::PathSearch(PathSearchError::EndNotGrounded))
    );
    assert!(renderer.lines.is_empty());
}
