use crate::{grid, random_triangles};

fn shuffle<T>(rng: &mut oorandom::Rand32, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.rand_range(0..i as u32 + 1) as usize;
        items.swap(i, j);
    }
}

#[test]
fn rasterization_is_independent_of_triangle_order() {
    let mut rng = oorandom::Rand32::new(42);
    let mut triangles = random_triangles(&mut rng, 60, 100.0);

    let mut reference = grid([100.0, 100.0, 100.0], 7.0, 9.0);
    for [a, b, c] in &triangles {
        reference.rasterize_triangle(a, b, c);
    }
    assert!(reference.num_occupied() > 0);

    for _ in 0..5 {
        shuffle(&mut rng, &mut triangles);

        let mut shuffled = grid([100.0, 100.0, 100.0], 7.0, 9.0);
        for [a, b, c] in &triangles {
            shuffled.rasterize_triangle(a, b, c);
        }

        assert_eq!(shuffled, reference);
    }
}

#[test]
fn rasterization_is_monotonic() {
    let mut rng = oorandom::Rand32::new(7);
    let triangles = random_triangles(&mut rng, 40, 50.0);
    let mut grid = grid([50.0, 50.0, 50.0], 5.0, 5.0);

    for [a, b, c] in &triangles {
        let before: Vec<_> = grid.occupied_cells().collect();
        grid.rasterize_triangle(a, b, c);
        assert!(before.iter().all(|cell| grid.is_occupied(*cell)));
    }
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_rasterization_matches_serial() {
    let mut rng = oorandom::Rand32::new(1234);
    let triangles = random_triangles(&mut rng, 200, 100.0);

    let mut serial = grid([100.0, 100.0, 100.0], 5.0, 5.0);
    for [a, b, c] in &triangles {
        serial.rasterize_triangle(a, b, c);
    }

    let mut parallel = grid([100.0, 100.0, 100.0], 5.0, 5.0);
    parallel.rasterize_triangles_par(&triangles);

    assert_eq!(parallel, serial);
}
