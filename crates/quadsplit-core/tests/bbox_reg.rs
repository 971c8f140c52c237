//! Bounding box regression test
//!
//! Checks the partition produced by `split` against random points,
//! repeated subdivision, and the integer truncation used for grid boxes.

use quadsplit_core::{BoundingBox, Point, Quadrant};
use quadsplit_test::RegParams;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn random_point_in(rng: &mut StdRng, bbox: &BoundingBox) -> Point {
    let x = bbox.lx() + rng.random::<f64>() * bbox.width();
    let y = bbox.by() + rng.random::<f64>() * bbox.height();
    Point::bare(x, y)
}

#[test]
fn bbox_split_partition() {
    let mut rp = RegParams::new("bbox_partition");
    let mut rng = StdRng::seed_from_u64(17);

    let boxes = [
        BoundingBox::new(0.0, 4.0, 4.0, 0.0).unwrap(),
        BoundingBox::new(-10.0, 10.0, 3.0, -7.0).unwrap(),
        BoundingBox::new(0.25, 0.75, 1.5, 0.5).unwrap(),
    ];

    for bbox in &boxes {
        let tiles = bbox.split();
        let total: f64 = tiles.iter().map(BoundingBox::area).sum();
        rp.compare_values(bbox.area(), total, 1e-9);

        let mut misplaced = 0;
        for _ in 0..1000 {
            let p = random_point_in(&mut rng, bbox);
            let owners = tiles.iter().filter(|t| t.contains(&p)).count();
            if owners != 1 {
                misplaced += 1;
            }
        }
        rp.compare_values(0.0, misplaced as f64, 0.0);
    }

    // Points on the split lines belong to the east or north side
    let bbox = BoundingBox::new(0.0, 4.0, 4.0, 0.0).unwrap();
    let tiles = bbox.split();
    rp.check(tiles.get(Quadrant::Ne).contains(&Point::bare(2.0, 2.0)), "center in NE");
    rp.check(tiles.get(Quadrant::Nw).contains(&Point::bare(1.0, 2.0)), "west edge in NW");
    rp.check(tiles.get(Quadrant::Se).contains(&Point::bare(2.0, 1.0)), "south edge in SE");
    rp.check(tiles.get(Quadrant::Sw).contains(&Point::bare(0.0, 0.0)), "origin in SW");

    assert!(rp.cleanup(), "bbox partition test failed");
}

#[test]
fn bbox_repeated_split() {
    let mut rp = RegParams::new("bbox_nested");

    let mut current = BoundingBox::new(0.0, 1024.0, 512.0, 0.0).unwrap();
    for level in 0..8 {
        let tiles = current.split();
        for tile in tiles.iter() {
            rp.check(tile.is_valid(), "tile is valid");
            rp.check(tile.area() < current.area(), "tile strictly smaller");
            rp.check(
                tile.lx() >= current.lx()
                    && tile.rx() <= current.rx()
                    && tile.by() >= current.by()
                    && tile.ty() <= current.ty(),
                "tile inside parent",
            );
        }
        // Walk down a different quadrant each level
        current = *tiles.get(Quadrant::ALL[level % 4]);
    }
    rp.compare_values(1024.0 / 256.0, current.width(), 0.0);
    rp.compare_values(512.0 / 256.0, current.height(), 0.0);

    assert!(rp.cleanup(), "bbox nested split test failed");
}

#[test]
fn bbox_integer_bounds() {
    let mut rp = RegParams::new("bbox_integer");

    let grid_box = BoundingBox::from_grid_dimensions(5, 7).unwrap();
    rp.compare_values(0.0, grid_box.ty(), 0.0);
    rp.compare_values(5.0, grid_box.by(), 0.0);
    rp.compare_values(7.0, grid_box.rx(), 0.0);

    let tiles = grid_box.split().to_integer_bounds();
    let nw = tiles.get(Quadrant::Nw);
    rp.compare_values(3.0, nw.rx(), 0.0);
    rp.compare_values(2.0, nw.by(), 0.0);

    // Truncating is idempotent
    for tile in tiles.iter() {
        let again = tile.to_integer_bounds();
        rp.check(again == *tile, "idempotent truncation");
    }

    // The integer tiles still cover every cell exactly once
    let mut covered = vec![0u32; 5 * 7];
    for tile in tiles.iter() {
        let (rows, cols) = tile.grid_ranges();
        for r in rows {
            for c in cols.clone() {
                covered[r * 7 + c] += 1;
            }
        }
    }
    rp.check(covered.iter().all(|&n| n == 1), "cells covered once");

    let extents: Vec<(usize, usize)> = tiles.iter().map(BoundingBox::grid_extent).collect();
    rp.check(
        extents == vec![(2, 3), (2, 4), (3, 4), (3, 3)],
        "odd extents split unevenly",
    );

    assert!(rp.cleanup(), "bbox integer bounds test failed");
}
