//! Timing benchmark for the three containment predicates

use enclose::prelude::*;
use glam::{DMat3, DVec3};
use rand::Rng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Instant;

fn random_point<R: Rng>(rng: &mut R, extent: f64) -> DVec3 {
    DVec3::new(
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
    )
}

fn random_region<R: Rng>(rng: &mut R) -> Region {
    let west = rng.random_range(-3.0..3.0);
    let south = rng.random_range(-1.5..1.5);
    let min_height = rng.random_range(-100.0..100.0);
    Region::new(
        west,
        south,
        west + rng.random_range(0.0..0.1),
        south + rng.random_range(0.0..0.1),
        min_height,
        min_height + rng.random_range(0.0..500.0),
    )
}

fn random_box<R: Rng>(rng: &mut R) -> OrientedBox {
    let rotation = DMat3::from_euler(
        glam::EulerRot::XYZ,
        rng.random_range(0.0..std::f64::consts::TAU),
        rng.random_range(0.0..std::f64::consts::TAU),
        rng.random_range(0.0..std::f64::consts::TAU),
    );
    let scale = DMat3::from_diagonal(DVec3::new(
        rng.random_range(0.1..10.0),
        rng.random_range(0.1..10.0),
        rng.random_range(0.1..10.0),
    ));
    OrientedBox::new(random_point(rng, 50.0), rotation * scale)
}

fn report(name: &str, pairs: usize, contained: usize, start: Instant) {
    let elapsed = start.elapsed();
    println!(
        "{:<22} {:>10} pairs {:>8} contained {:>10.2}ms {:>8.1}ns/pair",
        name,
        pairs,
        contained,
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1e9 / pairs as f64
    );
}

fn main() {
    println!("Containment Benchmark");
    println!("=====================\n");

    let num_pairs = 1_000_000;

    // Fixed seed for reproducibility
    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let regions: Vec<(Region, Region)> = (0..num_pairs)
        .map(|_| (random_region(&mut rng), random_region(&mut rng)))
        .collect();
    let spheres: Vec<(Sphere, Sphere)> = (0..num_pairs)
        .map(|_| {
            (
                Sphere::new(random_point(&mut rng, 10.0), rng.random_range(0.0..5.0)),
                Sphere::new(random_point(&mut rng, 10.0), rng.random_range(0.0..20.0)),
            )
        })
        .collect();
    let boxes: Vec<(OrientedBox, OrientedBox)> = (0..num_pairs)
        .map(|_| (random_box(&mut rng), random_box(&mut rng)))
        .collect();

    let start = Instant::now();
    let contained = regions
        .iter()
        .filter(|(inner, outer)| region_inside_region(black_box(inner), black_box(outer)))
        .count();
    report("region_inside_region", num_pairs, contained, start);

    let start = Instant::now();
    let contained = spheres
        .iter()
        .filter(|(inner, outer)| sphere_inside_sphere(black_box(inner), black_box(outer)))
        .count();
    report("sphere_inside_sphere", num_pairs, contained, start);

    let start = Instant::now();
    let contained = boxes
        .iter()
        .filter(|(inner, outer)| box_inside_box(black_box(inner), black_box(outer)))
        .count();
    report("box_inside_box", num_pairs, contained, start);
}
