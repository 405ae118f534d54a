use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use impulse_physics::*;
use std::hint::black_box;

const DT: f32 = 0.01;

fn prepare_world(ball_count: usize) -> PhysicsWorld {
    let mut world = PhysicsWorld::new(DT);
    world.add_actor(Actor::new_static(
        &Geometry::plane(Vec3::ZERO, Vec3::Y, Vec3::Z),
        Material::felt(),
    ));
    let side = (ball_count as f32).sqrt().ceil() as usize;
    for i in 0..ball_count {
        let center = Vec3::new((i % side) as f32 * 0.9, 0.5, (i / side) as f32 * 0.9);
        world.add_actor(
            Actor::builder(&Geometry::sphere(0.5, center))
                .dynamic(true)
                .material(Material::ivory())
                .velocity(Vec3::new(1.0, 0.0, 0.5))
                .build(),
        );
    }
    world
}

fn bench_world_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_step");
    for &count in &[16usize, 64, 256] {
        group.bench_with_input(BenchmarkId::new("balls", count), &count, |b, &count| {
            let mut world = prepare_world(count);
            b.iter(|| world.step(black_box(DT)))
        });
    }
    group.finish();
}

fn bench_narrowphase(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrowphase");
    let count = 1000;

    let pairs: Vec<(Geometry, Geometry)> = (0..count)
        .map(|i| {
            let angle = i as f32 * 0.01;
            let a = Geometry::cuboid(Vec3::splat(0.5), Vec3::ZERO).with_axis_angle(Vec3::Y, angle);
            let b = Geometry::cuboid(Vec3::splat(0.5), Vec3::new(0.8, 0.1, 0.0))
                .with_axis_angle(Vec3::new(1.0, 1.0, 0.0), angle);
            (a, b)
        })
        .collect();

    group.bench_function("box_box", |b| {
        b.iter(|| {
            for (first, second) in &pairs {
                black_box(Geometry::detect_collision(first, second));
            }
        })
    });

    let spheres: Vec<(Geometry, Geometry)> = (0..count)
        .map(|i| {
            let offset = Vec3::new(1.5, (i % 7) as f32 * 0.05, 0.0);
            (
                Geometry::sphere(1.0, Vec3::ZERO),
                Geometry::cuboid(Vec3::ONE, offset),
            )
        })
        .collect();

    group.bench_function("sphere_box", |b| {
        b.iter(|| {
            for (first, second) in &spheres {
                black_box(Geometry::detect_collision(first, second));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_world_step, bench_narrowphase);
criterion_main!(benches);
