use impulse_physics::*;

const BALL_RADIUS: f32 = 0.5;

fn ball(center: Vec3, velocity: Vec3) -> Actor {
    Actor::builder(&Geometry::sphere(BALL_RADIUS, center))
        .dynamic(true)
        .material(Material::ivory())
        .velocity(velocity)
        .build()
}

fn cushion(half_extents: Vec3, center: Vec3) -> Actor {
    Actor::new_static(&Geometry::cuboid(half_extents, center), Material::felt())
}

fn main() {
    let mut world = PhysicsWorld::new(0.01);

    world.add_actor(Actor::new_static(
        &Geometry::plane(Vec3::ZERO, Vec3::Y, Vec3::Z),
        Material::felt(),
    ));
    world.add_actor(cushion(Vec3::new(0.5, 1.0, 10.0), Vec3::new(-20.5, 0.5, 0.0)));
    world.add_actor(cushion(Vec3::new(0.5, 1.0, 10.0), Vec3::new(20.5, 0.5, 0.0)));
    world.add_actor(cushion(Vec3::new(20.0, 1.0, 0.5), Vec3::new(0.0, 0.5, -10.5)));
    world.add_actor(cushion(Vec3::new(20.0, 1.0, 0.5), Vec3::new(0.0, 0.5, 10.5)));

    // five rows, apex toward the cue ball
    let spacing = BALL_RADIUS * 2.0;
    let mut rack = Vec::new();
    for row in 0..5 {
        for slot in 0..=row {
            let x = 8.0 + row as f32 * spacing * 0.87;
            let z = (slot as f32 - row as f32 * 0.5) * spacing;
            rack.push(world.add_actor(ball(Vec3::new(x, BALL_RADIUS, z), Vec3::ZERO)));
        }
    }
    let cue = world.add_actor(ball(
        Vec3::new(-10.0, BALL_RADIUS, 0.0),
        Vec3::new(25.0, 0.0, 0.0),
    ));

    for second in 1..=5 {
        let steps = world.advance_to(f64::from(second));
        let moving = world
            .actors()
            .filter(|(_, actor)| actor.velocity() != Vec3::ZERO)
            .count();
        println!("t = {second}s: {steps} steps, {moving} balls still rolling");
    }

    if let Some(actor) = world.actor(cue) {
        println!("cue ball at {:?}", actor.position());
    }
    for (i, handle) in rack.iter().enumerate() {
        if let Some(actor) = world.actor(*handle) {
            println!("ball {:>2} at {:?}", i + 1, actor.position());
        }
    }
    println!("last step: {:?}", world.last_profile());
}
