use approx::assert_relative_eq;
use impulse_physics::*;

fn ivory_ball(center: Vec3, velocity: Vec3, elasticity: f32) -> Actor {
    let material = Material {
        elasticity,
        ..Material::ivory()
    };
    Actor::builder(&Geometry::sphere(1.0, center))
        .dynamic(true)
        .material(material)
        .velocity(velocity)
        .build()
}

fn momentum(actors: &[&Actor]) -> Vec3 {
    actors.iter().map(|a| a.velocity() * a.mass()).sum()
}

fn kinetic_energy(actors: &[&Actor]) -> f32 {
    actors
        .iter()
        .map(|a| 0.5 * a.mass() * a.velocity().length_squared())
        .sum()
}

#[test]
fn perfectly_elastic_head_on_collision_swaps_velocities() {
    let mut a = ivory_ball(Vec3::new(-0.95, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0), 1.0);
    let mut b = ivory_ball(Vec3::new(0.95, 0.0, 0.0), Vec3::new(-2.0, 0.0, 0.0), 1.0);

    let p0 = momentum(&[&a, &b]);
    let k0 = kinetic_energy(&[&a, &b]);

    Actor::resolve_collision(&mut a, &mut b).expect("spheres touch");

    assert!((a.velocity() - Vec3::new(-2.0, 0.0, 0.0)).length() < 1e-4);
    assert!((b.velocity() - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-4);
    assert!((momentum(&[&a, &b]) - p0).length() < 1e-3);
    assert_relative_eq!(kinetic_energy(&[&a, &b]), k0, max_relative = 1e-4);
}

#[test]
fn inelastic_collision_loses_energy_but_keeps_momentum() {
    let mut a = ivory_ball(Vec3::new(-0.95, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0), 0.5);
    let mut b = ivory_ball(Vec3::new(0.95, 0.0, 0.0), Vec3::ZERO, 0.5);

    let p0 = momentum(&[&a, &b]);
    let k0 = kinetic_energy(&[&a, &b]);
    Actor::resolve_collision(&mut a, &mut b).expect("spheres touch");

    assert!((momentum(&[&a, &b]) - p0).length() < 1e-3);
    assert!(kinetic_energy(&[&a, &b]) < k0);
    assert!(b.velocity().x > a.velocity().x);
}

#[test]
fn static_actor_is_unmoved_by_forces() {
    let table = Geometry::cuboid(Vec3::new(5.0, 0.5, 3.0), Vec3::ZERO);
    let mut actor = Actor::builder(&table)
        .velocity(Vec3::new(0.05, 0.0, 0.0))
        .angular_velocity(Vec3::new(0.0, 0.01, 0.0))
        .build();
    actor.add_force(Vec3::new(50.0, 50.0, 50.0));
    actor.add_torque(Vec3::new(0.0, 20.0, 0.0));

    actor.update(0.01, Vec3::new(0.0, -9.81, 0.0));

    // below the minimum speeds, so snapped to zero rather than accelerated
    assert_eq!(actor.velocity(), Vec3::ZERO);
    assert_eq!(actor.angular_velocity(), Vec3::ZERO);
    for _ in 0..10 {
        actor.update(0.01, Vec3::new(0.0, -9.81, 0.0));
    }
    assert_eq!(actor.velocity(), Vec3::ZERO);
    assert_eq!(actor.force(), Vec3::new(50.0, 50.0, 50.0));
}

#[test]
fn static_actor_never_moves_in_a_collision() {
    let mut wall = Actor::new_static(
        &Geometry::cuboid(Vec3::new(0.5, 2.0, 2.0), Vec3::new(2.0, 0.0, 0.0)),
        Material::felt(),
    );
    let mut ball = ivory_ball(Vec3::new(0.6, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0), 0.9);

    Actor::resolve_collision(&mut ball, &mut wall).expect("ball hits the cushion");
    assert_eq!(wall.position(), Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(wall.velocity(), Vec3::ZERO);
    assert!(ball.velocity().x < 0.0, "ball should bounce back");
    assert_relative_eq!(ball.position().x, 0.5, epsilon = 1e-5);
}

#[test]
fn zero_mass_actor_ignores_linear_impulse() {
    let weightless = Material {
        density: 0.0,
        ..Material::default()
    };
    let mut actor = Actor::builder(&Geometry::sphere(1.0, Vec3::ZERO))
        .dynamic(true)
        .material(weightless)
        .velocity(Vec3::new(1.0, 2.0, 3.0))
        .build();
    assert_eq!(actor.mass(), 0.0);

    actor.apply_linear_impulse(Vec3::new(100.0, 0.0, 0.0));
    assert_eq!(actor.velocity(), Vec3::new(1.0, 2.0, 3.0));
}

fn table_with_ball(velocity: Vec3) -> (PhysicsWorld, ActorHandle) {
    let bed = Actor::new_static(
        &Geometry::plane(Vec3::ZERO, Vec3::Y, Vec3::Z),
        Material::felt(),
    );
    let mut world = PhysicsWorld::new(0.01);
    world.add_actor(bed);
    let ball = world.add_actor(ivory_ball(Vec3::new(0.0, 1.0, 0.0), velocity, 0.9));
    (world, ball)
}

#[test]
fn resting_ball_stays_put() {
    let (mut world, ball) = table_with_ball(Vec3::ZERO);
    for _ in 0..500 {
        world.step(0.01);
    }

    let ball = world.actor(ball).expect("ball is still in the world");
    assert_eq!(ball.velocity(), Vec3::ZERO);
    assert_eq!(ball.angular_velocity(), Vec3::ZERO);
    assert!((ball.position() - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-3);
}

#[test]
fn rolling_ball_slows_and_spins() {
    let (mut world, ball) = table_with_ball(Vec3::new(1.0, 0.0, 0.0));
    for _ in 0..200 {
        world.step(0.01);
    }

    let ball = world.actor(ball).expect("ball is still in the world");
    let velocity = ball.velocity();
    assert!(velocity.x > 0.5 && velocity.x < 1.0, "velocity = {velocity}");
    assert!(ball.angular_velocity().z < 0.0);
    assert!(ball.position().x > 1.0);
    assert!(ball.position().y > 0.99, "ball sank to {}", ball.position().y);
}
