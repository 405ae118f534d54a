use glam::{Mat3, Vec3};
use log::debug;

use crate::collision::contact::Collision;
use crate::core::{actor::Actor, geometry::Geometry, material::Material};
use crate::utils::math::angular_effect;

fn inverse_mass(actor: &Actor) -> f32 {
    let mass = actor.mass();
    if actor.is_dynamic() && mass > 0.0 {
        1.0 / mass
    } else {
        0.0
    }
}

fn inverse_inertia(actor: &Actor) -> Mat3 {
    if actor.is_dynamic() {
        actor.inverse_inertia_tensor()
    } else {
        Mat3::ZERO
    }
}

impl Actor {
    /// Detects and resolves contact between two actors.
    ///
    /// Overlap is removed along the contact normal first (split evenly
    /// between two dynamic actors, or taken entirely by the dynamic one).
    /// A restitution impulse then separates the bodies, followed by a
    /// Coulomb friction impulse on the tangential slip. Returns the
    /// collision when the actors overlapped, even if the bodies were
    /// already separating and no impulse was applied.
    pub fn resolve_collision(a: &mut Actor, b: &mut Actor) -> Option<Collision> {
        if !a.is_dynamic() && !b.is_dynamic() {
            return None;
        }
        let mut collision = Geometry::detect_collision(a.geometry(), b.geometry())?;
        let n = collision.normal;
        let depth = collision.interpenetration;

        match (a.is_dynamic(), b.is_dynamic()) {
            (true, true) => {
                a.move_by(-n * depth * 0.5);
                b.move_by(n * depth * 0.5);
            }
            // the contact point shifts half the depth toward the static body
            (true, false) => {
                a.move_by(-n * depth);
                collision.point += n * depth * 0.5;
            }
            (false, true) => {
                b.move_by(n * depth);
                collision.point -= n * depth * 0.5;
            }
            (false, false) => return None,
        }

        let point = collision.point;
        let r1 = point - a.position();
        let r2 = point - b.position();
        let inv_mass = inverse_mass(a) + inverse_mass(b);
        let inv_i1 = inverse_inertia(a);
        let inv_i2 = inverse_inertia(b);

        // restitution
        let e = Material::restitution_pair(a.material(), b.material());
        let relative_velocity = b.velocity() - a.velocity();
        let denominator = inv_mass + angular_effect(inv_i1, r1, n) + angular_effect(inv_i2, r2, n);
        if denominator == 0.0 || !denominator.is_finite() {
            debug!("contact skipped: degenerate normal denominator {denominator}");
            return Some(collision);
        }
        let normal_impulse = -e * n * relative_velocity.dot(n) / denominator;
        if normal_impulse.dot(n) <= 0.0 {
            debug!("contact skipped: bodies already separating");
            return Some(collision);
        }
        a.apply_impulse(-normal_impulse, point);
        b.apply_impulse(normal_impulse, point);

        // friction
        let mut slip = b.point_velocity(point, false) - a.point_velocity(point, false);
        slip -= n * n.dot(slip);
        let Some(tangent) = slip.try_normalize() else {
            return Some(collision);
        };
        let denominator =
            inv_mass + angular_effect(inv_i1, r1, tangent) + angular_effect(inv_i2, r2, tangent);
        if denominator == 0.0 || !denominator.is_finite() {
            debug!("friction skipped: degenerate tangent denominator {denominator}");
            return Some(collision);
        }

        let (static_friction, dynamic_friction) = Material::friction_pair(a.material(), b.material());
        let normal_magnitude = normal_impulse.length();
        let mut friction = slip.length() / denominator;
        if friction > static_friction * normal_magnitude {
            friction = dynamic_friction * normal_magnitude;
        }
        a.apply_impulse(tangent * friction, point);
        b.apply_impulse(-tangent * friction, point);

        Some(collision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn elastic() -> Material {
        Material {
            elasticity: 1.0,
            ..Material::default()
        }
    }

    #[test]
    fn head_on_elastic_spheres_swap_velocities() {
        let left = Geometry::sphere(1.0, Vec3::new(-0.9, 0.0, 0.0));
        let right = Geometry::sphere(1.0, Vec3::new(0.9, 0.0, 0.0));
        let mut a = Actor::builder(&left)
            .dynamic(true)
            .material(elastic())
            .velocity(Vec3::X)
            .build();
        let mut b = Actor::builder(&right)
            .dynamic(true)
            .material(elastic())
            .velocity(Vec3::NEG_X)
            .build();

        let collision = Actor::resolve_collision(&mut a, &mut b).unwrap();
        assert_relative_eq!(collision.interpenetration, 0.2, epsilon = 1e-5);
        assert!((a.velocity() - Vec3::NEG_X).length() < 1e-4);
        assert!((b.velocity() - Vec3::X).length() < 1e-4);
        assert_eq!(a.angular_velocity(), Vec3::ZERO);

        // overlap split evenly
        assert_relative_eq!(a.position().x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(b.position().x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn separating_bodies_only_get_pushed_apart() {
        let mut a = Actor::builder(&Geometry::sphere(1.0, Vec3::ZERO))
            .dynamic(true)
            .velocity(Vec3::NEG_X)
            .build();
        let mut b = Actor::builder(&Geometry::sphere(1.0, Vec3::new(1.5, 0.0, 0.0)))
            .dynamic(true)
            .velocity(Vec3::X)
            .build();

        assert!(Actor::resolve_collision(&mut a, &mut b).is_some());
        assert_eq!(a.velocity(), Vec3::NEG_X);
        assert_eq!(b.velocity(), Vec3::X);
        assert_relative_eq!(b.position().x - a.position().x, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn two_static_actors_are_skipped() {
        let geometry = Geometry::sphere(1.0, Vec3::ZERO);
        let mut a = Actor::new_static(&geometry, Material::default());
        let mut b = Actor::new_static(&geometry, Material::default());
        assert!(Actor::resolve_collision(&mut a, &mut b).is_none());
        assert_eq!(a.position(), b.position());
    }

    #[test]
    fn dynamic_body_takes_the_full_correction() {
        let ground = Geometry::plane(Vec3::ZERO, Vec3::Y, Vec3::Z);
        let mut floor = Actor::new_static(&ground, Material::felt());
        let mut ball = Actor::builder(&Geometry::sphere(1.0, Vec3::new(0.0, 0.9, 0.0)))
            .dynamic(true)
            .velocity(Vec3::new(0.0, -1.0, 0.0))
            .build();

        Actor::resolve_collision(&mut floor, &mut ball).unwrap();
        assert_relative_eq!(ball.position().y, 1.0, epsilon = 1e-5);
        assert_eq!(floor.position(), Vec3::ZERO);
        assert!(ball.velocity().y > 0.0);
    }

    #[test]
    fn friction_turns_slide_into_spin() {
        let ground = Geometry::plane(Vec3::ZERO, Vec3::Y, Vec3::Z);
        let mut floor = Actor::new_static(&ground, Material::felt());
        let mut ball = Actor::builder(&Geometry::sphere(1.0, Vec3::new(0.0, 0.9, 0.0)))
            .dynamic(true)
            .velocity(Vec3::new(3.0, -1.0, 0.0))
            .build();

        Actor::resolve_collision(&mut floor, &mut ball).unwrap();
        // rolling toward +x means spinning about -z
        assert!(ball.angular_velocity().z < 0.0);
        assert_relative_eq!(ball.angular_velocity().x, 0.0, epsilon = 1e-5);
        assert!(ball.velocity().y > 0.0);
    }

    fn sliding_ball(velocity: Vec3, material: Material) -> (Actor, Actor) {
        let ground = Geometry::plane(Vec3::ZERO, Vec3::Y, Vec3::Z);
        let floor = Actor::new_static(&ground, material);
        let ball = Actor::builder(&Geometry::sphere(1.0, Vec3::new(0.0, 0.9, 0.0)))
            .dynamic(true)
            .material(material)
            .velocity(velocity)
            .build();
        (floor, ball)
    }

    // For a unit sphere the inverse inertia is 1.5 / m, so with the contact
    // point a lever `l` below the center the tangential denominator is
    // (1 + 1.5 l²) / m.
    fn tangent_denominator_times_mass(lever: f32) -> f32 {
        1.0 + 1.5 * lever * lever
    }

    #[test]
    fn fast_slide_is_capped_by_dynamic_friction() {
        let (mut floor, mut ball) = sliding_ball(
            Vec3::new(5.0, -1.0, 0.0),
            Material::new(1.0, 0.9, 0.1, 0.05),
        );

        let hit = Actor::resolve_collision(&mut floor, &mut ball).unwrap();
        let lever = ball.position().y - hit.point.y;
        assert_relative_eq!(lever, 1.15, epsilon = 1e-5);

        // |J| = e * closing speed * m with e = 1.9
        let normal_per_mass = 1.9;
        let unconstrained = 5.0 / tangent_denominator_times_mass(lever);
        assert!(unconstrained > 0.1 * normal_per_mass);

        let friction_per_mass = 0.05 * normal_per_mass;
        let expected_spin = -1.5 * lever * friction_per_mass;
        assert_relative_eq!(ball.angular_velocity().z, expected_spin, epsilon = 1e-4);
        assert_relative_eq!(ball.velocity().x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(ball.velocity().y, 0.9, epsilon = 1e-4);
    }

    #[test]
    fn slow_slide_takes_the_full_tangential_impulse() {
        let (mut floor, mut ball) =
            sliding_ball(Vec3::new(0.2, -1.0, 0.0), Material::new(1.0, 0.9, 1.0, 1.0));

        let hit = Actor::resolve_collision(&mut floor, &mut ball).unwrap();
        let lever = ball.position().y - hit.point.y;
        let denominator = tangent_denominator_times_mass(lever);
        assert!(0.2 / denominator < 1.9);

        let expected_spin = -1.5 * lever * 0.2 / denominator;
        assert_relative_eq!(ball.angular_velocity().z, expected_spin, epsilon = 1e-4);

        // the impulse runs across the lever arm, so only the spin share of
        // the slip is cancelled and the linear share stays
        let slip = ball.point_velocity(hit.point, false);
        assert_relative_eq!(slip.x, 0.2 / denominator, epsilon = 1e-4);
        assert!(slip.x < 0.2);
        assert_relative_eq!(ball.velocity().x, 0.2, epsilon = 1e-5);
    }
}
