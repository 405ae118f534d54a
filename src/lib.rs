//! Impulse Physics – a small real-time rigid-body engine.
//!
//! Shapes ([`Geometry`]) are planes, spheres and boxes placed in the world.
//! [`Geometry::detect_collision`] dispatches on the pair of shape kinds and
//! reports a single contact. [`Actor`] wraps a shape with mass and motion,
//! integrates it with [`Actor::update`] and resolves pairwise contacts with
//! [`Actor::resolve_collision`]. [`PhysicsWorld`] drives all of it at a fixed
//! time step.
//!
//! ```
//! use impulse_physics::{Actor, Geometry, Material, PhysicsWorld, Vec3};
//!
//! let mut world = PhysicsWorld::new(0.01);
//! let ground = Geometry::plane(Vec3::ZERO, Vec3::Y, Vec3::Z);
//! world.add_actor(Actor::new_static(&ground, Material::felt()));
//!
//! let ball = Geometry::sphere(0.5, Vec3::new(0.0, 0.5, 0.0));
//! let cue = world.add_actor(
//!     Actor::builder(&ball)
//!         .dynamic(true)
//!         .velocity(Vec3::new(2.0, 0.0, 0.0))
//!         .build(),
//! );
//!
//! world.step(0.1);
//! assert!(world.actor(cue).unwrap().position().x > 0.0);
//! ```

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::{Mat3, Quat, Vec3};

pub use collision::Collision;
pub use config::WorldConfig;
pub use core::{Actor, ActorBuilder, Geometry, Material, Shape, ShapeKind};
pub use error::{PhysicsError, Result};
pub use utils::{ActorHandle, StepProfile};
pub use world::PhysicsWorld;
