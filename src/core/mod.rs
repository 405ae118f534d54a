//! Core types: shapes placed in the world, materials, and rigid actors.

pub mod actor;
pub mod geometry;
pub mod material;
pub mod orientation;
pub mod shapes;

pub use actor::{Actor, ActorBuilder};
pub use geometry::{Geometry, Shape, ShapeKind};
pub use material::Material;
