//! Error types for the outer surface of the engine.
//!
//! The simulation itself never fails: degenerate inputs are absorbed as
//! no-ops. Only configuration and handle bookkeeping report errors.

use std::fmt;

use glam::Vec3;

use crate::utils::allocator::ActorHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Fixed time step must be finite and strictly positive.
    InvalidTimeStep(f32),
    /// Gravity must have finite components.
    InvalidGravity(Vec3),
    /// Handle does not refer to a live actor.
    UnknownActor(ActorHandle),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidTimeStep(dt) => write!(f, "invalid time step: {dt}"),
            Self::InvalidGravity(g) => write!(f, "invalid gravity: {g}"),
            Self::UnknownActor(handle) => write!(
                f,
                "unknown actor: index {} generation {}",
                handle.index(),
                handle.generation()
            ),
        }
    }
}

impl std::error::Error for PhysicsError {}

pub type Result<T> = std::result::Result<T, PhysicsError>;
