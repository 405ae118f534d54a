//! Global configuration constants and the serializable world configuration.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};

/// Default gravity vector applied in the physics world (Y-up).
pub const DEFAULT_GRAVITY: [f32; 3] = [0.0, -9.81, 0.0];

/// Default fixed integration timestep (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 0.01;

/// Speed below which an actor's linear velocity snaps to zero.
pub const DEFAULT_MIN_SPEED: f32 = 0.1;

/// Angular speed below which an actor's angular velocity snaps to zero.
pub const DEFAULT_MIN_ANGULAR_SPEED: f32 = 0.05;

/// Impulses with a squared length below this are discarded.
pub const IMPULSE_EPSILON_SQUARED: f32 = 1e-4;

/// Vertices whose projections lie within this distance of an extreme are averaged.
pub const PROJECTION_TOLERANCE: f32 = 1e-4;

/// Squared length under which a vector is treated as zero in geometric tests.
pub const GEOMETRY_EPSILON: f32 = 1e-10;

/// Number of fixed steps in one `step` call after which a catch-up warning is logged.
pub const DEFAULT_CATCH_UP_WARNING_STEPS: u32 = 10;

/// Tunables for a [`crate::world::PhysicsWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub gravity: Vec3,
    pub time_step: f32,
    pub catch_up_warning_steps: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::from_array(DEFAULT_GRAVITY),
            time_step: DEFAULT_TIME_STEP,
            catch_up_warning_steps: DEFAULT_CATCH_UP_WARNING_STEPS,
        }
    }
}

impl WorldConfig {
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_time_step(mut self, time_step: f32) -> Self {
        self.time_step = time_step;
        self
    }

    /// Rejects non-finite gravity and non-positive or non-finite time steps.
    pub fn validate(&self) -> Result<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(PhysicsError::InvalidTimeStep(self.time_step));
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidGravity(self.gravity));
        }
        Ok(())
    }
}
