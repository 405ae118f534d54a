use glam::Vec3;

use crate::core::actor::Actor;
use crate::utils::math::{is_near_zero, is_valid_impulse};

impl Actor {
    /// Changes linear velocity by `impulse / mass`.
    ///
    /// Ignored for static actors and for NaN, zero or vanishingly small
    /// impulses; a massless actor keeps its velocity.
    pub fn apply_linear_impulse(&mut self, impulse: Vec3) {
        if !self.is_dynamic() || !is_valid_impulse(impulse) {
            return;
        }
        let mass = self.mass();
        if mass != 0.0 {
            self.accelerate(impulse / mass);
        }
        self.enforce_min_speed();
    }

    /// Changes angular velocity by `I⁻¹ * impulse`, unless the actor has no
    /// rotational inertia about the impulse axis.
    pub fn apply_angular_impulse(&mut self, impulse: Vec3) {
        if !self.is_dynamic() || !is_valid_impulse(impulse) {
            return;
        }
        if self.rotational_inertia(impulse) != 0.0 {
            self.accelerate_rotation(self.inverse_inertia_tensor() * impulse);
        }
        self.enforce_min_speed();
    }

    /// Applies `impulse` at a world-space contact point.
    ///
    /// The linear part is the impulse's magnitude along the line from the
    /// contact point to the center of mass, directed toward the center. The
    /// angular part is `(contact - center) × impulse`. An impulse through the
    /// center is purely linear.
    pub fn apply_impulse(&mut self, impulse: Vec3, contact_point: Vec3) {
        if !self.is_dynamic() || !is_valid_impulse(impulse) {
            return;
        }

        let to_center = self.position() - contact_point;
        if is_near_zero(to_center) {
            self.apply_linear_impulse(impulse);
            return;
        }

        let direction = to_center.normalize();
        self.apply_linear_impulse(direction * impulse.dot(direction).abs());
        self.apply_angular_impulse((-to_center).cross(impulse));
    }
}
