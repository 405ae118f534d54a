use glam::Vec3;

use crate::core::actor::Actor;

impl Actor {
    /// Advances the actor by `dt` seconds.
    ///
    /// Every actor coasts on its current velocities. Dynamic actors then
    /// accelerate under `force + gravity - linear_drag * v` and
    /// `torque - rotational_drag * ω`; each velocity change also nudges the
    /// pose by half a step so the step uses the average velocity.
    /// Velocities below the minimum speeds snap to zero afterwards.
    pub fn update(&mut self, dt: f32, gravity: Vec3) {
        self.spin(self.angular_velocity() * dt);
        self.move_by(self.velocity() * dt);

        if self.is_dynamic() {
            self.integrate_linear(dt, gravity);
            self.integrate_angular(dt);
        }

        self.enforce_min_speed();
    }

    fn integrate_linear(&mut self, dt: f32, gravity: Vec3) {
        let drag = self.material().linear_drag;
        let mut force = self.force() + gravity;
        if drag > 0.0 {
            force -= self.velocity() * drag;
        }

        let mass = self.mass();
        if force == Vec3::ZERO || mass == 0.0 {
            return;
        }
        let delta_velocity = force / mass * dt;
        self.move_by(delta_velocity * dt * 0.5);
        self.accelerate(delta_velocity);
    }

    fn integrate_angular(&mut self, dt: f32) {
        let drag = self.material().rotational_drag;
        let mut torque = self.torque();
        if drag > 0.0 {
            torque -= self.angular_velocity() * drag;
        }

        let inertia = self.rotational_inertia(torque);
        if inertia == 0.0 || !inertia.is_finite() {
            return;
        }
        let delta_angular_velocity = torque * dt / inertia;
        self.spin(delta_angular_velocity * dt * 0.5);
        self.accelerate_rotation(delta_angular_velocity);
    }
}
