use glam::{Mat3, Quat, Vec3};

use super::{geometry::Geometry, material::Material};
use crate::config::{DEFAULT_MIN_ANGULAR_SPEED, DEFAULT_MIN_SPEED};
use crate::utils::math::inverse_or_zero;

/// Rigid body: an owned [`Geometry`] plus mass, material and motion state.
///
/// Static actors (`dynamic == false`) ignore forces and impulses but still
/// move with whatever velocity they are given, so they can be scripted.
#[derive(Debug, Clone)]
pub struct Actor {
    geometry: Geometry,
    dynamic: bool,
    material: Material,
    velocity: Vec3,
    angular_velocity: Vec3,
    force: Vec3,
    torque: Vec3,
    mass: f32,
    inertia_tensor: Mat3,
    min_speed_squared: f32,
    min_angular_speed_squared: f32,
}

/// Configures an [`Actor`] before it is built. Obtained from [`Actor::builder`].
#[derive(Debug, Clone)]
pub struct ActorBuilder {
    geometry: Geometry,
    dynamic: bool,
    material: Material,
    velocity: Vec3,
    angular_velocity: Vec3,
    mass: f32,
    inertia_tensor: Mat3,
    min_speed: f32,
    min_angular_speed: f32,
}

impl ActorBuilder {
    pub fn dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn angular_velocity(mut self, angular_velocity: Vec3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Explicit mass; zero means "derive from density and volume".
    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Explicit inertia tensor; the zero matrix means "derive from the shape".
    pub fn inertia_tensor(mut self, inertia_tensor: Mat3) -> Self {
        self.inertia_tensor = inertia_tensor;
        self
    }

    pub fn min_speeds(mut self, linear: f32, angular: f32) -> Self {
        self.min_speed = linear;
        self.min_angular_speed = angular;
        self
    }

    pub fn build(self) -> Actor {
        Actor {
            geometry: self.geometry,
            dynamic: self.dynamic,
            material: self.material,
            velocity: self.velocity,
            angular_velocity: self.angular_velocity,
            force: Vec3::ZERO,
            torque: Vec3::ZERO,
            mass: self.mass,
            inertia_tensor: self.inertia_tensor,
            min_speed_squared: self.min_speed * self.min_speed,
            min_angular_speed_squared: self.min_angular_speed * self.min_angular_speed,
        }
    }
}

impl Actor {
    /// Starts a static actor around a clone of `geometry`.
    pub fn builder(geometry: &Geometry) -> ActorBuilder {
        ActorBuilder {
            geometry: geometry.clone(),
            dynamic: false,
            material: Material::default(),
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: 0.0,
            inertia_tensor: Mat3::ZERO,
            min_speed: DEFAULT_MIN_SPEED,
            min_angular_speed: DEFAULT_MIN_ANGULAR_SPEED,
        }
    }

    pub fn new_static(geometry: &Geometry, material: Material) -> Self {
        Self::builder(geometry).material(material).build()
    }

    pub fn new_dynamic(geometry: &Geometry, material: Material) -> Self {
        Self::builder(geometry).dynamic(true).material(material).build()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut Geometry {
        &mut self.geometry
    }

    pub fn position(&self) -> Vec3 {
        self.geometry.position
    }

    pub fn orientation(&self) -> Quat {
        self.geometry.orientation()
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = dynamic;
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    pub fn force(&self) -> Vec3 {
        self.force
    }

    pub fn torque(&self) -> Vec3 {
        self.torque
    }

    /// Explicit mass if set, otherwise `density * volume`.
    pub fn mass(&self) -> f32 {
        if self.mass != 0.0 {
            self.mass
        } else {
            self.material.density * self.geometry.volume()
        }
    }

    /// Explicit inertia tensor if set, otherwise the shape's unit tensor
    /// scaled by [`Actor::mass`].
    pub fn inertia_tensor(&self) -> Mat3 {
        if self.inertia_tensor != Mat3::ZERO {
            self.inertia_tensor
        } else {
            self.geometry.unit_inertia_tensor() * self.mass()
        }
    }

    pub fn inverse_inertia_tensor(&self) -> Mat3 {
        inverse_or_zero(self.inertia_tensor())
    }

    /// Moment of inertia about `axis` (any length); zero when the axis is
    /// too short to normalize.
    pub fn rotational_inertia(&self, axis: Vec3) -> f32 {
        let Some(axis) = axis.try_normalize() else {
            return 0.0;
        };
        axis.dot(self.inertia_tensor() * axis)
    }

    pub fn min_speed_squared(&self) -> f32 {
        self.min_speed_squared
    }

    pub fn min_angular_speed_squared(&self) -> f32 {
        self.min_angular_speed_squared
    }

    pub fn set_min_speeds(&mut self, linear: f32, angular: f32) {
        self.min_speed_squared = linear * linear;
        self.min_angular_speed_squared = angular * angular;
    }

    /// Velocity of the material point at `point`. With `ignore_outside`,
    /// points outside the geometry report zero.
    pub fn point_velocity(&self, point: Vec3, ignore_outside: bool) -> Vec3 {
        if ignore_outside && !self.geometry.contains(point) {
            return Vec3::ZERO;
        }
        let center = self.position();
        if point == center || self.angular_velocity == Vec3::ZERO {
            return self.velocity;
        }
        self.velocity + self.angular_velocity.cross(point - center)
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
    }

    pub fn set_inertia_tensor(&mut self, inertia_tensor: Mat3) {
        self.inertia_tensor = inertia_tensor;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.geometry.position = position;
    }

    pub fn set_orientation(&mut self, orientation: Quat) {
        self.geometry.set_orientation(orientation);
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: Vec3) {
        self.angular_velocity = angular_velocity;
    }

    pub fn move_by(&mut self, displacement: Vec3) {
        self.geometry.position += displacement;
    }

    /// Rotates by a rotation vector (axis scaled by angle in radians).
    pub fn spin(&mut self, rotation: Vec3) {
        self.geometry.spin_by_vector(rotation);
    }

    pub fn accelerate(&mut self, delta_velocity: Vec3) {
        self.velocity += delta_velocity;
    }

    pub fn accelerate_rotation(&mut self, delta_angular_velocity: Vec3) {
        self.angular_velocity += delta_angular_velocity;
    }

    /// Forces and torques accumulate until the caller clears them.
    pub fn add_force(&mut self, force: Vec3) {
        self.force += force;
    }

    pub fn add_torque(&mut self, torque: Vec3) {
        self.torque += torque;
    }

    pub fn set_force(&mut self, force: Vec3) {
        self.force = force;
    }

    pub fn set_torque(&mut self, torque: Vec3) {
        self.torque = torque;
    }

    pub fn clear_forces(&mut self) {
        self.force = Vec3::ZERO;
        self.torque = Vec3::ZERO;
    }

    /// Snaps velocities below the configured thresholds to exactly zero.
    pub fn enforce_min_speed(&mut self) {
        if self.velocity.length_squared() < self.min_speed_squared {
            self.velocity = Vec3::ZERO;
        }
        if self.angular_velocity.length_squared() < self.min_angular_speed_squared {
            self.angular_velocity = Vec3::ZERO;
        }
    }
}
