use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::orientation;

/// Tag identifying which variant a [`Shape`] is; indexes the collision
/// dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Plane,
    Sphere,
    Box,
}

impl ShapeKind {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            ShapeKind::Plane => 0,
            ShapeKind::Sphere => 1,
            ShapeKind::Box => 2,
        }
    }
}

/// Shape-specific parameters, expressed in the geometry's local frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Infinite plane through the origin with normal = local Z.
    /// `increments` and `size` only describe how it is tessellated for drawing.
    Plane { increments: u32, size: f32 },
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Plane { .. } => ShapeKind::Plane,
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Box { .. } => ShapeKind::Box,
        }
    }
}

/// A shape placed in the world: position, orientation and a rotation matrix
/// that is always rebuilt together with the orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub position: Vec3,
    orientation: Quat,
    rotation: Mat3,
    shape: Shape,
}

impl Geometry {
    pub fn new(shape: Shape, position: Vec3, orientation: Quat) -> Self {
        let mut geometry = Self {
            position,
            orientation: Quat::IDENTITY,
            rotation: Mat3::IDENTITY,
            shape,
        };
        geometry.set_orientation(orientation);
        geometry
    }

    /// Plane through `origin` facing `normal`, with `up` as its vertical axis.
    pub fn plane(origin: Vec3, normal: Vec3, up: Vec3) -> Self {
        Self::plane_with_orientation(origin, orientation::from_normal_and_up(normal, up))
    }

    pub fn plane_with_orientation(origin: Vec3, orientation: Quat) -> Self {
        Self::new(
            Shape::Plane {
                increments: 20,
                size: 1.0,
            },
            origin,
            orientation,
        )
    }

    pub fn sphere(radius: f32, center: Vec3) -> Self {
        Self::new(Shape::Sphere { radius }, center, Quat::IDENTITY)
    }

    pub fn cuboid(half_extents: Vec3, center: Vec3) -> Self {
        Self::new(Shape::Box { half_extents }, center, Quat::IDENTITY)
    }

    pub fn with_tessellation(mut self, increments: u32, size: f32) -> Self {
        if let Shape::Plane {
            increments: i,
            size: s,
        } = &mut self.shape
        {
            *i = increments;
            *s = size;
        }
        self
    }

    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.set_orientation(orientation);
        self
    }

    pub fn with_rotation_vector(mut self, rotation: Vec3) -> Self {
        self.set_rotation_vector(rotation);
        self
    }

    pub fn with_axis_angle(mut self, axis: Vec3, angle: f32) -> Self {
        self.set_axis_angle(axis, angle);
        self
    }

    pub fn with_yaw_pitch_roll(self, yaw: f32, pitch: f32, roll: f32) -> Self {
        self.with_orientation(orientation::yaw_pitch_roll_default(yaw, pitch, roll))
    }

    pub fn with_yaw_pitch_roll_axes(
        self,
        yaw: f32,
        pitch: f32,
        roll: f32,
        yaw_axis: Vec3,
        roll_axis: Vec3,
    ) -> Self {
        self.with_orientation(orientation::yaw_pitch_roll(
            yaw, pitch, roll, yaw_axis, roll_axis,
        ))
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn rotation_matrix(&self) -> &Mat3 {
        &self.rotation
    }

    /// Local axis `index % 3` expressed in world space.
    pub fn axis(&self, index: usize) -> Vec3 {
        self.rotation.col(index % 3)
    }

    pub fn local_x_axis(&self) -> Vec3 {
        self.rotation.x_axis
    }

    pub fn local_y_axis(&self) -> Vec3 {
        self.rotation.y_axis
    }

    pub fn local_z_axis(&self) -> Vec3 {
        self.rotation.z_axis
    }

    pub fn set_orientation(&mut self, orientation: Quat) {
        let orientation = if orientation.length_squared() == 0.0 || orientation.is_nan() {
            Quat::IDENTITY
        } else {
            orientation.normalize()
        };
        self.orientation = orientation;
        self.rotation = Mat3::from_quat(orientation);
    }

    pub fn set_rotation_vector(&mut self, rotation: Vec3) {
        self.set_orientation(orientation::from_rotation_vector(rotation));
    }

    pub fn set_axis_angle(&mut self, axis: Vec3, angle: f32) {
        self.set_orientation(orientation::axis_angle(axis, angle));
    }

    /// Applies `rotation` on top of the current orientation (world frame).
    pub fn spin(&mut self, rotation: Quat) {
        self.set_orientation(rotation * self.orientation);
    }

    pub fn spin_by_vector(&mut self, rotation: Vec3) {
        if rotation != Vec3::ZERO {
            self.spin(orientation::from_rotation_vector(rotation));
        }
    }

    pub fn spin_axis_angle(&mut self, axis: Vec3, angle: f32) {
        self.spin(orientation::axis_angle(axis, angle));
    }

    pub fn to_world_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }

    pub fn to_world_direction(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    pub fn to_local_point(&self, world: Vec3) -> Vec3 {
        self.rotation.transpose() * (world - self.position)
    }

    pub fn to_local_direction(&self, world: Vec3) -> Vec3 {
        self.rotation.transpose() * world
    }
}
