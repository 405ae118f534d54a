//! Quaternion builders: rotation vectors, axis/angle, and yaw/pitch/roll.

use std::f32::consts::{PI, TAU};

use glam::{Mat3, Quat, Vec3};

use crate::utils::math::is_near_zero;

/// Yaw axis used when none is supplied.
pub const DEFAULT_YAW_AXIS: Vec3 = Vec3::Z;

/// Roll axis used when none is supplied.
pub const DEFAULT_ROLL_AXIS: Vec3 = Vec3::X;

/// Quaternion for a rotation vector whose direction is the axis and whose
/// length is the angle in radians. The zero vector yields the identity.
pub fn from_rotation_vector(rotation: Vec3) -> Quat {
    axis_angle(rotation, rotation.length())
}

/// Rotation of `angle` radians about `axis`. The angle is wrapped into
/// (-π, π]; an axis too short to normalize yields the identity instead of
/// NaN.
pub fn axis_angle(axis: Vec3, angle: f32) -> Quat {
    let Some(axis) = axis.try_normalize() else {
        return Quat::IDENTITY;
    };
    if !angle.is_finite() {
        return Quat::IDENTITY;
    }
    Quat::from_axis_angle(axis, wrap_angle(angle))
}

fn wrap_angle(angle: f32) -> f32 {
    let mut wrapped = angle % TAU;
    if wrapped > PI {
        wrapped -= TAU;
    } else if wrapped <= -PI {
        wrapped += TAU;
    }
    wrapped
}

/// Composite rotation `yaw * pitch * roll`, where pitch turns about
/// `yaw_axis × roll_axis`.
///
/// Degenerate axes are repaired rather than rejected: both zero falls back
/// to [`DEFAULT_YAW_AXIS`]/[`DEFAULT_ROLL_AXIS`]; a zero roll axis, or one
/// parallel to the yaw axis, is rebuilt from the world axis the yaw axis
/// leans on least; a zero yaw axis is rebuilt symmetrically from the roll
/// axis. Non-orthogonal axes are squared up so roll = pitch × yaw.
pub fn yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32, yaw_axis: Vec3, roll_axis: Vec3) -> Quat {
    if yaw == 0.0 && pitch == 0.0 && roll == 0.0 {
        return Quat::IDENTITY;
    }

    let mut yaw_axis = yaw_axis;
    let mut roll_axis = roll_axis;
    let mut orthogonalize = yaw_axis.dot(roll_axis) != 0.0;

    let yaw_zero = yaw_axis == Vec3::ZERO;
    let roll_zero = roll_axis == Vec3::ZERO;
    if yaw_zero && roll_zero {
        yaw_axis = DEFAULT_YAW_AXIS;
        roll_axis = DEFAULT_ROLL_AXIS;
        orthogonalize = false;
    } else if roll_zero || (!yaw_zero && is_near_zero(yaw_axis.cross(roll_axis))) {
        roll_axis = roll_axis_for(yaw_axis);
        orthogonalize = false;
    } else if yaw_zero {
        yaw_axis = yaw_axis_for(roll_axis);
        orthogonalize = false;
    }

    let pitch_axis = yaw_axis.cross(roll_axis);
    if orthogonalize {
        roll_axis = pitch_axis.cross(yaw_axis);
    }

    axis_angle(yaw_axis, yaw) * axis_angle(pitch_axis, pitch) * axis_angle(roll_axis, roll)
}

/// [`yaw_pitch_roll`] about the default axes.
pub fn yaw_pitch_roll_default(yaw: f32, pitch: f32, roll: f32) -> Quat {
    yaw_pitch_roll(yaw, pitch, roll, DEFAULT_YAW_AXIS, DEFAULT_ROLL_AXIS)
}

fn roll_axis_for(yaw_axis: Vec3) -> Vec3 {
    let p = yaw_axis;
    if p.x.abs() > p.z.abs() && p.x.abs() > p.y.abs() {
        Vec3::new(0.0, if p.x < 0.0 { 1.0 } else { -1.0 }, 0.0).cross(yaw_axis)
    } else if p.y.abs() > p.z.abs() {
        Vec3::new(if p.y < 0.0 { -1.0 } else { 1.0 }, 0.0, 0.0).cross(yaw_axis)
    } else {
        Vec3::new(0.0, if p.z < 0.0 { -1.0 } else { 1.0 }, 0.0).cross(yaw_axis)
    }
}

fn yaw_axis_for(roll_axis: Vec3) -> Vec3 {
    let p = roll_axis;
    if p.y.abs() > p.x.abs() && p.y.abs() > p.z.abs() {
        roll_axis.cross(Vec3::new(if p.y < 0.0 { 1.0 } else { -1.0 }, 0.0, 0.0))
    } else if p.z.abs() > p.x.abs() {
        roll_axis.cross(Vec3::new(0.0, if p.z < 0.0 { -1.0 } else { 1.0 }, 0.0))
    } else {
        roll_axis.cross(Vec3::new(0.0, if p.x < 0.0 { -1.0 } else { 1.0 }, 0.0))
    }
}

/// Orientation whose local Z axis is `normal` and whose local Y axis is `up`
/// projected perpendicular to it. Falls back to another up axis when `up`
/// is parallel to `normal`.
pub fn from_normal_and_up(normal: Vec3, up: Vec3) -> Quat {
    if is_near_zero(normal) {
        return Quat::IDENTITY;
    }
    let z = normal.normalize();
    let mut x = up.cross(z);
    if is_near_zero(x) {
        x = z.any_orthonormal_vector();
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}
