//! Additional math helpers layered on top of `glam`.

use glam::{Mat3, Vec3};

use crate::config::{GEOMETRY_EPSILON, IMPULSE_EPSILON_SQUARED};

/// True when the vector is close enough to zero to have no usable direction.
pub fn is_near_zero(v: Vec3) -> bool {
    v.length_squared() <= GEOMETRY_EPSILON
}

/// Inverse of an inertia tensor, or the zero matrix when it is singular.
pub fn inverse_or_zero(tensor: Mat3) -> Mat3 {
    let det = tensor.determinant();
    if det == 0.0 || !det.is_finite() {
        Mat3::ZERO
    } else {
        tensor.inverse()
    }
}

/// Rejects NaN, exactly-zero and vanishingly small impulses.
pub fn is_valid_impulse(impulse: Vec3) -> bool {
    !impulse.is_nan()
        && impulse != Vec3::ZERO
        && impulse.length_squared() >= IMPULSE_EPSILON_SQUARED
}

/// Effective angular contribution of one body to an impulse denominator
/// along `direction`: `d · ((I⁻¹ (r × d)) × r)`.
pub fn angular_effect(inverse_inertia: Mat3, r: Vec3, direction: Vec3) -> f32 {
    direction.dot((inverse_inertia * r.cross(direction)).cross(r))
}
