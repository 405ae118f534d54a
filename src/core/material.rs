use serde::{Deserialize, Serialize};

/// Material coefficients that affect integration and contact response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Mass per unit volume; used when an actor has no explicit mass.
    pub density: f32,
    /// Restitution term; a pair bounces with `e = 1 + min(elasticity)`.
    pub elasticity: f32,
    pub linear_drag: f32,
    pub rotational_drag: f32,
    pub static_friction: f32,
    pub dynamic_friction: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: 1.0,
            elasticity: 0.9,
            linear_drag: 0.5,
            rotational_drag: 0.5,
            static_friction: 1.0,
            dynamic_friction: 1.0,
        }
    }
}

impl Material {
    pub fn new(density: f32, elasticity: f32, static_friction: f32, dynamic_friction: f32) -> Self {
        Self {
            density,
            elasticity,
            static_friction,
            dynamic_friction,
            ..Self::default()
        }
    }

    /// Cloth on a table bed: soft bounce, high grip.
    pub fn felt() -> Self {
        Self::new(1.0, 0.5, 2.0, 2.0)
    }

    /// Billiard-ball material.
    pub fn ivory() -> Self {
        Self::default()
    }

    pub fn with_drag(mut self, linear: f32, rotational: f32) -> Self {
        self.linear_drag = linear;
        self.rotational_drag = rotational;
        self
    }

    /// Averaged `(static, dynamic)` friction coefficients of a contact pair.
    pub fn friction_pair(a: &Self, b: &Self) -> (f32, f32) {
        (
            (a.static_friction + b.static_friction) * 0.5,
            (a.dynamic_friction + b.dynamic_friction) * 0.5,
        )
    }

    /// Restitution multiplier `1 + min(elasticity)` of a contact pair.
    pub fn restitution_pair(a: &Self, b: &Self) -> f32 {
        1.0 + a.elasticity.min(b.elasticity)
    }
}
