use glam::Vec3;

use crate::core::geometry::Geometry;

/// Result of a positive collision query between two shapes.
///
/// `normal` points from `shape1` toward `shape2`; both shapes are snapshots
/// owned by the record, so it stays valid after the originals move.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub point: Vec3,
    pub normal: Vec3,
    pub interpenetration: f32,
    pub shape1: Geometry,
    pub shape2: Geometry,
}

impl Collision {
    pub fn new(
        shape1: &Geometry,
        shape2: &Geometry,
        point: Vec3,
        normal: Vec3,
        interpenetration: f32,
    ) -> Self {
        Self {
            point,
            normal,
            interpenetration,
            shape1: shape1.clone(),
            shape2: shape2.clone(),
        }
    }

    /// Same contact seen from the other shape: normal negated, shapes swapped.
    pub fn flipped(self) -> Self {
        Self {
            point: self.point,
            normal: -self.normal,
            interpenetration: self.interpenetration,
            shape1: self.shape2,
            shape2: self.shape1,
        }
    }
}
