//! Per-shape geometric queries on [`Geometry`].
//!
//! Planes are infinite, so their volume, area and bounding extents are
//! reported as zero and their inertia tensor is the zero matrix.

use std::f32::consts::PI;

use glam::{Mat3, Vec3};

use super::geometry::{Geometry, Shape};

const PLANE_CONTAINS_TOLERANCE: f32 = 1e-6;

impl Geometry {
    /// Half-extents of the world-axis-aligned bounding box, ignoring translation.
    pub fn axis_aligned_extents(&self) -> Vec3 {
        match self.shape() {
            Shape::Plane { .. } => Vec3::ZERO,
            Shape::Sphere { radius } => Vec3::splat(*radius),
            Shape::Box { half_extents } => {
                let e = *half_extents;
                [
                    e,
                    Vec3::new(-e.x, e.y, e.z),
                    Vec3::new(e.x, -e.y, e.z),
                    Vec3::new(e.x, e.y, -e.z),
                ]
                .into_iter()
                .map(|corner| self.to_world_direction(corner).abs())
                .fold(Vec3::ZERO, Vec3::max)
            }
        }
    }

    /// Closest point on the shape's surface to `point`.
    pub fn closest_surface_point(&self, point: Vec3) -> Vec3 {
        self.closest_surface_point_with_normal(point).0
    }

    /// Closest surface point plus the outward surface normal there. The
    /// normal is zero where it is undefined (box edges and corners, sphere
    /// center).
    pub fn closest_surface_point_with_normal(&self, point: Vec3) -> (Vec3, Vec3) {
        match self.shape() {
            Shape::Plane { .. } => {
                let normal = self.local_z_axis();
                let distance = normal.dot(point - self.position);
                (point - normal * distance, normal)
            }
            Shape::Sphere { radius } => {
                let direction = (point - self.position).normalize_or_zero();
                (self.position + direction * *radius, direction)
            }
            Shape::Box { half_extents } => self.closest_box_point(*half_extents, point),
        }
    }

    fn closest_box_point(&self, extents: Vec3, point: Vec3) -> (Vec3, Vec3) {
        let local = self.to_local_point(point);
        let mut distances = extents - local.abs();

        // inside: snap to the nearest face by flagging that axis negative
        if distances.cmpgt(Vec3::ZERO).all() {
            if distances.x < distances.y && distances.x < distances.z {
                distances.x = -distances.x;
            } else if distances.y < distances.z {
                distances.y = -distances.y;
            } else {
                distances.z = -distances.z;
            }
        }

        let sign = Vec3::select(local.cmplt(Vec3::ZERO), Vec3::NEG_ONE, Vec3::ONE);
        let surface = sign * (extents - distances.max(Vec3::ZERO));

        // faces only; edges and corners have no single normal
        let on_face = surface.abs().cmpeq(extents);
        let normal = match (on_face.test(0), on_face.test(1), on_face.test(2)) {
            (true, false, false) => self.to_world_direction(Vec3::new(sign.x, 0.0, 0.0)),
            (false, true, false) => self.to_world_direction(Vec3::new(0.0, sign.y, 0.0)),
            (false, false, true) => self.to_world_direction(Vec3::new(0.0, 0.0, sign.z)),
            _ => Vec3::ZERO,
        };

        (self.to_world_point(surface), normal)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        match self.shape() {
            Shape::Plane { .. } => {
                self.local_z_axis().dot(point - self.position).abs() <= PLANE_CONTAINS_TOLERANCE
            }
            Shape::Sphere { radius } => self.position.distance_squared(point) <= radius * radius,
            Shape::Box { half_extents } => {
                let local = self.to_local_point(point);
                local.abs().cmple(*half_extents).all()
            }
        }
    }

    pub fn volume(&self) -> f32 {
        match self.shape() {
            Shape::Plane { .. } => 0.0,
            Shape::Sphere { radius } => radius * radius * radius * PI * 4.0 / 3.0,
            Shape::Box { half_extents } => half_extents.x * half_extents.y * half_extents.z * 8.0,
        }
    }

    pub fn area(&self) -> f32 {
        match self.shape() {
            Shape::Plane { .. } => 0.0,
            Shape::Sphere { radius } => radius * radius * PI * 4.0,
            Shape::Box { half_extents } => {
                let e = half_extents;
                (e.x * e.y + e.y * e.z + e.z * e.x) * 8.0
            }
        }
    }

    /// Inertia tensor divided by mass, in local axes.
    pub fn unit_inertia_tensor(&self) -> Mat3 {
        match self.shape() {
            Shape::Plane { .. } => Mat3::ZERO,
            Shape::Sphere { radius } => Mat3::from_diagonal(Vec3::splat(radius * radius * 2.0 / 3.0)),
            Shape::Box { half_extents } => {
                let sq = *half_extents * *half_extents;
                Mat3::from_diagonal(Vec3::new(sq.y + sq.z, sq.x + sq.z, sq.x + sq.y) / 3.0)
            }
        }
    }

    /// World-space corners of a box; empty for other shapes.
    pub fn vertices(&self) -> Vec<Vec3> {
        let Shape::Box { half_extents: e } = self.shape() else {
            return Vec::new();
        };
        let mut corners = Vec::with_capacity(8);
        for sx in [1.0, -1.0] {
            for sy in [1.0, -1.0] {
                for sz in [1.0, -1.0] {
                    corners.push(self.to_world_point(Vec3::new(sx * e.x, sy * e.y, sz * e.z)));
                }
            }
        }
        corners
    }

    /// Full box dimensions; zero for other shapes.
    pub fn size(&self) -> Vec3 {
        match self.shape() {
            Shape::Box { half_extents } => *half_extents * 2.0,
            _ => Vec3::ZERO,
        }
    }

    /// Radius of the sphere enclosing the shape about its position.
    pub fn bounding_radius(&self) -> f32 {
        match self.shape() {
            Shape::Plane { .. } => f32::INFINITY,
            Shape::Sphere { radius } => *radius,
            Shape::Box { half_extents } => half_extents.length(),
        }
    }

    /// Plane normal (local Z); `None` for non-planes.
    pub fn plane_normal(&self) -> Option<Vec3> {
        matches!(self.shape(), Shape::Plane { .. }).then(|| self.local_z_axis())
    }
}
