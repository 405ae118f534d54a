//! Pairwise shape intersection.
//!
//! A fixed table indexed by [`ShapeKind::index`] picks the detector for each
//! ordered pair of shape kinds. Six detectors are implemented directly; the
//! three mirrored pairs call their counterpart with the arguments swapped and
//! flip the result, so every normal points from the first shape to the second.

use glam::Vec3;

use super::{contact::Collision, projection};
use crate::config::{GEOMETRY_EPSILON, PROJECTION_TOLERANCE};
use crate::core::geometry::{Geometry, Shape, ShapeKind};
use crate::utils::math::is_near_zero;

type Detector = fn(&Geometry, &Geometry) -> Option<Collision>;

const DETECTORS: [[Detector; ShapeKind::COUNT]; ShapeKind::COUNT] = [
    [plane_plane, plane_sphere, plane_box],
    [sphere_plane, sphere_sphere, sphere_box],
    [box_plane, box_sphere, box_box],
];

impl Geometry {
    /// Tests two shapes for intersection and describes the contact.
    ///
    /// A shape never collides with itself (the same instance passed twice).
    /// The result depends only on the two inputs.
    pub fn detect_collision(shape1: &Geometry, shape2: &Geometry) -> Option<Collision> {
        if std::ptr::eq(shape1, shape2) {
            return None;
        }
        let detector = DETECTORS[shape1.shape_kind().index()][shape2.shape_kind().index()];
        detector(shape1, shape2)
    }

    /// Boolean form of [`Geometry::detect_collision`].
    pub fn intersects(&self, other: &Geometry) -> bool {
        Self::detect_collision(self, other).is_some()
    }
}

fn sphere_plane(a: &Geometry, b: &Geometry) -> Option<Collision> {
    plane_sphere(b, a).map(Collision::flipped)
}

fn box_plane(a: &Geometry, b: &Geometry) -> Option<Collision> {
    plane_box(b, a).map(Collision::flipped)
}

fn box_sphere(a: &Geometry, b: &Geometry) -> Option<Collision> {
    sphere_box(b, a).map(Collision::flipped)
}

fn sphere_radius(geometry: &Geometry) -> Option<f32> {
    match geometry.shape() {
        Shape::Sphere { radius } => Some(*radius),
        _ => None,
    }
}

fn box_extents(geometry: &Geometry) -> Option<Vec3> {
    match geometry.shape() {
        Shape::Box { half_extents } => Some(*half_extents),
        _ => None,
    }
}

/// Planes only miss when parallel and offset. Intersecting planes report a
/// zero-depth contact on their shared line, with the bisector as normal.
fn plane_plane(a: &Geometry, b: &Geometry) -> Option<Collision> {
    let n1 = a.plane_normal()?;
    let n2 = b.plane_normal()?;
    let line = n1.cross(n2);
    let midpoint = (a.position + b.position) * 0.5;

    if is_near_zero(line) {
        if n1.dot(b.position - a.position).abs() > f32::EPSILON {
            return None;
        }
        return Some(Collision::new(a, b, midpoint, n1, 0.0));
    }

    let aligned = if n1.dot(n2) < 0.0 { -n2 } else { n2 };
    let normal = (n1 + aligned).normalize();

    // point on the intersection line, then slid along it to the midpoint
    let d1 = n1.dot(a.position);
    let d2 = n2.dot(b.position);
    let on_line = (n2 * d1 - n1 * d2).cross(line) / line.length_squared();
    let direction = line.normalize();
    let point = on_line + direction * direction.dot(midpoint - on_line);

    Some(Collision::new(a, b, point, normal, 0.0))
}

fn plane_sphere(plane: &Geometry, sphere: &Geometry) -> Option<Collision> {
    let mut normal = plane.plane_normal()?;
    let radius = sphere_radius(sphere)?;

    let mut distance = normal.dot(sphere.position - plane.position);
    if distance < 0.0 {
        normal = -normal;
        distance = -distance;
    }
    if distance > radius {
        return None;
    }

    let point = sphere.position - normal * radius;
    Some(Collision::new(plane, sphere, point, normal, radius - distance))
}

fn plane_box(plane: &Geometry, cuboid: &Geometry) -> Option<Collision> {
    let plane_normal = plane.plane_normal()?;
    box_extents(cuboid)?;

    let vertices = cuboid.vertices();
    let ext = projection::extremes(
        &vertices,
        |v| plane_normal.dot(v - plane.position),
        PROJECTION_TOLERANCE,
    )?;
    if ext.min * ext.max > 0.0 {
        return None;
    }

    // the box lies mostly on the side with the larger reach
    let below = ext.min.abs() > ext.max;
    let (normal, support) = if below {
        (-plane_normal, ext.max_point)
    } else {
        (plane_normal, ext.min_point)
    };
    let interpenetration = ext.min.abs().min(ext.max);
    let point = support + normal * interpenetration * 0.5;

    Some(Collision::new(plane, cuboid, point, normal, interpenetration))
}

fn sphere_sphere(a: &Geometry, b: &Geometry) -> Option<Collision> {
    let r1 = sphere_radius(a)?;
    let r2 = sphere_radius(b)?;

    let reach = r1 + r2;
    let distance_squared = a.position.distance_squared(b.position);
    if distance_squared > reach * reach {
        return None;
    }

    let offset = b.position - a.position;
    // concentric spheres have no preferred direction; pick +Y
    let normal = if offset == Vec3::ZERO {
        Vec3::Y
    } else {
        offset.normalize()
    };
    let interpenetration = reach - distance_squared.sqrt();
    let point = a.position + normal * (r1 - interpenetration * 0.5);

    Some(Collision::new(a, b, point, normal, interpenetration))
}

fn sphere_box(sphere: &Geometry, cuboid: &Geometry) -> Option<Collision> {
    let radius = sphere_radius(sphere)?;
    box_extents(cuboid)?;

    let center = sphere.position;
    let inside = cuboid.contains(center);
    let (closest, face_normal) = cuboid.closest_surface_point_with_normal(center);
    if !inside && !sphere.contains(closest) {
        return None;
    }

    let to_surface = closest - center;
    let distance = to_surface.length();
    let mut normal = if inside { -to_surface } else { to_surface }.normalize_or_zero();
    if normal == Vec3::ZERO {
        // center sits on the surface
        normal = if face_normal != Vec3::ZERO {
            -face_normal
        } else {
            (cuboid.position - center).normalize_or(Vec3::Y)
        };
    }

    let interpenetration = if inside {
        radius + distance
    } else {
        radius - distance
    };
    let point = center + normal * (radius - interpenetration * 0.5);

    Some(Collision::new(sphere, cuboid, point, normal, interpenetration))
}

/// Separating-axis test over the center-to-center direction, both boxes'
/// face normals and the nine edge cross products. The contact point is the
/// midpoint of the facing support points on the winning axis, an estimate
/// rather than a clipped contact patch.
fn box_box(a: &Geometry, b: &Geometry) -> Option<Collision> {
    let e1 = box_extents(a)?;
    let e2 = box_extents(b)?;

    let reach = e1.length() + e2.length();
    let offset = b.position - a.position;
    if reach * reach < offset.length_squared() {
        return None;
    }

    let center_axis = offset.normalize_or_zero();
    let mut axes = Vec::with_capacity(16);
    if center_axis != Vec3::ZERO {
        axes.push(center_axis);
    }
    for i in 0..3 {
        axes.push(a.axis(i));
        axes.push(b.axis(i));
        for j in 0..3 {
            let cross = a.axis(i).cross(b.axis(j));
            if cross.length_squared() > GEOMETRY_EPSILON {
                axes.push(cross.normalize());
            }
        }
    }

    let vertices1 = a.vertices();
    let vertices2 = b.vertices();

    let mut best: Option<(f32, Vec3, Vec3)> = None;
    for axis in axes {
        let (overlap, midpoint) = projection::projection_overlap(axis, &vertices1, &vertices2)?;
        if overlap < 0.0 {
            return None;
        }
        if best.map_or(true, |(depth, _, _)| overlap < depth) {
            best = Some((overlap, axis, midpoint));
        }
    }

    let (interpenetration, mut normal, point) = best?;
    if normal.dot(offset) < 0.0 {
        normal = -normal;
    }

    Some(Collision::new(a, b, point, normal, interpenetration))
}
