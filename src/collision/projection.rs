//! Min/max projection of point sets onto a scalar measure.
//!
//! Points whose projection lies within a tolerance of an extreme are averaged
//! into that extreme's support point, so face-on contacts report the face
//! center instead of an arbitrary corner.

use glam::Vec3;

use crate::config::PROJECTION_TOLERANCE;

/// Extremes of a projected point set and the averaged points at each end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes {
    pub min: f32,
    pub max: f32,
    pub min_point: Vec3,
    pub max_point: Vec3,
}

#[derive(Default)]
struct Support {
    sum: Vec3,
    count: u32,
}

impl Support {
    fn reset(&mut self) {
        self.sum = Vec3::ZERO;
        self.count = 0;
    }

    fn push(&mut self, point: Vec3) {
        self.sum += point;
        self.count += 1;
    }

    fn centroid(&self) -> Vec3 {
        self.sum / self.count.max(1) as f32
    }
}

/// Projects every point through `distance` and returns the extremes, or
/// `None` for an empty set.
pub fn extremes<F>(points: &[Vec3], distance: F, tolerance: f32) -> Option<Extremes>
where
    F: Fn(Vec3) -> f32,
{
    let tolerance = tolerance.abs();
    let (first, rest) = points.split_first()?;

    let d = distance(*first);
    let (mut min, mut max) = (d, d);
    let mut low = Support::default();
    let mut high = Support::default();
    low.push(*first);
    high.push(*first);

    for &point in rest {
        let d = distance(point);
        if d >= max - tolerance {
            if d > max + tolerance {
                high.reset();
            }
            high.push(point);
            max = max.max(d);
        }
        if d <= min + tolerance {
            if d < min - tolerance {
                low.reset();
            }
            low.push(point);
            min = min.min(d);
        }
    }

    Some(Extremes {
        min,
        max,
        min_point: low.centroid(),
        max_point: high.centroid(),
    })
}

/// Signed overlap of two point sets projected onto `axis`, plus the midpoint
/// of the facing support points. Negative overlap means `axis` separates them.
pub fn projection_overlap(axis: Vec3, group1: &[Vec3], group2: &[Vec3]) -> Option<(f32, Vec3)> {
    let project = |point: Vec3| axis.dot(point);
    let a = extremes(group1, project, PROJECTION_TOLERANCE)?;
    let b = extremes(group2, project, PROJECTION_TOLERANCE)?;

    let group1_first = (a.max - b.min).abs() < (b.max - a.min).abs();
    if group1_first {
        Some((a.max - b.min, (a.max_point + b.min_point) * 0.5))
    } else {
        Some((b.max - a.min, (b.max_point + a.min_point) * 0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(center: Vec3) -> Vec<Vec3> {
        vec![
            center + Vec3::new(1.0, 1.0, 0.0),
            center + Vec3::new(1.0, -1.0, 0.0),
            center + Vec3::new(-1.0, 1.0, 0.0),
            center + Vec3::new(-1.0, -1.0, 0.0),
        ]
    }

    #[test]
    fn tied_extremes_are_averaged() {
        let points = square(Vec3::ZERO);
        let result = extremes(&points, |p| p.x, PROJECTION_TOLERANCE).unwrap();
        assert_eq!(result.min, -1.0);
        assert_eq!(result.max, 1.0);
        assert_eq!(result.max_point, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(result.min_point, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn a_new_extreme_discards_earlier_ties() {
        let points = [Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, 0.0, 0.0)];
        let result = extremes(&points, |p| p.x, PROJECTION_TOLERANCE).unwrap();
        assert_eq!(result.max_point, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(result.min_point, Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn empty_set_has_no_extremes() {
        assert!(extremes(&[], |p| p.x, PROJECTION_TOLERANCE).is_none());
    }

    #[test]
    fn overlap_sign_reports_separation() {
        let a = square(Vec3::ZERO);
        let touching = square(Vec3::new(1.5, 0.0, 0.0));
        let apart = square(Vec3::new(3.0, 0.0, 0.0));

        let (overlap, mid) = projection_overlap(Vec3::X, &a, &touching).unwrap();
        assert_relative_eq!(overlap, 0.5);
        assert_relative_eq!(mid.x, 0.75);

        let (overlap, _) = projection_overlap(Vec3::X, &a, &apart).unwrap();
        assert_relative_eq!(overlap, -1.0);

        // order of the groups does not change the overlap
        let (overlap, _) = projection_overlap(Vec3::X, &touching, &a).unwrap();
        assert_relative_eq!(overlap, 0.5);
    }
}
