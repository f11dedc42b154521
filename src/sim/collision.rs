//! Collision shapes and overlap predicates
//!
//! Two predicates on purpose: bullets vs mobs use cheap axis-aligned
//! rectangles, the player vs mobs uses bounding circles that better match
//! the round ship/asteroid silhouettes.

use glam::Vec2;

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap: rectangles that merely share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Axis-aligned bounding box of a square of side `size` rotated by
/// `rot_deg`, centered on `center`. Rotation widens the box but never
/// moves the center, so a spinning mob does not drift.
pub fn rotated_square_aabb(center: Vec2, size: f32, rot_deg: f32) -> Rect {
    let rad = rot_deg.to_radians();
    let half = size / 2.0 * (rad.cos().abs() + rad.sin().abs());
    Rect {
        min: center - Vec2::splat(half),
        max: center + Vec2::splat(half),
    }
}

/// Bounding-circle overlap test
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) < reach * reach
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap() {
        let a = Rect::from_center(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::from_center(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let far = Rect::from_center(Vec2::new(30.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_rect_edge_touch_is_not_overlap() {
        let a = Rect::from_center(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::from_center(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_rotated_aabb_unrotated_matches_sprite() {
        let rect = rotated_square_aabb(Vec2::new(100.0, 100.0), 40.0, 0.0);
        assert!((rect.min.x - 80.0).abs() < 0.001);
        assert!((rect.max.y - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_rotated_aabb_widens_at_45_degrees() {
        let rect = rotated_square_aabb(Vec2::ZERO, 40.0, 45.0);
        // Diagonal of a 40px square is 40*sqrt(2)
        let expected_half = 20.0 * std::f32::consts::SQRT_2;
        assert!((rect.max.x - expected_half).abs() < 0.01);
        // Center stays put
        assert!((rect.min.x + rect.max.x).abs() < 0.001);
    }

    #[test]
    fn test_circles_overlap() {
        assert!(circles_overlap(
            Vec2::new(0.0, 0.0),
            20.0,
            Vec2::new(30.0, 0.0),
            17.0
        ));
        assert!(!circles_overlap(
            Vec2::new(0.0, 0.0),
            20.0,
            Vec2::new(40.0, 0.0),
            17.0
        ));
    }
}
