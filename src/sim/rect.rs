//! Axis-aligned rectangle geometry
//!
//! Coordinates are in field units with y growing upward; `(x, y)` is the
//! bottom-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top edge (largest y)
    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Right edge (largest x)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Strict overlap: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.top()
            && self.top() > other.y
    }

    /// Point containment, inclusive on all four edges
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.top()
    }

    /// Clamp `x` so the rectangle stays within `[0, field_width]`
    pub fn clamp_x(&mut self, field_width: f32) {
        let max_x = (field_width - self.width).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }

    /// Rectangle of the given size centered horizontally in the field
    pub fn centered_x(field_width: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(field_width / 2.0 - width / 2.0, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_strict_edges() {
        let a = Rect::new(0.0, 0.0, 64.0, 64.0);
        let touching = Rect::new(64.0, 0.0, 64.0, 64.0);
        let inside = Rect::new(63.0, 63.0, 64.0, 64.0);

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_contains_inclusive() {
        let r = Rect::new(368.0, 20.0, 64.0, 32.0);

        assert!(r.contains(Vec2::new(368.0, 20.0)));
        assert!(r.contains(Vec2::new(432.0, 52.0)));
        assert!(r.contains(Vec2::new(420.0, 20.0)));
        assert!(!r.contains(Vec2::new(432.5, 30.0)));
        assert!(!r.contains(Vec2::new(400.0, 19.9)));
    }

    #[test]
    fn test_clamp_x() {
        let mut r = Rect::new(-12.0, 20.0, 64.0, 64.0);
        r.clamp_x(800.0);
        assert_eq!(r.x, 0.0);

        r.x = 790.0;
        r.clamp_x(800.0);
        assert_eq!(r.x, 736.0);

        r.x = 100.0;
        r.clamp_x(800.0);
        assert_eq!(r.x, 100.0);
    }

    #[test]
    fn test_centered_x() {
        let r = Rect::centered_x(800.0, 20.0, 64.0, 32.0);
        assert_eq!(r.x, 368.0);
        assert_eq!(r.right(), 432.0);
    }
}
