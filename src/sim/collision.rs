//! Axis-aligned bounding box tests
//!
//! Everything in the world is an unrotated rectangle with its origin at the
//! top-left corner and y growing downward (canvas coordinates).

use glam::Vec2;

/// An axis-aligned rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict overlap on the x axis (touching edges do not count)
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Strict overlap on both axes
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.top() < other.bottom() && self.bottom() > other.top()
    }

    /// True when `self` comes down onto `other` from above
    ///
    /// The boxes must overlap horizontally, `self`'s top must be above
    /// `other`'s top, and `self`'s bottom must reach past `other`'s top.
    pub fn lands_on(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.top() < other.top() && self.bottom() > other.top()
    }
}
