//! Axis-aligned bounding-box collision
//!
//! Everything in the world collides as screen-space rectangles. Hitboxes may
//! be smaller than drawn sprites (bird obstacles use an inset box), so the
//! rect here is always the *hitbox*, never the sprite bounds.

use glam::Vec2;

/// Screen-space rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict AABB overlap test; rects that merely share an edge do not hit
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }

    /// Shrink the rect by `fraction` of its size on every side
    ///
    /// Used for tighter-than-sprite hitboxes. Fractions at or above 0.5
    /// would invert the rect and are clamped to a degenerate center box.
    pub fn inset(&self, fraction: f32) -> Rect {
        let f = fraction.clamp(0.0, 0.5);
        let dx = self.size.x * f;
        let dy = self.size.y * f;
        Rect {
            pos: self.pos + Vec2::new(dx, dy),
            size: (self.size - 2.0 * Vec2::new(dx, dy)).max(Vec2::ZERO),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}
