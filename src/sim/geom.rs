//! Integer pixel rectangles
//!
//! Edges follow the usual raster convention: `right()` and `bottom()` are
//! exclusive, so two rectangles that share an edge do not intersect.

use glam::IVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn from_size(size: IVec2) -> Self {
        Self { pos: IVec2::ZERO, size }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    pub fn set_center(&mut self, center: IVec2) {
        self.pos = center - self.size / 2;
    }

    /// Place the rect so its left edge midpoint sits on `point`
    pub fn set_midleft(&mut self, point: IVec2) {
        self.pos = IVec2::new(point.x, point.y - self.size.y / 2);
    }

    /// Place the rect so its bottom-right corner sits on `point`
    pub fn set_bottomright(&mut self, point: IVec2) {
        self.pos = point - self.size;
    }

    pub fn translated(mut self, delta: IVec2) -> Self {
        self.pos += delta;
        self
    }

    /// Overlap with positive area
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn contains_point(&self, p: IVec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}
