//! Axis-aligned rectangle geometry
//!
//! Everything in the stage is an axis-aligned rect in world coordinates;
//! the overlap test here backs every collision and goal check.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, top-left anchored, in world (stage) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Top-left corner
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Half-open overlap test on both axes.
///
/// Rects that merely touch along an edge (equal coordinates) do NOT
/// intersect, so a body resting exactly on top of a platform is not
/// considered colliding with it.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}
