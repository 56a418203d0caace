//! Stage definitions: platform layout, goal zone, spawn point
//!
//! A stage is immutable during play. Layouts are plain JSON so they can be
//! edited without recompiling; the built-in one ships embedded in the binary.
//!
//! Content assumptions (not enforced): `width` is at least the viewport
//! width, and platforms do not overlap each other.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;

/// The built-in stage layout
pub const MEADOW_JSON: &str = include_str!("../../stages/meadow.json");

/// Static world geometry plus the goal zone and spawn point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    /// Solid rects the body collides with, in resolution order
    pub platforms: Vec<Rect>,
    /// Reaching this rect ends the play session
    pub goal: Rect,
    /// Where the body starts and respawns
    pub spawn: Vec2,
    /// Full playable width (>= viewport width)
    pub width: f32,
    /// Falling below this y counts as out of bounds
    pub height: f32,
}

impl Stage {
    /// Parse a stage from its JSON definition
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The built-in stage
    pub fn meadow() -> Self {
        Self::from_json(MEADOW_JSON).expect("built-in stage is valid JSON")
    }
}
