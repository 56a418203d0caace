//! Kinematic body physics
//!
//! The body is a plain data record; all behavior lives in the free `step`
//! function so the physics can be driven and inspected from tests without
//! any loop or platform machinery.
//!
//! Movement is resolved one axis at a time, horizontal before vertical.
//! The order is load-bearing: it decides which face of a platform a
//! diagonally moving body snaps against.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Rect, intersects};
use super::stage::Stage;
use super::tick::InputState;
use crate::consts::*;

/// The controllable character's kinematic state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner, world coordinates
    pub pos: Vec2,
    /// Per-tick velocity
    pub vel: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub jump_force: f32,
    /// True only when a downward collision resolved this tick
    pub grounded: bool,
}

impl Body {
    /// A body at rest at the given spawn point
    pub fn spawned_at(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: MOVE_SPEED,
            jump_force: JUMP_FORCE,
            grounded: false,
        }
    }

    /// Current bounding box
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

/// Boundary crossings observed during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Body bounds overlap the goal zone
    pub entered_goal: bool,
    /// Body fell below the stage
    pub fell_out_of_bounds: bool,
}

/// Advance the body one tick against the stage's platforms.
///
/// Platforms are resolved in their stage order. With non-overlapping
/// layouts the result is order-independent; overlapping platforms are
/// unsupported and resolve in whatever order the stage lists them.
pub fn step(body: &mut Body, input: &InputState, stage: &Stage) -> StepEvents {
    // Horizontal pass
    body.vel.x = input.move_dir() * body.speed;
    let prev_x = body.pos.x;
    body.pos.x += body.vel.x;
    for p in &stage.platforms {
        if !intersects(&body.bounds(), p) {
            continue;
        }
        if body.vel.x > 0.0 && prev_x + body.size.x <= p.x {
            // Hit the platform's left face
            body.pos.x = p.x - body.size.x;
            body.vel.x = 0.0;
        } else if body.vel.x < 0.0 && prev_x >= p.x + p.w {
            // Hit the platform's right face
            body.pos.x = p.x + p.w;
            body.vel.x = 0.0;
        }
    }
    body.pos.x = body.pos.x.clamp(0.0, stage.width - body.size.x);

    // Vertical pass
    if input.jump && body.grounded {
        body.vel.y = -body.jump_force;
    }
    body.vel.y += GRAVITY;
    let prev_y = body.pos.y;
    body.pos.y += body.vel.y;
    body.grounded = false;
    for p in &stage.platforms {
        if !intersects(&body.bounds(), p) {
            continue;
        }
        if body.vel.y > 0.0 && prev_y + body.size.y <= p.y {
            // Landed: body was fully above the platform before moving
            body.pos.y = p.y - body.size.y;
            body.vel.y = 0.0;
            body.grounded = true;
        } else if body.vel.y < 0.0 && prev_y >= p.y + p.h {
            // Bumped the underside
            body.pos.y = p.y + p.h;
            body.vel.y = 0.0;
        }
    }

    StepEvents {
        entered_goal: intersects(&body.bounds(), &stage.goal),
        fell_out_of_bounds: body.pos.y > stage.height,
    }
}
