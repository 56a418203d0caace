//! Heart Hopper - a tiny side-scrolling canvas platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision, session state)
//! - `render`: Canvas 2D drawing (wasm only)
//!
//! All gameplay runs in world coordinates; the camera offset is applied
//! only at draw time.

pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod render;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration per tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Horizontal run speed (pixels/tick)
    pub const MOVE_SPEED: f32 = 4.0;
    /// Initial upward velocity of a jump (pixels/tick)
    pub const JUMP_FORCE: f32 = 12.0;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;

    /// Visible portion of the stage
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;

    /// How long the goal message stays up before the stage restarts (ms)
    pub const GOAL_PAUSE_MS: f64 = 2000.0;
}
