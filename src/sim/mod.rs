//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Scheduler timestamps passed in, never read from a clock
//! - No rendering or platform dependencies

pub mod body;
pub mod geom;
pub mod stage;
pub mod tick;

pub use body::{Body, StepEvents, step};
pub use geom::{Rect, intersects};
pub use stage::Stage;
pub use tick::{GameState, InputState, Phase, Session, TickEvents, camera_x, tick};
