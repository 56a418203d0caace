//! Per-frame session tick
//!
//! Ties input, physics, and the goal state machine together. The driver
//! calls `tick` exactly once per animation-frame callback with that
//! callback's timestamp; nothing in here reads a clock or reschedules
//! itself, so tests can run it with synthetic timestamps.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, step};
use super::stage::Stage;
use crate::consts::GOAL_PAUSE_MS;

/// Held/released state of the three logical actions, plus the one-shot
/// restart acknowledgment from the message surface.
///
/// Key handlers flip the held flags between ticks; a tick reads them once
/// at its start (last write wins). `acknowledge` is consumed by `tick`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// One-shot: goal message was acknowledged, restart now
    pub acknowledge: bool,
}

impl InputState {
    /// Net horizontal direction; both held cancels to 0
    #[inline]
    pub fn move_dir(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Current phase of the play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    /// Goal entered; physics frozen until the message is acknowledged or
    /// the pause elapses
    GoalReached,
}

/// Goal pause bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub phase: Phase,
    /// Scheduler timestamp (ms) of the tick that entered the goal
    pub goal_entered_at: f64,
}

impl Session {
    fn playing() -> Self {
        Self {
            phase: Phase::Playing,
            goal_entered_at: 0.0,
        }
    }
}

/// Complete game state owned by the loop driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub stage: Stage,
    pub body: Body,
    pub session: Session,
}

impl GameState {
    pub fn new(stage: Stage) -> Self {
        let body = Body::spawned_at(stage.spawn);
        Self {
            stage,
            body,
            session: Session::playing(),
        }
    }
}

/// What the glue layer must react to after a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Goal just entered; show the message
    pub goal_reached: bool,
    /// Session reset to the spawn point; hide the message
    pub restarted: bool,
}

/// Advance the session by one tick.
///
/// `now_ms` is the scheduler's timestamp for this callback; it is the
/// only clock the session ever sees.
pub fn tick(state: &mut GameState, input: &mut InputState, now_ms: f64) -> TickEvents {
    let mut events = TickEvents::default();

    match state.session.phase {
        Phase::Playing => {
            let stepped = step(&mut state.body, input, &state.stage);
            if stepped.entered_goal {
                state.session.phase = Phase::GoalReached;
                state.session.goal_entered_at = now_ms;
                state.body.vel = Vec2::ZERO;
                events.goal_reached = true;
            } else if stepped.fell_out_of_bounds {
                restart(state, input);
                events.restarted = true;
            }
        }
        Phase::GoalReached => {
            // Physics skipped entirely: no gravity, no collision, input ignored
            let elapsed = now_ms - state.session.goal_entered_at;
            if input.acknowledge || elapsed >= GOAL_PAUSE_MS {
                restart(state, input);
                events.restarted = true;
            }
        }
    }

    input.acknowledge = false;
    events
}

/// Reset body and session to the stage's start; clears all input
fn restart(state: &mut GameState, input: &mut InputState) {
    state.body = Body::spawned_at(state.stage.spawn);
    state.session = Session::playing();
    input.clear();
}

/// Camera offset for rendering; physics always stays in world space.
///
/// Centers the viewport on the body, clamped to the stage edges. Never
/// smoothed, recomputed every tick.
#[inline]
pub fn camera_x(body_x: f32, viewport_w: f32, stage_w: f32) -> f32 {
    (body_x - viewport_w / 2.0).clamp(0.0, (stage_w - viewport_w).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geom::Rect;

    /// Minimal stage: one floor, goal sitting on it near the right edge
    fn goal_stage() -> Stage {
        Stage {
            platforms: vec![Rect::new(0.0, 350.0, 3000.0, 50.0)],
            goal: Rect::new(2930.0, 300.0, 30.0, 50.0),
            spawn: Vec2::new(50.0, 300.0),
            width: 3000.0,
            height: 400.0,
        }
    }

    #[test]
    fn test_goal_entry_freezes_body() {
        let mut state = GameState::new(goal_stage());
        state.body.pos = Vec2::new(2920.0, 320.0);
        let mut input = InputState {
            right: true,
            ..Default::default()
        };

        let events = tick(&mut state, &mut input, 1000.0);
        assert!(events.goal_reached);
        assert_eq!(state.session.phase, Phase::GoalReached);
        assert_eq!(state.body.vel, Vec2::ZERO);

        // Held input is ignored and gravity never accumulates while frozen
        let frozen = state.body;
        for i in 0..10 {
            let events = tick(&mut state, &mut input, 1000.0 + i as f64);
            assert_eq!(events, TickEvents::default());
            assert_eq!(state.body, frozen);
        }
    }

    #[test]
    fn test_goal_pause_restarts_after_duration() {
        let mut state = GameState::new(goal_stage());
        state.body.pos = Vec2::new(2920.0, 320.0);
        let mut input = InputState::default();

        tick(&mut state, &mut input, 1000.0);
        assert_eq!(state.session.phase, Phase::GoalReached);

        // One ms short: still frozen
        let events = tick(&mut state, &mut input, 2999.0);
        assert!(!events.restarted);

        // Exactly the configured pause: restart
        let events = tick(&mut state, &mut input, 3000.0);
        assert!(events.restarted);
        assert_eq!(state.session.phase, Phase::Playing);
        assert_eq!(state.body.pos, state.stage.spawn);
        assert_eq!(state.body.vel, Vec2::ZERO);
        assert!(!state.body.grounded);
    }

    #[test]
    fn test_acknowledge_restarts_immediately() {
        let mut state = GameState::new(goal_stage());
        state.body.pos = Vec2::new(2920.0, 320.0);
        let mut input = InputState::default();

        tick(&mut state, &mut input, 1000.0);
        input.acknowledge = true;
        let events = tick(&mut state, &mut input, 1001.0);
        assert!(events.restarted);
        assert_eq!(state.session.phase, Phase::Playing);
        assert!(!input.acknowledge);
    }

    #[test]
    fn test_restart_clears_held_input() {
        let mut state = GameState::new(goal_stage());
        state.body.pos = Vec2::new(2920.0, 320.0);
        let mut input = InputState {
            left: true,
            jump: true,
            ..Default::default()
        };

        tick(&mut state, &mut input, 0.0);
        tick(&mut state, &mut input, GOAL_PAUSE_MS);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_falling_out_restarts() {
        let mut state = GameState::new(Stage {
            platforms: vec![],
            ..goal_stage()
        });
        state.body.pos = Vec2::new(50.0, 399.8);
        let mut input = InputState {
            right: true,
            ..Default::default()
        };

        let events = tick(&mut state, &mut input, 16.0);
        assert!(events.restarted);
        assert!(!events.goal_reached);
        assert_eq!(state.body.pos, state.stage.spawn);
        assert_eq!(state.body.vel, Vec2::ZERO);
        assert!(!state.body.grounded);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_acknowledge_is_consumed_even_while_playing() {
        let mut state = GameState::new(goal_stage());
        let mut input = InputState {
            acknowledge: true,
            ..Default::default()
        };
        tick(&mut state, &mut input, 16.0);
        assert!(!input.acknowledge);
        assert_eq!(state.session.phase, Phase::Playing);
    }

    #[test]
    fn test_camera_follows_and_clamps() {
        // Left edge
        assert_eq!(camera_x(50.0, 800.0, 3000.0), 0.0);
        // Centered on the body
        assert_eq!(camera_x(1500.0, 800.0, 3000.0), 1100.0);
        // Right edge clamp
        assert_eq!(camera_x(2700.0, 800.0, 3000.0), 2200.0);
        // Stage no wider than the viewport never scrolls
        assert_eq!(camera_x(400.0, 800.0, 800.0), 0.0);
        assert_eq!(camera_x(400.0, 800.0, 600.0), 0.0);
    }

    #[test]
    fn test_walk_and_jump_to_goal() {
        // Drive the sim like the loop would: hold right, hop when grounded
        let mut state = GameState::new(goal_stage());
        let mut input = InputState {
            right: true,
            ..Default::default()
        };
        let mut reached = false;
        for i in 0..2000 {
            input.jump = state.body.grounded && i % 90 == 0;
            let events = tick(&mut state, &mut input, i as f64 * 16.0);
            if events.goal_reached {
                reached = true;
                break;
            }
        }
        assert!(reached, "body never reached the goal");
    }
}
