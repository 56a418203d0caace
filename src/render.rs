//! Canvas 2D rendering
//!
//! Draws one frame: clear, camera translate, platforms, goal, player glyph.
//! World coordinates go straight to the context; the only screen-space
//! concern is the camera offset.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::sim::{GameState, camera_x};

const PLATFORM_COLOR: &str = "#654321";
const GOAL_COLOR: &str = "yellow";
const PLAYER_GLYPH: &str = "♡";
const PLAYER_FONT: &str = "30px Arial";

/// Draw the current state to the canvas
pub fn draw_frame(ctx: &CanvasRenderingContext2d, state: &GameState) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, VIEWPORT_WIDTH as f64, VIEWPORT_HEIGHT as f64);

    let cam = camera_x(state.body.pos.x, VIEWPORT_WIDTH, state.stage.width);
    ctx.save();
    ctx.translate(-cam as f64, 0.0)?;

    ctx.set_fill_style_str(PLATFORM_COLOR);
    for p in &state.stage.platforms {
        ctx.fill_rect(p.x as f64, p.y as f64, p.w as f64, p.h as f64);
    }

    let goal = &state.stage.goal;
    ctx.set_fill_style_str(GOAL_COLOR);
    ctx.fill_rect(goal.x as f64, goal.y as f64, goal.w as f64, goal.h as f64);

    // Glyph is drawn from its baseline, so anchor at the body's bottom edge
    ctx.set_font(PLAYER_FONT);
    ctx.set_fill_style_str("black");
    let body = &state.body;
    ctx.fill_text(
        PLAYER_GLYPH,
        body.pos.x as f64,
        (body.pos.y + body.size.y) as f64,
    )?;

    ctx.restore();
    Ok(())
}
