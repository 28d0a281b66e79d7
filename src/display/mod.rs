/// Rendering layer — all terminal output lives here.
///
/// Each function receives a mutable writer or canvas and an immutable view of
/// the game state.  No game logic is performed; this module only translates
/// state into pixels and terminal commands.

mod canvas;

pub use canvas::{Canvas, Rgb};

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use crate::assets::Sprites;
use crate::compute::time_remaining;
use crate::config::GameConfig;
use crate::entities::{Entity, GameState, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BACKGROUND: Rgb = Rgb(255, 255, 255);
pub const C_WAVE: Rgb = Rgb(0, 0, 225);
const C_HUD_TEXT: Rgb = Rgb(0, 0, 0);

// ── Layout ────────────────────────────────────────────────────────────────────

/// A blank canvas covering the whole screen at `cell_size` resolution.
pub fn canvas_for(config: &GameConfig) -> Canvas {
    let cell = config.cell_size;
    let w = (config.screen_width + cell - 1) / cell;
    let h = (config.screen_height + cell - 1) / cell;
    Canvas::new(w as usize, h as usize, C_BACKGROUND)
}

/// Terminal columns and rows the playfield occupies.
pub fn terminal_footprint(config: &GameConfig) -> (u16, u16) {
    let canvas = canvas_for(config);
    (canvas.width() as u16, canvas.rows() as u16)
}

/// Terminal cell holding the screen pixel `(x, y)`.
fn cell_at(x: f64, y: f64, config: &GameConfig) -> (u16, u16) {
    let cell = config.cell_size as f64;
    let col = (x / cell).floor().max(0.0);
    let row = (y / cell / 2.0).floor().max(0.0);
    (col as u16, row as u16)
}

/// Calls `f(cx, cy, local_x, local_y)` for every canvas pixel whose centre
/// falls inside `rect`, with the centre in rect-local screen pixels.
fn for_each_covered(rect: &Rect, config: &GameConfig, mut f: impl FnMut(i32, i32, i32, i32)) {
    let cell = config.cell_size;
    let x0 = rect.x().div_euclid(cell);
    let y0 = rect.y().div_euclid(cell);
    let x1 = rect.x().saturating_add(rect.width()).div_euclid(cell) + 1;
    let y1 = rect.y().saturating_add(rect.height()).div_euclid(cell) + 1;

    for cy in y0..y1 {
        let ly = cy * cell + cell / 2 - rect.y();
        if ly < 0 || ly >= rect.height() {
            continue;
        }
        for cx in x0..x1 {
            let lx = cx * cell + cell / 2 - rect.x();
            if lx < 0 || lx >= rect.width() {
                continue;
            }
            f(cx, cy, lx, ly);
        }
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────────

/// Rasterise one entity. Hidden entities draw nothing.
pub fn draw_entity(canvas: &mut Canvas, entity: &Entity<'_>, sprites: &Sprites, config: &GameConfig) {
    if !entity.is_visible() {
        return;
    }
    let rect = entity.rect();
    match entity.sprite() {
        Some(kind) => {
            let sprite = sprites.get(kind);
            for_each_covered(rect, config, |cx, cy, lx, ly| {
                if let Some(px) = sprite.sample(lx, ly) {
                    canvas.set(cx, cy, px);
                }
            });
        }
        None => {
            for_each_covered(rect, config, |cx, cy, _, _| canvas.set(cx, cy, C_WAVE));
        }
    }
}

/// Background first, then every entity in draw order.
pub fn draw_scene(canvas: &mut Canvas, state: &GameState, sprites: &Sprites, config: &GameConfig) {
    canvas.fill(C_BACKGROUND);
    for entity in state.entities() {
        draw_entity(canvas, &entity, sprites, config);
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

/// The two status lines with the terminal cell each starts at: remaining
/// time near the bottom, score just above it.
pub fn hud_lines(state: &GameState, config: &GameConfig) -> [((u16, u16), String); 2] {
    let h = config.screen_height as f64;
    [
        (
            cell_at(10.0, 0.95 * h, config),
            format!("Time = {:.1}", time_remaining(state, config)),
        ),
        (
            cell_at(10.0, 0.90 * h, config),
            format!("Score = {}", state.score),
        ),
    ]
}

fn draw_hud<W: Write>(out: &mut W, state: &GameState, config: &GameConfig) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(Color::from(C_BACKGROUND)))?;
    out.queue(style::SetForegroundColor(Color::from(C_HUD_TEXT)))?;
    for ((col, row), text) in hud_lines(state, config) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(text))?;
    }
    Ok(())
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: background, player, clams, wave, HUD.
pub fn render<W: Write>(
    out: &mut W,
    canvas: &mut Canvas,
    state: &GameState,
    sprites: &Sprites,
    config: &GameConfig,
) -> std::io::Result<()> {
    draw_scene(canvas, state, sprites, config);
    canvas.present(out)?;
    draw_hud(out, state, config)?;

    // Park cursor below the playfield and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, canvas.rows() as u16))?;
    out.flush()?;
    Ok(())
}
