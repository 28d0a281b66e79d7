//! The frame loop: RUNNING until the clock runs out, the player quits, or the
//! wave catches them.

use std::io::Write;
use std::sync::mpsc::Receiver;
use std::time::Instant;

use crossterm::event::Event;
use rand::Rng;

use crate::assets::Sprites;
use crate::compute::{advance_clock, move_player, quit, tick};
use crate::config::GameConfig;
use crate::display;
use crate::entities::{EndReason, GameState, GameStatus};
use crate::error::GameError;
use crate::input::{poll_commands, Command};

/// How a session ended.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub score: u32,
    pub reason: EndReason,
    /// Iterations that completed, i.e. frames actually shown.
    pub frames: u64,
    pub state: GameState,
}

impl Outcome {
    fn from_state(state: &GameState) -> Self {
        let reason = match state.status {
            GameStatus::GameOver(reason) => reason,
            GameStatus::Running => EndReason::TimeUp,
        };
        Self {
            score: state.score,
            reason,
            frames: state.frame,
            state: state.clone(),
        }
    }
}

/// Run one session starting from `state`.
///
/// Each iteration: input, simulation, render, optional frame-rate cap, then
/// one fixed clock step. The loop stops before rendering on the frame the
/// game ends.
///
/// An invalid `config` is rejected before the first frame.
pub fn play<W: Write>(
    out: &mut W,
    mut state: GameState,
    config: &GameConfig,
    sprites: &Sprites,
    events: &Receiver<Event>,
    rng: &mut impl Rng,
) -> Result<Outcome, GameError> {
    config.validate()?;
    let mut canvas = display::canvas_for(config);
    let total_frames = config.total_frames();

    'frames: while state.is_running() && state.frame < total_frames {
        let frame_start = Instant::now();

        for command in poll_commands(events, config.drain_input) {
            match command {
                Command::Move(direction) => state = move_player(&state, direction, config),
                Command::Quit => {
                    state = quit(&state);
                    break 'frames;
                }
            }
        }

        state = tick(&state, config, rng);
        if !state.is_running() {
            break;
        }

        display::render(out, &mut canvas, &state, sprites, config)?;

        if config.frame_cap {
            let budget = config.frame_duration();
            let elapsed = frame_start.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }

        state = advance_clock(&state);
    }

    if state.is_running() {
        state.status = GameStatus::GameOver(EndReason::TimeUp);
    }
    let outcome = Outcome::from_state(&state);
    log::info!(
        "game over ({:?}) after {} frames, score {}",
        outcome.reason,
        outcome.frames,
        outcome.score
    );
    Ok(outcome)
}
