/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (plus the config and, where needed, an RNG handle) and returns
/// a brand-new `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Character, ClamField, Direction, EndReason, GameState, GameStatus, Rect, SpriteKind,
};

// ── Wave motion ──────────────────────────────────────────────────────────────

/// Horizontal position of the wave after `elapsed` seconds. Sweeps between
/// `0.5 * width` and `width`, resting at three quarters.
pub fn wave_x(elapsed: f64, screen_width: i32) -> f64 {
    let w = screen_width as f64;
    0.75 * w - 0.25 * w * elapsed.sin()
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// A fresh batch of clams scattered over the right half of the screen.
pub fn spawn_clams(config: &GameConfig, rng: &mut impl Rng) -> ClamField {
    let size = config.clam_size;
    let rects = (0..config.clam_count)
        .map(|_| {
            let x = rng.gen_range(config.screen_width / 2..=config.screen_width - size);
            let y = rng.gen_range(0..=config.screen_height - size);
            Rect::new(x, y, size, size)
        })
        .collect();
    ClamField::new(rects)
}

/// Build the initial game state: player at the origin, a full clam field,
/// the wave at rest.
pub fn init_state(config: &GameConfig, rng: &mut impl Rng) -> GameState {
    let w = config.screen_width;
    GameState {
        player: Character {
            rect: Rect::new(0, 0, config.player_size, config.player_size),
            sprite: SpriteKind::Player,
            visible: true,
        },
        clams: spawn_clams(config, rng),
        wave: Rect::new(wave_x(0.0, w) as i32, 0, w, config.screen_height),
        score: 0,
        frame: 0,
        status: GameStatus::Running,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Shift the player one step. Positions are not clamped; the player may
/// walk off screen.
pub fn move_player(state: &GameState, direction: Direction, config: &GameConfig) -> GameState {
    let mut player = state.player.clone();
    match direction {
        Direction::Right => player.rect.shift_x(config.step),
        Direction::Left => player.rect.shift_x(-config.step),
        Direction::Up => player.rect.shift_y(-config.step),
        Direction::Down => player.rect.shift_y(config.step),
    }
    GameState {
        player,
        ..state.clone()
    }
}

pub fn quit(state: &GameState) -> GameState {
    GameState {
        status: GameStatus::GameOver(EndReason::Quit),
        ..state.clone()
    }
}

// ── Per-frame steps ─────────────────────────────────────────────────────────

/// Score every still-alive clam the player overlaps and drop it from the
/// active set.
pub fn collect_clams(state: &GameState) -> GameState {
    let mut clams = state.clams.clone();
    let mut gained = 0;
    for i in 0..clams.len() {
        let hit = clams
            .rect(i)
            .map(|r| state.player.rect.collides(r))
            .unwrap_or(false);
        if hit && clams.collect(i) {
            gained += 1;
        }
    }
    if gained > 0 {
        log::debug!("collected {} clam(s) at frame {}", gained, state.frame);
    }
    GameState {
        clams,
        score: state.score + gained,
        ..state.clone()
    }
}

/// Place the wave where the clock says it should be.
pub fn update_wave(state: &GameState, config: &GameConfig) -> GameState {
    let mut wave = state.wave;
    let x = wave_x(state.elapsed(config.fps), config.screen_width);
    wave.set_x(x as i32);
    GameState {
        wave,
        ..state.clone()
    }
}

/// While the wave sits past the threshold the clam field is rebuilt from
/// scratch, every frame. The score is untouched.
pub fn regenerate_clams(state: &GameState, config: &GameConfig, rng: &mut impl Rng) -> GameState {
    if (state.wave.x() as f64) >= config.regen_threshold() {
        return state.clone();
    }
    log::debug!(
        "wave at x={} regenerates clams at frame {}",
        state.wave.x(),
        state.frame
    );
    GameState {
        clams: spawn_clams(config, rng),
        ..state.clone()
    }
}

/// Touching the wave ends the game on the spot.
pub fn check_swept(state: &GameState) -> GameState {
    if !state.player.rect.collides(&state.wave) {
        return state.clone();
    }
    GameState {
        status: GameStatus::GameOver(EndReason::Swept),
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Run the simulation part of one iteration, after input and before
/// rendering: collection, wave motion, regeneration, hazard check.
/// A finished game is returned unchanged.
pub fn tick(state: &GameState, config: &GameConfig, rng: &mut impl Rng) -> GameState {
    if !state.is_running() {
        return state.clone();
    }
    let state = collect_clams(state);
    let state = update_wave(&state, config);
    let state = regenerate_clams(&state, config, rng);
    check_swept(&state)
}

/// Advance simulation time by one fixed step of `1 / fps` seconds,
/// independent of how long the frame really took.
pub fn advance_clock(state: &GameState) -> GameState {
    GameState {
        frame: state.frame + 1,
        ..state.clone()
    }
}

/// Seconds left on the session clock, never negative.
pub fn time_remaining(state: &GameState, config: &GameConfig) -> f64 {
    (config.max_time - state.elapsed(config.fps)).max(0.0)
}
