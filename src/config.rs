/// Game-wide tunables, gathered into one immutable value that is handed to
/// every layer explicitly.

use std::path::PathBuf;

use crate::error::GameError;

/// The clam field keeps its membership in a `u64` bitmask.
pub const MAX_CLAMS: usize = 64;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Logical screen size in pixels.
    pub screen_width: i32,
    pub screen_height: i32,
    /// Distance the player moves per key press.
    pub step: i32,
    /// Simulation rate; each iteration advances time by exactly `1 / fps`.
    pub fps: u32,
    pub clam_count: usize,
    pub clam_size: i32,
    pub player_size: i32,
    /// Clams regenerate while the wave's x is below `regen_ratio * screen_width`.
    pub regen_ratio: f64,
    pub caption: String,
    pub player_asset: PathBuf,
    pub clam_asset: PathBuf,
    /// Screen pixels per rendered canvas pixel (terminal resolution).
    pub cell_size: i32,
    /// Session length in seconds.
    pub max_time: f64,
    /// Consume every queued input event per frame instead of just one.
    pub drain_input: bool,
    /// Sleep so the loop never exceeds `fps` frames per second.
    pub frame_cap: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 500,
            screen_height: 500,
            step: 50,
            fps: 60,
            clam_count: 10,
            clam_size: 30,
            player_size: 50,
            regen_ratio: 0.51,
            caption: "Piper's adventures".to_string(),
            player_asset: PathBuf::from("assets/piper.png"),
            clam_asset: PathBuf::from("assets/clam.png"),
            cell_size: 10,
            max_time: 30.0,
            drain_input: false,
            frame_cap: true,
        }
    }
}

impl GameConfig {
    /// Points both sprite paths at `dir`, keeping their file names.
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.player_asset = dir.join("piper.png");
        self.clam_asset = dir.join("clam.png");
        self
    }

    /// Wall-clock budget for one frame when the cap is on.
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    /// Number of loop iterations a full session runs for.
    pub fn total_frames(&self) -> u64 {
        if self.max_time <= 0.0 {
            0
        } else {
            (self.max_time * self.fps as f64).ceil() as u64
        }
    }

    /// Wave x below which the clam field is rebuilt.
    pub fn regen_threshold(&self) -> f64 {
        self.regen_ratio * self.screen_width as f64
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(GameError::Config(format!(
                "screen must have a positive size, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.fps == 0 {
            return Err(GameError::Config("fps must be at least 1".into()));
        }
        if self.cell_size <= 0 {
            return Err(GameError::Config("cell size must be positive".into()));
        }
        if self.clam_count > MAX_CLAMS {
            return Err(GameError::Config(format!(
                "at most {} clams are supported, got {}",
                MAX_CLAMS, self.clam_count
            )));
        }
        // Clams spawn in [W/2, W - size] x [0, H - size]
        if self.clam_size <= 0
            || self.clam_size > self.screen_width / 2
            || self.clam_size > self.screen_height
        {
            return Err(GameError::Config(format!(
                "clam size {} does not fit the right half of a {}x{} screen",
                self.clam_size, self.screen_width, self.screen_height
            )));
        }
        if self.player_size <= 0
            || self.player_size > self.screen_width
            || self.player_size > self.screen_height
        {
            return Err(GameError::Config(format!(
                "player size {} does not fit a {}x{} screen",
                self.player_size, self.screen_width, self.screen_height
            )));
        }
        if !self.max_time.is_finite() || self.max_time < 0.0 {
            return Err(GameError::Config(format!(
                "max time must be a non-negative number of seconds, got {}",
                self.max_time
            )));
        }
        Ok(())
    }
}
