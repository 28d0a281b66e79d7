use std::io::{stdout, BufWriter};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    terminal,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pipers_adventure::assets::Sprites;
use pipers_adventure::compute::init_state;
use pipers_adventure::config::GameConfig;
use pipers_adventure::display::terminal_footprint;
use pipers_adventure::screen;
use pipers_adventure::session::{play, Outcome};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "pipers_adventure")]
#[command(about = "Collect clams, dodge the wave")]
struct Cli {
    /// Session length in seconds
    #[arg(default_value_t = 30.0)]
    max_time: f64,

    /// Seed for clam placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Handle every queued key press each frame instead of one
    #[arg(long)]
    drain_input: bool,

    /// Run the simulation as fast as possible
    #[arg(long)]
    no_frame_cap: bool,

    /// Directory containing piper.png and clam.png
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_time: self.max_time,
            drain_input: self.drain_input,
            frame_cap: !self.no_frame_cap,
            ..GameConfig::default()
        }
        .with_asset_dir(&self.assets)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = cli.config();
    config.validate()?;
    let sprites = Sprites::load(&config).context("could not load game assets")?;

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);
    log::info!(
        "starting: {}s session, seed {}, drain_input={}, frame_cap={}",
        config.max_time,
        seed,
        config.drain_input,
        config.frame_cap
    );

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("could not enter raw mode")?;
    let keyboard_enhanced = match screen::enter(&mut out, &config.caption) {
        Ok(enhanced) => enhanced,
        Err(e) => {
            let _ = terminal::disable_raw_mode();
            return Err(e).context("could not set up the terminal");
        }
    };

    if let Ok((cols, rows)) = terminal::size() {
        let (need_cols, need_rows) = terminal_footprint(&config);
        if cols < need_cols || rows < need_rows {
            log::warn!(
                "terminal is {}x{}, the playfield needs {}x{}",
                cols,
                rows,
                need_cols,
                need_rows
            );
        }
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let state = init_state(&config, &mut rng);
    let result = play(&mut out, state, &config, &sprites, &rx, &mut rng);

    // Always restore the terminal
    screen::leave(&mut out, keyboard_enhanced);
    let _ = terminal::disable_raw_mode();

    let Outcome { score, .. } = result?;
    println!("Game over!");
    println!("Score = {}", score);
    Ok(())
}
