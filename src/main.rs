//! Compy Chase entry point
//!
//! Native builds run the simulation headless against the stand-in physics
//! host and log what happened. The browser build is driven from JS through
//! `platform::web`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;

    use compy_chase::consts::SIM_DT;
    use compy_chase::platform::RawInput;
    use compy_chase::sim::{ArcadeHost, GameEvent};
    use compy_chase::{ConfigError, Game, Settings, Tuning, logging};

    /// Run Compy Chase without a window
    #[derive(Debug, Parser)]
    #[command(name = "compy-chase", version, about)]
    pub struct Cli {
        /// Run seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Simulated seconds to run
        #[arg(long, default_value_t = 30.0)]
        seconds: f32,

        /// Tuning JSON overriding the built-in balance
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Settings JSON
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Let the demo pilot play
        #[arg(long)]
        demo: bool,

        /// Print the final game state as JSON
        #[arg(long)]
        dump_state: bool,

        /// Debug logging (state transitions, compy decisions)
        #[arg(short, long)]
        verbose: bool,
    }

    pub fn run() -> Result<(), ConfigError> {
        let cli = Cli::parse();
        logging::init(cli.verbose);

        let tuning = match &cli.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let settings = match &cli.settings {
            Some(path) => Settings::load_from(path)?,
            None => Settings::default(),
        };
        let seed = cli.seed.unwrap_or_else(rand::random);

        log::info!("Compy Chase (headless) starting with seed {}", seed);
        let host = ArcadeHost::new(&tuning.world);
        let mut game = Game::new(seed, tuning, settings, host);
        game.demo = cli.demo;

        let frames = (cli.seconds.max(0.0) / SIM_DT).round() as u64;
        let raw = RawInput::default();
        for _ in 0..frames {
            game.frame(&raw, SIM_DT);
            for event in game.events() {
                match event {
                    GameEvent::PlayerTripped => {
                        log::info!("Tripped at t={:.2}s", game.state.elapsed_secs())
                    }
                    GameEvent::PursuerAttacked { pursuer_id } => log::info!(
                        "Compy {} reached the player at t={:.2}s",
                        pursuer_id,
                        game.state.elapsed_secs()
                    ),
                    GameEvent::ChunkGenerated { .. } | GameEvent::PlayerJumped => {}
                }
            }
        }

        let state = &game.state;
        log::info!(
            "Finished after {:.2}s: player at ({:.2}, {:.2}) {}, stamina {:.0}, {} compies on, {} chasing, ground chunks up to {:?}",
            state.elapsed_secs(),
            state.player.pos().x,
            state.player.pos().y,
            state.player.state.label(),
            state.player.stamina,
            state.player.pursuers_on_you(),
            state.pursuers.len(),
            state.ground.high_water_mark()
        );

        if cli.dump_state {
            println!("{}", serde_json::to_string_pretty(state)?);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), compy_chase::ConfigError> {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web, this is just to satisfy the compiler
}
