//! Compy Chase - a side-scrolling runner prototype
//!
//! Core modules:
//! - `sim`: Per-frame entity update model (player, ground streaming, pursuers)
//! - `runner`: Fixed timestep game loop and lifecycle hooks
//! - `hud`: Resource bars and debug overlay state
//! - `platform`: Input resolution and browser bindings
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod error;
pub mod hud;
pub mod logging;
pub mod platform;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use runner::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the host engine's frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Page grid used to place HUD widgets (columns x rows)
    pub const PAGE_GRID_COLS: f32 = 10.0;
    pub const PAGE_GRID_ROWS: f32 = 100.0;

    /// Default page size in pixels before the host reports one
    pub const DEFAULT_PAGE_WIDTH: f32 = 1280.0;
    pub const DEFAULT_PAGE_HEIGHT: f32 = 720.0;

    /// Images the host preloads before `init`
    pub const PRELOAD_ASSETS: [&str; 2] = ["../media/protp-Gnd.png", "../media/sample.png"];
}

/// Sign with the host engine's convention: zero counts as positive.
#[inline]
pub fn sign(value: f32) -> f32 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// Round to two decimal places (bar values are shown at this precision)
#[inline]
pub fn round_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
