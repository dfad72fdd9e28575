//! Game loop driver
//!
//! Mirrors the host engine's lifecycle: `init` builds the scene, then each
//! frame runs `update` (fixed timestep substeps), `update_post` (HUD refresh)
//! and `render_post` (HUD state for the host to draw). The engine's `render`
//! hook has nothing to do here; drawing the world is the host's job.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::hud::Hud;
use crate::platform::{RawInput, resolve_input};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, PhysicsHost, TickInput, tick};
use crate::tuning::Tuning;

/// Longest frame time fed to the accumulator
const MAX_FRAME_DT: f32 = 0.1;

/// Game instance holding all state
pub struct Game<H: PhysicsHost> {
    pub state: GameState,
    pub settings: Settings,
    pub hud: Hud,
    host: H,
    accumulator: f32,
    /// Demo mode - the pilot plays the game
    pub demo: bool,
    /// Events from every substep of the last frame
    events: Vec<GameEvent>,
}

impl<H: PhysicsHost> Game<H> {
    /// `init`: build the scene
    pub fn new(seed: u64, tuning: Tuning, settings: Settings, host: H) -> Self {
        let state = GameState::new(seed, tuning);
        let mut game = Self {
            state,
            settings,
            hud: Hud::default(),
            host,
            accumulator: 0.0,
            demo: false,
            events: Vec::new(),
        };
        game.update_post();
        game
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.ctx.resize(width, height);
        self.update_post();
    }

    /// Run one host frame. Returns the number of simulation ticks taken.
    pub fn frame(&mut self, raw: &RawInput, frame_dt: f32) -> u32 {
        let substeps = self.update(raw, frame_dt);
        self.update_post();
        substeps
    }

    /// `update`: fixed timestep substeps for the elapsed frame time
    pub fn update(&mut self, raw: &RawInput, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.events.clear();

        let input = TickInput {
            player: resolve_input(raw, &self.settings),
            demo: self.demo,
        };

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &mut self.host, &input, SIM_DT);
            self.events.extend_from_slice(&self.state.events);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// `update_post`: refresh HUD from the settled state
    pub fn update_post(&mut self) {
        self.hud.update(&self.state, &self.settings);
    }

    /// `render_post`: HUD for the host to draw over the world
    pub fn render_post(&self) -> &Hud {
        &self.hud
    }

    /// Events raised during the last frame, in order
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ArcadeHost;

    fn game() -> Game<ArcadeHost> {
        Game::new(5, Tuning::default(), Settings::default(), ArcadeHost::default())
    }

    #[test]
    fn test_hud_ready_after_init() {
        let game = game();
        assert_eq!(game.render_post().stamina.value, 1.0);
        assert!(game.render_post().health.size.x > 0.0);
    }

    #[test]
    fn test_substeps_from_frame_time() {
        let mut game = game();
        let raw = RawInput::default();

        // Exactly two ticks worth of time (plus a hair for float error)
        assert_eq!(game.frame(&raw, SIM_DT * 2.0 + 1e-5), 2);
        assert_eq!(game.state.time_ticks, 2);

        // Too little time for a tick; it carries over
        assert_eq!(game.frame(&raw, SIM_DT * 0.5), 0);
        assert_eq!(game.frame(&raw, SIM_DT * 0.6), 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut game = game();
        let substeps = game.frame(&RawInput::default(), 5.0);
        assert!(substeps <= MAX_SUBSTEPS);
        assert_eq!(game.state.time_ticks, substeps as u64);
    }

    #[test]
    fn test_frame_events_collect_all_substeps() {
        let mut game = game();
        game.frame(&RawInput::default(), SIM_DT * 3.0 + 1e-5);
        let chunks = game
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::ChunkGenerated { .. }))
            .count();
        assert_eq!(chunks, 3);
    }

    #[test]
    fn test_resize_relays_bars() {
        let mut game = game();
        game.resize(1000.0, 500.0);
        assert_eq!(game.hud.health.size.x, 400.0);
        assert_eq!(game.hud.stamina.pos.y, 60.0);
    }

    #[test]
    fn test_keyboard_input_reaches_player() {
        let mut game = game();
        let raw = RawInput {
            key_direction: glam::Vec2::new(-1.0, 0.0),
            ..Default::default()
        };
        game.frame(&raw, SIM_DT * 30.0);
        assert_eq!(game.state.player.direction, -1.0);
    }
}
