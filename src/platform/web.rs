//! Browser bindings
//!
//! The page's script owns the canvas, polls devices and calls `frame` once per
//! animation frame. Everything it draws comes back out through the getters.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use super::RawInput;
use crate::consts::PRELOAD_ASSETS;
use crate::sim::{ArcadeHost, GameEvent};
use crate::{Game, Settings, Tuning, logging};

/// Images the page must load before creating a `WebGame`
#[wasm_bindgen]
pub fn preload_assets() -> Vec<String> {
    PRELOAD_ASSETS.iter().map(|path| path.to_string()).collect()
}

/// JS numbers hold every integer up to 2^53 exactly, far past any chunk an
/// f32 world position can reach
fn chunk_index_to_js(index: i64) -> f64 {
    index as f64
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game<ArcadeHost>,
    raw: RawInput,
    /// Chunks generated since the page last asked
    new_chunks: Vec<f64>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        logging::init(false);
        let seed = rand::random::<u64>();
        let tuning = Tuning::default();
        let host = ArcadeHost::new(&tuning.world);
        let mut game = Game::new(seed, tuning, Settings::load(), host);
        game.resize(width, height);
        log::info!("Compy Chase running with seed {}", seed);
        WebGame {
            game,
            raw: RawInput::default(),
            new_chunks: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.game.resize(width, height);
    }

    pub fn set_keyboard(&mut self, dir_x: f32, dir_y: f32, space: bool) {
        self.raw.key_direction = Vec2::new(dir_x, dir_y);
        self.raw.space_down = space;
    }

    pub fn set_gamepad(&mut self, stick_x: f32, stick_y: f32, button0: bool) {
        self.raw.gamepad_stick = Vec2::new(stick_x, stick_y);
        self.raw.gamepad_jump = button0;
    }

    pub fn set_touch_device(&mut self, is_touch: bool) {
        self.raw.is_touch_device = is_touch;
    }

    pub fn set_demo(&mut self, demo: bool) {
        self.game.demo = demo;
    }

    pub fn set_debug_overlay(&mut self, on: bool) {
        self.game.settings.debug_overlay = on;
        self.game.settings.save();
    }

    /// Advance by the elapsed frame time in seconds
    pub fn frame(&mut self, dt: f32) -> u32 {
        let substeps = self.game.frame(&self.raw, dt);
        for event in self.game.events() {
            if let GameEvent::ChunkGenerated { index } = event {
                self.new_chunks.push(chunk_index_to_js(*index));
            }
        }
        substeps
    }

    /// Chunk indices generated since the last call
    pub fn take_new_chunks(&mut self) -> Vec<f64> {
        std::mem::take(&mut self.new_chunks)
    }

    pub fn clear_tripping(&mut self) {
        self.game.state.player.clear_tripping();
    }

    pub fn camera_x(&self) -> f32 {
        self.game.state.ctx.camera.x
    }

    pub fn camera_y(&self) -> f32 {
        self.game.state.ctx.camera.y
    }

    pub fn player_x(&self) -> f32 {
        self.game.state.player.pos().x
    }

    pub fn player_y(&self) -> f32 {
        self.game.state.player.pos().y
    }

    pub fn player_mirrored(&self) -> bool {
        self.game.state.player.sprite.mirror
    }

    pub fn player_state(&self) -> String {
        self.game.state.player.state.label().to_string()
    }

    pub fn health_value(&self) -> f32 {
        self.game.render_post().health.value
    }

    pub fn stamina_value(&self) -> f32 {
        self.game.render_post().stamina.value
    }

    /// Flat [x, y] pairs of live compies
    pub fn pursuer_positions(&self) -> Vec<f32> {
        self.game
            .state
            .pursuers
            .iter()
            .flat_map(|p| [p.body.pos.x, p.body.pos.y])
            .collect()
    }

    /// HUD and debug overlay as JSON for the page to draw
    pub fn hud_json(&self) -> String {
        serde_json::to_string(self.game.render_post()).unwrap_or_default()
    }
}
