//! HUD state: health/stamina bars and the debug overlay
//!
//! Bars are placed on a page grid (10 columns x 100 rows of the viewport) so
//! they keep their proportions when the page is resized. The host draws them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PAGE_GRID_COLS, PAGE_GRID_ROWS};
use crate::round_hundredths;
use crate::settings::Settings;
use crate::sim::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Bar size in grid cells
pub const BAR_GRID_SIZE: Vec2 = Vec2::new(4.0, 4.0);
pub const HEALTH_BAR_COORDS: Vec2 = Vec2::new(5.0, 5.0);
pub const STAMINA_BAR_COORDS: Vec2 = Vec2::new(5.0, 12.0);

/// Pixel position of a page-grid coordinate
pub fn grid_to_pixels(page_size: Vec2, coords: Vec2) -> Vec2 {
    let cell = Vec2::new(page_size.x / PAGE_GRID_COLS, page_size.y / PAGE_GRID_ROWS);
    cell * coords
}

/// Non-interactive scrollbar showing a 0-100 resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceBar {
    /// Placement in page-grid cells
    pub coords: Vec2,
    pub color: Color,
    /// Pixels
    pub pos: Vec2,
    pub size: Vec2,
    /// Fill in [0, 1], two decimals
    pub value: f32,
}

impl ResourceBar {
    pub fn new(coords: Vec2, color: Color) -> Self {
        Self {
            coords,
            color,
            pos: Vec2::ZERO,
            size: Vec2::ZERO,
            value: 1.0,
        }
    }

    pub fn layout(&mut self, page_size: Vec2) {
        self.size = grid_to_pixels(page_size, BAR_GRID_SIZE);
        self.pos = grid_to_pixels(page_size, self.coords);
    }

    /// The widget's range is [0, 1]; an overdrawn resource shows as empty
    pub fn adjust_value(&mut self, resource: f32, max: f32) {
        self.value = round_hundredths(resource / max).clamp(0.0, 1.0);
    }
}

/// Text drawn in world space next to the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugLine {
    pub text: String,
    pub world_pos: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub health: ResourceBar,
    pub stamina: ResourceBar,
    pub show_bars: bool,
    pub debug_lines: Vec<DebugLine>,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            health: ResourceBar::new(HEALTH_BAR_COORDS, Color::RED),
            stamina: ResourceBar::new(STAMINA_BAR_COORDS, Color::GREEN),
            show_bars: true,
            debug_lines: Vec::new(),
        }
    }
}

impl Hud {
    /// Refresh after the frame's simulation ticks
    pub fn update(&mut self, state: &GameState, settings: &Settings) {
        let player = &state.player;
        let tuning = &state.tuning.player;

        self.show_bars = settings.show_bars;
        self.health.layout(state.ctx.page_size);
        self.stamina.layout(state.ctx.page_size);
        self.health.adjust_value(player.health, tuning.max_health);
        self.stamina.adjust_value(player.stamina, tuning.max_stamina);

        self.debug_lines.clear();
        if !settings.debug_overlay {
            return;
        }

        let x = player.pos().x;
        let mut line = |text: String, y: f32| {
            self.debug_lines.push(DebugLine {
                text,
                world_pos: Vec2::new(x, y),
            })
        };
        line(format!("State {}", player.state.label()), 10.0);
        line(format!("Player posY {:.2}", player.pos().y), 6.0);
        line(format!("Compsognathus {}", player.pursuers_on_you()), 8.0);
        for (i, pursuer) in state.pursuers.iter().enumerate() {
            line(format!("Status {}", pursuer.status.label()), 12.0 + i as f32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_bar_layout_follows_page() {
        let mut bar = ResourceBar::new(HEALTH_BAR_COORDS, Color::RED);
        bar.layout(Vec2::new(1000.0, 500.0));
        assert_eq!(bar.size, Vec2::new(400.0, 20.0));
        assert_eq!(bar.pos, Vec2::new(500.0, 25.0));

        bar.layout(Vec2::new(2000.0, 1000.0));
        assert_eq!(bar.size, Vec2::new(800.0, 40.0));
    }

    #[test]
    fn test_bar_value_rounding_and_range() {
        let mut bar = ResourceBar::new(STAMINA_BAR_COORDS, Color::GREEN);
        bar.adjust_value(97.0, 100.0);
        assert!((bar.value - 0.97).abs() < 1e-6);
        bar.adjust_value(33.333, 100.0);
        assert!((bar.value - 0.33).abs() < 1e-6);
        bar.adjust_value(-2.0, 100.0);
        assert_eq!(bar.value, 0.0);
    }

    #[test]
    fn test_debug_overlay_lines() {
        let state = GameState::new(1, Tuning::default());
        let mut hud = Hud::default();
        hud.update(&state, &Settings::default());

        let texts: Vec<&str> = hud.debug_lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts[0], "State StandingStill");
        assert_eq!(texts[1], "Player posY 10.00");
        assert_eq!(texts[2], "Compsognathus 0");
        assert_eq!(texts.len(), 3 + state.pursuers.len());
        assert!(hud.debug_lines.iter().all(|l| l.world_pos.x == 50.0));
    }

    #[test]
    fn test_overlay_and_bars_follow_settings() {
        let state = GameState::new(1, Tuning::default());
        let mut hud = Hud::default();
        let settings = Settings {
            debug_overlay: false,
            show_bars: false,
            ..Default::default()
        };
        hud.update(&state, &settings);
        assert!(hud.debug_lines.is_empty());
        assert!(!hud.show_bars);
        assert_eq!(hud.stamina.value, 1.0);
    }
}
