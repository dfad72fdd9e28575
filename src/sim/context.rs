//! Simulation context: page size, camera and gravity
//!
//! Built before any entity and passed explicitly to every update.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimContext {
    /// Viewport size in pixels (drives HUD layout)
    pub page_size: Vec2,
    /// World position the host centers the viewport on
    pub camera: Vec2,
    /// Per-frame gravity the host applies to bodies
    pub gravity: Vec2,
}

impl SimContext {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            page_size: Vec2::new(DEFAULT_PAGE_WIDTH, DEFAULT_PAGE_HEIGHT),
            camera: Vec2::ZERO,
            gravity,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.page_size = Vec2::new(width, height);
    }
}
