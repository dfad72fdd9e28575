//! Host-owned entity record
//!
//! Every simulated entity holds one `Body`. The host's physics owns `pos` and
//! `on_ground`; entities only write `vel` as an intent the host integrates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center position
    pub pos: Vec2,
    /// Velocity in world units per frame
    pub vel: Vec2,
    /// Full width and height
    pub size: Vec2,
    /// Solid against terrain
    pub collide: bool,
    /// Affected by gravity
    pub gravity_scale: f32,
    /// Resting on solid terrain (set by the host after each physics step)
    pub on_ground: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            collide: false,
            gravity_scale: 1.0,
            on_ground: false,
        }
    }

    /// Enable terrain collision
    pub fn with_collision(mut self) -> Self {
        self.collide = true;
        self
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// World y of the body's bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y * 0.5
    }
}
