//! Physics seam to the host engine
//!
//! The engine integrates bodies and reports ground contact. `ArcadeHost` is a
//! minimal stand-in for headless runs and tests: per-frame gravity, a speed
//! clamp, ground friction, and landing on top of generated ground. It does not
//! resolve walls, ceilings or body-body contacts.

use glam::Vec2;

use super::body::Body;
use super::ground::ChunkStreamer;
use crate::tuning::WorldTuning;

pub trait PhysicsHost {
    /// Integrate one body for one frame and refresh its ground contact
    fn step(&mut self, body: &mut Body, ground: &ChunkStreamer, gravity: Vec2);
}

#[derive(Debug, Clone)]
pub struct ArcadeHost {
    pub ground_friction: f32,
    pub max_speed: f32,
}

impl ArcadeHost {
    pub fn new(tuning: &WorldTuning) -> Self {
        Self {
            ground_friction: tuning.ground_friction,
            max_speed: tuning.max_speed,
        }
    }
}

impl Default for ArcadeHost {
    fn default() -> Self {
        Self::new(&WorldTuning::default())
    }
}

impl PhysicsHost for ArcadeHost {
    fn step(&mut self, body: &mut Body, ground: &ChunkStreamer, gravity: Vec2) {
        body.vel += gravity * body.gravity_scale;
        body.vel = body
            .vel
            .clamp(Vec2::splat(-self.max_speed), Vec2::splat(self.max_speed));
        body.pos += body.vel;
        body.on_ground = false;

        if !body.collide || body.vel.y > 0.0 {
            return;
        }
        if let Some(top) = ground.surface_y(body.pos.x) {
            if body.bottom() <= top {
                body.pos.y = top + body.half_size().y;
                body.vel.y = 0.0;
                body.vel.x *= self.ground_friction;
                body.on_ground = true;
            }
        }
    }
}
