//! Player controller
//!
//! Turns movement intent into velocity requests, runs the movement state
//! machine, drains stamina while compies cling to the player and keeps the
//! camera on the player.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::context::SimContext;
use crate::sign;
use crate::tuning::PlayerTuning;

/// Movement state (exactly one at a time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerState {
    #[default]
    Standing,
    Jumping,
    Falling,
    Running,
    RunningDifficult,
    /// Entered when stamina runs out; only `clear_tripping` leaves it
    Tripping,
    BeingAttacked,
    LiftingUp,
    Attacking,
}

impl PlayerState {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerState::Standing => "StandingStill",
            PlayerState::Jumping => "Jumping",
            PlayerState::Falling => "Falling",
            PlayerState::Running => "Running",
            PlayerState::RunningDifficult => "RunningWithDifficult",
            PlayerState::Tripping => "TrippingToTheGround",
            PlayerState::BeingAttacked => "BeingAttacked",
            PlayerState::LiftingUp => "LiftingUp",
            PlayerState::Attacking => "Attacking",
        }
    }

    /// Jumping or falling; compies can't latch on mid-air
    pub fn is_airborne(&self) -> bool {
        matches!(self, PlayerState::Jumping | PlayerState::Falling)
    }
}

/// Resolved input for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Movement intent, each axis in [-1, 1]
    pub move_intent: Vec2,
    pub jump: bool,
}

/// Outcome flags of one player update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerUpdate {
    pub jumped: bool,
    pub tripped: bool,
}

/// Render-only sprite that follows the body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSprite {
    pub pos: Vec2,
    pub size: Vec2,
    /// Sheet art faces left; mirrored when facing right
    pub mirror: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub state: PlayerState,
    /// Facing, always -1 or 1
    pub direction: f32,
    pub health: f32,
    /// Not clamped: a drain can push it below zero
    pub stamina: f32,
    stamina_timer: f32,
    /// Compies that reached the player this session
    pursuers_on_you: u32,
    pub sprite: PlayerSprite,
    tuning: PlayerTuning,
}

impl Player {
    pub fn new(tuning: PlayerTuning) -> Self {
        let body = Body::new(tuning.spawn, tuning.size).with_collision();
        let sprite = PlayerSprite {
            pos: tuning.spawn + Vec2::new(0.0, tuning.sprite_offset_y),
            size: tuning.sprite_size,
            mirror: true,
        };
        Self {
            body,
            state: PlayerState::Standing,
            direction: 1.0,
            health: tuning.max_health,
            stamina: tuning.max_stamina,
            stamina_timer: tuning.stamina_interval,
            pursuers_on_you: 0,
            sprite,
            tuning,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn pursuers_on_you(&self) -> u32 {
        self.pursuers_on_you
    }

    pub fn stamina_timer(&self) -> f32 {
        self.stamina_timer
    }

    /// Per-frame update. `dt` is the frame time in seconds.
    pub fn update(&mut self, input: &PlayerInput, ctx: &mut SimContext, dt: f32) -> PlayerUpdate {
        self.sync_sprite();
        let jumped = self.apply_input(input);
        self.update_camera(ctx);
        let tripped = self.drain_stamina(dt);
        PlayerUpdate { jumped, tripped }
    }

    /// Called by a compy that reached the player
    pub fn add_pursuer_contact(&mut self) {
        self.pursuers_on_you += 1;
        log::debug!("Compies on the player: {}", self.pursuers_on_you);
    }

    /// External exit from the terminal trip state
    pub fn clear_tripping(&mut self) {
        if self.state == PlayerState::Tripping {
            log::info!("Player back on their feet");
            self.set_state(PlayerState::Standing);
        }
    }

    fn set_state(&mut self, state: PlayerState) {
        if self.state != state {
            log::debug!("Player {} -> {}", self.state.label(), state.label());
            self.state = state;
        }
    }

    fn sync_sprite(&mut self) {
        self.sprite.mirror = self.direction > 0.0;
        self.sprite.pos = self.body.pos + Vec2::new(0.0, self.tuning.sprite_offset_y);
    }

    /// Returns true when a jump was launched
    fn apply_input(&mut self, input: &PlayerInput) -> bool {
        if self.state == PlayerState::Tripping {
            return false;
        }

        let grounded = self.body.on_ground;
        let intent_x = input.move_intent.x;
        let accel = if grounded {
            self.tuning.ground_accel
        } else {
            self.tuning.air_accel
        };
        self.body.vel.x += intent_x * accel;

        let mut jumped = false;
        if grounded && input.jump {
            self.body.vel.y = self.tuning.jump_velocity;
            self.set_state(PlayerState::Jumping);
            jumped = true;
        }

        if grounded {
            if intent_x != 0.0 {
                self.set_state(PlayerState::Running);
            } else if !input.jump {
                self.set_state(PlayerState::Standing);
            }
        } else if self.body.vel.y > self.tuning.air_dead_band {
            self.set_state(PlayerState::Jumping);
        } else if self.body.vel.y < -self.tuning.air_dead_band {
            self.set_state(PlayerState::Falling);
        }

        self.turn(intent_x);
        jumped
    }

    /// Facing only changes on non-zero intent
    fn turn(&mut self, intent_x: f32) {
        if intent_x != 0.0 {
            self.direction = sign(intent_x);
        }
    }

    fn update_camera(&self, ctx: &mut SimContext) {
        ctx.camera.x = self.body.pos.x;
        ctx.camera.y = self.body.pos.y.max(self.tuning.camera_min_y);
    }

    /// Returns true when this call tripped the player
    fn drain_stamina(&mut self, dt: f32) -> bool {
        self.stamina_timer -= dt;
        if self.stamina_timer > 0.0 {
            return false;
        }

        let mut tripped = false;
        if self.stamina > 0.0 {
            self.stamina -= self.pursuers_on_you as f32;
        } else {
            if self.state != PlayerState::Tripping {
                log::info!("Player out of stamina, tripping");
                tripped = true;
            }
            self.set_state(PlayerState::Tripping);
        }
        self.stamina_timer = self.tuning.stamina_interval;
        tripped
    }
}
