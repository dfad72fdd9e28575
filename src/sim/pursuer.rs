//! Compy pursuit AI
//!
//! A compy sneaks up on the player from behind and backs off when the player
//! looks at it. The decision is recomputed from geometry every frame; the only
//! thing kept between frames is the status label.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::player::{Player, PlayerState};
use crate::sign;
use crate::tuning::PursuerTuning;

/// What the compy decided to do this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PursuerStatus {
    #[default]
    Follow,
    /// In the buffer band in front of the player
    Hold,
    /// Too close in front of the player; backing off
    KeepDistance,
    Attacking,
}

impl PursuerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PursuerStatus::Follow => "Follow",
            PursuerStatus::Hold => "Stay Front You",
            PursuerStatus::KeepDistance => "Keep Distance",
            PursuerStatus::Attacking => "Its Attacking You",
        }
    }
}

/// Read-only observation of the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub x: f32,
    pub direction: f32,
    pub state: PlayerState,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            x: player.body.pos.x,
            direction: player.direction,
            state: player.state,
        }
    }
}

/// Outcome of one pursuit decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub status: PursuerStatus,
    pub vel_x: f32,
    pub attack: bool,
}

/// The compy sits on the side the player isn't facing
pub fn is_behind(pursuer_x: f32, player: &PlayerView) -> bool {
    let dx = pursuer_x - player.x;
    (dx < 0.0 && player.direction > 0.0) || (dx > 0.0 && player.direction < 0.0)
}

/// Pure pursuit decision from the compy's x and width and the player view
pub fn decide(pursuer_x: f32, width: f32, player: &PlayerView, tuning: &PursuerTuning) -> Decision {
    let distance = (pursuer_x - player.x).abs();
    let dir_to_player = sign(player.x - pursuer_x);

    if is_behind(pursuer_x, player) || distance > tuning.hold_max {
        let attack = distance < width * tuning.attack_range_factor && !player.state.is_airborne();
        Decision {
            status: PursuerStatus::Follow,
            vel_x: dir_to_player * tuning.chase_speed,
            attack,
        }
    } else if distance > tuning.hold_min {
        Decision {
            status: PursuerStatus::Hold,
            vel_x: 0.0,
            attack: false,
        }
    } else {
        Decision {
            status: PursuerStatus::KeepDistance,
            vel_x: -dir_to_player * tuning.retreat_factor * tuning.chase_speed,
            attack: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pursuer {
    pub id: u32,
    pub body: Body,
    /// Last movement direction, -1 or 1
    pub direction: f32,
    pub status: PursuerStatus,
    /// Cleared by the one-shot attack; the state drops dead pursuers
    pub alive: bool,
}

impl Pursuer {
    pub fn new(id: u32, body: Body) -> Self {
        Self {
            id,
            body,
            direction: 1.0,
            status: PursuerStatus::Follow,
            alive: true,
        }
    }

    /// Decide and apply this frame's velocity. Returns true when the compy
    /// reached the player; the caller notifies the player.
    pub fn update(&mut self, player: &PlayerView, tuning: &PursuerTuning) -> bool {
        if !self.alive {
            return false;
        }

        let decision = decide(self.body.pos.x, self.body.size.x, player, tuning);
        if decision.status != self.status {
            log::debug!(
                "Compy {} {} -> {}",
                self.id,
                self.status.label(),
                decision.status.label()
            );
        }
        self.status = decision.status;
        self.body.vel.x = decision.vel_x;
        if decision.vel_x != 0.0 {
            self.direction = sign(decision.vel_x);
        }

        if decision.attack {
            self.attack();
        }
        decision.attack
    }

    fn attack(&mut self) {
        self.status = PursuerStatus::Attacking;
        self.alive = false;
        log::info!("Compy {} latched onto the player", self.id);
    }
}
