//! Fixed timestep simulation tick
//!
//! One call is one host frame: ground streaming, player, compies, then the
//! host integrates every body.

use glam::Vec2;

use super::host::PhysicsHost;
use super::player::PlayerInput;
use super::pursuer::{PlayerView, is_behind};
use super::state::{GameEvent, GameState};

/// Chance per grounded frame that the demo pilot hops for no reason
const DEMO_JUMP_CHANCE: f32 = 1.0 / 90.0;
/// Demo pilot hops over compies closer than this from behind
const DEMO_EVADE_DISTANCE: f32 = 4.0;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub player: PlayerInput,
    /// Demo mode - the pilot plays the game
    pub demo: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, host: &mut impl PhysicsHost, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    let player_input = if input.demo {
        demo_input(state)
    } else {
        input.player
    };

    // Ground follows last frame's camera
    for index in state.ground.update(state.ctx.camera.x) {
        state.events.push(GameEvent::ChunkGenerated { index });
    }

    let update = state.player.update(&player_input, &mut state.ctx, dt);
    if update.jumped {
        state.events.push(GameEvent::PlayerJumped);
    }
    if update.tripped {
        state.events.push(GameEvent::PlayerTripped);
    }

    let view = PlayerView::from(&state.player);
    let mut attackers = Vec::new();
    for pursuer in &mut state.pursuers {
        if pursuer.update(&view, &state.tuning.pursuer) {
            attackers.push(pursuer.id);
        }
    }
    for pursuer_id in attackers {
        state.player.add_pursuer_contact();
        state.events.push(GameEvent::PursuerAttacked { pursuer_id });
    }
    state.remove_dead();

    let gravity = state.ctx.gravity;
    host.step(&mut state.player.body, &state.ground, gravity);
    for pursuer in &mut state.pursuers {
        host.step(&mut pursuer.body, &state.ground, gravity);
    }
}

/// Run right, hop over compies sneaking up from behind, and jump at random
fn demo_input(state: &mut GameState) -> PlayerInput {
    let mut input = PlayerInput {
        move_intent: Vec2::new(1.0, 0.0),
        jump: false,
    };

    if state.player.body.on_ground {
        let view = PlayerView::from(&state.player);
        let threatened = state.pursuers.iter().any(|p| {
            is_behind(p.body.pos.x, &view) && (p.body.pos.x - view.x).abs() < DEMO_EVADE_DISTANCE
        });
        input.jump = threatened || state.rng_state.next_f32() < DEMO_JUMP_CHANCE;
    }
    input
}
