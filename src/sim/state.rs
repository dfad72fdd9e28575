//! Game state and scene setup
//!
//! Everything one run needs lives in `GameState`, so a run can be snapshotted
//! to JSON and compared across seeds.

use glam::Vec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::context::SimContext;
use super::ground::ChunkStreamer;
use super::player::Player;
use super::pursuer::Pursuer;
use crate::tuning::Tuning;

/// Something the host may want to react to (sound, particles, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ChunkGenerated { index: i64 },
    PlayerJumped,
    PlayerTripped,
    PursuerAttacked { pursuer_id: u32 },
}

/// Seeded PCG stream that can be serialized by position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Number of values drawn so far
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        rng.advance(self.stream);
        rng
    }

    pub fn next_u32(&mut self) -> u32 {
        let value = self.to_rng().next_u32();
        self.stream += 1;
        value
    }

    /// Uniform in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Demo pilot randomness
    pub rng_state: RngState,
    pub tuning: Tuning,
    pub ctx: SimContext,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ground: ChunkStreamer,
    pub player: Player,
    /// Live compies (sorted by id)
    pub pursuers: Vec<Pursuer>,
    /// Events raised during the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Build the scene: context first, then ground, player and compies
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let ctx = SimContext::new(tuning.world.gravity);
        let ground = ChunkStreamer::new(tuning.ground.clone());
        let player = Player::new(tuning.player.clone());

        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            tuning,
            ctx,
            time_ticks: 0,
            ground,
            player,
            pursuers: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };

        let spawn_xs = state.tuning.pursuer.spawn_xs.clone();
        for x in spawn_xs {
            let pos = Vec2::new(x, state.tuning.pursuer.spawn_y);
            state.spawn_pursuer(pos);
        }

        log::info!(
            "Scene ready: seed={}, player at {:?}, {} compies",
            seed,
            state.player.pos(),
            state.pursuers.len()
        );
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn spawn_pursuer(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        let body = Body::new(pos, self.tuning.pursuer.size).with_collision();
        self.pursuers.push(Pursuer::new(id, body));
        id
    }

    pub fn pursuer(&self, id: u32) -> Option<&Pursuer> {
        self.pursuers.iter().find(|p| p.id == id)
    }

    /// Drop compies that attacked and keep id order stable
    pub fn remove_dead(&mut self) {
        self.pursuers.retain(|p| p.alive);
        self.pursuers.sort_by_key(|p| p.id);
    }

    /// Elapsed simulated seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.time_ticks as f32 * crate::consts::SIM_DT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PlayerState;

    #[test]
    fn test_scene_setup() {
        let state = GameState::new(7, Tuning::default());
        assert_eq!(state.player.pos(), Vec2::new(50.0, 10.0));
        assert_eq!(state.player.state, PlayerState::Standing);
        assert_eq!(state.player.stamina, 100.0);
        assert_eq!(state.player.health, 100.0);
        assert_eq!(state.ctx.gravity, Vec2::new(0.0, -0.05));

        let xs: Vec<f32> = state.pursuers.iter().map(|p| p.body.pos.x).collect();
        assert_eq!(xs, vec![40.0, 50.0, 60.0]);
        let ids: Vec<u32> = state.pursuers.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(state.pursuers.iter().all(|p| p.body.collide));
    }

    #[test]
    fn test_rng_stream_is_resumable() {
        let mut a = RngState::new(42);
        let first: Vec<u32> = (0..5).map(|_| a.next_u32()).collect();

        let mut b = RngState::new(42);
        b.next_u32();
        b.next_u32();
        let resumed = serde_json::to_string(&b).unwrap();
        let mut b: RngState = serde_json::from_str(&resumed).unwrap();
        let rest: Vec<u32> = (0..3).map(|_| b.next_u32()).collect();
        assert_eq!(&first[2..], rest.as_slice());
    }

    #[test]
    fn test_next_f32_range() {
        let mut rng = RngState::new(1);
        for _ in 0..100 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_remove_dead() {
        let mut state = GameState::new(1, Tuning::default());
        state.pursuers[1].alive = false;
        state.remove_dead();
        let ids: Vec<u32> = state.pursuers.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(state.pursuer(2).is_none());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let state = GameState::new(3, Tuning::default());
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.seed, 3);
        assert_eq!(restored.pursuers.len(), 3);
        assert_eq!(restored.player.pos(), state.player.pos());
    }
}
