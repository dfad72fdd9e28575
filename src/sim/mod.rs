//! Per-frame entity update model
//!
//! All gameplay logic lives here. Rules:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies; physics goes through `PhysicsHost`

pub mod body;
pub mod context;
pub mod ground;
pub mod host;
pub mod player;
pub mod pursuer;
pub mod state;
pub mod tick;

pub use body::Body;
pub use context::SimContext;
pub use ground::{ChunkStreamer, TileCell, TileLayer};
pub use host::{ArcadeHost, PhysicsHost};
pub use player::{Player, PlayerInput, PlayerSprite, PlayerState};
pub use pursuer::{Decision, PlayerView, Pursuer, PursuerStatus, decide, is_behind};
pub use state::{GameEvent, GameState, RngState};
pub use tick::{TickInput, tick};
