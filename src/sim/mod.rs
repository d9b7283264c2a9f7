//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per 1/60 s)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use input::{Button, press, release, release_all};
pub use state::{
    Enemy, EnemyStatus, GameEvent, GamePhase, GameState, JumpState, Platform, Player, World,
};
pub use tick::tick;
