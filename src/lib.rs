//! Stomp Platformer - a tiny canvas platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, gravity, collisions, game state)
//! - `renderer`: Drawing surface abstraction and the per-frame scene projection
//! - `tuning`: Data-driven game constants

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the interval timer)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Interval timer period in milliseconds
    pub const TICK_INTERVAL_MS: i32 = (SIM_DT * 1000.0) as i32;

    pub const PLATFORM_COLOR: &str = "#0c0";

    /// Life icon layout (top-left HUD row)
    pub const LIFE_ICON_X: f32 = 10.0;
    pub const LIFE_ICON_Y: f32 = 10.0;
    pub const LIFE_ICON_SPACING: f32 = 30.0;
    pub const LIFE_ICON_SIZE: f32 = 20.0;
}
