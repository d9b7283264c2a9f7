//! Data-driven game tuning
//!
//! Every gameplay number lives here so it can be tweaked without a rebuild.
//! Overrides are read from LocalStorage as JSON; absent fields keep defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Upper bound for `starting_lives`; one HUD icon is drawn per life
pub const MAX_STARTING_LIVES: i32 = 99;

/// Numeric constants for movement, physics and entity sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to player dy each airborne tick
    pub gravity: f32,
    /// Upward impulse applied on jump
    pub jump_force: f32,
    /// Horizontal speed set by the left/right buttons
    pub move_speed: f32,
    /// Position integration multiplier (x += scale * dx)
    pub move_scale: f32,
    /// Enemy patrol speed (starts moving left)
    pub enemy_speed: f32,
    /// Enemy spawn height
    pub enemy_start_y: f32,
    /// Player x after spawning or losing a life
    pub spawn_x: f32,
    pub starting_lives: i32,
    pub player_size: Vec2,
    pub enemy_size: Vec2,
    pub platform_height: f32,
    /// Distance from canvas bottom to platform top
    pub platform_offset: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_force: 10.0,
            move_speed: 5.0,
            move_scale: 2.0,
            enemy_speed: 2.0,
            enemy_start_y: 400.0,
            spawn_x: 50.0,
            starting_lives: 3,
            player_size: Vec2::new(100.0, 100.0),
            enemy_size: Vec2::new(50.0, 50.0),
            platform_height: 50.0,
            platform_offset: 100.0,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "stomp_platformer_tuning";

    /// Parse tuning overrides from JSON and sanitize the result
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Pretty JSON, in the same shape `from_json` accepts
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace values that would break the simulation with defaults
    ///
    /// Sizes, speeds and gravity must be finite and positive. Lives may be
    /// zero (one hit ends the run) but not negative.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn positive(value: f32, fallback: f32, name: &str) -> f32 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!("Tuning: invalid {} ({}), using {}", name, value, fallback);
                fallback
            }
        }

        fn finite(value: f32, fallback: f32, name: &str) -> f32 {
            if value.is_finite() {
                value
            } else {
                log::warn!("Tuning: invalid {} ({}), using {}", name, value, fallback);
                fallback
            }
        }

        self.gravity = positive(self.gravity, defaults.gravity, "gravity");
        self.jump_force = positive(self.jump_force, defaults.jump_force, "jump_force");
        self.move_speed = positive(self.move_speed, defaults.move_speed, "move_speed");
        self.move_scale = positive(self.move_scale, defaults.move_scale, "move_scale");
        self.enemy_speed = positive(self.enemy_speed, defaults.enemy_speed, "enemy_speed");
        self.enemy_start_y = finite(self.enemy_start_y, defaults.enemy_start_y, "enemy_start_y");
        self.spawn_x = finite(self.spawn_x, defaults.spawn_x, "spawn_x");
        self.platform_height =
            positive(self.platform_height, defaults.platform_height, "platform_height");
        self.platform_offset =
            finite(self.platform_offset, defaults.platform_offset, "platform_offset");
        self.player_size = Vec2::new(
            positive(self.player_size.x, defaults.player_size.x, "player_size.x"),
            positive(self.player_size.y, defaults.player_size.y, "player_size.y"),
        );
        self.enemy_size = Vec2::new(
            positive(self.enemy_size.x, defaults.enemy_size.x, "enemy_size.x"),
            positive(self.enemy_size.y, defaults.enemy_size.y, "enemy_size.y"),
        );
        if self.starting_lives > MAX_STARTING_LIVES {
            log::warn!(
                "Tuning: starting_lives {} too high, capping at {}",
                self.starting_lives,
                MAX_STARTING_LIVES
            );
            self.starting_lives = MAX_STARTING_LIVES;
        } else if self.starting_lives < 0 {
            log::warn!(
                "Tuning: invalid starting_lives ({}), using {}",
                self.starting_lives,
                defaults.starting_lives
            );
            self.starting_lives = defaults.starting_lives;
        }
        self
    }

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring malformed tuning overrides: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
