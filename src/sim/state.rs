//! Game state and core simulation types
//!
//! One player, one enemy, one platform. Everything is created once and then
//! mutated in place by `tick`, the input handlers and `resize`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives ran out; latched for the rest of the session
    GameOver,
}

/// Whether the player may start a jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpState {
    Grounded,
    Airborne,
}

/// Enemy lifecycle (Alive -> Dead only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyStatus {
    Alive,
    Dead,
}

/// Something that happened during a tick (for logging / HUD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player touched the enemy and was sent back to spawn
    PlayerHit { lives_left: i32 },
    /// Lives dropped below zero
    GameOver,
    /// Player came to rest on the platform after being airborne
    PlayerLanded,
    /// Enemy reached a world edge and turned around
    EnemyBounced { rotation: f32 },
    /// Player landed on the enemy
    EnemyStomped,
}

impl GameEvent {
    /// Report the event through the `log` facade
    pub fn log(&self) {
        match self {
            GameEvent::PlayerHit { lives_left } => {
                log::info!("Player hit by enemy, {} lives left", lives_left)
            }
            GameEvent::GameOver => log::info!("Game over"),
            GameEvent::EnemyStomped => log::info!("Enemy stomped"),
            GameEvent::PlayerLanded => log::debug!("Player landed"),
            GameEvent::EnemyBounced { rotation } => {
                log::debug!("Enemy bounced, rotation {:.2}", rotation)
            }
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Per-tick velocity, set by input and gravity
    pub vel: Vec2,
    pub gravity: f32,
    pub jump_force: f32,
    pub jump: JumpState,
    /// Goes to -1 on the final hit, which ends the game
    pub lives: i32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.spawn_x, 0.0),
            size: tuning.player_size,
            vel: Vec2::ZERO,
            gravity: tuning.gravity,
            jump_force: tuning.jump_force,
            jump: JumpState::Grounded,
            lives: tuning.starting_lives,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// The patrolling enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Only x is ever non-zero
    pub vel: Vec2,
    /// Sprite rotation in radians, grows by π on every bounce
    pub rotation: f32,
    pub status: EnemyStatus,
}

impl Enemy {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(0.0, tuning.enemy_start_y),
            size: tuning.enemy_size,
            vel: Vec2::new(-tuning.enemy_speed, 0.0),
            rotation: 0.0,
            status: EnemyStatus::Alive,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == EnemyStatus::Alive
    }

    /// Mark the enemy dead. There is no way back.
    pub fn kill(&mut self) {
        self.status = EnemyStatus::Dead;
    }
}

/// The ground the player stands on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::new(0.0, tuning.platform_height),
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }
}

/// Playfield extents in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub enemy: Enemy,
    pub platform: Platform,
    pub world: World,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Constants the game was started with (spawn x, move speed, platform offset)
    pub tuning: Tuning,
}

impl GameState {
    /// Create a new game sized to the given viewport
    pub fn new(width: f32, height: f32, tuning: &Tuning) -> Self {
        let mut state = Self {
            player: Player::new(tuning),
            enemy: Enemy::new(tuning),
            platform: Platform::new(tuning),
            world: World {
                width: 0.0,
                height: 0.0,
            },
            phase: GamePhase::Playing,
            time_ticks: 0,
            tuning: tuning.clone(),
        };

        // Placeholder coordinates get fixed up by the first resize
        state.resize(width, height);

        state
    }

    /// Adapt the world to a new viewport size
    ///
    /// Moves the platform and stands the player on it. The enemy and the
    /// player's x are left alone; the next tick's clamping pulls them back
    /// inside if the world shrank.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world = World { width, height };
        self.platform.pos.y = height - self.tuning.platform_offset;
        self.platform.size.x = width;
        self.player.pos.y = self.platform.top() - self.player.size.y;
    }

    /// Where the player respawns after a hit
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.tuning.spawn_x, self.platform.top() - self.player.size.y)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
