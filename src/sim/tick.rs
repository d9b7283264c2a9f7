//! Fixed timestep simulation tick
//!
//! Advances the world by one 1/60 s step. Velocities are per-tick values, so
//! there is no dt scaling.

use std::f32::consts::PI;

use super::state::{GameEvent, GamePhase, GameState, JumpState};

/// Advance the game state by one fixed timestep
///
/// Returns what happened during the step. The tick keeps running after the
/// game is over; only the renderer treats `GamePhase::GameOver` specially.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    move_player(state);
    check_enemy_hit(state, &mut events);

    if state.player.lives < 0 && state.phase != GamePhase::GameOver {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
    }

    apply_platform(state, &mut events);
    clamp_player(state);

    move_enemy(state, &mut events);
    check_stomp(state, &mut events);

    events
}

fn move_player(state: &mut GameState) {
    let player = &mut state.player;
    player.pos += player.vel * state.tuning.move_scale;
}

/// Touching a live enemy costs a life and sends the player back to spawn
///
/// There is no invulnerability window: a player still overlapping next tick
/// gets hit again.
fn check_enemy_hit(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.enemy.is_alive() || !state.player.aabb().intersects(&state.enemy.aabb()) {
        return;
    }

    state.player.lives -= 1;
    state.player.pos = state.spawn_point();
    events.push(GameEvent::PlayerHit {
        lives_left: state.player.lives,
    });
}

/// Rest on the platform when below its top edge, otherwise fall
fn apply_platform(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let platform_top = state.platform.top();
    let player = &mut state.player;

    if player.aabb().bottom() > platform_top {
        player.pos.y = platform_top - player.size.y;
        if player.jump == JumpState::Airborne {
            events.push(GameEvent::PlayerLanded);
        }
        player.jump = JumpState::Grounded;
    } else {
        player.vel.y += player.gravity;
    }
}

/// Keep the player inside the left, right and top edges
fn clamp_player(state: &mut GameState) {
    let width = state.world.width;
    let player = &mut state.player;

    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
    }
    if player.pos.x + player.size.x > width {
        player.pos.x = width - player.size.x;
    }
    if player.pos.y < 0.0 {
        player.pos.y = 0.0;
    }
}

/// Patrol: move, bounce off the side walls, stay inside top and bottom
fn move_enemy(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let world = state.world;
    let enemy = &mut state.enemy;

    enemy.pos += enemy.vel;

    let bounced = if enemy.pos.x < 0.0 {
        enemy.pos.x = 0.0;
        true
    } else if enemy.pos.x + enemy.size.x > world.width {
        enemy.pos.x = world.width - enemy.size.x;
        true
    } else {
        false
    };

    if bounced {
        enemy.vel.x = -enemy.vel.x;
        // Not wrapped; the sprite transform only cares about the angle mod 2π
        enemy.rotation += PI;
        events.push(GameEvent::EnemyBounced {
            rotation: enemy.rotation,
        });
    }

    if enemy.pos.y < 0.0 {
        enemy.pos.y = 0.0;
    }
    if enemy.pos.y + enemy.size.y > world.height {
        enemy.pos.y = world.height - enemy.size.y;
    }
}

/// Landing on a live enemy from above kills it
fn check_stomp(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.enemy.is_alive() && state.player.aabb().lands_on(&state.enemy.aabb()) {
        state.enemy.kill();
        events.push(GameEvent::EnemyStomped);
    }
}
