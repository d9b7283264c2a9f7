//! On-screen button handling
//!
//! Buttons write straight into the player's velocity and jump state. They
//! run between ticks, so the next tick sees the new values.

use super::state::{GameState, JumpState};

/// The three on-screen controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Jump,
}

impl Button {
    /// DOM id of the button element
    pub fn element_id(&self) -> &'static str {
        match self {
            Button::Left => "leftButton",
            Button::Right => "rightButton",
            Button::Jump => "jumpButton",
        }
    }

    /// Caption shown on the button
    pub fn label(&self) -> &'static str {
        match self {
            Button::Left => "Left",
            Button::Right => "Right",
            Button::Jump => "Jump",
        }
    }

    /// Display order, left to right
    pub const ALL: [Button; 3] = [Button::Left, Button::Jump, Button::Right];
}

/// Handle a button being pressed
pub fn press(state: &mut GameState, button: Button) {
    let player = &mut state.player;
    match button {
        Button::Left => player.vel.x = -state.tuning.move_speed,
        Button::Right => player.vel.x = state.tuning.move_speed,
        Button::Jump => {
            if player.jump == JumpState::Grounded {
                player.vel.y = -player.jump_force;
                player.jump = JumpState::Airborne;
            }
        }
    }
}

/// Handle a button being released
///
/// A direction release only stops the player if that direction is still
/// the active one, so rolling from one button to the other never stalls.
pub fn release(state: &mut GameState, button: Button) {
    let player = &mut state.player;
    match button {
        Button::Left => {
            if player.vel.x == -state.tuning.move_speed {
                player.vel.x = 0.0;
            }
        }
        Button::Right => {
            if player.vel.x == state.tuning.move_speed {
                player.vel.x = 0.0;
            }
        }
        Button::Jump => {}
    }
}

/// Release both directions, e.g. when the page loses focus mid-press
pub fn release_all(state: &mut GameState) {
    release(state, Button::Left);
    release(state, Button::Right);
}
