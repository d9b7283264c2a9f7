//! Canvas 2D rendering module
//!
//! `draw` projects the game state onto anything that implements `Surface`.
//! The browser backend lives in `canvas` and only builds for wasm32.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::consts::*;
use crate::sim::GameState;

/// Image assets, loaded once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    GameOver,
    Life,
    Player,
    Enemy,
}

impl Sprite {
    pub const ALL: [Sprite; 5] = [
        Sprite::Background,
        Sprite::GameOver,
        Sprite::Life,
        Sprite::Player,
        Sprite::Enemy,
    ];

    /// Path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Background => "Background.png",
            Sprite::GameOver => "GameOver.png",
            Sprite::Life => "Live.png",
            Sprite::Player => "Player.png",
            Sprite::Enemy => "Enemy.png",
        }
    }
}

/// A 2D drawing target with a transform stack
///
/// Mirrors the subset of `CanvasRenderingContext2d` the game needs. Drawing
/// calls never fail from the caller's point of view; a backend that cannot
/// draw something just skips it.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, color: &str, x: f32, y: f32, w: f32, h: f32);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);
    fn scale(&mut self, x: f32, y: f32);
}

/// Draw one frame
pub fn draw(state: &GameState, surface: &mut impl Surface) {
    let world = state.world;
    surface.clear(world.width, world.height);

    if state.is_game_over() {
        surface.draw_image(Sprite::GameOver, 0.0, 0.0, world.width, world.height);
        return;
    }

    surface.draw_image(Sprite::Background, 0.0, 0.0, world.width, world.height);

    // Negative lives draw nothing
    for i in 0..state.player.lives.max(0) {
        surface.draw_image(
            Sprite::Life,
            LIFE_ICON_X + i as f32 * LIFE_ICON_SPACING,
            LIFE_ICON_Y,
            LIFE_ICON_SIZE,
            LIFE_ICON_SIZE,
        );
    }

    let player = &state.player;
    surface.draw_image(
        Sprite::Player,
        player.pos.x,
        player.pos.y,
        player.size.x,
        player.size.y,
    );

    // Enemy is drawn around its center so rotation flips it in place
    let enemy = &state.enemy;
    let half = enemy.size / 2.0;
    surface.save();
    surface.translate(enemy.pos.x + half.x, enemy.pos.y + half.y);
    surface.rotate(enemy.rotation);
    surface.scale(1.0, -1.0);
    if enemy.is_alive() {
        surface.draw_image(Sprite::Enemy, -half.x, -half.y, enemy.size.x, enemy.size.y);
    }
    surface.restore();

    let platform = &state.platform;
    surface.fill_rect(
        PLATFORM_COLOR,
        platform.pos.x,
        platform.pos.y,
        platform.size.x,
        platform.size.y,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Image(Sprite, f32, f32, f32, f32),
        Rect(String, f32, f32, f32, f32),
        Save,
        Restore,
        Translate(f32, f32),
        Rotate(f32),
        Scale(f32, f32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Recorder {
        fn images(&self, sprite: Sprite) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Image(s, ..) if *s == sprite))
                .count()
        }
    }

    impl Surface for Recorder {
        fn clear(&mut self, _width: f32, _height: f32) {
            self.calls.push(Call::Clear);
        }
        fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) {
            self.calls.push(Call::Image(sprite, x, y, w, h));
        }
        fn fill_rect(&mut self, color: &str, x: f32, y: f32, w: f32, h: f32) {
            self.calls.push(Call::Rect(color.to_string(), x, y, w, h));
        }
        fn save(&mut self) {
            self.calls.push(Call::Save);
        }
        fn restore(&mut self) {
            self.calls.push(Call::Restore);
        }
        fn translate(&mut self, x: f32, y: f32) {
            self.calls.push(Call::Translate(x, y));
        }
        fn rotate(&mut self, angle: f32) {
            self.calls.push(Call::Rotate(angle));
        }
        fn scale(&mut self, x: f32, y: f32) {
            self.calls.push(Call::Scale(x, y));
        }
    }

    fn new_state() -> GameState {
        GameState::new(800.0, 600.0, &Tuning::default())
    }

    #[test]
    fn test_playing_frame_layout() {
        let state = new_state();
        let mut rec = Recorder::default();
        draw(&state, &mut rec);

        assert_eq!(rec.calls[0], Call::Clear);
        assert_eq!(rec.calls[1], Call::Image(Sprite::Background, 0.0, 0.0, 800.0, 600.0));
        assert_eq!(rec.calls[2], Call::Image(Sprite::Life, 10.0, 10.0, 20.0, 20.0));
        assert_eq!(rec.calls[4], Call::Image(Sprite::Life, 70.0, 10.0, 20.0, 20.0));
        assert_eq!(rec.calls[5], Call::Image(Sprite::Player, 50.0, 400.0, 100.0, 100.0));
        assert_eq!(
            rec.calls.last(),
            Some(&Call::Rect("#0c0".to_string(), 0.0, 500.0, 800.0, 50.0))
        );
    }

    #[test]
    fn test_enemy_drawn_around_center() {
        let mut state = new_state();
        state.enemy.pos = Vec2::new(300.0, 400.0);
        state.enemy.rotation = std::f32::consts::PI;
        let mut rec = Recorder::default();
        draw(&state, &mut rec);

        let start = rec.calls.iter().position(|c| *c == Call::Save).unwrap();
        assert_eq!(
            &rec.calls[start..start + 6],
            &[
                Call::Save,
                Call::Translate(325.0, 425.0),
                Call::Rotate(std::f32::consts::PI),
                Call::Scale(1.0, -1.0),
                Call::Image(Sprite::Enemy, -25.0, -25.0, 50.0, 50.0),
                Call::Restore,
            ]
        );
    }

    #[test]
    fn test_dead_enemy_not_drawn() {
        let mut state = new_state();
        state.enemy.kill();
        let mut rec = Recorder::default();
        draw(&state, &mut rec);
        assert_eq!(rec.images(Sprite::Enemy), 0);
        assert_eq!(rec.images(Sprite::Player), 1);
    }

    #[test]
    fn test_life_icons_follow_lives() {
        let mut state = new_state();
        let mut rec = Recorder::default();

        state.player.lives = 1;
        draw(&state, &mut rec);
        assert_eq!(rec.images(Sprite::Life), 1);

        // Zero lives is still in play, just no icons
        rec.calls.clear();
        state.player.lives = 0;
        draw(&state, &mut rec);
        assert_eq!(rec.images(Sprite::Life), 0);
        assert_eq!(rec.images(Sprite::Background), 1);
    }

    #[test]
    fn test_game_over_frame_is_only_the_game_over_image() {
        let mut state = new_state();
        state.player.lives = 0;
        state.player.pos = Vec2::new(280.0, 400.0);
        state.enemy.pos = Vec2::new(300.0, 400.0);
        tick(&mut state);
        assert!(state.is_game_over());

        for _ in 0..3 {
            let mut rec = Recorder::default();
            draw(&state, &mut rec);
            assert_eq!(
                rec.calls,
                vec![
                    Call::Clear,
                    Call::Image(Sprite::GameOver, 0.0, 0.0, 800.0, 600.0)
                ]
            );
            // State keeps changing underneath
            state.player.vel.x = 5.0;
            tick(&mut state);
        }
    }

    #[test]
    fn test_sprite_paths_are_distinct() {
        let mut paths: Vec<_> = Sprite::ALL.iter().map(|s| s.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Sprite::ALL.len());
    }
}
