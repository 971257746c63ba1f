//! Drawing the world and HUD
//!
//! Reads the simulation state only; nothing here mutates the world.

use glam::Vec2;

use super::assets::Assets;
use super::canvas::Canvas;
use super::color::colors;
use super::text::{ADVANCE_Y, Align};
use super::view::Viewport;
use crate::consts::{PLAYER_RADIUS, PROJECTILE_RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Asteroid, Player, World};

/// Ship outline in local space, nose along +X
const SHIP_OUTLINE: [(Vec2, Vec2); 3] = [
    (Vec2::new(1.0, 0.0), Vec2::new(-1.0, 1.0)),
    (Vec2::new(1.0, 0.0), Vec2::new(-1.0, -1.0)),
    (Vec2::new(-1.0, -1.0), Vec2::new(-1.0, 1.0)),
];

/// HUD layout (pixels)
const HUD_MARGIN: i32 = 12;
const HEART_WIDTH: i32 = 27;
const HEART_HEIGHT: i32 = 21;
const HEART_SPACING: i32 = 33;

/// Draw asteroids, projectiles and the ship
pub fn draw_world(canvas: &mut Canvas, assets: &Assets, world: &World, view: &Viewport) {
    for asteroid in &world.asteroids {
        draw_asteroid(canvas, assets, asteroid, view);
    }

    let shot_radius = view.to_screen_len(PROJECTILE_RADIUS);
    for projectile in &world.projectiles {
        canvas.circle(colors::PROJECTILE, view.to_screen(projectile.body.pos()), shot_radius);
    }

    if world.player.is_alive() {
        draw_player(canvas, &world.player, view);
    }
}

fn draw_asteroid(canvas: &mut Canvas, assets: &Assets, asteroid: &Asteroid, view: &Viewport) {
    let center = view.to_screen(asteroid.body.pos());
    let r = view.to_screen_len(asteroid.radius);
    canvas.sprite_f(
        center.x - r,
        center.y - r,
        2.0 * r,
        2.0 * r,
        assets.asteroid(asteroid.variant),
    );
}

fn draw_player(canvas: &mut Canvas, player: &Player, view: &Viewport) {
    let color = if player.invincible {
        colors::SHIP_INVINCIBLE
    } else {
        colors::SHIP
    };
    let trans = player.body.trans;
    for (a, b) in SHIP_OUTLINE {
        canvas.line(
            color,
            view.to_screen(trans.apply(a * PLAYER_RADIUS)),
            view.to_screen(trans.apply(b * PLAYER_RADIUS)),
        );
    }
}

/// Draw lives, score and the game-over banner
pub fn draw_hud(canvas: &mut Canvas, assets: &Assets, world: &World) {
    let player = &world.player;

    for i in 0..player.lives as i32 {
        canvas.sprite(
            HUD_MARGIN + i * HEART_SPACING,
            HUD_MARGIN,
            HEART_WIDTH,
            HEART_HEIGHT,
            &assets.heart,
        );
    }

    canvas.text(
        SCREEN_WIDTH as i32 - HUD_MARGIN,
        HUD_MARGIN,
        &format!("SCORE: {}", player.score),
        Align::Right,
        &assets.font,
    );

    if world.is_game_over() {
        let cx = SCREEN_WIDTH as i32 / 2;
        let cy = SCREEN_HEIGHT as i32 / 2;
        canvas.text(cx, cy - ADVANCE_Y, "GAME OVER", Align::Center, &assets.font);
        canvas.text(cx, cy + ADVANCE_Y, "PRESS ENTER TO RESTART", Align::Center, &assets.font);
    }
}
