//! Simulation tick
//!
//! Advances the world by one host-supplied `dt`. The stages run in a fixed
//! order; later stages depend on flags set by earlier ones within the same
//! tick (kill direction, alive flags).

use super::body::Body;
use super::collision::{circles_collide, split_asteroid};
use super::state::{Projectile, World};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInput {
    /// Thrust along the heading: -1, 0 or 1
    pub thrust: i8,
    /// Steering: 1 turns counter-clockwise, -1 clockwise
    pub steer: i8,
    /// Fire (held fire keeps shooting at the capped rate)
    pub shoot: bool,
}

/// Advance the world by `dt` seconds
pub fn step(world: &mut World, input: &StepInput, dt: f32) {
    world.time += dt;

    if world.player.is_alive() {
        control_player(world, input, dt);
    }

    expire_projectiles(world);

    if world.player.is_alive() {
        player_asteroid_collisions(world);
    }

    projectile_asteroid_collisions(world);
    split_destroyed_asteroids(world);

    world.asteroids.retain(|a| a.alive);
    world.projectiles.retain(|p| p.alive);

    integrate(world, dt);
}

fn control_player(world: &mut World, input: &StepInput, dt: f32) {
    let time = world.time;
    let player = &mut world.player;

    if input.shoot && time >= player.last_shot + PLAYER_SHOOT_DELAY {
        player.last_shot = time;
        let trans = player.body.trans;
        let vel = trans.direction() * PROJECTILE_SPEED + player.body.vel;
        world.projectiles.push(Projectile::new(Body::new(trans, vel), time));
    }

    let thrust = f32::from(input.thrust.clamp(-1, 1));
    let steer = f32::from(input.steer.clamp(-1, 1));
    player.body.vel += player.direction() * PLAYER_ACCELERATION * thrust * dt;
    player.body.trans.rot += PLAYER_TURN_RATE * steer * dt;
}

fn expire_projectiles(world: &mut World) {
    let time = world.time;
    for projectile in &mut world.projectiles {
        if projectile.age(time) > PROJECTILE_LIFETIME {
            projectile.alive = false;
        }
    }
}

fn player_asteroid_collisions(world: &mut World) {
    let time = world.time;
    let spawn = world.spawn_point();
    let player = &mut world.player;

    if player.invincible {
        if time - player.invincible_start >= PLAYER_INVINCIBLE_DURATION {
            player.invincible = false;
            log::debug!("Invincibility ended at t={:.2}", time);
        }
        return;
    }

    let pos = player.body.pos();
    let hit = world
        .asteroids
        .iter()
        .filter(|a| a.alive)
        .any(|a| circles_collide(pos, PLAYER_RADIUS, a.body.pos(), a.radius));

    if hit {
        player.invincible = true;
        player.invincible_start = time;
        player.lives -= 1;
        player.score -= HIT_PENALTY;
        player.respawn(spawn);

        if player.lives == 0 {
            log::info!("Game over at t={:.2}, final score {}", time, player.score);
        } else {
            log::info!("Ship hit at t={:.2}, {} lives left", time, player.lives);
        }
    }
}

fn projectile_asteroid_collisions(world: &mut World) {
    for projectile in world.projectiles.iter_mut().filter(|p| p.alive) {
        let pos = projectile.body.pos();
        let target = world
            .asteroids
            .iter_mut()
            .filter(|a| a.alive)
            .find(|a| circles_collide(pos, PROJECTILE_RADIUS, a.body.pos(), a.radius));

        if let Some(asteroid) = target {
            projectile.alive = false;
            asteroid.alive = false;
            asteroid.kill_dir = projectile.body.vel;
            world.player.score += KILL_BONUS;
        }
    }
}

fn split_destroyed_asteroids(world: &mut World) {
    let fragments: Vec<_> = world
        .asteroids
        .iter()
        .filter(|a| !a.alive)
        .filter_map(split_asteroid)
        .flatten()
        .collect();

    if !fragments.is_empty() {
        log::trace!("{} asteroid fragments spawned", fragments.len());
    }
    world.asteroids.extend(fragments);
}

fn integrate(world: &mut World, dt: f32) {
    let size = world.size;

    if world.player.is_alive() {
        world.player.body.integrate(dt);
    }
    world.player.body.wrap(size);

    let bodies = world
        .asteroids
        .iter_mut()
        .map(|a| &mut a.body)
        .chain(world.projectiles.iter_mut().map(|p| &mut p.body));
    for body in bodies {
        body.integrate(dt);
        body.wrap(size);
    }
}
