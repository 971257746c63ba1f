//! Asteroid Field entry point
//!
//! Headless host: drives the frame hooks with a scripted pilot and renders
//! into an off-screen canvas. A windowed host would swap the pilot for real
//! key state and present `Canvas::as_words` each frame.

use asteroid_field::renderer::Canvas;
use asteroid_field::{Game, GameConfig, Keys};

/// Fixed frame time (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;

/// Frames to run before exiting (one minute of game time)
const RUN_FRAMES: u32 = 3600;

/// Frames between progress reports
const REPORT_EVERY: u32 = 60;

/// Scripted input: keep shooting, sweep the heading, pulse thrust, and
/// confirm whenever the game is over
fn autopilot(frame: u32, game_over: bool) -> Keys {
    let phase = frame % 240;
    Keys {
        up: phase < 20,
        left: phase < 120,
        right: phase >= 120,
        fire: true,
        confirm: game_over,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Asteroid Field (headless) starting...");

    let config = GameConfig::load();
    let mut game = match Game::initialize(config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to build assets: {}", e);
            std::process::exit(1);
        }
    };

    let mut canvas = Canvas::new();
    for frame in 0..RUN_FRAMES {
        let keys = autopilot(frame, game.world().is_game_over());
        game.act(FRAME_DT, &keys);
        game.draw(&mut canvas);

        if frame % REPORT_EVERY == 0 {
            let world = game.world();
            log::info!(
                "t={:.1}s score={} lives={} asteroids={} shots={}",
                world.time,
                world.player.score,
                world.player.lives,
                world.asteroids.len(),
                world.projectiles.len()
            );
        }

        if game.quit_requested() {
            break;
        }
    }

    game.finalize();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is embedded by the page instead
}
