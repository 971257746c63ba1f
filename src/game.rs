//! Frame hooks driven by the host loop
//!
//! The host calls [`Game::initialize`] once, then `act` and `draw` every
//! frame, and finally [`Game::finalize`]. All game state lives in the `Game`
//! value the host owns.

use crate::background::Starfield;
use crate::renderer::scene::{draw_hud, draw_world};
use crate::renderer::{Assets, Canvas, SpriteError, Viewport, colors};
use crate::settings::GameConfig;
use crate::sim::{StepInput, World, step};

/// Salt separating the starfield RNG stream from the world's
const STARFIELD_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Snapshot of the logical keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub confirm: bool,
    pub cancel: bool,
}

impl Keys {
    /// Translate held keys into simulation input
    pub fn step_input(&self) -> StepInput {
        StepInput {
            thrust: i8::from(self.up) - i8::from(self.down),
            steer: i8::from(self.left) - i8::from(self.right),
            shoot: self.fire,
        }
    }
}

/// Game instance holding all state
pub struct Game {
    config: GameConfig,
    world: World,
    starfield: Option<Starfield>,
    assets: Assets,
    view: Viewport,
    restarts: u64,
    quit: bool,
}

impl Game {
    /// Build assets and the first world
    pub fn initialize(config: GameConfig) -> Result<Self, SpriteError> {
        let assets = Assets::load()?;
        let world = Self::new_world(&config, 0);
        let view = Viewport::new(world.size);
        let starfield = config.starfield.then(|| {
            Starfield::new(config.seed ^ STARFIELD_SEED_SALT, config.stars_per_second)
        });

        log::info!("Game initialized with seed: {}", config.seed);

        Ok(Self {
            config,
            world,
            starfield,
            assets,
            view,
            restarts: 0,
            quit: false,
        })
    }

    fn new_world(config: &GameConfig, restarts: u64) -> World {
        World::with_asteroid_count(
            config.world_size(),
            config.seed.wrapping_add(restarts),
            config.initial_asteroids,
        )
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Set once the player asks to leave; the host decides when to stop
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Advance everything by `dt` seconds
    pub fn act(&mut self, dt: f32, keys: &Keys) {
        if keys.cancel && !self.quit {
            log::info!("Quit requested");
            self.quit = true;
        }

        if self.world.is_game_over() && keys.confirm {
            self.restart();
        }

        if self.spawn_due(dt) && self.world.asteroids.len() < self.config.max_asteroids {
            self.world.spawn_random_asteroid();
        }

        step(&mut self.world, &keys.step_input(), dt);

        if let Some(starfield) = &mut self.starfield {
            starfield.act(dt);
        }
    }

    /// True when the world clock crosses a spawn-interval boundary during `dt`
    fn spawn_due(&self, dt: f32) -> bool {
        let interval = self.config.asteroid_spawn_interval;
        if !(interval > 0.0) {
            return false;
        }
        let before = (self.world.time / interval).floor();
        let after = ((self.world.time + dt) / interval).floor();
        before != after
    }

    /// Replace the world wholesale with a fresh one
    fn restart(&mut self) {
        self.restarts += 1;
        log::info!(
            "Restarting (run {}, previous score {})",
            self.restarts + 1,
            self.world.player.score
        );
        self.world = Self::new_world(&self.config, self.restarts);
    }

    /// Render the current frame into the host's buffer
    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.clear(colors::BACKGROUND);
        if let Some(starfield) = &self.starfield {
            starfield.draw(canvas);
        }
        draw_world(canvas, &self.assets, &self.world, &self.view);
        draw_hud(canvas, &self.assets, &self.world);
    }

    pub fn finalize(self) {
        log::info!(
            "Shutting down after {} restarts, score {}",
            self.restarts,
            self.world.player.score
        );
    }
}
