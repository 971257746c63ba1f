//! Ambient starfield
//!
//! Purely decorative: stars twinkle in and out at random screen positions.
//! Spawns follow a Poisson process so the density does not depend on the
//! frame rate.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::renderer::{Canvas, colors};

/// A short-lived star in screen space
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Peak half-length of the cross, pixels
    pub size: f32,
    pub spawn_time: f32,
    pub duration: f32,
}

impl Star {
    /// Triangular envelope: 0 at birth, 1 at mid-life, 0 at expiry
    pub fn intensity(&self, time: f32) -> f32 {
        let alive_frac = (time - self.spawn_time) / self.duration;
        (1.0 - (alive_frac - 0.5).abs() * 2.0).max(0.0)
    }

    fn expired(&self, time: f32) -> bool {
        self.spawn_time + self.duration < time
    }
}

/// Background star spawner
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    time: f32,
    stars_per_second: f32,
    rng: Pcg32,
}

impl Starfield {
    pub fn new(seed: u64, stars_per_second: f32) -> Self {
        Self {
            stars: Vec::new(),
            time: 0.0,
            stars_per_second,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Age the field by `dt`: drop expired stars, spawn new ones
    pub fn act(&mut self, dt: f32) {
        self.time += dt;
        let time = self.time;
        self.stars.retain(|star| !star.expired(time));

        let count = poisson(&mut self.rng, dt * self.stars_per_second);
        for _ in 0..count {
            let star = self.make_star();
            self.stars.push(star);
        }
    }

    fn make_star(&mut self) -> Star {
        let pos = Vec2::new(
            self.rng.random_range(0.0..=(SCREEN_WIDTH - 1) as f32),
            self.rng.random_range(0.0..=(SCREEN_HEIGHT - 1) as f32),
        );
        Star {
            pos,
            size: self.rng.random_range(1.0..10.0),
            spawn_time: self.time,
            duration: self.rng.random_range(1.0..5.0),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        for star in &self.stars {
            let half = star.size * star.intensity(self.time);
            canvas.line(colors::STAR, star.pos - Vec2::X * half, star.pos + Vec2::X * half);
            canvas.line(colors::STAR, star.pos - Vec2::Y * half, star.pos + Vec2::Y * half);
        }
    }
}

/// Sample a Poisson-distributed count
///
/// Knuth's multiplication method carried out in log space: unit-rate
/// exponential gaps are summed until they pass `mean`. Working with sums of
/// logs avoids the underflow of `exp(-mean)` for large means.
fn poisson(rng: &mut Pcg32, mean: f32) -> u32 {
    if !(mean > 0.0) || !mean.is_finite() {
        return 0;
    }

    let mean = f64::from(mean);
    let mut elapsed = 0.0;
    let mut count = 0;
    loop {
        // 1 - U lies in (0, 1], so the log is finite
        elapsed -= (1.0 - rng.random::<f64>()).ln();
        if elapsed > mean {
            return count;
        }
        count += 1;
    }
}
