use rand::{rngs::StdRng, SeedableRng};
use ratatui::widgets::canvas::{Painter, Shape};
use tracing::{info, trace};

use super::shapes::Polyline;
use crate::{config::SceneConfig, snowflake::Snowflake};

/// The falling snowflakes and the random source that recycles them.
#[derive(Debug)]
pub struct SnowfallState {
    config: SceneConfig,
    snowflakes: Vec<Snowflake>,
    rng: StdRng,
    ticks: u64,
}

impl SnowfallState {
    pub fn new(config: SceneConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: SceneConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SceneConfig, mut rng: StdRng) -> Self {
        let snowflakes =
            (0..config.particle_count).map(|_| Snowflake::spawn(&mut rng, &config)).collect::<Vec<_>>();
        info!(count = snowflakes.len(), "spawned snowflakes");

        Self { config, snowflakes, rng, ticks: 0 }
    }

    /// Advances every snowflake by one tick, always in the same order.
    pub fn update(&mut self) {
        self.ticks += 1;
        for (index, flake) in self.snowflakes.iter_mut().enumerate() {
            if flake.update(&mut self.rng, &self.config) {
                trace!(tick = self.ticks, index, scale = flake.scale(), "snowflake recycled");
            }
        }
    }

    pub fn snowflakes(&self) -> &[Snowflake] {
        &self.snowflakes
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Shape for SnowfallState {
    fn draw(&self, painter: &mut Painter) {
        for flake in &self.snowflakes {
            let points = flake.project();
            Polyline::new(&points, flake.color(), self.config.height).draw(painter);
        }
    }
}
