use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The engine's single randomness seam.
///
/// Both the proposal probability gate and tie-break shuffles consume
/// uniform draws from this trait, so a test can substitute a scripted
/// source and make a whole cycle deterministic.
pub trait RandomSource: Send {
    /// Uniform draw in `[0, 1)`.
    fn draw(&mut self) -> f64;
}

/// Production random source backed by `StdRng`.
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Non-deterministic source for production runs.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded source for reproducible campaign cycles.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn draw(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Fisher-Yates shuffle driven by uniform draws.
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = (rng.draw() * (i as f64 + 1.0)) as usize;
        items.swap(i, j.min(i));
    }
}
