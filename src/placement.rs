use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Horizontal jitter range applied to a newly opened window.
pub const JITTER_X_RANGE: std::ops::Range<f64> = -600.0..100.0;

/// Vertical jitter range applied to a newly opened window.
pub const JITTER_Y_RANGE: std::ops::Range<f64> = -100.0..100.0;

/// Source of the per-window placement offset.
///
/// Sampled exactly once when a window opens so the spot is stable across
/// re-renders. Injectable so tests can pin placement down.
pub trait PlacementJitter {
    /// One `(offset_x, offset_y)` sample.
    fn sample(&mut self) -> (f64, f64);
}

/// Uniform random jitter so consecutively opened windows do not land
/// exactly on top of each other.
pub struct RandomJitter<R: Rng = SmallRng> {
    rng: R,
}

impl RandomJitter<SmallRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PlacementJitter for RandomJitter<R> {
    fn sample(&mut self) -> (f64, f64) {
        (
            self.rng.random_range(JITTER_X_RANGE),
            self.rng.random_range(JITTER_Y_RANGE),
        )
    }
}

/// Fixed offsets, for deterministic tests and scripted layouts.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64, pub f64);

impl PlacementJitter for FixedJitter {
    fn sample(&mut self) -> (f64, f64) {
        (self.0, self.1)
    }
}
