use crate::geometry::Point;
use rand::SeedableRng;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Non-cryptographic random source for point generation.
///
/// `Random::new()` draws its seed from the thread RNG; `Random::from_seed` is
/// for reproducible scenes and tests.
#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[0, max)`. Returns 0 when `max` is 0.
    pub fn random_int(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.rng.random_range(0..max)
    }

    pub fn random_point(&mut self, xmax: u32, ymax: u32) -> Point {
        let x = self.random_int(xmax);
        let y = self.random_int(ymax);
        Point::new(x as f32, y as f32)
    }

    /// `n` independent random points; duplicates are possible.
    pub fn generate_points(&mut self, n: usize, xmax: u32, ymax: u32) -> Vec<Point> {
        (0..n).map(|_| self.random_point(xmax, ymax)).collect()
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
