//! Random sources for password generation.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

/// Uniform integers in `[0, n)`.
///
/// Generation code only ever asks for bounded indices, so anything able to
/// answer that can drive it: the OS generator, a seeded generator, or a fake.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `0..n`. `n` must be non-zero.
    fn next_below(&mut self, n: usize) -> usize;
}

/// Random source selected at startup.
pub enum Entropy {
    /// Operating system CSPRNG.
    Os(OsRng),
    /// Reproducible stream, for `--seed`.
    Seeded(StdRng),
}

impl Entropy {
    pub fn os() -> Self {
        Entropy::Os(OsRng)
    }

    pub fn seeded(seed: u64) -> Self {
        Entropy::Seeded(StdRng::seed_from_u64(seed))
    }

    /// Pick the seeded source when a seed is given, else the OS source.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::os(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Entropy::Os(_) => "os",
            Entropy::Seeded(_) => "seeded",
        }
    }
}

impl Default for Entropy {
    fn default() -> Self {
        Self::os()
    }
}

impl RandomSource for Entropy {
    #[inline]
    fn next_below(&mut self, n: usize) -> usize {
        match self {
            Entropy::Os(rng) => rng.gen_range(0..n),
            Entropy::Seeded(rng) => rng.gen_range(0..n),
        }
    }
}
