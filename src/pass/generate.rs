//! Password generation.

use thiserror::Error;
use zeroize::Zeroize;

use super::charset::{self, ClassSet};
use crate::random::RandomSource;

/// Longest password the generator will build.
pub const MAX_LENGTH: usize = 4096;

/// Most passwords produced by one batch.
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Select at least one character class.")]
    EmptyPool,
    #[error("Length {0} is too long (maximum {}).", MAX_LENGTH)]
    TooLong(usize),
    #[error("Cannot generate {0} passwords at once (maximum {}).", MAX_COUNT)]
    TooMany(usize),
}

/// What to generate: which classes, and how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub classes: ClassSet,
    pub length: usize,
}

impl GenerationRequest {
    pub fn new(classes: ClassSet, length: usize) -> Self {
        Self { classes, length }
    }

    /// Length of the produced password: never fewer than one char per class.
    pub fn effective_length(&self) -> usize {
        self.length.max(self.classes.len())
    }
}

/// Generate a single password for the request.
pub fn generate<R: RandomSource + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let mut pool = charset::build(request.classes, rng);
    let result = synthesize(&pool.chars, &pool.mandatory, request.length, rng);
    pool.mandatory.zeroize();
    result
}

/// Generate `count` independent passwords.
pub fn generate_batch<R: RandomSource + ?Sized>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, GenerateError> {
    if count > MAX_COUNT {
        return Err(GenerateError::TooMany(count));
    }
    (0..count).map(|_| generate(request, rng)).collect()
}

/// Build a password of `max(length, mandatory.len())` characters.
///
/// Mandatory characters are placed first, the rest is filled by sampling
/// `pool` with replacement, then the whole sequence is shuffled so the
/// mandatory characters land anywhere.
pub fn synthesize<R: RandomSource + ?Sized>(
    pool: &[char],
    mandatory: &[char],
    length: usize,
    rng: &mut R,
) -> Result<String, GenerateError> {
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }
    if length > MAX_LENGTH {
        return Err(GenerateError::TooLong(length));
    }

    let fill = length.saturating_sub(mandatory.len());
    let mut chars: Vec<char> = Vec::with_capacity(mandatory.len() + fill);
    chars.extend_from_slice(mandatory);
    chars.extend((0..fill).map(|_| pool[rng.next_below(pool.len())]));

    shuffle(&mut chars, rng);

    log::debug!(
        "synthesized {} chars ({} mandatory, {} fill)",
        chars.len(),
        mandatory.len(),
        fill
    );

    let password = chars.iter().collect();
    chars.zeroize();
    Ok(password)
}

/// Fisher-Yates, last index down to 1.
#[inline]
fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::CharacterClass;
    use crate::random::Entropy;

    /// Always answers the same index (clamped to the bound).
    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn next_below(&mut self, n: usize) -> usize {
            self.0.min(n - 1)
        }
    }

    /// Replays a script of indices.
    struct Script(Vec<usize>);

    impl RandomSource for Script {
        fn next_below(&mut self, n: usize) -> usize {
            let v = self.0.remove(0);
            assert!(v < n, "scripted {v} out of range {n}");
            v
        }
    }

    fn all_subsets() -> Vec<ClassSet> {
        (1u8..16)
            .map(|bits| {
                CharacterClass::ALL
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| bits & (1 << i) != 0)
                    .map(|(_, c)| *c)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn empty_pool_fails_for_any_length() {
        let mut rng = Entropy::seeded(0);
        for length in [0, 1, 4, 16, 200] {
            assert_eq!(
                synthesize(&[], &[], length, &mut rng),
                Err(GenerateError::EmptyPool)
            );
        }
        let request = GenerationRequest::new(ClassSet::empty(), 12);
        assert_eq!(generate(&request, &mut rng), Err(GenerateError::EmptyPool));
    }

    #[test]
    fn oversized_length_is_an_error() {
        let mut rng = Entropy::seeded(1);
        assert_eq!(
            synthesize(&['a'], &[], usize::MAX / 2, &mut rng),
            Err(GenerateError::TooLong(usize::MAX / 2))
        );
        assert_eq!(
            synthesize(&['a'], &[], MAX_LENGTH + 1, &mut rng),
            Err(GenerateError::TooLong(MAX_LENGTH + 1))
        );
        let pw = synthesize(&['a'], &[], MAX_LENGTH, &mut rng).unwrap();
        assert_eq!(pw.len(), MAX_LENGTH);

        let request = GenerationRequest::new(ClassSet::all(), usize::MAX);
        assert_eq!(generate(&request, &mut rng), Err(GenerateError::TooLong(usize::MAX)));
    }

    #[test]
    fn oversized_batch_is_an_error() {
        let request = GenerationRequest::new(ClassSet::all(), 8);
        assert_eq!(
            generate_batch(&request, MAX_COUNT + 1, &mut Entropy::seeded(3)),
            Err(GenerateError::TooMany(MAX_COUNT + 1))
        );
    }

    #[test]
    fn length_is_max_of_requested_and_class_count() {
        let mut rng = Entropy::seeded(5);
        for classes in all_subsets() {
            for length in 1..=20 {
                let request = GenerationRequest::new(classes, length);
                let pw = generate(&request, &mut rng).unwrap();
                assert_eq!(pw.chars().count(), length.max(classes.len()));
                assert_eq!(pw.chars().count(), request.effective_length());
            }
        }
    }

    #[test]
    fn every_selected_class_is_present() {
        let mut rng = Entropy::seeded(9);
        for classes in all_subsets() {
            for length in [1, 2, 4, 8, 32] {
                let pw = generate(&GenerationRequest::new(classes, length), &mut rng).unwrap();
                for class in classes.iter() {
                    assert!(pw.chars().any(|c| class.contains(c)), "{class} missing in {pw}");
                }
                for class in CharacterClass::ALL {
                    if !classes.contains(class) {
                        assert!(!pw.chars().any(|c| class.contains(c)));
                    }
                }
            }
        }
    }

    #[test]
    fn short_length_keeps_all_mandatory() {
        let pw = synthesize(&['a', 'B', '1'], &['a', 'B', '1'], 1, &mut Entropy::seeded(2)).unwrap();
        let mut sorted: Vec<char> = pw.chars().collect();
        sorted.sort();
        assert_eq!(sorted, vec!['1', 'B', 'a']);
    }

    #[test]
    fn fill_samples_with_replacement() {
        let pw = synthesize(&['x'], &[], 6, &mut Entropy::seeded(4)).unwrap();
        assert_eq!(pw, "xxxxxx");
    }

    #[test]
    fn shuffle_walks_down_from_last_index() {
        // j = 0 at every step rotates the sequence left by one.
        let pw = synthesize(&['z'], &['a', 'b', 'c', 'd'], 4, &mut Fixed(0)).unwrap();
        assert_eq!(pw, "bcda");

        // Picking j = i leaves everything in place.
        let mut script = Script(vec![3, 2, 1]);
        let pw = synthesize(&['z'], &['a', 'b', 'c', 'd'], 4, &mut script).unwrap();
        assert_eq!(pw, "abcd");
        assert!(script.0.is_empty());
    }

    #[test]
    fn fill_draws_before_shuffle() {
        // Two fill draws (indices 1, 0), then shuffle draws for i = 2, 1.
        let mut script = Script(vec![1, 0, 2, 1]);
        let pw = synthesize(&['p', 'q'], &['M'], 3, &mut script).unwrap();
        assert_eq!(pw, "Mqp");
    }

    #[test]
    fn batch_count() {
        let request = GenerationRequest::new(ClassSet::all(), 10);
        let batch = generate_batch(&request, 5, &mut Entropy::seeded(8)).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.len() == 10));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let request = GenerationRequest::new(ClassSet::all(), 24);
        let a = generate(&request, &mut Entropy::seeded(1234)).unwrap();
        let b = generate(&request, &mut Entropy::seeded(1234)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mandatory_positions_are_uniform() {
        // Single mandatory 'M' among fill that can never be 'M'.
        const LEN: usize = 8;
        const TRIALS: usize = 40_000;

        let mut rng = Entropy::seeded(2024);
        let mut counts = [0usize; LEN];
        for _ in 0..TRIALS {
            let pw = synthesize(&['.'], &['M'], LEN, &mut rng).unwrap();
            let pos = pw.find('M').unwrap();
            counts[pos] += 1;
        }

        let expected = TRIALS as f64 / LEN as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        // 7 degrees of freedom; 24.3 is the 0.1% critical value.
        assert!(chi2 < 24.3, "chi2 = {chi2}, counts = {counts:?}");
    }

    #[test]
    fn every_mandatory_char_moves_off_the_front() {
        let mut rng = Entropy::seeded(77);
        let mandatory = ['a', 'B', '3', '#'];
        let mut seen_late = [false; 4];
        for _ in 0..500 {
            let pw = synthesize(&['.'], &mandatory, 12, &mut rng).unwrap();
            for (k, m) in mandatory.iter().enumerate() {
                if pw.find(*m).unwrap() >= mandatory.len() {
                    seen_late[k] = true;
                }
            }
        }
        assert!(seen_late.iter().all(|s| *s));
    }
}
