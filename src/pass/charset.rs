//! Character classes and pool building.

use std::fmt;

use crate::random::RandomSource;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>/?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Canonical iteration order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Lowercase",
            CharacterClass::Uppercase => "Uppercase",
            CharacterClass::Digit => "Digits",
            CharacterClass::Symbol => "Symbols",
        }
    }

    /// Short sample of the alphabet for menus.
    pub fn sample(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "a-z",
            CharacterClass::Uppercase => "A-Z",
            CharacterClass::Digit => "0-9",
            CharacterClass::Symbol => "!@#$%...",
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Lowercase => 1,
            CharacterClass::Uppercase => 1 << 1,
            CharacterClass::Digit => 1 << 2,
            CharacterClass::Symbol => 1 << 3,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of enabled character classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in canonical order.
    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Candidate characters plus one required character per enabled class.
#[derive(Debug, Default)]
pub struct Pool {
    pub chars: Vec<char>,
    pub mandatory: Vec<char>,
}

/// Build the character pool for the enabled classes.
///
/// An empty set is valid here and yields an empty pool; the synthesizer is
/// the one that refuses it.
pub fn build<R: RandomSource + ?Sized>(classes: ClassSet, rng: &mut R) -> Pool {
    let mut pool = Pool::default();

    for class in classes.iter() {
        let alphabet = class.alphabet();
        let start = pool.chars.len();
        pool.chars.extend(alphabet.chars());
        let picked = pool.chars[start + rng.next_below(pool.chars.len() - start)];
        pool.mandatory.push(picked);
    }

    log::debug!(
        "pool built: {} classes, {} candidate chars",
        pool.mandatory.len(),
        pool.chars.len()
    );
    pool
}

/// Number of distinct candidate characters for the given classes.
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|c| c.alphabet().chars().count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Entropy;

    #[test]
    fn alphabets_are_disjoint() {
        for a in CharacterClass::ALL {
            for b in CharacterClass::ALL {
                if a != b {
                    assert!(!a.alphabet().chars().any(|c| b.contains(c)), "{a} / {b}");
                }
            }
        }
    }

    #[test]
    fn empty_set_gives_empty_pool() {
        let pool = build(ClassSet::empty(), &mut Entropy::seeded(1));
        assert!(pool.chars.is_empty());
        assert!(pool.mandatory.is_empty());
    }

    #[test]
    fn pool_follows_canonical_order() {
        let classes: ClassSet = [CharacterClass::Symbol, CharacterClass::Lowercase]
            .into_iter()
            .collect();
        let pool = build(classes, &mut Entropy::seeded(3));

        let expected: String = format!("{LOWERCASE}{SYMBOLS}");
        assert_eq!(pool.chars.iter().collect::<String>(), expected);
        assert_eq!(pool.mandatory.len(), 2);
        assert!(CharacterClass::Lowercase.contains(pool.mandatory[0]));
        assert!(CharacterClass::Symbol.contains(pool.mandatory[1]));
    }

    #[test]
    fn one_mandatory_char_per_class() {
        let mut rng = Entropy::seeded(11);
        for _ in 0..50 {
            let pool = build(ClassSet::all(), &mut rng);
            assert_eq!(pool.mandatory.len(), 4);
            for (class, c) in CharacterClass::ALL.iter().zip(&pool.mandatory) {
                assert!(class.contains(*c), "{c} not in {class}");
            }
        }
    }

    #[test]
    fn set_operations() {
        let mut set = ClassSet::empty();
        assert!(set.is_empty());
        set.insert(CharacterClass::Digit);
        set.toggle(CharacterClass::Uppercase);
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![CharacterClass::Uppercase, CharacterClass::Digit]
        );
        set.set(CharacterClass::Digit, false);
        set.toggle(CharacterClass::Uppercase);
        assert!(set.is_empty());
        assert_eq!(ClassSet::all().len(), 4);
    }

    #[test]
    fn size_counts_alphabets() {
        assert_eq!(size(ClassSet::all()), 26 + 26 + 10 + SYMBOLS.len());
        assert_eq!(size(ClassSet::empty()), 0);
    }
}
