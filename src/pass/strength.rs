//! Heuristic password strength.

use std::fmt;

/// Qualitative strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Nothing to score.
    Empty,
    Weak,
    Medium,
    Strong,
    Excellent,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Empty => "—",
            Label::Weak => "Weak",
            Label::Medium => "Medium",
            Label::Strong => "Strong",
            Label::Excellent => "Excellent",
        }
    }

    fn from_score(pct: u8) -> Self {
        match pct {
            80.. => Label::Excellent,
            60..=79 => Label::Strong,
            40..=59 => Label::Medium,
            _ => Label::Weak,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display tier for the strength bar colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Good,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    /// 0..=100
    pub score: u8,
    pub label: Label,
}

impl Strength {
    pub const EMPTY: Strength = Strength {
        score: 0,
        label: Label::Empty,
    };

    pub fn tier(&self) -> Tier {
        match self.score {
            80.. => Tier::Good,
            60..=79 => Tier::Warning,
            _ => Tier::Danger,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.label, self.score)
    }
}

/// Score a password: length bonus plus character variety.
///
/// Raw score is 0..=6 but is normalised against 5, so the best passwords
/// clamp at 100.
pub fn estimate(password: &str) -> Strength {
    if password.is_empty() {
        return Strength::EMPTY;
    }

    let len = password.chars().count();
    let mut raw: u32 = [8, 12, 16].iter().filter(|&&min| len >= min).count() as u32;

    let (mut lower, mut upper, mut digit, mut other) = (false, false, false, false);
    for c in password.chars() {
        match c {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => digit = true,
            _ => other = true,
        }
    }
    let variety = [lower, upper, digit, other].iter().filter(|b| **b).count() as u32;
    raw += variety.saturating_sub(1);

    // round(raw / 5 * 100) is exact in integers
    let score = (raw * 20).min(100) as u8;

    Strength {
        score,
        label: Label::from_score(score),
    }
}

/// Theoretical entropy of `length` characters drawn from `pool_size` symbols.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}
