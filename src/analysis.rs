//! Strength analysis result types.

use std::fmt;

/// Highest score a password can reach.
pub const MAX_SCORE: u8 = 10;

/// A strength score on the 0-10 scale.
///
/// Construction always clamps, so a `Score` can never leave its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Score(u8);

impl Score {
    pub const ZERO: Score = Score(0);

    pub fn new(value: u8) -> Self {
        Score(value.min(MAX_SCORE))
    }

    /// Builds a score from a possibly out-of-range estimate.
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            return Score::ZERO;
        }
        Score::new(value.min(MAX_SCORE as f64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn level(&self) -> StrengthLevel {
        match self.0 {
            0..=3 => StrengthLevel::Weak,
            4..=6 => StrengthLevel::Medium,
            7..=8 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Qualitative tier of a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Outcome of evaluating one password.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordAnalysis {
    pub score: Score,
    pub entropy_bits: f64,
    pub feedback: Vec<String>,
}

impl PasswordAnalysis {
    pub fn new(score: Score, entropy_bits: f64, feedback: Vec<String>) -> Self {
        let entropy_bits = if entropy_bits.is_finite() && entropy_bits > 0.0 {
            entropy_bits
        } else {
            0.0
        };
        Self {
            score,
            entropy_bits,
            feedback,
        }
    }

    pub fn strength(&self) -> StrengthLevel {
        self.score.level()
    }
}
