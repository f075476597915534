//! Rule-based analyzer - entropy from the character pool in use.

use secrecy::{ExposeSecret, SecretString};

use super::StrengthAnalyzer;
use crate::analysis::{PasswordAnalysis, Score};

pub(crate) const RULE_BASED_NOTE: &str = "Rule-based scoring used.";

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const SYMBOL_POOL: u32 = 32;

/// Scores passwords as `length * log2(pool)` bits, ten bits per point.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAnalyzer;

impl RuleBasedAnalyzer {
    /// Size of the character pool actually used by `password`.
    ///
    /// Every character lands in exactly one class; anything that is not a
    /// cased letter or an ASCII digit counts as a symbol.
    pub fn pool_size(password: &str) -> u32 {
        let mut lower = false;
        let mut upper = false;
        let mut digit = false;
        let mut other = false;

        for c in password.chars() {
            if c.is_lowercase() {
                lower = true;
            } else if c.is_uppercase() {
                upper = true;
            } else if c.is_ascii_digit() {
                digit = true;
            } else {
                other = true;
            }
        }

        [
            (lower, LOWERCASE_POOL),
            (upper, UPPERCASE_POOL),
            (digit, DIGIT_POOL),
            (other, SYMBOL_POOL),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, size)| size)
        .sum()
    }

    pub fn entropy_bits(password: &str) -> f64 {
        let pool = Self::pool_size(password);
        if pool == 0 {
            return 0.0;
        }
        password.chars().count() as f64 * f64::from(pool).log2()
    }
}

impl StrengthAnalyzer for RuleBasedAnalyzer {
    fn name(&self) -> &'static str {
        "rule-based"
    }

    fn analyze(&self, password: &SecretString) -> PasswordAnalysis {
        let entropy = Self::entropy_bits(password.expose_secret());
        let score = Score::saturating((entropy / 10.0).floor());

        PasswordAnalysis::new(score, entropy, vec![RULE_BASED_NOTE.to_string()])
    }
}
