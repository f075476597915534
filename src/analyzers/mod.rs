//! Strength analyzers
//!
//! An analyzer turns a non-empty password into a [`PasswordAnalysis`].
//! The evaluator picks nothing itself: callers choose one at startup
//! (usually via [`default_analyzer`]) and pass it in.

mod rule_based;

#[cfg(feature = "zxcvbn")]
mod pattern;

pub use rule_based::RuleBasedAnalyzer;

#[cfg(feature = "zxcvbn")]
pub use pattern::{ZxcvbnAnalyzer, scale_severity};

use crate::analysis::PasswordAnalysis;
use secrecy::SecretString;

/// A strategy for estimating password strength.
pub trait StrengthAnalyzer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Analyzes a password. Never called with an empty password.
    fn analyze(&self, password: &SecretString) -> PasswordAnalysis;
}

/// Returns the best analyzer compiled into this build.
///
/// With the `zxcvbn` feature this is [`ZxcvbnAnalyzer`], otherwise
/// [`RuleBasedAnalyzer`].
pub fn default_analyzer() -> Box<dyn StrengthAnalyzer> {
    #[cfg(feature = "zxcvbn")]
    {
        Box::new(ZxcvbnAnalyzer::new())
    }

    #[cfg(not(feature = "zxcvbn"))]
    {
        Box::new(RuleBasedAnalyzer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_analyzer_matches_features() {
        let analyzer = default_analyzer();

        #[cfg(feature = "zxcvbn")]
        assert_eq!(analyzer.name(), "zxcvbn");

        #[cfg(not(feature = "zxcvbn"))]
        assert_eq!(analyzer.name(), "rule-based");
    }
}
