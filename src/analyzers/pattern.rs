//! Pattern-based analyzer backed by zxcvbn.

use secrecy::{ExposeSecret, SecretString};
use zxcvbn::{Score as Severity, zxcvbn};

use super::StrengthAnalyzer;
use crate::analysis::{MAX_SCORE, PasswordAnalysis, Score};

/// Highest severity zxcvbn reports.
const MAX_SEVERITY: u8 = 4;

/// Maps a zxcvbn severity (0-4) onto the 0-10 scale with rounding.
///
/// 0, 1, 2, 3, 4 become 0, 3, 5, 8, 10.
pub fn scale_severity(severity: u8) -> Score {
    let severity = severity.min(MAX_SEVERITY);
    let scaled = f64::from(severity) / f64::from(MAX_SEVERITY) * f64::from(MAX_SCORE);
    Score::saturating(scaled.round())
}

fn severity_value(score: Severity) -> u8 {
    match score {
        Severity::Zero => 0,
        Severity::One => 1,
        Severity::Two => 2,
        Severity::Three => 3,
        Severity::Four => 4,
        _ => 0,
    }
}

/// Delegates to zxcvbn's pattern matching (dictionaries, keyboard walks,
/// dates, repeats).
#[derive(Debug, Clone, Default)]
pub struct ZxcvbnAnalyzer {
    user_inputs: Vec<String>,
}

impl ZxcvbnAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra words (user name, site name) that should count against a
    /// password containing them.
    pub fn with_user_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }
}

impl StrengthAnalyzer for ZxcvbnAnalyzer {
    fn name(&self) -> &'static str {
        "zxcvbn"
    }

    fn analyze(&self, password: &SecretString) -> PasswordAnalysis {
        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let entropy = zxcvbn(password.expose_secret(), &inputs);

        let mut feedback = Vec::new();
        if let Some(fb) = entropy.feedback() {
            if let Some(warning) = fb.warning() {
                feedback.push(warning.to_string());
            }
            feedback.extend(fb.suggestions().iter().map(ToString::to_string));
        }

        let entropy_bits = entropy.guesses_log10() * std::f64::consts::LOG2_10;

        PasswordAnalysis::new(
            scale_severity(severity_value(entropy.score())),
            entropy_bits,
            feedback,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(pwd: &str) -> PasswordAnalysis {
        ZxcvbnAnalyzer::new().analyze(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_scale_severity_rounds() {
        let scaled: Vec<u8> = (0..=4).map(|s| scale_severity(s).value()).collect();
        assert_eq!(scaled, vec![0, 3, 5, 8, 10]);
    }

    #[test]
    fn test_scale_severity_out_of_range() {
        assert_eq!(scale_severity(9).value(), 10);
    }

    #[test]
    fn test_common_password_is_weak_with_feedback() {
        let analysis = analyze("password");
        assert!(analysis.score.value() <= 3);
        assert!(!analysis.feedback.is_empty());
        assert!(analysis.entropy_bits >= 0.0);
    }

    #[test]
    fn test_random_password_is_strong() {
        let analysis = analyze("qM7#vL2!xR9$wK4@");
        assert!(analysis.score.value() >= 8);
        assert!(analysis.entropy_bits > 40.0);
    }

    #[test]
    fn test_user_inputs_penalize() {
        let plain = ZxcvbnAnalyzer::new()
            .analyze(&SecretString::new("maria-dashboard".to_string().into()));
        let penalized = ZxcvbnAnalyzer::with_user_inputs(["maria", "dashboard"])
            .analyze(&SecretString::new("maria-dashboard".to_string().into()));
        assert!(penalized.entropy_bits <= plain.entropy_bits);
    }
}
