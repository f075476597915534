//! Password strength evaluator - entry point for strength analysis.

use secrecy::{ExposeSecret, SecretString};

use crate::analysis::{PasswordAnalysis, Score};
use crate::analyzers::StrengthAnalyzer;

pub const EMPTY_PASSWORD: &str = "Empty password.";

/// Evaluates password strength with the given analyzer.
///
/// An empty password short-circuits to a zero score without consulting the
/// analyzer. The returned score is always within 0-10 and the entropy is
/// never negative, whatever the analyzer reports.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `analyzer` - Strategy chosen at startup, see [`crate::default_analyzer`]
pub fn evaluate(password: &SecretString, analyzer: &dyn StrengthAnalyzer) -> PasswordAnalysis {
    if password.expose_secret().is_empty() {
        return PasswordAnalysis::new(Score::ZERO, 0.0, vec![EMPTY_PASSWORD.to_string()]);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("evaluating password with {} analyzer", analyzer.name());

    let analysis = analyzer.analyze(password);
    PasswordAnalysis::new(
        Score::new(analysis.score.value()),
        analysis.entropy_bits,
        analysis.feedback,
    )
}
