//! Terminal report for one password check.

use std::io::{self, Write};

use passcheck::{BreachResult, MAX_SCORE, PasswordAnalysis, StrengthLevel};

const FILLED: char = '█';
const EMPTY: char = '░';

pub fn strength_bar(analysis: &PasswordAnalysis) -> String {
    let filled = usize::from(analysis.score.value());
    let empty = usize::from(MAX_SCORE) - filled;
    let mood = match analysis.strength() {
        StrengthLevel::Weak => "😨",
        StrengthLevel::Medium => "😐",
        StrengthLevel::Strong => "😊",
        StrengthLevel::VeryStrong => "💪",
    };
    format!(
        "Security Level: [{}{}] {} {} ({})",
        FILLED.to_string().repeat(filled),
        EMPTY.to_string().repeat(empty),
        mood,
        analysis.strength(),
        analysis.score
    )
}

pub fn breach_line(result: &BreachResult) -> String {
    match result {
        BreachResult::Found(count) => format!(
            "❌ PASSWORD BREACHED: seen {} time{}. Change it now!",
            count,
            if *count == 1 { "" } else { "s" }
        ),
        BreachResult::NotFound => "✅ Your password was NOT found in known breaches.".to_string(),
        BreachResult::Unknown(reason) => {
            format!("⚠ Could not verify against breach databases: {}.", reason)
        }
    }
}

pub fn render_report<W: Write>(
    out: &mut W,
    analysis: &PasswordAnalysis,
    tips: &[String],
    breach: &BreachResult,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", strength_bar(analysis))?;
    writeln!(out)?;
    writeln!(out, "Entropy: {:.2} bits", analysis.entropy_bits)?;
    writeln!(out)?;

    if !analysis.feedback.is_empty() {
        writeln!(out, "💡 Analysis Feedback:")?;
        for line in &analysis.feedback {
            writeln!(out, "   - {}", line)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "🧠 Improvement Suggestions:")?;
    for tip in tips {
        writeln!(out, "   • {}", tip)?;
    }
    writeln!(out)?;

    writeln!(out, "{}", breach_line(breach))?;
    writeln!(out)?;
    writeln!(
        out,
        "Stay safe: use a password manager and a unique password for each site."
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use passcheck::{BreachError, Score};

    fn analysis(score: u8) -> PasswordAnalysis {
        PasswordAnalysis::new(Score::new(score), 37.6035, vec!["Rule-based scoring used.".into()])
    }

    #[test]
    fn test_strength_bar_cells() {
        let bar = strength_bar(&analysis(3));
        assert!(bar.contains("[███░░░░░░░]"));
        assert!(bar.contains("Weak (3/10)"));

        let bar = strength_bar(&analysis(10));
        assert!(bar.contains("[██████████]"));
        assert!(bar.contains("Very Strong"));
    }

    #[test]
    fn test_breach_lines_are_distinct() {
        let found = breach_line(&BreachResult::Found(1));
        let not_found = breach_line(&BreachResult::NotFound);
        let unknown = breach_line(&BreachResult::Unknown(BreachError::Timeout));

        assert!(found.contains("seen 1 time."));
        assert!(not_found.contains("NOT found"));
        assert!(unknown.contains("Could not verify"));
        assert!(!unknown.contains("NOT found"));
    }

    #[test]
    fn test_render_report_sections() {
        let mut out = Vec::new();
        let tips = vec!["Add uppercase letters (A–Z).".to_string()];
        render_report(&mut out, &analysis(3), &tips, &BreachResult::Found(9545824))
            .expect("write to vec");

        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.contains("Entropy: 37.60 bits"));
        assert!(text.contains("   - Rule-based scoring used."));
        assert!(text.contains("   • Add uppercase letters (A–Z)."));
        assert!(text.contains("seen 9545824 times"));
    }
}
