//! Improvement advisor - turns weaknesses into ordered advice.

use secrecy::SecretString;

use crate::denylist::Denylist;
use crate::sections::{
    Section, common_password_section, digit_section, length_section, lowercase_section,
    special_section, uppercase_section,
};

pub const WELL_BALANCED: &str = "Great job! Your password is well balanced.";

pub const PASSPHRASE_TIP: &str =
    "Consider using a passphrase (multiple random words) or a password manager.";

/// Lists improvement suggestions for a password.
///
/// Sections run in a fixed order and are independent of each other, so a
/// password can collect several pieces of advice. When none applies the
/// list holds [`WELL_BALANCED`] instead. [`PASSPHRASE_TIP`] always comes last.
pub fn suggest_improvements(password: &SecretString, denylist: &Denylist) -> Vec<String> {
    let sections: [(&str, Section); 6] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("digit", digit_section),
        ("special", special_section),
        ("common", common_password_section),
    ];

    let mut tips = Vec::new();
    for (_section_name, section_fn) in sections {
        if let Some(advice) = section_fn(password, denylist) {
            #[cfg(feature = "tracing")]
            tracing::debug!("advisor section '{}' fired", _section_name);
            tips.push(advice);
        }
    }

    if tips.is_empty() {
        tips.push(WELL_BALANCED.to_string());
    }
    tips.push(PASSPHRASE_TIP.to_string());
    tips
}
