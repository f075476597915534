//! Length section - recommends longer passwords.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::denylist::Denylist;

/// Passwords shorter than this get a length recommendation.
pub const RECOMMENDED_LENGTH: usize = 12;

/// Checks the password against the recommended length, counted in
/// characters rather than bytes.
pub fn length_section(password: &SecretString, _denylist: &Denylist) -> SectionResult {
    if password.expose_secret().chars().count() < RECOMMENDED_LENGTH {
        return Some(format!(
            "Increase password length to at least {}–16 characters.",
            RECOMMENDED_LENGTH
        ));
    }
    None
}
