//! Common password section - checks the password against the denylist.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::denylist::Denylist;

pub fn common_password_section(password: &SecretString, denylist: &Denylist) -> SectionResult {
    if denylist.contains(password.expose_secret()) {
        return Some("Avoid common passwords; be unique!".to_string());
    }
    None
}
