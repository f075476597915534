//! Improvement advisor sections
//!
//! Each section checks one weakness and, when present, returns the advice
//! that fixes it.

mod common;
mod length;
mod variety;

use crate::denylist::Denylist;
use secrecy::SecretString;

pub use common::common_password_section;
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section functions.
/// - `Some(advice)` - Weakness found
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// Signature shared by all sections.
pub type Section = fn(&SecretString, &Denylist) -> SectionResult;
