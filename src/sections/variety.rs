//! Character variety sections - one per missing character class.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::denylist::Denylist;

fn missing(password: &SecretString, class: fn(char) -> bool, advice: &str) -> SectionResult {
    if password.expose_secret().chars().any(class) {
        None
    } else {
        Some(advice.to_string())
    }
}

pub fn uppercase_section(password: &SecretString, _denylist: &Denylist) -> SectionResult {
    missing(password, char::is_uppercase, "Add uppercase letters (A–Z).")
}

pub fn lowercase_section(password: &SecretString, _denylist: &Denylist) -> SectionResult {
    missing(password, char::is_lowercase, "Add lowercase letters (a–z).")
}

pub fn digit_section(password: &SecretString, _denylist: &Denylist) -> SectionResult {
    missing(password, |c| c.is_ascii_digit(), "Include numbers (0–9).")
}

/// Anything that is neither a letter nor a number counts as special.
pub fn special_section(password: &SecretString, _denylist: &Denylist) -> SectionResult {
    missing(
        password,
        |c| !c.is_alphanumeric(),
        "Add special characters (!, @, #, $, %, &, *).",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_missing_uppercase() {
        let result = uppercase_section(&pwd("lowercase123!"), &Denylist::empty());
        assert!(result.is_some_and(|r| r.contains("uppercase")));
    }

    #[test]
    fn test_variety_missing_lowercase() {
        let result = lowercase_section(&pwd("UPPERCASE123!"), &Denylist::empty());
        assert!(result.is_some_and(|r| r.contains("lowercase")));
    }

    #[test]
    fn test_variety_missing_numbers() {
        let result = digit_section(&pwd("NoNumbers!"), &Denylist::empty());
        assert!(result.is_some_and(|r| r.contains("numbers")));
    }

    #[test]
    fn test_variety_missing_special() {
        let result = special_section(&pwd("NoSpecial123"), &Denylist::empty());
        assert!(result.is_some_and(|r| r.contains("special")));
    }

    #[test]
    fn test_variety_all_categories() {
        let p = pwd("HasAll123!@#");
        let denylist = Denylist::empty();
        assert_eq!(uppercase_section(&p, &denylist), None);
        assert_eq!(lowercase_section(&p, &denylist), None);
        assert_eq!(digit_section(&p, &denylist), None);
        assert_eq!(special_section(&p, &denylist), None);
    }

    #[test]
    fn test_variety_digits_are_ascii_only() {
        let result = digit_section(&pwd("Fraction½Roman Ⅻ"), &Denylist::empty());
        assert!(result.is_some_and(|r| r.contains("numbers")));
        assert_eq!(digit_section(&pwd("Fraction½7"), &Denylist::empty()), None);
    }

    #[test]
    fn test_variety_space_is_special() {
        assert_eq!(special_section(&pwd("two words"), &Denylist::empty()), None);
    }
}
