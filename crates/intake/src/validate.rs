//! Field validation for the customer form.
//!
//! Rules run in a fixed order and the first failure wins. Nothing here
//! touches the database.

use intake_db::ContactMethod;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Compiled format checks
struct FieldPatterns {
    /// YYYY-MM-DD
    date: Regex,
    /// local@domain.tld
    email: Regex,
    /// 7+ of digits, spaces, + - ( )
    phone: Regex,
}

static PATTERNS: LazyLock<FieldPatterns> = LazyLock::new(|| FieldPatterns {
    date: Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(),
    email: Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap(),
    phone: Regex::new(r"^[0-9+()\-\s]{7,}$").unwrap(),
});

/// The rule a submission broke. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Birthday must be YYYY-MM-DD (e.g., 2001-09-30).")]
    BirthdayFormat,
    #[error("Email format looks invalid.")]
    EmailFormat,
    #[error("Phone should contain digits and ()-+ only (min 7 chars).")]
    PhoneFormat,
    #[error("Choose a preferred contact method.")]
    PreferredContact,
}

/// Check one submission. Every value is trimmed before it is checked;
/// empty optional fields are skipped.
pub fn validate(
    name: &str,
    birthday: &str,
    email: &str,
    phone: &str,
    preferred_contact: &str,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    check_optional(birthday, &PATTERNS.date, ValidationError::BirthdayFormat)?;
    check_optional(email, &PATTERNS.email, ValidationError::EmailFormat)?;
    check_optional(phone, &PATTERNS.phone, ValidationError::PhoneFormat)?;
    parse_contact(preferred_contact)?;
    Ok(())
}

/// Map the dropdown text onto the stored enumeration.
pub fn parse_contact(value: &str) -> Result<ContactMethod, ValidationError> {
    value
        .trim()
        .parse::<ContactMethod>()
        .map_err(|_| ValidationError::PreferredContact)
}

fn check_optional(value: &str, pattern: &Regex, err: ValidationError) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || pattern.is_match(value) {
        Ok(())
    } else {
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(name: &str, birthday: &str, email: &str, phone: &str, contact: &str) -> bool {
        validate(name, birthday, email, phone, contact).is_ok()
    }

    #[test]
    fn test_minimal_valid_submission() {
        assert!(ok("Ada", "", "", "", "Email"));
        assert!(ok("Ada", "", "", "", "Phone"));
        assert!(ok("Ada", "", "", "", "Mail"));
    }

    #[test]
    fn test_fully_populated_submission() {
        assert!(ok("Ada Lovelace", "1985-12-10", "ada@example.com", "555-1234", "Email"));
        assert!(ok("Ada", "2001-09-30", "a.b+c@mail.co.uk", "+1 (555) 123-4567", "Mail"));
    }

    #[test]
    fn test_name_required_wins_over_everything() {
        for name in ["", "   ", "\t\n"] {
            assert_eq!(
                validate(name, "bad", "bad", "x", "Fax"),
                Err(ValidationError::NameRequired)
            );
        }
        assert_eq!(ValidationError::NameRequired.to_string(), "Name is required.");
    }

    #[test]
    fn test_birthday_format() {
        for birthday in ["09/30/2001", "2001-9-30", "20010930", "2001-09-30T00:00", "yyyy-mm-dd"] {
            assert_eq!(
                validate("Ada", birthday, "", "", "Email"),
                Err(ValidationError::BirthdayFormat),
                "{}",
                birthday
            );
        }
        assert!(ValidationError::BirthdayFormat.to_string().contains("2001-09-30"));
    }

    #[test]
    fn test_birthday_is_shape_only() {
        // Calendar validity is not checked, only the digit layout.
        assert!(ok("Ada", "2001-13-45", "", "", "Email"));
    }

    #[test]
    fn test_email_format() {
        for email in ["bob@nodot", "bob.example.com", "bob@@example.com", "bo b@example.com", "@example.com"] {
            assert_eq!(
                validate("Ada", "", email, "", "Email"),
                Err(ValidationError::EmailFormat),
                "{}",
                email
            );
        }
    }

    #[test]
    fn test_phone_format() {
        assert_eq!(validate("Ada", "", "", "555-12", "Email"), Err(ValidationError::PhoneFormat));
        assert_eq!(validate("Ada", "", "", "555-CALL-NOW", "Email"), Err(ValidationError::PhoneFormat));
        assert!(ok("Ada", "", "", "5551234", "Email"));
        assert!(ok("Ada", "", "", "(555) 12", "Email"));
    }

    #[test]
    fn test_preferred_contact_membership() {
        for contact in ["", "email", "Fax", "Emails"] {
            assert_eq!(
                validate("Ada", "", "", "", contact),
                Err(ValidationError::PreferredContact),
                "{}",
                contact
            );
        }
    }

    #[test]
    fn test_first_failure_wins() {
        assert_eq!(
            validate("Ada", "bad", "bad", "bad", "bad"),
            Err(ValidationError::BirthdayFormat)
        );
        assert_eq!(
            validate("Ada", "", "bad", "bad", "bad"),
            Err(ValidationError::EmailFormat)
        );
        assert_eq!(
            validate("Ada", "", "", "bad", "bad"),
            Err(ValidationError::PhoneFormat)
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(ok("  Ada  ", " 1985-12-10 ", " ada@example.com ", " 555-1234 ", " Email "));
    }
}
