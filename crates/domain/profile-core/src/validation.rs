use std::sync::OnceLock;

use regex::Regex;

use crate::ProfileField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{msg}", msg = profile_config::MSG_REQUIRED)]
    Required,
    #[error("{msg}", msg = profile_config::MSG_INVALID_EMAIL)]
    InvalidEmail,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(profile_config::EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex")
    })
}

/// Runs the rule for `field` against a raw input value.
pub fn validate(field: ProfileField, value: &str) -> Result<(), ValidationError> {
    match field {
        ProfileField::Email => {
            if value.is_empty() {
                Err(ValidationError::Required)
            } else if !email_re().is_match(value) {
                Err(ValidationError::InvalidEmail)
            } else {
                Ok(())
            }
        }
        ProfileField::FirstName | ProfileField::LastName => {
            if value.trim().is_empty() {
                Err(ValidationError::Required)
            } else {
                Ok(())
            }
        }
    }
}
