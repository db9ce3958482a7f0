use super::types::{AuthForm, AuthMode};
use crate::services::errors::ValidationError;

pub const MIN_REGISTER_PASSWORD_LEN: usize = 6;

/// Last-name placeholder for single-word names.
pub const DEFAULT_LAST_NAME: &str = "User";

/// Checks run in a fixed order; the first failure wins.
pub fn validate_auth_form(mode: AuthMode, form: &AuthForm) -> Result<(), ValidationError> {
    if form.email.is_empty() || form.password.is_empty() {
        return Err(ValidationError::CredentialsRequired);
    }

    if mode == AuthMode::Register {
        if form.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if form.password != form.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if form.password.chars().count() < MIN_REGISTER_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_REGISTER_PASSWORD_LEN,
            });
        }
    }

    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Basic `local@domain.tld` shape: one `@`, no whitespace, non-empty local
/// part, and a dot inside the domain with characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

/// Splits on the first space; everything after it is the last name.
pub fn split_full_name(name: &str) -> (String, String) {
    let trimmed = name.trim();
    let (first, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    let first = if first.is_empty() { name } else { first };
    let last = if rest.is_empty() { DEFAULT_LAST_NAME } else { rest };
    (first.to_string(), last.to_string())
}
