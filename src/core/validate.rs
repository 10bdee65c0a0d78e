//! Input validation for account and report fields.

use crate::errors::{AppError, AppResult};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$";

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_COMMENT_CHARS: usize = 500;

pub fn validate_email(email: &str) -> AppResult<()> {
    if email.is_empty() {
        return Err(AppError::InvalidEmail("email is required".to_string()));
    }
    let re = Regex::new(EMAIL_PATTERN)
        .map_err(|e| AppError::Other(format!("email pattern: {}", e)))?;
    if !re.is_match(email) {
        return Err(AppError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::InvalidPassword("password is required".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AppError::InvalidPassword(format!(
            "must be at least {} characters",
            MIN_PASSWORD_CHARS
        )));
    }
    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> AppResult<()> {
    if confirmation.is_empty() {
        return Err(AppError::InvalidPassword(
            "password confirmation is required".to_string(),
        ));
    }
    if password != confirmation {
        return Err(AppError::InvalidPassword("passwords do not match".to_string()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::InvalidName("name is required".to_string()));
    }
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(AppError::InvalidName(format!(
            "must be at least {} characters",
            MIN_NAME_CHARS
        )));
    }
    Ok(())
}

/// The same ranges the server enforces, checked before spending a request.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> AppResult<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(AppError::InvalidCoordinates(format!(
            "latitude {} out of range [-90, 90]",
            latitude
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::InvalidCoordinates(format!(
            "longitude {} out of range [-180, 180]",
            longitude
        )));
    }
    Ok(())
}

pub fn validate_comment(comment: &str) -> AppResult<()> {
    let chars = comment.chars().count();
    if chars > MAX_COMMENT_CHARS {
        return Err(AppError::CommentTooLong(chars));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_email() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("a.b+tag@mail.co.uk").is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a b@example.com").is_err());
    }

    #[test]
    fn password_length_rule() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn confirmation_must_match() {
        assert!(validate_password_confirmation("secret1", "secret1").is_ok());
        assert!(validate_password_confirmation("secret1", "secret2").is_err());
        assert!(validate_password_confirmation("secret1", "").is_err());
    }

    #[test]
    fn name_length_rule() {
        assert!(validate_name("A").is_err());
        assert!(validate_name("Al").is_ok());
    }

    #[test]
    fn coordinate_ranges() {
        assert!(validate_coordinates(-23.55, -46.63).is_ok());
        assert!(validate_coordinates(90.0, 180.0).is_ok());
        assert!(validate_coordinates(90.1, 0.0).is_err());
        assert!(validate_coordinates(0.0, -180.1).is_err());
    }

    #[test]
    fn comment_limit_counts_chars_not_bytes() {
        assert!(validate_comment(&"x".repeat(500)).is_ok());
        assert!(validate_comment(&"x".repeat(501)).is_err());
        assert!(validate_comment(&"é".repeat(500)).is_ok());
    }
}
