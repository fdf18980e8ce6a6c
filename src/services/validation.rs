//! Registration rules per branch

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    config::Branch,
    error::{AppError, AppResult},
    models::user::RegisterRequest,
};

static AARHUS_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern"));
static AARHUS_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\- ]{7,20}$").expect("valid phone pattern"));

static CPH_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@(.+)$").expect("valid email pattern"));
static CPH_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{8,}$").expect("valid phone pattern"));

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 8;

/// Check a registration against the branch rules.
///
/// Stops at the first violated rule. Aarhus reports violations as business
/// rule errors, CPH as invalid input. Username uniqueness is checked by the
/// caller since it needs the persistence service.
pub fn validate_registration(branch: Branch, request: &RegisterRequest) -> AppResult<()> {
    match branch {
        Branch::Aarhus => validate_aarhus(request).map_err(AppError::BusinessRule),
        Branch::Cph => validate_cph(request).map_err(AppError::InvalidInput),
    }
}

fn validate_aarhus(request: &RegisterRequest) -> Result<(), String> {
    if is_blank(&request.username) {
        return Err("Username is required".into());
    }
    if is_blank(&request.password) {
        return Err("Password is required".into());
    }
    if is_blank(&request.email) {
        return Err("Email is required".into());
    }
    if is_blank(&request.full_name) {
        return Err("Full name is required".into());
    }
    if request.username.chars().count() < MIN_USERNAME_LEN {
        return Err(format!("Username must be at least {} characters", MIN_USERNAME_LEN));
    }
    if !AARHUS_EMAIL.is_match(&request.email) {
        return Err("Invalid email format".into());
    }
    if !AARHUS_PHONE.is_match(&request.phone_number) {
        return Err("Invalid phone format".into());
    }

    let password = &request.password;
    if password.chars().count() < MIN_PASSWORD_LEN
        || !password.chars().any(|c| c.is_ascii_uppercase())
        || !password.chars().any(|c| c.is_ascii_digit())
    {
        return Err("Password must be at least 8 characters and contain an uppercase and a digit.".into());
    }

    if let Some(confirm) = &request.confirm_password {
        if confirm != password {
            return Err("Passwords do not match".into());
        }
    }

    Ok(())
}

fn validate_cph(request: &RegisterRequest) -> Result<(), String> {
    if is_blank(&request.full_name) {
        return Err("Full name cannot be empty".into());
    }
    if request.full_name.chars().count() < 2 {
        return Err("Full name must be at least 2 characters".into());
    }

    if is_blank(&request.email) {
        return Err("Email cannot be empty".into());
    }
    if !CPH_EMAIL.is_match(&request.email) {
        return Err("Invalid email format".into());
    }

    if is_blank(&request.phone_number) {
        return Err("Phone number cannot be empty".into());
    }
    if !CPH_PHONE.is_match(&request.phone_number) {
        return Err("Phone number must contain at least 8 digits".into());
    }

    if is_blank(&request.username) {
        return Err("Username cannot be empty".into());
    }
    if request.username.chars().count() < MIN_USERNAME_LEN {
        return Err(format!("Username must be at least {} characters", MIN_USERNAME_LEN));
    }

    if is_blank(&request.password) {
        return Err("Password cannot be empty".into());
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {} characters", MIN_PASSWORD_LEN));
    }

    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            full_name: "Anna Jensen".into(),
            email: "anna@example.dk".into(),
            phone_number: "12345678".into(),
            username: "anna".into(),
            password: "Secret123".into(),
            confirm_password: Some("Secret123".into()),
        }
    }

    #[test]
    fn test_valid_request_passes_both_branches() {
        assert!(validate_registration(Branch::Aarhus, &valid_request()).is_ok());
        assert!(validate_registration(Branch::Cph, &valid_request()).is_ok());
    }

    #[test]
    fn test_error_kind_depends_on_branch() {
        let request = RegisterRequest {
            email: "not-an-email".into(),
            ..valid_request()
        };
        assert!(matches!(
            validate_registration(Branch::Aarhus, &request),
            Err(AppError::BusinessRule(msg)) if msg == "Invalid email format"
        ));
        assert!(matches!(
            validate_registration(Branch::Cph, &request),
            Err(AppError::InvalidInput(msg)) if msg == "Invalid email format"
        ));
    }

    #[test]
    fn test_aarhus_email_requires_tld() {
        let request = RegisterRequest {
            email: "anna@localhost".into(),
            ..valid_request()
        };
        assert!(validate_registration(Branch::Aarhus, &request).is_err());
        assert!(validate_registration(Branch::Cph, &request).is_ok());
    }

    #[test]
    fn test_aarhus_password_rules() {
        for password in ["Secret1", "secret123", "SecretAbc"] {
            let request = RegisterRequest {
                password: password.into(),
                confirm_password: None,
                ..valid_request()
            };
            assert!(
                validate_registration(Branch::Aarhus, &request).is_err(),
                "{} should be rejected",
                password
            );
        }

        let request = RegisterRequest {
            password: "Abcdefg1".into(),
            confirm_password: None,
            ..valid_request()
        };
        assert!(validate_registration(Branch::Aarhus, &request).is_ok());
    }

    #[test]
    fn test_aarhus_confirm_password_must_match() {
        let request = RegisterRequest {
            confirm_password: Some("Secret124".into()),
            ..valid_request()
        };
        assert!(matches!(
            validate_registration(Branch::Aarhus, &request),
            Err(AppError::BusinessRule(msg)) if msg == "Passwords do not match"
        ));
    }

    #[test]
    fn test_cph_password_only_needs_length() {
        let request = RegisterRequest {
            password: "abcdefgh".into(),
            ..valid_request()
        };
        assert!(validate_registration(Branch::Cph, &request).is_ok());

        let request = RegisterRequest {
            password: "abcdefg".into(),
            ..valid_request()
        };
        assert!(validate_registration(Branch::Cph, &request).is_err());
    }

    #[test]
    fn test_phone_boundaries() {
        let with_phone = |phone: &str| RegisterRequest {
            phone_number: phone.into(),
            ..valid_request()
        };

        assert!(validate_registration(Branch::Cph, &with_phone("1234567")).is_err());
        assert!(validate_registration(Branch::Cph, &with_phone("12345678")).is_ok());
        assert!(validate_registration(Branch::Cph, &with_phone("+4512345678")).is_err());

        assert!(validate_registration(Branch::Aarhus, &with_phone("123456")).is_err());
        assert!(validate_registration(Branch::Aarhus, &with_phone("1234567")).is_ok());
        assert!(validate_registration(Branch::Aarhus, &with_phone("+45 12-34-56-78")).is_ok());
    }

    #[test]
    fn test_short_names() {
        let request = RegisterRequest {
            full_name: "A".into(),
            ..valid_request()
        };
        assert!(validate_registration(Branch::Cph, &request).is_err());
        assert!(validate_registration(Branch::Aarhus, &request).is_ok());

        let request = RegisterRequest {
            username: "ab".into(),
            ..valid_request()
        };
        assert!(validate_registration(Branch::Cph, &request).is_err());
        assert!(validate_registration(Branch::Aarhus, &request).is_err());
    }
}
