//! Form input validation.
//!
//! Validators return a user-facing message when the input is invalid and
//! `None` when it is fine; they never error. Limits follow the shipped
//! product (name 2..=50 chars, password at least 6).

/// Maximum accepted name length.
pub const MAX_NAME_LENGTH: usize = 50;
/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub fn validate_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Name is required".to_string());
    }
    if trimmed.chars().count() < 2 {
        return Some("Name is too short".to_string());
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Some("Name is too long".to_string());
    }
    None
}

pub fn validate_email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("E-mail is required".to_string());
    }
    // One '@' with something on both sides and a dot in the domain.
    let mut parts = trimmed.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let ok = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !trimmed.chars().any(char::is_whitespace);
    if !ok {
        return Some("Invalid e-mail".to_string());
    }
    None
}

pub fn validate_password(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".to_string());
    }
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Some(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }
    None
}

pub fn validate_required(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("This field is required".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_limits() {
        assert!(validate_name("").is_some());
        assert!(validate_name("  ").is_some());
        assert!(validate_name("A").is_some());
        assert!(validate_name(&"a".repeat(51)).is_some());
        assert!(validate_name("Ana").is_none());
        assert!(validate_name("  Ana  ").is_none());
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("ana@example.com").is_none());
        assert!(validate_email("").is_some());
        assert!(validate_email("ana").is_some());
        assert!(validate_email("ana@").is_some());
        assert!(validate_email("@example.com").is_some());
        assert!(validate_email("ana@example").is_some());
        assert!(validate_email("ana@b@example.com").is_some());
        assert!(validate_email("a na@example.com").is_some());
    }

    #[test]
    fn password_minimum() {
        assert!(validate_password("").is_some());
        assert!(validate_password("12345").is_some());
        assert!(validate_password("123456").is_none());
    }

    #[test]
    fn required_rejects_blank() {
        assert!(validate_required("   ").is_some());
        assert!(validate_required("x").is_none());
    }
}
