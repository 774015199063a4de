use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));

/// Shape check only; credential correctness is the repository's call.
pub fn validate_credentials(email: &str, password: &str) -> bool {
    EMAIL_RE.is_match(email) && password.chars().count() >= 6
}

/// Returns the first problem with a signup payload, if any.
pub fn validate_signup_data(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Option<String> {
    if name.trim().chars().count() < 2 {
        return Some("Name must be at least 2 characters".to_string());
    }
    if !EMAIL_RE.is_match(email) {
        return Some("Please enter a valid email".to_string());
    }
    if password.chars().count() < 6 {
        return Some("Password must be at least 6 characters".to_string());
    }
    if password != confirm_password {
        return Some("Passwords do not match".to_string());
    }
    None
}
