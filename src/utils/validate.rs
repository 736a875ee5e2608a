//! Client-side form rules: required, email pattern, password length and
//! confirmation. These never reach the network.

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

/// Same shape the original form rules accept: local@domain.tld.
pub fn email(value: &str) -> Result<(), String> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err("Invalid email address".to_string())
    }
}

pub fn password(value: &str) -> Result<(), String> {
    if value.len() < MIN_PASSWORD_LEN {
        Err(format!("Password must be at least {} characters", MIN_PASSWORD_LEN))
    } else {
        Ok(())
    }
}

pub fn passwords_match(password: &str, confirmation: &str) -> Result<(), String> {
    if password == confirmation {
        Ok(())
    } else {
        Err("Passwords do not match".to_string())
    }
}

pub fn non_negative_age(value: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| "Age cannot be negative".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_input() {
        assert!(required("  ", "Email").is_err());
        assert!(required("x", "Email").is_ok());
    }

    #[test]
    fn email_pattern_needs_local_and_dotted_domain() {
        assert!(email("jane@example.com").is_ok());
        assert!(email("jane@example").is_err());
        assert!(email("@example.com").is_err());
        assert!(email("no-at-sign").is_err());
    }

    #[test]
    fn password_enforces_min_length_and_match() {
        assert!(password("short").is_err());
        assert!(password("longenough").is_ok());
        assert!(passwords_match("abc123", "abc123").is_ok());
        assert!(passwords_match("abc123", "abc124").is_err());
    }

    #[test]
    fn age_must_parse_as_unsigned() {
        assert_eq!(non_negative_age("3").unwrap(), 3);
        assert!(non_negative_age("-1").is_err());
        assert!(non_negative_age("three").is_err());
    }
}
