use std::sync::LazyLock;

use regex::Regex;

// local@domain.tld with no whitespace and a single @
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// banners auto-dismiss after this long
pub const STATUS_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Success,
    Error,
}

pub fn validate_name(value: &str) -> Option<&'static str> {
    (value.trim().len() < 2).then_some("Name must be at least 2 characters")
}

pub fn validate_email(value: &str) -> Option<&'static str> {
    (!EMAIL_PATTERN.is_match(value)).then_some("Please enter a valid email address")
}

pub fn validate_city(value: &str) -> Option<&'static str> {
    (value.trim().len() < 2).then_some("City is required")
}

pub fn validate_mobile(value: &str) -> Option<&'static str> {
    let ten_digits = value.len() == 10 && value.bytes().all(|byte| byte.is_ascii_digit());
    (!ten_digits).then_some("Mobile number must be exactly 10 digits")
}

pub fn validate_message(value: &str) -> Option<&'static str> {
    (value.trim().len() < 10).then_some("Message must be at least 10 characters")
}

// the submit button stays disabled until this holds
pub fn form_is_valid(name: &str, email: &str, city: &str, mobile: &str, message: &str) -> bool {
    let filled =
        [name, email, city, mobile, message].iter().all(|value| !value.trim().is_empty());

    filled
        && validate_name(name).is_none()
        && validate_email(email).is_none()
        && validate_city(city).is_none()
        && validate_mobile(mobile).is_none()
        && validate_message(message).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_needs_exactly_ten_digits() {
        assert_eq!(validate_mobile("8719824566"), None);

        assert!(validate_mobile("871982456").is_some());
        assert!(validate_mobile("87198245667").is_some());
        assert!(validate_mobile("871982456a").is_some());
        assert!(validate_mobile("87198 4566").is_some());
        assert!(validate_mobile("").is_some());
    }

    #[test]
    fn email_needs_local_domain_and_tld() {
        assert_eq!(validate_email("a@b.co"), None);
        assert_eq!(validate_email("sjpolyzen@gmail.com"), None);

        assert!(validate_email("a@b").is_some());
        assert!(validate_email("@b.co").is_some());
        assert!(validate_email("a@.co").is_some());
        assert!(validate_email("a b@c.d").is_some());
        assert!(validate_email("a@b@c.d").is_some());
        assert!(validate_email("").is_some());
    }

    #[test]
    fn short_fields_are_rejected_after_trimming() {
        assert!(validate_name("A").is_some());
        assert!(validate_name("  A  ").is_some());
        assert_eq!(validate_name("Asha"), None);

        assert!(validate_city("I").is_some());
        assert_eq!(validate_city("Indore"), None);

        assert!(validate_message("too short").is_some());
        assert_eq!(validate_message("long enough message"), None);
    }

    #[test]
    fn banners_dismiss_after_five_seconds() {
        assert_eq!(STATUS_DISMISS_MS, 5_000);
    }

    #[test]
    fn gate_opens_only_when_every_field_passes() {
        assert!(form_is_valid(
            "Asha",
            "asha@example.com",
            "Indore",
            "8719824566",
            "Requesting a quote for 500 kg.",
        ));

        // truncating the mobile by one digit closes the gate
        assert!(!form_is_valid(
            "Asha",
            "asha@example.com",
            "Indore",
            "871982456",
            "Requesting a quote for 500 kg.",
        ));

        // blank fields close the gate even though no rule has run on them
        assert!(!form_is_valid(
            "",
            "asha@example.com",
            "Indore",
            "8719824566",
            "Requesting a quote for 500 kg.",
        ));
    }
}
