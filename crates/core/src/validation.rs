//! Field format rules shared by the service and the client form.

use std::sync::LazyLock;

/// Loose `<non-space>@<non-space>.<non-space>` address check.
static EMAIL_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));

/// Optional leading `+`, then 6 to 15 digits.
static MOBILE_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\+?[0-9]{6,15}$").expect("valid regex"));

pub const MSG_ALL_FIELDS_REQUIRED: &str = "All fields required";
pub const MSG_INVALID_MOBILE: &str = "Mobile number must contain only digits";

/// Returns `true` if `email` contains something shaped like `a@b.c`.
///
/// The match is unanchored, so surrounding text is tolerated.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns `true` if `mobn` looks like a phone number.
pub fn is_valid_mobile_number(mobn: &str) -> bool {
    MOBILE_RE.is_match(mobn)
}

/// Coerce free-form salary text to a number.
///
/// Blank or non-numeric text becomes `0.0`, as do non-finite values such as
/// `"NaN"` or `"inf"` which `f64::from_str` would otherwise accept.
pub fn coerce_salary(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
