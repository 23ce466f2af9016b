//! Phone number normalization for Indian mobile numbers
//!
//! Best-effort reformatting into the `+91XXXXXXXXXX` canonical form.
//! The normalizer never rejects input; callers judge validity with
//! [`is_canonical`].

/// Canonical length of a normalized number: `+91` plus ten digits.
pub const CANONICAL_LEN: usize = 13;

/// Country prefix for canonical numbers.
pub const COUNTRY_PREFIX: &str = "+91";

/// Normalize a raw user-typed phone string.
///
/// Keeps digits and `+`, drops a single leading `0` (trunk prefix), and
/// ensures a `+91` country prefix. Numbers already starting with `+` pass
/// through unchanged; a bare `91...` gets a `+` prepended.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut number: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if number.starts_with('0') {
        number.remove(0);
    }

    if number.starts_with('+') {
        number
    } else if number.starts_with("91") {
        format!("+{number}")
    } else {
        format!("{COUNTRY_PREFIX}{number}")
    }
}

/// Whether a normalized number is in canonical form: `+91` followed by
/// exactly ten digits.
pub fn is_canonical(phone: &str) -> bool {
    phone.len() == CANONICAL_LEN
        && phone.starts_with(COUNTRY_PREFIX)
        && phone[COUNTRY_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_digit())
}
