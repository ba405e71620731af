//! Handle sanitising for usernames and email local parts.
//!
//! Names are folded into handles by lowercasing and keeping only ASCII
//! letters and digits, so `O'Keefe` becomes `okeefe`.
//!
//! # Handle rules
//!
//! - Minimum length: 1 character
//! - Maximum length: 64 characters (the RFC 5321 local-part limit)
//! - Allowed characters: lowercase ASCII letters, digits, `.`
//! - Must not start or end with `.`

/// Maximum allowed length for a handle.
pub const HANDLE_MAX: usize = 64;

/// Returns `true` if `handle` satisfies the handle rules.
///
/// # Examples
///
/// ```
/// use profile_synth::is_valid_handle;
///
/// assert!(is_valid_handle("lovelace.ada"));
/// assert!(is_valid_handle("ada42"));
/// assert!(!is_valid_handle(".ada"));       // Leading dot
/// assert!(!is_valid_handle("Ada"));        // Uppercase
/// assert!(!is_valid_handle("o'keefe"));    // Invalid character
/// ```
#[must_use]
pub fn is_valid_handle(handle: &str) -> bool {
    let length = handle.chars().count();
    if !(1..=HANDLE_MAX).contains(&length) {
        return false;
    }
    if handle.starts_with('.') || handle.ends_with('.') {
        return false;
    }
    handle.chars().all(|c| is_handle_char(c) || c == '.')
}

const fn is_handle_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Folds a name fragment into handle characters.
///
/// Does not enforce length; an input with no ASCII alphanumerics folds to
/// an empty string.
#[must_use]
pub(crate) fn sanitize_handle(fragment: &str) -> String {
    fragment
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| is_handle_char(*c))
        .collect()
}

/// Joins sanitised parts with `.` and truncates to [`HANDLE_MAX`].
///
/// Empty parts are skipped so no leading, trailing or doubled dots appear.
#[must_use]
pub(crate) fn join_handle(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .map(|part| sanitize_handle(part))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".");
    truncate_handle(&joined)
}

/// Cuts a handle to [`HANDLE_MAX`] characters without leaving a trailing `.`.
#[must_use]
pub(crate) fn truncate_handle(handle: &str) -> String {
    let truncated: String = handle.chars().take(HANDLE_MAX).collect();
    truncated.trim_end_matches('.').to_owned()
}
