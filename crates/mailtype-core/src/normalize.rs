//! Case folding applied before validation.

/// Lowercase every ASCII letter; pass all other bytes through unchanged.
///
/// Digits, `-`, `.` and `@` are untouched, so total length is
/// preserved. Never fails: empty or already-lowercase input comes back
/// as-is and is judged downstream by the validator, not here.
pub fn fold_case(input: &str) -> String {
    input.to_ascii_lowercase()
}
