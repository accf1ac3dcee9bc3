//! Recognizers for the name-part grammar.
//!
//! Three productions, shared by the local and domain validators:
//!
//! ```text
//! NamePart  = Letter+ NameChars
//! NameParts = ( '.' NamePart )*
//! NameChars = ( Letter | Digit | '-' )*   -- no trailing '-'
//! ```
//!
//! Each recognizer takes an immutable byte slice and a start position
//! and returns the position it consumed up to, or a typed failure.
//! There is no shared cursor state: callers compose recognizers by
//! threading positions, and must verify the final position lands
//! exactly on the expected boundary. A recognizer stopping early is the
//! caller's failure to detect, not a success.

/// Grammar failure raised by a recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    /// The first character of a name part was not an ASCII letter.
    ExpectedLetter,
    /// A name part ended in `-`; hyphens must be internal.
    TrailingHyphen,
}

/// Recognize one name part: one or more letters, then name chars.
pub(crate) fn name_part(input: &[u8], pos: usize) -> Result<usize, Violation> {
    if !input.get(pos).is_some_and(u8::is_ascii_alphabetic) {
        return Err(Violation::ExpectedLetter);
    }
    let mut pos = pos + 1;
    while input.get(pos).is_some_and(u8::is_ascii_alphabetic) {
        pos += 1;
    }
    name_chars(input, pos)
}

/// Recognize zero or more `.`-prefixed name part continuations.
///
/// Stops at end of input or at the first non-`.` byte without
/// consuming it.
pub(crate) fn name_parts(input: &[u8], mut pos: usize) -> Result<usize, Violation> {
    while input.get(pos) == Some(&b'.') {
        pos = name_part(input, pos + 1)?;
    }
    Ok(pos)
}

/// Recognize the trailing letter/digit/hyphen run of a name part.
///
/// Enforces the no-trailing-hyphen rule: if the last byte consumed is
/// `-`, the part is invalid regardless of what terminated the run.
pub(crate) fn name_chars(input: &[u8], mut pos: usize) -> Result<usize, Violation> {
    let mut last_was_hyphen = false;
    while let Some(&b) = input.get(pos) {
        if b.is_ascii_alphanumeric() {
            last_was_hyphen = false;
        } else if b == b'-' {
            last_was_hyphen = true;
        } else {
            break;
        }
        pos += 1;
    }
    if last_was_hyphen {
        Err(Violation::TrailingHyphen)
    } else {
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_part_letters_only() {
        assert_eq!(name_part(b"abc", 0), Ok(3));
    }

    #[test]
    fn test_name_part_with_digits_and_hyphens() {
        assert_eq!(name_part(b"a1-b2", 0), Ok(5));
        assert_eq!(name_part(b"ab--cd", 0), Ok(6));
    }

    #[test]
    fn test_name_part_must_start_with_letter() {
        assert_eq!(name_part(b"1ab", 0), Err(Violation::ExpectedLetter));
        assert_eq!(name_part(b"-ab", 0), Err(Violation::ExpectedLetter));
        assert_eq!(name_part(b"", 0), Err(Violation::ExpectedLetter));
    }

    #[test]
    fn test_name_part_rejects_trailing_hyphen() {
        assert_eq!(name_part(b"ab-", 0), Err(Violation::TrailingHyphen));
        // Hyphen before a dot is still the last character of the part.
        assert_eq!(name_part(b"ab-.cd", 0), Err(Violation::TrailingHyphen));
    }

    #[test]
    fn test_name_part_stops_at_non_name_char() {
        // Position lands on the '.', the caller decides what that means.
        assert_eq!(name_part(b"ab.cd", 0), Ok(2));
        assert_eq!(name_part(b"ab@cd", 0), Ok(2));
    }

    #[test]
    fn test_name_part_from_offset() {
        assert_eq!(name_part(b"xx.yy", 3), Ok(5));
    }

    #[test]
    fn test_name_parts_consumes_dot_continuations() {
        assert_eq!(name_parts(b".b.c", 0), Ok(4));
        assert_eq!(name_parts(b".b.c@rest", 0), Ok(4));
    }

    #[test]
    fn test_name_parts_accepts_zero_repetitions() {
        assert_eq!(name_parts(b"", 0), Ok(0));
        assert_eq!(name_parts(b"abc", 0), Ok(0));
    }

    #[test]
    fn test_name_parts_requires_part_after_dot() {
        assert_eq!(name_parts(b".", 0), Err(Violation::ExpectedLetter));
        assert_eq!(name_parts(b".b..c", 0), Err(Violation::ExpectedLetter));
        assert_eq!(name_parts(b".1b", 0), Err(Violation::ExpectedLetter));
    }

    #[test]
    fn test_name_chars_empty_run_is_fine() {
        assert_eq!(name_chars(b"...", 0), Ok(0));
    }

    #[test]
    fn test_name_chars_trailing_hyphen_at_end_of_input() {
        assert_eq!(name_chars(b"1-", 0), Err(Violation::TrailingHyphen));
        assert_eq!(name_chars(b"1-2", 0), Ok(3));
    }
}
