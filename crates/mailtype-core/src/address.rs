//! The validated address value and its parser.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{InvalidAddress, InvalidReason};
use crate::grammar::{self, Violation};
use crate::normalize;
use crate::ordering;

/// Historical per-field length bound, in bytes.
pub const MAX_FIELD_LEN: usize = 128;

/// Maximum length of the canonical `local@domain` text.
pub const MAX_TEXT_LEN: usize = 2 * MAX_FIELD_LEN + 1;

/// Length bounds applied during parsing.
///
/// Inputs exceeding the bound are rejected, never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum bytes allowed in each of the local and domain parts.
    pub max_field_len: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_field_len: MAX_FIELD_LEN,
        }
    }
}

/// A validated, normalized e-mail address.
///
/// Both fields are lowercase ASCII and individually conform to the
/// name-part grammar; the domain holds at least two dot-separated
/// labels. The fields are private: the only way to construct an
/// `Address` is through the validator, so no value can hold
/// un-validated or mixed-case text. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    local: String,
    domain: String,
}

impl Address {
    /// Parse a candidate string with the default limits.
    pub fn parse(raw: &str) -> Result<Self, InvalidAddress> {
        Self::parse_with_limits(raw, ParseLimits::default())
    }

    /// Parse a candidate string.
    ///
    /// The input is case-folded, split on its single `@`, and each half
    /// is run through the name-part grammar, which must consume it
    /// exactly to the end. Any failed sub-check yields [`InvalidAddress`]
    /// carrying the raw input; no partial value is ever returned.
    pub fn parse_with_limits(raw: &str, limits: ParseLimits) -> Result<Self, InvalidAddress> {
        let fail = |reason| InvalidAddress {
            reason,
            raw: raw.to_owned(),
        };

        // 1. Normalize before anything else looks at the bytes.
        let folded = normalize::fold_case(raw);

        // 2. Exactly one '@', neither side empty.
        let (local, domain) = match folded.split_once('@') {
            Some(halves) => halves,
            None => return Err(fail(InvalidReason::SeparatorCount)),
        };
        if domain.contains('@') {
            return Err(fail(InvalidReason::SeparatorCount));
        }
        if local.is_empty() {
            return Err(fail(InvalidReason::EmptyLocal));
        }
        if domain.is_empty() {
            return Err(fail(InvalidReason::EmptyDomain));
        }

        // 3. Local part: one name part plus continuations, to the end.
        check_local(local.as_bytes()).map_err(fail)?;

        // 4. Domain part: at least two labels joined by '.', to the end.
        check_domain(domain.as_bytes()).map_err(fail)?;

        // 5. Length bound per field.
        if local.len() > limits.max_field_len || domain.len() > limits.max_field_len {
            return Err(fail(InvalidReason::FieldTooLong));
        }

        Ok(Self {
            local: local.to_owned(),
            domain: domain.to_owned(),
        })
    }

    /// The part before the `@`, lowercase.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// The part after the `@`, lowercase, at least two labels.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Whether `self` and `other` share a domain, byte-for-byte.
    pub fn same_domain(&self, other: &Address) -> bool {
        ordering::same_domain(self, other)
    }

    /// Position-weighted 32-bit hash of the normalized fields.
    pub fn hash_code(&self) -> u32 {
        ordering::hash_code(self)
    }
}

fn check_local(bytes: &[u8]) -> Result<(), InvalidReason> {
    let pos = grammar::name_part(bytes, 0)
        .and_then(|pos| grammar::name_parts(bytes, pos))
        .map_err(local_reason)?;
    // A partial match that stops early is a failure, not a success.
    if pos != bytes.len() {
        return Err(InvalidReason::LocalGrammar);
    }
    Ok(())
}

fn check_domain(bytes: &[u8]) -> Result<(), InvalidReason> {
    let pos = grammar::name_part(bytes, 0).map_err(domain_reason)?;
    // The first label must be followed by a literal dot: a domain of a
    // single label is rejected here, not by the grammar.
    if bytes.get(pos) != Some(&b'.') {
        return Err(InvalidReason::DomainGrammar);
    }
    let pos = grammar::name_part(bytes, pos + 1)
        .and_then(|pos| grammar::name_parts(bytes, pos))
        .map_err(domain_reason)?;
    if pos != bytes.len() {
        return Err(InvalidReason::DomainGrammar);
    }
    Ok(())
}

fn local_reason(v: Violation) -> InvalidReason {
    match v {
        Violation::TrailingHyphen => InvalidReason::TrailingHyphen,
        Violation::ExpectedLetter => InvalidReason::LocalGrammar,
    }
}

fn domain_reason(v: Violation) -> InvalidReason {
    match v {
        Violation::TrailingHyphen => InvalidReason::TrailingHyphen,
        Violation::ExpectedLetter => InvalidReason::DomainGrammar,
    }
}

impl fmt::Display for Address {
    /// Canonical form: `local@domain`, no brackets, no whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

impl FromStr for Address {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        ordering::compare(self, other)
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    /// Deserializes through the validator, so serde input obeys the
    /// same invariant as any other source of addresses.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AddressVisitor;

        impl Visitor<'_> for AddressVisitor {
            type Value = Address;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an email address in local@domain form")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Address, E> {
                Address::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(AddressVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(raw: &str) -> InvalidReason {
        Address::parse(raw).unwrap_err().reason
    }

    #[test]
    fn test_parse_mixed_case() {
        let addr = Address::parse("User@Example.COM").unwrap();
        assert_eq!(addr.local(), "user");
        assert_eq!(addr.domain(), "example.com");
        assert_eq!(addr.to_string(), "user@example.com");
    }

    #[test]
    fn test_parse_dotted_local_with_hyphen() {
        let addr = Address::parse("a.b-c@sub.example.org").unwrap();
        assert_eq!(addr.local(), "a.b-c");
        assert_eq!(addr.domain(), "sub.example.org");
    }

    #[test]
    fn test_parse_many_domain_labels() {
        let addr = Address::parse("a@b.c.d.e").unwrap();
        assert_eq!(addr.domain(), "b.c.d.e");
    }

    #[test]
    fn test_reject_missing_or_multiple_at() {
        assert_eq!(reason_of("nobody"), InvalidReason::SeparatorCount);
        assert_eq!(reason_of("a@@b.com"), InvalidReason::SeparatorCount);
        assert_eq!(reason_of("a@b@c.com"), InvalidReason::SeparatorCount);
        assert_eq!(reason_of(""), InvalidReason::SeparatorCount);
    }

    #[test]
    fn test_reject_empty_sides() {
        assert_eq!(reason_of("a@"), InvalidReason::EmptyDomain);
        assert_eq!(reason_of("@b.com"), InvalidReason::EmptyLocal);
        assert_eq!(reason_of("@"), InvalidReason::EmptyLocal);
    }

    #[test]
    fn test_reject_local_grammar() {
        assert_eq!(reason_of("1a@b.com"), InvalidReason::LocalGrammar);
        assert_eq!(reason_of("a..b@c.com"), InvalidReason::LocalGrammar);
        assert_eq!(reason_of("a.@b.com"), InvalidReason::LocalGrammar);
        assert_eq!(reason_of("a b@c.com"), InvalidReason::LocalGrammar);
    }

    #[test]
    fn test_reject_domain_grammar() {
        assert_eq!(reason_of("a@bcom"), InvalidReason::DomainGrammar);
        assert_eq!(reason_of("a@b."), InvalidReason::DomainGrammar);
        assert_eq!(reason_of("a@.com"), InvalidReason::DomainGrammar);
        assert_eq!(reason_of("a@b.2c"), InvalidReason::DomainGrammar);
        assert_eq!(reason_of("a@b..c"), InvalidReason::DomainGrammar);
    }

    #[test]
    fn test_reject_trailing_hyphen() {
        assert_eq!(reason_of("a-@b.com"), InvalidReason::TrailingHyphen);
        assert_eq!(reason_of("a@b-.com"), InvalidReason::TrailingHyphen);
        assert_eq!(reason_of("a-.b@c.com"), InvalidReason::TrailingHyphen);
        assert_eq!(reason_of("a@b.com-"), InvalidReason::TrailingHyphen);
    }

    #[test]
    fn test_internal_hyphen_accepted() {
        assert!(Address::parse("a-b@c-d.e-f").is_ok());
        assert!(Address::parse("a--b@c.d").is_ok());
    }

    #[test]
    fn test_length_bound_exactly_at_limit() {
        let local = "a".repeat(MAX_FIELD_LEN);
        let domain = format!("{}.{}", "b".repeat(MAX_FIELD_LEN - 2), "c");
        assert_eq!(domain.len(), MAX_FIELD_LEN);

        let addr = Address::parse(&format!("{local}@{domain}")).unwrap();
        assert_eq!(addr.local().len(), MAX_FIELD_LEN);
        assert_eq!(addr.domain().len(), MAX_FIELD_LEN);
        assert!(addr.to_string().len() <= MAX_TEXT_LEN);
    }

    #[test]
    fn test_length_bound_one_over() {
        let local = "a".repeat(MAX_FIELD_LEN + 1);
        assert_eq!(
            reason_of(&format!("{local}@b.c")),
            InvalidReason::FieldTooLong
        );

        let domain = format!("{}.{}", "b".repeat(MAX_FIELD_LEN - 1), "c");
        assert_eq!(domain.len(), MAX_FIELD_LEN + 1);
        assert_eq!(
            reason_of(&format!("a@{domain}")),
            InvalidReason::FieldTooLong
        );
    }

    #[test]
    fn test_custom_limits() {
        let limits = ParseLimits { max_field_len: 4 };
        assert!(Address::parse_with_limits("abcd@ab.c", limits).is_ok());
        let err = Address::parse_with_limits("abcde@ab.c", limits).unwrap_err();
        assert_eq!(err.reason, InvalidReason::FieldTooLong);
    }

    #[test]
    fn test_reparse_of_canonical_form_is_identity() {
        let first = Address::parse("Mixed.Case@Sub.Example.ORG").unwrap();
        let again = Address::parse(&first.to_string()).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_from_str() {
        let addr: Address = "a@b.c".parse().unwrap();
        assert_eq!(addr.to_string(), "a@b.c");
        assert!("a@b".parse::<Address>().is_err());
    }

    #[test]
    fn test_error_preserves_raw_input() {
        let err = Address::parse("Bad@Input").unwrap_err();
        assert_eq!(err.raw, "Bad@Input");
    }

    #[test]
    fn test_serde_roundtrip() {
        let addr = Address::parse("User@Example.COM").unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"user@example.com\"");

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }

    #[test]
    fn test_serde_rejects_invalid_text() {
        assert!(serde_json::from_str::<Address>("\"a@bcom\"").is_err());
        assert!(serde_json::from_str::<Address>("\"a-@b.com\"").is_err());
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert_eq!(reason_of("ü@b.com"), InvalidReason::LocalGrammar);
        assert_eq!(reason_of("a@bü.com"), InvalidReason::DomainGrammar);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_of_format_is_identity(
                local in "[a-zA-Z][a-zA-Z0-9]{0,8}(\\.[a-zA-Z][a-zA-Z0-9]{0,8}){0,2}",
                domain in "[a-zA-Z][a-zA-Z0-9]{0,8}(\\.[a-zA-Z][a-zA-Z0-9]{0,8}){1,3}",
            ) {
                let raw = format!("{local}@{domain}");
                let first = Address::parse(&raw).unwrap();
                let again = Address::parse(&first.to_string()).unwrap();
                prop_assert_eq!(&first, &again);
                prop_assert_eq!(first.to_string(), raw.to_ascii_lowercase());
            }

            #[test]
            fn parse_never_panics(raw in "\\PC{0,40}") {
                let _ = Address::parse(&raw);
            }
        }
    }
}
