//! Golden test vectors shared across crates.
//!
//! Every implementation of the address grammar must agree on these:
//! the same inputs canonicalize to the same text or fail with the same
//! reason.

use mailtype_core::{Address, InvalidReason, MAX_FIELD_LEN};

/// What a vector's input must produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// Parses, and formats to exactly this canonical text.
    Canonical(String),
    /// Rejected with exactly this reason.
    Rejected(InvalidReason),
}

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The raw input handed to the parser.
    pub input: String,
    /// The required outcome.
    pub expected: Expected,
}

fn accepted(name: &'static str, input: impl Into<String>, canonical: &str) -> GoldenVector {
    GoldenVector {
        name,
        input: input.into(),
        expected: Expected::Canonical(canonical.to_owned()),
    }
}

fn rejected(name: &'static str, input: impl Into<String>, reason: InvalidReason) -> GoldenVector {
    GoldenVector {
        name,
        input: input.into(),
        expected: Expected::Rejected(reason),
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    use InvalidReason::*;

    let widest_local = format!("{}@b.c", "a".repeat(MAX_FIELD_LEN));
    let widest_domain = format!("a@{}.c", "b".repeat(MAX_FIELD_LEN - 2));

    vec![
        accepted(
            "mixed case folds to lowercase",
            "User@Example.COM",
            "user@example.com",
        ),
        accepted(
            "dotted local with internal hyphen",
            "a.b-c@sub.example.org",
            "a.b-c@sub.example.org",
        ),
        accepted("minimal valid address", "a@b.c", "a@b.c"),
        accepted(
            "many domain labels",
            "First.Last@a.B.c.D.e",
            "first.last@a.b.c.d.e",
        ),
        accepted(
            "digits and hyphens inside parts",
            "mail2-you@host-1.net",
            "mail2-you@host-1.net",
        ),
        accepted(
            "local exactly at the field bound",
            widest_local.clone(),
            &widest_local,
        ),
        accepted(
            "domain exactly at the field bound",
            widest_domain.clone(),
            &widest_domain,
        ),
        rejected(
            "local one over the field bound",
            format!("{}@b.c", "a".repeat(MAX_FIELD_LEN + 1)),
            FieldTooLong,
        ),
        rejected(
            "domain one over the field bound",
            format!("a@{}.c", "b".repeat(MAX_FIELD_LEN - 1)),
            FieldTooLong,
        ),
        rejected("empty domain", "a@", EmptyDomain),
        rejected("empty local", "@b.com", EmptyLocal),
        rejected("double separator", "a@@b.com", SeparatorCount),
        rejected("no separator", "plainstring", SeparatorCount),
        rejected("trailing hyphen in local part", "a-@b.com", TrailingHyphen),
        rejected("trailing hyphen in domain label", "a@b-.com", TrailingHyphen),
        rejected("domain missing required dot", "a@bcom", DomainGrammar),
        rejected("local part starting with digit", "1a@b.com", LocalGrammar),
        rejected("domain label starting with digit", "a@b.1c", DomainGrammar),
    ]
}

/// Check one vector against the parser, describing any mismatch.
pub fn check_vector(vector: &GoldenVector) -> Result<(), String> {
    let outcome = Address::parse(&vector.input);
    match (&vector.expected, outcome) {
        (Expected::Canonical(want), Ok(addr)) => {
            let got = addr.to_string();
            if got == *want {
                Ok(())
            } else {
                Err(format!(
                    "{}: canonical mismatch: want {want}, got {got}",
                    vector.name
                ))
            }
        }
        (Expected::Rejected(want), Err(err)) => {
            if err.reason == *want {
                Ok(())
            } else {
                Err(format!(
                    "{}: reason mismatch: want {want:?}, got {:?}",
                    vector.name, err.reason
                ))
            }
        }
        (Expected::Canonical(_), Err(err)) => {
            Err(format!("{}: unexpected rejection: {err}", vector.name))
        }
        (Expected::Rejected(_), Ok(addr)) => {
            Err(format!("{}: unexpected acceptance: {addr}", vector.name))
        }
    }
}
