//! Proptest generators for property-based testing.

use proptest::prelude::*;

use mailtype_core::Address;

/// Generate one valid name part: a leading letter, then letters,
/// digits, and internal hyphens, never a trailing hyphen.
pub fn name_part() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z][a-zA-Z0-9]{0,6}(-[a-zA-Z0-9]{1,3}){0,2}")
        .expect("name part regex is valid")
}

/// Generate a valid local part: one to three name parts joined by dots.
pub fn local_part() -> impl Strategy<Value = String> {
    proptest::collection::vec(name_part(), 1..=3).prop_map(|parts| parts.join("."))
}

/// Generate a valid domain part: two to four labels joined by dots.
pub fn domain_part() -> impl Strategy<Value = String> {
    proptest::collection::vec(name_part(), 2..=4).prop_map(|parts| parts.join("."))
}

/// Generate a raw candidate string (possibly mixed-case) that the
/// validator must accept.
pub fn valid_candidate() -> impl Strategy<Value = String> {
    (local_part(), domain_part()).prop_map(|(local, domain)| format!("{local}@{domain}"))
}

/// Generate an already-parsed address.
pub fn address() -> impl Strategy<Value = Address> {
    valid_candidate().prop_map(|raw| {
        Address::parse(&raw).expect("generated candidate must be valid")
    })
}

/// Parameters for a candidate string, split so tests can reach the
/// halves independently.
#[derive(Debug, Clone)]
pub struct CandidateParams {
    pub local: String,
    pub domain: String,
}

impl CandidateParams {
    /// The raw candidate as given to the parser.
    pub fn raw(&self) -> String {
        format!("{}@{}", self.local, self.domain)
    }

    /// The canonical text the parser must produce for this candidate.
    pub fn canonical(&self) -> String {
        self.raw().to_ascii_lowercase()
    }
}

impl Arbitrary for CandidateParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (local_part(), domain_part())
            .prop_map(|(local, domain)| CandidateParams { local, domain })
            .boxed()
    }
}
