use once_cell::sync::Lazy;
use regex::Regex;

/// `local-part@domain.tld`, where the final label is at least two letters.
/// Anchored at both ends, so surrounding whitespace is not tolerated.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

/// Classify `candidate` as a syntactically well-formed email address. The
/// candidate is lower-cased before matching, and is otherwise taken as is
/// (no trimming).
pub fn is_valid_email(candidate: &str) -> bool { EMAIL_PATTERN.is_match(&candidate.to_lowercase()) }

#[derive(thiserror::Error, Debug)]
#[error("Invalid email: {0:?}")]
pub struct ValidationError(String);

#[derive(Debug, Clone, PartialEq, Eq)]
/// An address that passed `is_valid_email`. The address is kept exactly as
/// typed; lower-casing only applies to the check.
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(email: String) -> Result<Self, ValidationError> {
        match is_valid_email(&email) {
            true => Ok(Self(email)),
            false => Err(ValidationError(email)),
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str { &self.0 }
}
