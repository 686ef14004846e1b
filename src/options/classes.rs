//! Character-class definitions bound to mask characters.
//!
//! A [`MaskDefinition`] decides which input characters a placeholder
//! position accepts. Validation is expressed as a [`Validator`]:
//! a predicate over a single character, a compiled pattern, or the
//! accept-everything rule. The [`CharClass`] enum is the value side of
//! the options `definitions` map and carries the explicit
//! "never a placeholder" marker alongside real rules.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

/// Mask character bound to the built-in digit class (`[0-9]`).
pub const DIGIT_CLASS_KEY: char = '0';

/// Mask character bound to the built-in alphabetic class (`[a-zA-Z]`).
pub const ALPHA_CLASS_KEY: char = 'A';

static DIGIT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[0-9]$").expect("digit class pattern"));

static ALPHA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-zA-Z]$").expect("alphabetic class pattern"));

// =============================================================================
// Validator - the acceptance rule for one input character
// =============================================================================

/// A validation rule applied to the current input character.
///
/// When the input is exhausted, the current character is the empty
/// character: [`Validator::Any`] accepts it, a predicate rejects it
/// (there is no `char` to pass), and a pattern is tested against the
/// empty string.
#[derive(Clone)]
pub enum Validator {
    /// Accepts every input character, including the exhausted-input
    /// empty character.
    Any,
    /// Accepts the character iff the predicate returns `true`.
    Predicate(Arc<dyn Fn(char) -> bool + Send + Sync>),
    /// Accepts the character iff the pattern matches it as a
    /// one-character string.
    Pattern(Regex),
}

impl Validator {
    /// Wraps a predicate closure.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Compiles `pattern` into a pattern validator.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Whether the current input character is accepted.
    pub(crate) fn accepts(&self, input: Option<char>) -> bool {
        match self {
            Self::Any => true,
            Self::Predicate(predicate) => input.is_some_and(|ch| predicate(ch)),
            Self::Pattern(pattern) => match input {
                Some(ch) => {
                    let mut buf = [0u8; 4];
                    pattern.is_match(ch.encode_utf8(&mut buf))
                }
                None => pattern.is_match(""),
            },
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Pattern(pattern) => f.debug_tuple("Pattern").field(&pattern.as_str()).finish(),
        }
    }
}

// =============================================================================
// MaskDefinition - a named rule keyed by a single mask character
// =============================================================================

/// A character-class definition: the rule a placeholder position uses
/// to validate the input character it consumes.
#[derive(Clone, Debug)]
pub struct MaskDefinition {
    validator: Validator,
}

impl MaskDefinition {
    /// A definition without a validator: every input character is
    /// accepted.
    #[must_use]
    pub fn any() -> Self {
        Self {
            validator: Validator::Any,
        }
    }

    /// A definition using the given validator.
    #[must_use]
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    /// A definition validated by a predicate closure.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Self::new(Validator::predicate(predicate))
    }

    /// A definition validated by a compiled pattern.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(Validator::pattern(pattern)?))
    }

    /// The built-in digit class (`[0-9]`).
    #[must_use]
    pub fn digits() -> Self {
        Self::new(Validator::Pattern(DIGIT_PATTERN.clone()))
    }

    /// The built-in alphabetic class (`[a-zA-Z]`).
    #[must_use]
    pub fn alphabetic() -> Self {
        Self::new(Validator::Pattern(ALPHA_PATTERN.clone()))
    }

    /// Whether the current input character passes this definition.
    pub(crate) fn accepts(&self, input: Option<char>) -> bool {
        self.validator.accepts(input)
    }
}

// =============================================================================
// CharClass - the value side of the definitions map
// =============================================================================

/// An entry in the options `definitions` map.
///
/// A key absent from the map is the third state: swappability then
/// falls back to the bare `[a-zA-Z0-9]` rule with no validation.
#[derive(Clone, Debug)]
pub enum CharClass {
    /// The mask character is never a placeholder: it is always copied
    /// through as a literal and consumes no input.
    Literal,
    /// The mask character is a placeholder validated by this
    /// definition.
    Rule(MaskDefinition),
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::{MaskDefinition, Validator};

    #[test]
    fn any_accepts_everything_including_exhausted_input() {
        assert!(Validator::Any.accepts(Some('x')));
        assert!(Validator::Any.accepts(Some(' ')));
        assert!(Validator::Any.accepts(None));
    }

    #[test]
    fn predicate_rejects_exhausted_input() {
        let validator = Validator::predicate(|ch| ch == 'q');
        assert!(validator.accepts(Some('q')));
        assert!(!validator.accepts(Some('r')));
        assert!(!validator.accepts(None));
    }

    #[test]
    fn pattern_tests_exhausted_input_as_empty_string() {
        let anchored = Validator::pattern("^[0-9]$").unwrap();
        assert!(anchored.accepts(Some('7')));
        assert!(!anchored.accepts(Some('x')));
        assert!(!anchored.accepts(None));

        // A pattern that matches the empty string accepts exhaustion.
        let optional = Validator::pattern("^[0-9]?$").unwrap();
        assert!(optional.accepts(None));
    }

    #[test]
    fn builtin_classes_accept_expected_ranges() {
        let digits = MaskDefinition::digits();
        assert!(digits.accepts(Some('0')));
        assert!(digits.accepts(Some('9')));
        assert!(!digits.accepts(Some('a')));

        let alpha = MaskDefinition::alphabetic();
        assert!(alpha.accepts(Some('a')));
        assert!(alpha.accepts(Some('Z')));
        assert!(!alpha.accepts(Some('5')));
    }

    #[test]
    fn definition_without_validator_accepts_anything() {
        let definition = MaskDefinition::any();
        assert!(definition.accepts(Some('!')));
        assert!(definition.accepts(None));
    }
}
