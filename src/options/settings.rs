//! Masking options: defaults, builders, and merging.
//!
//! [`MaskingOptions`] is the effective configuration consumed by the
//! engine. `MaskingOptions::default()` clones a process-wide immutable
//! default value constructed once; builder methods override individual
//! fields, and [`MaskingOptions::merge`] layers one options value over
//! another with key-by-key merging of the `definitions` map.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::classes::{ALPHA_CLASS_KEY, CharClass, DIGIT_CLASS_KEY, MaskDefinition};

/// Mask traversal direction.
///
/// The input is always consumed left-to-right from its own start; the
/// direction only flips the order in which mask positions are visited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Visit mask positions left to right.
    #[default]
    Ltr,
    /// Visit mask positions right to left.
    Rtl,
}

static DEFAULT_OPTIONS: Lazy<MaskingOptions> = Lazy::new(|| MaskingOptions {
    definitions: BTreeMap::from([
        (DIGIT_CLASS_KEY, CharClass::Rule(MaskDefinition::digits())),
        (ALPHA_CLASS_KEY, CharClass::Rule(MaskDefinition::alphabetic())),
    ]),
    direction: Direction::Ltr,
    invalid_char_placeholder: None,
    placeholder: None,
    partial_output: false,
    autocapitalize: false,
});

/// Configuration for a masking call.
#[derive(Clone, Debug)]
pub struct MaskingOptions {
    /// Character-class definitions keyed by mask character.
    pub(crate) definitions: BTreeMap<char, CharClass>,
    pub(crate) direction: Direction,
    pub(crate) invalid_char_placeholder: Option<char>,
    pub(crate) placeholder: Option<char>,
    pub(crate) partial_output: bool,
    pub(crate) autocapitalize: bool,
}

impl MaskingOptions {
    /// Sets the mask traversal direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the character emitted for in-range input characters that
    /// fail validation. Unset by default: failed positions are left
    /// unfilled.
    #[must_use]
    pub fn with_invalid_char_placeholder(mut self, placeholder: char) -> Self {
        self.invalid_char_placeholder = Some(placeholder);
        self
    }

    /// Sets the character used to back-fill unfilled placeholder
    /// positions in full-mask mode. Unset by default: the mask's own
    /// character is used.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Enables or disables partial output. When enabled, unfilled
    /// positions are omitted instead of back-filled.
    #[must_use]
    pub fn with_partial_output(mut self, partial_output: bool) -> Self {
        self.partial_output = partial_output;
        self
    }

    /// Enables or disables case coercion of alphabetic input toward the
    /// case of the mask character.
    #[must_use]
    pub fn with_autocapitalize(mut self, autocapitalize: bool) -> Self {
        self.autocapitalize = autocapitalize;
        self
    }

    /// Binds `key` to a character-class definition. Existing bindings
    /// for other keys (including the built-in classes) are retained.
    #[must_use]
    pub fn with_definition(mut self, key: char, definition: MaskDefinition) -> Self {
        self.definitions.insert(key, CharClass::Rule(definition));
        self
    }

    /// Marks `key` as never a placeholder: every occurrence in the mask
    /// acts as a literal and consumes no input. This is an explicit map
    /// entry, distinct from removing the key.
    #[must_use]
    pub fn with_literal(mut self, key: char) -> Self {
        self.definitions.insert(key, CharClass::Literal);
        self
    }

    /// Removes any binding for `key`. Swappability for that character
    /// falls back to the bare alphanumeric rule.
    #[must_use]
    pub fn without_definition(mut self, key: char) -> Self {
        self.definitions.remove(&key);
        self
    }

    /// Layers `overrides` on top of `self`.
    ///
    /// Scalar fields take the overriding value; `definitions` becomes
    /// the key union of both maps with the overriding entry winning on
    /// collision. A [`CharClass::Literal`] override is a real entry and
    /// survives the merge.
    #[must_use]
    pub fn merge(self, overrides: MaskingOptions) -> Self {
        let MaskingOptions {
            definitions: override_definitions,
            direction,
            invalid_char_placeholder,
            placeholder,
            partial_output,
            autocapitalize,
        } = overrides;

        let mut definitions = self.definitions;
        definitions.extend(override_definitions);
        Self {
            definitions,
            direction,
            invalid_char_placeholder,
            placeholder,
            partial_output,
            autocapitalize,
        }
    }

    pub(crate) fn class_for(&self, mask_char: char) -> Option<&CharClass> {
        self.definitions.get(&mask_char)
    }

    /// Whether `mask_char` is a placeholder position: an explicit rule
    /// binding, or no binding at all for a bare alphanumeric character.
    pub(crate) fn is_swappable(&self, mask_char: char) -> bool {
        match self.class_for(mask_char) {
            Some(CharClass::Literal) => false,
            Some(CharClass::Rule(_)) => true,
            None => mask_char.is_ascii_alphanumeric(),
        }
    }
}

impl Default for MaskingOptions {
    fn default() -> Self {
        DEFAULT_OPTIONS.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, MaskingOptions};
    use crate::options::classes::{ALPHA_CLASS_KEY, CharClass, DIGIT_CLASS_KEY, MaskDefinition};

    #[test]
    fn defaults_match_documented_values() {
        let options = MaskingOptions::default();
        assert_eq!(options.direction, Direction::Ltr);
        assert_eq!(options.invalid_char_placeholder, None);
        assert_eq!(options.placeholder, None);
        assert!(!options.partial_output);
        assert!(!options.autocapitalize);
        assert!(matches!(
            options.class_for(DIGIT_CLASS_KEY),
            Some(CharClass::Rule(_))
        ));
        assert!(matches!(
            options.class_for(ALPHA_CLASS_KEY),
            Some(CharClass::Rule(_))
        ));
    }

    #[test]
    fn swappability_follows_the_tri_state() {
        let options = MaskingOptions::default()
            .with_definition('#', MaskDefinition::digits())
            .with_literal('X');

        // Explicit rule binding.
        assert!(options.is_swappable('#'));
        // Explicit literal marker beats the bare alphanumeric rule.
        assert!(!options.is_swappable('X'));
        // Unbound alphanumerics are implicit placeholders.
        assert!(options.is_swappable('z'));
        assert!(options.is_swappable('5'));
        // Unbound punctuation is literal.
        assert!(!options.is_swappable('-'));
        assert!(!options.is_swappable('('));
    }

    #[test]
    fn merge_unions_definitions_with_override_winning() {
        let base = MaskingOptions::default().with_definition('#', MaskDefinition::digits());
        let overrides = MaskingOptions::default()
            .with_definition('#', MaskDefinition::alphabetic())
            .with_direction(Direction::Rtl);

        let merged = base.merge(overrides);
        assert_eq!(merged.direction, Direction::Rtl);
        // The override's '#' binding wins; it now accepts letters.
        match merged.class_for('#') {
            Some(CharClass::Rule(definition)) => assert!(definition.accepts(Some('q'))),
            other => panic!("expected a rule binding, got {other:?}"),
        }
        // Built-in keys survive the union.
        assert!(merged.class_for(DIGIT_CLASS_KEY).is_some());
    }

    #[test]
    fn merge_retains_literal_marker_entries() {
        let base = MaskingOptions::default().with_definition('#', MaskDefinition::digits());
        let overrides = MaskingOptions::default().with_literal('#');

        let merged = base.merge(overrides);
        assert!(matches!(merged.class_for('#'), Some(CharClass::Literal)));
        assert!(!merged.is_swappable('#'));
    }

    #[test]
    fn without_definition_restores_the_fallback_rule() {
        let options = MaskingOptions::default().without_definition(DIGIT_CLASS_KEY);
        assert!(options.class_for(DIGIT_CLASS_KEY).is_none());
        // '0' is alphanumeric, so it stays swappable, but without
        // validation.
        assert!(options.is_swappable(DIGIT_CLASS_KEY));
    }
}
