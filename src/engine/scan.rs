//! The core masking loop.
//!
//! A single pass over the mask positions classifies each position as a
//! placeholder or a literal, consumes input for placeholders, and
//! records one [`Cell`] per position. The pass never short-circuits:
//! a mismatch flips the aggregated success flag and processing
//! continues through the entire mask.

use crate::options::{CharClass, Direction, MaskingOptions};

/// One slot of the working output buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// No input reached this position; eligible for back-fill.
    Unfilled,
    /// A validator-free placeholder matched the exhausted-input empty
    /// character. Renders as nothing and is never back-filled.
    Blank,
    /// A resolved character.
    Filled(char),
}

/// Walks the mask and produces the aggregated success flag plus one
/// cell per mask position, in mask order.
pub(crate) fn scan(input: &[char], mask: &[char], options: &MaskingOptions) -> (bool, Vec<Cell>) {
    let mut success = true;
    let mut cursor = 0usize;
    let mut cells = vec![Cell::Unfilled; mask.len()];

    for visit in 0..mask.len() {
        let index = match options.direction {
            Direction::Ltr => visit,
            Direction::Rtl => mask.len() - 1 - visit,
        };
        let mask_char = mask[index];

        if options.is_swappable(mask_char) {
            let current = input.get(cursor).copied();
            cursor += 1;

            let (matched, produced) = match_placeholder(current, mask_char, options);
            cells[index] = if matched {
                produced.map_or(Cell::Blank, Cell::Filled)
            } else if cursor <= input.len() {
                // Input was present but invalid; stamp the configured
                // placeholder if there is one.
                options
                    .invalid_char_placeholder
                    .map_or(Cell::Unfilled, Cell::Filled)
            } else {
                Cell::Unfilled
            };
            success &= matched;
        } else {
            // Literals do not consume input but stop rendering once the
            // input is exhausted.
            cells[index] = if cursor <= input.len() {
                Cell::Filled(mask_char)
            } else {
                Cell::Unfilled
            };
        }
    }

    (success, cells)
}

/// Validates (and possibly case-adjusts) the current input character
/// against the class bound to `mask_char`.
fn match_placeholder(
    current: Option<char>,
    mask_char: char,
    options: &MaskingOptions,
) -> (bool, Option<char>) {
    // Literal classes never reach this branch; an unbound alphanumeric
    // placeholder has no definition and accepts anything.
    let definition = match options.class_for(mask_char) {
        Some(CharClass::Rule(definition)) => Some(definition),
        Some(CharClass::Literal) | None => None,
    };

    let current = if options.autocapitalize {
        current.map(|ch| adjust_capitalization(mask_char, ch))
    } else {
        current
    };

    let matched = definition.is_none_or(|definition| definition.accepts(current));
    (matched, current)
}

/// Coerces an alphabetic input character toward the case of the mask
/// character. Inspects only the two characters in isolation.
fn adjust_capitalization(mask_char: char, input_char: char) -> char {
    if !input_char.is_alphabetic() {
        return input_char;
    }
    if is_upper_like(mask_char) && !is_upper_like(input_char) {
        to_simple_upper(input_char)
    } else if !is_upper_like(mask_char) && is_upper_like(input_char) {
        to_simple_lower(input_char)
    } else {
        input_char
    }
}

/// Caseless characters (digits, punctuation) count as uppercase, so a
/// mask character like `#` pulls alphabetic input toward uppercase.
fn is_upper_like(ch: char) -> bool {
    !ch.is_lowercase()
}

/// Simple one-to-one case mapping; characters whose uppercase form
/// expands to multiple scalars are left unchanged.
fn to_simple_upper(ch: char) -> char {
    let mut mapped = ch.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => ch,
    }
}

fn to_simple_lower(ch: char) -> char {
    let mut mapped = ch.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(lower), None) => lower,
        _ => ch,
    }
}
