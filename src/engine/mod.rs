//! The masking pipeline: request validation, the scan loop, and output
//! assembly.
//!
//! - **`scan`**: the single-pass core loop over mask positions.
//! - **`assemble`**: back-fill and final rendering of the cell buffer.
//!
//! The public entry point is [`mask_text`], which takes a
//! [`MaskRequest`] and returns a [`MaskingResult`]. Nothing here holds
//! state across calls; the whole pipeline is a pure function of its
//! inputs.

mod assemble;
pub(crate) mod scan;

use std::borrow::Cow;

use crate::error::MaskError;
use crate::options::MaskingOptions;

// =============================================================================
// MaskRequest - parameters for a masking call
// =============================================================================

/// Parameters for [`mask_text`].
///
/// `text` and `mask` are optional so that an absent value can be told
/// apart from an empty one: an empty `text` is valid input, an absent
/// one is rejected. The `Default` value is the all-absent request.
#[derive(Clone, Debug, Default)]
pub struct MaskRequest<'a> {
    /// Raw input text. `None` is rejected; an empty string is valid.
    pub text: Option<Cow<'a, str>>,
    /// The mask template. Must be present and non-empty.
    pub mask: Option<Cow<'a, str>>,
    /// Masking options; `None` uses the defaults.
    pub options: Option<MaskingOptions>,
}

impl<'a> MaskRequest<'a> {
    /// Builds a request from `text` and `mask` with default options.
    pub fn new(text: impl Into<Cow<'a, str>>, mask: impl Into<Cow<'a, str>>) -> Self {
        Self {
            text: Some(text.into()),
            mask: Some(mask.into()),
            options: None,
        }
    }

    /// Uses the given options for this request.
    #[must_use]
    pub fn with_options(mut self, options: MaskingOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Rejects malformed requests before any masking occurs.
    fn validate(&self) -> Result<(&str, &str), MaskError> {
        let text = self.text.as_deref().ok_or(MaskError::TextRequired)?;
        let mask = self
            .mask
            .as_deref()
            .filter(|mask| !mask.is_empty())
            .ok_or(MaskError::MaskRequired)?;
        Ok((text, mask))
    }
}

// =============================================================================
// MaskingResult - the outcome of a masking call
// =============================================================================

/// Result of a masking call. Immutable once returned.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MaskingResult {
    /// Whether every placeholder position received an input character
    /// that passed its validator.
    pub success: bool,
    /// The mask template, echoed back.
    pub mask: String,
    /// The raw input text, echoed back.
    pub input: String,
    /// The rendered output string.
    pub output: String,
}

// =============================================================================
// mask_text - the entry point
// =============================================================================

/// Masks `text` against a mask template in a single pass.
///
/// Mask characters bound to a character-class definition (and unbound
/// alphanumerics) are placeholders that consume and validate one input
/// character each; everything else is copied through as a literal.
///
/// A position that fails validation does not abort the call: the whole
/// mask is processed and the failure is reported via
/// [`MaskingResult::success`]. Only malformed requests return an error.
///
/// # Errors
///
/// Returns [`MaskError`] when `text` is absent or `mask` is absent or
/// empty. A custom validator that panics is not caught.
///
/// # Example
///
/// ```rust
/// use textmask::{MaskDefinition, MaskRequest, MaskingOptions, mask_text};
///
/// let options = MaskingOptions::default().with_definition('#', MaskDefinition::digits());
/// let result = mask_text(MaskRequest::new("5551234567", "(###) ###-####").with_options(options))?;
///
/// assert!(result.success);
/// assert_eq!(result.output, "(555) 123-4567");
/// # Ok::<(), textmask::MaskError>(())
/// ```
pub fn mask_text(request: MaskRequest<'_>) -> Result<MaskingResult, MaskError> {
    let (text, mask) = request.validate()?;
    let options = request.options.clone().unwrap_or_default();

    let input_chars: Vec<char> = text.chars().collect();
    let mask_chars: Vec<char> = mask.chars().collect();

    let (success, cells) = scan::scan(&input_chars, &mask_chars, &options);
    let output = assemble::assemble(&cells, &mask_chars, &options);

    Ok(MaskingResult {
        success,
        mask: mask.to_string(),
        input: text.to_string(),
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::{MaskRequest, mask_text};
    use crate::error::MaskError;

    #[test]
    fn absent_text_is_rejected() {
        let request = MaskRequest {
            text: None,
            mask: Some("00".into()),
            options: None,
        };
        assert_eq!(mask_text(request), Err(MaskError::TextRequired));
    }

    #[test]
    fn empty_text_is_valid_input() {
        let result = mask_text(MaskRequest::new("", "0-0")).unwrap();
        assert!(!result.success);
        assert_eq!(result.output, "0-0");
    }

    #[test]
    fn absent_or_empty_mask_is_rejected() {
        let absent = MaskRequest {
            text: Some("123".into()),
            mask: None,
            options: None,
        };
        assert_eq!(mask_text(absent), Err(MaskError::MaskRequired));

        let empty = MaskRequest::new("123", "");
        assert_eq!(mask_text(empty), Err(MaskError::MaskRequired));
    }

    #[test]
    fn all_absent_request_fails_on_text_first() {
        assert_eq!(
            mask_text(MaskRequest::default()),
            Err(MaskError::TextRequired)
        );
    }

    #[test]
    fn result_echoes_mask_and_input() {
        let result = mask_text(MaskRequest::new("12", "00")).unwrap();
        assert_eq!(result.mask, "00");
        assert_eq!(result.input, "12");
        assert_eq!(result.output, "12");
        assert!(result.success);
    }
}
