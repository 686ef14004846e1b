//! Error surface for the masking entry point.
//!
//! There is exactly one error taxonomy: invalid arguments, detected
//! before any masking work begins. A mask position that fails to match
//! is not an error; it is reported through [`MaskingResult::success`].
//!
//! [`MaskingResult::success`]: crate::MaskingResult::success

use thiserror::Error;

/// Precondition failures raised by [`mask_text`](crate::mask_text).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    /// The `text` parameter was not provided. An empty string is valid
    /// input; only an absent value is rejected.
    #[error("a value is required for the \"text\" parameter")]
    TextRequired,
    /// The `mask` parameter was absent or empty.
    #[error("the \"mask\" parameter must provide a value")]
    MaskRequired,
}
