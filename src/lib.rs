//! Single-pass template masking for text.
//!
//! Given an input string and a mask template, [`mask_text`] interleaves
//! validated input characters into the template's placeholder positions
//! and reports whether every placeholder was satisfied. Typical use:
//! formatting raw keystrokes into phone numbers, dates, or custom
//! templated identifiers.
//!
//! A mask position is either a *placeholder* (bound to a
//! [character-class definition](MaskDefinition), or a bare alphanumeric
//! with no binding) or a *literal* copied through unchanged. Options
//! control traversal direction, case coercion, partial output, and the
//! characters used for invalid or unfilled positions.
//!
//! What this crate does:
//! - masks text against a flat template string in one pass
//! - validates input characters with predicates or patterns
//! - distinguishes "input exhausted" from "input present but invalid"
//!
//! What it does not do:
//! - compile masks into a grammar
//! - track editing state between calls (every call recomputes from
//!   scratch)
//! - perform I/O or logging
//!
//! # Example
//!
//! ```rust
//! use textmask::{MaskDefinition, MaskRequest, MaskingOptions, mask_text};
//!
//! let options = MaskingOptions::default().with_definition('#', MaskDefinition::digits());
//! let result = mask_text(MaskRequest::new("5551234567", "(###) ###-####").with_options(options))?;
//!
//! assert!(result.success);
//! assert_eq!(result.output, "(555) 123-4567");
//! # Ok::<(), textmask::MaskError>(())
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod engine;
mod error;
pub mod options;

// Re-exports from the engine module
pub use engine::{MaskRequest, MaskingResult, mask_text};
// Re-exports from the error module
pub use error::MaskError;
// Re-exports from the options module
pub use options::{
    ALPHA_CLASS_KEY, CharClass, DIGIT_CLASS_KEY, Direction, MaskDefinition, MaskingOptions,
    Validator,
};
