//! Configuration surface for the masking engine.
//!
//! This module provides:
//!
//! - **Settings** (`settings`): [`MaskingOptions`] with its builder
//!   methods, the process-wide defaults, and [`Direction`].
//! - **Classes** (`classes`): [`MaskDefinition`], [`Validator`], and the
//!   [`CharClass`] map entry that carries the explicit
//!   "never a placeholder" marker.
//!
//! # Example
//!
//! ```rust
//! use textmask::{MaskDefinition, MaskingOptions};
//!
//! let options = MaskingOptions::default()
//!     .with_definition('#', MaskDefinition::digits())
//!     .with_placeholder('_');
//! ```

pub mod classes;
pub mod settings;

pub use classes::{ALPHA_CLASS_KEY, CharClass, DIGIT_CLASS_KEY, MaskDefinition, Validator};
pub use settings::{Direction, MaskingOptions};
