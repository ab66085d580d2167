//! Foundation types for the UAST layer.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Name`] - Cheap-to-clone identifier text
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - Shared constants (placeholder names, separators)
//!
//! This module has NO dependencies on other uast modules.

pub mod constants;

/// Identifier text. Inline for short names, so cloning a path is cheap.
pub type Name = smol_str::SmolStr;

pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
