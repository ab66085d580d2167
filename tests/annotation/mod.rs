//! Annotation tests
//!
//! - Argument values and constant evaluation
//! - Class resolution
//! - Rendering annotated expressions

mod tests_annotations;
