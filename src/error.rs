//! Error types for tree construction.
//!
//! Querying a finished tree never fails: the chain algorithms in
//! [`crate::qualified`] report "not a dotted path" through `None`/`false`.
//! Only misuse of [`crate::tree::TreeBuilder`] surfaces as a [`TreeError`].

use thiserror::Error;

use crate::tree::{AnnotationId, ExprId};

/// Errors that can occur while building a [`crate::tree::UastTree`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The id was not allocated by this builder.
    #[error("Unknown expression node: {0}")]
    UnknownNode(ExprId),

    /// The annotation id was not allocated by this builder.
    #[error("Unknown annotation: {0}")]
    UnknownAnnotation(AnnotationId),

    /// A node can have only one parent.
    #[error("Node {child} is already attached to parent {parent}")]
    AlreadyAttached { child: ExprId, parent: ExprId },
}

/// Result type for tree construction.
pub type TreeResult<T> = Result<T, TreeError>;
