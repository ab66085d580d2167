//! # uast-base
//!
//! Language-agnostic unified AST (UAST) layer: lets analysis tools walk and
//! query expression trees without knowing which language produced them.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! annotation → Applied annotations, constant values, class lookup
//!   ↓
//! render     → Source-like and log rendering for debugging
//!   ↓
//! qualified  → Dotted chains: identifier paths, matching, chain traversal
//!   ↓
//! tree       → Arena expression tree, typed node views, TreeBuilder
//!   ↓
//! base       → Primitives (Name, TextRange, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → tree → qualified → render → annotation)
// ============================================================================

/// Foundation types: Name, TextRange, constants
pub mod base;

/// Tree construction errors
pub mod error;

/// Expression tree: arena storage, node views, builder
pub mod tree;

/// Qualified expression chains and dotted name matching
pub mod qualified;

/// Debug rendering of nodes and annotations
pub mod render;

/// Applied annotations and their evaluated values
pub mod annotation;

// Re-export commonly needed items
pub use annotation::{Annotated, Annotation, ConstantValue};
pub use base::{Name, TextRange, TextSize};
pub use error::{TreeError, TreeResult};
pub use qualified::{
    as_qualified_path, as_qualified_string, ends_with_qualified, matches_qualified,
    outermost_qualified, qualified_chain, qualified_parent_or_self, starts_with_qualified,
};
pub use tree::{ExprId, ExprKind, ExprNode, TreeBuilder, UastTree};
