//! Language-agnostic expression tree.
//!
//! Front-ends for concrete languages lower their ASTs into a [`UastTree`]
//! through the [`TreeBuilder`]. The tree is an arena: nodes live in a `Vec`
//! and refer to each other by [`ExprId`]. Ownership runs root to leaf only;
//! the parent link is a plain index used for lookup.
//!
//! ## Architecture
//!
//! ```text
//! Concrete AST (Java, Kotlin, ...)
//!     ↓
//! TreeBuilder → UastTree (immutable, Send + Sync)
//!     ↓
//! ExprNode → Copy view with parent/children navigation
//!     ↓
//! Typed views → SimpleReference, QualifiedExpression, CallExpression, ...
//! ```

mod builder;
mod node;

use std::fmt;

use rustc_hash::FxHashSet;

use crate::base::{Name, TextRange};

pub use builder::TreeBuilder;
pub use node::{
    ArrayExpression, CallExpression, ExprNode, LiteralExpression, NamedExpression,
    OtherExpression, QualifiedExpression, SimpleReference, UastNode,
};

/// Index of an expression node inside its [`UastTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExprId(u32);

impl ExprId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of an applied annotation inside its [`UastTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnnotationId(u32);

impl AnnotationId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Discriminant of an expression node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    SimpleReference,
    Qualified,
    Call,
    Literal,
    Array,
    Named,
    Other,
}

/// How the selector of a qualified expression is accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessKind {
    /// `receiver.selector`
    #[default]
    Simple,
    /// `receiver?.selector`
    Safe,
}

impl AccessKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => ".",
            Self::Safe => "?.",
        }
    }
}

/// A literal constant as it appears in source.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            // Debug keeps the fraction on whole numbers (`1.0`, not `1`)
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Char(value) => write_quoted(f, value.encode_utf8(&mut [0; 4]), '\''),
            Self::String(value) => write_quoted(f, value, '"'),
        }
    }
}

/// Write `text` between `quote`s, escaping backslashes, control characters
/// and the quote itself.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str, quote: char) -> fmt::Result {
    write!(f, "{quote}")?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<char> for Literal {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Payload of an expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprData {
    /// A single identifier, e.g. `foo`.
    SimpleReference { identifier: Name },
    /// `receiver.selector` or `receiver?.selector`.
    Qualified {
        receiver: ExprId,
        selector: ExprId,
        access: AccessKind,
    },
    /// `callee(arguments...)`. The callee is `None` when the front-end could
    /// not name it (e.g. invoking a lambda value).
    Call {
        callee: Option<Name>,
        arguments: Vec<ExprId>,
    },
    Literal(Literal),
    /// Array initializer, e.g. `[a, b]` in annotation arguments.
    Array { elements: Vec<ExprId> },
    /// Named argument `name = expression`.
    Named { name: Name, expression: ExprId },
    /// Any other construct. Opaque to the chain algorithms.
    Other { label: Name, children: Vec<ExprId> },
}

impl ExprData {
    pub fn kind(&self) -> ExprKind {
        match self {
            Self::SimpleReference { .. } => ExprKind::SimpleReference,
            Self::Qualified { .. } => ExprKind::Qualified,
            Self::Call { .. } => ExprKind::Call,
            Self::Literal(_) => ExprKind::Literal,
            Self::Array { .. } => ExprKind::Array,
            Self::Named { .. } => ExprKind::Named,
            Self::Other { .. } => ExprKind::Other,
        }
    }

    /// Child ids in source order.
    pub fn child_ids(&self) -> Vec<ExprId> {
        match self {
            Self::SimpleReference { .. } | Self::Literal(_) => Vec::new(),
            Self::Qualified {
                receiver, selector, ..
            } => vec![*receiver, *selector],
            Self::Call { arguments, .. } => arguments.clone(),
            Self::Array { elements } => elements.clone(),
            Self::Named { expression, .. } => vec![*expression],
            Self::Other { children, .. } => children.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) data: ExprData,
    pub(crate) parent: Option<ExprId>,
    pub(crate) range: Option<TextRange>,
    pub(crate) annotations: Vec<AnnotationId>,
}

/// Storage for an applied annotation.
#[derive(Debug, Clone, Default)]
pub(crate) struct AnnotationData {
    pub(crate) qualified_name: Option<Name>,
    pub(crate) short_name: Option<Name>,
    pub(crate) arguments: Vec<ExprId>,
    pub(crate) name_element: Option<ExprId>,
}

/// An immutable, arena-backed expression tree.
///
/// Built with [`TreeBuilder`]; every id stored inside the tree is valid for it.
#[derive(Debug, Clone, Default)]
pub struct UastTree {
    nodes: Vec<NodeData>,
    annotations: Vec<AnnotationData>,
}

impl UastTree {
    pub(crate) fn from_parts(nodes: Vec<NodeData>, annotations: Vec<AnnotationData>) -> Self {
        Self { nodes, annotations }
    }

    /// Get a view of the node with the given id.
    pub fn node(&self, id: ExprId) -> Option<ExprNode<'_>> {
        (id.index() < self.nodes.len()).then(|| ExprNode::new(self, id))
    }

    /// All nodes in allocation order.
    pub fn nodes(&self) -> impl Iterator<Item = ExprNode<'_>> + '_ {
        (0..self.nodes.len()).map(move |i| ExprNode::new(self, ExprId(i as u32)))
    }

    /// Top-level expressions: nodes without a parent that no annotation
    /// owns. Annotation arguments and name elements are reached through
    /// [`crate::annotation::Annotation`] instead.
    pub fn roots(&self) -> impl Iterator<Item = ExprNode<'_>> + '_ {
        let owned: FxHashSet<ExprId> = self
            .annotations
            .iter()
            .flat_map(|annotation| {
                annotation
                    .arguments
                    .iter()
                    .copied()
                    .chain(annotation.name_element)
            })
            .collect();
        self.nodes()
            .filter(move |node| node.parent().is_none() && !owned.contains(&node.id()))
    }

    /// Get a view of the annotation with the given id.
    pub fn annotation(&self, id: AnnotationId) -> Option<crate::annotation::Annotation<'_>> {
        (id.index() < self.annotations.len())
            .then(|| crate::annotation::Annotation::new(self, id))
    }

    /// Number of expression nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node_data(&self, id: ExprId) -> &NodeData {
        &self.nodes[id.index()]
    }

    pub(crate) fn annotation_data(&self, id: AnnotationId) -> &AnnotationData {
        &self.annotations[id.index()]
    }
}
