//! Typed views over [`UastTree`] nodes.
//!
//! [`ExprNode`] is an untyped cursor: a tree reference plus an id. The typed
//! wrappers check the node kind once in `cast` and then expose the payload
//! without further matching.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{AccessKind, AnnotationId, ExprData, ExprId, ExprKind, Literal, UastTree};
use crate::base::{Name, TextRange};

/// A node in a [`UastTree`].
///
/// Equality is identity: two views are equal when they point at the same
/// node of the same tree, regardless of payload.
#[derive(Clone, Copy)]
pub struct ExprNode<'t> {
    tree: &'t UastTree,
    id: ExprId,
}

impl<'t> ExprNode<'t> {
    pub(crate) fn new(tree: &'t UastTree, id: ExprId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> ExprId {
        self.id
    }

    pub fn tree(&self) -> &'t UastTree {
        self.tree
    }

    pub fn data(&self) -> &'t ExprData {
        &self.tree.node_data(self.id).data
    }

    pub fn kind(&self) -> ExprKind {
        self.data().kind()
    }

    /// The enclosing expression, or `None` at a root.
    pub fn parent(&self) -> Option<ExprNode<'t>> {
        self.tree
            .node_data(self.id)
            .parent
            .map(|id| Self::new(self.tree, id))
    }

    /// Direct children in source order.
    pub fn children(&self) -> impl Iterator<Item = ExprNode<'t>> + use<'t> {
        let tree = self.tree;
        self.data()
            .child_ids()
            .into_iter()
            .map(move |id| Self::new(tree, id))
    }

    pub fn range(&self) -> Option<TextRange> {
        self.tree.node_data(self.id).range
    }

    pub(crate) fn annotation_ids(&self) -> &'t [AnnotationId] {
        &self.tree.node_data(self.id).annotations
    }

    pub fn as_simple_reference(&self) -> Option<SimpleReference<'t>> {
        SimpleReference::cast(*self)
    }

    pub fn as_qualified(&self) -> Option<QualifiedExpression<'t>> {
        QualifiedExpression::cast(*self)
    }

    pub fn as_call(&self) -> Option<CallExpression<'t>> {
        CallExpression::cast(*self)
    }

    pub fn is_qualified(&self) -> bool {
        self.kind() == ExprKind::Qualified
    }

    fn child(&self, id: ExprId) -> ExprNode<'t> {
        Self::new(self.tree, id)
    }
}

impl PartialEq for ExprNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for ExprNode<'_> {}

impl Hash for ExprNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.tree, state);
        self.id.hash(state);
    }
}

impl fmt::Debug for ExprNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprNode")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Trait for typed views that wrap an [`ExprNode`].
pub trait UastNode<'t>: Sized {
    fn can_cast(kind: ExprKind) -> bool;
    fn cast(node: ExprNode<'t>) -> Option<Self>;
    fn expr(&self) -> ExprNode<'t>;
}

/// Identity comparison and hashing for typed views, delegated to the node.
macro_rules! uast_node_identity {
    ($name:ident) => {
        impl PartialEq for $name<'_> {
            fn eq(&self, other: &Self) -> bool {
                self.node == other.node
            }
        }

        impl Eq for $name<'_> {}

        impl Hash for $name<'_> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.node.hash(state);
            }
        }

        impl<'t> From<$name<'t>> for ExprNode<'t> {
            fn from(value: $name<'t>) -> Self {
                value.node
            }
        }
    };
}

// ============================================================================
// Simple reference
// ============================================================================

/// A single identifier, e.g. `foo`.
#[derive(Debug, Clone, Copy)]
pub struct SimpleReference<'t> {
    node: ExprNode<'t>,
    identifier: &'t Name,
}

impl<'t> UastNode<'t> for SimpleReference<'t> {
    fn can_cast(kind: ExprKind) -> bool {
        kind == ExprKind::SimpleReference
    }

    fn cast(node: ExprNode<'t>) -> Option<Self> {
        match node.data() {
            ExprData::SimpleReference { identifier } => Some(Self { node, identifier }),
            _ => None,
        }
    }

    fn expr(&self) -> ExprNode<'t> {
        self.node
    }
}

impl<'t> SimpleReference<'t> {
    pub fn identifier(&self) -> &'t Name {
        self.identifier
    }
}

uast_node_identity!(SimpleReference);

// ============================================================================
// Qualified expression
// ============================================================================

/// `receiver.selector`.
#[derive(Debug, Clone, Copy)]
pub struct QualifiedExpression<'t> {
    node: ExprNode<'t>,
    receiver: ExprId,
    selector: ExprId,
    access: AccessKind,
}

impl<'t> UastNode<'t> for QualifiedExpression<'t> {
    fn can_cast(kind: ExprKind) -> bool {
        kind == ExprKind::Qualified
    }

    fn cast(node: ExprNode<'t>) -> Option<Self> {
        match *node.data() {
            ExprData::Qualified {
                receiver,
                selector,
                access,
            } => Some(Self {
                node,
                receiver,
                selector,
                access,
            }),
            _ => None,
        }
    }

    fn expr(&self) -> ExprNode<'t> {
        self.node
    }
}

impl<'t> QualifiedExpression<'t> {
    pub fn receiver(&self) -> ExprNode<'t> {
        self.node.child(self.receiver)
    }

    pub fn selector(&self) -> ExprNode<'t> {
        self.node.child(self.selector)
    }

    pub fn access(&self) -> AccessKind {
        self.access
    }
}

uast_node_identity!(QualifiedExpression);

// ============================================================================
// Call expression
// ============================================================================

/// `callee(arguments...)`.
#[derive(Debug, Clone, Copy)]
pub struct CallExpression<'t> {
    node: ExprNode<'t>,
    callee: Option<&'t Name>,
    arguments: &'t [ExprId],
}

impl<'t> UastNode<'t> for CallExpression<'t> {
    fn can_cast(kind: ExprKind) -> bool {
        kind == ExprKind::Call
    }

    fn cast(node: ExprNode<'t>) -> Option<Self> {
        match node.data() {
            ExprData::Call { callee, arguments } => Some(Self {
                node,
                callee: callee.as_ref(),
                arguments,
            }),
            _ => None,
        }
    }

    fn expr(&self) -> ExprNode<'t> {
        self.node
    }
}

impl<'t> CallExpression<'t> {
    /// The called function or method name, if the front-end knew it.
    pub fn callee_name(&self) -> Option<&'t Name> {
        self.callee
    }

    pub fn arguments(&self) -> impl Iterator<Item = ExprNode<'t>> + use<'t> {
        let node = self.node;
        self.arguments.iter().map(move |&id| node.child(id))
    }

    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }
}

uast_node_identity!(CallExpression);

// ============================================================================
// Literal expression
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct LiteralExpression<'t> {
    node: ExprNode<'t>,
    value: &'t Literal,
}

impl<'t> UastNode<'t> for LiteralExpression<'t> {
    fn can_cast(kind: ExprKind) -> bool {
        kind == ExprKind::Literal
    }

    fn cast(node: ExprNode<'t>) -> Option<Self> {
        match node.data() {
            ExprData::Literal(value) => Some(Self { node, value }),
            _ => None,
        }
    }

    fn expr(&self) -> ExprNode<'t> {
        self.node
    }
}

impl<'t> LiteralExpression<'t> {
    pub fn value(&self) -> &'t Literal {
        self.value
    }
}

uast_node_identity!(LiteralExpression);

// ============================================================================
// Array expression
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ArrayExpression<'t> {
    node: ExprNode<'t>,
    elements: &'t [ExprId],
}

impl<'t> UastNode<'t> for ArrayExpression<'t> {
    fn can_cast(kind: ExprKind) -> bool {
        kind == ExprKind::Array
    }

    fn cast(node: ExprNode<'t>) -> Option<Self> {
        match node.data() {
            ExprData::Array { elements } => Some(Self { node, elements }),
            _ => None,
        }
    }

    fn expr(&self) -> ExprNode<'t> {
        self.node
    }
}

impl<'t> ArrayExpression<'t> {
    pub fn elements(&self) -> impl Iterator<Item = ExprNode<'t>> + use<'t> {
        let node = self.node;
        self.elements.iter().map(move |&id| node.child(id))
    }
}

uast_node_identity!(ArrayExpression);

// ============================================================================
// Named expression
// ============================================================================

/// `name = expression`, as used for named arguments.
#[derive(Debug, Clone, Copy)]
pub struct NamedExpression<'t> {
    node: ExprNode<'t>,
    name: &'t Name,
    expression: ExprId,
}

impl<'t> UastNode<'t> for NamedExpression<'t> {
    fn can_cast(kind: ExprKind) -> bool {
        kind == ExprKind::Named
    }

    fn cast(node: ExprNode<'t>) -> Option<Self> {
        match node.data() {
            ExprData::Named { name, expression } => Some(Self {
                node,
                name,
                expression: *expression,
            }),
            _ => None,
        }
    }

    fn expr(&self) -> ExprNode<'t> {
        self.node
    }
}

impl<'t> NamedExpression<'t> {
    pub fn name(&self) -> &'t Name {
        self.name
    }

    pub fn expression(&self) -> ExprNode<'t> {
        self.node.child(self.expression)
    }
}

uast_node_identity!(NamedExpression);

// ============================================================================
// Other
// ============================================================================

/// A construct the UAST layer does not model, identified by a label.
#[derive(Debug, Clone, Copy)]
pub struct OtherExpression<'t> {
    node: ExprNode<'t>,
    label: &'t Name,
}

impl<'t> UastNode<'t> for OtherExpression<'t> {
    fn can_cast(kind: ExprKind) -> bool {
        kind == ExprKind::Other
    }

    fn cast(node: ExprNode<'t>) -> Option<Self> {
        match node.data() {
            ExprData::Other { label, .. } => Some(Self { node, label }),
            _ => None,
        }
    }

    fn expr(&self) -> ExprNode<'t> {
        self.node
    }
}

impl<'t> OtherExpression<'t> {
    pub fn label(&self) -> &'t Name {
        self.label
    }
}

uast_node_identity!(OtherExpression);
