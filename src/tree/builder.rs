//! Construction of [`UastTree`]s.
//!
//! Nodes are built bottom-up: children first, then the node that owns them.
//! Attaching a child records the new node as its parent; a child can be
//! attached once.

use tracing::debug;

use super::{
    AccessKind, AnnotationData, AnnotationId, ExprData, ExprId, Literal, NodeData, UastTree,
};
use crate::base::constants::QUALIFIED_SEPARATOR;
use crate::base::{Name, TextRange};
use crate::error::{TreeError, TreeResult};

/// Builder for [`UastTree`].
///
/// # Example
/// ```
/// use uast::tree::TreeBuilder;
/// use uast::qualified::as_qualified_path;
///
/// let mut builder = TreeBuilder::new();
/// let chain = builder.dotted("java.util.List").unwrap();
/// let tree = builder.finish();
///
/// let path = as_qualified_path(tree.node(chain).unwrap()).unwrap();
/// assert_eq!(path, vec!["java", "util", "List"]);
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
    annotations: Vec<AnnotationData>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `identifier`
    pub fn simple_reference(&mut self, identifier: impl Into<Name>) -> ExprId {
        self.alloc(ExprData::SimpleReference {
            identifier: identifier.into(),
        })
    }

    /// `receiver.selector`
    pub fn qualified(&mut self, receiver: ExprId, selector: ExprId) -> TreeResult<ExprId> {
        self.qualified_with(receiver, selector, AccessKind::Simple)
    }

    /// `receiver?.selector`
    pub fn safe_qualified(&mut self, receiver: ExprId, selector: ExprId) -> TreeResult<ExprId> {
        self.qualified_with(receiver, selector, AccessKind::Safe)
    }

    pub fn qualified_with(
        &mut self,
        receiver: ExprId,
        selector: ExprId,
        access: AccessKind,
    ) -> TreeResult<ExprId> {
        self.alloc_with_children(
            ExprData::Qualified {
                receiver,
                selector,
                access,
            },
            &[receiver, selector],
        )
    }

    /// `callee(arguments...)`
    pub fn call(
        &mut self,
        callee: Option<&str>,
        arguments: impl IntoIterator<Item = ExprId>,
    ) -> TreeResult<ExprId> {
        let arguments: Vec<_> = arguments.into_iter().collect();
        let children = arguments.clone();
        self.alloc_with_children(
            ExprData::Call {
                callee: callee.map(Name::from),
                arguments,
            },
            &children,
        )
    }

    pub fn literal(&mut self, value: impl Into<Literal>) -> ExprId {
        self.alloc(ExprData::Literal(value.into()))
    }

    /// `[elements...]`
    pub fn array(&mut self, elements: impl IntoIterator<Item = ExprId>) -> TreeResult<ExprId> {
        let elements: Vec<_> = elements.into_iter().collect();
        let children = elements.clone();
        self.alloc_with_children(ExprData::Array { elements }, &children)
    }

    /// `name = expression`
    pub fn named(&mut self, name: impl Into<Name>, expression: ExprId) -> TreeResult<ExprId> {
        self.alloc_with_children(
            ExprData::Named {
                name: name.into(),
                expression,
            },
            &[expression],
        )
    }

    /// A construct without a dedicated kind, e.g. a binary operator.
    pub fn other(
        &mut self,
        label: impl Into<Name>,
        children: impl IntoIterator<Item = ExprId>,
    ) -> TreeResult<ExprId> {
        let children: Vec<_> = children.into_iter().collect();
        let attached = children.clone();
        self.alloc_with_children(
            ExprData::Other {
                label: label.into(),
                children,
            },
            &attached,
        )
    }

    /// Build the left-nested chain for a dotted name: `a.b.c` becomes
    /// `(a.b).c`, the shape front-ends produce for member access.
    ///
    /// Segments are taken verbatim, so `"a..b"` yields an empty identifier.
    pub fn dotted(&mut self, path: &str) -> TreeResult<ExprId> {
        let mut segments = path.split(QUALIFIED_SEPARATOR);
        let first = segments.next().unwrap_or_default();
        let mut chain = self.simple_reference(first);
        for segment in segments {
            let selector = self.simple_reference(segment);
            chain = self.qualified(chain, selector)?;
        }
        Ok(chain)
    }

    pub fn set_range(&mut self, id: ExprId, range: TextRange) -> TreeResult<()> {
        self.node_mut(id)?.range = Some(range);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Annotations
    // ------------------------------------------------------------------------

    /// Start an annotation whose class resolved to `qualified_name`.
    pub fn annotation(&mut self, qualified_name: impl Into<Name>) -> AnnotationId {
        self.alloc_annotation(AnnotationData {
            qualified_name: Some(qualified_name.into()),
            ..AnnotationData::default()
        })
    }

    /// Start an annotation the front-end could only name as written.
    pub fn unresolved_annotation(&mut self, short_name: impl Into<Name>) -> AnnotationId {
        self.alloc_annotation(AnnotationData {
            short_name: Some(short_name.into()),
            ..AnnotationData::default()
        })
    }

    /// Add the argument `name = value` to an annotation. Returns the id of
    /// the named expression wrapping `value`.
    pub fn annotation_argument(
        &mut self,
        annotation: AnnotationId,
        name: impl Into<Name>,
        value: ExprId,
    ) -> TreeResult<ExprId> {
        self.annotation_mut(annotation)?;
        let named = self.named(name, value)?;
        self.annotation_mut(annotation)?.arguments.push(named);
        Ok(named)
    }

    /// Record the expression the annotation's name was written as.
    pub fn annotation_name_element(
        &mut self,
        annotation: AnnotationId,
        element: ExprId,
    ) -> TreeResult<()> {
        self.node_mut(element)?;
        self.annotation_mut(annotation)?.name_element = Some(element);
        Ok(())
    }

    /// Apply an annotation to an expression.
    pub fn annotate(&mut self, target: ExprId, annotation: AnnotationId) -> TreeResult<()> {
        self.annotation_mut(annotation)?;
        self.node_mut(target)?.annotations.push(annotation);
        Ok(())
    }

    pub fn finish(self) -> UastTree {
        debug!(
            nodes = self.nodes.len(),
            annotations = self.annotations.len(),
            "built uast tree"
        );
        UastTree::from_parts(self.nodes, self.annotations)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn next_id(&self) -> ExprId {
        ExprId::from_raw(self.nodes.len() as u32)
    }

    fn alloc(&mut self, data: ExprData) -> ExprId {
        let id = self.next_id();
        self.nodes.push(NodeData {
            data,
            parent: None,
            range: None,
            annotations: Vec::new(),
        });
        id
    }

    /// Validate every child before allocating, so a failed call leaves the
    /// builder unchanged.
    fn alloc_with_children(&mut self, data: ExprData, children: &[ExprId]) -> TreeResult<ExprId> {
        let parent = self.next_id();
        for (i, &child) in children.iter().enumerate() {
            let node = self.nodes.get(child.index()).ok_or(TreeError::UnknownNode(child))?;
            if let Some(existing) = node.parent {
                return Err(TreeError::AlreadyAttached {
                    child,
                    parent: existing,
                });
            }
            if children[..i].contains(&child) {
                return Err(TreeError::AlreadyAttached { child, parent });
            }
        }

        let id = self.alloc(data);
        for &child in children {
            self.nodes[child.index()].parent = Some(id);
        }
        Ok(id)
    }

    fn node_mut(&mut self, id: ExprId) -> TreeResult<&mut NodeData> {
        self.nodes
            .get_mut(id.index())
            .ok_or(TreeError::UnknownNode(id))
    }

    fn alloc_annotation(&mut self, data: AnnotationData) -> AnnotationId {
        let id = AnnotationId::from_raw(self.annotations.len() as u32);
        self.annotations.push(data);
        id
    }

    fn annotation_mut(&mut self, id: AnnotationId) -> TreeResult<&mut AnnotationData> {
        self.annotations
            .get_mut(id.index())
            .ok_or(TreeError::UnknownAnnotation(id))
    }
}
