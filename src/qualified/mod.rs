//! Qualified expression chains.
//!
//! A chain like `a.b.c(x).d` is a tree of nested [`QualifiedExpression`]s.
//! This module linearizes such trees and matches them against dotted names:
//!
//! - [`as_qualified_path`] - identifiers of a pure dotted chain, or `None`
//! - [`matches_qualified`], [`starts_with_qualified`], [`ends_with_qualified`] -
//!   full, prefix and suffix matching against a dotted pattern
//! - [`qualified_parent_or_self`], [`outermost_qualified`] - upward walks
//! - [`qualified_chain`] - every leaf of the outermost chain, in source order
//!
//! None of these fail loudly. A chain that is not made of identifiers, such
//! as `(a + b).c`, simply does not match.

mod pattern;

use tracing::trace;

use crate::base::Name;
use crate::tree::{ExprNode, QualifiedExpression, UastNode};

pub use pattern::DottedPattern;

/// The chain contains a node that is not an identifier or a nested chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NotAPath<'t>(ExprNode<'t>);

/// Decompose a dotted chain into its identifiers, in source order.
///
/// Returns `None` unless `node` is a simple reference or a qualified chain
/// whose every receiver and selector is an identifier.
///
/// # Example
/// ```
/// use uast::tree::TreeBuilder;
/// use uast::qualified::as_qualified_path;
///
/// let mut builder = TreeBuilder::new();
/// let chain = builder.dotted("a.b.c").unwrap();
/// let tree = builder.finish();
///
/// assert_eq!(
///     as_qualified_path(tree.node(chain).unwrap()),
///     Some(vec!["a".into(), "b".into(), "c".into()])
/// );
/// ```
pub fn as_qualified_path(node: ExprNode<'_>) -> Option<Vec<Name>> {
    if let Some(reference) = node.as_simple_reference() {
        return Some(vec![reference.identifier().clone()]);
    }
    let qualified = node.as_qualified()?;

    match collect_identifiers(qualified) {
        Ok(path) => Some(path),
        Err(NotAPath(offending)) => {
            trace!(
                root = %node.id(),
                offending = %offending.id(),
                kind = ?offending.kind(),
                "qualified chain is not an identifier path"
            );
            None
        }
    }
}

/// Walk down the receiver spine collecting selectors, then the innermost
/// receiver. Identifiers are gathered last-to-first and reversed at the end.
fn collect_identifiers(expr: QualifiedExpression<'_>) -> Result<Vec<Name>, NotAPath<'_>> {
    let mut path = Vec::new();
    let mut current = expr;
    let innermost = loop {
        let selector = current.selector();
        let selector = selector.as_simple_reference().ok_or(NotAPath(selector))?;
        path.push(selector.identifier().clone());

        let receiver = current.receiver();
        match receiver.as_qualified() {
            Some(inner) => current = inner,
            None => break receiver,
        }
    };

    let reference = innermost
        .as_simple_reference()
        .ok_or(NotAPath(innermost))?;
    path.push(reference.identifier().clone());
    path.reverse();
    Ok(path)
}

/// The identifier path of a qualified chain joined with `.`.
pub fn as_qualified_string(expr: QualifiedExpression<'_>) -> Option<String> {
    let path = as_qualified_path(expr.expr())?;
    Some(path.join("."))
}

/// Check if `node` is a dotted identifier chain equal to `fq_name`.
///
/// `fq_name` is a sequence of identifiers separated by `.`, e.g. `"com.example"`.
pub fn matches_qualified(node: ExprNode<'_>, fq_name: &str) -> bool {
    as_qualified_path(node).is_some_and(|path| DottedPattern::parse(fq_name).matches(&path))
}

/// Check if `node` is a dotted identifier chain whose leading part is `fq_name`.
pub fn starts_with_qualified(node: ExprNode<'_>, fq_name: &str) -> bool {
    as_qualified_path(node).is_some_and(|path| DottedPattern::parse(fq_name).is_prefix_of(&path))
}

/// Check if `node` is a dotted identifier chain whose trailing part is `fq_name`.
pub fn ends_with_qualified(node: ExprNode<'_>, fq_name: &str) -> bool {
    as_qualified_path(node).is_some_and(|path| DottedPattern::parse(fq_name).is_suffix_of(&path))
}

/// Get the topmost qualified expression that has `node` on its selector side.
///
/// For `variable.call(args)` starting at `call(args)`, this is the whole
/// `variable.call(args)`. For an unqualified `call(args)` it is the call
/// itself. The walk stops as soon as it arrives at a parent through the
/// receiver position, because a receiver is not part of the call being made.
pub fn qualified_parent_or_self(node: ExprNode<'_>) -> ExprNode<'_> {
    let mut result = node;
    while let Some(parent) = result.parent().and_then(|parent| parent.as_qualified()) {
        if parent.selector() != result {
            break;
        }
        result = parent.expr();
    }
    trace!(start = %node.id(), result = %result.id(), "qualified parent");
    result
}

/// Return the outermost qualified expression above `node`.
///
/// Walks up through qualified parents regardless of which side `node` sits
/// on. Returns `node` itself if its parent is not qualified and it is, or
/// `None` if neither is.
///
/// For `a.b.c(asd).g` starting at `c(asd)`, this is `a.b.c(asd).g`.
pub fn outermost_qualified(node: ExprNode<'_>) -> Option<QualifiedExpression<'_>> {
    let mut current = node;
    while let Some(parent) = current.parent().filter(|parent| parent.is_qualified()) {
        current = parent;
    }
    current.as_qualified()
}

/// Return the leaves of the outermost qualified chain around `node`.
///
/// For `obj.call(param).anotherCall(param2).getter` the chain is
/// `[obj, call(param), anotherCall(param2), getter]`. Leaves are returned as
/// nodes, so calls and other non-identifiers are included as-is. Empty when
/// `node` is not part of a qualified expression.
pub fn qualified_chain(node: ExprNode<'_>) -> Vec<ExprNode<'_>> {
    let Some(outermost) = outermost_qualified(node) else {
        return Vec::new();
    };
    let mut chain = Vec::new();
    // selector pushed first so the receiver side pops first
    let mut pending = vec![outermost.expr()];
    while let Some(part) = pending.pop() {
        match part.as_qualified() {
            Some(inner) => {
                pending.push(inner.selector());
                pending.push(inner.receiver());
            }
            None => chain.push(part),
        }
    }
    chain
}
