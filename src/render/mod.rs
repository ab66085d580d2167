//! Text rendering of expression trees for debugging.
//!
//! Two forms are produced:
//! - [`render_string`] - source-like text such as `a.b?.c(x, 1)`
//! - [`log_string`] - an indented dump with one line per node

mod options;

use std::borrow::Cow;

use crate::annotation::{Annotated, Annotation};
use crate::base::constants::ERROR_NAME;
use crate::tree::{ExprData, ExprNode};

pub use options::RenderOptions;

/// Render `node` as source-like text. Annotations applied to a node are
/// written inline before it.
pub fn render_string(node: ExprNode<'_>) -> String {
    let mut out = String::new();
    for annotation in node.annotations() {
        append_with_space(&mut out, &render_annotation(annotation));
    }
    out.push_str(&render_body(node));
    out
}

/// Render `node` with its annotations on separate lines above it, the way
/// annotated declarations are laid out.
pub fn render_block(node: ExprNode<'_>, options: &RenderOptions) -> String {
    let mut out = render_annotations(&node.annotations(), options);
    out.push_str(&render_body(node));
    out
}

fn render_body(node: ExprNode<'_>) -> String {
    match node.data() {
        ExprData::SimpleReference { identifier } => render_identifier(identifier).into_owned(),
        ExprData::Qualified { access, .. } => {
            let mut parts = node.children().map(render_string);
            let receiver = parts.next().unwrap_or_default();
            let selector = parts.next().unwrap_or_default();
            format!("{receiver}{}{selector}", access.as_str())
        }
        ExprData::Call { callee, .. } => {
            let callee = callee
                .as_deref()
                .map_or(Cow::Borrowed(ERROR_NAME), render_identifier);
            format!("{callee}({})", render_list(node))
        }
        ExprData::Literal(literal) => literal.to_string(),
        ExprData::Array { .. } => format!("[{}]", render_list(node)),
        ExprData::Named { name, .. } => {
            let value = node.children().next().map(render_string).unwrap_or_default();
            format!("{} = {value}", render_identifier(name))
        }
        ExprData::Other { label, children } => {
            if children.is_empty() {
                label.to_string()
            } else {
                format!("{label}({})", render_list(node))
            }
        }
    }
}

fn render_list(node: ExprNode<'_>) -> String {
    node.children()
        .map(render_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quote an identifier in backticks unless it is a valid Unicode identifier.
pub fn render_identifier(identifier: &str) -> Cow<'_, str> {
    if is_identifier(identifier) {
        Cow::Borrowed(identifier)
    } else {
        Cow::Owned(format!("`{identifier}`"))
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}

/// `@Name` or `@Name(a = 1, b = "x")`.
pub fn render_annotation(annotation: Annotation<'_>) -> String {
    let name = annotation.name().unwrap_or(ERROR_NAME);
    let arguments: Vec<_> = annotation
        .value_arguments()
        .map(|argument| render_string(argument.into()))
        .collect();
    if arguments.is_empty() {
        format!("@{name}")
    } else {
        format!("@{name}({})", arguments.join(", "))
    }
}

pub(crate) fn log_annotation_label(annotation: Annotation<'_>) -> String {
    format!("Annotation ({})", annotation.name().unwrap_or(ERROR_NAME))
}

/// One annotation per line, followed by an empty line if there were any.
pub fn render_annotations(annotations: &[Annotation<'_>], options: &RenderOptions) -> String {
    let mut out = String::new();
    for annotation in annotations {
        out.push_str(&render_annotation(*annotation));
        out.push_str(&options.line_separator);
    }
    if !annotations.is_empty() {
        out.push_str(&options.line_separator);
    }
    out
}

/// Append `s` followed by a space, unless `s` is empty.
pub fn append_with_space(out: &mut String, s: &str) {
    if !s.is_empty() {
        out.push_str(s);
        out.push(' ');
    }
}

/// Indent every line of `text` by one margin. With an empty line separator
/// the whole text is one line.
pub fn with_margin(text: &str, options: &RenderOptions) -> String {
    let margin = options.margin();
    if options.line_separator.is_empty() {
        return format!("{margin}{text}");
    }
    text.split(options.line_separator.as_str())
        .map(|line| format!("{margin}{line}"))
        .collect::<Vec<_>>()
        .join(options.line_separator.as_str())
}

/// Indented dump of `node` and its subtree.
///
/// ```
/// use uast::render::{RenderOptions, log_string};
/// use uast::tree::TreeBuilder;
///
/// let mut builder = TreeBuilder::new();
/// let chain = builder.dotted("a.b").unwrap();
/// let tree = builder.finish();
///
/// let log = log_string(tree.node(chain).unwrap(), &RenderOptions::default());
/// assert_eq!(
///     log,
///     "QualifiedExpression (.)\n    SimpleReference (a)\n    SimpleReference (b)"
/// );
/// ```
pub fn log_string(node: ExprNode<'_>, options: &RenderOptions) -> String {
    let mut lines = vec![log_label(node)];
    for annotation in node.annotations() {
        lines.push(with_margin(&log_annotation(annotation, options), options));
    }
    for child in node.children() {
        lines.push(with_margin(&log_string(child, options), options));
    }
    lines.join(options.line_separator.as_str())
}

/// Log each node at one margin of indentation.
pub fn log_list<'t>(
    nodes: impl IntoIterator<Item = ExprNode<'t>>,
    options: &RenderOptions,
) -> String {
    nodes
        .into_iter()
        .map(|node| with_margin(&log_string(node, options), options))
        .collect::<Vec<_>>()
        .join(options.line_separator.as_str())
}

fn log_annotation(annotation: Annotation<'_>, options: &RenderOptions) -> String {
    let mut lines = vec![log_annotation_label(annotation)];
    lines.extend(
        annotation
            .value_arguments()
            .map(|argument| with_margin(&log_string(argument.into(), options), options)),
    );
    lines.join(options.line_separator.as_str())
}

fn log_label(node: ExprNode<'_>) -> String {
    match node.data() {
        ExprData::SimpleReference { identifier } => format!("SimpleReference ({identifier})"),
        ExprData::Qualified { access, .. } => format!("QualifiedExpression ({})", access.as_str()),
        ExprData::Call { callee, .. } => format!(
            "CallExpression ({})",
            callee.as_deref().unwrap_or(ERROR_NAME)
        ),
        ExprData::Literal(literal) => format!("Literal ({literal})"),
        ExprData::Array { .. } => "ArrayExpression".to_string(),
        ExprData::Named { name, .. } => format!("NamedExpression ({name})"),
        ExprData::Other { label, .. } => format!("Other ({label})"),
    }
}
