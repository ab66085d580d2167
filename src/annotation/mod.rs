//! Applied annotations.
//!
//! An [`Annotation`] is a view over an annotation stored in a [`UastTree`]:
//! its name, its `name = value` arguments, the class it resolves to and the
//! constant values of its arguments.
//!
//! ```
//! use uast::annotation::Annotated;
//! use uast::tree::TreeBuilder;
//!
//! let mut builder = TreeBuilder::new();
//! let target = builder.call(Some("run"), []).unwrap();
//! let annotation = builder.annotation("kotlin.Suppress");
//! let names = builder.literal("unused");
//! builder.annotation_argument(annotation, "names", names).unwrap();
//! builder.annotate(target, annotation).unwrap();
//! let tree = builder.finish();
//!
//! let node = tree.node(target).unwrap();
//! let suppress = node.find_annotation("kotlin.Suppress").unwrap();
//! assert_eq!(suppress.name(), Some("Suppress"));
//! assert_eq!(suppress.render_string(), "@Suppress(names = \"unused\")");
//! ```

mod resolve;
mod value;

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use tracing::trace;

use crate::base::Name;
use crate::base::constants::{DEFAULT_ATTRIBUTE_NAME, QUALIFIED_SEPARATOR};
use crate::render;
use crate::tree::{AnnotationData, AnnotationId, ExprNode, NamedExpression, UastNode, UastTree};

pub use resolve::{AnnotationResolver, ClassIndex, ClassKind, ClassRef};
pub use value::{ConstantValue, evaluate};

/// An annotation applied to an expression.
#[derive(Clone, Copy)]
pub struct Annotation<'t> {
    tree: &'t UastTree,
    id: AnnotationId,
}

impl<'t> Annotation<'t> {
    pub(crate) fn new(tree: &'t UastTree, id: AnnotationId) -> Self {
        Self { tree, id }
    }

    fn data(&self) -> &'t AnnotationData {
        self.tree.annotation_data(self.id)
    }

    pub fn id(&self) -> AnnotationId {
        self.id
    }

    /// Fully qualified name of the annotation class, if the front-end
    /// resolved it.
    pub fn qualified_name(&self) -> Option<&'t str> {
        self.data().qualified_name.as_deref()
    }

    /// Simple name of the annotation: the name as written, or the last
    /// segment of the qualified name.
    pub fn name(&self) -> Option<&'t str> {
        let data = self.data();
        data.short_name.as_deref().or_else(|| {
            data.qualified_name
                .as_deref()
                .and_then(|fq| fq.rsplit(QUALIFIED_SEPARATOR).next())
        })
    }

    /// The `name = value` arguments, in source order.
    pub fn value_arguments(&self) -> impl Iterator<Item = NamedExpression<'t>> + use<'t> {
        let tree = self.tree;
        self.data()
            .arguments
            .iter()
            .filter_map(move |&id| tree.node(id).and_then(NamedExpression::cast))
    }

    /// The expression the annotation name was written as, if the
    /// underlying AST had one.
    pub fn name_element(&self) -> Option<ExprNode<'t>> {
        self.data().name_element.and_then(|id| self.tree.node(id))
    }

    /// Look up the annotation class.
    ///
    /// Returns `None` if the qualified name is unknown or the resolver has
    /// no such class.
    pub fn resolve(&self, resolver: &dyn AnnotationResolver) -> Option<ClassRef> {
        let Some(qualified_name) = self.qualified_name() else {
            trace!(annotation = %self.id, name = ?self.name(), "unresolved annotation name");
            return None;
        };
        resolver.resolve_class(qualified_name)
    }

    /// Evaluated value of the argument called `name`.
    ///
    /// `None` reads the default attribute (`value`), as in `@Foo(1)`.
    pub fn value(&self, name: Option<&str>) -> Option<ConstantValue> {
        let name = name.unwrap_or(DEFAULT_ATTRIBUTE_NAME);
        self.value_arguments()
            .find(|argument| argument.name().as_str() == name)
            .and_then(|argument| evaluate(argument.expression()))
    }

    /// All arguments that evaluate to a constant, keyed by name in source
    /// order.
    pub fn values(&self) -> IndexMap<Name, ConstantValue> {
        self.value_arguments()
            .filter_map(|argument| {
                evaluate(argument.expression()).map(|value| (argument.name().clone(), value))
            })
            .collect()
    }

    /// `@Name` or `@Name(a = 1, b = "x")`.
    pub fn render_string(&self) -> String {
        render::render_annotation(*self)
    }

    /// One-line description for debug logs.
    pub fn log_string(&self) -> String {
        render::log_annotation_label(*self)
    }
}

impl PartialEq for Annotation<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Annotation<'_> {}

impl Hash for Annotation<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.tree, state);
        self.id.hash(state);
    }
}

impl fmt::Debug for Annotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotation")
            .field("id", &self.id)
            .field("qualified_name", &self.qualified_name())
            .finish()
    }
}

/// Something annotations can be applied to.
pub trait Annotated<'t> {
    /// Annotations in application order.
    fn annotations(&self) -> Vec<Annotation<'t>>;

    /// The first annotation whose qualified name is `fq_name`.
    fn find_annotation(&self, fq_name: &str) -> Option<Annotation<'t>> {
        self.annotations()
            .into_iter()
            .find(|annotation| annotation.qualified_name() == Some(fq_name))
    }
}

impl<'t> Annotated<'t> for ExprNode<'t> {
    fn annotations(&self) -> Vec<Annotation<'t>> {
        let tree = self.tree();
        self.annotation_ids()
            .iter()
            .map(|&id| Annotation::new(tree, id))
            .collect()
    }
}
