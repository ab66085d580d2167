//! Annotation class lookup.

use rustc_hash::FxHashMap;

use crate::base::Name;
use crate::base::constants::QUALIFIED_SEPARATOR;

/// What kind of declaration a [`ClassRef`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

/// A declared class, as known to the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassRef {
    qualified_name: Name,
    kind: ClassKind,
}

impl ClassRef {
    pub fn new(qualified_name: impl Into<Name>, kind: ClassKind) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            kind,
        }
    }

    /// An annotation class.
    pub fn annotation(qualified_name: impl Into<Name>) -> Self {
        Self::new(qualified_name, ClassKind::Annotation)
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Last segment of the qualified name.
    pub fn name(&self) -> &str {
        self.qualified_name
            .rsplit(QUALIFIED_SEPARATOR)
            .next()
            .unwrap_or_default()
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn is_annotation(&self) -> bool {
        self.kind == ClassKind::Annotation
    }
}

/// Resolves annotation names to their classes.
///
/// Implemented by whatever owns declaration information for the tree; this
/// crate only asks by qualified name.
pub trait AnnotationResolver {
    fn resolve_class(&self, qualified_name: &str) -> Option<ClassRef>;
}

/// In-memory [`AnnotationResolver`] keyed by qualified name.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    classes: FxHashMap<Name, ClassRef>,
}

impl ClassIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class, replacing any earlier class with the same name.
    pub fn insert(&mut self, class: ClassRef) -> Option<ClassRef> {
        self.classes.insert(class.qualified_name.clone(), class)
    }

    pub fn get(&self, qualified_name: &str) -> Option<&ClassRef> {
        self.classes.get(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl AnnotationResolver for ClassIndex {
    fn resolve_class(&self, qualified_name: &str) -> Option<ClassRef> {
        self.get(qualified_name).cloned()
    }
}

impl FromIterator<ClassRef> for ClassIndex {
    fn from_iter<I: IntoIterator<Item = ClassRef>>(iter: I) -> Self {
        let mut index = Self::new();
        for class in iter {
            index.insert(class);
        }
        index
    }
}
