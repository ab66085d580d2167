//! Constants shared by the tree, rendering and annotation modules.

/// Rendered in place of a name the underlying AST did not provide.
pub const ERROR_NAME: &str = "<error>";

/// Line separator used by log and render output.
pub const LINE_SEPARATOR: &str = "\n";

/// Annotation attribute read when no attribute name is given.
pub const DEFAULT_ATTRIBUTE_NAME: &str = "value";

/// Separator between segments of a dotted name.
pub const QUALIFIED_SEPARATOR: char = '.';
