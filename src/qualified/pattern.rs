//! Dotted name patterns such as `"com.example.Foo"`.

use crate::base::Name;
use crate::base::constants::QUALIFIED_SEPARATOR;

/// A dotted name split into segments.
///
/// Leading and trailing dots are trimmed before splitting. Nothing else is
/// normalized: `"a..b"` has an empty middle segment and `""` is a single
/// empty segment, neither of which can equal a real identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPattern<'p> {
    segments: Vec<&'p str>,
}

impl<'p> DottedPattern<'p> {
    pub fn parse(pattern: &'p str) -> Self {
        Self {
            segments: pattern
                .trim_matches(QUALIFIED_SEPARATOR)
                .split(QUALIFIED_SEPARATOR)
                .collect(),
        }
    }

    /// The segments in order. Never empty: `""` parses to one empty segment.
    pub fn segments(&self) -> &[&'p str] {
        &self.segments
    }

    /// Same segments, same length.
    pub fn matches(&self, path: &[Name]) -> bool {
        path.len() == self.segments.len()
            && self
                .segments
                .iter()
                .zip(path)
                .all(|(segment, identifier)| identifier.as_str() == *segment)
    }

    /// Every segment equals the path identifier at the same index.
    pub fn is_prefix_of(&self, path: &[Name]) -> bool {
        if path.len() < self.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(path)
            .all(|(segment, identifier)| identifier.as_str() == *segment)
    }

    /// Segments match the trailing identifiers of the path, compared from
    /// the end.
    pub fn is_suffix_of(&self, path: &[Name]) -> bool {
        if path.len() < self.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .rev()
            .zip(path.iter().rev())
            .all(|(segment, identifier)| identifier.as_str() == *segment)
    }
}
