#![allow(clippy::unwrap_used)]

use rstest::rstest;
use uast::qualified::{
    DottedPattern, ends_with_qualified, matches_qualified, starts_with_qualified,
};
use uast::tree::TreeBuilder;

use crate::helpers::tree_fixtures::{dotted_forest, path_of};

#[rstest]
#[case("a.b.c", "a.b.c", true)]
#[case("a.b.c", ".a.b.c.", true)]
#[case("a.b.c", "a.b", false)]
#[case("a.b.c", "a.b.c.d", false)]
#[case("a.b.c", "a.x.c", false)]
#[case("a", "a", true)]
#[case("a", "b", false)]
#[case("a.b", "", false)]
fn test_matches_qualified(#[case] chain: &str, #[case] pattern: &str, #[case] expected: bool) {
    let (tree, roots) = dotted_forest(&[chain]);
    let node = tree.node(roots[0]).unwrap();
    assert_eq!(
        matches_qualified(node, pattern),
        expected,
        "{chain} vs {pattern}"
    );
}

#[rstest]
#[case("java.util.List", "java", true)]
#[case("java.util.List", "java.util", true)]
#[case("java.util.List", "java.util.List", true)]
#[case("java.util.List", "util", false)]
#[case("java.util.List", "java.util.List.Entry", false)]
#[case("java.util.List", "jav", false)]
#[case("java.util.List", "", false)]
fn test_starts_with_qualified(
    #[case] chain: &str,
    #[case] pattern: &str,
    #[case] expected: bool,
) {
    let (tree, roots) = dotted_forest(&[chain]);
    let node = tree.node(roots[0]).unwrap();
    assert_eq!(starts_with_qualified(node, pattern), expected);
}

#[rstest]
#[case("java.util.List", "List", true)]
#[case("java.util.List", "util.List", true)]
#[case("java.util.List", "java.util.List", true)]
#[case("java.util.List", "java", false)]
#[case("java.util.List", "other.java.util.List", false)]
#[case("java.util.List", "ist", false)]
#[case("java.util.List", "", false)]
fn test_ends_with_qualified(#[case] chain: &str, #[case] pattern: &str, #[case] expected: bool) {
    let (tree, roots) = dotted_forest(&[chain]);
    let node = tree.node(roots[0]).unwrap();
    assert_eq!(ends_with_qualified(node, pattern), expected);
}

#[test]
fn test_empty_segment_matches_empty_identifier() {
    // Patterns are split literally, so `a..b` has an empty middle segment
    let (tree, roots) = dotted_forest(&["a..b"]);
    let node = tree.node(roots[0]).unwrap();

    assert_eq!(
        path_of(node),
        Some(vec!["a".to_string(), String::new(), "b".to_string()])
    );
    assert!(matches_qualified(node, "a..b"));
    assert!(!matches_qualified(node, "a.b"));
}

#[test]
fn test_non_path_never_matches() {
    // f().x
    let mut builder = TreeBuilder::new();
    let call = builder.call(Some("f"), []).unwrap();
    let x = builder.simple_reference("x");
    let chain = builder.qualified(call, x).unwrap();
    let tree = builder.finish();
    let node = tree.node(chain).unwrap();

    assert!(!matches_qualified(node, "f.x"));
    assert!(!starts_with_qualified(node, "f"));
    assert!(!ends_with_qualified(node, "x"));
}

#[test]
fn test_literal_never_matches() {
    let mut builder = TreeBuilder::new();
    let literal = builder.literal("a.b");
    let tree = builder.finish();

    assert!(!matches_qualified(tree.node(literal).unwrap(), "a.b"));
}

#[rstest]
#[case("", &[""])]
#[case("a", &["a"])]
#[case("..a.b..", &["a", "b"])]
#[case("a..b", &["a", "", "b"])]
fn test_pattern_segments(#[case] pattern: &str, #[case] expected: &[&str]) {
    assert_eq!(DottedPattern::parse(pattern).segments(), expected);
}
