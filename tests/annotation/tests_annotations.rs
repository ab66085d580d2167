#![allow(clippy::unwrap_used)]

use rstest::rstest;
use uast::annotation::{Annotated, ClassIndex, ClassKind, ClassRef, ConstantValue};
use uast::qualified::matches_qualified;
use uast::render::{RenderOptions, render_block, render_string};
use uast::tree::{Literal, TreeBuilder};

#[rstest]
#[case(Literal::Null, ConstantValue::Null)]
#[case(Literal::Bool(false), ConstantValue::Bool(false))]
#[case(Literal::Int(-3), ConstantValue::Int(-3))]
#[case(Literal::Char('c'), ConstantValue::Char('c'))]
#[case(Literal::String("s".into()), ConstantValue::String("s".into()))]
fn test_literal_argument_value(#[case] literal: Literal, #[case] expected: ConstantValue) {
    let mut builder = TreeBuilder::new();
    let target = builder.simple_reference("target");
    let annotation = builder.annotation("test.Marker");
    let value = builder.literal(literal);
    builder.annotation_argument(annotation, "value", value).unwrap();
    builder.annotate(target, annotation).unwrap();
    let tree = builder.finish();

    let marker = tree
        .node(target)
        .unwrap()
        .find_annotation("test.Marker")
        .unwrap();
    assert_eq!(marker.value(None), Some(expected));
}

#[test]
fn test_enum_reference_argument() {
    // @Target(ElementType.TYPE, ElementType.METHOD)
    let mut builder = TreeBuilder::new();
    let target = builder.simple_reference("Marker");
    let annotation = builder.annotation("java.lang.annotation.Target");
    let element_type = builder.dotted("ElementType.TYPE").unwrap();
    let method = builder.dotted("ElementType.METHOD").unwrap();
    let array = builder.array([element_type, method]).unwrap();
    builder.annotation_argument(annotation, "value", array).unwrap();
    builder.annotate(target, annotation).unwrap();
    let tree = builder.finish();

    let node = tree.node(target).unwrap();
    let annotation = node.find_annotation("java.lang.annotation.Target").unwrap();
    let value = annotation.value(None).unwrap();
    assert_eq!(value.to_string(), "[ElementType.TYPE, ElementType.METHOD]");

    // the argument expressions are ordinary chains
    let argument = annotation.value_arguments().next().unwrap();
    let first = argument.expression().children().next().unwrap();
    assert!(matches_qualified(first, "ElementType.TYPE"));
}

#[test]
fn test_resolve_against_index() {
    let mut builder = TreeBuilder::new();
    let target = builder.simple_reference("field");
    let known = builder.annotation("javax.inject.Inject");
    let unknown = builder.annotation("com.example.Gone");
    let unresolved = builder.unresolved_annotation("Whatever");
    for annotation in [known, unknown, unresolved] {
        builder.annotate(target, annotation).unwrap();
    }
    let tree = builder.finish();

    let index: ClassIndex = [
        ClassRef::annotation("javax.inject.Inject"),
        ClassRef::new("javax.inject.Provider", ClassKind::Interface),
    ]
    .into_iter()
    .collect();

    let resolved: Vec<_> = tree
        .node(target)
        .unwrap()
        .annotations()
        .iter()
        .map(|annotation| annotation.resolve(&index).map(|class| class.name().to_string()))
        .collect();
    assert_eq!(resolved, vec![Some("Inject".to_string()), None, None]);
}

#[test]
fn test_render_annotated_chain() {
    let mut builder = TreeBuilder::new();
    let chain = builder.dotted("kotlin.io.println").unwrap();
    let annotation = builder.annotation("kotlin.jvm.JvmStatic");
    builder.annotate(chain, annotation).unwrap();
    let tree = builder.finish();

    let node = tree.node(chain).unwrap();
    assert_eq!(render_string(node), "@JvmStatic kotlin.io.println");
    assert_eq!(
        render_block(node, &RenderOptions::default()),
        "@JvmStatic\n\nkotlin.io.println"
    );
    // annotations do not change how the chain decomposes
    assert!(matches_qualified(node, "kotlin.io.println"));
}
