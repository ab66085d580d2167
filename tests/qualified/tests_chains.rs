#![allow(clippy::unwrap_used)]

use uast::qualified::{
    as_qualified_path, as_qualified_string, outermost_qualified, qualified_chain,
    qualified_parent_or_self,
};
use uast::tree::{ExprId, TreeBuilder};

use crate::helpers::tree_fixtures::{CallChain, chain_of, dotted_forest, path_of};

#[test]
fn test_decompose_dotted_chains() {
    let (tree, roots) = dotted_forest(&["x", "a.b", "java.util.concurrent.ConcurrentMap"]);
    let paths: Vec<_> = roots
        .iter()
        .map(|&root| path_of(tree.node(root).unwrap()).unwrap().join("."))
        .collect();
    assert_eq!(paths, vec!["x", "a.b", "java.util.concurrent.ConcurrentMap"]);
}

#[test]
fn test_decompose_call_chain_fails() {
    let chain = CallChain::build();
    assert_eq!(as_qualified_path(chain.node(chain.root)), None);
}

#[test]
fn test_decompose_right_nested_chain_fails() {
    // a.(b.c): selector is itself qualified
    let mut builder = TreeBuilder::new();
    let a = builder.simple_reference("a");
    let bc = builder.dotted("b.c").unwrap();
    let root = builder.qualified(a, bc).unwrap();
    let tree = builder.finish();

    assert_eq!(as_qualified_path(tree.node(root).unwrap()), None);
    assert_eq!(
        path_of(tree.node(bc).unwrap()),
        Some(vec!["b".to_string(), "c".to_string()])
    );
}

#[test]
fn test_qualified_string_of_sub_chain() {
    let (tree, roots) = dotted_forest(&["com.example.Foo.BAR"]);
    let root = tree.node(roots[0]).unwrap().as_qualified().unwrap();
    let inner = root.receiver().as_qualified().unwrap();

    assert_eq!(
        as_qualified_string(root).as_deref(),
        Some("com.example.Foo.BAR")
    );
    assert_eq!(as_qualified_string(inner).as_deref(), Some("com.example.Foo"));
}

#[test]
fn test_parent_or_self_from_selector_call() {
    let chain = CallChain::build();
    let another_call = chain.node(chain.another_call);

    // obj.call(param).anotherCall(param2) is the receiver of `.getter`, so
    // the walk stops there
    let expected = another_call.parent().unwrap();
    assert_eq!(qualified_parent_or_self(another_call), expected);
    assert_eq!(
        expected.as_qualified().unwrap().selector(),
        another_call
    );
}

#[test]
fn test_parent_or_self_from_getter_reaches_root() {
    let chain = CallChain::build();
    let getter = chain.node(chain.getter);
    assert_eq!(qualified_parent_or_self(getter), chain.node(chain.root));
}

#[test]
fn test_parent_or_self_from_receiver_is_self() {
    let chain = CallChain::build();
    let obj = chain.node(chain.obj);
    assert_eq!(qualified_parent_or_self(obj), obj);
}

#[test]
fn test_parent_or_self_of_argument_is_self() {
    let chain = CallChain::build();
    let param = chain.node(chain.param);
    assert_eq!(qualified_parent_or_self(param), param);
}

#[test]
fn test_outermost_from_every_leaf() {
    let chain = CallChain::build();
    let root = chain.node(chain.root);
    for leaf in [chain.obj, chain.call, chain.another_call, chain.getter] {
        let outermost = outermost_qualified(chain.node(leaf)).unwrap();
        assert_eq!(outermost.selector().parent(), Some(root));
    }
}

#[test]
fn test_outermost_of_argument_is_none() {
    // `param` sits in a call argument, whose parent is the call, not a chain
    let chain = CallChain::build();
    assert!(outermost_qualified(chain.node(chain.param)).is_none());
}

#[test]
fn test_full_chain() {
    let chain = CallChain::build();
    let expected = vec![
        chain.node(chain.obj),
        chain.node(chain.call),
        chain.node(chain.another_call),
        chain.node(chain.getter),
    ];
    for start in [chain.obj, chain.another_call, chain.root] {
        assert_eq!(qualified_chain(chain.node(start)), expected);
    }
    assert!(qualified_chain(chain.node(chain.param)).is_empty());
}

#[test]
fn test_chain_with_nested_qualified_argument() {
    // x.m(y.n): the argument chain is separate from the outer one
    let mut builder = TreeBuilder::new();
    let x = builder.simple_reference("x");
    let y = builder.simple_reference("y");
    let n = builder.simple_reference("n");
    let yn = chain_of(&mut builder, &[y, n]);
    let m = builder.call(Some("m"), [yn]).unwrap();
    let root = chain_of(&mut builder, &[x, m]);
    let tree = builder.finish();

    let ids = |start: ExprId| {
        qualified_chain(tree.node(start).unwrap())
            .into_iter()
            .map(|node| node.id())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(n), vec![y, n]);
    assert_eq!(ids(m), vec![x, m]);
    assert_eq!(ids(root), vec![x, m]);

    // `n` is the selector of `y.n`, whose parent is the call
    let yn_node = tree.node(yn).unwrap();
    assert_eq!(qualified_parent_or_self(tree.node(n).unwrap()), yn_node);
}
