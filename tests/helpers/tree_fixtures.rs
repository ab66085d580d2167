//! Expression trees shared across integration tests.

#![allow(dead_code)]

use uast::qualified::as_qualified_path;
use uast::tree::{ExprId, ExprNode, TreeBuilder, UastTree};

/// Path of `node` as plain strings, for compact assertions.
pub fn path_of(node: ExprNode<'_>) -> Option<Vec<String>> {
    as_qualified_path(node).map(|path| path.iter().map(|name| name.to_string()).collect())
}

/// Build a left-nested chain over already built parts: `parts[0].parts[1]...`.
pub fn chain_of(builder: &mut TreeBuilder, parts: &[ExprId]) -> ExprId {
    let mut chain = parts[0];
    for &part in &parts[1..] {
        chain = builder.qualified(chain, part).unwrap();
    }
    chain
}

/// `obj.call(param).anotherCall(param2).getter`
pub struct CallChain {
    pub tree: UastTree,
    pub root: ExprId,
    pub obj: ExprId,
    pub call: ExprId,
    pub param: ExprId,
    pub another_call: ExprId,
    pub getter: ExprId,
}

impl CallChain {
    pub fn build() -> Self {
        let mut builder = TreeBuilder::new();
        let obj = builder.simple_reference("obj");
        let param = builder.simple_reference("param");
        let call = builder.call(Some("call"), [param]).unwrap();
        let param2 = builder.simple_reference("param2");
        let another_call = builder.call(Some("anotherCall"), [param2]).unwrap();
        let getter = builder.simple_reference("getter");
        let root = chain_of(&mut builder, &[obj, call, another_call, getter]);
        Self {
            tree: builder.finish(),
            root,
            obj,
            call,
            param,
            another_call,
            getter,
        }
    }

    pub fn node(&self, id: ExprId) -> ExprNode<'_> {
        self.tree.node(id).unwrap()
    }
}

/// A tree holding one left-nested chain per dotted path, in order.
pub fn dotted_forest(paths: &[&str]) -> (UastTree, Vec<ExprId>) {
    let mut builder = TreeBuilder::new();
    let roots = paths
        .iter()
        .map(|path| builder.dotted(path).unwrap())
        .collect();
    (builder.finish(), roots)
}
