//! Golden snapshot tests: exact DOT output for small IR shapes.
//!
//! These pin the emission order and the record grammar; a failure here means
//! the output format changed, which downstream layout tooling will notice.

use irviz::ir::{IrArena, NodeRef, StmtNode};

use crate::common::export_to_string;

#[test]
fn golden_single_literal() {
    let mut arena = IrArena::new();
    let root = arena.int(16);

    let dot = export_to_string(&arena, root.into());

    let expected = "\
digraph G {
node_0 [ label = \"{{<port>IntImm}|{value: 16}}\" shape = \"record\" ];
}
";
    assert_eq!(dot, expected);
}

#[test]
fn golden_addition_of_two_literals() {
    let mut arena = IrArena::new();
    let a = arena.int(1);
    let b = arena.int(2);
    let root = arena.add(a, b);

    let dot = export_to_string(&arena, root.into());

    let expected = "\
digraph G {
node_0 [ label = \"{{<port>IntImm}|{value: 1}}\" shape = \"record\" ];
node_1 [ label = \"{{<port>IntImm}|{value: 2}}\" shape = \"record\" ];
node_2 [ label = \"{{<port>Add}|{<a>a|<b>b}}\" shape = \"record\" ];
node_2:a -> node_0
node_2:b -> node_1
}
";
    assert_eq!(dot, expected);
}

#[test]
fn golden_shared_operand_addition() {
    let mut arena = IrArena::new();
    let shared = arena.int(7);
    let root = arena.add(shared, shared);

    let dot = export_to_string(&arena, root.into());

    let expected = "\
digraph G {
node_0 [ label = \"{{<port>IntImm}|{value: 7}}\" shape = \"record\" ];
node_1 [ label = \"{{<port>Add}|{<a>a|<b>b}}\" shape = \"record\" ];
node_1:a -> node_0
node_1:b -> node_0
}
";
    assert_eq!(dot, expected);
}

#[test]
fn golden_conditional_without_else() {
    let mut arena = IrArena::new();
    let condition = arena.var("c");
    let value = arena.int(1);
    let then_case = arena.push_stmt(StmtNode::Evaluate { value });
    let root = arena.push_stmt(StmtNode::IfThenElse {
        condition,
        then_case,
        else_case: None,
    });

    let dot = export_to_string(&arena, NodeRef::Stmt(root));

    let expected = "\
digraph G {
node_0 [ label = \"{{<port>Variable}|{name: 'c'}}\" shape = \"record\" ];
node_1 [ label = \"{{<port>IntImm}|{value: 1}}\" shape = \"record\" ];
node_2 [ label = \"{{<port>Evaluate}|{<value>value}}\" shape = \"record\" ];
node_2:value -> node_1
node_3 [ label = \"{{<port>IfThenElse}|{<condition>condition|<then_case>then_case}}\" shape = \"record\" ];
node_3:condition -> node_0
node_3:then_case -> node_2
}
";
    assert_eq!(dot, expected);
}

#[test]
fn golden_for_loop_over_store() {
    let mut arena = IrArena::new();
    let min = arena.int(0);
    let extent = arena.int(8);
    let predicate = arena.int(1);
    let value = arena.var("v");
    let index = arena.var("i");
    let body = arena.push_stmt(StmtNode::Store {
        name: "buf".to_string(),
        predicate,
        value,
        index,
    });
    let root = arena.push_stmt(StmtNode::For {
        name: "i".to_string(),
        min,
        extent,
        body,
    });

    let dot = export_to_string(&arena, NodeRef::Stmt(root));

    let expected = "\
digraph G {
node_0 [ label = \"{{<port>IntImm}|{value: 0}}\" shape = \"record\" ];
node_1 [ label = \"{{<port>IntImm}|{value: 8}}\" shape = \"record\" ];
node_2 [ label = \"{{<port>IntImm}|{value: 1}}\" shape = \"record\" ];
node_3 [ label = \"{{<port>Variable}|{name: 'v'}}\" shape = \"record\" ];
node_4 [ label = \"{{<port>Variable}|{name: 'i'}}\" shape = \"record\" ];
node_5 [ label = \"{{<port>Store}|{name: 'buf'|<predicate>predicate|<value>value|<index>index}}\" shape = \"record\" ];
node_5:predicate -> node_2
node_5:value -> node_3
node_5:index -> node_4
node_6 [ label = \"{{<port>For}|{name: 'i'|<min>min|<extent>extent|<body>body}}\" shape = \"record\" ];
node_6:min -> node_0
node_6:extent -> node_1
node_6:body -> node_5
}
";
    assert_eq!(dot, expected);
}
