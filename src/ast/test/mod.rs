//! Tests for expression trees

use super::*;

mod walkers;

/// `abs(var * sqrt(32 - 16))`, the tree most of these tests poke at
fn sample_tree() -> Expression {
    abs(multiply(
        variable("var"),
        sqrt(subtract(number(32.0), number(16.0))),
    ))
}

#[test]
fn kind_reports_node_type() {
    crate::test::setup();

    let tree = sample_tree();
    match tree.kind() {
        ExpressionKind::FunctionCall(call) => {
            assert_eq!(call.function(), Function::Abs);
            match call.argument().kind() {
                ExpressionKind::BinaryOperation(binop) => {
                    assert_eq!(binop.operator(), Operator::Multiply)
                }
                other => panic!("Expected a multiplication, got {:?}", other),
            }
        }
        other => panic!("Expected a function call, got {:?}", other),
    }
}

#[test]
fn into_kind_unwraps() {
    let kind = number(2.5).into_kind();
    assert_eq!(kind, ExpressionKind::Number(Number::new(2.5)));
}
