//! Various proptest generators

use crate::ast::{BinaryOperation, Expression, Function, FunctionCall, Number, Operator, Variable};
use proptest::prelude::*;
use std::f64;

/// Short lowercase variable names
pub fn variable_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,3}"
}

/// Any of the four operators
pub fn arb_operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Any of the built-in functions
pub fn arb_function() -> impl Strategy<Value = Function> {
    prop_oneof![Just(Function::Sqrt), Just(Function::Abs)]
}

/// Literal values, mostly ordinary but with the special ones mixed in
pub fn arb_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        12 => -1.0e3..1.0e3f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
        1 => Just(-0.0),
    ]
}

/// Arbitrary trees at most `depth` levels of nesting deep
pub fn arb_expression(depth: u32) -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        arb_value().prop_map(|v| Expression::from(Number::new(v))),
        variable_name().prop_map(|name| Expression::from(Variable::new(name))),
    ];
    leaf.prop_recursive(depth, 64, 2, |inner| {
        prop_oneof![
            (inner.clone(), arb_operator(), inner.clone()).prop_map(|(left, op, right)| {
                Expression::from(BinaryOperation::new(left, op, right))
            }),
            (arb_function(), inner)
                .prop_map(|(function, arg)| Expression::from(FunctionCall::new(function, arg))),
        ]
    })
}
