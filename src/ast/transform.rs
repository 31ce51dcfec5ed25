//! Whole-tree transformations
//!
//! A [`Transformer`](trait.Transformer.html) has one handler per node kind.
//! [`Expression::transform`](../struct.Expression.html#method.transform)
//! hands each node to the handler for its kind, and the handler decides what
//! new tree to build in its place, usually by transforming the children first.
//! Adding an operation means writing a new transformer; the node types never
//! change.

use super::{BinaryOperation, Expression, ExpressionKind, FunctionCall, Number, Variable};

/// An operation that builds a new tree out of an existing one.
/// Each handler receives the node read-only and returns a freshly built
/// expression, which the caller owns.
pub trait Transformer {
    /// Build the replacement for a `Number` node
    fn transform_number(&mut self, number: &Number) -> Expression;

    /// Build the replacement for a `BinaryOperation` node
    fn transform_binary_operation(&mut self, binop: &BinaryOperation) -> Expression;

    /// Build the replacement for a `FunctionCall` node
    fn transform_function_call(&mut self, call: &FunctionCall) -> Expression;

    /// Build the replacement for a `Variable` node
    fn transform_variable(&mut self, variable: &Variable) -> Expression;
}

impl Expression {
    /// Hand this node to the transformer handler for its kind, and return
    /// whatever that handler builds. The tree is not modified.
    pub fn transform<T: Transformer + ?Sized>(&self, transformer: &mut T) -> Expression {
        match self.kind() {
            ExpressionKind::Number(number) => transformer.transform_number(number),
            ExpressionKind::BinaryOperation(binop) => transformer.transform_binary_operation(binop),
            ExpressionKind::FunctionCall(call) => transformer.transform_function_call(call),
            ExpressionKind::Variable(variable) => transformer.transform_variable(variable),
        }
    }

    /// Build an independent copy of this tree, node by node
    pub fn deep_copy(&self) -> Expression {
        self.transform(&mut CopySyntaxTree)
    }
}

/// Rebuilds a tree exactly as it is. Every node of the result is newly
/// allocated, even though nothing changes.
#[derive(Copy, Clone, Debug, Default)]
pub struct CopySyntaxTree;

impl Transformer for CopySyntaxTree {
    fn transform_number(&mut self, number: &Number) -> Expression {
        Number::new(number.value()).into()
    }

    fn transform_binary_operation(&mut self, binop: &BinaryOperation) -> Expression {
        let left = binop.left().transform(self);
        let right = binop.right().transform(self);
        trace!("Copied operands of {:?}", binop.operator());
        BinaryOperation::new(left, binop.operator(), right).into()
    }

    fn transform_function_call(&mut self, call: &FunctionCall) -> Expression {
        let argument = call.argument().transform(self);
        FunctionCall::new(call.function(), argument).into()
    }

    fn transform_variable(&mut self, variable: &Variable) -> Expression {
        Variable::new(variable.name()).into()
    }
}
