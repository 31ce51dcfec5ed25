//! Numeric evaluation of expression trees
//!
//! Evaluation never fails. Division by zero and square roots of negative
//! numbers produce infinities and NaN, the same as plain `f64` arithmetic.

use crate::ast::{BinaryOperation, Expression, ExpressionKind, FunctionCall, Number, Variable};

impl Expression {
    /// Evaluate this tree. Nothing is cached, so every call walks the whole
    /// tree again.
    pub fn evaluate(&self) -> f64 {
        match self.kind() {
            ExpressionKind::Number(n) => n.evaluate(),
            ExpressionKind::BinaryOperation(b) => b.evaluate(),
            ExpressionKind::FunctionCall(c) => c.evaluate(),
            ExpressionKind::Variable(v) => v.evaluate(),
        }
    }
}

impl Number {
    /// A literal evaluates to itself
    pub fn evaluate(&self) -> f64 {
        self.value()
    }
}

impl BinaryOperation {
    /// Evaluate the left operand, then the right one, then combine them
    pub fn evaluate(&self) -> f64 {
        let left = self.left().evaluate();
        let right = self.right().evaluate();
        let result = self.operator().apply(left, right);
        if !result.is_finite() && left.is_finite() && right.is_finite() {
            debug!(
                "{} {} {} produced non-finite result {}",
                left,
                self.operator().symbol(),
                right,
                result
            );
        }
        result
    }
}

impl FunctionCall {
    /// Evaluate the argument and apply the function to it
    pub fn evaluate(&self) -> f64 {
        let argument = self.argument().evaluate();
        let result = self.function().apply(argument);
        if result.is_nan() && !argument.is_nan() {
            debug!("{}({}) produced NaN", self.name(), argument);
        }
        result
    }
}

impl Variable {
    /// Variables are never bound to anything, so they always evaluate to zero
    pub fn evaluate(&self) -> f64 {
        0.0
    }
}
