//! Symbolic differentiation
//!
//! The derivative is built with the usual sum, product, quotient and chain
//! rules. The result is not simplified, so it is typically much larger than
//! the input.

use super::transform::Transformer;
use super::{
    abs, add, divide, multiply, number, sqrt, subtract, BinaryOperation, Expression, Function,
    FunctionCall, Number, Operator, Variable,
};

/// Differentiates a tree with respect to one variable
#[derive(Clone, Debug)]
pub struct Derivative {
    variable: String,
}

impl Derivative {
    /// Differentiate with respect to the variable called `variable`
    pub fn new<S: Into<String>>(variable: S) -> Derivative {
        Derivative {
            variable: variable.into(),
        }
    }

    /// The variable we are differentiating with respect to
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl Transformer for Derivative {
    fn transform_number(&mut self, _number: &Number) -> Expression {
        number(0.0)
    }

    fn transform_binary_operation(&mut self, binop: &BinaryOperation) -> Expression {
        let (u, v) = binop.operands();
        let du = u.transform(self);
        let dv = v.transform(self);

        match binop.operator() {
            Operator::Add => add(du, dv),
            Operator::Subtract => subtract(du, dv),
            // u' * v + u * v'
            Operator::Multiply => add(
                multiply(du, v.deep_copy()),
                multiply(u.deep_copy(), dv),
            ),
            // (u' * v - u * v') / (v * v)
            Operator::Divide => divide(
                subtract(multiply(du, v.deep_copy()), multiply(u.deep_copy(), dv)),
                multiply(v.deep_copy(), v.deep_copy()),
            ),
        }
    }

    fn transform_function_call(&mut self, call: &FunctionCall) -> Expression {
        let u = call.argument();
        let du = u.transform(self);

        match call.function() {
            // u' / (2 * sqrt(u))
            Function::Sqrt => divide(du, multiply(number(2.0), sqrt(u.deep_copy()))),
            // u' * u / abs(u)
            Function::Abs => divide(multiply(du, u.deep_copy()), abs(u.deep_copy())),
        }
    }

    fn transform_variable(&mut self, variable: &Variable) -> Expression {
        if variable.name() == self.variable {
            number(1.0)
        } else {
            number(0.0)
        }
    }
}

impl Expression {
    /// The derivative of this tree with respect to `variable`
    pub fn derivative(&self, variable: &str) -> Expression {
        self.transform(&mut Derivative::new(variable))
    }
}
