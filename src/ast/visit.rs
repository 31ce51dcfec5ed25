//! Expression walkers
//!
//! Walkers traverse a tree without building a new one. Override the
//! `visit_*` methods for the node kinds you care about, and call the
//! corresponding `super_*` method when you wish to recurse into children.
//! Operands are always visited left before right.
//!
//! To build a new tree instead, implement
//! [`Transformer`](../transform/trait.Transformer.html).

use super::{BinaryOperation, Expression, ExpressionKind, FunctionCall, Number, Variable};

// This implementation is mostly inspired by the implementation of MIR visitors
// in rustc
macro_rules! make_expression_visitor {
    ($visitor_trait_name:ident, $($mutability:ident)?) => {
        /// See the module documentation for notes on using these, but the
        /// general convention is that you should override the `visit_*`
        /// methods, calling the corresponding `super_*` method when you wish to
        /// recurse.
        pub trait $visitor_trait_name <'node> {
            /// Recurse into an expression node
            fn visit_expression(&mut self, expression: &'node $($mutability)? Expression) {
                self.super_expression(expression);
            }

            /// Visit a `Number` node
            fn visit_number(&mut self, number: &'node $($mutability)? Number) {
                self.super_number(number);
            }

            /// Visit a `BinaryOperation` node
            fn visit_binary_operation(&mut self, binop: &'node $($mutability)? BinaryOperation) {
                self.super_binary_operation(binop);
            }

            /// Visit a `FunctionCall` node
            fn visit_function_call(&mut self, call: &'node $($mutability)? FunctionCall) {
                self.super_function_call(call);
            }

            /// Visit a `Variable` node
            fn visit_variable(&mut self, variable: &'node $($mutability)? Variable) {
                self.super_variable(variable);
            }

            /// Recursion implementation for `Number` nodes
            fn super_number(&mut self, _number: &'node $($mutability)? Number) {}

            /// Recursion implementation for `BinaryOperation` nodes
            fn super_binary_operation(&mut self, binop: &'node $($mutability)? BinaryOperation) {
                macro_rules! operands {
                    (mut) => (binop.operands_mut());
                    () => (binop.operands());
                }
                let (left, right) = operands!($($mutability)?);
                self.visit_expression(left);
                self.visit_expression(right);
            }

            /// Recursion implementation for `FunctionCall` nodes
            fn super_function_call(&mut self, call: &'node $($mutability)? FunctionCall) {
                macro_rules! argument {
                    (mut) => (call.argument_mut());
                    () => (call.argument());
                }
                self.visit_expression(argument!($($mutability)?));
            }

            /// Recursion implementation for `Variable` nodes
            fn super_variable(&mut self, _variable: &'node $($mutability)? Variable) {}

            /// Core recursion on expression nodes
            fn super_expression(&mut self, expression: &'node $($mutability)? Expression) {
                macro_rules! kind {
                    (mut) => (expression.kind_mut());
                    () => (expression.kind());
                }
                match kind!($($mutability)?) {
                    ExpressionKind::Number(number) => {
                        self.visit_number(number)
                    }
                    ExpressionKind::BinaryOperation(binop) => {
                        self.visit_binary_operation(binop)
                    }
                    ExpressionKind::FunctionCall(call) => {
                        self.visit_function_call(call)
                    }
                    ExpressionKind::Variable(variable) => {
                        self.visit_variable(variable)
                    }
                }
            }
        }
    }
}

make_expression_visitor!(Visitor,);
make_expression_visitor!(MutVisitor, mut);
