//! Infix rendering of expression trees
//!
//! Parentheses are placed so the nesting of operators can be read back from
//! the output. Numbers and variable names are written verbatim, so a variable
//! called `NaN` prints the same as a NaN literal.

use super::visit::Visitor;
use super::{BinaryOperation, Expression, ExpressionKind, FunctionCall, Number, Variable};
use std::fmt;

/// How eagerly the printer wraps binary operations in parentheses
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Parenthesization {
    /// Only where operator precedence and left associativity require it
    Minimal,
    /// Around every binary operation
    Full,
}

impl Default for Parenthesization {
    fn default() -> Parenthesization {
        Parenthesization::Minimal
    }
}

/// Walks a tree and accumulates its infix form
struct Printer {
    mode: Parenthesization,
    output: String,
}

impl Printer {
    fn new(mode: Parenthesization) -> Printer {
        Printer {
            mode,
            output: String::new(),
        }
    }

    /// Print an operand of `parent`, wrapping it if the operator nesting would
    /// be lost otherwise. Leaf text is written as-is.
    fn operand<'node>(&mut self, parent: &BinaryOperation, operand: &'node Expression, right: bool) {
        let wrap = match (self.mode, operand.kind()) {
            (Parenthesization::Full, _) => false,
            (Parenthesization::Minimal, ExpressionKind::BinaryOperation(child)) => {
                let child = child.operator().precedence();
                let parent = parent.operator().precedence();
                child < parent || (right && child == parent)
            }
            (Parenthesization::Minimal, _) => false,
        };

        if wrap {
            self.output.push('(');
        }
        self.visit_expression(operand);
        if wrap {
            self.output.push(')');
        }
    }
}

impl<'node> Visitor<'node> for Printer {
    fn visit_number(&mut self, number: &'node Number) {
        self.output.push_str(&number.value().to_string());
    }

    fn visit_binary_operation(&mut self, binop: &'node BinaryOperation) {
        let full = self.mode == Parenthesization::Full;
        if full {
            self.output.push('(');
        }

        self.operand(binop, binop.left(), false);
        self.output.push(' ');
        self.output.push(binop.operator().symbol());
        self.output.push(' ');
        self.operand(binop, binop.right(), true);

        if full {
            self.output.push(')');
        }
    }

    fn visit_function_call(&mut self, call: &'node FunctionCall) {
        self.output.push_str(call.name());
        self.output.push('(');
        self.super_function_call(call);
        self.output.push(')');
    }

    fn visit_variable(&mut self, variable: &'node Variable) {
        self.output.push_str(variable.name());
    }
}

impl Expression {
    /// Render this tree in infix form with the requested parenthesization
    pub fn display_with(&self, mode: Parenthesization) -> String {
        let mut printer = Printer::new(mode);
        printer.visit_expression(self);
        printer.output
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.display_with(Parenthesization::default()))
    }
}
