//! This module contains the types used to represent an arithmetic expression
//! tree. Evaluating a tree produces an `f64`; transforming it with a
//! [`Transformer`](transform/trait.Transformer.html) produces a new tree.

use crate::{ConstructionError, Side};

pub mod derivative;
pub mod display;
pub mod transform;
pub mod visit;

mod function;
mod walkers;

pub use self::function::Function;

#[cfg(test)]
mod test;
#[cfg(test)]
pub mod proptest;

/// A node in an expression tree.
/// Every node owns its kind on the heap, so each node has its own identity
/// and owning a node means owning the whole subtree below it.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    kind: Box<ExpressionKind>,
}

impl Expression {
    /// Get the contents of this node. This also tells you the type of node
    pub fn kind(&self) -> &ExpressionKind {
        &self.kind
    }

    /// Get the contents of this node. This also tells you the type of node
    pub fn kind_mut(&mut self) -> &mut ExpressionKind {
        &mut self.kind
    }

    /// Unwrap the node into its kind
    pub fn into_kind(self) -> ExpressionKind {
        *self.kind
    }
}

/// Represents the different types of expression nodes
#[derive(Clone, Debug, PartialEq)]
pub enum ExpressionKind {
    /// A numeric literal
    Number(Number),
    /// Two operands joined by an arithmetic operator
    BinaryOperation(BinaryOperation),
    /// One of the built-in functions applied to an argument
    FunctionCall(FunctionCall),
    /// A named variable
    Variable(Variable),
}

impl From<ExpressionKind> for Expression {
    fn from(kind: ExpressionKind) -> Expression {
        Expression {
            kind: Box::new(kind),
        }
    }
}

/// The arithmetic operators a `BinaryOperation` can apply
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// Look up an operator by its symbol
    pub fn from_symbol(symbol: char) -> Result<Operator, ConstructionError> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => {
                debug!("Rejecting unknown operator symbol {:?}", other);
                Err(ConstructionError::InvalidOperator(other))
            }
        }
    }

    /// The symbol used to write this operator
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Binding strength of the operator. Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    /// Apply the operator to two already-evaluated operands
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }
}

/// A numeric literal
#[derive(Copy, Clone, Debug)]
pub struct Number {
    value: f64,
}

/// Literals compare by bit pattern, so a NaN literal equals itself and `0.0`
/// differs from `-0.0`
impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        self.value.to_bits() == other.value.to_bits()
    }
}

impl Number {
    /// Create a new number
    pub fn new(value: f64) -> Number {
        Number { value }
    }

    /// The value of this literal
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Two operands joined by an operator
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryOperation {
    left: Expression,
    operator: Operator,
    right: Expression,
}

impl BinaryOperation {
    /// Create a new binary operation out of two finished subtrees
    pub fn new(left: Expression, operator: Operator, right: Expression) -> BinaryOperation {
        BinaryOperation {
            left,
            operator,
            right,
        }
    }

    /// Create a new binary operation where either operand may be absent.
    /// Fails (reporting the left side first) if one of them is.
    pub fn try_new(
        left: Option<Expression>,
        operator: Operator,
        right: Option<Expression>,
    ) -> Result<BinaryOperation, ConstructionError> {
        match (left, right) {
            (Some(left), Some(right)) => Ok(BinaryOperation::new(left, operator, right)),
            (None, _) => {
                debug!("Rejecting {:?} without a left operand", operator);
                Err(ConstructionError::MissingOperand(Side::Left))
            }
            (_, None) => {
                debug!("Rejecting {:?} without a right operand", operator);
                Err(ConstructionError::MissingOperand(Side::Right))
            }
        }
    }

    /// The left operand
    pub fn left(&self) -> &Expression {
        &self.left
    }

    /// The right operand
    pub fn right(&self) -> &Expression {
        &self.right
    }

    /// Both operands, left first
    pub fn operands(&self) -> (&Expression, &Expression) {
        (&self.left, &self.right)
    }

    /// Both operands, left first
    pub fn operands_mut(&mut self) -> (&mut Expression, &mut Expression) {
        (&mut self.left, &mut self.right)
    }

    /// The operator joining the operands
    pub fn operator(&self) -> Operator {
        self.operator
    }
}

/// A call to one of the built-in functions
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCall {
    function: Function,
    argument: Expression,
}

impl FunctionCall {
    /// Create a new call to a known function
    pub fn new(function: Function, argument: Expression) -> FunctionCall {
        FunctionCall { function, argument }
    }

    /// Create a new function call from a function name. Only `sqrt` and `abs`
    /// are accepted.
    pub fn from_name(name: &str, argument: Expression) -> Result<FunctionCall, ConstructionError> {
        Ok(FunctionCall::new(name.parse::<Function>()?, argument))
    }

    /// Create a new function call where the argument may be absent. An unknown
    /// name is reported before a missing argument.
    pub fn try_new(
        name: &str,
        argument: Option<Expression>,
    ) -> Result<FunctionCall, ConstructionError> {
        let function: Function = name.parse()?;
        match argument {
            Some(argument) => Ok(FunctionCall::new(function, argument)),
            None => {
                debug!("Rejecting call to {} without an argument", name);
                Err(ConstructionError::MissingArgument)
            }
        }
    }

    /// The function being called
    pub fn function(&self) -> Function {
        self.function
    }

    /// Name of the function being called
    pub fn name(&self) -> &'static str {
        self.function.name()
    }

    /// The argument passed to the function
    pub fn argument(&self) -> &Expression {
        &self.argument
    }

    /// The argument passed to the function
    pub fn argument_mut(&mut self) -> &mut Expression {
        &mut self.argument
    }
}

/// A named variable
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
}

impl Variable {
    /// Create a new variable
    pub fn new<S: Into<String>>(name: S) -> Variable {
        Variable { name: name.into() }
    }

    /// Name of the variable
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<Number> for Expression {
    fn from(v: Number) -> Expression {
        ExpressionKind::Number(v).into()
    }
}

impl From<BinaryOperation> for Expression {
    fn from(v: BinaryOperation) -> Expression {
        ExpressionKind::BinaryOperation(v).into()
    }
}

impl From<FunctionCall> for Expression {
    fn from(v: FunctionCall) -> Expression {
        ExpressionKind::FunctionCall(v).into()
    }
}

impl From<Variable> for Expression {
    fn from(v: Variable) -> Expression {
        ExpressionKind::Variable(v).into()
    }
}

/// Create a new number node
#[inline]
pub fn number(value: f64) -> Expression {
    Number::new(value).into()
}

/// Create a new variable node
#[inline]
pub fn variable<S: Into<String>>(name: S) -> Expression {
    Variable::new(name).into()
}

/// Create a new binary operation node
#[inline]
pub fn binary_operation(left: Expression, operator: Operator, right: Expression) -> Expression {
    BinaryOperation::new(left, operator, right).into()
}

/// Create a new binary operation node, naming the operator by its symbol
#[inline]
pub fn binary_operation_symbol(
    left: Expression,
    symbol: char,
    right: Expression,
) -> Result<Expression, ConstructionError> {
    Ok(binary_operation(left, Operator::from_symbol(symbol)?, right))
}

/// Create a new `+` node
#[inline]
pub fn add(left: Expression, right: Expression) -> Expression {
    binary_operation(left, Operator::Add, right)
}

/// Create a new `-` node
#[inline]
pub fn subtract(left: Expression, right: Expression) -> Expression {
    binary_operation(left, Operator::Subtract, right)
}

/// Create a new `*` node
#[inline]
pub fn multiply(left: Expression, right: Expression) -> Expression {
    binary_operation(left, Operator::Multiply, right)
}

/// Create a new `/` node
#[inline]
pub fn divide(left: Expression, right: Expression) -> Expression {
    binary_operation(left, Operator::Divide, right)
}

/// Create a new function call node. Fails if `name` isn't a known function.
#[inline]
pub fn function_call(name: &str, argument: Expression) -> Result<Expression, ConstructionError> {
    FunctionCall::from_name(name, argument).map(Expression::from)
}

/// Create a new `sqrt` node
#[inline]
pub fn sqrt(argument: Expression) -> Expression {
    FunctionCall::new(Function::Sqrt, argument).into()
}

/// Create a new `abs` node
#[inline]
pub fn abs(argument: Expression) -> Expression {
    FunctionCall::new(Function::Abs, argument).into()
}
