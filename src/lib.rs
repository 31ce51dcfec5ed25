/* Arithmos's main file
Copyright (C) 2026 The Arithmos developers
Arithmos is free software; you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation; either version 3 of the License, or (at your option) any later
version.

Arithmos is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE.  See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
this program.  If not, see <http://www.gnu.org/licenses/>.  */

//! Arithmos models arithmetic expressions as a syntax tree.
//!
//! Trees are built bottom-up from the constructors in [`ast`](ast/index.html),
//! and can then be evaluated directly or handed to a
//! [`Transformer`](ast/transform/trait.Transformer.html), which rebuilds the
//! tree one node kind at a time. New tree-wide operations are added by
//! writing new transformers (or [walkers](ast/visit/index.html)), never by
//! touching the node types.
#![warn(missing_docs)]

extern crate fxhash;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// Internal macros for use in test assertions
#[cfg(test)]
#[macro_use]
mod test_macros;

pub mod ast;
mod eval;

pub use crate::ast::transform::{CopySyntaxTree, Transformer};
pub use crate::ast::{Expression, ExpressionKind, Function, Operator};

use std::fmt;

/// Which operand of a binary operation we are talking about
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The left-hand operand
    Left,
    /// The right-hand operand
    Right,
}

/// Represents all the things that can go wrong while building an expression
/// tree. A failed construction never produces a node.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstructionError {
    /// A binary operation was built without one of its operands
    MissingOperand(Side),

    /// A function call was built without an argument
    MissingArgument,

    /// A function call named something other than `sqrt` or `abs`. The
    /// offending name is included
    InvalidFunctionName(String),

    /// An operator was requested by a symbol that isn't one of `+ - * /`
    InvalidOperator(char),
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ConstructionError::MissingOperand(Side::Left) => {
                write!(f, "binary operation is missing its left operand")
            }
            ConstructionError::MissingOperand(Side::Right) => {
                write!(f, "binary operation is missing its right operand")
            }
            ConstructionError::MissingArgument => write!(f, "function call is missing its argument"),
            ConstructionError::InvalidFunctionName(name) => {
                write!(f, "unknown function {:?}", name)
            }
            ConstructionError::InvalidOperator(symbol) => write!(f, "unknown operator {:?}", symbol),
        }
    }
}

impl failure::Fail for ConstructionError {}
