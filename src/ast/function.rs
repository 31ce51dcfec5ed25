//! The closed set of functions a `FunctionCall` may name

use crate::ConstructionError;
use fxhash::FxHashMap;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref FUNCTIONS_BY_NAME: FxHashMap<&'static str, Function> = {
        let mut table = FxHashMap::default();
        for function in Function::ALL.iter() {
            table.insert(function.name(), *function);
        }
        table
    };
}

/// A built-in function
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    /// Square root. Negative arguments produce NaN
    Sqrt,
    /// Absolute value
    Abs,
}

impl Function {
    /// Every function that can be called
    pub const ALL: [Function; 2] = [Function::Sqrt, Function::Abs];

    /// The name this function is called by
    pub fn name(self) -> &'static str {
        match self {
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
        }
    }

    /// Apply the function to an already-evaluated argument
    pub fn apply(self, argument: f64) -> f64 {
        match self {
            Function::Sqrt => argument.sqrt(),
            Function::Abs => argument.abs(),
        }
    }
}

impl FromStr for Function {
    type Err = ConstructionError;

    fn from_str(name: &str) -> Result<Function, ConstructionError> {
        match FUNCTIONS_BY_NAME.get(name) {
            Some(function) => Ok(*function),
            None => {
                debug!("Rejecting call to unknown function {:?}", name);
                Err(ConstructionError::InvalidFunctionName(name.into()))
            }
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
